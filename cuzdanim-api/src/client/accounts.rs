use crate::types::account::{Account, CreateAccountRequest, UpdateAccountRequest};
use cuzdanim_http::{ApiClient, ApiRequest, Error};
use http::Method;
use std::sync::Arc;

pub struct Service<T>
where
    T: ApiClient + Send + Sync,
{
    api: Arc<T>,
}

impl<T> Service<T>
where
    T: ApiClient + Send + Sync,
{
    pub fn new(api: Arc<T>) -> Self {
        Self { api }
    }
    pub async fn list(&self) -> Result<Vec<Account>, Error> {
        self.api
            .send_api::<(), (), Vec<Account>>(&ApiRequest {
                method: Method::GET,
                path: "/accounts".into(),
                parameters: None,
                input: None,
                encoding: None,
            })
            .await?
            .into_data()
    }
    /// Returns the id of the created account.
    pub async fn create(&self, input: CreateAccountRequest) -> Result<String, Error> {
        self.api
            .send_api::<(), _, String>(&ApiRequest {
                method: Method::POST,
                path: "/accounts".into(),
                parameters: None,
                input: Some(input),
                encoding: Some("application/json".into()),
            })
            .await?
            .into_data()
    }
    pub async fn update(&self, id: &str, input: UpdateAccountRequest) -> Result<String, Error> {
        self.api
            .send_api::<(), _, String>(&ApiRequest {
                method: Method::PUT,
                path: format!("/accounts/{id}"),
                parameters: None,
                input: Some(input),
                encoding: Some("application/json".into()),
            })
            .await?
            .into_data()
    }
    pub async fn delete(&self, id: &str) -> Result<(), Error> {
        self.api
            .send_api::<(), (), String>(&ApiRequest {
                method: Method::DELETE,
                path: format!("/accounts/{id}"),
                parameters: None,
                input: None,
                encoding: None,
            })
            .await?;
        Ok(())
    }
}
