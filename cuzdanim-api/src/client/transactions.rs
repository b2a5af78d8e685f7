use crate::types::transaction::{
    CreateTransactionRequest, DateRangeParams, Transaction, UpdateTransactionRequest,
};
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
    /// List transactions, optionally restricted to a date range.
    pub async fn list(&self, params: DateRangeParams) -> Result<Vec<Transaction>, Error> {
        self.api
            .send_api::<_, (), Vec<Transaction>>(&ApiRequest {
                method: Method::GET,
                path: "/transactions".into(),
                parameters: Some(params),
                input: None,
                encoding: None,
            })
            .await?
            .into_data()
    }
    pub async fn get(&self, id: &str) -> Result<Transaction, Error> {
        self.api
            .send_api::<(), (), Transaction>(&ApiRequest {
                method: Method::GET,
                path: format!("/transactions/{id}"),
                parameters: None,
                input: None,
                encoding: None,
            })
            .await?
            .into_data()
    }
    /// Returns the id of the created transaction.
    pub async fn create(&self, input: CreateTransactionRequest) -> Result<String, Error> {
        self.api
            .send_api::<(), _, String>(&ApiRequest {
                method: Method::POST,
                path: "/transactions".into(),
                parameters: None,
                input: Some(input),
                encoding: Some("application/json".into()),
            })
            .await?
            .into_data()
    }
    pub async fn update(&self, id: &str, input: UpdateTransactionRequest) -> Result<String, Error> {
        self.api
            .send_api::<(), _, String>(&ApiRequest {
                method: Method::PUT,
                path: format!("/transactions/{id}"),
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
                path: format!("/transactions/{id}"),
                parameters: None,
                input: None,
                encoding: None,
            })
            .await?;
        Ok(())
    }
}
