use crate::types::budget::{Budget, CreateBudgetRequest, UpdateBudgetRequest};
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
    pub async fn list(&self) -> Result<Vec<Budget>, Error> {
        self.api
            .send_api::<(), (), Vec<Budget>>(&ApiRequest {
                method: Method::GET,
                path: "/budgets".into(),
                parameters: None,
                input: None,
                encoding: None,
            })
            .await?
            .into_data()
    }
    pub async fn get(&self, id: &str) -> Result<Budget, Error> {
        self.api
            .send_api::<(), (), Budget>(&ApiRequest {
                method: Method::GET,
                path: format!("/budgets/{id}"),
                parameters: None,
                input: None,
                encoding: None,
            })
            .await?
            .into_data()
    }
    /// Returns the id of the created budget.
    pub async fn create(&self, input: CreateBudgetRequest) -> Result<String, Error> {
        self.api
            .send_api::<(), _, String>(&ApiRequest {
                method: Method::POST,
                path: "/budgets".into(),
                parameters: None,
                input: Some(input),
                encoding: Some("application/json".into()),
            })
            .await?
            .into_data()
    }
    pub async fn update(&self, id: &str, input: UpdateBudgetRequest) -> Result<String, Error> {
        self.api
            .send_api::<(), _, String>(&ApiRequest {
                method: Method::PUT,
                path: format!("/budgets/{id}"),
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
                path: format!("/budgets/{id}"),
                parameters: None,
                input: None,
                encoding: None,
            })
            .await?;
        Ok(())
    }
}
