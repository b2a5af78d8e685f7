use crate::types::goal::{AddContributionRequest, CreateGoalRequest, Goal, UpdateGoalRequest};
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
    pub async fn list(&self) -> Result<Vec<Goal>, Error> {
        self.api
            .send_api::<(), (), Vec<Goal>>(&ApiRequest {
                method: Method::GET,
                path: "/goals".into(),
                parameters: None,
                input: None,
                encoding: None,
            })
            .await?
            .into_data()
    }
    pub async fn get(&self, id: &str) -> Result<Goal, Error> {
        self.api
            .send_api::<(), (), Goal>(&ApiRequest {
                method: Method::GET,
                path: format!("/goals/{id}"),
                parameters: None,
                input: None,
                encoding: None,
            })
            .await?
            .into_data()
    }
    /// Returns the id of the created goal.
    pub async fn create(&self, input: CreateGoalRequest) -> Result<String, Error> {
        self.api
            .send_api::<(), _, String>(&ApiRequest {
                method: Method::POST,
                path: "/goals".into(),
                parameters: None,
                input: Some(input),
                encoding: Some("application/json".into()),
            })
            .await?
            .into_data()
    }
    pub async fn update(&self, id: &str, input: UpdateGoalRequest) -> Result<String, Error> {
        self.api
            .send_api::<(), _, String>(&ApiRequest {
                method: Method::PUT,
                path: format!("/goals/{id}"),
                parameters: None,
                input: Some(input),
                encoding: Some("application/json".into()),
            })
            .await?
            .into_data()
    }
    /// Add a saved amount towards the goal.
    pub async fn contribute(&self, id: &str, input: AddContributionRequest) -> Result<String, Error> {
        self.api
            .send_api::<(), _, String>(&ApiRequest {
                method: Method::POST,
                path: format!("/goals/{id}/contribute"),
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
                path: format!("/goals/{id}"),
                parameters: None,
                input: None,
                encoding: None,
            })
            .await?;
        Ok(())
    }
}
