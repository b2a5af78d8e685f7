use crate::types::dashboard::Dashboard;
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
    pub async fn get(&self) -> Result<Dashboard, Error> {
        self.api
            .send_api::<(), (), Dashboard>(&ApiRequest {
                method: Method::GET,
                path: "/dashboard".into(),
                parameters: None,
                input: None,
                encoding: None,
            })
            .await?
            .into_data()
    }
}
