use crate::types::category::Category;
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
    pub async fn list(&self) -> Result<Vec<Category>, Error> {
        self.api
            .send_api::<(), (), Vec<Category>>(&ApiRequest {
                method: Method::GET,
                path: "/categories".into(),
                parameters: None,
                input: None,
                encoding: None,
            })
            .await?
            .into_data()
    }
}
