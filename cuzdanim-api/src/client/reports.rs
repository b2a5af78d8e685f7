use crate::types::report::Report;
use crate::types::transaction::DateRangeParams;
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
    /// Income/expense report, optionally restricted to a date range.
    pub async fn get(&self, params: DateRangeParams) -> Result<Report, Error> {
        self.api
            .send_api::<_, (), Report>(&ApiRequest {
                method: Method::GET,
                path: "/reports".into(),
                parameters: Some(params),
                input: None,
                encoding: None,
            })
            .await?
            .into_data()
    }
}
