use crate::types::auth::{
    LoginRequest, LoginResponse, RefreshTokenRequest, RegisterRequest, RegisterResponse,
};
use cuzdanim_http::types::REFRESH_TOKEN_PATH;
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
    /// Exchange credentials for an initial token pair.
    pub async fn login(&self, input: LoginRequest) -> Result<LoginResponse, Error> {
        self.api
            .send_api::<(), _, LoginResponse>(&ApiRequest {
                method: Method::POST,
                path: "/auth/login".into(),
                parameters: None,
                input: Some(input),
                encoding: Some("application/json".into()),
            })
            .await?
            .into_data()
    }
    pub async fn register(&self, input: RegisterRequest) -> Result<RegisterResponse, Error> {
        self.api
            .send_api::<(), _, RegisterResponse>(&ApiRequest {
                method: Method::POST,
                path: "/auth/register".into(),
                parameters: None,
                input: Some(input),
                encoding: Some("application/json".into()),
            })
            .await?
            .into_data()
    }
    /// Exchange a refresh token for a new token pair.
    ///
    /// Prefer going through an [`Agent`](crate::agent::Agent), which calls
    /// this endpoint on its own when a request is rejected with 401.
    pub async fn refresh_token(&self, input: RefreshTokenRequest) -> Result<LoginResponse, Error> {
        self.api
            .send_api::<(), _, LoginResponse>(&ApiRequest {
                method: Method::POST,
                path: REFRESH_TOKEN_PATH.into(),
                parameters: None,
                input: Some(input),
                encoding: Some("application/json".into()),
            })
            .await?
            .into_data()
    }
}
