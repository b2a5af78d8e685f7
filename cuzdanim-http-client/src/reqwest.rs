#![doc = "ApiClient implementation for [reqwest]"]
use cuzdanim_http::{ApiClient, HttpClient};
use http::{Request, Response};
use reqwest::Client;
use std::sync::Arc;
use std::time::Duration;

/// Request timeout applied by [`ReqwestClient::new()`], matching the mobile
/// app's transport setting. A refresh call that hits this timeout is treated
/// as a refresh failure by the agent.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(15);

pub struct ReqwestClient {
    base_uri: String,
    client: Arc<Client>,
}

impl ReqwestClient {
    /// Create a new [`ReqwestClient`] using the default client configuration.
    pub fn new(base_uri: impl AsRef<str>) -> ReqwestClient {
        ReqwestClientBuilder::new(base_uri).build()
    }
}

pub struct ReqwestClientBuilder {
    base_uri: String,
    client: Option<Client>,
}

impl ReqwestClientBuilder {
    pub fn new(base_uri: impl AsRef<str>) -> Self {
        Self { base_uri: base_uri.as_ref().into(), client: None }
    }
    pub fn client(mut self, client: Client) -> Self {
        self.client = Some(client);
        self
    }
    pub fn build(self) -> ReqwestClient {
        ReqwestClient {
            base_uri: self.base_uri,
            client: Arc::new(self.client.unwrap_or_else(default_client)),
        }
    }
}

fn default_client() -> Client {
    // Falls back to the reqwest defaults if the builder fails.
    Client::builder().timeout(DEFAULT_TIMEOUT).build().unwrap_or_default()
}

impl HttpClient for ReqwestClient {
    async fn send_http(
        &self,
        request: Request<Vec<u8>>,
    ) -> Result<Response<Vec<u8>>, Box<dyn std::error::Error + Send + Sync + 'static>> {
        let response = self.client.execute(request.try_into()?).await?;
        let mut builder = Response::builder().status(response.status());
        for (k, v) in response.headers() {
            builder = builder.header(k, v);
        }
        builder.body(response.bytes().await?.to_vec()).map_err(Into::into)
    }
}

impl ApiClient for ReqwestClient {
    fn base_uri(&self) -> String {
        self.base_uri.clone()
    }
}
