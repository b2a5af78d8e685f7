#![doc = "Error types."]
use http::StatusCode;
use std::sync::Arc;

/// A failure reported by the API server.
///
/// The server signals logical failures through the response envelope
/// (`isSuccess: false`), sometimes with an HTTP 200 status, so both the
/// status code and the envelope diagnostics are carried here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
    pub errors: Vec<String>,
}

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("api error: {0:?}")]
    Api(ApiError),
    #[error("http request error: {0}")]
    HttpRequest(#[from] http::Error),
    #[error("http client error: {0}")]
    HttpClient(Box<dyn std::error::Error + Send + Sync + 'static>),
    #[error("session store error: {0}")]
    SessionStore(Box<dyn std::error::Error + Send + Sync + 'static>),
    /// A token refresh performed on behalf of this request failed.
    ///
    /// Every request that was queued behind the same refresh receives a
    /// clone of the same underlying error.
    #[error("token refresh failed: {0}")]
    Refresh(Arc<Error>),
    #[error("authentication required")]
    AuthenticationRequired,
    #[error("serde_json error: {0}")]
    SerdeJson(#[from] serde_json::Error),
    #[error("serde_html_form error: {0}")]
    SerdeHtmlForm(#[from] serde_html_form::ser::Error),
    #[error("missing response data")]
    MissingResponseData,
}

pub type Result<T> = core::result::Result<T, Error>;
