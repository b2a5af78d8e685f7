use http::header::{HeaderName, HeaderValue, InvalidHeaderValue, AUTHORIZATION, CONTENT_TYPE};
use http::Method;
use serde::{de::DeserializeOwned, Deserialize, Serialize};

/// Path of the token-refresh endpoint.
///
/// Requests to this path are the one place where the stored access token
/// must not be attached: the refresh credential travels in the body.
pub const REFRESH_TOKEN_PATH: &str = "/auth/refresh-token";

pub enum AuthorizationToken {
    Bearer(String),
}

impl TryFrom<AuthorizationToken> for HeaderValue {
    type Error = InvalidHeaderValue;

    fn try_from(token: AuthorizationToken) -> Result<Self, Self::Error> {
        HeaderValue::from_str(&match token {
            AuthorizationToken::Bearer(t) => format!("Bearer {t}"),
        })
    }
}

/// HTTP headers which can be used in API requests.
pub enum Header {
    ContentType,
    Authorization,
}

impl From<Header> for HeaderName {
    fn from(value: Header) -> Self {
        match value {
            Header::ContentType => CONTENT_TYPE,
            Header::Authorization => AUTHORIZATION,
        }
    }
}

/// A request which can be executed with [`ApiClient::send_api()`](crate::ApiClient::send_api).
pub struct ApiRequest<P, I>
where
    I: Serialize,
{
    pub method: Method,
    pub path: String,
    pub parameters: Option<P>,
    pub input: Option<I>,
    pub encoding: Option<String>,
}

/// The envelope every Cüzdanım API endpoint wraps its payload in.
///
/// ```json
/// {"isSuccess": true, "message": "", "data": ..., "errors": []}
/// ```
///
/// `isSuccess: false` is a logical failure even when the HTTP status is 200;
/// [`ApiClient::send_api()`](crate::ApiClient::send_api) never returns such
/// an envelope as `Ok`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse<T> {
    pub is_success: bool,
    #[serde(default)]
    pub message: String,
    pub data: Option<T>,
    #[serde(default)]
    pub errors: Vec<String>,
}

impl<T> ApiResponse<T>
where
    T: DeserializeOwned,
{
    /// Extract the payload, treating its absence on a successful response
    /// as [`Error::MissingResponseData`](crate::Error::MissingResponseData).
    pub fn into_data(self) -> crate::Result<T> {
        self.data.ok_or(crate::Error::MissingResponseData)
    }
}
