use crate::error::{ApiError, Error};
use crate::types::{ApiRequest, ApiResponse, AuthorizationToken, Header, REFRESH_TOKEN_PATH};
use http::{Method, Request, Response};
use serde::{de::DeserializeOwned, Serialize};
use std::future::Future;

/// An abstract HTTP client.
#[trait_variant::make(Send)]
pub trait HttpClient {
    /// Send an HTTP request and return the response.
    fn send_http(
        &self,
        request: Request<Vec<u8>>,
    ) -> impl Future<
        Output = core::result::Result<
            Response<Vec<u8>>,
            Box<dyn std::error::Error + Send + Sync + 'static>,
        >,
    >;
}

type ApiResult<O> = core::result::Result<ApiResponse<O>, Error>;

/// An abstract client for the Cüzdanım REST API.
///
/// [`send_api()`](ApiClient::send_api) has a default implementation which
/// wraps [`HttpClient::send_http()`] to handle query parameters, the
/// `Authorization` header, JSON bodies, and the response envelope.
#[trait_variant::make(Send)]
pub trait ApiClient: HttpClient {
    /// The base URI of the API server.
    fn base_uri(&self) -> String;
    /// Get the authorization token to use for the `Authorization` header.
    ///
    /// Reads must be local (a token store lookup, never a network call). A
    /// store failure aborts the request: the pipeline surfaces it as
    /// [`Error::SessionStore`] rather than dispatching unauthenticated.
    #[allow(unused_variables)]
    fn authorization_token(
        &self,
        is_refresh: bool,
    ) -> impl Future<
        Output = core::result::Result<
            Option<AuthorizationToken>,
            Box<dyn std::error::Error + Send + Sync + 'static>,
        >,
    > {
        async { Ok(None) }
    }
    /// Send an API request and decode the response envelope.
    fn send_api<P, I, O>(&self, request: &ApiRequest<P, I>) -> impl Future<Output = ApiResult<O>>
    where
        P: Serialize + Send + Sync,
        I: Serialize + Send + Sync,
        O: DeserializeOwned + Send + Sync,
        // `Self` has to be `Sync` for the returned `Future` to be `Send`.
        Self: Sync,
    {
        send_api(self, request)
    }
}

#[inline(always)]
async fn send_api<P, I, O, C: ApiClient + ?Sized>(
    client: &C,
    request: &ApiRequest<P, I>,
) -> ApiResult<O>
where
    P: Serialize + Send + Sync,
    I: Serialize + Send + Sync,
    O: DeserializeOwned + Send + Sync,
{
    let mut uri = format!("{}{}", client.base_uri(), request.path);
    // Query parameters
    if let Some(p) = &request.parameters {
        serde_html_form::to_string(p).map(|qs| {
            if !qs.is_empty() {
                uri += "?";
                uri += &qs;
            }
        })?;
    };
    let mut builder = Request::builder().method(&request.method).uri(&uri);
    // Headers
    if let Some(encoding) = &request.encoding {
        builder = builder.header(Header::ContentType, encoding);
    }
    let is_refresh = request.method == Method::POST && request.path == REFRESH_TOKEN_PATH;
    if let Some(token) =
        client.authorization_token(is_refresh).await.map_err(Error::SessionStore)?
    {
        builder = builder.header(Header::Authorization, token);
    }
    // Body
    let body =
        if let Some(input) = &request.input { serde_json::to_vec(input)? } else { Vec::new() };
    // Send
    let (parts, body) =
        client.send_http(builder.body(body)?).await.map_err(Error::HttpClient)?.into_parts();
    if parts.status.is_success() {
        let response = serde_json::from_slice::<ApiResponse<O>>(&body)?;
        if response.is_success {
            Ok(response)
        } else {
            // Logical failure reported with a 2xx status.
            Err(Error::Api(ApiError {
                status: parts.status,
                message: response.message,
                errors: response.errors,
            }))
        }
    } else {
        let envelope = serde_json::from_slice::<ApiResponse<serde_json::Value>>(&body).ok();
        Err(Error::Api(ApiError {
            status: parts.status,
            message: envelope.as_ref().map(|e| e.message.clone()).unwrap_or_default(),
            errors: envelope.map(|e| e.errors).unwrap_or_default(),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::StatusCode;

    struct DummyClient {
        status: StatusCode,
        body: Vec<u8>,
        token: Option<String>,
        store_failure: bool,
        requests: std::sync::Mutex<Vec<Request<Vec<u8>>>>,
    }

    impl Default for DummyClient {
        fn default() -> Self {
            Self {
                status: StatusCode::OK,
                body: Vec::new(),
                token: None,
                store_failure: false,
                requests: std::sync::Mutex::new(Vec::new()),
            }
        }
    }

    impl HttpClient for DummyClient {
        async fn send_http(
            &self,
            request: Request<Vec<u8>>,
        ) -> core::result::Result<
            Response<Vec<u8>>,
            Box<dyn std::error::Error + Send + Sync + 'static>,
        > {
            self.requests.lock().expect("failed to lock requests").push(request);
            Ok(Response::builder().status(self.status).body(self.body.clone())?)
        }
    }

    impl ApiClient for DummyClient {
        fn base_uri(&self) -> String {
            "https://example.com/api/v1".into()
        }
        async fn authorization_token(
            &self,
            _is_refresh: bool,
        ) -> core::result::Result<
            Option<AuthorizationToken>,
            Box<dyn std::error::Error + Send + Sync + 'static>,
        > {
            if self.store_failure {
                return Err("storage backend unavailable".into());
            }
            Ok(self.token.clone().map(AuthorizationToken::Bearer))
        }
    }

    #[derive(serde::Serialize)]
    #[serde(rename_all = "camelCase")]
    struct Parameters {
        start_date: Option<String>,
    }

    #[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq, Eq)]
    #[serde(rename_all = "camelCase")]
    struct Output {
        return_value: i32,
    }

    async fn get_example(client: &DummyClient, params: Parameters) -> ApiResult<Output> {
        client
            .send_api::<_, (), _>(&ApiRequest {
                method: Method::GET,
                path: "/example".into(),
                parameters: Some(params),
                input: None,
                encoding: None,
            })
            .await
    }

    #[tokio::test]
    async fn response_ok() {
        let client = DummyClient {
            body: br#"{"isSuccess":true,"message":"ok","data":{"returnValue":42},"errors":[]}"#
                .to_vec(),
            ..Default::default()
        };
        let response =
            get_example(&client, Parameters { start_date: None }).await.expect("must be ok");
        assert!(response.is_success);
        assert_eq!(response.into_data().expect("data must be present").return_value, 42);
    }

    #[tokio::test]
    async fn logical_failure_with_http_200() {
        let client = DummyClient {
            body: br#"{"isSuccess":false,"message":"insufficient funds","data":null,"errors":["balance too low"]}"#
                .to_vec(),
            ..Default::default()
        };
        let error = get_example(&client, Parameters { start_date: None })
            .await
            .expect_err("must be error");
        match error {
            Error::Api(err) => {
                assert_eq!(err.status, StatusCode::OK);
                assert_eq!(err.message, "insufficient funds");
                assert_eq!(err.errors, vec![String::from("balance too low")]);
            }
            _ => panic!("must be Error::Api, got {error:?}"),
        }
    }

    #[tokio::test]
    async fn http_error_with_envelope() {
        let client = DummyClient {
            status: StatusCode::UNAUTHORIZED,
            body: br#"{"isSuccess":false,"message":"token expired","data":null,"errors":[]}"#
                .to_vec(),
            ..Default::default()
        };
        let error = get_example(&client, Parameters { start_date: None })
            .await
            .expect_err("must be error");
        match error {
            Error::Api(err) => {
                assert_eq!(err.status, StatusCode::UNAUTHORIZED);
                assert_eq!(err.message, "token expired");
            }
            _ => panic!("must be Error::Api, got {error:?}"),
        }
    }

    #[tokio::test]
    async fn http_error_without_envelope() {
        let client = DummyClient {
            status: StatusCode::BAD_GATEWAY,
            body: b"upstream offline".to_vec(),
            ..Default::default()
        };
        let error = get_example(&client, Parameters { start_date: None })
            .await
            .expect_err("must be error");
        match error {
            Error::Api(err) => {
                assert_eq!(err.status, StatusCode::BAD_GATEWAY);
                assert!(err.message.is_empty());
            }
            _ => panic!("must be Error::Api, got {error:?}"),
        }
    }

    #[tokio::test]
    async fn missing_data_on_success() {
        let client = DummyClient {
            body: br#"{"isSuccess":true,"message":"deleted","data":null,"errors":[]}"#.to_vec(),
            ..Default::default()
        };
        let response =
            get_example(&client, Parameters { start_date: None }).await.expect("must be ok");
        let error = response.into_data().expect_err("data must be absent");
        assert!(matches!(error, Error::MissingResponseData));
    }

    #[tokio::test]
    async fn query_parameters_and_authorization() {
        let client = DummyClient {
            body: br#"{"isSuccess":true,"message":"","data":{"returnValue":1},"errors":[]}"#
                .to_vec(),
            token: Some("secret".into()),
            ..Default::default()
        };
        let request: ApiRequest<Parameters, ()> = ApiRequest {
            method: Method::GET,
            path: "/transactions".into(),
            parameters: Some(Parameters { start_date: Some("2025-01-01".into()) }),
            input: None,
            encoding: None,
        };
        client.send_api::<_, (), Output>(&request).await.expect("must be ok");
        let requests = client.requests.lock().expect("failed to lock requests");
        let sent = requests.last().expect("request must be recorded");
        assert_eq!(sent.uri(), "https://example.com/api/v1/transactions?startDate=2025-01-01");
        assert_eq!(
            sent.headers().get(http::header::AUTHORIZATION).and_then(|v| v.to_str().ok()),
            Some("Bearer secret")
        );
    }

    #[tokio::test]
    async fn store_failure_aborts_request() {
        let client = DummyClient {
            body: br#"{"isSuccess":true,"message":"","data":{"returnValue":1},"errors":[]}"#
                .to_vec(),
            store_failure: true,
            ..Default::default()
        };
        let error = get_example(&client, Parameters { start_date: None })
            .await
            .expect_err("must be error");
        assert!(matches!(error, Error::SessionStore(_)));
    }
}
