use crate::reqwest::ReqwestClient;
use cuzdanim_http::{ApiClient, ApiRequest, Error};
use http::Method;
use mockito::{Matcher, Server};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct Parameters {
    start_date: String,
}

#[derive(Serialize, Deserialize, Debug)]
struct Input {
    name: String,
}

#[derive(Serialize, Deserialize, Debug, PartialEq, Eq)]
struct Output {
    id: String,
}

async fn run_query(client: &ReqwestClient, path: String) -> Result<Output, Error> {
    let response = client
        .send_api::<_, (), Output>(&ApiRequest {
            method: Method::GET,
            path,
            parameters: Some(Parameters { start_date: "2025-01-01".into() }),
            input: None,
            encoding: None,
        })
        .await?;
    response.into_data()
}

async fn run_procedure(client: &ReqwestClient, path: String) -> Result<Output, Error> {
    let response = client
        .send_api::<(), _, Output>(&ApiRequest {
            method: Method::POST,
            path,
            parameters: None,
            input: Some(Input { name: "Groceries".into() }),
            encoding: Some("application/json".into()),
        })
        .await?;
    response.into_data()
}

#[tokio::test]
async fn send_query() -> Result<(), Box<dyn std::error::Error>> {
    let mut server = Server::new_async().await;
    let mock_ok = server
        .mock("GET", "/test/ok")
        .match_query(Matcher::UrlEncoded("startDate".into(), "2025-01-01".into()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"isSuccess":true,"message":"","data":{"id":"42"},"errors":[]}"#)
        .create_async()
        .await;
    let mock_err = server
        .mock("GET", "/test/err")
        .match_query(Matcher::Any)
        .with_status(400)
        .with_body(r#"{"isSuccess":false,"message":"bad request","data":null,"errors":[]}"#)
        .create_async()
        .await;

    let client = ReqwestClient::new(server.url());
    let output = run_query(&client, "/test/ok".into()).await?;
    assert_eq!(output, Output { id: "42".into() });

    let error = run_query(&client, "/test/err".into()).await.expect_err("must be error");
    match error {
        Error::Api(err) => {
            assert_eq!(err.status, http::StatusCode::BAD_REQUEST);
            assert_eq!(err.message, "bad request");
        }
        _ => panic!("must be Error::Api, got {error:?}"),
    }

    mock_ok.assert_async().await;
    mock_err.assert_async().await;
    Ok(())
}

#[tokio::test]
async fn send_procedure() -> Result<(), Box<dyn std::error::Error>> {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/test/create")
        .match_header("content-type", "application/json")
        .match_body(Matcher::JsonString(r#"{"name":"Groceries"}"#.into()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"isSuccess":true,"message":"created","data":{"id":"abc"},"errors":[]}"#)
        .create_async()
        .await;

    let client = ReqwestClient::new(server.url());
    let output = run_procedure(&client, "/test/create".into()).await?;
    assert_eq!(output, Output { id: "abc".into() });

    mock.assert_async().await;
    Ok(())
}

#[tokio::test]
async fn transport_failure() {
    // Nothing is listening on this port.
    let client = ReqwestClient::new("http://127.0.0.1:1");
    let error = run_query(&client, "/test/ok".into()).await.expect_err("must be error");
    assert!(matches!(error, Error::HttpClient(_)));
}
