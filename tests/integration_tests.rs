//! Integration tests sending built requests to a wiremock server via reqwest.

use http_client_utilities::{ClientRequest, RequestBuilder};
use serde::{Deserialize, Serialize};
use serde_json::json;
use url::Url;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[derive(Debug, Serialize, Deserialize, PartialEq)]
struct TestData {
    id: u32,
    name: String,
}

async fn send(mock_server: &MockServer, request: ClientRequest) -> reqwest::Response {
    let base = Url::parse(&mock_server.uri()).unwrap();
    let request = request.into_reqwest(&base).unwrap();
    reqwest::Client::new().execute(request).await.unwrap()
}

#[tokio::test]
async fn test_get_request_on_the_wire() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/servers/42"))
        .and(query_param("name", "web 1"))
        .and(header("accept", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(TestData {
            id: 42,
            name: "web 1".to_string(),
        }))
        .expect(1)
        .mount(&mock_server)
        .await;

    let request = RequestBuilder::get("/servers", Some("42"))
        .with_query_param("name", "web 1")
        .build()
        .unwrap();

    let response = send(&mock_server, request).await;

    assert_eq!(response.status().as_u16(), 200);
    let data: TestData = response.json().await.unwrap();
    assert_eq!(data.id, 42);
}

#[tokio::test]
async fn test_post_request_on_the_wire() {
    let mock_server = MockServer::start().await;

    let new_data = TestData {
        id: 0,
        name: "New".to_string(),
    };

    Mock::given(method("POST"))
        .and(path("/test"))
        .and(header("content-type", "application/json"))
        .and(header("x-request-id", "abc"))
        .and(body_json(json!({ "id": 0, "name": "New" })))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&mock_server)
        .await;

    let request = RequestBuilder::post("test")
        .with_header("X-Request-Id", "abc")
        .with_request_content(&new_data)
        .build()
        .unwrap();

    let response = send(&mock_server, request).await;

    assert_eq!(response.status().as_u16(), 201);
}

#[tokio::test]
async fn test_accept_header_overrides_custom_accept() {
    let mock_server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/servers/7"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&mock_server)
        .await;

    let request = RequestBuilder::delete("servers/7")
        .with_header("Accept", "text/html")
        .build()
        .unwrap();

    let response = send(&mock_server, request).await;
    assert_eq!(response.status().as_u16(), 204);

    let received = mock_server.received_requests().await.unwrap();
    assert_eq!(received.len(), 1);

    let accept: Vec<_> = received[0].headers.get_all("accept").iter().collect();
    assert_eq!(accept, vec!["application/json"]);
    assert!(received[0].body.is_empty());
}

#[tokio::test]
async fn test_base_path_is_kept_with_trailing_slash() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/v1/servers/3"))
        .and(body_json(json!({ "name": "renamed" })))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&mock_server)
        .await;

    let base = Url::parse(&format!("{}/v1/", mock_server.uri())).unwrap();
    let request = RequestBuilder::put("/servers/3")
        .with_request_content(&json!({ "name": "renamed" }))
        .build()
        .unwrap()
        .into_reqwest(&base)
        .unwrap();

    let response = reqwest::Client::new().execute(request).await.unwrap();
    assert_eq!(response.status().as_u16(), 200);
}
