use axum::http::{self, Request, StatusCode};
use http_body_util::BodyExt;
use mock_server::app;
use serde_json::Value;
use tower::ServiceExt;

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn body_bytes(response: axum::response::Response) -> bytes::Bytes {
    response.into_body().collect().await.unwrap().to_bytes()
}

fn get(uri: &str) -> Request<String> {
    Request::builder().uri(uri).body(String::new()).unwrap()
}

// --- anime by id ---

#[tokio::test]
async fn get_anime_found() {
    let resp = app().oneshot(get("/anime/1")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let json = body_json(resp).await;
    assert_eq!(json["data"]["mal_id"], 1);
    assert_eq!(json["data"]["title"], "Cowboy Bebop");
}

#[tokio::test]
async fn get_anime_not_found() {
    let resp = app().oneshot(get("/anime/999999")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let json = body_json(resp).await;
    assert_eq!(json["status"], 404);
    assert_eq!(json["message"], "Resource does not exist");
}

#[tokio::test]
async fn get_anime_bad_id_returns_400() {
    let resp = app().oneshot(get("/anime/not-a-number")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

// --- search ---

#[tokio::test]
async fn search_echoes_params_in_order() {
    let resp = app()
        .oneshot(get("/anime?page=2&q=a%26b%3Dc&sfw="))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let json = body_json(resp).await;
    assert_eq!(
        json["params"],
        serde_json::json!([["page", "2"], ["q", "a&b=c"], ["sfw", ""]])
    );
}

#[tokio::test]
async fn search_filters_by_title() {
    let resp = app().oneshot(get("/anime?q=fullmetal")).await.unwrap();

    let json = body_json(resp).await;
    let data = json["data"].as_array().unwrap();
    assert_eq!(data.len(), 1);
    assert_eq!(data[0]["mal_id"], 5114);
}

#[tokio::test]
async fn search_without_query_lists_everything() {
    let resp = app().oneshot(get("/anime")).await.unwrap();

    let json = body_json(resp).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 2);
    assert_eq!(json["params"], serde_json::json!([]));
}

// --- random / broken ---

#[tokio::test]
async fn random_anime_is_first_seed() {
    let resp = app().oneshot(get("/random/anime")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let json = body_json(resp).await;
    assert_eq!(json["data"]["mal_id"], 1);
}

#[tokio::test]
async fn broken_returns_invalid_json_with_200() {
    let resp = app().oneshot(get("/broken")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let bytes = body_bytes(resp).await;
    assert!(serde_json::from_slice::<Value>(&bytes).is_err());
}

// --- echo ---

#[tokio::test]
async fn echo_reports_method_headers_and_body() {
    let req = Request::builder()
        .method("PUT")
        .uri("/echo")
        .header(http::header::HOST, "api.jikan.moe")
        .header(http::header::USER_AGENT, "tests")
        .body(r#"{"a":1}"#.to_string())
        .unwrap();
    let resp = app().oneshot(req).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let json = body_json(resp).await;
    assert_eq!(json["method"], "PUT");
    assert_eq!(json["host"], "api.jikan.moe");
    assert_eq!(json["user_agent"], "tests");
    assert_eq!(json["body"], r#"{"a":1}"#);
}

#[tokio::test]
async fn echo_without_user_agent_reports_null() {
    let resp = app().oneshot(get("/echo")).await.unwrap();

    let json = body_json(resp).await;
    assert_eq!(json["method"], "GET");
    assert!(json["user_agent"].is_null());
    assert_eq!(json["body"], "");
}

#[tokio::test]
async fn unknown_route_returns_404() {
    let resp = app().oneshot(get("/nope")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
