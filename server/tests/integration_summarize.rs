use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use server::{build_app, ServerConfig};
use tower::ServiceExt;

const ARTICLE: &str = "Cats chase mice. Mice run fast. Dogs chase cats. Birds fly high.";

fn app() -> Router {
    build_app(ServerConfig { admin_token: Some("secret".into()), ..ServerConfig::default() }).unwrap()
}

async fn call(app: &Router, req: Request<Body>) -> (StatusCode, Value) {
    let resp = app.clone().oneshot(req).await.unwrap();
    let status = resp.status();
    let body = resp.into_body().collect().await.unwrap().to_bytes();
    let json = serde_json::from_slice(&body).unwrap_or(Value::String(String::from_utf8_lossy(&body).into_owned()));
    (status, json)
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::post(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn summarize_returns_top_sentences() {
    let app = app();
    let (status, json) = call(&app, post_json("/summarize", json!({ "article": ARTICLE, "percentage": 25.0 }))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["summary"], "Cats chase mice.");
    assert_eq!(json["sentences"].as_array().unwrap().len(), 1);
    assert_eq!(json["ranked"].as_array().unwrap().len(), 4);
    assert_eq!(json["ranked"][0]["index"], 0);
    assert_eq!(json["document_number"], 1);
}

#[tokio::test]
async fn default_config_scores_a_first_article() {
    let app = build_app(ServerConfig::default()).unwrap();
    let (status, json) = call(&app, post_json("/summarize", json!({ "article": ARTICLE }))).await;
    assert_eq!(status, StatusCode::OK);
    assert!(json["ranked"].as_array().unwrap().iter().all(|s| s["score"].as_f64().unwrap() > 0.0));
}

#[tokio::test]
async fn corpus_grows_across_requests() {
    let app = app();
    for _ in 0..2 {
        let (status, _) = call(&app, post_json("/summarize", json!({ "article": ARTICLE }))).await;
        assert_eq!(status, StatusCode::OK);
    }
    let (_, corpus) = call(&app, Request::get("/corpus").body(Body::empty()).unwrap()).await;
    assert_eq!(corpus["document_number"], 2);
    assert_eq!(corpus["terms"], 9);

    let (_, term) = call(&app, Request::get("/corpus/term/Cats").body(Body::empty()).unwrap()).await;
    assert_eq!(term["document_frequency"], 2);
}

#[tokio::test]
async fn reset_requires_admin_token() {
    let app = app();
    call(&app, post_json("/summarize", json!({ "article": ARTICLE }))).await;

    let (status, _) = call(&app, Request::post("/corpus/reset").body(Body::empty()).unwrap()).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let req = Request::post("/corpus/reset").header("X-ADMIN-TOKEN", "secret").body(Body::empty()).unwrap();
    let (status, json) = call(&app, req).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["document_number"], 0);

    let (_, corpus) = call(&app, Request::get("/corpus").body(Body::empty()).unwrap()).await;
    assert_eq!(corpus["document_number"], 0);
}

#[tokio::test]
async fn health_is_ok() {
    let (status, body) = call(&app(), Request::get("/health").body(Body::empty()).unwrap()).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "ok");
}

#[test]
fn invalid_cors_origin_is_rejected() {
    let config = ServerConfig { cors_allow_origin: Some("bad\norigin".into()), ..ServerConfig::default() };
    assert!(build_app(config).is_err());
}
