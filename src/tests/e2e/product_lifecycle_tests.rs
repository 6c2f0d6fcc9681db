use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
    response::Response,
};
use http_body_util::BodyExt;
use tower::ServiceExt;

use crate::shell::http::router;
use crate::shell::state::AppState;

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, serde_json::Value) {
    let response: Response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = if bytes.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}

fn json_request(method: &str, uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn create_update_conflict_and_delete_a_product() {
    let app = router(AppState::in_memory());

    let (status, created) = send(
        &app,
        json_request(
            "POST",
            "/products",
            r#"{"name":"Smartphone","price":799.99,"quantity":50}"#,
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["id"], 1);
    assert_eq!(created["version"], 0);

    let (status, updated) = send(
        &app,
        json_request(
            "PUT",
            "/products/1",
            r#"{"name":"Smartphone","price":899.99,"quantity":50,"version":0}"#,
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["id"], 1);
    assert_eq!(updated["version"], 1);
    assert_eq!(updated["price"], serde_json::json!(899.99));

    let (status, _) = send(
        &app,
        json_request(
            "PUT",
            "/products/1",
            r#"{"name":"Overwrite","price":1.0,"quantity":1,"version":0}"#,
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);

    let (status, current) = send(
        &app,
        Request::get("/products/1").body(Body::empty()).unwrap(),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(current, updated);

    let (status, _) = send(
        &app,
        Request::delete("/products/999?version=0")
            .body(Body::empty())
            .unwrap(),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, body) = send(
        &app,
        Request::delete("/products/1?version=1")
            .body(Body::empty())
            .unwrap(),
    )
    .await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert_eq!(body, serde_json::Value::Null);

    let (status, list) = send(&app, Request::get("/products").body(Body::empty()).unwrap()).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(list, serde_json::json!([]));
}
