use async_graphql::http::GraphiQLSource;
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{Extension, Router, response::Html, routing::get};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::modules::products::use_cases::create_product::inbound::http as create_http;
use crate::modules::products::use_cases::delete_product::inbound::http as delete_http;
use crate::modules::products::use_cases::get_product::inbound::http as get_http;
use crate::modules::products::use_cases::list_products::inbound::http as list_http;
use crate::modules::products::use_cases::update_product::inbound::http as update_http;
use crate::shell::graphql::{AppSchema, build_schema, restore_variable_numbers};
use crate::shell::state::AppState;

pub fn router(state: AppState) -> Router {
    let schema = build_schema(state.clone());

    Router::new()
        .route("/health", get(health))
        .route("/products", get(list_http::handle).post(create_http::handle))
        .route(
            "/products/{id}",
            get(get_http::handle)
                .put(update_http::handle)
                .delete(delete_http::handle),
        )
        .route("/gql", get(graphiql).post(graphql))
        .layer(Extension(schema))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn health() -> &'static str {
    "ok"
}

async fn graphql(Extension(schema): Extension<AppSchema>, req: GraphQLRequest) -> GraphQLResponse {
    schema
        .execute(restore_variable_numbers(req.into_inner()))
        .await
        .into()
}

async fn graphiql() -> Html<String> {
    Html(GraphiQLSource::build().endpoint("/gql").finish())
}

#[cfg(test)]
mod router_tests {
    use super::*;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    #[tokio::test]
    async fn it_should_answer_health_checks() {
        let response = router(AppState::in_memory())
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(&bytes[..], b"ok");
    }

    #[tokio::test]
    async fn it_should_serve_graphql_over_post() {
        let response = router(AppState::in_memory())
            .oneshot(
                Request::post("/gql")
                    .header("content-type", "application/json")
                    .body(Body::from(r#"{"query":"{ products { id } }"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json["data"]["products"], serde_json::json!([]));
    }

    #[tokio::test]
    async fn it_should_accept_numeric_graphql_variables() {
        let response = router(AppState::in_memory())
            .oneshot(
                Request::post("/gql")
                    .header("content-type", "application/json")
                    .body(Body::from(
                        r#"{"query":"query($id: Int!) { product(id: $id) { id } }","variables":{"id":1}}"#,
                    ))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json["errors"][0]["extensions"]["code"], "NOT_FOUND");
    }

    #[tokio::test]
    async fn it_should_answer_a_malformed_product_id_with_a_json_error() {
        let response = router(AppState::in_memory())
            .oneshot(Request::get("/products/abc").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert!(json["error"].is_string(), "{json}");
    }

    #[tokio::test]
    async fn it_should_serve_the_graphiql_playground() {
        let response = router(AppState::in_memory())
            .oneshot(Request::get("/gql").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn it_should_return_405_for_an_unsupported_method() {
        let response = router(AppState::in_memory())
            .oneshot(Request::patch("/products/1").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    }
}
