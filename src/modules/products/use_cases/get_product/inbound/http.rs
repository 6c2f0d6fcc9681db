use axum::{
    Json,
    extract::{Path, State, rejection::PathRejection},
    http::StatusCode,
    response::IntoResponse,
};

use crate::modules::products::adapters::inbound::http::error_response;
use crate::modules::products::core::product::ProductId;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    path: Result<Path<ProductId>, PathRejection>,
) -> impl IntoResponse {
    let Path(id) = match path {
        Ok(p) => p,
        Err(rejection) => {
            return error_response(StatusCode::BAD_REQUEST, rejection.body_text());
        }
    };

    match state.catalog.read(id).await {
        Ok(product) => Json(product).into_response(),
        Err(error) => error.into_response(),
    }
}
