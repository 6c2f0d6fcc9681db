use axum::{
    extract::{
        Path, Query, State,
        rejection::{PathRejection, QueryRejection},
    },
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;

use crate::modules::products::adapters::inbound::http::error_response;
use crate::modules::products::core::product::{ProductId, Version};
use crate::modules::products::use_cases::delete_product::command::DeleteProduct;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct DeleteProductParams {
    pub version: Option<Version>,
}

pub async fn handle(
    State(state): State<AppState>,
    path: Result<Path<ProductId>, PathRejection>,
    query: Result<Query<DeleteProductParams>, QueryRejection>,
) -> impl IntoResponse {
    let Path(id) = match path {
        Ok(p) => p,
        Err(rejection) => {
            return error_response(StatusCode::BAD_REQUEST, rejection.body_text());
        }
    };
    let Query(params) = match query {
        Ok(q) => q,
        Err(rejection) => {
            return error_response(StatusCode::BAD_REQUEST, rejection.body_text());
        }
    };

    let command = DeleteProduct {
        id,
        claimed_version: params.version,
    };

    match state.catalog.delete(command).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(error) => error.into_response(),
    }
}
