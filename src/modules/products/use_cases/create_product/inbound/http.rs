use axum::{
    Json, extract::State, extract::rejection::JsonRejection, http::StatusCode,
    response::IntoResponse,
};

use crate::modules::products::adapters::inbound::http::error_response;
use crate::modules::products::core::product::ProductDraft;
use crate::modules::products::use_cases::create_product::command::CreateProduct;
use crate::shell::state::AppState;

// Unknown keys such as `id` or `version` are ignored by the draft, so a client can
// never choose either on create.
pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<ProductDraft>, JsonRejection>,
) -> impl IntoResponse {
    let Json(draft) = match body {
        Ok(b) => b,
        Err(rejection) => {
            return error_response(StatusCode::BAD_REQUEST, rejection.body_text());
        }
    };

    match state.catalog.create(CreateProduct { draft }).await {
        Ok(product) => (StatusCode::CREATED, Json(product)).into_response(),
        Err(error) => error.into_response(),
    }
}
