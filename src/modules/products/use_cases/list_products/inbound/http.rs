use axum::{Json, extract::State, response::IntoResponse};

use crate::shell::state::AppState;

pub async fn handle(State(state): State<AppState>) -> impl IntoResponse {
    match state.catalog.list().await {
        Ok(products) => Json(products).into_response(),
        Err(error) => error.into_response(),
    }
}
