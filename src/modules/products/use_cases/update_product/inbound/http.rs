use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection},
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::modules::products::adapters::inbound::http::error_response;
use crate::modules::products::core::product::{ProductDraft, ProductId, Version};
use crate::modules::products::use_cases::update_product::command::UpdateProduct;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct UpdateProductBody {
    pub name: Option<String>,
    pub description: Option<String>,
    #[serde(default, with = "rust_decimal::serde::arbitrary_precision_option")]
    pub price: Option<Decimal>,
    pub quantity: Option<i64>,
    pub version: Option<Version>,
}

impl UpdateProductBody {
    fn into_parts(self) -> (ProductDraft, Option<Version>) {
        let draft = ProductDraft {
            name: self.name,
            description: self.description,
            price: self.price,
            quantity: self.quantity,
        };
        (draft, self.version)
    }
}

pub async fn handle(
    State(state): State<AppState>,
    path: Result<Path<ProductId>, PathRejection>,
    body: Result<Json<UpdateProductBody>, JsonRejection>,
) -> impl IntoResponse {
    let Path(id) = match path {
        Ok(p) => p,
        Err(rejection) => {
            return error_response(StatusCode::BAD_REQUEST, rejection.body_text());
        }
    };
    let Json(body) = match body {
        Ok(b) => b,
        Err(rejection) => {
            return error_response(StatusCode::BAD_REQUEST, rejection.body_text());
        }
    };
    let (draft, claimed_version) = body.into_parts();

    let command = UpdateProduct {
        id,
        draft,
        claimed_version,
    };

    match state.catalog.update(command).await {
        Ok(product) => (StatusCode::OK, Json(product)).into_response(),
        Err(error) => error.into_response(),
    }
}
