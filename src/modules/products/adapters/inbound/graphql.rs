// GraphQL surface over the version guard, served at /gql next to GraphiQL.
//
// Errors carry an extension `code` so clients can branch without parsing messages:
// VALIDATION, NOT_FOUND, VERSION_CONFLICT, INTERNAL.

use async_graphql::{
    Context, EmptySubscription, ErrorExtensions, ID, InputObject, Number, Object, Request,
    Result as GqlResult, Schema, SimpleObject, Value,
};
use rust_decimal::Decimal;

use crate::modules::products::application::errors::ApplicationError;
use crate::modules::products::core::product::{Product, ProductDraft, ProductId, Version};
use crate::modules::products::use_cases::create_product::command::CreateProduct;
use crate::modules::products::use_cases::delete_product::command::DeleteProduct;
use crate::modules::products::use_cases::update_product::command::UpdateProduct;
use crate::shell::state::AppState;

pub type AppSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

pub fn build_schema(state: AppState) -> AppSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(state)
        .finish()
}

#[derive(SimpleObject, Clone)]
#[graphql(name = "Product")]
pub struct GqlProduct {
    pub id: ProductId,
    pub version: Version,
    pub name: String,
    pub description: Option<String>,
    pub price: Decimal,
    pub quantity: u32,
}

impl From<Product> for GqlProduct {
    fn from(p: Product) -> Self {
        Self {
            id: p.id,
            version: p.version,
            name: p.name,
            description: p.description,
            price: p.price,
            quantity: p.quantity,
        }
    }
}

#[derive(InputObject)]
pub struct ProductInput {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<Decimal>,
    pub quantity: Option<i64>,
}

impl From<ProductInput> for ProductDraft {
    fn from(input: ProductInput) -> Self {
        Self {
            name: input.name,
            description: input.description,
            price: input.price,
            quantity: input.quantity,
        }
    }
}

fn to_gql_error(error: ApplicationError) -> async_graphql::Error {
    let code = match &error {
        ApplicationError::Validation(_) => "VALIDATION",
        ApplicationError::NotFound { .. } => "NOT_FOUND",
        ApplicationError::VersionConflict { .. } => "VERSION_CONFLICT",
        ApplicationError::Store(_) => "INTERNAL",
    };
    let message = match &error {
        ApplicationError::Store(_) => "internal error".to_string(),
        other => other.to_string(),
    };
    async_graphql::Error::new(message).extend_with(|_, e| {
        e.set("code", code);
        if let ApplicationError::VersionConflict {
            claimed, stored, ..
        } = &error
        {
            e.set("claimedVersion", *claimed);
            e.set("storedVersion", *stored);
        }
    })
}

// serde_json's arbitrary precision mode hands numbers to foreign deserializers as a
// single-entry map under this key, holding the number's source text.
const JSON_NUMBER_KEY: &str = "$serde_json::private::Number";

/// Turns JSON numbers in the request variables back into GraphQL numbers.
pub fn restore_variable_numbers(mut request: Request) -> Request {
    for value in request.variables.values_mut() {
        *value = restore_numbers(std::mem::replace(value, Value::Null));
    }
    request
}

fn restore_numbers(value: Value) -> Value {
    match value {
        Value::Object(map) => {
            if map.len() == 1 {
                if let Some(Value::String(text)) = map.get(JSON_NUMBER_KEY) {
                    if let Ok(number) = text.parse::<Number>() {
                        return Value::Number(number);
                    }
                }
            }
            Value::Object(
                map.into_iter()
                    .map(|(name, inner)| (name, restore_numbers(inner)))
                    .collect(),
            )
        }
        Value::List(items) => Value::List(items.into_iter().map(restore_numbers).collect()),
        other => other,
    }
}

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    async fn products(&self, context: &Context<'_>) -> GqlResult<Vec<GqlProduct>> {
        let state = context.data_unchecked::<AppState>();
        let list = state.catalog.list().await.map_err(to_gql_error)?;
        Ok(list.into_iter().map(Into::into).collect())
    }

    async fn product(&self, context: &Context<'_>, id: ProductId) -> GqlResult<GqlProduct> {
        let state = context.data_unchecked::<AppState>();
        let product = state.catalog.read(id).await.map_err(to_gql_error)?;
        Ok(product.into())
    }
}

pub struct MutationRoot;

#[Object]
impl MutationRoot {
    async fn create_product(
        &self,
        context: &Context<'_>,
        input: ProductInput,
    ) -> GqlResult<GqlProduct> {
        let state = context.data_unchecked::<AppState>();
        let command = CreateProduct {
            draft: input.into(),
        };
        let product = state.catalog.create(command).await.map_err(to_gql_error)?;
        Ok(product.into())
    }

    async fn update_product(
        &self,
        context: &Context<'_>,
        id: ProductId,
        input: ProductInput,
        version: Option<Version>,
    ) -> GqlResult<GqlProduct> {
        let state = context.data_unchecked::<AppState>();
        let command = UpdateProduct {
            id,
            draft: input.into(),
            claimed_version: version,
        };
        let product = state.catalog.update(command).await.map_err(to_gql_error)?;
        Ok(product.into())
    }

    async fn delete_product(
        &self,
        context: &Context<'_>,
        id: ProductId,
        version: Option<Version>,
    ) -> GqlResult<ID> {
        let state = context.data_unchecked::<AppState>();
        let command = DeleteProduct {
            id,
            claimed_version: version,
        };
        state.catalog.delete(command).await.map_err(to_gql_error)?;
        Ok(ID(id.to_string()))
    }
}
