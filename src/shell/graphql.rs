pub use crate::modules::products::adapters::inbound::graphql::{
    AppSchema, MutationRoot, QueryRoot, build_schema, restore_variable_numbers,
};
pub use crate::shell::state::AppState;
