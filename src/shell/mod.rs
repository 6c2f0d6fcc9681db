// Composition root for the product catalog.
//
// Responsibilities
// - Read config from environment.
// - Instantiate the concrete store and wire it into the version guard.
// - Expose the HTTP router (REST and GraphQL) to the binary.

pub mod config;
pub mod graphql;
pub mod http;
pub mod state;
