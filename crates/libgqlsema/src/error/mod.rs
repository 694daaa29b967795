//! Structured errors reported by validation and coercion.

mod error_path;
mod graphql_error;

pub use error_path::ErrorPath;
pub use error_path::PathSegment;
pub use graphql_error::ErrorLocation;
pub use graphql_error::GraphQLError;
pub use graphql_error::GraphQLErrors;
