//! Owned, position-carrying model of an executable GraphQL document.
//!
//! Text is parsed by `graphql-parser` and converted into these types by
//! [`QueryDocument::parse()`]; callers that run their own parser can build
//! the nodes directly.

mod directive;
mod document;
mod graphql_parser_adapter;
mod selection;
mod value;

pub use directive::Argument;
pub use directive::Directive;
pub use document::OperationDefinition;
pub use document::OperationKind;
pub use document::QueryDocument;
pub use document::VariableDefinition;
pub use graphql_parser_adapter::DocumentParseError;
pub(crate) use graphql_parser_adapter::directives_from_gp;
pub(crate) use graphql_parser_adapter::value_from_gp;
pub use selection::Field;
pub use selection::FragmentDefinition;
pub use selection::FragmentSpread;
pub use selection::InlineFragment;
pub use selection::Selection;
pub use value::ObjectField;
pub use value::Value;
pub use value::ValueKind;
