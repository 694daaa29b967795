//! Semantic analysis for GraphQL documents.
//!
//! `libgqlsema` builds an immutable [`Schema`](schema::Schema) from one or
//! more schema documents, validates executable documents against it with a
//! caller-supplied [`RuleSet`](validator::RuleSet), and coerces literal and
//! externally supplied values into [`NativeValue`](coerce::NativeValue)s.
//!
//! ```
//! use libgqlsema::ast::QueryDocument;
//! use libgqlsema::schema::SchemaBuilder;
//! use libgqlsema::validator;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let schema = SchemaBuilder::new()
//!     .load_str(None, "type Query { hello(name: String): String }")?
//!     .build()?;
//! let document = QueryDocument::parse(None, "{ hello(name: \"world\") }")?;
//!
//! let errors = validator::validate(
//!     Some(&schema),
//!     Some(&document),
//!     &validator::ValidateOptions::default(),
//! );
//! assert!(errors.is_empty());
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

pub mod ast;
pub mod coerce;
pub mod error;
pub mod loc;
mod named_ref;
pub mod schema;
pub mod types;
pub mod validator;

pub use error::GraphQLError;
pub use error::GraphQLErrors;
pub use named_ref::DerefByName;
pub use named_ref::DerefByNameError;
pub use named_ref::NamedRef;
