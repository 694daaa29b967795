//! Validation of executable documents against a [`Schema`](crate::schema::Schema).
//!
//! [`validate()`] runs a single walk over a document. Each rule in the
//! caller's [`RuleSet`] is instantiated fresh for that pass as a
//! [`Visitor`], observes the events it cares about, and reports errors
//! through the shared [`VisitorContext`]. Nothing about a
//! rule outlives the call, so one schema can be validated against from any
//! number of threads at once.
//!
//! <https://spec.graphql.org/October2021/#sec-Validation>

mod context;
mod messaging;
mod rule_set;
pub mod rules;
mod validate;
mod validate_options;
mod visitor;
mod walker;

pub use context::VisitorContext;
pub use rule_set::DEFAULT_RULES;
pub use rule_set::RuleEntry;
pub use rule_set::RuleFactory;
pub use rule_set::RuleSet;
pub use validate::validate;
pub use validate_options::ValidateOptions;
pub use validate_options::ValidatorConfig;
pub use visitor::ValueContext;
pub use visitor::Visitor;

#[cfg(test)]
mod tests;
