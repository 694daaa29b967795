//! Type-directed conversion of document literals and externally supplied
//! values into [`NativeValue`]s.
//!
//! Literals and variables share one set of structural rules: non-null
//! positions reject `null`, list positions accept a single value by
//! wrapping it, and input objects reject unknown fields and require every
//! non-null field that has no default. Scalars and enums are converted by a
//! [`CoerceScalar`] hook, so embedders can add custom scalar semantics
//! without touching the structural rules.
//!
//! <https://spec.graphql.org/October2021/#sec-Input-Values>

mod arguments;
mod coercion_error;
mod literal;
mod native_value;
mod scalar;
mod variables;

pub use arguments::coerce_argument_values;
pub use coercion_error::CoercionError;
pub use coercion_error::CoercionErrorKind;
pub use literal::coerce_literal;
pub use native_value::NativeValue;
pub use scalar::CoerceScalar;
pub use scalar::DefaultScalarCoercion;
pub use scalar::ScalarCoercionError;
pub use variables::coerce_variable_values;

pub(crate) use scalar::is_builtin_scalar;

#[cfg(test)]
mod tests;
