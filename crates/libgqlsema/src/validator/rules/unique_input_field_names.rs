use crate::GraphQLError;
use crate::ast::Value;
use crate::schema::Schema;
use crate::validator::ValueContext;
use crate::validator::Visitor;
use crate::validator::VisitorContext;
use std::collections::HashSet;

/// An object literal may give each field at most once.
///
/// <https://spec.graphql.org/October2021/#sec-Input-Object-Field-Uniqueness>
pub fn create<'a>(_schema: &'a Schema) -> Box<dyn Visitor<'a> + 'a> {
    Box::new(UniqueInputFieldNames)
}

struct UniqueInputFieldNames;
impl<'a> Visitor<'a> for UniqueInputFieldNames {
    fn value(
        &mut self,
        ctx: &mut VisitorContext<'a>,
        value: &'a Value,
        _value_ctx: &ValueContext<'a>,
    ) {
        let Value::Object(fields) = value else {
            return;
        };
        let mut seen = HashSet::new();
        for field in fields {
            if seen.insert(field.name.as_str()) {
                continue;
            }
            ctx.report(GraphQLError::new(format!(
                "There can be only one input field named \"{}\".",
                field.name,
            )).with_position(&field.position));
        }
    }
}
