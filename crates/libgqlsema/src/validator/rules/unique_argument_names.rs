use crate::GraphQLError;
use crate::ast::Argument;
use crate::ast::Directive;
use crate::ast::Field;
use crate::schema::Schema;
use crate::types::Definition;
use crate::types::DirectiveDefinition;
use crate::types::DirectiveLocation;
use crate::types::FieldDefinition;
use crate::validator::Visitor;
use crate::validator::VisitorContext;
use std::collections::HashSet;

/// A field or directive may be passed each argument at most once.
///
/// <https://spec.graphql.org/October2021/#sec-Argument-Uniqueness>
pub fn create<'a>(_schema: &'a Schema) -> Box<dyn Visitor<'a> + 'a> {
    Box::new(UniqueArgumentNames)
}

fn check_unique_arguments(ctx: &mut VisitorContext<'_>, arguments: &[Argument]) {
    let mut seen = HashSet::new();
    for argument in arguments {
        if seen.insert(argument.name.as_str()) {
            continue;
        }
        ctx.report(GraphQLError::new(format!(
            "There can be only one argument named \"{}\".",
            argument.name,
        )).with_position(&argument.position));
    }
}

struct UniqueArgumentNames;
impl<'a> Visitor<'a> for UniqueArgumentNames {
    fn enter_field(
        &mut self,
        ctx: &mut VisitorContext<'a>,
        _parent: Option<&'a Definition>,
        _field_def: Option<&'a FieldDefinition>,
        field: &'a Field,
    ) {
        check_unique_arguments(ctx, &field.arguments);
    }

    fn directive(
        &mut self,
        ctx: &mut VisitorContext<'a>,
        _directive_def: Option<&'a DirectiveDefinition>,
        directive: &'a Directive,
        _location: DirectiveLocation,
    ) {
        check_unique_arguments(ctx, &directive.arguments);
    }
}
