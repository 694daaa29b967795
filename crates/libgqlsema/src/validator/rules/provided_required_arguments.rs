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
use indexmap::IndexMap;

/// Arguments of a non-null type without a default value must be passed.
///
/// <https://spec.graphql.org/October2021/#sec-Required-Arguments>
pub fn create<'a>(_schema: &'a Schema) -> Box<dyn Visitor<'a> + 'a> {
    Box::new(ProvidedRequiredArguments)
}

/// The required arguments in `arg_defs` that `arguments` omits.
fn missing_arguments<'d>(
    arg_defs: &'d IndexMap<String, FieldDefinition>,
    arguments: &[Argument],
) -> impl Iterator<Item = &'d FieldDefinition> {
    arg_defs.values().filter(|arg_def| {
        arg_def.is_required()
            && !arguments.iter().any(|arg| arg.name == arg_def.name())
    })
}

struct ProvidedRequiredArguments;
impl<'a> Visitor<'a> for ProvidedRequiredArguments {
    fn enter_field(
        &mut self,
        ctx: &mut VisitorContext<'a>,
        _parent: Option<&'a Definition>,
        field_def: Option<&'a FieldDefinition>,
        field: &'a Field,
    ) {
        let Some(field_def) = field_def else {
            return;
        };
        for arg_def in missing_arguments(field_def.arguments(), &field.arguments) {
            ctx.report(GraphQLError::new(format!(
                "Field \"{}\" argument \"{}\" of type \"{}\" is required but not provided.",
                field.name,
                arg_def.name(),
                arg_def.ty(),
            )).with_position(&field.position));
        }
    }

    fn directive(
        &mut self,
        ctx: &mut VisitorContext<'a>,
        directive_def: Option<&'a DirectiveDefinition>,
        directive: &'a Directive,
        _location: DirectiveLocation,
    ) {
        let Some(directive_def) = directive_def else {
            return;
        };
        for arg_def in missing_arguments(directive_def.arguments(), &directive.arguments) {
            ctx.report(GraphQLError::new(format!(
                "Directive \"@{}\" argument \"{}\" of type \"{}\" is required but not provided.",
                directive.name,
                arg_def.name(),
                arg_def.ty(),
            )).with_position(&directive.position));
        }
    }
}
