use crate::GraphQLError;
use crate::ast::Directive;
use crate::ast::Field;
use crate::schema::Schema;
use crate::types::Definition;
use crate::types::DirectiveDefinition;
use crate::types::DirectiveLocation;
use crate::types::FieldDefinition;
use crate::validator::Visitor;
use crate::validator::VisitorContext;

/// Every argument passed to a field or directive must be one it defines.
///
/// <https://spec.graphql.org/October2021/#sec-Argument-Names>
pub fn create<'a>(_schema: &'a Schema) -> Box<dyn Visitor<'a> + 'a> {
    Box::new(KnownArgumentNames)
}

struct KnownArgumentNames;
impl<'a> Visitor<'a> for KnownArgumentNames {
    fn enter_field(
        &mut self,
        ctx: &mut VisitorContext<'a>,
        parent: Option<&'a Definition>,
        field_def: Option<&'a FieldDefinition>,
        field: &'a Field,
    ) {
        let (Some(parent), Some(field_def)) = (parent, field_def) else {
            return;
        };
        for argument in &field.arguments {
            if field_def.argument(&argument.name).is_some() {
                continue;
            }
            let message = ctx.suggest(
                format!(
                    "Unknown argument \"{}\" on field \"{}\" of type \"{}\".",
                    argument.name,
                    field.name,
                    parent.name(),
                ),
                &argument.name,
                field_def.arguments().keys().map(String::as_str),
            );
            ctx.report(GraphQLError::new(message).with_position(&argument.position));
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
        for argument in &directive.arguments {
            if directive_def.argument(&argument.name).is_some() {
                continue;
            }
            let message = ctx.suggest(
                format!(
                    "Unknown argument \"{}\" on directive \"@{}\".",
                    argument.name,
                    directive.name,
                ),
                &argument.name,
                directive_def.arguments().keys().map(String::as_str),
            );
            ctx.report(GraphQLError::new(message).with_position(&argument.position));
        }
    }
}
