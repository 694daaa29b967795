use crate::GraphQLError;
use crate::ast::Directive;
use crate::schema::Schema;
use crate::types::DirectiveDefinition;
use crate::types::DirectiveLocation;
use crate::validator::Visitor;
use crate::validator::VisitorContext;

/// Directives must be defined by the schema and used only at the locations
/// their definitions allow.
///
/// <https://spec.graphql.org/October2021/#sec-Directives-Are-Defined>
/// <https://spec.graphql.org/October2021/#sec-Directives-Are-In-Valid-Locations>
pub fn create<'a>(_schema: &'a Schema) -> Box<dyn Visitor<'a> + 'a> {
    Box::new(KnownDirectives)
}

struct KnownDirectives;
impl<'a> Visitor<'a> for KnownDirectives {
    fn directive(
        &mut self,
        ctx: &mut VisitorContext<'a>,
        directive_def: Option<&'a DirectiveDefinition>,
        directive: &'a Directive,
        location: DirectiveLocation,
    ) {
        let message = match directive_def {
            None => format!("Unknown directive \"{}\".", directive.name),
            Some(def) if !def.locations().contains(&location) => format!(
                "Directive \"{}\" may not be used on {location}.",
                directive.name,
            ),
            Some(_) => return,
        };
        ctx.report(GraphQLError::new(message).with_position(&directive.position));
    }
}
