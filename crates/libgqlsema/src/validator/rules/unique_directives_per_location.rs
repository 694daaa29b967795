use crate::GraphQLError;
use crate::ast::Directive;
use crate::schema::Schema;
use crate::types::DirectiveLocation;
use crate::validator::Visitor;
use crate::validator::VisitorContext;
use std::collections::HashSet;

/// A non-repeatable directive may appear at most once per location.
///
/// <https://spec.graphql.org/October2021/#sec-Directives-Are-Unique-Per-Location>
pub fn create<'a>(_schema: &'a Schema) -> Box<dyn Visitor<'a> + 'a> {
    Box::new(UniqueDirectivesPerLocation)
}

struct UniqueDirectivesPerLocation;
impl<'a> Visitor<'a> for UniqueDirectivesPerLocation {
    fn directive_list(
        &mut self,
        ctx: &mut VisitorContext<'a>,
        directives: &'a [Directive],
        _location: DirectiveLocation,
    ) {
        let schema = ctx.schema();
        let mut seen = HashSet::new();
        for directive in directives {
            let repeatable = schema.directive_def(&directive.name)
                .is_some_and(|def| def.is_repeatable());
            if repeatable || seen.insert(directive.name.as_str()) {
                continue;
            }
            ctx.report(GraphQLError::new(format!(
                "The directive \"@{}\" can only be used once at this location.",
                directive.name,
            )).with_position(&directive.position));
        }
    }
}
