use crate::GraphQLError;
use crate::ast::FragmentDefinition;
use crate::ast::FragmentSpread;
use crate::schema::Schema;
use crate::types::Definition;
use crate::validator::Visitor;
use crate::validator::VisitorContext;

/// Spreads must name a fragment the document defines.
///
/// <https://spec.graphql.org/October2021/#sec-Fragment-spread-target-defined>
pub fn create<'a>(_schema: &'a Schema) -> Box<dyn Visitor<'a> + 'a> {
    Box::new(KnownFragmentNames)
}

struct KnownFragmentNames;
impl<'a> Visitor<'a> for KnownFragmentNames {
    fn fragment_spread(
        &mut self,
        ctx: &mut VisitorContext<'a>,
        _parent: Option<&'a Definition>,
        fragment: Option<&'a FragmentDefinition>,
        spread: &'a FragmentSpread,
    ) {
        if fragment.is_some() {
            return;
        }
        ctx.report(GraphQLError::new(format!(
            "Unknown fragment \"{}\".",
            spread.fragment_name,
        )).with_position(&spread.position));
    }
}
