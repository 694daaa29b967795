use crate::GraphQLError;
use crate::ast::FragmentDefinition;
use crate::schema::Schema;
use crate::types::Definition;
use crate::validator::Visitor;
use crate::validator::VisitorContext;
use std::collections::HashSet;

/// <https://spec.graphql.org/October2021/#sec-Fragment-Name-Uniqueness>
pub fn create<'a>(_schema: &'a Schema) -> Box<dyn Visitor<'a> + 'a> {
    Box::new(UniqueFragmentNames {
        seen: HashSet::new(),
    })
}

struct UniqueFragmentNames<'a> {
    seen: HashSet<&'a str>,
}
impl<'a> Visitor<'a> for UniqueFragmentNames<'a> {
    fn enter_fragment_definition(
        &mut self,
        ctx: &mut VisitorContext<'a>,
        fragment: &'a FragmentDefinition,
        _type_def: Option<&'a Definition>,
    ) {
        if self.seen.insert(fragment.name.as_str()) {
            return;
        }
        ctx.report(GraphQLError::new(format!(
            "There can be only one fragment named \"{}\".",
            fragment.name,
        )).with_position(&fragment.position));
    }
}
