use crate::GraphQLError;
use crate::schema::Schema;
use crate::validator::Visitor;
use crate::validator::VisitorContext;
use crate::validator::rules::collect_fragment_spreads;
use std::collections::HashSet;

/// Every fragment must be spread, directly or transitively, by some
/// operation.
///
/// <https://spec.graphql.org/October2021/#sec-Fragments-Must-Be-Used>
pub fn create<'a>(_schema: &'a Schema) -> Box<dyn Visitor<'a> + 'a> {
    Box::new(NoUnusedFragments)
}

struct NoUnusedFragments;
impl<'a> Visitor<'a> for NoUnusedFragments {
    fn leave_document(&mut self, ctx: &mut VisitorContext<'a>) {
        let document = ctx.document();

        let mut used = HashSet::new();
        let mut pending: Vec<&str> = document.operations.iter()
            .flat_map(|operation| collect_fragment_spreads(&operation.selection_set))
            .map(|spread| spread.fragment_name.as_str())
            .collect();
        while let Some(fragment_name) = pending.pop() {
            if !used.insert(fragment_name) {
                continue;
            }
            if let Some(fragment) = document.fragment(fragment_name) {
                pending.extend(
                    collect_fragment_spreads(&fragment.selection_set)
                        .into_iter()
                        .map(|spread| spread.fragment_name.as_str()),
                );
            }
        }

        for fragment in &document.fragments {
            if used.contains(fragment.name.as_str()) {
                continue;
            }
            ctx.report(GraphQLError::new(format!(
                "Fragment \"{}\" is never used.",
                fragment.name,
            )).with_position(&fragment.position));
        }
    }
}
