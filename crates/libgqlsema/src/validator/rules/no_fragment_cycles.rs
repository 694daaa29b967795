use crate::GraphQLError;
use crate::ast::FragmentDefinition;
use crate::ast::FragmentSpread;
use crate::schema::Schema;
use crate::types::Definition;
use crate::validator::Visitor;
use crate::validator::VisitorContext;
use crate::validator::rules::collect_fragment_spreads;
use std::collections::HashMap;
use std::collections::HashSet;

/// Fragment spreads must not form cycles.
///
/// Each cycle is reported once, at the spread that closes it, no matter
/// how many fragments lead into it.
///
/// <https://spec.graphql.org/October2021/#sec-Fragment-spreads-must-not-form-cycles>
pub fn create<'a>(_schema: &'a Schema) -> Box<dyn Visitor<'a> + 'a> {
    Box::new(NoFragmentCycles {
        visited: HashSet::new(),
    })
}

struct NoFragmentCycles<'a> {
    /// Fragments whose spreads have already been explored from some entry
    /// point.
    visited: HashSet<&'a str>,
}
impl<'a> NoFragmentCycles<'a> {
    fn detect_cycles(
        &mut self,
        ctx: &mut VisitorContext<'a>,
        fragment: &'a FragmentDefinition,
        spread_path: &mut Vec<&'a FragmentSpread>,
        path_index: &mut HashMap<&'a str, usize>,
    ) {
        if !self.visited.insert(fragment.name.as_str()) {
            return;
        }

        let spreads = collect_fragment_spreads(&fragment.selection_set);
        if spreads.is_empty() {
            return;
        }

        path_index.insert(fragment.name.as_str(), spread_path.len());
        for spread in spreads {
            let cycle_index = path_index.get(spread.fragment_name.as_str()).copied();
            spread_path.push(spread);
            match cycle_index {
                None => {
                    if let Some(spread_fragment) = ctx.document().fragment(&spread.fragment_name) {
                        self.detect_cycles(ctx, spread_fragment, spread_path, path_index);
                    }
                },
                Some(cycle_index) => {
                    let via: Vec<&str> = spread_path[cycle_index..spread_path.len() - 1]
                        .iter()
                        .map(|spread| spread.fragment_name.as_str())
                        .collect();
                    let via = if via.is_empty() {
                        String::new()
                    } else {
                        format!(" via {}", via.join(", "))
                    };
                    ctx.report(GraphQLError::new(format!(
                        "Cannot spread fragment \"{}\" within itself{via}.",
                        spread.fragment_name,
                    )).with_position(&spread.position));
                },
            }
            spread_path.pop();
        }
        path_index.remove(fragment.name.as_str());
    }
}
impl<'a> Visitor<'a> for NoFragmentCycles<'a> {
    fn enter_fragment_definition(
        &mut self,
        ctx: &mut VisitorContext<'a>,
        fragment: &'a FragmentDefinition,
        _type_def: Option<&'a Definition>,
    ) {
        self.detect_cycles(ctx, fragment, &mut vec![], &mut HashMap::new());
    }
}
