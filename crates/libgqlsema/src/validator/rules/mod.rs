//! The validation rules [`DEFAULT_RULES`](crate::validator::DEFAULT_RULES)
//! is made of. Each module exposes a `create` function usable as a
//! [`RuleFactory`](crate::validator::RuleFactory), so custom rule sets can
//! mix these with their own.
//!
//! <https://spec.graphql.org/October2021/#sec-Validation>

pub mod fields_on_correct_type;
pub mod fragments_on_composite_types;
pub mod known_argument_names;
pub mod known_directives;
pub mod known_fragment_names;
pub mod known_root_type;
pub mod known_type_names;
pub mod lone_anonymous_operation;
pub mod no_fragment_cycles;
pub mod no_undefined_variables;
pub mod no_unused_fragments;
pub mod no_unused_variables;
pub mod overlapping_fields_can_be_merged;
pub mod possible_fragment_spreads;
pub mod provided_required_arguments;
pub mod scalar_leafs;
pub mod single_field_subscriptions;
pub mod unique_argument_names;
pub mod unique_directives_per_location;
pub mod unique_fragment_names;
pub mod unique_input_field_names;
pub mod unique_operation_names;
pub mod unique_variable_names;
pub mod values_of_correct_type;
pub mod variables_are_input_types;
pub mod variables_in_allowed_position;
mod variable_usages;

use crate::ast::FragmentSpread;
use crate::ast::Selection;

/// Every fragment spread in `selections`, including those nested in fields
/// and inline fragments, in document order. Spread fragments are not
/// followed.
pub(crate) fn collect_fragment_spreads(selections: &[Selection]) -> Vec<&FragmentSpread> {
    let mut spreads = vec![];
    collect_spreads_into(selections, &mut spreads);
    spreads
}

fn collect_spreads_into<'s>(
    selections: &'s [Selection],
    spreads: &mut Vec<&'s FragmentSpread>,
) {
    for selection in selections {
        match selection {
            Selection::Field(field) =>
                collect_spreads_into(&field.selection_set, spreads),
            Selection::InlineFragment(inline) =>
                collect_spreads_into(&inline.selection_set, spreads),
            Selection::FragmentSpread(spread) => spreads.push(spread),
        }
    }
}
