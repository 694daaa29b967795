use crate::GraphQLError;
use crate::ast::Field;
use crate::ast::OperationDefinition;
use crate::ast::OperationKind;
use crate::ast::QueryDocument;
use crate::ast::Selection;
use crate::schema::Schema;
use crate::validator::Visitor;
use crate::validator::VisitorContext;
use std::collections::HashSet;

/// A subscription must select exactly one top-level field, and that field
/// must not be an introspection field. Fragments at the top level are
/// expanded before counting.
///
/// <https://spec.graphql.org/October2021/#sec-Single-root-field>
pub fn create<'a>(_schema: &'a Schema) -> Box<dyn Visitor<'a> + 'a> {
    Box::new(SingleFieldSubscriptions)
}

/// The top-level fields of `selections`, looking through inline fragments
/// and fragment spreads.
fn collect_root_fields<'d>(
    document: &'d QueryDocument,
    selections: &'d [Selection],
    visited_fragments: &mut HashSet<&'d str>,
    fields: &mut Vec<&'d Field>,
) {
    for selection in selections {
        match selection {
            Selection::Field(field) => fields.push(field),
            Selection::InlineFragment(inline) => collect_root_fields(
                document,
                &inline.selection_set,
                visited_fragments,
                fields,
            ),
            Selection::FragmentSpread(spread) => {
                if !visited_fragments.insert(spread.fragment_name.as_str()) {
                    continue;
                }
                if let Some(fragment) = document.fragment(&spread.fragment_name) {
                    collect_root_fields(
                        document,
                        &fragment.selection_set,
                        visited_fragments,
                        fields,
                    );
                }
            },
        }
    }
}

struct SingleFieldSubscriptions;
impl<'a> Visitor<'a> for SingleFieldSubscriptions {
    fn enter_operation(
        &mut self,
        ctx: &mut VisitorContext<'a>,
        operation: &'a OperationDefinition,
    ) {
        if operation.kind != OperationKind::Subscription {
            return;
        }

        let mut fields = vec![];
        collect_root_fields(
            ctx.document(),
            &operation.selection_set,
            &mut HashSet::new(),
            &mut fields,
        );

        let subscription_name = match &operation.name {
            Some(name) => format!("Subscription \"{name}\""),
            None => "Anonymous Subscription".to_string(),
        };

        let mut response_keys = HashSet::new();
        let extra_field = fields.iter().find(|field| {
            response_keys.insert(field.response_key()) && response_keys.len() > 1
        });
        match extra_field {
            Some(field) => ctx.report(GraphQLError::new(format!(
                "{subscription_name} must select only one top level field.",
            )).with_position(&field.position)),
            None if fields.is_empty() => ctx.report(GraphQLError::new(format!(
                "{subscription_name} must select only one top level field.",
            )).with_position(&operation.position)),
            None => (),
        }

        for field in fields.iter().filter(|field| field.name.starts_with("__")) {
            ctx.report(GraphQLError::new(format!(
                "{subscription_name} must not select an introspection top level field.",
            )).with_position(&field.position));
        }
    }
}
