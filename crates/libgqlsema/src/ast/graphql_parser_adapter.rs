//! Conversion from `graphql-parser`'s executable AST into [`crate::ast`].

use crate::ast::Argument;
use crate::ast::Directive;
use crate::ast::Field;
use crate::ast::FragmentDefinition;
use crate::ast::FragmentSpread;
use crate::ast::InlineFragment;
use crate::ast::ObjectField;
use crate::ast::OperationDefinition;
use crate::ast::OperationKind;
use crate::ast::QueryDocument;
use crate::ast::Selection;
use crate::ast::Value;
use crate::ast::VariableDefinition;
use crate::loc::SourcePosition;
use crate::types::Type;
use graphql_parser::query as gp;

#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum DocumentParseError {
    #[error(
        "Failed to parse executable document `{}`: {message}",
        source_name.as_deref().unwrap_or("input"),
    )]
    ParseError {
        source_name: Option<String>,
        message: String,
    },
}

pub(super) fn document_from_gp(
    source_name: Option<&str>,
    doc: &gp::Document<'_, String>,
) -> QueryDocument {
    let mut operations = vec![];
    let mut fragments = vec![];
    for def in &doc.definitions {
        match def {
            gp::Definition::Operation(op) =>
                operations.push(operation_from_gp(source_name, op)),
            gp::Definition::Fragment(frag) =>
                fragments.push(fragment_from_gp(source_name, frag)),
        }
    }
    QueryDocument::new(operations, fragments)
}

fn operation_from_gp(
    source_name: Option<&str>,
    op: &gp::OperationDefinition<'_, String>,
) -> OperationDefinition {
    let (kind, position, name, var_defs, directives, selection_set) = match op {
        gp::OperationDefinition::SelectionSet(sel_set) => (
            OperationKind::Query,
            sel_set.span.0,
            None,
            &[][..],
            &[][..],
            sel_set,
        ),
        gp::OperationDefinition::Query(q) => (
            OperationKind::Query,
            q.position,
            q.name.as_ref(),
            &q.variable_definitions[..],
            &q.directives[..],
            &q.selection_set,
        ),
        gp::OperationDefinition::Mutation(m) => (
            OperationKind::Mutation,
            m.position,
            m.name.as_ref(),
            &m.variable_definitions[..],
            &m.directives[..],
            &m.selection_set,
        ),
        gp::OperationDefinition::Subscription(s) => (
            OperationKind::Subscription,
            s.position,
            s.name.as_ref(),
            &s.variable_definitions[..],
            &s.directives[..],
            &s.selection_set,
        ),
    };

    OperationDefinition {
        directives: directives_from_gp(source_name, directives),
        kind,
        name: name.cloned(),
        position: SourcePosition::from_pos(source_name, position),
        selection_set: selection_set_from_gp(source_name, selection_set),
        variable_definitions: var_defs
            .iter()
            .map(|var_def| variable_definition_from_gp(source_name, var_def))
            .collect(),
    }
}

fn variable_definition_from_gp(
    source_name: Option<&str>,
    var_def: &gp::VariableDefinition<'_, String>,
) -> VariableDefinition {
    let position = SourcePosition::from_pos(source_name, var_def.position);
    VariableDefinition {
        default_value: var_def
            .default_value
            .as_ref()
            .map(|value| value_from_gp(&position, value)),
        // graphql-parser 0.4 does not parse variable directives.
        directives: vec![],
        name: var_def.name.clone(),
        ty: Type::from_gp(&var_def.var_type),
        position,
    }
}

fn fragment_from_gp(
    source_name: Option<&str>,
    frag: &gp::FragmentDefinition<'_, String>,
) -> FragmentDefinition {
    let gp::TypeCondition::On(type_condition) = &frag.type_condition;
    FragmentDefinition {
        directives: directives_from_gp(source_name, &frag.directives),
        name: frag.name.clone(),
        position: SourcePosition::from_pos(source_name, frag.position),
        selection_set: selection_set_from_gp(source_name, &frag.selection_set),
        type_condition: type_condition.clone(),
    }
}

fn selection_set_from_gp(
    source_name: Option<&str>,
    sel_set: &gp::SelectionSet<'_, String>,
) -> Vec<Selection> {
    sel_set.items.iter().map(|selection| match selection {
        gp::Selection::Field(field) => Selection::Field(Field {
            alias: field.alias.clone(),
            arguments: arguments_from_gp(
                source_name,
                field.position,
                &field.arguments,
            ),
            directives: directives_from_gp(source_name, &field.directives),
            name: field.name.clone(),
            position: SourcePosition::from_pos(source_name, field.position),
            selection_set: selection_set_from_gp(
                source_name,
                &field.selection_set,
            ),
        }),

        gp::Selection::FragmentSpread(spread) =>
            Selection::FragmentSpread(FragmentSpread {
                directives: directives_from_gp(source_name, &spread.directives),
                fragment_name: spread.fragment_name.clone(),
                position: SourcePosition::from_pos(
                    source_name,
                    spread.position,
                ),
            }),

        gp::Selection::InlineFragment(inline) =>
            Selection::InlineFragment(InlineFragment {
                directives: directives_from_gp(source_name, &inline.directives),
                position: SourcePosition::from_pos(
                    source_name,
                    inline.position,
                ),
                selection_set: selection_set_from_gp(
                    source_name,
                    &inline.selection_set,
                ),
                type_condition: inline.type_condition.as_ref().map(
                    |gp::TypeCondition::On(name)| name.clone(),
                ),
            }),
    }).collect()
}

pub(crate) fn directives_from_gp(
    source_name: Option<&str>,
    directives: &[gp::Directive<'_, String>],
) -> Vec<Directive> {
    directives.iter().map(|directive| Directive {
        arguments: arguments_from_gp(
            source_name,
            directive.position,
            &directive.arguments,
        ),
        name: directive.name.clone(),
        position: SourcePosition::from_pos(source_name, directive.position),
    }).collect()
}

// graphql-parser does not record argument positions, so each argument is
// attributed to the position of the node that carries it.
fn arguments_from_gp(
    source_name: Option<&str>,
    owner_pos: graphql_parser::Pos,
    arguments: &[(String, gp::Value<'_, String>)],
) -> Vec<Argument> {
    let position = SourcePosition::from_pos(source_name, owner_pos);
    arguments.iter().map(|(name, value)| Argument {
        name: name.clone(),
        value: value_from_gp(&position, value),
        position: position.clone(),
    }).collect()
}

pub(crate) fn value_from_gp(
    position: &SourcePosition,
    value: &gp::Value<'_, String>,
) -> Value {
    match value {
        gp::Value::Variable(name) => Value::Variable(name.clone()),
        gp::Value::Int(num) => Value::Int(
            num.as_i64().map(|i| i.to_string()).unwrap_or_default(),
        ),
        // `{:?}` keeps the fractional part of integral floats (`1.0`).
        gp::Value::Float(f) => Value::Float(format!("{f:?}")),
        gp::Value::String(s) => Value::String(s.clone()),
        gp::Value::Boolean(b) => Value::Boolean(*b),
        gp::Value::Null => Value::Null,
        gp::Value::Enum(name) => Value::Enum(name.clone()),
        gp::Value::List(items) => Value::List(
            items.iter().map(|item| value_from_gp(position, item)).collect(),
        ),
        gp::Value::Object(fields) => Value::Object(
            fields.iter().map(|(name, value)| ObjectField {
                name: name.clone(),
                position: position.clone(),
                value: value_from_gp(position, value),
            }).collect(),
        ),
    }
}
