use crate::GraphQLError;
use crate::ast::Argument;
use crate::ast::Field;
use crate::ast::FragmentDefinition;
use crate::ast::OperationDefinition;
use crate::ast::QueryDocument;
use crate::ast::Selection;
use crate::schema::Schema;
use crate::types::Definition;
use crate::types::FieldDefinition;
use crate::validator::Visitor;
use crate::validator::VisitorContext;
use indexmap::IndexMap;
use std::collections::HashSet;
use std::fmt::Write;

/// Fields that share a response key must be mergeable: same field name,
/// same arguments, and the same type.
///
/// Field occurrences are bucketed one selection level at a time. Spreads
/// are expanded in place (each fragment at most once per level), inline
/// fragments without a type condition (or conditioned on the type they
/// are already in) are transparent, and any other type condition starts a
/// separate bucket, since fields selected on distinct concrete types never
/// land in the same response object. Each bucket with a conflict yields one
/// error listing every conflicting occurrence; the merged sub-selections of
/// each bucket are then checked as the next level.
///
/// A group of selection sets is only checked once per operation (or
/// fragment definition), which keeps repeated and nested spreads of the
/// same fragment linear in the size of the document.
///
/// A conflict found entirely inside one spread fragment is left for that
/// fragment's own definition to report.
///
/// <https://spec.graphql.org/October2021/#sec-Field-Selection-Merging>
pub fn create<'a>(_schema: &'a Schema) -> Box<dyn Visitor<'a> + 'a> {
    Box::new(OverlappingFieldsCanBeMerged)
}

struct FieldOccurrence<'a> {
    field: &'a Field,
    field_def: Option<&'a FieldDefinition>,
    /// The fragment (spread directly at the boundary being checked) this
    /// occurrence was reached through.
    origin: Option<&'a str>,
    parent: Option<&'a Definition>,
}

struct ResponseBucket<'a> {
    display_key: String,
    occurrences: Vec<FieldOccurrence<'a>>,
}

/// One selection set taking part in a level, with the type it selects
/// against.
struct SelectionSource<'a> {
    origin: Option<&'a str>,
    parent: Option<&'a Definition>,
    selections: &'a [Selection],
}

type SourceKey<'a> = (*const Selection, Option<&'a str>, Option<&'a str>);

struct FieldMergeChecker<'a> {
    boundary: Option<&'a str>,
    checked: HashSet<Vec<SourceKey<'a>>>,
    document: &'a QueryDocument,
    errors: Vec<GraphQLError>,
    schema: &'a Schema,
}
impl<'a> FieldMergeChecker<'a> {
    fn new(
        schema: &'a Schema,
        document: &'a QueryDocument,
        boundary: Option<&'a str>,
    ) -> Self {
        Self {
            boundary,
            checked: HashSet::new(),
            document,
            errors: vec![],
            schema,
        }
    }

    fn check_level(
        &mut self,
        sources: Vec<SelectionSource<'a>>,
        display_path: &str,
    ) {
        let mut level_key: Vec<SourceKey<'a>> = sources.iter()
            .map(|source| (
                source.selections.as_ptr(),
                source.parent.map(Definition::name),
                source.origin,
            ))
            .collect();
        level_key.sort();
        level_key.dedup();
        if !self.checked.insert(level_key) {
            return;
        }

        let mut buckets = IndexMap::new();
        let mut expanded = HashSet::new();
        for source in &sources {
            self.collect(
                &mut buckets,
                &mut expanded,
                source.selections,
                source.parent,
                "",
                display_path,
                source.origin,
            );
        }

        for bucket in buckets.into_values() {
            self.check_bucket(&bucket);

            let sub_sources: Vec<SelectionSource<'a>> = bucket.occurrences.iter()
                .filter(|occurrence| !occurrence.field.selection_set.is_empty())
                .map(|occurrence| {
                    let field: &'a Field = occurrence.field;
                    SelectionSource {
                        origin: occurrence.origin,
                        parent: occurrence.field_def.and_then(|def| {
                            self.schema.lookup_type(def.ty().name())
                        }),
                        selections: &field.selection_set,
                    }
                })
                .collect();
            if !sub_sources.is_empty() {
                self.check_level(sub_sources, &bucket.display_key);
            }
        }
    }

    /// Buckets the fields of one selection level. `path` holds the type
    /// conditions entered so far within this level.
    #[allow(clippy::too_many_arguments)]
    fn collect(
        &self,
        buckets: &mut IndexMap<String, ResponseBucket<'a>>,
        expanded: &mut HashSet<(String, &'a str)>,
        selections: &'a [Selection],
        parent: Option<&'a Definition>,
        path: &str,
        display_path: &str,
        origin: Option<&'a str>,
    ) {
        for selection in selections {
            match selection {
                Selection::Field(field) => {
                    let response_key = field.response_key();
                    let field_def = parent.and_then(|parent| {
                        self.schema.field_definition(parent, &field.name)
                    });
                    buckets.entry(join_path(path, response_key))
                        .or_insert_with(|| ResponseBucket {
                            display_key: join_path(display_path, response_key),
                            occurrences: vec![],
                        })
                        .occurrences
                        .push(FieldOccurrence {
                            field,
                            field_def,
                            origin,
                            parent,
                        });
                },

                Selection::InlineFragment(inline) => {
                    let (type_def, path) = self.narrow(
                        parent,
                        inline.type_condition.as_deref(),
                        path,
                    );
                    self.collect(
                        buckets,
                        expanded,
                        &inline.selection_set,
                        type_def,
                        &path,
                        display_path,
                        origin,
                    );
                },

                Selection::FragmentSpread(spread) => {
                    let name = spread.fragment_name.as_str();
                    if !expanded.insert((path.to_string(), name)) {
                        continue;
                    }
                    let Some(fragment) = self.document.fragment(name) else {
                        continue;
                    };
                    let (type_def, path) = self.narrow(
                        parent,
                        Some(fragment.type_condition.as_str()),
                        path,
                    );
                    self.collect(
                        buckets,
                        expanded,
                        &fragment.selection_set,
                        type_def,
                        &path,
                        display_path,
                        origin.or(Some(fragment.name.as_str())),
                    );
                },
            }
        }
    }

    /// The type selections under a fragment select against, and the bucket
    /// path they belong to.
    fn narrow(
        &self,
        parent: Option<&'a Definition>,
        type_condition: Option<&str>,
        path: &str,
    ) -> (Option<&'a Definition>, String) {
        match type_condition {
            Some(condition) if parent.is_none_or(|parent| parent.name() != condition) => (
                self.schema.lookup_type(condition),
                format!("{path}|on {condition}"),
            ),
            Some(_) | None => (parent, path.to_string()),
        }
    }

    fn check_bucket(&mut self, bucket: &ResponseBucket<'a>) {
        let occurrences = &bucket.occurrences;
        let mut conflicting = vec![false; occurrences.len()];
        for (i, outer) in occurrences.iter().enumerate() {
            for (j, inner) in occurrences.iter().enumerate().skip(i + 1) {
                if conflicts(outer, inner) {
                    conflicting[i] = true;
                    conflicting[j] = true;
                }
            }
        }

        let conflicts: Vec<&FieldOccurrence<'_>> = occurrences.iter()
            .zip(&conflicting)
            .filter_map(|(occurrence, conflicting)| conflicting.then_some(occurrence))
            .collect();
        let Some(first) = conflicts.first() else {
            return;
        };
        let within_one_fragment = first.origin.is_some()
            && first.origin != self.boundary
            && conflicts.iter().all(|occurrence| occurrence.origin == first.origin);
        if within_one_fragment {
            return;
        }

        let descriptions: Vec<String> = conflicts.iter()
            .map(|occurrence| describe(occurrence))
            .collect();
        let mut err = GraphQLError::new(format!(
            "Field {} has multiple conflicting definitions:\n    {}",
            bucket.display_key,
            descriptions.join("\n    "),
        ));
        for occurrence in &conflicts {
            err = err.with_position(&occurrence.field.position);
        }
        self.errors.push(err);
    }
}

fn join_path(path: &str, key: &str) -> String {
    if path.is_empty() {
        key.to_string()
    } else {
        format!("{path}.{key}")
    }
}

fn same_arguments(a: &[Argument], b: &[Argument]) -> bool {
    a.len() == b.len()
        && a.iter().all(|a_arg| {
            b.iter().any(|b_arg| {
                a_arg.name == b_arg.name
                    && a_arg.value.to_string() == b_arg.value.to_string()
            })
        })
}

fn conflicts(a: &FieldOccurrence<'_>, b: &FieldOccurrence<'_>) -> bool {
    if a.field.name != b.field.name {
        return true;
    }
    if !same_arguments(&a.field.arguments, &b.field.arguments) {
        return true;
    }
    match (a.field_def, b.field_def) {
        (Some(a_def), Some(b_def)) =>
            !(a_def.ty().is_compatible(b_def.ty()) && b_def.ty().is_compatible(a_def.ty())),
        _ => false,
    }
}

fn write_arguments(out: &mut String, arguments: &[Argument]) {
    out.push('(');
    for (idx, argument) in arguments.iter().enumerate() {
        if idx > 0 {
            out.push_str(", ");
        }
        let _ = write!(out, "{}: {}", argument.name, argument.value);
    }
    out.push(')');
}

/// Renders an occurrence as `Parent.name(args)@directive(args): Type`.
fn describe(occurrence: &FieldOccurrence<'_>) -> String {
    let mut out = String::new();
    out.push_str(occurrence.parent.map_or("???", Definition::name));
    out.push('.');
    out.push_str(&occurrence.field.name);
    write_arguments(&mut out, &occurrence.field.arguments);
    for directive in &occurrence.field.directives {
        out.push('@');
        out.push_str(&directive.name);
        write_arguments(&mut out, &directive.arguments);
    }
    if let Some(field_def) = occurrence.field_def {
        let _ = write!(out, ": {}", field_def.ty());
    }
    out
}

struct OverlappingFieldsCanBeMerged;
impl<'a> Visitor<'a> for OverlappingFieldsCanBeMerged {
    fn enter_operation(
        &mut self,
        ctx: &mut VisitorContext<'a>,
        operation: &'a OperationDefinition,
    ) {
        let root_type = ctx.schema().root_type(operation.kind);
        let mut checker = FieldMergeChecker::new(ctx.schema(), ctx.document(), None);
        checker.check_level(vec![SelectionSource {
            origin: None,
            parent: root_type,
            selections: &operation.selection_set,
        }], "");
        for err in checker.errors {
            ctx.report(err);
        }
    }

    fn enter_fragment_definition(
        &mut self,
        ctx: &mut VisitorContext<'a>,
        fragment: &'a FragmentDefinition,
        type_def: Option<&'a Definition>,
    ) {
        let mut checker = FieldMergeChecker::new(
            ctx.schema(),
            ctx.document(),
            Some(fragment.name.as_str()),
        );
        checker.check_level(vec![SelectionSource {
            origin: None,
            parent: type_def,
            selections: &fragment.selection_set,
        }], "");
        for err in checker.errors {
            ctx.report(err);
        }
    }
}
