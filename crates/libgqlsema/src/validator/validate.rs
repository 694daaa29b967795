use crate::GraphQLError;
use crate::GraphQLErrors;
use crate::ast::QueryDocument;
use crate::schema::Schema;
use crate::validator::ValidateOptions;
use crate::validator::VisitorContext;
use crate::validator::walker::NamedVisitor;
use crate::validator::walker::Walker;

/// Validate `document` against `schema` with the rules in `options`.
///
/// All rules run together in a single walk of the document, and every
/// error they find is returned (up to `options.max_errors()`), in the order
/// found. Each error's [`rule`](GraphQLError::rule) names the rule that
/// reported it.
///
/// A missing schema or document is reported as an error rather than
/// validated.
pub fn validate(
    schema: Option<&Schema>,
    document: Option<&QueryDocument>,
    options: &ValidateOptions,
) -> GraphQLErrors {
    let (schema, document) = match (schema, document) {
        (Some(schema), Some(document)) => (schema, document),
        (schema, document) => {
            let mut errors = vec![];
            if schema.is_none() {
                errors.push(GraphQLError::new("cannot validate without a schema"));
            }
            if document.is_none() {
                errors.push(GraphQLError::new("cannot validate without a document"));
            }
            return GraphQLErrors(errors);
        },
    };

    let visitors = options.rules().entries().iter().map(|entry| NamedVisitor {
        name: entry.name,
        visitor: (entry.factory)(schema),
    }).collect();
    let ctx = VisitorContext::new(
        schema,
        document,
        options.scalars(),
        options.disable_suggestions(),
    );

    tracing::debug!(
        rules = options.rules().len(),
        operations = document.operations.len(),
        fragments = document.fragments.len(),
        "validating document",
    );
    let (errors, stopped) = Walker::new(ctx, visitors, options.max_errors()).walk();
    tracing::debug!(errors = errors.len(), stopped, "validated document");

    GraphQLErrors(errors)
}
