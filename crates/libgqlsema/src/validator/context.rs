use crate::GraphQLError;
use crate::ast::QueryDocument;
use crate::coerce::CoerceScalar;
use crate::schema::Schema;
use crate::validator::messaging;

/// Shared state handed to every [`Visitor`](crate::validator::Visitor)
/// event: the schema and document being validated, and the errors reported
/// so far.
pub struct VisitorContext<'a> {
    pub(crate) disable_suggestions: bool,
    pub(crate) document: &'a QueryDocument,
    pub(crate) errors: Vec<GraphQLError>,
    pub(crate) rule_name: &'static str,
    pub(crate) scalars: &'a dyn CoerceScalar,
    pub(crate) schema: &'a Schema,
}
impl<'a> VisitorContext<'a> {
    pub(crate) fn new(
        schema: &'a Schema,
        document: &'a QueryDocument,
        scalars: &'a dyn CoerceScalar,
        disable_suggestions: bool,
    ) -> Self {
        Self {
            disable_suggestions,
            document,
            errors: vec![],
            rule_name: "",
            scalars,
            schema,
        }
    }

    pub fn document(&self) -> &'a QueryDocument {
        self.document
    }

    pub fn error_count(&self) -> usize {
        self.errors.len()
    }

    /// Record an error on behalf of the rule currently handling an event.
    pub fn report(&mut self, err: GraphQLError) {
        self.errors.push(err.with_rule(self.rule_name));
    }

    /// The name of the rule currently handling an event.
    pub fn rule_name(&self) -> &'static str {
        self.rule_name
    }

    pub fn scalars(&self) -> &'a dyn CoerceScalar {
        self.scalars
    }

    pub fn schema(&self) -> &'a Schema {
        self.schema
    }

    pub fn suggestions_disabled(&self) -> bool {
        self.disable_suggestions
    }

    /// Append ` Did you mean "a", "b", or "c"?` to `message` for the
    /// `options` that look like `input`. `message` is returned unchanged if
    /// nothing is close enough or suggestions are disabled.
    pub(crate) fn suggest<'o>(
        &self,
        message: String,
        input: &str,
        options: impl IntoIterator<Item = &'o str>,
    ) -> String {
        if self.disable_suggestions {
            return message;
        }
        let suggestions = messaging::suggestion_list(input, options);
        self.with_suggestion(message, "Did you mean", &suggestions, true)
    }

    /// Append ` <prefix> <list>?` to `message`, listing `suggestions`
    /// (quoted if `quoted`), unless the list is empty or suggestions are
    /// disabled.
    pub(crate) fn with_suggestion(
        &self,
        message: String,
        prefix: &str,
        suggestions: &[String],
        quoted: bool,
    ) -> String {
        if self.disable_suggestions || suggestions.is_empty() {
            return message;
        }
        let list = if quoted {
            messaging::quoted_or_list(suggestions)
        } else {
            messaging::or_list(suggestions)
        };
        format!("{message} {prefix} {list}?")
    }

    pub(crate) fn into_errors(self) -> Vec<GraphQLError> {
        self.errors
    }
}
