use crate::ast::Directive;
use crate::ast::Field;
use crate::ast::FragmentDefinition;
use crate::ast::FragmentSpread;
use crate::ast::InlineFragment;
use crate::ast::OperationDefinition;
use crate::ast::Value;
use crate::ast::VariableDefinition;
use crate::loc::SourcePosition;
use crate::schema::Schema;
use crate::types::Definition;
use crate::types::DirectiveDefinition;
use crate::types::DirectiveLocation;
use crate::types::FieldDefinition;
use crate::types::Type;
use crate::validator::VisitorContext;

/// Observer of the events fired by a single validation pass.
///
/// Every method has an empty default, so a rule only implements the events
/// it needs. A visitor is created fresh for each call to
/// [`validate()`](crate::validator::validate()) and is dropped when that
/// call returns; any state it accumulates is scoped to one document.
///
/// Events arrive in document order: every operation, then every fragment
/// definition, then [`Visitor::leave_document()`]. Fragment bodies are
/// walked once, at their definition, never at spread sites.
///
/// `parent` arguments carry the [`Definition`] that selections at that
/// point select against, or `None` when it could not be resolved (an
/// unknown type condition, a field on an unknown type, ...). Rules that
/// are not about unknown names should stay quiet when it is `None`.
pub trait Visitor<'a> {
    fn enter_operation(
        &mut self,
        _ctx: &mut VisitorContext<'a>,
        _operation: &'a OperationDefinition,
    ) {}

    fn leave_operation(
        &mut self,
        _ctx: &mut VisitorContext<'a>,
        _operation: &'a OperationDefinition,
    ) {}

    /// Fired for each of `operation`'s variable definitions, before its
    /// directives and selections are walked. `type_def` is the named type
    /// the variable's declared type resolves to.
    fn variable_definition(
        &mut self,
        _ctx: &mut VisitorContext<'a>,
        _operation: &'a OperationDefinition,
        _var_def: &'a VariableDefinition,
        _type_def: Option<&'a Definition>,
    ) {}

    fn enter_fragment_definition(
        &mut self,
        _ctx: &mut VisitorContext<'a>,
        _fragment: &'a FragmentDefinition,
        _type_def: Option<&'a Definition>,
    ) {}

    fn leave_fragment_definition(
        &mut self,
        _ctx: &mut VisitorContext<'a>,
        _fragment: &'a FragmentDefinition,
        _type_def: Option<&'a Definition>,
    ) {}

    /// Fired before a field's arguments, sub-selections, and directives are
    /// walked. `field_def` includes meta-fields such as `__typename`.
    fn enter_field(
        &mut self,
        _ctx: &mut VisitorContext<'a>,
        _parent: Option<&'a Definition>,
        _field_def: Option<&'a FieldDefinition>,
        _field: &'a Field,
    ) {}

    fn leave_field(
        &mut self,
        _ctx: &mut VisitorContext<'a>,
        _parent: Option<&'a Definition>,
        _field_def: Option<&'a FieldDefinition>,
        _field: &'a Field,
    ) {}

    /// `type_def` is the type condition's definition, or `parent` for an
    /// inline fragment without a type condition.
    fn enter_inline_fragment(
        &mut self,
        _ctx: &mut VisitorContext<'a>,
        _parent: Option<&'a Definition>,
        _type_def: Option<&'a Definition>,
        _inline: &'a InlineFragment,
    ) {}

    fn leave_inline_fragment(
        &mut self,
        _ctx: &mut VisitorContext<'a>,
        _parent: Option<&'a Definition>,
        _type_def: Option<&'a Definition>,
        _inline: &'a InlineFragment,
    ) {}

    /// `fragment` is the definition the spread names, if the document has
    /// one.
    fn fragment_spread(
        &mut self,
        _ctx: &mut VisitorContext<'a>,
        _parent: Option<&'a Definition>,
        _fragment: Option<&'a FragmentDefinition>,
        _spread: &'a FragmentSpread,
    ) {}

    /// Fired once per directive location (even an empty one), before the
    /// individual directives.
    fn directive_list(
        &mut self,
        _ctx: &mut VisitorContext<'a>,
        _directives: &'a [Directive],
        _location: DirectiveLocation,
    ) {}

    fn directive(
        &mut self,
        _ctx: &mut VisitorContext<'a>,
        _directive_def: Option<&'a DirectiveDefinition>,
        _directive: &'a Directive,
        _location: DirectiveLocation,
    ) {}

    /// Fired for every value node, children before their parent list or
    /// object.
    fn value(
        &mut self,
        _ctx: &mut VisitorContext<'a>,
        _value: &'a Value,
        _value_ctx: &ValueContext<'a>,
    ) {}

    /// Fired once after every definition has been walked.
    fn leave_document(&mut self, _ctx: &mut VisitorContext<'a>) {}
}

/// What the walker knows about the position a value appears in.
#[derive(Clone, Copy, Debug)]
pub struct ValueContext<'a> {
    /// The named type `expected_type` resolves to.
    pub expected_def: Option<&'a Definition>,

    /// The type this position requires, if the argument or input field it
    /// belongs to is known.
    pub expected_type: Option<&'a Type>,

    /// The argument or input field the value is given for. `None` for list
    /// items and variable default values.
    pub input_definition: Option<&'a FieldDefinition>,

    /// The closest position the document records for this value.
    pub position: &'a SourcePosition,
}
impl<'a> ValueContext<'a> {
    pub(crate) fn for_input(
        schema: &'a Schema,
        input_definition: Option<&'a FieldDefinition>,
        position: &'a SourcePosition,
    ) -> Self {
        Self {
            expected_def: input_definition
                .and_then(|def| schema.lookup_type(def.ty().name())),
            expected_type: input_definition.map(FieldDefinition::ty),
            input_definition,
            position,
        }
    }

    /// Whether the argument or input field this value is given for declares
    /// a default value.
    pub fn has_location_default(&self) -> bool {
        self.input_definition
            .is_some_and(|def| def.default_value().is_some())
    }
}
