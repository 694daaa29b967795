use crate::GraphQLError;
use crate::ast::Directive;
use crate::ast::FragmentDefinition;
use crate::ast::OperationDefinition;
use crate::ast::OperationKind;
use crate::ast::Selection;
use crate::ast::Value;
use crate::types::Definition;
use crate::types::DefinitionKind;
use crate::types::DirectiveLocation;
use crate::types::Type;
use crate::validator::ValueContext;
use crate::validator::Visitor;
use crate::validator::VisitorContext;

/// A rule instantiated for one pass, with the name its errors are tagged
/// with.
pub(crate) struct NamedVisitor<'a> {
    pub(crate) name: &'static str,
    pub(crate) visitor: Box<dyn Visitor<'a> + 'a>,
}

/// Walks a document once, resolving the schema definition that governs
/// each node and firing the matching [`Visitor`] event on every rule.
///
/// If `max_errors` is set, the count is checked after each event has been
/// delivered to every rule; once it is reached the walk stops (without
/// firing [`Visitor::leave_document()`]). All rules see the event that
/// crossed the cap, so the final count can exceed it by the number of
/// errors that event produced beyond the first.
pub(crate) struct Walker<'a> {
    ctx: VisitorContext<'a>,
    max_errors: Option<usize>,
    stopped: bool,
    visitors: Vec<NamedVisitor<'a>>,
}
impl<'a> Walker<'a> {
    pub(crate) fn new(
        ctx: VisitorContext<'a>,
        visitors: Vec<NamedVisitor<'a>>,
        max_errors: Option<usize>,
    ) -> Self {
        Self {
            ctx,
            max_errors,
            stopped: max_errors == Some(0),
            visitors,
        }
    }

    /// Walk every operation, then every fragment definition, and return the
    /// errors the visitors reported.
    pub(crate) fn walk(mut self) -> (Vec<GraphQLError>, bool) {
        let document = self.ctx.document();
        for operation in &document.operations {
            self.walk_operation(operation);
        }
        for fragment in &document.fragments {
            self.walk_fragment_definition(fragment);
        }
        self.dispatch(|visitor, ctx| visitor.leave_document(ctx));

        let stopped = self.stopped;
        (self.ctx.into_errors(), stopped)
    }

    fn dispatch(
        &mut self,
        mut event: impl FnMut(&mut (dyn Visitor<'a> + 'a), &mut VisitorContext<'a>),
    ) {
        if self.stopped {
            return;
        }
        for named in &mut self.visitors {
            self.ctx.rule_name = named.name;
            event(named.visitor.as_mut(), &mut self.ctx);
        }
        if let Some(max_errors) = self.max_errors
            && self.ctx.error_count() >= max_errors {
            tracing::debug!(max_errors, "error cap reached, stopping validation");
            self.stopped = true;
        }
    }

    fn walk_operation(&mut self, operation: &'a OperationDefinition) {
        let schema = self.ctx.schema();
        let root_type = schema.root_type(operation.kind);

        self.dispatch(|visitor, ctx| visitor.enter_operation(ctx, operation));

        for var_def in &operation.variable_definitions {
            let type_def = schema.lookup_type(var_def.ty.name());
            self.dispatch(|visitor, ctx| {
                visitor.variable_definition(ctx, operation, var_def, type_def)
            });
            if let Some(default_value) = &var_def.default_value {
                self.walk_value(default_value, ValueContext {
                    expected_def: type_def,
                    expected_type: Some(&var_def.ty),
                    input_definition: None,
                    position: &var_def.position,
                });
            }
            self.walk_directives(
                &var_def.directives,
                DirectiveLocation::VariableDefinition,
            );
        }

        let location = match operation.kind {
            OperationKind::Query => DirectiveLocation::Query,
            OperationKind::Mutation => DirectiveLocation::Mutation,
            OperationKind::Subscription => DirectiveLocation::Subscription,
        };
        self.walk_directives(&operation.directives, location);
        self.walk_selection_set(root_type, &operation.selection_set);

        self.dispatch(|visitor, ctx| visitor.leave_operation(ctx, operation));
    }

    fn walk_fragment_definition(&mut self, fragment: &'a FragmentDefinition) {
        let type_def = self.ctx.schema().lookup_type(&fragment.type_condition);

        self.dispatch(|visitor, ctx| {
            visitor.enter_fragment_definition(ctx, fragment, type_def)
        });
        self.walk_directives(
            &fragment.directives,
            DirectiveLocation::FragmentDefinition,
        );
        self.walk_selection_set(type_def, &fragment.selection_set);
        self.dispatch(|visitor, ctx| {
            visitor.leave_fragment_definition(ctx, fragment, type_def)
        });
    }

    fn walk_selection_set(
        &mut self,
        parent: Option<&'a Definition>,
        selections: &'a [Selection],
    ) {
        let schema = self.ctx.schema();
        for selection in selections {
            if self.stopped {
                return;
            }
            match selection {
                Selection::Field(field) => {
                    let field_def = parent.and_then(
                        |parent| schema.field_definition(parent, &field.name),
                    );
                    self.dispatch(|visitor, ctx| {
                        visitor.enter_field(ctx, parent, field_def, field)
                    });

                    for argument in &field.arguments {
                        let arg_def = field_def
                            .and_then(|def| def.argument(&argument.name));
                        self.walk_value(
                            &argument.value,
                            ValueContext::for_input(schema, arg_def, &argument.position),
                        );
                    }

                    let field_type = field_def
                        .and_then(|def| schema.lookup_type(def.ty().name()));
                    self.walk_selection_set(field_type, &field.selection_set);
                    self.walk_directives(&field.directives, DirectiveLocation::Field);

                    self.dispatch(|visitor, ctx| {
                        visitor.leave_field(ctx, parent, field_def, field)
                    });
                },

                Selection::FragmentSpread(spread) => {
                    let fragment = self.ctx.document().fragment(&spread.fragment_name);
                    self.dispatch(|visitor, ctx| {
                        visitor.fragment_spread(ctx, parent, fragment, spread)
                    });
                    self.walk_directives(
                        &spread.directives,
                        DirectiveLocation::FragmentSpread,
                    );
                },

                Selection::InlineFragment(inline) => {
                    let type_def = match &inline.type_condition {
                        Some(type_name) => schema.lookup_type(type_name),
                        None => parent,
                    };
                    self.dispatch(|visitor, ctx| {
                        visitor.enter_inline_fragment(ctx, parent, type_def, inline)
                    });
                    self.walk_directives(
                        &inline.directives,
                        DirectiveLocation::InlineFragment,
                    );
                    self.walk_selection_set(type_def, &inline.selection_set);
                    self.dispatch(|visitor, ctx| {
                        visitor.leave_inline_fragment(ctx, parent, type_def, inline)
                    });
                },
            }
        }
    }

    fn walk_directives(
        &mut self,
        directives: &'a [Directive],
        location: DirectiveLocation,
    ) {
        let schema = self.ctx.schema();
        self.dispatch(|visitor, ctx| {
            visitor.directive_list(ctx, directives, location)
        });
        for directive in directives {
            let directive_def = schema.directive_def(&directive.name);
            self.dispatch(|visitor, ctx| {
                visitor.directive(ctx, directive_def, directive, location)
            });
            for argument in &directive.arguments {
                let arg_def = directive_def
                    .and_then(|def| def.argument(&argument.name));
                self.walk_value(
                    &argument.value,
                    ValueContext::for_input(schema, arg_def, &argument.position),
                );
            }
        }
    }

    fn walk_value(&mut self, value: &'a Value, value_ctx: ValueContext<'a>) {
        match value {
            Value::List(items) => {
                let item_type = value_ctx.expected_type.and_then(Type::list_item_type);
                let item_ctx = ValueContext {
                    expected_def: item_type.and(value_ctx.expected_def),
                    expected_type: item_type,
                    input_definition: None,
                    position: value_ctx.position,
                };
                for item in items {
                    self.walk_value(item, item_ctx);
                }
            },

            Value::Object(fields) => {
                // A list position accepts a single object by promotion, so
                // fields resolve against the input object whatever the
                // list wrapping.
                let input_fields = value_ctx.expected_def
                    .and_then(|def| match def.kind() {
                        DefinitionKind::InputObject { fields } => Some(fields),
                        _ => None,
                    });
                for field in fields {
                    let field_def = input_fields
                        .and_then(|input_fields| input_fields.get(&field.name));
                    self.walk_value(
                        &field.value,
                        ValueContext::for_input(self.ctx.schema(), field_def, &field.position),
                    );
                }
            },

            Value::Variable(_)
                | Value::Int(_)
                | Value::Float(_)
                | Value::String(_)
                | Value::BlockString(_)
                | Value::Boolean(_)
                | Value::Null
                | Value::Enum(_) => (),
        }

        self.dispatch(|visitor, ctx| visitor.value(ctx, value, &value_ctx));
    }
}
