use crate::ast::FragmentDefinition;
use crate::ast::FragmentSpread;
use crate::ast::OperationDefinition;
use crate::ast::Value;
use crate::loc::SourcePosition;
use crate::types::Definition;
use crate::types::Type;
use crate::validator::ValueContext;
use crate::validator::Visitor;
use crate::validator::VisitorContext;
use std::collections::HashMap;
use std::collections::HashSet;

/// One place a variable is referenced.
#[derive(Clone, Debug)]
pub(crate) struct VariableUsage<'a> {
    pub(crate) expected_type: Option<&'a Type>,
    pub(crate) has_location_default: bool,
    pub(crate) name: &'a str,
    pub(crate) position: &'a SourcePosition,
}

#[derive(Debug, Default)]
struct ScopeUsages<'a> {
    spreads: Vec<&'a str>,
    usages: Vec<VariableUsage<'a>>,
}

#[derive(Clone, Copy, Debug)]
enum Scope<'a> {
    Fragment(&'a str),
    None,
    Operation(usize),
}

/// Checks an operation against every variable usage reachable from it.
pub(crate) type UsageCheck<'a> = fn(
    &mut VisitorContext<'a>,
    &'a OperationDefinition,
    &[&VariableUsage<'a>],
);

/// A rule about the variables operations use.
///
/// Records the variables each operation and fragment references, and the
/// fragments each spreads. Once the whole document has been walked, `check`
/// runs for each operation with the usages reachable from it: its own, then
/// those of the fragments it spreads (transitively), each fragment counted
/// once.
pub(crate) struct VariableUsages<'a> {
    check: UsageCheck<'a>,
    current: Scope<'a>,
    fragments: HashMap<&'a str, ScopeUsages<'a>>,
    operations: Vec<(&'a OperationDefinition, ScopeUsages<'a>)>,
}
impl<'a> VariableUsages<'a> {
    pub(crate) fn new(check: UsageCheck<'a>) -> Self {
        Self {
            check,
            current: Scope::None,
            fragments: HashMap::new(),
            operations: vec![],
        }
    }

    fn reachable_usages<'s>(
        &'s self,
        scope: &'s ScopeUsages<'a>,
    ) -> Vec<&'s VariableUsage<'a>> {
        let mut usages: Vec<&'s VariableUsage<'a>> = scope.usages.iter().collect();
        let mut visited = HashSet::new();
        let mut pending: Vec<&'a str> = scope.spreads.iter().rev().copied().collect();
        while let Some(fragment_name) = pending.pop() {
            if !visited.insert(fragment_name) {
                continue;
            }
            if let Some(fragment_scope) = self.fragments.get(fragment_name) {
                usages.extend(fragment_scope.usages.iter());
                pending.extend(fragment_scope.spreads.iter().rev());
            }
        }
        usages
    }

    fn record_value(&mut self, value: &'a Value, value_ctx: &ValueContext<'a>) {
        let Value::Variable(name) = value else {
            return;
        };
        let usage = VariableUsage {
            expected_type: value_ctx.expected_type,
            has_location_default: value_ctx.has_location_default(),
            name: name.as_str(),
            position: value_ctx.position,
        };
        if let Some(scope) = self.current_scope_mut() {
            scope.usages.push(usage);
        }
    }

    fn current_scope_mut(&mut self) -> Option<&mut ScopeUsages<'a>> {
        match self.current {
            Scope::None => None,
            Scope::Operation(idx) =>
                self.operations.get_mut(idx).map(|(_, scope)| scope),
            Scope::Fragment(name) => Some(self.fragments.entry(name).or_default()),
        }
    }
}
impl<'a> Visitor<'a> for VariableUsages<'a> {
    fn enter_operation(
        &mut self,
        _ctx: &mut VisitorContext<'a>,
        operation: &'a OperationDefinition,
    ) {
        self.current = Scope::Operation(self.operations.len());
        self.operations.push((operation, ScopeUsages::default()));
    }

    fn leave_operation(
        &mut self,
        _ctx: &mut VisitorContext<'a>,
        _operation: &'a OperationDefinition,
    ) {
        self.current = Scope::None;
    }

    fn enter_fragment_definition(
        &mut self,
        _ctx: &mut VisitorContext<'a>,
        fragment: &'a FragmentDefinition,
        _type_def: Option<&'a Definition>,
    ) {
        self.current = Scope::Fragment(fragment.name.as_str());
    }

    fn leave_fragment_definition(
        &mut self,
        _ctx: &mut VisitorContext<'a>,
        _fragment: &'a FragmentDefinition,
        _type_def: Option<&'a Definition>,
    ) {
        self.current = Scope::None;
    }

    fn fragment_spread(
        &mut self,
        _ctx: &mut VisitorContext<'a>,
        _parent: Option<&'a Definition>,
        _fragment: Option<&'a FragmentDefinition>,
        spread: &'a FragmentSpread,
    ) {
        if let Some(scope) = self.current_scope_mut() {
            scope.spreads.push(spread.fragment_name.as_str());
        }
    }

    fn value(
        &mut self,
        _ctx: &mut VisitorContext<'a>,
        value: &'a Value,
        value_ctx: &ValueContext<'a>,
    ) {
        self.record_value(value, value_ctx);
    }

    fn leave_document(&mut self, ctx: &mut VisitorContext<'a>) {
        for (operation, scope) in &self.operations {
            let usages = self.reachable_usages(scope);
            (self.check)(ctx, *operation, &usages);
        }
    }
}
