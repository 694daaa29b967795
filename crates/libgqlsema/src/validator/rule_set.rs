use crate::schema::Schema;
use crate::validator::Visitor;
use crate::validator::rules;

/// Creates the per-call state of a rule.
///
/// A factory runs once per [`validate()`](crate::validator::validate())
/// call; the returned visitor is dropped when the call returns.
pub type RuleFactory = for<'a> fn(&'a Schema) -> Box<dyn Visitor<'a> + 'a>;

/// A named validation rule. The name tags every error the rule reports.
#[derive(Clone, Copy, Debug)]
pub struct RuleEntry {
    pub factory: RuleFactory,
    pub name: &'static str,
}
impl RuleEntry {
    pub const fn new(name: &'static str, factory: RuleFactory) -> Self {
        Self {
            factory,
            name,
        }
    }
}

/// Every rule this crate defines, in the order they run by default.
pub const DEFAULT_RULES: &[RuleEntry] = &[
    RuleEntry::new("FieldsOnCorrectType", rules::fields_on_correct_type::create),
    RuleEntry::new("FragmentsOnCompositeTypes", rules::fragments_on_composite_types::create),
    RuleEntry::new("KnownArgumentNames", rules::known_argument_names::create),
    RuleEntry::new("KnownDirectives", rules::known_directives::create),
    RuleEntry::new("KnownFragmentNames", rules::known_fragment_names::create),
    RuleEntry::new("KnownRootType", rules::known_root_type::create),
    RuleEntry::new("KnownTypeNames", rules::known_type_names::create),
    RuleEntry::new("LoneAnonymousOperation", rules::lone_anonymous_operation::create),
    RuleEntry::new("NoFragmentCycles", rules::no_fragment_cycles::create),
    RuleEntry::new("NoUndefinedVariables", rules::no_undefined_variables::create),
    RuleEntry::new("NoUnusedFragments", rules::no_unused_fragments::create),
    RuleEntry::new("NoUnusedVariables", rules::no_unused_variables::create),
    RuleEntry::new("OverlappingFieldsCanBeMerged", rules::overlapping_fields_can_be_merged::create),
    RuleEntry::new("PossibleFragmentSpreads", rules::possible_fragment_spreads::create),
    RuleEntry::new("ProvidedRequiredArguments", rules::provided_required_arguments::create),
    RuleEntry::new("ScalarLeafs", rules::scalar_leafs::create),
    RuleEntry::new("SingleFieldSubscriptions", rules::single_field_subscriptions::create),
    RuleEntry::new("UniqueArgumentNames", rules::unique_argument_names::create),
    RuleEntry::new("UniqueDirectivesPerLocation", rules::unique_directives_per_location::create),
    RuleEntry::new("UniqueFragmentNames", rules::unique_fragment_names::create),
    RuleEntry::new("UniqueInputFieldNames", rules::unique_input_field_names::create),
    RuleEntry::new("UniqueOperationNames", rules::unique_operation_names::create),
    RuleEntry::new("UniqueVariableNames", rules::unique_variable_names::create),
    RuleEntry::new("ValuesOfCorrectType", rules::values_of_correct_type::create),
    RuleEntry::new("VariablesAreInputTypes", rules::variables_are_input_types::create),
    RuleEntry::new("VariablesInAllowedPosition", rules::variables_in_allowed_position::create),
];

/// An ordered, caller-owned collection of rules to validate with.
///
/// ```
/// use libgqlsema::validator::DEFAULT_RULES;
/// use libgqlsema::validator::RuleSet;
///
/// let rules = RuleSet::default().remove_rule("NoUnusedFragments");
/// assert_eq!(rules.len(), DEFAULT_RULES.len() - 1);
/// assert!(!rules.names().contains(&"NoUnusedFragments"));
/// ```
#[derive(Clone, Debug)]
pub struct RuleSet {
    entries: Vec<RuleEntry>,
}
impl RuleSet {
    /// A rule set with no rules.
    pub fn empty() -> Self {
        Self {
            entries: vec![],
        }
    }

    /// Append a rule. A rule with the same name is replaced in place
    /// instead.
    pub fn add_rule(mut self, name: &'static str, factory: RuleFactory) -> Self {
        let entry = RuleEntry::new(name, factory);
        match self.entries.iter_mut().find(|existing| existing.name == name) {
            Some(existing) => *existing = entry,
            None => self.entries.push(entry),
        }
        self
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.iter().any(|entry| entry.name == name)
    }

    pub fn entries(&self) -> &[RuleEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.entries.iter().map(|entry| entry.name).collect()
    }

    /// Remove the rule with the given name, if present.
    pub fn remove_rule(mut self, name: &str) -> Self {
        self.entries.retain(|entry| entry.name != name);
        self
    }

    /// Swap the implementation of an existing rule, keeping its position.
    /// Does nothing if no rule has that name.
    pub fn replace_rule(mut self, name: &str, factory: RuleFactory) -> Self {
        if let Some(entry) = self.entries.iter_mut().find(|entry| entry.name == name) {
            entry.factory = factory;
        }
        self
    }
}
impl std::default::Default for RuleSet {
    /// The [`DEFAULT_RULES`].
    fn default() -> Self {
        Self {
            entries: DEFAULT_RULES.to_vec(),
        }
    }
}
