use crate::coerce::CoerceScalar;
use crate::coerce::DefaultScalarCoercion;
use crate::validator::RuleSet;
use std::sync::Arc;

/// Serializable validator settings, e.g. from a server's config file.
///
/// Every field is optional when deserializing:
///
/// ```
/// use libgqlsema::validator::ValidateOptions;
/// use libgqlsema::validator::ValidatorConfig;
///
/// let config: ValidatorConfig = serde_json::from_str(
///     r#"{"max_errors": 10, "disabled_rules": ["NoUnusedFragments"]}"#,
/// ).unwrap();
/// let options = ValidateOptions::from_config(&config);
/// assert_eq!(options.max_errors(), Some(10));
/// assert!(!options.rules().contains("NoUnusedFragments"));
/// ```
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct ValidatorConfig {
    pub disable_suggestions: bool,
    pub disabled_rules: Vec<String>,
    pub max_errors: Option<usize>,
}

/// How [`validate()`](crate::validator::validate()) should run.
#[derive(Clone)]
pub struct ValidateOptions {
    disable_suggestions: bool,
    max_errors: Option<usize>,
    rules: RuleSet,
    scalars: Arc<dyn CoerceScalar + Send + Sync>,
}
impl ValidateOptions {
    /// Start from the [default rules](crate::validator::DEFAULT_RULES) and
    /// apply `config`. Disabled rule names that match no rule are ignored.
    pub fn from_config(config: &ValidatorConfig) -> Self {
        let mut rules = RuleSet::default();
        for name in &config.disabled_rules {
            if !rules.contains(name) {
                tracing::debug!(rule = %name, "ignoring unknown disabled rule");
                continue;
            }
            rules = rules.remove_rule(name);
        }
        Self {
            disable_suggestions: config.disable_suggestions,
            max_errors: config.max_errors,
            rules,
            scalars: Arc::new(DefaultScalarCoercion),
        }
    }

    pub fn disable_suggestions(&self) -> bool {
        self.disable_suggestions
    }

    pub fn max_errors(&self) -> Option<usize> {
        self.max_errors
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    pub fn scalars(&self) -> &(dyn CoerceScalar + Send + Sync) {
        self.scalars.as_ref()
    }

    /// Omit "Did you mean ..." suggestions from error messages.
    pub fn with_disable_suggestions(mut self, disable_suggestions: bool) -> Self {
        self.disable_suggestions = disable_suggestions;
        self
    }

    /// Stop walking the document once this many errors have been reported.
    pub fn with_max_errors(mut self, max_errors: Option<usize>) -> Self {
        self.max_errors = max_errors;
        self
    }

    pub fn with_rules(mut self, rules: RuleSet) -> Self {
        self.rules = rules;
        self
    }

    /// The hook `ValuesOfCorrectType` checks scalar and enum literals with.
    pub fn with_scalars(
        mut self,
        scalars: impl CoerceScalar + Send + Sync + 'static,
    ) -> Self {
        self.scalars = Arc::new(scalars);
        self
    }
}
impl std::default::Default for ValidateOptions {
    fn default() -> Self {
        Self::from_config(&ValidatorConfig::default())
    }
}
impl std::fmt::Debug for ValidateOptions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ValidateOptions")
            .field("disable_suggestions", &self.disable_suggestions)
            .field("max_errors", &self.max_errors)
            .field("rules", &self.rules.names())
            .finish_non_exhaustive()
    }
}
