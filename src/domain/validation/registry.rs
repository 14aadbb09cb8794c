use std::collections::HashMap;
use std::sync::{Arc, LazyLock};

use crate::shared::error::{AppError, AppResult};

use super::rules::{
    comparison::register_comparison,
    format::register_format,
    length::register_length,
    lookup::register_lookup,
    presence::register_presence,
    security::register_security,
};
use super::types::{InputData, ParamKind, RuleInvocation, RuleParam};

/// Pure rule predicate: `(data, field, params) -> passed`
pub type Predicate = fn(&InputData, &str, &[RuleParam]) -> bool;

/// How a rule is evaluated
#[derive(Clone, Copy)]
pub enum RuleCheck {
    /// Evaluated in-process against the input data
    Predicate(Predicate),
    /// Answered by the injected uniqueness lookup
    Lookup,
}

/// Registered rule with its parameter signature and default message
#[derive(Clone)]
pub struct RuleDefinition {
    pub name: &'static str,
    pub params: &'static [ParamKind],
    pub message: &'static str,
    pub check: RuleCheck,
}

impl std::fmt::Debug for RuleDefinition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuleDefinition")
            .field("name", &self.name)
            .field("params", &self.params)
            .field("message", &self.message)
            .finish()
    }
}

impl RuleDefinition {
    /// Check arity and convert raw parameters to their declared kinds
    pub fn bind(&self, invocation: &RuleInvocation) -> AppResult<Vec<RuleParam>> {
        if invocation.params.len() != self.params.len() {
            return Err(AppError::malformed(
                render(invocation),
                format!(
                    "expected {} parameter(s), got {}",
                    self.params.len(),
                    invocation.params.len()
                ),
            ));
        }

        self.params
            .iter()
            .zip(&invocation.params)
            .map(|(kind, raw)| match kind {
                ParamKind::Integer => raw.parse::<usize>().map(RuleParam::Int).map_err(|_| {
                    AppError::malformed(
                        render(invocation),
                        format!("parameter '{}' is not a non-negative integer", raw),
                    )
                }),
                ParamKind::Text => Ok(RuleParam::Text(raw.clone())),
            })
            .collect()
    }
}

fn render(invocation: &RuleInvocation) -> String {
    if invocation.params.is_empty() {
        invocation.name.clone()
    } else {
        format!("{}:{}", invocation.name, invocation.params.join(","))
    }
}

static BUILTIN: LazyLock<Arc<RuleRegistry>> = LazyLock::new(|| Arc::new(RuleRegistry::new()));

/// Rule registry for field validation
pub struct RuleRegistry {
    pub(crate) rules: HashMap<&'static str, RuleDefinition>,
}

impl RuleRegistry {
    /// Create a registry holding the built-in rules
    pub fn new() -> Self {
        let mut registry = Self {
            rules: HashMap::new(),
        };

        registry.register_default_rules();

        registry
    }

    /// Process-wide built-in registry, built on first use
    pub fn builtin() -> Arc<RuleRegistry> {
        Arc::clone(&BUILTIN)
    }

    /// Register a rule definition
    pub(crate) fn register_rule(&mut self, rule: RuleDefinition) {
        self.rules.insert(rule.name, rule);
    }

    /// Get a rule definition
    pub fn get_rule(&self, name: &str) -> Option<&RuleDefinition> {
        self.rules.get(name)
    }

    /// Check if a rule is known
    pub fn has_rule(&self, name: &str) -> bool {
        self.rules.contains_key(name)
    }

    /// Built-in message templates keyed by rule name
    pub fn default_messages(&self) -> HashMap<String, String> {
        self.rules
            .values()
            .map(|rule| (rule.name.to_string(), rule.message.to_string()))
            .collect()
    }

    /// Names of all registered rules, sorted
    pub fn rule_names(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.rules.keys().copied().collect();
        names.sort_unstable();
        names
    }

    fn register_default_rules(&mut self) {
        register_presence(self);
        register_length(self);
        register_format(self);
        register_comparison(self);
        register_security(self);
        register_lookup(self);
    }
}

impl Default for RuleRegistry {
    fn default() -> Self {
        Self::new()
    }
}
