use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

use crate::shared::error::{AppError, AppResult};
use crate::shared::logging::LoggingUtils;

use super::lookup::UniquenessLookup;
use super::messages::{MessageCatalog, MessageOverrides};
use super::parser::parse_rule_spec;
use super::registry::{RuleCheck, RuleRegistry};
use super::types::{ErrorMap, FieldRules, InputData, RuleParam};

/// What to do with a rule name the registry does not know
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnknownRulePolicy {
    /// Abort the call with `AppError::UnknownRule`
    #[default]
    Reject,
    /// Log a warning and continue with the field's next rule
    Skip,
}

/// Rule engine that validates field maps against rule specs
#[derive(Clone)]
pub struct Validator {
    registry: Arc<RuleRegistry>,
    lookup: Option<Arc<dyn UniquenessLookup>>,
    lookup_timeout: Option<Duration>,
    unknown_rules: UnknownRulePolicy,
    default_messages: HashMap<String, String>,
}

impl Validator {
    /// Create a validator over the built-in rules
    pub fn new() -> Self {
        Self::with_registry(RuleRegistry::builtin())
    }

    pub fn with_registry(registry: Arc<RuleRegistry>) -> Self {
        Self {
            registry,
            lookup: None,
            lookup_timeout: None,
            unknown_rules: UnknownRulePolicy::default(),
            default_messages: HashMap::new(),
        }
    }

    /// Backend answering `unique` rules
    pub fn with_lookup(mut self, lookup: Arc<dyn UniquenessLookup>) -> Self {
        self.lookup = Some(lookup);
        self
    }

    /// Upper bound on each uniqueness lookup
    pub fn with_lookup_timeout(mut self, timeout: Duration) -> Self {
        self.lookup_timeout = Some(timeout);
        self
    }

    pub fn with_unknown_rule_policy(mut self, policy: UnknownRulePolicy) -> Self {
        self.unknown_rules = policy;
        self
    }

    /// Rule message templates that replace the built-in ones for every call.
    /// Per-call overrides still take precedence.
    pub fn with_default_messages(mut self, messages: HashMap<String, String>) -> Self {
        self.default_messages = messages;
        self
    }

    pub fn registry(&self) -> &RuleRegistry {
        &self.registry
    }

    /// Validate `data` against the rule spec of each field in `fields`.
    ///
    /// Rules of a field run in declaration order and stop at the first
    /// failure, whose formatted message is recorded for that field. Fields
    /// are independent. Malformed specs, unknown rules (under the reject
    /// policy) and unavailable lookups abort the whole call.
    pub async fn validate(
        &self,
        data: &InputData,
        fields: &FieldRules,
        messages: &MessageOverrides,
    ) -> AppResult<ErrorMap> {
        let started = Instant::now();
        let catalog = MessageCatalog::new(
            self.registry.default_messages(),
            &self.default_messages,
            messages,
        );
        let mut errors = ErrorMap::new();

        for (field, spec) in fields.iter() {
            for invocation in parse_rule_spec(spec)? {
                let Some(rule) = self.registry.get_rule(&invocation.name) else {
                    match self.unknown_rules {
                        UnknownRulePolicy::Reject => {
                            return Err(AppError::UnknownRule {
                                field: field.to_string(),
                                rule: invocation.name,
                            });
                        }
                        UnknownRulePolicy::Skip => {
                            LoggingUtils::log_skipped_rule(field, &invocation.name);
                            continue;
                        }
                    }
                };

                let params = rule.bind(&invocation)?;
                let passed = match rule.check {
                    RuleCheck::Predicate(predicate) => predicate(data, field, &params),
                    RuleCheck::Lookup => self.check_unique(data, field, &params).await?,
                };

                if !passed {
                    let message = catalog.render(field, &invocation.name, &params);
                    LoggingUtils::log_rule_failure(field, &invocation.name, &message);
                    errors.record(field, message);
                    break;
                }
            }
        }

        LoggingUtils::log_validation_summary(fields.len(), errors.len(), started.elapsed());

        Ok(errors)
    }

    /// Absent values pass without consulting the lookup
    async fn check_unique(
        &self,
        data: &InputData,
        field: &str,
        params: &[RuleParam],
    ) -> AppResult<bool> {
        let [RuleParam::Text(table), RuleParam::Text(column)] = params else {
            return Err(AppError::malformed("unique", "expected table and column"));
        };

        let Some(value) = data.get(field) else {
            return Ok(true);
        };

        let unavailable = |reason: String| {
            LoggingUtils::log_lookup_failure(table, column, &reason);
            AppError::LookupUnavailable {
                table: table.clone(),
                column: column.clone(),
                reason,
            }
        };

        let lookup = self
            .lookup
            .as_ref()
            .ok_or_else(|| unavailable("no uniqueness lookup configured".to_string()))?;

        let answer = match self.lookup_timeout {
            Some(budget) => tokio::time::timeout(budget, lookup.exists(table, column, value))
                .await
                .map_err(|_| unavailable(format!("timed out after {}ms", budget.as_millis())))?,
            None => lookup.exists(table, column, value).await,
        };

        let exists = answer.map_err(|e| unavailable(e.to_string()))?;
        Ok(!exists)
    }
}

impl Default for Validator {
    fn default() -> Self {
        Self::new()
    }
}
