use std::sync::Arc;

use serde::Serialize;
use serde_json::{Map, Value};

use crate::config::AppConfig;
use crate::domain::sanitization::{sanitize, FilterKind, FilterShape, OutputMap, SanitizationSpec};
use crate::domain::validation::{
    ErrorMap, FieldRules, InputData, MessageOverrides, UniquenessLookup, Validator,
};
use crate::shared::error::{AppError, AppResult};

/// Result of [`FormService::filter`]
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FilteredForm {
    pub data: OutputMap,
    pub errors: ErrorMap,
}

impl FilteredForm {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Sanitizes and validates whole form submissions
#[derive(Clone)]
pub struct FormService {
    validator: Validator,
    trim: bool,
}

impl FormService {
    pub fn new(validator: Validator) -> Self {
        Self { validator, trim: true }
    }

    /// Build the service from configuration
    pub fn from_config(config: &AppConfig) -> Self {
        let mut validator = Validator::new()
            .with_unknown_rule_policy(config.validation.unknown_rules)
            .with_default_messages(config.validation.messages.clone());

        if let Some(timeout) = config.validation.lookup_timeout() {
            validator = validator.with_lookup_timeout(timeout);
        }

        Self {
            validator,
            trim: config.sanitization.trim,
        }
    }

    pub fn with_lookup(mut self, lookup: Arc<dyn UniquenessLookup>) -> Self {
        self.validator = self.validator.with_lookup(lookup);
        self
    }

    pub fn with_trim(mut self, trim: bool) -> Self {
        self.trim = trim;
        self
    }

    pub fn validator(&self) -> &Validator {
        &self.validator
    }

    /// Sanitize using the configured trim setting
    pub fn sanitize(&self, inputs: &Map<String, Value>, fields: &SanitizationSpec) -> OutputMap {
        sanitize(inputs, fields, self.trim)
    }

    pub async fn validate(
        &self,
        data: &InputData,
        fields: &FieldRules,
        messages: &MessageOverrides,
    ) -> AppResult<ErrorMap> {
        self.validator.validate(data, fields, messages).await
    }

    /// Sanitize then validate a submission.
    ///
    /// Each field spec starts with a filter tag, optionally followed by `|`
    /// and the validation rules, e.g. `"email | required | email"`. Fields
    /// with only a tag are cleaned but not validated. Rules see the
    /// sanitized values, so only scalar tags may carry rules.
    pub async fn filter(
        &self,
        data: &Map<String, Value>,
        fields: &FieldRules,
        messages: &MessageOverrides,
    ) -> AppResult<FilteredForm> {
        let (filters, rules) = split_form_spec(fields)?;

        let cleaned = self.sanitize(data, &filters);
        let errors = self
            .validator
            .validate(&InputData::from_json(&cleaned), &rules, messages)
            .await?;

        Ok(FilteredForm {
            data: cleaned,
            errors,
        })
    }
}

/// Split combined `"<tag> | <rules>"` specs into sanitization and validation parts
fn split_form_spec(fields: &FieldRules) -> AppResult<(SanitizationSpec, FieldRules)> {
    let mut filters = SanitizationSpec::new();
    let mut rules = FieldRules::new();

    for (field, spec) in fields.iter() {
        let (tag, rule_spec) = match spec.split_once('|') {
            Some((tag, rest)) => (tag.trim(), Some(rest.trim())),
            None => (spec.trim(), None),
        };

        let kind: FilterKind = tag.parse().map_err(|filter| AppError::UnknownFilter {
            field: field.to_string(),
            filter,
        })?;
        filters.insert(field, kind);

        if let Some(rule_spec) = rule_spec {
            if kind.descriptor().shape == FilterShape::Sequence {
                return Err(AppError::malformed(
                    spec,
                    format!("rules cannot be applied to the list filter '{}'", kind),
                ));
            }
            rules.insert(field, rule_spec);
        }
    }

    Ok((filters, rules))
}
