//! Error message templates
//!
//! Templates use printf-style placeholders. `%s` and `%d` are replaced, in
//! order, by the field name followed by the rule's parameters; `%%` is a
//! literal percent sign.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::types::RuleParam;

/// Used when no template exists for a rule at all
const FALLBACK_TEMPLATE: &str = "The %s is invalid";

/// Caller-supplied message overrides.
///
/// Deserializes from an object whose string values override a rule's
/// message everywhere and whose object values override messages for a
/// single field:
///
/// ```json
/// { "required": "The %s is required", "password2": { "same": "Please enter the same password again" } }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "HashMap<String, OverrideEntry>", into = "HashMap<String, OverrideEntry>")]
pub struct MessageOverrides {
    rules: HashMap<String, String>,
    fields: HashMap<String, HashMap<String, String>>,
}

/// One entry of the serialized override object
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OverrideEntry {
    Rule(String),
    Field(HashMap<String, String>),
}

impl From<HashMap<String, OverrideEntry>> for MessageOverrides {
    fn from(entries: HashMap<String, OverrideEntry>) -> Self {
        let mut overrides = MessageOverrides::default();
        for (key, entry) in entries {
            match entry {
                OverrideEntry::Rule(template) => {
                    overrides.rules.insert(key, template);
                }
                OverrideEntry::Field(rules) => {
                    overrides.fields.insert(key, rules);
                }
            }
        }
        overrides
    }
}

impl From<MessageOverrides> for HashMap<String, OverrideEntry> {
    fn from(overrides: MessageOverrides) -> Self {
        overrides
            .rules
            .into_iter()
            .map(|(rule, template)| (rule, OverrideEntry::Rule(template)))
            .chain(
                overrides
                    .fields
                    .into_iter()
                    .map(|(field, rules)| (field, OverrideEntry::Field(rules))),
            )
            .collect()
    }
}

impl MessageOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    /// Override a rule's message for every field
    pub fn rule(mut self, rule: impl Into<String>, template: impl Into<String>) -> Self {
        self.rules.insert(rule.into(), template.into());
        self
    }

    /// Override a rule's message for one field
    pub fn field(
        mut self,
        field: impl Into<String>,
        rule: impl Into<String>,
        template: impl Into<String>,
    ) -> Self {
        self.fields
            .entry(field.into())
            .or_default()
            .insert(rule.into(), template.into());
        self
    }

    pub fn rule_overrides(&self) -> &HashMap<String, String> {
        &self.rules
    }

    pub fn field_override(&self, field: &str, rule: &str) -> Option<&str> {
        self.fields
            .get(field)
            .and_then(|rules| rules.get(rule))
            .map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty() && self.fields.is_empty()
    }
}

/// Effective templates for one validation call
#[derive(Debug, Clone)]
pub struct MessageCatalog<'a> {
    templates: HashMap<String, String>,
    overrides: &'a MessageOverrides,
}

impl<'a> MessageCatalog<'a> {
    /// Layer global overrides over the base templates; later wins
    pub fn new(
        base: HashMap<String, String>,
        configured: &HashMap<String, String>,
        overrides: &'a MessageOverrides,
    ) -> Self {
        let mut templates = base;
        for source in [configured, overrides.rule_overrides()] {
            templates.extend(source.iter().map(|(k, v)| (k.clone(), v.clone())));
        }

        Self { templates, overrides }
    }

    /// Template for a failed rule: per-field override, then global, then default
    pub fn template(&self, field: &str, rule: &str) -> &str {
        self.overrides
            .field_override(field, rule)
            .or_else(|| self.templates.get(rule).map(String::as_str))
            .unwrap_or(FALLBACK_TEMPLATE)
    }

    /// Render the message for a failed rule from its bound parameters
    pub fn render(&self, field: &str, rule: &str, params: &[RuleParam]) -> String {
        let params: Vec<String> = params.iter().map(RuleParam::to_string).collect();
        let args: Vec<&str> = std::iter::once(field)
            .chain(params.iter().map(String::as_str))
            .collect();
        format_message(self.template(field, rule), &args)
    }
}

/// Substitute `%s`/`%d` placeholders with `args` in order.
///
/// Placeholders beyond the supplied arguments, and unsupported directives,
/// are left as written.
pub fn format_message(template: &str, args: &[&str]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut args = args.iter();
    let mut chars = template.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '%' {
            out.push(c);
            continue;
        }

        match chars.peek().copied() {
            Some('%') => {
                chars.next();
                out.push('%');
            }
            Some(spec @ ('s' | 'd')) => {
                chars.next();
                match args.next() {
                    Some(arg) => out.push_str(arg),
                    None => {
                        out.push('%');
                        out.push(spec);
                    }
                }
            }
            _ => out.push('%'),
        }
    }

    out
}
