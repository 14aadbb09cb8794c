use validator::ValidateEmail;

use crate::domain::validation::registry::{RuleCheck, RuleDefinition, RuleRegistry};
use crate::domain::validation::types::{InputData, RuleParam};

pub fn register_format(registry: &mut RuleRegistry) {
    registry.register_rule(RuleDefinition {
        name: "email",
        params: &[],
        message: "The %s is not a valid email address",
        check: RuleCheck::Predicate(is_email),
    });

    registry.register_rule(RuleDefinition {
        name: "alphanumeric",
        params: &[],
        message: "The %s should have only letters and numbers",
        check: RuleCheck::Predicate(is_alphanumeric),
    });
}

/// Empty and absent values pass; presence is `required`'s job
pub fn is_email(data: &InputData, field: &str, _params: &[RuleParam]) -> bool {
    match data.get(field) {
        None | Some("") => true,
        Some(value) => value.validate_email(),
    }
}

/// ASCII letters and digits only; an empty value fails
pub fn is_alphanumeric(data: &InputData, field: &str, _params: &[RuleParam]) -> bool {
    match data.get(field) {
        None => true,
        Some(value) => !value.is_empty() && value.chars().all(|c| c.is_ascii_alphanumeric()),
    }
}
