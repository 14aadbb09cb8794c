use std::sync::LazyLock;

use regex::Regex;

use crate::domain::validation::registry::{RuleCheck, RuleDefinition, RuleRegistry};
use crate::domain::validation::types::{InputData, RuleParam};

const MIN_SECURE_LEN: usize = 8;
const MAX_SECURE_LEN: usize = 64;

/// Character classes a secure value must each contain at least once
static SECURE_CLASSES: LazyLock<[Regex; 4]> = LazyLock::new(|| {
    ["[a-z]", "[A-Z]", "[0-9]", "[^A-Za-z0-9_]"]
        .map(|pattern| Regex::new(pattern).expect("secure character class is a valid regex"))
});

pub fn register_security(registry: &mut RuleRegistry) {
    registry.register_rule(RuleDefinition {
        name: "secure",
        params: &[],
        message: "The %s must have between 8 and 64 characters and contain at least one number, one upper case letter, one lower case letter and one special character",
        check: RuleCheck::Predicate(is_secure),
    });
}

/// Unlike the other shape rules, an absent value fails.
pub fn is_secure(data: &InputData, field: &str, _params: &[RuleParam]) -> bool {
    let Some(value) = data.get(field) else {
        return false;
    };

    let len = value.chars().count();
    (MIN_SECURE_LEN..=MAX_SECURE_LEN).contains(&len)
        && SECURE_CLASSES.iter().all(|class| class.is_match(value))
}
