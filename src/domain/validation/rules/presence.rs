use crate::domain::validation::registry::{RuleCheck, RuleDefinition, RuleRegistry};
use crate::domain::validation::types::{InputData, RuleParam};

pub fn register_presence(registry: &mut RuleRegistry) {
    registry.register_rule(RuleDefinition {
        name: "required",
        params: &[],
        message: "Please enter the %s",
        check: RuleCheck::Predicate(is_required),
    });
}

/// Present and non-empty once surrounding whitespace is removed
pub fn is_required(data: &InputData, field: &str, _params: &[RuleParam]) -> bool {
    data.get(field).is_some_and(|value| !value.trim().is_empty())
}
