use crate::domain::validation::registry::{RuleCheck, RuleDefinition, RuleRegistry};
use crate::domain::validation::types::{InputData, ParamKind, RuleParam};

pub fn register_comparison(registry: &mut RuleRegistry) {
    registry.register_rule(RuleDefinition {
        name: "same",
        params: &[ParamKind::Text],
        message: "The %s must match with %s",
        check: RuleCheck::Predicate(is_same),
    });
}

/// Equal when both are present, or both absent
pub fn is_same(data: &InputData, field: &str, params: &[RuleParam]) -> bool {
    let [RuleParam::Text(other)] = params else {
        return false;
    };

    match (data.get(field), data.get(other)) {
        (Some(value), Some(other_value)) => value == other_value,
        (None, None) => true,
        _ => false,
    }
}
