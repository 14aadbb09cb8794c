use crate::domain::validation::registry::{RuleCheck, RuleDefinition, RuleRegistry};
use crate::domain::validation::types::{InputData, ParamKind, RuleParam};

pub fn register_length(registry: &mut RuleRegistry) {
    registry.register_rule(RuleDefinition {
        name: "min",
        params: &[ParamKind::Integer],
        message: "The %s must have at least %s characters",
        check: RuleCheck::Predicate(is_min),
    });

    registry.register_rule(RuleDefinition {
        name: "max",
        params: &[ParamKind::Integer],
        message: "The %s must have at most %s characters",
        check: RuleCheck::Predicate(is_max),
    });

    registry.register_rule(RuleDefinition {
        name: "between",
        params: &[ParamKind::Integer, ParamKind::Integer],
        message: "The %s must have between %d and %d characters",
        check: RuleCheck::Predicate(is_between),
    });
}

/// Length in characters, not bytes
fn char_len(value: &str) -> usize {
    value.chars().count()
}

pub fn is_min(data: &InputData, field: &str, params: &[RuleParam]) -> bool {
    let Some(value) = data.get(field) else {
        return true;
    };

    match params {
        [RuleParam::Int(min)] => char_len(value) >= *min,
        _ => false,
    }
}

pub fn is_max(data: &InputData, field: &str, params: &[RuleParam]) -> bool {
    let Some(value) = data.get(field) else {
        return true;
    };

    match params {
        [RuleParam::Int(max)] => char_len(value) <= *max,
        _ => false,
    }
}

pub fn is_between(data: &InputData, field: &str, params: &[RuleParam]) -> bool {
    let Some(value) = data.get(field) else {
        return true;
    };

    match params {
        [RuleParam::Int(min), RuleParam::Int(max)] => (*min..=*max).contains(&char_len(value)),
        _ => false,
    }
}
