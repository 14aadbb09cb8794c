use crate::domain::validation::registry::{RuleCheck, RuleDefinition, RuleRegistry};
use crate::domain::validation::types::ParamKind;

/// `unique: table,column` is answered by the engine's injected
/// [`UniquenessLookup`](crate::domain::validation::UniquenessLookup).
pub fn register_lookup(registry: &mut RuleRegistry) {
    registry.register_rule(RuleDefinition {
        name: "unique",
        params: &[ParamKind::Text, ParamKind::Text],
        message: "The %s already exists",
        check: RuleCheck::Lookup,
    });
}
