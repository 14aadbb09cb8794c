//! Domain validation module
//!
//! This module contains the rule grammar parser, the rule registry, the
//! message catalog and the engine that ties them together.

pub mod types;
pub mod parser;
pub mod registry;
pub mod messages;
pub mod lookup;
pub mod domain_validator;
pub mod rules;

pub use types::{ErrorMap, FieldRules, InputData, ParamKind, RuleInvocation, RuleParam, RuleSpec};
pub use parser::{parse_rule, parse_rule_spec};
pub use registry::{Predicate, RuleCheck, RuleDefinition, RuleRegistry};
pub use messages::{format_message, MessageCatalog, MessageOverrides};
pub use lookup::UniquenessLookup;
pub use domain_validator::{UnknownRulePolicy, Validator};
