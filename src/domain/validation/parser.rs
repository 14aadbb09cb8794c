//! Rule grammar parser
//!
//! A rule spec is a `|`-separated list of rules. Each rule is a name,
//! optionally followed by `:` and a `,`-separated parameter list:
//!
//! ```text
//! required | alphanumeric | between: 3,255
//! ```
//!
//! The parser knows nothing about which rules exist; names are resolved
//! against the registry when the spec is executed.

use crate::shared::error::{AppError, AppResult};

use super::types::{RuleInvocation, RuleSpec};

/// Parse a full rule spec into its ordered invocations
pub fn parse_rule_spec(spec: &str) -> AppResult<RuleSpec> {
    spec.split('|').map(parse_rule).collect()
}

/// Parse a single `name[:p1,p2,...]` segment
pub fn parse_rule(segment: &str) -> AppResult<RuleInvocation> {
    let segment = segment.trim();

    let (name, params) = match segment.split_once(':') {
        Some((name, param_str)) => (
            name.trim(),
            param_str.split(',').map(|p| p.trim().to_string()).collect(),
        ),
        None => (segment, Vec::new()),
    };

    if name.is_empty() {
        return Err(AppError::malformed(segment, "rule name is empty"));
    }

    Ok(RuleInvocation::new(name, params))
}
