use serde_json::{Map, Value};

use crate::shared::logging::LoggingUtils;

use super::types::{FilterKind, FilterShape, SanitizationSpec, ScalarFilter};

/// Output of [`sanitize`]: cleaned values keyed by field name
pub type OutputMap = Map<String, Value>;

/// Clean `inputs` according to `fields`.
///
/// With an empty spec every input goes through the `string` filter,
/// element-wise for sequences. Otherwise only fields named in the spec
/// and present in `inputs` are kept. A value whose shape does not match
/// its filter (a sequence for a scalar tag or the reverse) becomes `null`.
/// When `trim` is set, every string in the result is trimmed, at any depth.
pub fn sanitize(inputs: &Map<String, Value>, fields: &SanitizationSpec, trim: bool) -> OutputMap {
    let mut output: OutputMap = if fields.is_empty() {
        inputs
            .iter()
            .map(|(field, value)| (field.clone(), default_filter(value)))
            .collect()
    } else {
        fields
            .iter()
            .filter_map(|(field, kind)| {
                inputs
                    .get(field)
                    .map(|value| (field.to_string(), apply_filter(kind, value)))
            })
            .collect()
    };

    if trim {
        output.values_mut().for_each(trim_value);
    }

    LoggingUtils::log_sanitization_summary(inputs.len(), output.len());

    output
}

/// Apply one filter tag to a value
pub fn apply_filter(kind: FilterKind, value: &Value) -> Value {
    let descriptor = kind.descriptor();
    match (descriptor.shape, value) {
        (_, Value::Null) => Value::Null,
        (FilterShape::Sequence, Value::Array(items)) => Value::Array(
            items
                .iter()
                .map(|item| filter_scalar(descriptor.filter, item))
                .collect(),
        ),
        (FilterShape::Scalar, scalar) => filter_scalar(descriptor.filter, scalar),
        (FilterShape::Sequence, _) => Value::Null,
    }
}

fn filter_scalar(filter: ScalarFilter, value: &Value) -> Value {
    scalar_text(value)
        .map(|text| Value::String(filter.apply(&text)))
        .unwrap_or(Value::Null)
}

fn default_filter(value: &Value) -> Value {
    match value {
        Value::Array(items) => Value::Array(items.iter().map(default_filter).collect()),
        Value::Object(object) => Value::Object(
            object
                .iter()
                .map(|(key, item)| (key.clone(), default_filter(item)))
                .collect(),
        ),
        other => filter_scalar(ScalarFilter::Text, other),
    }
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

/// Trim every string in place, recursing into sequences and objects
pub fn trim_value(value: &mut Value) {
    match value {
        Value::String(s) => {
            let trimmed = s.trim();
            if trimmed.len() != s.len() {
                *s = trimmed.to_string();
            }
        }
        Value::Array(items) => items.iter_mut().for_each(trim_value),
        Value::Object(object) => object.values_mut().for_each(trim_value),
        Value::Null | Value::Bool(_) | Value::Number(_) => {}
    }
}
