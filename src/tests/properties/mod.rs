//! Property tests for rule and filter invariants

use proptest::prelude::*;
use serde_json::{json, Value};

use crate::domain::sanitization::{sanitize, FilterKind, SanitizationSpec};
use crate::domain::validation::rules::{comparison::is_same, length::{is_between, is_max, is_min}};
use crate::domain::validation::{FieldRules, InputData, MessageOverrides, RuleParam, Validator};

fn arb_field() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z][a-z0-9_]{0,11}").unwrap()
}

fn arb_value() -> impl Strategy<Value = Option<String>> {
    prop::option::of(prop::string::string_regex("[ a-zA-Z0-9!<>é]{0,12}").unwrap())
}

fn validate(data: &InputData, rules: &FieldRules) -> crate::domain::validation::ErrorMap {
    tokio_test::block_on(Validator::new().validate(data, rules, &MessageOverrides::new()))
        .expect("rules are well formed")
}

proptest! {
    #[test]
    fn absent_fields_fail_only_required_and_secure(field in arb_field(), min in 0usize..50, span in 0usize..50) {
        let data = InputData::new();
        let max = min + span;
        let specs = [
            ("required", true),
            ("secure", true),
            ("email", false),
            ("alphanumeric", false),
            ("same: other_field", false),
            ("unique: users,email", false),
        ];
        for (spec, fails) in specs {
            let errors = validate(&data, &FieldRules::new().field(field.clone(), spec));
            prop_assert_eq!(errors.contains(&field), fails, "rule {}", spec);
        }
        for spec in [format!("min: {}", min), format!("max: {}", max), format!("between: {},{}", min, max)] {
            let errors = validate(&data, &FieldRules::new().field(field.clone(), spec.as_str()));
            prop_assert!(errors.is_empty(), "rule {}", spec);
        }
    }

    #[test]
    fn same_is_symmetric(a in arb_value(), b in arb_value()) {
        let mut data = InputData::new();
        if let Some(a) = &a {
            data.insert("f", a.clone());
        }
        if let Some(b) = &b {
            data.insert("g", b.clone());
        }
        let forward = is_same(&data, "f", &[RuleParam::Text("g".to_string())]);
        let backward = is_same(&data, "g", &[RuleParam::Text("f".to_string())]);
        prop_assert_eq!(forward, backward);
    }

    #[test]
    fn between_implies_min_and_max(value in arb_value(), min in 0usize..16, max in 0usize..16) {
        let mut data = InputData::new();
        if let Some(value) = value {
            data.insert("f", value);
        }
        if is_between(&data, "f", &[RuleParam::Int(min), RuleParam::Int(max)]) {
            prop_assert!(is_min(&data, "f", &[RuleParam::Int(min)]));
            prop_assert!(is_max(&data, "f", &[RuleParam::Int(max)]));
        }
    }

    #[test]
    fn required_failure_shadows_later_rules(blank in "[ \t]{0,5}", min in 1usize..30) {
        let data: InputData = [("name", blank)].into_iter().collect();
        let rules = FieldRules::new().field("name", format!("required|min:{}", min));
        let errors = validate(&data, &rules);
        prop_assert_eq!(errors.get("name"), Some("Please enter the name"));
    }

    #[test]
    fn string_filter_output_is_tag_free_and_trimmed(raw in "[ a-z<>/\"']{0,24}") {
        let inputs = json!({ "name": raw });
        let spec = SanitizationSpec::new().field("name", FilterKind::String);
        let output = sanitize(inputs.as_object().unwrap(), &spec, true);
        let Value::String(cleaned) = &output["name"] else {
            panic!("string filter produced {:?}", output["name"]);
        };
        prop_assert!(!cleaned.contains('<') && !cleaned.contains('>'));
        prop_assert_eq!(cleaned.trim(), cleaned.as_str());
    }
}
