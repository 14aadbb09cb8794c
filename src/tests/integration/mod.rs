//! End-to-end scenarios across validation and sanitization

use std::sync::Arc;
use std::time::Duration;

use serde_json::{json, Value};

use crate::{
    application::FormService,
    domain::{
        sanitization::{sanitize, SanitizationSpec},
        validation::{FieldRules, InputData, MessageOverrides, UnknownRulePolicy, Validator},
    },
    infrastructure::InMemoryUniquenessStore,
    shared::error::AppError,
    tests::{
        common::{assertions::assert_error_mentions, input, RecordingLookup},
        config, fixtures,
    },
};

/// Registration form flow
pub mod registration {
    use super::*;

    #[tokio::test]
    async fn reports_one_message_per_failing_field() {
        config::init();
        let store = InMemoryUniquenessStore::new();
        store.insert("users", "username", "bob").await;
        let validator = Validator::new().with_lookup(Arc::new(store));

        let errors = validator
            .validate(
                &fixtures::registration_data(),
                &fixtures::registration_rules(),
                &fixtures::registration_messages(),
            )
            .await
            .unwrap();

        let expected: Vec<(&str, &str)> = vec![
            ("firstname", "The firstname is required"),
            ("lastname", "The lastname is required"),
            ("zipcode", "The zipcode must have between 5 and 6 characters"),
            ("username", "The username already exists"),
            ("password", fixtures::SECURE_MESSAGE),
        ];
        assert_eq!(errors.iter().collect::<Vec<_>>(), expected);
    }

    #[tokio::test]
    async fn per_field_override_applies_to_its_field_only() {
        let validator = Validator::new().with_lookup(Arc::new(RecordingLookup::new(&[])));
        let mut data = fixtures::registration_data();
        data.insert("password", "Test1!23");
        data.insert("password2", "Test1!24");

        let errors = validator
            .validate(&data, &fixtures::registration_rules(), &fixtures::registration_messages())
            .await
            .unwrap();

        assert!(!errors.contains("password"));
        assert_eq!(errors.get("password2"), Some("Please enter the same password again"));
    }

    #[tokio::test]
    async fn comma_separated_rules_are_rejected() {
        // `min: 10, max:255` is a single `min` rule with two parameters
        let rules = fixtures::registration_rules().field("address", "required | min: 10, max:255");
        let validator = Validator::new().with_lookup(Arc::new(RecordingLookup::new(&[])));
        let err = validator
            .validate(&fixtures::registration_data(), &rules, &MessageOverrides::new())
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::MalformedRule { .. }));
    }

    #[tokio::test]
    async fn lookup_runs_only_when_earlier_rules_pass() {
        let lookup = Arc::new(RecordingLookup::new(&[]));
        let validator = Validator::new().with_lookup(lookup.clone());
        let rules = FieldRules::new()
            .field("username", "required | alphanumeric | unique: users,username")
            .field("email", "required | email | unique: users,email");
        let data = input(&[("username", "bob!"), ("email", "bob@example.com")]);

        let errors = validator.validate(&data, &rules, &MessageOverrides::new()).await.unwrap();

        assert_eq!(
            errors.get("username"),
            Some("The username should have only letters and numbers")
        );
        assert_eq!(lookup.call_count("users", "username").await, 0);
        assert_eq!(lookup.call_count("users", "email").await, 1);
    }

    #[tokio::test]
    async fn unreachable_store_fails_the_call() {
        let store = InMemoryUniquenessStore::new();
        store.set_offline(true).await;
        let validator = Validator::new()
            .with_lookup(Arc::new(store))
            .with_lookup_timeout(Duration::from_millis(200));

        let err = validator
            .validate(
                &fixtures::registration_data(),
                &fixtures::registration_rules(),
                &MessageOverrides::new(),
            )
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::LookupUnavailable { .. }));
    }
}

/// Documented rule scenarios
pub mod scenarios {
    use super::*;

    async fn validate(data: &InputData, rules: &FieldRules) -> crate::domain::validation::ErrorMap {
        Validator::new()
            .validate(data, rules, &MessageOverrides::new())
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn secure_password_examples() {
        let rules = FieldRules::new().field("password", "secure");
        assert!(validate(&input(&[("password", "test123")]), &rules).await.contains("password"));
        assert!(validate(&input(&[("password", "Test1!23")]), &rules).await.is_empty());
    }

    #[tokio::test]
    async fn between_measures_length_not_numeric_value() {
        let data = input(&[("a", "5"), ("b", "6")]);

        // "5" is one character long, so it is outside 3..=10
        let errors = validate(&data, &FieldRules::new().field("a", "between:3,10")).await;
        assert_error_mentions(&errors, "a", &["a", "3", "10"]);

        let data = input(&[("a", "55555")]);
        let errors = validate(&data, &FieldRules::new().field("a", "between:3,10")).await;
        assert!(errors.is_empty());

        let errors = validate(&data, &FieldRules::new().field("a", "between:3,4")).await;
        assert_eq!(errors.get("a"), Some("The a must have between 3 and 4 characters"));
    }

    #[tokio::test]
    async fn missing_email_reports_required_only() {
        let errors = validate(&InputData::new(), &FieldRules::new().field("email", "required|email")).await;
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get("email"), Some("Please enter the email"));
    }

    #[tokio::test]
    async fn override_precedence() {
        let validator = Validator::new()
            .with_default_messages([("required".to_string(), "configured %s".to_string())].into());
        let overrides = MessageOverrides::new()
            .rule("required", "global %s")
            .field("name", "required", "field %s");
        let rules = FieldRules::new().field("name", "required").field("city", "required");

        let errors = validator.validate(&InputData::new(), &rules, &overrides).await.unwrap();
        assert_eq!(errors.get("name"), Some("field name"));
        assert_eq!(errors.get("city"), Some("global city"));
    }

    #[tokio::test]
    async fn legacy_policy_ignores_unknown_rules() {
        let rules = FieldRules::new().field("name", "required | titlecase");

        let strict = Validator::new();
        let err = strict
            .validate(&input(&[("name", "bob")]), &rules, &MessageOverrides::new())
            .await
            .unwrap_err();
        assert!(err.is_declaration_error());

        let legacy = Validator::new().with_unknown_rule_policy(UnknownRulePolicy::Skip);
        let errors = legacy
            .validate(&input(&[("name", "bob")]), &rules, &MessageOverrides::new())
            .await
            .unwrap();
        assert!(errors.is_empty());
    }
}

/// Sanitization and the combined filter flow
pub mod cleaning {
    use super::*;

    #[test]
    fn profile_is_cleaned() {
        let spec = SanitizationSpec::from_tags([
            ("name", "string"),
            ("email", "email"),
            ("age", "int"),
            ("weight", "float"),
            ("github", "url"),
            ("hobbies", "string[]"),
            ("twitter", "url"),
        ])
        .unwrap();

        let output = sanitize(&fixtures::profile_inputs(), &spec, true);

        assert_eq!(output["name"], json!("joe"));
        assert_eq!(output["email"], json!("joe@example.com"));
        assert_eq!(output["age"], json!("18"));
        assert_eq!(output["weight"], json!("100.12"));
        assert_eq!(output["hobbies"], json!(["Reading", "Running", "Programming"]));
        assert!(!output.contains_key("twitter"));
    }

    #[tokio::test]
    async fn form_service_filters_registration() {
        let service = FormService::from_config(&config::test_config())
            .with_lookup(Arc::new(RecordingLookup::new(&[("users", "email", "joe@example.com")])));

        let data = json!({
            "username": " joe ",
            "email": "joe@example.com</>",
            "age": "18abc",
            "hobbies": [" chess "],
        });
        let fields = FieldRules::new()
            .field("username", "string | required | alphanumeric | between: 3,20")
            .field("email", "email | required | email | unique: users,email")
            .field("age", "int | required | max: 3")
            .field("hobbies", "string[]");

        let form = service
            .filter(data.as_object().unwrap(), &fields, &MessageOverrides::new())
            .await
            .unwrap();

        assert_eq!(
            Value::Object(form.data.clone()),
            json!({
                "username": "joe",
                "email": "joe@example.com",
                "age": "18",
                "hobbies": ["chess"],
            })
        );
        assert_eq!(form.errors.iter().collect::<Vec<_>>(), vec![("email", "The email already exists")]);
    }
}
