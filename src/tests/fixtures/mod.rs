//! Test fixtures: a registration form as submitted by a browser

use serde_json::{json, Map, Value};

use crate::domain::validation::{FieldRules, InputData, MessageOverrides};

pub const SECURE_MESSAGE: &str = "The password must have between 8 and 64 characters and contain at least one number, one upper case letter, one lower case letter and one special character";

/// Registration data with several problems
pub fn registration_data() -> InputData {
    [
        ("firstname", ""),
        ("lastname", "           "),
        ("username", "bob"),
        ("address", "This is my address"),
        ("zipcode", "999"),
        ("email", "bob1@phptutorial.net"),
        ("password", "test123"),
        ("password2", "test123"),
    ]
    .into_iter()
    .collect()
}

/// Rules for the registration form
pub fn registration_rules() -> FieldRules {
    FieldRules::new()
        .field("firstname", "required | max:255")
        .field("lastname", "required | max: 255")
        .field("address", "required | between: 10,255")
        .field("zipcode", "between: 5,6")
        .field("username", "required | alphanumeric | between: 3,255 | unique: users,username")
        .field("email", "required | email | unique: users,email")
        .field("password", "required | secure")
        .field("password2", "required | same:password")
}

/// Custom messages used by the registration form
pub fn registration_messages() -> MessageOverrides {
    serde_json::from_value(json!({
        "required": "The %s is required",
        "password2": { "same": "Please enter the same password again" },
    }))
    .expect("fixture overrides deserialize")
}

/// Raw profile submission for sanitization
pub fn profile_inputs() -> Map<String, Value> {
    json!({
        "name": "joe<script>",
        "email": "joe@example.com</>",
        "age": "18abc",
        "weight": "100.12lb",
        "github": "https://github.com/joe",
        "hobbies": [" Reading", "Running ", " Programming "],
    })
    .as_object()
    .cloned()
    .unwrap_or_default()
}
