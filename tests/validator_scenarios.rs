//! End-to-end password change scenarios against a fully enabled policy.

use pwd_policy::{PasswordChangeRequest, PasswordValidator, ValidationError};
use secrecy::SecretString;

const POLICY: &[u8] = br#"{
    "CheckConfirm": true,
    "CheckMinLength": true,
    "MinLength": 8,
    "CheckUserID": true,
    "CheckUppercase": true,
    "CheckLowercase": true,
    "CheckNumeric": true,
    "CheckSpecialChar": true,
    "SpecialChar": "!@#$%*+/",
    "CheckWhiteSpace": true,
    "CheckHistory": true,
    "MinHistory": 3,
    "CheckBlackList": true
}"#;

fn secret(value: &str) -> SecretString {
    SecretString::new(value.to_string().into())
}

fn validator_with(policy: &[u8]) -> PasswordValidator {
    let mut validator = PasswordValidator::new();
    validator
        .configure(policy, vec!["test".to_string(), "password".to_string()])
        .expect("Policy should parse");
    validator
}

fn change(new_password: &str, confirm_password: &str, history: &[&str]) -> PasswordChangeRequest {
    PasswordChangeRequest {
        user_id: "ABHW089".to_string(),
        old_password: secret("B1ge@rs*"),
        new_password: secret(new_password),
        confirm_password: secret(confirm_password),
        password_history: history.iter().map(|h| h.to_string()).collect(),
        new_password_hash: new_password.to_string(),
        application_id: None,
        jwt_token: None,
    }
}

fn rejection(validator: &PasswordValidator, new_password: &str, confirm_password: &str) -> String {
    validator
        .validate(&change(new_password, confirm_password, &["$sG96r#X", "3g9m&9W7"]))
        .expect_err("Password should be rejected")
        .to_string()
}

#[test]
fn valid_password_is_accepted() {
    let validator = validator_with(POLICY);
    let request = change("yVHn6?R@", "yVHn6?R@", &["$sG96r#X", "3g9m&9W7"]);
    assert_eq!(validator.validate(&request), Ok(()));
}

#[test]
fn each_rule_reports_its_message() {
    let validator = validator_with(POLICY);
    let cases = [
        ("yVHn6?R@", "yVHn6?Ra", "Confirmation password does not match."),
        ("yVH6@", "yVH6@", "Passwords must be a minimum of 8 characters."),
        ("Abhw089*", "Abhw089*", "Password may not contain the UserID/ Username."),
        ("yvhn6?r@", "yvhn6?r@", "Password must contain at least 1 Capital letter."),
        ("YVHN6?R@", "YVHN6?R@", "Password must contain at least 1 lower case character."),
        ("yVHna?R@", "yVHna?R@", "Password must contain at least 1 numeric character."),
        (
            "yVHn63R2",
            "yVHn63R2",
            "Password must contain at least 1 of the following characters: '!@#$%*+/'.",
        ),
        ("yVHn6 R@", "yVHn6 R@", "Space is not allowed."),
        (
            "B1ge@rs*",
            "B1ge@rs*",
            "You are also not allowed to use any of your previous 3 passwords.",
        ),
        ("Test6?R@", "Test6?R@", "Password contains black listed word 'test'."),
    ];

    for (new_password, confirm_password, expected) in cases {
        assert_eq!(
            rejection(&validator, new_password, confirm_password),
            expected,
            "new password {:?}",
            new_password
        );
    }
}

#[test]
fn history_window_boundary() {
    let validator = validator_with(POLICY);
    let history = ["$sG96r#X", "3g9m@9W7", "Mnj8NU%$", "&5=FLxGa"];

    let in_window = change("3g9m@9W7", "3g9m@9W7", &history);
    assert_eq!(
        validator.validate(&in_window).unwrap_err().rule(),
        Some("history")
    );

    let out_of_window = change("Mnj8NU%$", "Mnj8NU%$", &history);
    assert_eq!(validator.validate(&out_of_window), Ok(()));
}

#[test]
fn disabled_rule_is_skipped() {
    let policy = String::from_utf8_lossy(POLICY).replace(
        "\"CheckSpecialChar\": true",
        "\"CheckSpecialChar\": false",
    );
    let validator = validator_with(policy.as_bytes());

    let request = change("yVHn63R2", "yVHn63R2", &["$sG96r#X", "3g9m&9W7"]);
    assert_eq!(validator.validate(&request), Ok(()));
}

#[test]
fn only_first_violation_is_reported() {
    let validator = validator_with(POLICY);
    let request = change("test 1", "test 2", &[]);

    // Fix one problem at a time; each call surfaces exactly one message.
    assert_eq!(
        validator.validate(&request).unwrap_err().to_string(),
        "Confirmation password does not match."
    );

    let request = change("test 1", "test 1", &[]);
    assert_eq!(
        validator.validate(&request).unwrap_err().to_string(),
        "Passwords must be a minimum of 8 characters."
    );

    let request = change("test 1234", "test 1234", &[]);
    assert_eq!(
        validator.validate(&request).unwrap_err().to_string(),
        "Password must contain at least 1 Capital letter."
    );
}

#[test]
fn unconfigured_validator_refuses() {
    let validator = PasswordValidator::new();
    let request = change("yVHn6?R@", "yVHn6?R@", &[]);
    let err = validator.validate(&request).unwrap_err();
    assert_eq!(err, ValidationError::NotConfigured);
    assert_eq!(err.to_string(), "No validators loaded.");
}

#[test]
fn validator_stays_usable_after_rejection() {
    let validator = validator_with(POLICY);
    assert!(validator.validate(&change("bad", "bad", &[])).is_err());
    assert_eq!(
        validator.validate(&change("yVHn6?R@", "yVHn6?R@", &[])),
        Ok(())
    );
}

#[test]
fn only_ascii_white_space_is_rejected() {
    let validator = validator_with(br#"{"CheckWhiteSpace": true}"#);

    for accepted in ["yVHn6\u{00A0}R@", "yVHn6\u{000B}R@"] {
        assert_eq!(validator.validate(&change(accepted, accepted, &[])), Ok(()));
    }

    let err = validator
        .validate(&change("yVHn6\tR@", "yVHn6\tR@", &[]))
        .unwrap_err();
    assert_eq!(err.rule(), Some("whitespace"));
    assert_eq!(err.to_string(), "Space is not allowed.");
}
