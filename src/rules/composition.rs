//! Composition rules - required character classes.

use secrecy::ExposeSecret;

use crate::policy::PasswordPolicy;
use crate::registry::RuleResult;
use crate::request::PasswordChangeRequest;

fn contains(request: &PasswordChangeRequest, class: fn(&char) -> bool) -> bool {
    request.new_password.expose_secret().chars().any(|c| class(&c))
}

/// Requires at least one ASCII capital letter.
pub fn check_uppercase(request: &PasswordChangeRequest, policy: &PasswordPolicy) -> RuleResult {
    if policy.check_uppercase && !contains(request, char::is_ascii_uppercase) {
        return Some("Password must contain at least 1 Capital letter.".to_string());
    }
    None
}

/// Requires at least one ASCII lower case letter.
pub fn check_lowercase(request: &PasswordChangeRequest, policy: &PasswordPolicy) -> RuleResult {
    if policy.check_lowercase && !contains(request, char::is_ascii_lowercase) {
        return Some("Password must contain at least 1 lower case character.".to_string());
    }
    None
}

/// Requires at least one ASCII digit.
pub fn check_numeric(request: &PasswordChangeRequest, policy: &PasswordPolicy) -> RuleResult {
    if policy.check_numeric && !contains(request, char::is_ascii_digit) {
        return Some("Password must contain at least 1 numeric character.".to_string());
    }
    None
}

/// Requires at least one character from the configured special set.
///
/// Runs on the untrimmed password. An empty set can never be satisfied.
pub fn check_special_char(request: &PasswordChangeRequest, policy: &PasswordPolicy) -> RuleResult {
    if !policy.check_special_char {
        return None;
    }

    let password = request.new_password.expose_secret();
    if policy.special_char.chars().any(|c| password.contains(c)) {
        return None;
    }
    Some(format!(
        "Password must contain at least 1 of the following characters: '{}'.",
        policy.special_char
    ))
}
