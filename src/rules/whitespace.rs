//! Whitespace rule - no whitespace anywhere in the password.

use secrecy::ExposeSecret;

use crate::policy::PasswordPolicy;
use crate::registry::RuleResult;
use crate::request::PasswordChangeRequest;

/// Rejects tab, newline, form feed, carriage return and space.
///
/// Other Unicode whitespace such as a no-break space is allowed.
pub fn check_white_space(request: &PasswordChangeRequest, policy: &PasswordPolicy) -> RuleResult {
    if !policy.check_white_space {
        return None;
    }

    if request
        .new_password
        .expose_secret()
        .chars()
        .any(|c| matches!(c, '\t' | '\n' | '\x0C' | '\r' | ' '))
    {
        return Some("Space is not allowed.".to_string());
    }
    None
}
