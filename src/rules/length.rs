//! Length rule - checks password minimum length.

use secrecy::ExposeSecret;

use crate::policy::PasswordPolicy;
use crate::registry::RuleResult;
use crate::request::PasswordChangeRequest;

/// Checks that the trimmed new password has at least `min_length` characters.
///
/// Length is counted in characters, not bytes.
pub fn check_min_length(request: &PasswordChangeRequest, policy: &PasswordPolicy) -> RuleResult {
    if !policy.check_min_length {
        return None;
    }

    let len = request.new_password.expose_secret().trim().chars().count();
    if len < policy.min_length {
        return Some(format!(
            "Passwords must be a minimum of {} characters.",
            policy.min_length
        ));
    }
    None
}
