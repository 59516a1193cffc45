//! UserID rule - password may not embed the user's identifier.

use secrecy::ExposeSecret;

use crate::policy::PasswordPolicy;
use crate::registry::RuleResult;
use crate::request::PasswordChangeRequest;

/// Checks that the user ID does not occur in the new password, ignoring case.
///
/// An empty user ID has nothing to exclude and always passes, where a plain
/// substring search would reject every password.
pub fn check_user_id(request: &PasswordChangeRequest, policy: &PasswordPolicy) -> RuleResult {
    if !policy.check_user_id || request.user_id.is_empty() {
        return None;
    }

    let user_id = request.user_id.to_lowercase();
    let password = request.new_password.expose_secret().to_lowercase();
    if password.contains(&user_id) {
        return Some("Password may not contain the UserID/ Username.".to_string());
    }
    None
}
