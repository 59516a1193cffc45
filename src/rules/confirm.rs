//! Confirm rule - new password must match its confirmation.

use secrecy::ExposeSecret;

use crate::policy::PasswordPolicy;
use crate::registry::RuleResult;
use crate::request::PasswordChangeRequest;

/// Checks that the trimmed new password equals the trimmed confirmation.
pub fn confirm_password(request: &PasswordChangeRequest, policy: &PasswordPolicy) -> RuleResult {
    if !policy.check_confirm {
        return None;
    }

    let new = request.new_password.expose_secret().trim();
    let confirm = request.confirm_password.expose_secret().trim();
    if new != confirm {
        return Some("Confirmation password does not match.".to_string());
    }
    None
}
