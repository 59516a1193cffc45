//! History rule - recently used passwords may not be reused.

use secrecy::ExposeSecret;

use crate::policy::PasswordPolicy;
use crate::registry::RuleResult;
use crate::request::PasswordChangeRequest;

/// Rejects the old password and the first `min_history - 1` history entries.
///
/// The old password counts as the most recent one, so the history window is
/// one shorter than `min_history`. History entries are compared literally
/// (after trimming) with `new_password_hash`.
pub fn check_history(request: &PasswordChangeRequest, policy: &PasswordPolicy) -> RuleResult {
    if !policy.check_history {
        return None;
    }

    let reused = || {
        Some(format!(
            "You are also not allowed to use any of your previous {} passwords.",
            policy.min_history
        ))
    };

    if request.new_password.expose_secret() == request.old_password.expose_secret() {
        return reused();
    }

    let hash = request.new_password_hash.trim();
    let window = policy.min_history.saturating_sub(1);
    if request
        .password_history
        .iter()
        .take(window)
        .any(|previous| previous.trim() == hash)
    {
        return reused();
    }
    None
}
