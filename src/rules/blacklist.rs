//! Blacklist rule - rejects passwords containing forbidden words.

use secrecy::ExposeSecret;

use crate::policy::PasswordPolicy;
use crate::registry::RuleResult;
use crate::request::PasswordChangeRequest;

/// Checks the new password against each blacklisted word, ignoring case.
///
/// Words are tried in list order and the first hit is reported. Empty
/// entries are skipped; an empty word would otherwise match every password.
pub fn check_black_list(request: &PasswordChangeRequest, policy: &PasswordPolicy) -> RuleResult {
    if !policy.check_black_list || policy.black_list.is_empty() {
        return None;
    }

    let password = request.new_password.expose_secret().to_lowercase();
    policy
        .black_list
        .iter()
        .filter(|word| !word.is_empty())
        .find(|word| password.contains(&word.to_lowercase()))
        .map(|word| format!("Password contains black listed word '{}'.", word))
}
