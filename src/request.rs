//! Password change request - the input to a validation run.

use secrecy::SecretString;

/// One attempt to change a user's password.
///
/// Built by the caller for each validation and only read by the rules.
/// Plaintext passwords are held as [`SecretString`] so they never show up
/// in `Debug` output.
#[derive(Debug)]
pub struct PasswordChangeRequest {
    /// Identifier that must not appear inside the new password.
    pub user_id: String,
    pub old_password: SecretString,
    pub new_password: SecretString,
    pub confirm_password: SecretString,
    /// Previously used values, most recent first.
    pub password_history: Vec<String>,
    /// Caller-computed form of `new_password`, compared literally against
    /// `password_history`. No hashing happens in this crate.
    pub new_password_hash: String,
    /// Opaque values passed through for custom rules.
    pub application_id: Option<String>,
    pub jwt_token: Option<SecretString>,
}
