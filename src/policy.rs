//! Password policy - which rules are active and their parameters.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// The active rule configuration.
///
/// Deserialized from a JSON policy document such as:
///
/// ```json
/// {
///     "CheckConfirm": true,
///     "CheckMinLength": true,
///     "MinLength": 8,
///     "CheckSpecialChar": true,
///     "SpecialChar": "!@#$%*+/",
///     "CheckHistory": true,
///     "MinHistory": 3
/// }
/// ```
///
/// Missing switches default to `false` and missing parameters to zero/empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct PasswordPolicy {
    pub check_confirm: bool,
    pub check_min_length: bool,
    pub min_length: usize,
    #[serde(rename = "CheckUserID")]
    pub check_user_id: bool,
    pub check_uppercase: bool,
    pub check_lowercase: bool,
    pub check_numeric: bool,
    pub check_special_char: bool,
    /// Allowed special characters, checked one by one.
    pub special_char: String,
    pub check_white_space: bool,
    pub check_history: bool,
    /// Number of prior passwords, the old one included, that may not be reused.
    pub min_history: usize,
    pub check_black_list: bool,
    /// Forbidden substrings. Always replaced by the list given to `configure`.
    pub black_list: Vec<String>,
    /// Settings for custom rules, kept as-is.
    pub custom_config: serde_json::Value,
}

impl PasswordPolicy {
    /// Parses a JSON policy document.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] if the document is empty or malformed.
    pub fn from_json(data: &[u8]) -> Result<Self, ConfigError> {
        let policy = serde_json::from_slice(data)?;
        Ok(policy)
    }

    /// Decodes the `CustomConfig` payload into a caller-defined type.
    pub fn custom_config<T: DeserializeOwned>(&self) -> Result<T, ConfigError> {
        let value = T::deserialize(&self.custom_config)?;
        Ok(value)
    }
}
