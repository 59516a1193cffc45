//! Password change policy validation library
//!
//! Validates a password change request against a configurable set of rules
//! (confirmation match, minimum length, user ID exclusion, character classes,
//! whitespace, history reuse, blacklist) and reports the first rule that
//! rejects it. Custom rules can be registered next to the built-in ones.
//!
//! # Features
//!
//! - `async` (default): Enables [`validate_tx`], which delivers the result over a channel
//! - `tracing`: Enables logging via tracing crate
//!
//! # Example
//!
//! ```rust
//! use pwd_policy::{PasswordChangeRequest, PasswordValidator};
//! use secrecy::SecretString;
//!
//! let policy = br#"{
//!     "CheckConfirm": true,
//!     "CheckMinLength": true,
//!     "MinLength": 8,
//!     "CheckUserID": true,
//!     "CheckUppercase": true,
//!     "CheckLowercase": true,
//!     "CheckNumeric": true,
//!     "CheckSpecialChar": true,
//!     "SpecialChar": "!@#$%*+/",
//!     "CheckWhiteSpace": true,
//!     "CheckHistory": true,
//!     "MinHistory": 3,
//!     "CheckBlackList": true
//! }"#;
//! let black_list = vec!["test".to_string(), "password".to_string()];
//!
//! // Configure once at startup
//! let mut validator = PasswordValidator::new();
//! validator.configure(policy, black_list).expect("Invalid policy");
//!
//! let request = PasswordChangeRequest {
//!     user_id: "ABHW089".to_string(),
//!     old_password: SecretString::new("B1ge@rs*".to_string().into()),
//!     new_password: SecretString::new("yVHn6?R@".to_string().into()),
//!     confirm_password: SecretString::new("yVHn6?R@".to_string().into()),
//!     password_history: vec!["$sG96r#X".to_string(), "3g9m&9W7".to_string()],
//!     new_password_hash: "yVHn6?R@".to_string(),
//!     application_id: None,
//!     jwt_token: None,
//! };
//!
//! match validator.validate(&request) {
//!     Ok(()) => println!("Success"),
//!     Err(e) => println!("Validate Error: {}", e),
//! }
//! ```

// Internal modules
mod error;
mod policy;
mod registry;
mod request;
pub mod rules;
mod validator;

// Public API
pub use error::{ConfigError, ValidationError};
pub use policy::PasswordPolicy;
pub use registry::{Rule, RuleResult};
pub use request::PasswordChangeRequest;
pub use rules::BuiltinRule;
pub use validator::PasswordValidator;

#[cfg(feature = "async")]
pub use validator::validate_tx;
