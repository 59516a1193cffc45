//! Password validator - runs the registered rules against a request.

#[cfg(feature = "async")]
use tokio::sync::mpsc;

use crate::error::{ConfigError, ValidationError};
use crate::policy::PasswordPolicy;
use crate::registry::{Rule, RuleRegistry};
use crate::request::PasswordChangeRequest;
use crate::rules::BuiltinRule;

/// Validates password changes with a configurable set of named rules.
///
/// A validator starts empty. [`configure`](Self::configure) registers the
/// built-in rules and loads the policy; [`register_rule`](Self::register_rule)
/// adds custom rules before or after that.
///
/// Rules run in registration order and validation stops at the first one
/// that rejects the password.
///
/// The validator holds no locks. Share it behind the host's own
/// synchronization if rules or configuration change while validating.
#[derive(Debug, Default)]
pub struct PasswordValidator {
    rules: RuleRegistry,
    policy: PasswordPolicy,
}

impl PasswordValidator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `rule` under `name`, replacing any rule with the same name.
    ///
    /// A replaced rule keeps its place in the evaluation order.
    pub fn register_rule(&mut self, name: impl Into<String>, rule: impl Rule + 'static) {
        let name = name.into();

        #[cfg(feature = "tracing")]
        tracing::debug!(
            rule = %name,
            replaced = self.rules.contains(&name),
            "registering password rule"
        );

        self.rules.insert(name, Box::new(rule));
    }

    /// Registers the built-in rules and loads a JSON policy document.
    ///
    /// Built-ins overwrite custom rules registered under the same names;
    /// other custom rules are left alone. `black_list` replaces any
    /// `BlackList` found in the document. The new policy fully replaces the
    /// previous one.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] if the document is empty or malformed.
    /// The previously active policy is kept in that case.
    pub fn configure(
        &mut self,
        policy_document: &[u8],
        black_list: Vec<String>,
    ) -> Result<(), ConfigError> {
        for builtin in BuiltinRule::ALL {
            self.register_rule(builtin.name(), builtin.rule());
        }

        let mut policy = match PasswordPolicy::from_json(policy_document) {
            Ok(policy) => policy,
            Err(e) => {
                #[cfg(feature = "tracing")]
                tracing::error!("Password policy configuration FAILED: {}", e);
                return Err(e);
            }
        };
        policy.black_list = black_list;

        #[cfg(feature = "tracing")]
        tracing::info!(
            "Password policy configured: {} rules, {} black listed words",
            self.rules.len(),
            policy.black_list.len()
        );

        self.policy = policy;
        Ok(())
    }

    /// Runs every registered rule against `request`.
    ///
    /// # Errors
    ///
    /// - [`ValidationError::NotConfigured`] if no rule is registered.
    /// - [`ValidationError::RuleViolation`] for the first rule that fails;
    ///   later rules are not run.
    pub fn validate(&self, request: &PasswordChangeRequest) -> Result<(), ValidationError> {
        if self.rules.is_empty() {
            return Err(ValidationError::NotConfigured);
        }

        for (name, rule) in self.rules.iter() {
            if let Some(message) = rule.check(request, &self.policy) {
                #[cfg(feature = "tracing")]
                tracing::debug!(rule = %name, "password rejected");
                return Err(ValidationError::RuleViolation {
                    rule: name.to_string(),
                    message,
                });
            }
        }
        Ok(())
    }

    /// The active policy.
    pub fn policy(&self) -> &PasswordPolicy {
        &self.policy
    }

    /// Registered rule names in evaluation order.
    pub fn rule_names(&self) -> Vec<&str> {
        self.rules.names().collect()
    }
}

/// Async version that sends the validation result via channel.
#[cfg(feature = "async")]
pub async fn validate_tx(
    validator: &PasswordValidator,
    request: &PasswordChangeRequest,
    tx: mpsc::Sender<Result<(), ValidationError>>,
) {
    let result = validator.validate(request);

    if let Err(e) = tx.send(result).await {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send password validation result: {}", e);
        #[cfg(not(feature = "tracing"))]
        let _ = e;
    }
}
