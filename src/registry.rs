//! Rule registry - named rules kept in evaluation order.

use crate::policy::PasswordPolicy;
use crate::request::PasswordChangeRequest;

/// Result of a single rule.
/// - `Some(reason)` - Rule rejected the password
/// - `None` - Rule passed (or is switched off)
pub type RuleResult = Option<String>;

/// A validation rule run against every password change request.
///
/// Implemented for any `Fn(&PasswordChangeRequest, &PasswordPolicy) -> RuleResult`,
/// so plain functions and closures can be registered directly.
pub trait Rule: Send + Sync {
    fn check(&self, request: &PasswordChangeRequest, policy: &PasswordPolicy) -> RuleResult;
}

impl<F> Rule for F
where
    F: Fn(&PasswordChangeRequest, &PasswordPolicy) -> RuleResult + Send + Sync,
{
    fn check(&self, request: &PasswordChangeRequest, policy: &PasswordPolicy) -> RuleResult {
        self(request, policy)
    }
}

struct Entry {
    name: String,
    rule: Box<dyn Rule>,
}

/// Association list of rules.
///
/// Iteration follows insertion order. Registering an existing name swaps
/// the rule but keeps its position.
#[derive(Default)]
pub(crate) struct RuleRegistry {
    entries: Vec<Entry>,
}

impl RuleRegistry {
    /// Inserts `rule` under `name`, replacing any rule already bound to it.
    pub(crate) fn insert(&mut self, name: impl Into<String>, rule: Box<dyn Rule>) {
        let name = name.into();
        match self.entries.iter_mut().find(|e| e.name == name) {
            Some(entry) => entry.rule = rule,
            None => self.entries.push(Entry { name, rule }),
        }
    }

    #[cfg(any(test, feature = "tracing"))]
    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[cfg(any(test, feature = "tracing"))]
    pub(crate) fn contains(&self, name: &str) -> bool {
        self.entries.iter().any(|e| e.name == name)
    }

    /// Rule names in evaluation order.
    pub(crate) fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.name.as_str())
    }

    /// `(name, rule)` pairs in evaluation order.
    pub(crate) fn iter(&self) -> impl Iterator<Item = (&str, &dyn Rule)> {
        self.entries.iter().map(|e| (e.name.as_str(), e.rule.as_ref()))
    }
}

impl std::fmt::Debug for RuleRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.names()).finish()
    }
}
