//! Built-in password rules
//!
//! Each rule checks one policy decision and is a no-op when its switch in
//! [`PasswordPolicy`] is off.

mod blacklist;
mod composition;
mod confirm;
mod history;
mod length;
mod user_id;
mod whitespace;

pub use blacklist::check_black_list;
pub use composition::{check_lowercase, check_numeric, check_special_char, check_uppercase};
pub use confirm::confirm_password;
pub use history::check_history;
pub use length::check_min_length;
pub use user_id::check_user_id;
pub use whitespace::check_white_space;

use crate::policy::PasswordPolicy;
use crate::registry::RuleResult;
use crate::request::PasswordChangeRequest;

/// The rules registered by `configure`, in evaluation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BuiltinRule {
    Confirm,
    MinLength,
    UserId,
    Uppercase,
    Lowercase,
    Numeric,
    SpecialChar,
    WhiteSpace,
    History,
    BlackList,
}

impl BuiltinRule {
    pub const ALL: [BuiltinRule; 10] = [
        BuiltinRule::Confirm,
        BuiltinRule::MinLength,
        BuiltinRule::UserId,
        BuiltinRule::Uppercase,
        BuiltinRule::Lowercase,
        BuiltinRule::Numeric,
        BuiltinRule::SpecialChar,
        BuiltinRule::WhiteSpace,
        BuiltinRule::History,
        BuiltinRule::BlackList,
    ];

    /// Registry name of the rule.
    pub fn name(self) -> &'static str {
        match self {
            BuiltinRule::Confirm => "confirm",
            BuiltinRule::MinLength => "min_length",
            BuiltinRule::UserId => "user_id",
            BuiltinRule::Uppercase => "uppercase",
            BuiltinRule::Lowercase => "lowercase",
            BuiltinRule::Numeric => "numeric",
            BuiltinRule::SpecialChar => "special_char",
            BuiltinRule::WhiteSpace => "whitespace",
            BuiltinRule::History => "history",
            BuiltinRule::BlackList => "blacklist",
        }
    }

    pub fn rule(self) -> fn(&PasswordChangeRequest, &PasswordPolicy) -> RuleResult {
        match self {
            BuiltinRule::Confirm => confirm_password,
            BuiltinRule::MinLength => check_min_length,
            BuiltinRule::UserId => check_user_id,
            BuiltinRule::Uppercase => check_uppercase,
            BuiltinRule::Lowercase => check_lowercase,
            BuiltinRule::Numeric => check_numeric,
            BuiltinRule::SpecialChar => check_special_char,
            BuiltinRule::WhiteSpace => check_white_space,
            BuiltinRule::History => check_history,
            BuiltinRule::BlackList => check_black_list,
        }
    }
}
