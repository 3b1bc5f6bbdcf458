//! Password and confirm-password validation, recomputed from the raw field
//! values on every keystroke.

use crate::password::{PasswordPolicy, StrengthReport};

/// Feedback shown on the confirm-password field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MatchStyle {
    Neutral,
    Success,
    Error,
}

impl MatchStyle {
    /// An empty confirm field stays neutral. Otherwise the field only shows
    /// success when the passwords match and the password is strong, so a
    /// matching but weak password is styled as an error.
    #[must_use]
    pub fn resolve(confirm_empty: bool, is_match: bool, is_strong: bool) -> Self {
        if confirm_empty {
            MatchStyle::Neutral
        } else if is_match && is_strong {
            MatchStyle::Success
        } else {
            MatchStyle::Error
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValidationResult {
    pub strength: StrengthReport,
    pub is_match: bool,
    pub match_style: MatchStyle,
}

impl ValidationResult {
    #[must_use]
    pub fn evaluate(policy: &PasswordPolicy, password: &str, confirm: &str) -> Self {
        let strength = policy.evaluate(password);
        let is_match = password == confirm;
        let match_style = MatchStyle::resolve(confirm.is_empty(), is_match, strength.is_strong());

        Self {
            strength,
            is_match,
            match_style,
        }
    }

    #[must_use]
    pub fn is_strong(&self) -> bool {
        self.strength.is_strong()
    }

    #[must_use]
    pub fn submit_disabled(&self) -> bool {
        !(self.is_strong() && self.is_match)
    }
}
