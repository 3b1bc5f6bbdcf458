//! Password strength rules for account registration. The same five rules drive
//! the live checklist on the registration form and can be enforced on the
//! server through [`password_constraints`], so both sides agree on what a
//! strong password is.

use crate::errors::AppError;
use regex::Regex;
use std::sync::OnceLock;

/// Symbols accepted by the [`Requirement::Symbol`] rule.
pub const SYMBOLS: &str = r#"!@#$%^&*()_+-=[]{};':"\|,.<>/?"#;

/// Minimum number of characters for the [`Requirement::Length`] rule.
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// One atomic requirement a password must satisfy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Requirement {
    Length,
    Lowercase,
    Uppercase,
    Digit,
    Symbol,
}

impl Requirement {
    /// Every requirement in checklist order.
    pub const ALL: [Requirement; 5] = [
        Requirement::Length,
        Requirement::Lowercase,
        Requirement::Uppercase,
        Requirement::Digit,
        Requirement::Symbol,
    ];

    /// Id of the checklist element that reflects this requirement.
    #[must_use]
    pub const fn indicator_id(self) -> &'static str {
        match self {
            Requirement::Length => "req-length",
            Requirement::Lowercase => "req-lower",
            Requirement::Uppercase => "req-upper",
            Requirement::Digit => "req-number",
            Requirement::Symbol => "req-symbol",
        }
    }

    const fn pattern(self) -> &'static str {
        match self {
            Requirement::Length => r".{8,}",
            Requirement::Lowercase => r"[a-z]",
            Requirement::Uppercase => r"[A-Z]",
            Requirement::Digit => r"[0-9]",
            Requirement::Symbol => r#"[!@#$%^&*()_+\-=\[\]{};':"\\|,.<>/?]"#,
        }
    }
}

#[derive(Clone, Debug)]
pub struct StrengthRule {
    requirement: Requirement,
    pattern: Regex,
}

impl StrengthRule {
    fn compile(requirement: Requirement) -> Result<Self, AppError> {
        Ok(Self {
            requirement,
            pattern: Regex::new(requirement.pattern())?,
        })
    }

    #[must_use]
    pub fn requirement(&self) -> Requirement {
        self.requirement
    }

    #[must_use]
    pub fn is_satisfied(&self, password: &str) -> bool {
        self.pattern.is_match(password)
    }
}

/// Outcome of a single rule against one password.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RuleOutcome {
    pub requirement: Requirement,
    pub satisfied: bool,
}

/// Per-rule outcomes for one password, in [`Requirement::ALL`] order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StrengthReport {
    outcomes: Vec<RuleOutcome>,
}

impl StrengthReport {
    #[must_use]
    pub fn outcomes(&self) -> &[RuleOutcome] {
        &self.outcomes
    }

    /// True only when every rule is satisfied.
    #[must_use]
    pub fn is_strong(&self) -> bool {
        self.outcomes.iter().all(|outcome| outcome.satisfied)
    }

    pub fn unmet(&self) -> impl Iterator<Item = Requirement> + '_ {
        self.outcomes
            .iter()
            .filter(|outcome| !outcome.satisfied)
            .map(|outcome| outcome.requirement)
    }
}

/// The fixed set of strength rules, compiled once per page.
#[derive(Clone, Debug)]
pub struct PasswordPolicy {
    rules: Vec<StrengthRule>,
}

impl PasswordPolicy {
    /// Compiles the five strength rules.
    ///
    /// # Errors
    ///
    /// Returns an error if a rule pattern fails to compile.
    pub fn new() -> Result<Self, AppError> {
        let rules = Requirement::ALL
            .into_iter()
            .map(StrengthRule::compile)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { rules })
    }

    #[must_use]
    pub fn rules(&self) -> &[StrengthRule] {
        &self.rules
    }

    #[must_use]
    pub fn evaluate(&self, password: &str) -> StrengthReport {
        let outcomes = self
            .rules
            .iter()
            .map(|rule| RuleOutcome {
                requirement: rule.requirement(),
                satisfied: rule.is_satisfied(password),
            })
            .collect();

        StrengthReport { outcomes }
    }

    #[must_use]
    pub fn is_strong(&self, password: &str) -> bool {
        self.rules.iter().all(|rule| rule.is_satisfied(password))
    }
}

/// Process-wide policy, compiled on first use. `None` if the rules failed to
/// compile.
#[must_use]
pub fn shared_policy() -> Option<&'static PasswordPolicy> {
    static POLICY: OnceLock<Option<PasswordPolicy>> = OnceLock::new();
    POLICY.get_or_init(|| PasswordPolicy::new().ok()).as_ref()
}

/// Server-side check mirroring the registration form checklist.
#[must_use]
pub fn password_constraints(password: &str) -> bool {
    shared_policy().is_some_and(|policy| policy.is_strong(password))
}
