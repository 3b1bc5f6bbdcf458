//! Client-side behavior of the two-step student registration form: live
//! password checklist, confirm-password feedback, submit gating and the
//! Next/Back navigation between the two field groups.
//!
//! The state lives in [`RegistrationForm`]; the DOM only ever receives the
//! [`view`] projection of that state.

#[cfg(target_arch = "wasm32")]
pub(crate) mod dom;
pub mod elements;
pub mod validation;
pub mod view;
pub mod wizard;

pub use elements::{ElementSource, FormElement, RegistrationElements};
pub use validation::{MatchStyle, ValidationResult};
pub use view::{ClassPatch, FormView, IndicatorView, StepView};
pub use wizard::{StepVisibility, WizardStep};

use crate::{errors::AppError, password::PasswordPolicy};

/// Element ids the registration markup provides. Checklist indicator ids come
/// from [`crate::password::Requirement::indicator_id`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormIds {
    pub agree_check: String,
    pub submit_button: String,
    pub next_button: String,
    pub back_button: String,
    pub password: String,
    pub confirm_password: String,
    pub message_box: String,
    pub first_inputs: String,
    pub second_inputs: String,
    pub second_buttons: String,
}

impl Default for FormIds {
    fn default() -> Self {
        Self {
            agree_check: "agreeCheck".to_string(),
            submit_button: "submitBtn".to_string(),
            next_button: "nextBtn".to_string(),
            back_button: "backBtn".to_string(),
            password: "password".to_string(),
            confirm_password: "confirm-password".to_string(),
            message_box: "message-box".to_string(),
            first_inputs: "first-inpts".to_string(),
            second_inputs: "second-inpts".to_string(),
            second_buttons: "second-btns".to_string(),
        }
    }
}

impl FormIds {
    /// Ids that must be present before the form can be bound.
    #[must_use]
    pub fn required(&self) -> [&str; 10] {
        [
            &self.agree_check,
            &self.submit_button,
            &self.next_button,
            &self.back_button,
            &self.password,
            &self.confirm_password,
            &self.message_box,
            &self.first_inputs,
            &self.second_inputs,
            &self.second_buttons,
        ]
    }
}

/// Registration form state: the strength rules and the visible step.
#[derive(Clone, Debug)]
pub struct RegistrationForm {
    policy: PasswordPolicy,
    step: WizardStep,
}

impl RegistrationForm {
    /// Builds a form on its first step.
    ///
    /// # Errors
    ///
    /// Returns an error if the strength rules fail to compile.
    pub fn new() -> Result<Self, AppError> {
        Ok(Self::with_policy(PasswordPolicy::new()?))
    }

    #[must_use]
    pub fn with_policy(policy: PasswordPolicy) -> Self {
        Self {
            policy,
            step: WizardStep::default(),
        }
    }

    #[must_use]
    pub fn step(&self) -> WizardStep {
        self.step
    }

    #[must_use]
    pub fn validate(&self, password: &str, confirm: &str) -> ValidationResult {
        ValidationResult::evaluate(&self.policy, password, confirm)
    }

    pub fn next(&mut self) -> WizardStep {
        self.step = self.step.next();
        self.step
    }

    pub fn back(&mut self) -> WizardStep {
        self.step = self.step.back();
        self.step
    }

    #[must_use]
    pub fn step_view(&self) -> StepView {
        StepView::from(self.step.visibility())
    }
}
