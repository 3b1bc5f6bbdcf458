//! Two-step navigation of the registration form. Moving between steps never
//! depends on what has been typed so far.

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum WizardStep {
    #[default]
    Step1,
    Step2,
}

impl WizardStep {
    /// Step shown after clicking "Next".
    #[must_use]
    pub fn next(self) -> Self {
        WizardStep::Step2
    }

    /// Step shown after clicking "Back".
    #[must_use]
    pub fn back(self) -> Self {
        WizardStep::Step1
    }

    #[must_use]
    pub fn visibility(self) -> StepVisibility {
        let on_first = self == WizardStep::Step1;
        StepVisibility {
            next_button_hidden: !on_first,
            first_inputs_hidden: !on_first,
            second_inputs_hidden: on_first,
            second_buttons_hidden: on_first,
        }
    }
}

/// Which of the four step-dependent elements carry the `hidden` class.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StepVisibility {
    pub next_button_hidden: bool,
    pub first_inputs_hidden: bool,
    pub second_inputs_hidden: bool,
    pub second_buttons_hidden: bool,
}
