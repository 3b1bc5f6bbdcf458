//! Projection of the form state onto DOM presentation. Every patch lists each
//! class it owns in either `add` or `remove`, so applying a view yields the
//! same class list no matter what the element carried before.

use crate::{
    password::Requirement,
    registration::{
        validation::{MatchStyle, ValidationResult},
        wizard::StepVisibility,
    },
    theme::{IconPath, Theme},
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ClassPatch {
    pub add: &'static [&'static str],
    pub remove: &'static [&'static str],
}

impl ClassPatch {
    const SHOWN: ClassPatch = ClassPatch {
        add: &[],
        remove: &[Theme::HIDDEN],
    };
    const HIDDEN: ClassPatch = ClassPatch {
        add: &[Theme::HIDDEN],
        remove: &[],
    };

    #[must_use]
    pub fn hidden(hidden: bool) -> Self {
        if hidden {
            Self::HIDDEN
        } else {
            Self::SHOWN
        }
    }

    #[must_use]
    pub fn indicator(satisfied: bool) -> Self {
        if satisfied {
            ClassPatch {
                add: &[Theme::INDICATOR_MET],
                remove: &[Theme::INDICATOR_UNMET],
            }
        } else {
            ClassPatch {
                add: &[Theme::INDICATOR_UNMET],
                remove: &[Theme::INDICATOR_MET],
            }
        }
    }

    #[must_use]
    pub fn password_field(is_strong: bool) -> Self {
        if is_strong {
            ClassPatch {
                add: &[Theme::SUCCESS_TEXT, Theme::SUCCESS_BORDER],
                remove: &[Theme::NEUTRAL_BORDER],
            }
        } else {
            ClassPatch {
                add: &[Theme::NEUTRAL_BORDER],
                remove: &[Theme::SUCCESS_TEXT, Theme::SUCCESS_BORDER],
            }
        }
    }

    #[must_use]
    pub fn confirm_field(style: MatchStyle) -> Self {
        match style {
            MatchStyle::Neutral => ClassPatch {
                add: &[Theme::NEUTRAL_BORDER],
                remove: &[
                    Theme::SUCCESS_OUTLINE,
                    Theme::SUCCESS_TEXT,
                    Theme::SUCCESS_BORDER,
                    Theme::ERROR_OUTLINE,
                    Theme::ERROR_TEXT,
                ],
            },
            MatchStyle::Success => ClassPatch {
                add: &[
                    Theme::SUCCESS_OUTLINE,
                    Theme::SUCCESS_TEXT,
                    Theme::SUCCESS_BORDER,
                ],
                remove: &[Theme::ERROR_OUTLINE, Theme::ERROR_TEXT, Theme::NEUTRAL_BORDER],
            },
            MatchStyle::Error => ClassPatch {
                add: &[Theme::ERROR_OUTLINE, Theme::ERROR_TEXT, Theme::NEUTRAL_BORDER],
                remove: &[
                    Theme::SUCCESS_OUTLINE,
                    Theme::SUCCESS_TEXT,
                    Theme::SUCCESS_BORDER,
                ],
            },
        }
    }

    #[must_use]
    pub fn contains(&self, class: &str) -> Option<bool> {
        if self.add.iter().any(|owned| *owned == class) {
            Some(true)
        } else if self.remove.iter().any(|owned| *owned == class) {
            Some(false)
        } else {
            None
        }
    }
}

/// Presentation of one checklist item.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IndicatorView {
    pub requirement: Requirement,
    pub classes: ClassPatch,
    pub icon: IconPath,
}

/// Everything the validation handler writes after one `input` event.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormView {
    pub indicators: Vec<IndicatorView>,
    pub password_field: ClassPatch,
    pub confirm_field: ClassPatch,
    pub submit_disabled: bool,
}

impl From<&ValidationResult> for FormView {
    fn from(result: &ValidationResult) -> Self {
        let indicators = result
            .strength
            .outcomes()
            .iter()
            .map(|outcome| IndicatorView {
                requirement: outcome.requirement,
                classes: ClassPatch::indicator(outcome.satisfied),
                icon: if outcome.satisfied {
                    IconPath::CHECK
                } else {
                    IconPath::CROSS
                },
            })
            .collect();

        Self {
            indicators,
            password_field: ClassPatch::password_field(result.is_strong()),
            confirm_field: ClassPatch::confirm_field(result.match_style),
            submit_disabled: result.submit_disabled(),
        }
    }
}

/// Class patches for the four step-dependent elements.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StepView {
    pub next_button: ClassPatch,
    pub first_inputs: ClassPatch,
    pub second_inputs: ClassPatch,
    pub second_buttons: ClassPatch,
}

impl From<StepVisibility> for StepView {
    fn from(visibility: StepVisibility) -> Self {
        Self {
            next_button: ClassPatch::hidden(visibility.next_button_hidden),
            first_inputs: ClassPatch::hidden(visibility.first_inputs_hidden),
            second_inputs: ClassPatch::hidden(visibility.second_inputs_hidden),
            second_buttons: ClassPatch::hidden(visibility.second_buttons_hidden),
        }
    }
}
