//! Element lookup and rendering for the registration markup, written against
//! [`ElementSource`] and [`FormElement`] so the required-id checks and the
//! optional checklist handling do not depend on a browser.

use crate::{
    errors::AppError,
    password::Requirement,
    registration::{ClassPatch, FormIds, FormView, StepView},
};
use tracing::debug;

/// Selector of the icon path inside a checklist item.
pub const ICON_PATH_SELECTOR: &str = "svg path";

/// An element the form writes to.
pub trait FormElement: Sized {
    /// Adds and removes the classes of `patch`.
    ///
    /// # Errors
    ///
    /// Returns an error if the class list rejects a change.
    fn apply_classes(&self, patch: ClassPatch) -> Result<(), AppError>;

    /// # Errors
    ///
    /// Returns an error if the attribute cannot be written.
    fn set_attribute(&self, name: &str, value: &str) -> Result<(), AppError>;

    /// Sets the boolean attribute `name` when `present`, removes it otherwise.
    ///
    /// # Errors
    ///
    /// Returns an error if the attribute cannot be written.
    fn toggle_attribute(&self, name: &str, present: bool) -> Result<(), AppError>;

    /// First descendant matching `selector`.
    ///
    /// # Errors
    ///
    /// Returns an error if the selector is invalid.
    fn query(&self, selector: &str) -> Result<Option<Self>, AppError>;

    /// Current value when the element is a text input.
    fn input_value(&self) -> Option<String>;
}

/// Resolves elements by id.
pub trait ElementSource {
    type Element: FormElement;

    fn element_by_id(&self, id: &str) -> Option<Self::Element>;
}

/// Checklist item and the icon path nested inside it.
#[derive(Debug)]
pub struct Indicator<E> {
    pub requirement: Requirement,
    pub element: E,
    pub icon_path: Option<E>,
}

/// References to the registration markup, resolved once.
#[derive(Debug)]
pub struct RegistrationElements<E> {
    pub submit_button: E,
    pub next_button: E,
    pub back_button: E,
    pub password: E,
    pub confirm_password: E,
    pub first_inputs: E,
    pub second_inputs: E,
    pub second_buttons: E,
    pub indicators: Vec<Indicator<E>>,
}

fn require<S: ElementSource>(source: &S, id: &str) -> Result<S::Element, AppError> {
    source
        .element_by_id(id)
        .ok_or_else(|| AppError::MissingElement(id.to_string()))
}

fn require_input<S: ElementSource>(source: &S, id: &str) -> Result<S::Element, AppError> {
    let element = require(source, id)?;
    if element.input_value().is_none() {
        return Err(AppError::ElementType {
            id: id.to_string(),
            expected: "an <input>",
        });
    }
    Ok(element)
}

impl<E: FormElement> RegistrationElements<E> {
    /// Resolves every id the form needs. Indicators and their icon paths are
    /// optional; all other elements must exist.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::MissingElement`] for the first required id that is
    /// absent, or [`AppError::ElementType`] if a password field is not an input.
    pub fn lookup<S>(source: &S, ids: &FormIds) -> Result<Self, AppError>
    where
        S: ElementSource<Element = E>,
    {
        for id in ids.required() {
            require(source, id)?;
        }

        let mut indicators = Vec::with_capacity(Requirement::ALL.len());
        for requirement in Requirement::ALL {
            let Some(element) = source.element_by_id(requirement.indicator_id()) else {
                debug!(id = requirement.indicator_id(), "indicator not present");
                continue;
            };
            let icon_path = element.query(ICON_PATH_SELECTOR)?;
            indicators.push(Indicator {
                requirement,
                element,
                icon_path,
            });
        }

        Ok(Self {
            submit_button: require(source, &ids.submit_button)?,
            next_button: require(source, &ids.next_button)?,
            back_button: require(source, &ids.back_button)?,
            password: require_input(source, &ids.password)?,
            confirm_password: require_input(source, &ids.confirm_password)?,
            first_inputs: require(source, &ids.first_inputs)?,
            second_inputs: require(source, &ids.second_inputs)?,
            second_buttons: require(source, &ids.second_buttons)?,
            indicators,
        })
    }

    /// Password and confirmation as currently typed.
    #[must_use]
    pub fn values(&self) -> (String, String) {
        (
            self.password.input_value().unwrap_or_default(),
            self.confirm_password.input_value().unwrap_or_default(),
        )
    }

    /// Writes the checklist, field styles and submit state.
    ///
    /// # Errors
    ///
    /// Returns the first DOM write that fails.
    pub fn render_form(&self, view: &FormView) -> Result<(), AppError> {
        for indicator_view in &view.indicators {
            let Some(indicator) = self
                .indicators
                .iter()
                .find(|indicator| indicator.requirement == indicator_view.requirement)
            else {
                continue;
            };
            indicator.element.apply_classes(indicator_view.classes)?;
            if let Some(path) = &indicator.icon_path {
                path.set_attribute("d", indicator_view.icon.d)?;
                path.set_attribute("stroke-width", indicator_view.icon.stroke_width)?;
            }
        }

        self.password.apply_classes(view.password_field)?;
        self.confirm_password.apply_classes(view.confirm_field)?;
        self.submit_button
            .toggle_attribute("disabled", view.submit_disabled)?;
        Ok(())
    }

    /// Shows the field and button groups of the current step.
    ///
    /// # Errors
    ///
    /// Returns the first DOM write that fails.
    pub fn render_step(&self, view: StepView) -> Result<(), AppError> {
        self.next_button.apply_classes(view.next_button)?;
        self.first_inputs.apply_classes(view.first_inputs)?;
        self.second_inputs.apply_classes(view.second_inputs)?;
        self.second_buttons.apply_classes(view.second_buttons)?;
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::{
        registration::RegistrationForm,
        theme::{IconPath, Theme},
    };
    use std::{
        cell::RefCell,
        collections::{BTreeMap, BTreeSet, HashMap},
        rc::Rc,
    };

    #[derive(Debug, Default)]
    struct NodeState {
        classes: RefCell<BTreeSet<String>>,
        attributes: RefCell<BTreeMap<String, String>>,
        value: Option<String>,
        icon: Option<Node>,
    }

    #[derive(Clone, Debug, Default)]
    struct Node(Rc<NodeState>);

    impl Node {
        fn input(value: &str) -> Self {
            Node(Rc::new(NodeState {
                value: Some(value.to_string()),
                ..NodeState::default()
            }))
        }

        fn with_icon() -> Self {
            Node(Rc::new(NodeState {
                icon: Some(Node::default()),
                ..NodeState::default()
            }))
        }

        fn has_class(&self, class: &str) -> bool {
            self.0.classes.borrow().contains(class)
        }

        fn attribute(&self, name: &str) -> Option<String> {
            self.0.attributes.borrow().get(name).cloned()
        }
    }

    impl FormElement for Node {
        fn apply_classes(&self, patch: ClassPatch) -> Result<(), AppError> {
            let mut classes = self.0.classes.borrow_mut();
            for class in patch.remove {
                classes.remove(*class);
            }
            for class in patch.add {
                classes.insert((*class).to_string());
            }
            Ok(())
        }

        fn set_attribute(&self, name: &str, value: &str) -> Result<(), AppError> {
            self.0
                .attributes
                .borrow_mut()
                .insert(name.to_string(), value.to_string());
            Ok(())
        }

        fn toggle_attribute(&self, name: &str, present: bool) -> Result<(), AppError> {
            let mut attributes = self.0.attributes.borrow_mut();
            if present {
                attributes.insert(name.to_string(), String::new());
            } else {
                attributes.remove(name);
            }
            Ok(())
        }

        fn query(&self, selector: &str) -> Result<Option<Self>, AppError> {
            assert_eq!(selector, ICON_PATH_SELECTOR);
            Ok(self.0.icon.clone())
        }

        fn input_value(&self) -> Option<String> {
            self.0.value.clone()
        }
    }

    #[derive(Default)]
    struct Page(HashMap<String, Node>);

    impl Page {
        /// Registration markup with every id, checklist item and icon.
        fn complete(password: &str, confirm: &str) -> Self {
            let ids = FormIds::default();
            let mut page = Page::default();
            for id in ids.required() {
                page.0.insert(id.to_string(), Node::default());
            }
            page.0.insert(ids.password, Node::input(password));
            page.0.insert(ids.confirm_password, Node::input(confirm));
            for requirement in Requirement::ALL {
                page.0
                    .insert(requirement.indicator_id().to_string(), Node::with_icon());
            }
            page
        }

        fn without(mut self, id: &str) -> Self {
            self.0.remove(id);
            self
        }

        fn node(&self, id: &str) -> Node {
            self.0[id].clone()
        }
    }

    impl ElementSource for Page {
        type Element = Node;

        fn element_by_id(&self, id: &str) -> Option<Node> {
            self.0.get(id).cloned()
        }
    }

    fn render(page: &Page) -> RegistrationElements<Node> {
        let elements = RegistrationElements::lookup(page, &FormIds::default()).unwrap();
        let (password, confirm) = elements.values();
        let result = RegistrationForm::new().unwrap().validate(&password, &confirm);
        elements.render_form(&FormView::from(&result)).unwrap();
        elements
    }

    #[test]
    fn test_lookup_resolves_complete_markup() {
        let page = Page::complete("Abcdef1!", "Abcdef1!");
        let elements = RegistrationElements::lookup(&page, &FormIds::default()).unwrap();
        assert_eq!(elements.indicators.len(), Requirement::ALL.len());
        assert!(elements.indicators.iter().all(|indicator| indicator.icon_path.is_some()));
        assert_eq!(
            elements.values(),
            ("Abcdef1!".to_string(), "Abcdef1!".to_string())
        );
    }

    #[test]
    fn test_every_required_id_is_fatal_when_missing() {
        let ids = FormIds::default();
        for id in ids.required() {
            let page = Page::complete("", "").without(id);
            match RegistrationElements::lookup(&page, &ids) {
                Err(AppError::MissingElement(missing)) => assert_eq!(missing, id),
                other => panic!("{id}: expected MissingElement, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_password_field_must_be_an_input() {
        let ids = FormIds::default();
        let mut page = Page::complete("", "");
        page.0.insert(ids.confirm_password.clone(), Node::default());
        match RegistrationElements::lookup(&page, &ids) {
            Err(AppError::ElementType { id, .. }) => assert_eq!(id, ids.confirm_password),
            other => panic!("expected ElementType, got {other:?}"),
        }
    }

    #[test]
    fn test_absent_indicators_are_skipped() {
        let page = Page::complete("Abcdef1!", "Abcdef1!")
            .without(Requirement::Lowercase.indicator_id())
            .without(Requirement::Symbol.indicator_id());
        let elements = render(&page);

        let present: Vec<Requirement> = elements
            .indicators
            .iter()
            .map(|indicator| indicator.requirement)
            .collect();
        assert_eq!(
            present,
            [Requirement::Length, Requirement::Uppercase, Requirement::Digit]
        );
        let length = page.node(Requirement::Length.indicator_id());
        assert!(length.has_class(Theme::INDICATOR_MET));
        assert!(page.node(&FormIds::default().submit_button).attribute("disabled").is_none());
    }

    #[test]
    fn test_indicator_without_icon_path_still_gets_classes() {
        let id = Requirement::Digit.indicator_id();
        let mut page = Page::complete("abc", "");
        page.0.insert(id.to_string(), Node::default());
        let elements = render(&page);

        let digit = elements
            .indicators
            .iter()
            .find(|indicator| indicator.requirement == Requirement::Digit)
            .unwrap();
        assert!(digit.icon_path.is_none());
        assert!(page.node(id).has_class(Theme::INDICATOR_UNMET));
    }

    #[test]
    fn test_render_form_writes_icons_and_submit_state() {
        let page = Page::complete("abcdefgh", "abcdefgh");
        let elements = render(&page);

        for indicator in &elements.indicators {
            let path = indicator.icon_path.as_ref().unwrap();
            let expected = if matches!(
                indicator.requirement,
                Requirement::Length | Requirement::Lowercase
            ) {
                IconPath::CHECK
            } else {
                IconPath::CROSS
            };
            assert_eq!(path.attribute("d").as_deref(), Some(expected.d));
            assert_eq!(
                path.attribute("stroke-width").as_deref(),
                Some(expected.stroke_width)
            );
        }

        let ids = FormIds::default();
        assert_eq!(page.node(&ids.submit_button).attribute("disabled"), Some(String::new()));
        let confirm = page.node(&ids.confirm_password);
        assert!(confirm.has_class(Theme::ERROR_OUTLINE));
        assert!(!confirm.has_class(Theme::SUCCESS_OUTLINE));
        assert!(page.node(&ids.password).has_class(Theme::NEUTRAL_BORDER));
    }

    #[test]
    fn test_render_step_toggles_groups() {
        let page = Page::complete("", "");
        let elements = RegistrationElements::lookup(&page, &FormIds::default()).unwrap();
        let mut form = RegistrationForm::new().unwrap();
        let ids = FormIds::default();

        elements.render_step(form.step_view()).unwrap();
        assert!(page.node(&ids.second_inputs).has_class(Theme::HIDDEN));
        assert!(!page.node(&ids.first_inputs).has_class(Theme::HIDDEN));

        form.next();
        elements.render_step(form.step_view()).unwrap();
        assert!(page.node(&ids.next_button).has_class(Theme::HIDDEN));
        assert!(page.node(&ids.first_inputs).has_class(Theme::HIDDEN));
        assert!(!page.node(&ids.second_inputs).has_class(Theme::HIDDEN));
        assert!(!page.node(&ids.second_buttons).has_class(Theme::HIDDEN));
    }
}
