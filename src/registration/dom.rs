use crate::{
    dom::{apply_classes, listen},
    errors::AppError,
    registration::{
        ClassPatch, FormIds, FormView, RegistrationForm,
        elements::{ElementSource, FormElement, RegistrationElements},
    },
};
use std::{cell::RefCell, rc::Rc};
use tracing::{debug, error};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, EventTarget, HtmlInputElement};

impl FormElement for Element {
    fn apply_classes(&self, patch: ClassPatch) -> Result<(), AppError> {
        apply_classes(self, patch)
    }

    fn set_attribute(&self, name: &str, value: &str) -> Result<(), AppError> {
        Element::set_attribute(self, name, value)?;
        Ok(())
    }

    fn toggle_attribute(&self, name: &str, present: bool) -> Result<(), AppError> {
        self.toggle_attribute_with_force(name, present)?;
        Ok(())
    }

    fn query(&self, selector: &str) -> Result<Option<Self>, AppError> {
        Ok(self.query_selector(selector)?)
    }

    fn input_value(&self) -> Option<String> {
        self.dyn_ref::<HtmlInputElement>().map(HtmlInputElement::value)
    }
}

impl ElementSource for Document {
    type Element = Element;

    fn element_by_id(&self, id: &str) -> Option<Element> {
        self.get_element_by_id(id)
    }
}

/// Form state plus the elements it renders into.
struct Controller {
    form: RefCell<RegistrationForm>,
    elements: RegistrationElements<Element>,
}

impl Controller {
    fn on_input(&self) -> Result<(), AppError> {
        let (password, confirm) = self.elements.values();
        let result = self.form.borrow().validate(&password, &confirm);

        debug!(
            is_strong = result.is_strong(),
            is_match = result.is_match,
            match_style = ?result.match_style,
            "password input validated"
        );

        self.elements.render_form(&FormView::from(&result))
    }

    fn on_next(&self) -> Result<(), AppError> {
        let view = {
            let mut form = self.form.borrow_mut();
            let step = form.next();
            debug!(?step, "registration step changed");
            form.step_view()
        };
        self.elements.render_step(view)
    }

    fn on_back(&self) -> Result<(), AppError> {
        let view = {
            let mut form = self.form.borrow_mut();
            let step = form.back();
            debug!(?step, "registration step changed");
            form.step_view()
        };
        self.elements.render_step(view)
    }
}

fn report(result: Result<(), AppError>) {
    if let Err(err) = result {
        error!("registration form update failed: {err}");
    }
}

/// Binds the registration form listeners and renders the first step.
pub(crate) fn bind(document: &Document, ids: &FormIds) -> Result<(), AppError> {
    let elements = RegistrationElements::lookup(document, ids)?;
    let form = RegistrationForm::new()?;

    let controller = Rc::new(Controller {
        form: RefCell::new(form),
        elements,
    });
    controller
        .elements
        .render_step(controller.form.borrow().step_view())?;

    let on_input = Rc::clone(&controller);
    listen(
        &[
            controller.elements.password.unchecked_ref::<EventTarget>(),
            controller.elements.confirm_password.unchecked_ref::<EventTarget>(),
        ],
        "input",
        move |_event| report(on_input.on_input()),
    )?;

    let on_next = Rc::clone(&controller);
    listen(
        &[controller.elements.next_button.unchecked_ref::<EventTarget>()],
        "click",
        move |_event| report(on_next.on_next()),
    )?;

    let on_back = Rc::clone(&controller);
    listen(
        &[controller.elements.back_button.unchecked_ref::<EventTarget>()],
        "click",
        move |_event| report(on_back.on_back()),
    )?;

    debug!("registration form bound");
    Ok(())
}
