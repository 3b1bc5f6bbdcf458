//! Thin helpers over `web-sys` shared by the page behaviors.

use crate::{errors::AppError, registration::ClassPatch};
use wasm_bindgen::{JsCast, closure::Closure};
use web_sys::{Document, Element, Event, EventTarget};

pub(crate) fn document() -> Result<Document, AppError> {
    web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| AppError::Dom("no document available".to_string()))
}

pub(crate) fn apply_classes(element: &Element, patch: ClassPatch) -> Result<(), AppError> {
    let classes = element.class_list();
    for class in patch.remove {
        classes.remove_1(class)?;
    }
    for class in patch.add {
        classes.add_1(class)?;
    }
    Ok(())
}

/// Registers `handler` for `event` on every target. The listener stays
/// attached for the lifetime of the page.
pub(crate) fn listen<F>(targets: &[&EventTarget], event: &str, handler: F) -> Result<(), AppError>
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    for target in targets {
        target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    }
    closure.forget();
    Ok(())
}

/// Runs `callback` once the document has been parsed.
pub(crate) fn on_document_ready<F>(callback: F) -> Result<(), AppError>
where
    F: FnOnce() + 'static,
{
    let document = document()?;
    if document.ready_state() != "loading" {
        callback();
        return Ok(());
    }

    let closure = Closure::<dyn FnMut(Event)>::once(move |_event: Event| callback());
    document
        .add_event_listener_with_callback("DOMContentLoaded", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}
