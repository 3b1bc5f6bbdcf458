use crate::{
    dom::{document, listen},
    errors::AppError,
    swap::{BEFORE_SWAP_EVENT, SwapEvent, handle_before_swap},
};
use js_sys::Reflect;
use tracing::{debug, error};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CustomEvent, Event, EventTarget};

/// `detail` object of an `htmx:beforeSwap` event.
struct HtmxSwapDetail {
    detail: JsValue,
}

impl HtmxSwapDetail {
    fn from_event(event: &Event) -> Option<Self> {
        let detail = event.dyn_ref::<CustomEvent>()?.detail();
        if detail.is_null() || detail.is_undefined() {
            return None;
        }
        Some(Self { detail })
    }

    fn set_flag(&self, key: &str, value: bool) -> Result<(), AppError> {
        Reflect::set(&self.detail, &JsValue::from_str(key), &JsValue::from_bool(value))?;
        Ok(())
    }
}

impl SwapEvent for HtmxSwapDetail {
    type Error = AppError;

    fn status(&self) -> Option<f64> {
        let xhr = Reflect::get(&self.detail, &JsValue::from_str("xhr")).ok()?;
        if xhr.is_null() || xhr.is_undefined() {
            return None;
        }
        Reflect::get(&xhr, &JsValue::from_str("status")).ok()?.as_f64()
    }

    fn set_should_swap(&mut self, value: bool) -> Result<(), AppError> {
        self.set_flag("shouldSwap", value)
    }

    fn set_is_error(&mut self, value: bool) -> Result<(), AppError> {
        self.set_flag("isError", value)
    }
}

/// Subscribes the error-swap override on `document.body`.
pub(crate) fn install() -> Result<(), AppError> {
    let body = document()?
        .body()
        .ok_or_else(|| AppError::MissingElement("body".to_string()))?;

    listen(&[body.unchecked_ref::<EventTarget>()], BEFORE_SWAP_EVENT, |event| {
        let Some(mut detail) = HtmxSwapDetail::from_event(&event) else {
            debug!("{BEFORE_SWAP_EVENT} without detail");
            return;
        };
        if let Err(err) = handle_before_swap(&mut detail) {
            error!("failed to override {BEFORE_SWAP_EVENT}: {err}");
        }
    })?;

    debug!("error swap installed");
    Ok(())
}
