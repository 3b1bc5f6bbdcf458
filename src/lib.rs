//! Browser-side behavior for the rambanbelajar server-rendered pages.
//!
//! ## Error fragments
//!
//! The server answers failed htmx requests with an HTML fragment describing
//! the problem. [`swap`] rewrites htmx's `beforeSwap` event so those fragments
//! replace the request target instead of being dropped.
//!
//! ## Student registration
//!
//! The registration page is a two-step form. [`registration`] keeps the
//! visible step and the password feedback (strength checklist, confirm field
//! styling, submit gating) in plain Rust state and projects it onto the DOM.
//!
//! Both behaviors are pure logic on native targets. The DOM bindings and the
//! `wasm-bindgen` entry points only exist for `wasm32`.

pub mod config;
#[cfg(target_arch = "wasm32")]
mod dom;
pub mod errors;
pub mod logging;
pub mod password;
pub mod registration;
pub mod swap;
pub mod theme;

#[allow(clippy::doc_markdown, clippy::needless_raw_string_hashes)]
pub mod built_info {
    include!(concat!(env!("OUT_DIR"), "/built.rs"));
}

pub use errors::AppError;

pub const GIT_COMMIT_HASH: &str = match built_info::GIT_COMMIT_HASH {
    Some(hash) => hash,
    None => "unknown",
};

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

/// Module start hook: logging, then the error swap on every page.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    let (config, config_error) = config::AppConfig::load_lenient();

    if let Err(err) = logging::init(&config.log_level) {
        web_sys::console::warn_1(&JsValue::from_str(&format!("logging not installed: {err}")));
    }
    if let Some(err) = config_error {
        tracing::warn!("ignoring window.{}: {err}", config::RUNTIME_CONFIG_KEY);
    }
    tracing::info!(
        version = built_info::PKG_VERSION,
        commit = GIT_COMMIT_HASH,
        "page scripts loaded"
    );

    if config.error_swap {
        dom::on_document_ready(|| {
            if let Err(err) = swap::dom::install() {
                tracing::error!("error swap not installed: {err}");
                wasm_bindgen::throw_str(&err.to_string());
            }
        })?;
    }

    Ok(())
}

/// Binds the registration form. Called by the registration page; any missing
/// element is a markup defect and is thrown to the page.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(js_name = initRegistrationForm)]
pub fn init_registration_form() -> Result<(), JsValue> {
    dom::on_document_ready(|| {
        let bound = dom::document().and_then(|document| {
            registration::dom::bind(&document, &registration::FormIds::default())
        });
        if let Err(err) = bound {
            tracing::error!("registration form not bound: {err}");
            wasm_bindgen::throw_str(&err.to_string());
        }
    })?;
    Ok(())
}
