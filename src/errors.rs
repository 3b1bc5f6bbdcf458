use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("missing required element #{0}")]
    MissingElement(String),
    #[error("element #{id} is not {expected}")]
    ElementType { id: String, expected: &'static str },
    #[error("DOM error: {0}")]
    Dom(String),
    #[error("invalid password rule pattern")]
    Pattern(#[from] regex::Error),
    #[error("invalid runtime config: {0}")]
    Config(#[from] serde_json::Error),
    #[error("invalid log filter: {0}")]
    LogFilter(String),
    #[error("logging setup failed: {0}")]
    Logging(String),
}

#[cfg(target_arch = "wasm32")]
impl From<wasm_bindgen::JsValue> for AppError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        match value.as_string() {
            Some(message) => AppError::Dom(message),
            None => AppError::Dom(format!("{value:?}")),
        }
    }
}

#[cfg(target_arch = "wasm32")]
impl From<AppError> for wasm_bindgen::JsValue {
    fn from(err: AppError) -> Self {
        wasm_bindgen::JsValue::from_str(&err.to_string())
    }
}
