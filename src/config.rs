//! Build-time configuration for the page scripts with an optional runtime
//! override. The runtime config is read from `window.RAMBANBELAJAR_CONFIG`
//! (if present) so a deployment can raise the log level or disable the error
//! swap without rebuilding the bundle. Values are public; do not store secrets
//! here.

use crate::errors::AppError;
use serde::Deserialize;

/// Name of the global the runtime override is read from.
pub const RUNTIME_CONFIG_KEY: &str = "RAMBANBELAJAR_CONFIG";

/// Filter directive used when nothing else is configured.
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Page script configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    /// `tracing` filter directive, e.g. `debug` or `rambanbelajar_web=trace`.
    pub log_level: String,
    /// Install the `htmx:beforeSwap` override at startup.
    pub error_swap: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            error_swap: true,
        }
    }
}

impl AppConfig {
    /// Loads config from build-time environment variables and applies runtime overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the runtime override is present but malformed.
    pub fn load() -> Result<Self, AppError> {
        match Self::load_lenient() {
            (config, None) => Ok(config),
            (_, Some(err)) => Err(err),
        }
    }

    /// Like [`AppConfig::load`], but a malformed runtime override is skipped:
    /// the build-time values are kept and the parse error is handed back so it
    /// can be logged once logging is up.
    #[must_use]
    pub fn load_lenient() -> (Self, Option<AppError>) {
        Self::build_time().with_runtime_override(runtime_config_json().as_deref())
    }

    /// Values baked in at compile time, over the defaults.
    #[must_use]
    pub fn build_time() -> Self {
        Self::from_build_env(
            option_env!("RAMBANBELAJAR_LOG_LEVEL"),
            option_env!("RAMBANBELAJAR_ERROR_SWAP"),
        )
    }

    fn with_runtime_override(mut self, raw: Option<&str>) -> (Self, Option<AppError>) {
        let Some(raw) = raw else {
            return (self, None);
        };
        match parse_runtime_config(raw) {
            Ok(runtime) => {
                self.apply(runtime);
                (self, None)
            }
            Err(err) => (self, Some(err)),
        }
    }

    fn from_build_env(log_level: Option<&str>, error_swap: Option<&str>) -> Self {
        let mut config = Self::default();
        if let Some(level) = log_level.and_then(normalize_runtime_value) {
            config.log_level = level;
        }
        if let Some(flag) = error_swap.and_then(parse_flag) {
            config.error_swap = flag;
        }
        config
    }

    fn apply(&mut self, runtime: RuntimeConfig) {
        if let Some(level) = runtime.log_level.as_deref().and_then(normalize_runtime_value) {
            self.log_level = level;
        }
        if let Some(flag) = runtime.error_swap {
            self.error_swap = flag;
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RuntimeConfig {
    log_level: Option<String>,
    error_swap: Option<bool>,
}

fn parse_runtime_config(raw: &str) -> Result<RuntimeConfig, AppError> {
    Ok(serde_json::from_str(raw)?)
}

#[cfg(target_arch = "wasm32")]
fn runtime_config_json() -> Option<String> {
    use js_sys::{JSON, Reflect};
    use wasm_bindgen::JsValue;

    let window = web_sys::window()?;
    let config = Reflect::get(&window, &JsValue::from_str(RUNTIME_CONFIG_KEY)).ok()?;
    if config.is_null() || config.is_undefined() {
        return None;
    }
    JSON::stringify(&config).ok().map(String::from)
}

#[cfg(not(target_arch = "wasm32"))]
fn runtime_config_json() -> Option<String> {
    None
}

fn normalize_runtime_value(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_runtime_value_trims_and_rejects_empty() {
        assert_eq!(normalize_runtime_value(""), None);
        assert_eq!(normalize_runtime_value("   "), None);
        assert_eq!(normalize_runtime_value("  debug "), Some("debug".to_string()));
    }

    #[test]
    fn parse_flag_accepts_common_spellings() {
        assert_eq!(parse_flag("TRUE"), Some(true));
        assert_eq!(parse_flag(" on "), Some(true));
        assert_eq!(parse_flag("0"), Some(false));
        assert_eq!(parse_flag("no"), Some(false));
        assert_eq!(parse_flag("maybe"), None);
    }

    #[test]
    fn build_env_defaults() {
        let config = AppConfig::from_build_env(None, None);
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.log_level, "warn");
        assert!(config.error_swap);
    }

    #[test]
    fn build_env_ignores_blank_and_unknown_values() {
        let config = AppConfig::from_build_env(Some("  "), Some("sometimes"));
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn build_env_overrides() {
        let config = AppConfig::from_build_env(Some("info"), Some("false"));
        assert_eq!(config.log_level, "info");
        assert!(!config.error_swap);
    }

    #[test]
    #[allow(clippy::unwrap_used)]
    fn runtime_overrides_win() {
        let mut config = AppConfig::from_build_env(Some("info"), None);
        config.apply(parse_runtime_config(r#"{"log_level":"debug","error_swap":false}"#).unwrap());
        assert_eq!(config.log_level, "debug");
        assert!(!config.error_swap);
    }

    #[test]
    #[allow(clippy::unwrap_used)]
    fn runtime_overrides_ignore_empty_and_missing() {
        let mut config = AppConfig::default();
        config.apply(parse_runtime_config(r#"{"log_level":"   "}"#).unwrap());
        assert_eq!(config, AppConfig::default());

        config.apply(parse_runtime_config("{}").unwrap());
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    #[allow(clippy::unwrap_used)]
    fn runtime_config_ignores_unknown_keys() {
        let runtime = parse_runtime_config(r#"{"theme":"dark","error_swap":true}"#).unwrap();
        assert_eq!(runtime.error_swap, Some(true));
        assert_eq!(runtime.log_level, None);
    }

    #[test]
    fn malformed_runtime_config_is_an_error() {
        assert!(matches!(
            parse_runtime_config(r#"{"error_swap":"yes"}"#),
            Err(AppError::Config(_))
        ));
        assert!(parse_runtime_config("[").is_err());
    }

    #[test]
    fn load_without_runtime_override() {
        assert_eq!(AppConfig::load().ok(), Some(AppConfig::build_time()));
        let (config, err) = AppConfig::load_lenient();
        assert_eq!(config, AppConfig::build_time());
        assert!(err.is_none());
    }

    #[test]
    fn runtime_override_is_applied_over_build_values() {
        let build = AppConfig::from_build_env(Some("info"), Some("false"));
        let (config, err) = build.with_runtime_override(Some(r#"{"log_level":"debug"}"#));
        assert!(err.is_none());
        assert_eq!(config.log_level, "debug");
        assert!(!config.error_swap);
    }

    #[test]
    fn malformed_runtime_override_keeps_build_values() {
        let build = AppConfig::from_build_env(Some("info"), Some("false"));
        for raw in ["[", r#"{"error_swap":"yes"}"#] {
            let (config, err) = build.clone().with_runtime_override(Some(raw));
            assert_eq!(config, build, "{raw}");
            assert!(matches!(err, Some(AppError::Config(_))), "{raw}");
        }
    }
}
