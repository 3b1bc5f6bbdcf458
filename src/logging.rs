//! `tracing` setup for the page scripts. In the browser every formatted event
//! is forwarded to the console method matching its level; native builds write
//! to stderr. Timestamps are left out because `wasm32-unknown-unknown` has no
//! system clock.

use crate::{config::DEFAULT_LOG_LEVEL, errors::AppError};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::{EnvFilter, fmt};

/// Builds the event filter from a directive such as `warn` or
/// `rambanbelajar_web=debug`. Events below `error` are dropped by default.
///
/// # Errors
///
/// Returns an error if the directive cannot be parsed.
pub fn filter(directive: &str) -> Result<EnvFilter, AppError> {
    EnvFilter::builder()
        .with_default_directive(LevelFilter::ERROR.into())
        .parse(directive)
        .map_err(|err| AppError::LogFilter(err.to_string()))
}

/// Builds the filter for `directive`, or the [`DEFAULT_LOG_LEVEL`] filter
/// along with the parse error when the directive is rejected.
#[must_use]
pub fn filter_or_default(directive: &str) -> (EnvFilter, Option<AppError>) {
    match filter(directive) {
        Ok(filter) => (filter, None),
        Err(err) => (
            EnvFilter::builder()
                .with_default_directive(LevelFilter::ERROR.into())
                .parse_lossy(DEFAULT_LOG_LEVEL),
            Some(err),
        ),
    }
}

/// Installs the global subscriber. A directive that does not parse falls back
/// to [`DEFAULT_LOG_LEVEL`] and is reported as a warning.
///
/// # Errors
///
/// Returns an error if a subscriber is already set.
pub fn init(directive: &str) -> Result<(), AppError> {
    let (env_filter, rejected) = filter_or_default(directive);
    let subscriber = fmt()
        .with_env_filter(env_filter)
        .with_writer(writer())
        .without_time()
        .with_ansi(false)
        .with_target(false)
        .with_file(false)
        .with_line_number(false)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|err| AppError::Logging(err.to_string()))?;

    if let Some(err) = rejected {
        tracing::warn!(directive, "using log level {DEFAULT_LOG_LEVEL}: {err}");
    }
    Ok(())
}

#[cfg(target_arch = "wasm32")]
fn writer() -> console::ConsoleMakeWriter {
    console::ConsoleMakeWriter
}

#[cfg(not(target_arch = "wasm32"))]
fn writer() -> fn() -> std::io::Stderr {
    std::io::stderr
}

#[cfg(target_arch = "wasm32")]
mod console {
    use std::io;
    use tracing::{Level, Metadata};
    use tracing_subscriber::fmt::MakeWriter;
    use wasm_bindgen::JsValue;

    pub struct ConsoleMakeWriter;

    /// Buffers one formatted event and hands it to the console on drop.
    pub struct ConsoleWriter {
        level: Level,
        buffer: Vec<u8>,
    }

    impl io::Write for ConsoleWriter {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.buffer.extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl Drop for ConsoleWriter {
        fn drop(&mut self) {
            let message = String::from_utf8_lossy(&self.buffer);
            let message = message.trim_end();
            if message.is_empty() {
                return;
            }

            let value = JsValue::from_str(message);
            match self.level {
                Level::ERROR => web_sys::console::error_1(&value),
                Level::WARN => web_sys::console::warn_1(&value),
                Level::INFO => web_sys::console::info_1(&value),
                _ => web_sys::console::debug_1(&value),
            }
        }
    }

    impl<'a> MakeWriter<'a> for ConsoleMakeWriter {
        type Writer = ConsoleWriter;

        fn make_writer(&'a self) -> Self::Writer {
            ConsoleWriter {
                level: Level::INFO,
                buffer: Vec::new(),
            }
        }

        fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
            ConsoleWriter {
                level: *meta.level(),
                buffer: Vec::new(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_accepts_levels_and_targets() {
        for directive in ["error", "warn", "info", "debug", "trace", "rambanbelajar_web=debug"] {
            assert!(filter(directive).is_ok(), "{directive} rejected");
        }
    }

    #[test]
    fn test_filter_rejects_garbage() {
        assert!(matches!(
            filter("rambanbelajar_web=loud"),
            Err(AppError::LogFilter(_))
        ));
    }

    #[test]
    fn test_rejected_directive_falls_back_to_default() {
        let (filter, rejected) = filter_or_default("rambanbelajar_web=loud");
        assert!(matches!(rejected, Some(AppError::LogFilter(_))));
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::WARN));
    }

    #[test]
    fn test_valid_directive_is_kept() {
        let (filter, rejected) = filter_or_default("debug");
        assert!(rejected.is_none());
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::DEBUG));
    }

    #[test]
    #[allow(clippy::unwrap_used)]
    fn test_filter_level_hint() {
        assert_eq!(filter("warn").unwrap().max_level_hint(), Some(LevelFilter::WARN));
        assert_eq!(filter("debug").unwrap().max_level_hint(), Some(LevelFilter::DEBUG));
    }
}
