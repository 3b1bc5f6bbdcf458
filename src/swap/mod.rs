//! Lets htmx render server error fragments in place.
//!
//! htmx discards the body of an error response by default. The server renders
//! its error pages as fragments meant to replace the target, so for any status
//! above [`ERROR_SWAP_THRESHOLD`] the `htmx:beforeSwap` event is rewritten to
//! swap anyway and to skip htmx's own error handling. Every other status keeps
//! the library default.

#[cfg(target_arch = "wasm32")]
pub(crate) mod dom;

use tracing::debug;

/// Event htmx dispatches before replacing the target content.
pub const BEFORE_SWAP_EVENT: &str = "htmx:beforeSwap";

/// Responses with a status strictly above this are swapped in.
pub const ERROR_SWAP_THRESHOLD: u16 = 400;

/// Flags written to a `beforeSwap` event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SwapOverride {
    pub should_swap: bool,
    pub is_error: bool,
}

/// Override for a response status, `None` when htmx should decide.
#[must_use]
pub fn swap_override(status: u16) -> Option<SwapOverride> {
    swap_override_for(f64::from(status))
}

/// [`swap_override`] for a status as JavaScript reports it. Fractions are
/// compared as-is and `NaN` is never above the threshold.
#[must_use]
pub fn swap_override_for(status: f64) -> Option<SwapOverride> {
    (status > f64::from(ERROR_SWAP_THRESHOLD)).then_some(SwapOverride {
        should_swap: true,
        is_error: false,
    })
}

/// The parts of a `beforeSwap` event the adapter reads and writes.
pub trait SwapEvent {
    type Error;

    /// `xhr.status` of the response about to be swapped, if it is a number.
    fn status(&self) -> Option<f64>;

    fn set_should_swap(&mut self, value: bool) -> Result<(), Self::Error>;

    fn set_is_error(&mut self, value: bool) -> Result<(), Self::Error>;
}

/// Applies [`swap_override`] to `event`. Returns whether the event changed.
///
/// # Errors
///
/// Returns an error if writing a flag to the event fails.
pub fn handle_before_swap<E: SwapEvent>(event: &mut E) -> Result<bool, E::Error> {
    let Some(status) = event.status() else {
        debug!("beforeSwap event without a readable status");
        return Ok(false);
    };

    let Some(swap) = swap_override_for(status) else {
        return Ok(false);
    };

    event.set_should_swap(swap.should_swap)?;
    event.set_is_error(swap.is_error)?;
    debug!(status, "swapping error response into the page");
    Ok(true)
}
