//! The error taxonomy shared by every service façade.

use unitext_traits::status::{self, RawStatus};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The engine reported a hard failure unrelated to buffer sizing, e.g.
    /// a malformed locale or an unopenable resource. Never retried.
    #[error("engine error: {name} ({code})")]
    Engine { code: RawStatus, name: &'static str },

    /// An output buffer was too small. Consumed internally by the one-shot
    /// retry in [`invoke`](crate::invoke); reaching a caller means the
    /// retry itself overflowed, which indicates an engine sizing bug.
    /// `needed` is zero when the failing call did not report a size.
    #[error("output buffer too small, {needed} code units required")]
    BufferOverflow { needed: usize },

    /// A caller-supplied capacity hint was smaller than the input requires,
    /// or a buffer resize attempted to shrink. Raised before any engine
    /// call.
    #[error("capacity {capacity} too small, {required} code units required")]
    CapacityTooSmall { capacity: usize, required: usize },

    /// A positional call on a boundary cursor with no bound text.
    #[error("no text has been bound to the cursor")]
    TextNotBound,

    /// Host-side validation failure: malformed code units coming back from
    /// the engine, an implausible reported length, an unusable input value.
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

impl Error {
    pub(crate) fn engine(code: RawStatus) -> Self {
        Error::Engine {
            code,
            name: status::name(code),
        }
    }

    /// An engine constructor returned no handle without setting a failure
    /// status. Treated as an internal engine defect.
    pub(crate) fn missing_handle() -> Self {
        Error::engine(status::INTERNAL_PROGRAM)
    }
}

pub type Result<T> = std::result::Result<T, Error>;
