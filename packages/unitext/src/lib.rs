//! Unicode text services over a pluggable engine
//!
//! This crate implements the host-side half of a Unicode services stack:
//! boundary analysis (the break cursor), collation, character set
//! detection, normalization, transliteration, locale data and
//! number/date/duration formatting. The Unicode algorithms themselves live
//! in an engine backend reached through the narrow call-level contract
//! defined in [`unitext-traits`](unitext_traits); what this crate owns is
//! everything around those calls:
//!
//! - the [`buffer`] module: owned UTF-16 code unit buffers and the
//!   conversions between host text and engine text,
//! - the [`invoke`] module: the uniform status channel and the
//!   probe-and-retry protocol for output-buffer-sized calls,
//! - the [`break_iterator`] module: the stateful boundary cursor,
//! - one thin façade module per service.
//!
//! Instances are synchronous and single-threaded: a buffer or cursor wraps
//! mutable state and a single engine resource, so sharing one across
//! threads needs external synchronization, while distinct instances are
//! fully independent.
//!
//! ## Feature flags
//!  - `tracing` (default): routes advisory engine warnings to
//!    [`tracing`].
//!  - `libicu`: an engine backend binding an installed ICU4C through its
//!    versioned C symbols.

pub mod break_iterator;
pub mod buffer;
pub mod chardet;
pub mod collator;
pub mod date_format;
pub mod duration_format;
mod error;
pub mod invoke;
pub mod locale;
pub mod normalizer;
pub mod number_format;
pub mod transliterator;

#[cfg(feature = "libicu")]
pub mod icu;

pub use break_iterator::BreakCursor;
pub use buffer::UnitBuffer;
pub use chardet::CharsetDetector;
pub use collator::Collator;
pub use date_format::{DateTimeFormatOptions, DateTimeFormatter};
pub use duration_format::{DurationField, DurationFormatter, DurationStyle};
pub use error::{Error, Result};
pub use locale::Locale;
pub use normalizer::Normalizer;
pub use number_format::{
    CurrencyFormatter, CurrencyStyle, NumberFormatOptions, NumberFormatter, NumberValue,
};
pub use transliterator::Transliterator;

pub use unitext_traits as traits;
pub use unitext_traits::{
    BreakKind, CharsetMatch, NormalizationMode, TransDirection,
    format::{DateStyle, NumberAttribute, NumberStyle},
};
