//! Shared engine contract for Unitext
//!
//! This crate defines the call-level interface between the Unitext service
//! façades (the [unitext](https://docs.rs/unitext) crate) and a Unicode
//! engine backend: the raw status convention every engine call writes, the
//! fixed-width code unit exchange types, and one provider trait per engine
//! capability.
//!
//! Text crosses every trait boundary as UTF-16 code unit slices
//! (`&[u16]`/`&mut [u16]`) with explicit lengths. Locale identifiers and
//! capability names are plain host strings (`&str`). Calls that can fail
//! take a `&mut RawStatus` outcome slot following the convention described
//! in [`status`].
//!
//! Handle types returned by the providers own the underlying engine
//! resource and release it exactly once when dropped.

pub mod boundary;
pub mod collate;
pub mod detect;
pub mod format;
pub mod locale;
pub mod normalize;
pub mod status;
pub mod translit;

pub use boundary::{BreakIter, BreakKind, BreakProvider, DONE};
pub use collate::{AttributeValue, CollationAttribute, CollationProvider, CollatorHandle};
pub use detect::{CharsetMatch, DetectionProvider, DetectorHandle};
pub use format::{
    DateFormatHandle, DateFormatProvider, DateStyle, ListFormatHandle, ListFormatProvider,
    ListJoinWidth, NumberAttribute, NumberFormatHandle, NumberFormatProvider, NumberStyle,
    SkeletonFormatHandle, SkeletonFormatProvider,
};
pub use locale::{LayoutOrientation, LocaleDisplayField, LocaleField, LocaleProvider};
pub use normalize::{NormalizationMode, NormalizationProvider};
pub use status::RawStatus;
pub use translit::{TransDirection, TransliterationProvider, TransliteratorHandle};
