//! Locale identifiers and their data.
//!
//! Locale ids are ASCII-compatible strings like `"en_US"`. Getters split
//! into two families matching the engine convention: identifier-shaped
//! fields come back through 8-bit byte buffers, human-readable display
//! strings through UTF-16 code unit buffers. Both follow the
//! report-required-length-on-overflow sizing convention.

use crate::status::RawStatus;

/// Identifier-shaped locale fields, written to byte buffers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LocaleField {
    BaseName,
    Canonical,
    Country,
    Language,
    Name,
    Parent,
    Script,
    Variant,
}

/// Human-readable display fields, written to code unit buffers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LocaleDisplayField {
    Country,
    Language,
    Name,
    Script,
    Variant,
}

/// Orientation of characters or lines in a locale's script.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum LayoutOrientation {
    LeftToRight = 0,
    RightToLeft = 1,
    TopToBottom = 2,
    BottomToTop = 3,
    Unknown = 4,
}

pub trait LocaleProvider {
    /// Write an identifier-shaped field of `id` into `out`, returning the
    /// full field length (required capacity on overflow).
    fn field(&self, id: &str, field: LocaleField, out: &mut [u8], status: &mut RawStatus) -> i32;

    /// Write a display field of `id`, rendered for `display_locale` (or
    /// the default locale when `None`), into `out`.
    fn display(
        &self,
        id: &str,
        field: LocaleDisplayField,
        display_locale: Option<&str>,
        out: &mut [u16],
        status: &mut RawStatus,
    ) -> i32;

    fn keyword_value(
        &self,
        id: &str,
        keyword: &str,
        out: &mut [u8],
        status: &mut RawStatus,
    ) -> i32;

    /// Write `id` with `keyword` set to `value` (or removed when `None`)
    /// into `out`.
    fn with_keyword_value(
        &self,
        id: &str,
        keyword: &str,
        value: Option<&str>,
        out: &mut [u8],
        status: &mut RawStatus,
    ) -> i32;

    fn keywords(&self, id: &str, status: &mut RawStatus) -> Vec<String>;

    fn add_likely_subtags(&self, id: &str, out: &mut [u8], status: &mut RawStatus) -> i32;

    fn minimize_subtags(&self, id: &str, out: &mut [u8], status: &mut RawStatus) -> i32;

    fn to_language_tag(
        &self,
        id: &str,
        strict: bool,
        out: &mut [u8],
        status: &mut RawStatus,
    ) -> i32;

    fn from_language_tag(&self, tag: &str, out: &mut [u8], status: &mut RawStatus) -> i32;

    fn lcid(&self, id: &str) -> u32;

    fn for_lcid(&self, lcid: u32, out: &mut [u8], status: &mut RawStatus) -> i32;

    /// Three-letter ISO 639 code, empty when unknown.
    fn iso3_language(&self, id: &str) -> String;

    /// Three-letter ISO 3166 code, empty when unknown.
    fn iso3_country(&self, id: &str) -> String;

    fn character_orientation(&self, id: &str, status: &mut RawStatus) -> LayoutOrientation;

    fn line_orientation(&self, id: &str, status: &mut RawStatus) -> LayoutOrientation;

    fn default_locale(&self) -> String;

    fn set_default_locale(&self, id: &str, status: &mut RawStatus);

    fn available_locales(&self) -> Vec<String>;

    fn iso_countries(&self) -> Vec<String>;

    fn iso_languages(&self) -> Vec<String>;
}
