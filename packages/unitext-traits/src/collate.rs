//! Locale-aware string comparison.

use crate::status::RawStatus;

/// Tunable collator behaviors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum CollationAttribute {
    FrenchCollation = 0,
    AlternateHandling = 1,
    CaseFirst = 2,
    CaseLevel = 3,
    NormalizationMode = 4,
    Strength = 5,
    HiraganaQuaternaryMode = 6,
    NumericCollation = 7,
}

/// Values a [`CollationAttribute`] can take. Strength levels, on/off
/// toggles and case ordering share one value space in the engine
/// convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum AttributeValue {
    Default = -1,
    Primary = 0,
    Secondary = 1,
    Tertiary = 2,
    Quaternary = 3,
    Identical = 15,
    Off = 16,
    On = 17,
    Shifted = 20,
    NonIgnorable = 21,
    LowerFirst = 24,
    UpperFirst = 25,
}

impl AttributeValue {
    pub fn from_raw(raw: i32) -> Option<Self> {
        Some(match raw {
            -1 => Self::Default,
            0 => Self::Primary,
            1 => Self::Secondary,
            2 => Self::Tertiary,
            3 => Self::Quaternary,
            15 => Self::Identical,
            16 => Self::Off,
            17 => Self::On,
            20 => Self::Shifted,
            21 => Self::NonIgnorable,
            24 => Self::LowerFirst,
            25 => Self::UpperFirst,
            _ => return None,
        })
    }
}

/// An open collator. Comparison is infallible in the engine convention;
/// only attribute access and sort key generation carry a status slot.
pub trait CollatorHandle {
    /// Three-way comparison: negative, zero or positive as `left` sorts
    /// before, equal to or after `right`.
    fn compare(&self, left: &[u16], right: &[u16]) -> i32;

    /// Write the binary sort key for `units` into `out`, returning the key
    /// length. When `out` is too small, implementations set `status` to
    /// [`BUFFER_OVERFLOW`](crate::status::BUFFER_OVERFLOW) and return the
    /// required capacity.
    fn sort_key(&self, units: &[u16], out: &mut [u8], status: &mut RawStatus) -> i32;

    /// The valid locale this collator actually resolved to.
    fn locale(&self, status: &mut RawStatus) -> String;

    /// The collator's tailoring rules, as UTF-16 code units.
    fn rules(&self) -> Vec<u16>;

    fn attribute(&self, attribute: CollationAttribute, status: &mut RawStatus) -> i32;

    fn set_attribute(&mut self, attribute: CollationAttribute, value: i32, status: &mut RawStatus);
}

pub trait CollationProvider {
    type Collator: CollatorHandle;

    fn open_collator(&self, locale: &str, status: &mut RawStatus) -> Option<Self::Collator>;

    fn available_locales(&self) -> Vec<String>;

    /// Keywords that can tailor collation (e.g. `"collation"`).
    fn keywords(&self, status: &mut RawStatus) -> Vec<String>;

    /// Valid values for one collation keyword.
    fn keyword_values(&self, keyword: &str, status: &mut RawStatus) -> Vec<String>;
}
