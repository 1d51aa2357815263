//! Number, date and list formatting handles.

use crate::status::RawStatus;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(i32)]
pub enum NumberStyle {
    #[default]
    Decimal = 1,
    Currency = 2,
    Percent = 3,
    Scientific = 4,
    Spellout = 5,
    Ordinal = 6,
    CurrencyIso = 12,
    CurrencyPlural = 13,
}

/// Integer-valued number format attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum NumberAttribute {
    GroupingUsed = 1,
    DecimalAlwaysShown = 2,
    MaxIntegerDigits = 3,
    MinIntegerDigits = 4,
    IntegerDigits = 5,
    MaxFractionDigits = 6,
    MinFractionDigits = 7,
    FractionDigits = 8,
    Multiplier = 9,
    GroupingSize = 10,
    RoundingMode = 11,
}

/// An open number formatter. Each `format_*` method writes into `out` and
/// returns the full formatted length, which is the required capacity when
/// `status` reports overflow. The three input representations are kept
/// separate so every numeric path is explicit at the call site.
pub trait NumberFormatHandle {
    fn set_attribute(&mut self, attribute: NumberAttribute, value: i32);

    fn format_i64(&self, value: i64, out: &mut [u16], status: &mut RawStatus) -> i32;

    fn format_f64(&self, value: f64, out: &mut [u16], status: &mut RawStatus) -> i32;

    /// Format an arbitrary-precision decimal given as its digit string.
    fn format_decimal(&self, digits: &str, out: &mut [u16], status: &mut RawStatus) -> i32;

    /// Format `value` in `currency` (an ISO 4217 code as code units).
    fn format_currency(
        &self,
        value: f64,
        currency: &[u16],
        out: &mut [u16],
        status: &mut RawStatus,
    ) -> i32;
}

pub trait NumberFormatProvider {
    type Format: NumberFormatHandle;

    fn open_number_format(
        &self,
        style: NumberStyle,
        locale: &str,
        status: &mut RawStatus,
    ) -> Option<Self::Format>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum DateStyle {
    Full = 0,
    Long = 1,
    Medium = 2,
    Short = 3,
    None = -1,
}

pub trait DateFormatHandle {
    /// Format an absolute time given as milliseconds since the Unix epoch.
    fn format(&self, epoch_millis: f64, out: &mut [u16], status: &mut RawStatus) -> i32;
}

pub trait DateFormatProvider {
    type Format: DateFormatHandle;

    fn open_date_format(
        &self,
        time_style: DateStyle,
        date_style: DateStyle,
        locale: &str,
        zone: &[u16],
        status: &mut RawStatus,
    ) -> Option<Self::Format>;

    /// Write the engine's default time zone id into `out`.
    fn default_time_zone(&self, out: &mut [u16], status: &mut RawStatus) -> i32;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum ListJoinWidth {
    Wide = 0,
    Short = 1,
    Narrow = 2,
}

pub trait ListFormatHandle {
    /// Join pre-formatted items into one locale-appropriate list.
    fn format(&self, items: &[&[u16]], out: &mut [u16], status: &mut RawStatus) -> i32;
}

pub trait ListFormatProvider {
    type Format: ListFormatHandle;

    fn open_list_format(
        &self,
        locale: &str,
        width: ListJoinWidth,
        status: &mut RawStatus,
    ) -> Option<Self::Format>;
}

/// A formatter opened from a skeleton description such as
/// `"measure-unit/duration-hour unit-width-full-name"`.
pub trait SkeletonFormatHandle {
    fn format_decimal(&self, digits: &str, out: &mut [u16], status: &mut RawStatus) -> i32;
}

pub trait SkeletonFormatProvider {
    type Format: SkeletonFormatHandle;

    fn open_skeleton_format(
        &self,
        skeleton: &[u16],
        locale: &str,
        status: &mut RawStatus,
    ) -> Option<Self::Format>;
}
