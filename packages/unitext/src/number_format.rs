//! Locale-aware number formatting.

use unitext_traits::format::{
    NumberAttribute, NumberFormatHandle, NumberFormatProvider, NumberStyle,
};

use crate::buffer::UnitBuffer;
use crate::error::{Error, Result};
use crate::invoke::{call_for_unit_string, invoke_checked};

/// A numeric input, decided once at the API boundary. Keeping the three
/// representations as a closed sum means every formatting path is
/// statically enumerated instead of probed at runtime.
#[derive(Debug, Clone, PartialEq)]
pub enum NumberValue {
    Integer(i64),
    Float(f64),
    /// An arbitrary-precision decimal as its digit string, for values an
    /// `i64`/`f64` cannot carry exactly.
    Decimal(String),
}

impl NumberValue {
    pub fn decimal(digits: impl Into<String>) -> Self {
        NumberValue::Decimal(digits.into())
    }
}

impl From<i64> for NumberValue {
    fn from(value: i64) -> Self {
        NumberValue::Integer(value)
    }
}

impl From<i32> for NumberValue {
    fn from(value: i32) -> Self {
        NumberValue::Integer(value.into())
    }
}

impl From<u32> for NumberValue {
    fn from(value: u32) -> Self {
        NumberValue::Integer(value.into())
    }
}

impl From<f64> for NumberValue {
    fn from(value: f64) -> Self {
        NumberValue::Float(value)
    }
}

/// Formatter configuration applied at construction. There is no global
/// default state; embedders thread one of these through explicitly.
#[derive(Debug, Clone, Default)]
pub struct NumberFormatOptions {
    pub attributes: Vec<(NumberAttribute, i32)>,
}

pub struct NumberFormatter<H: NumberFormatHandle> {
    handle: H,
}

impl<H: NumberFormatHandle> NumberFormatter<H> {
    pub fn open<P>(provider: &P, locale: &str, style: NumberStyle) -> Result<Self>
    where
        P: NumberFormatProvider<Format = H>,
    {
        Self::open_with(provider, locale, style, &NumberFormatOptions::default())
    }

    pub fn open_with<P>(
        provider: &P,
        locale: &str,
        style: NumberStyle,
        options: &NumberFormatOptions,
    ) -> Result<Self>
    where
        P: NumberFormatProvider<Format = H>,
    {
        let mut handle = invoke_checked(|slot| provider.open_number_format(style, locale, slot))?
            .ok_or_else(Error::missing_handle)?;
        for (attribute, value) in &options.attributes {
            handle.set_attribute(*attribute, *value);
        }
        Ok(Self { handle })
    }

    pub fn set_attribute(&mut self, attribute: NumberAttribute, value: i32) {
        self.handle.set_attribute(attribute, value);
    }

    pub fn format(&self, value: impl Into<NumberValue>) -> Result<String> {
        let value = value.into();
        call_for_unit_string(0, |out, slot| match &value {
            NumberValue::Integer(v) => self.handle.format_i64(*v, out, slot),
            NumberValue::Float(v) => self.handle.format_f64(*v, out, slot),
            NumberValue::Decimal(digits) => self.handle.format_decimal(digits, out, slot),
        })
    }
}

/// Currency presentation style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CurrencyStyle {
    /// Locale symbol, e.g. `$`.
    #[default]
    Symbol,
    /// ISO code, e.g. `USD`.
    Iso,
    /// Spelled-out plural unit, e.g. `US dollars`.
    Plural,
}

pub struct CurrencyFormatter<H: NumberFormatHandle> {
    handle: H,
}

impl<H: NumberFormatHandle> CurrencyFormatter<H> {
    pub fn open<P>(provider: &P, locale: &str, style: CurrencyStyle) -> Result<Self>
    where
        P: NumberFormatProvider<Format = H>,
    {
        let number_style = match style {
            CurrencyStyle::Symbol => NumberStyle::Currency,
            CurrencyStyle::Iso => NumberStyle::CurrencyIso,
            CurrencyStyle::Plural => NumberStyle::CurrencyPlural,
        };
        let handle =
            invoke_checked(|slot| provider.open_number_format(number_style, locale, slot))?
                .ok_or_else(Error::missing_handle)?;
        Ok(Self { handle })
    }

    pub fn format(&self, value: f64, currency: &str) -> Result<String> {
        // ISO 4217 code plus terminator.
        let code = UnitBuffer::from_str_with_capacity(currency, 4)?;
        call_for_unit_string(0, |out, slot| {
            self.handle.format_currency(value, code.as_units(), out, slot)
        })
    }
}

pub fn format_number<P: NumberFormatProvider>(
    provider: &P,
    locale: &str,
    value: impl Into<NumberValue>,
) -> Result<String> {
    NumberFormatter::open(provider, locale, NumberStyle::Decimal)?.format(value)
}

pub fn format_percent<P: NumberFormatProvider>(
    provider: &P,
    locale: &str,
    value: impl Into<NumberValue>,
) -> Result<String> {
    NumberFormatter::open(provider, locale, NumberStyle::Percent)?.format(value)
}

pub fn format_currency<P: NumberFormatProvider>(
    provider: &P,
    locale: &str,
    value: f64,
    currency: &str,
) -> Result<String> {
    CurrencyFormatter::open(provider, locale, CurrencyStyle::Symbol)?.format(value, currency)
}

/// Spell a number out in words.
pub fn spell<P: NumberFormatProvider>(
    provider: &P,
    locale: &str,
    value: impl Into<NumberValue>,
) -> Result<String> {
    NumberFormatter::open(provider, locale, NumberStyle::Spellout)?.format(value)
}
