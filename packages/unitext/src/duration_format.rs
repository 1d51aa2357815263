//! Locale-aware duration formatting.
//!
//! A duration is a map of calendar/clock fields to amounts. Each nonzero
//! field is formatted through a skeleton-derived unit formatter, and the
//! pieces are joined with the engine's unit list format — `"1 hour, 2
//! minutes and 3 seconds"` in an English locale.

use std::collections::HashMap;

use unitext_traits::format::{
    ListFormatHandle, ListFormatProvider, ListJoinWidth, SkeletonFormatHandle,
    SkeletonFormatProvider,
};

use crate::buffer::UnitBuffer;
use crate::error::{Error, Result};
use crate::invoke::{call_for_unit_string, invoke_checked};

/// Duration fields, largest first. The ordering is load-bearing: output
/// runs from the largest unit down, and the smallest supplied field is the
/// only one allowed to keep a fractional amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DurationField {
    Years,
    Months,
    Weeks,
    Days,
    Hours,
    Minutes,
    Seconds,
    Milliseconds,
    Microseconds,
    Nanoseconds,
}

impl DurationField {
    const ALL: [DurationField; 10] = [
        DurationField::Years,
        DurationField::Months,
        DurationField::Weeks,
        DurationField::Days,
        DurationField::Hours,
        DurationField::Minutes,
        DurationField::Seconds,
        DurationField::Milliseconds,
        DurationField::Microseconds,
        DurationField::Nanoseconds,
    ];

    fn unit_skeleton(self) -> &'static str {
        match self {
            DurationField::Years => "measure-unit/duration-year",
            DurationField::Months => "measure-unit/duration-month",
            DurationField::Weeks => "measure-unit/duration-week",
            DurationField::Days => "measure-unit/duration-day",
            DurationField::Hours => "measure-unit/duration-hour",
            DurationField::Minutes => "measure-unit/duration-minute",
            DurationField::Seconds => "measure-unit/duration-second",
            DurationField::Milliseconds => "measure-unit/duration-millisecond",
            DurationField::Microseconds => "measure-unit/duration-microsecond",
            DurationField::Nanoseconds => "measure-unit/duration-nanosecond",
        }
    }

    /// Sub-minute fields may carry a fractional amount when they are the
    /// smallest unit present; everything else is truncated to an integer.
    fn roundable(self) -> bool {
        matches!(
            self,
            DurationField::Seconds
                | DurationField::Milliseconds
                | DurationField::Microseconds
                | DurationField::Nanoseconds
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DurationStyle {
    #[default]
    Long,
    Short,
    Narrow,
    Digital,
}

impl DurationStyle {
    fn list_width(self) -> ListJoinWidth {
        match self {
            DurationStyle::Long => ListJoinWidth::Wide,
            DurationStyle::Short => ListJoinWidth::Short,
            DurationStyle::Narrow | DurationStyle::Digital => ListJoinWidth::Narrow,
        }
    }

    fn unit_width(self) -> &'static str {
        match self {
            DurationStyle::Long => "unit-width-full-name",
            DurationStyle::Short => "unit-width-short",
            DurationStyle::Narrow | DurationStyle::Digital => "unit-width-narrow",
        }
    }
}

pub struct DurationFormatter<'p, P>
where
    P: SkeletonFormatProvider + ListFormatProvider,
{
    provider: &'p P,
    locale: String,
    style: DurationStyle,
    list: <P as ListFormatProvider>::Format,
    // Unit formatters are opened lazily per skeleton and reused across
    // format calls.
    skeletons: HashMap<String, <P as SkeletonFormatProvider>::Format>,
}

impl<'p, P> DurationFormatter<'p, P>
where
    P: SkeletonFormatProvider + ListFormatProvider,
{
    pub fn new(provider: &'p P, locale: &str, style: DurationStyle) -> Result<Self> {
        let list =
            invoke_checked(|slot| provider.open_list_format(locale, style.list_width(), slot))?
                .ok_or_else(Error::missing_handle)?;
        Ok(Self {
            provider,
            locale: locale.to_owned(),
            style,
            list,
            skeletons: HashMap::new(),
        })
    }

    /// Format a duration given as field/amount pairs. Amounts must be
    /// non-negative; when a field appears more than once the last amount
    /// wins. Fields always render largest-first regardless of input
    /// order. An all-zero duration formats to an empty string.
    pub fn format(&mut self, fields: &[(DurationField, f64)]) -> Result<String> {
        if fields.is_empty() {
            return Err(Error::InvalidInput("no duration fields supplied".into()));
        }
        let mut amounts: HashMap<DurationField, f64> = HashMap::with_capacity(fields.len());
        for (field, amount) in fields {
            if *amount < 0.0 || !amount.is_finite() {
                return Err(Error::InvalidInput(format!(
                    "duration amount {amount} for {field:?} must be finite and non-negative"
                )));
            }
            amounts.insert(*field, *amount);
        }

        let smallest = *DurationField::ALL
            .iter()
            .rev()
            .find(|field| amounts.contains_key(*field))
            .ok_or_else(|| Error::InvalidInput("no duration fields supplied".into()))?;

        let mut parts = Vec::new();
        for field in DurationField::ALL {
            let Some(&amount) = amounts.get(&field) else {
                continue;
            };
            let amount = if field == smallest && field.roundable() {
                amount
            } else {
                amount.trunc()
            };
            if amount == 0.0 {
                continue;
            }
            parts.push(self.format_field(field, amount, field == smallest)?);
        }
        if parts.is_empty() {
            return Ok(String::new());
        }

        let units: Vec<UnitBuffer> = parts.iter().map(|p| UnitBuffer::from_str(p)).collect();
        let items: Vec<&[u16]> = units.iter().map(UnitBuffer::as_units).collect();
        call_for_unit_string(0, |out, slot| self.list.format(&items, out, slot))
    }

    fn format_field(&mut self, field: DurationField, amount: f64, smallest: bool) -> Result<String> {
        let mut skeleton = format!("{} {}", field.unit_skeleton(), self.style.unit_width());
        if smallest && field.roundable() {
            skeleton.push_str(" .#########");
        }
        self.ensure_skeleton(&skeleton)?;
        let handle = self
            .skeletons
            .get(&skeleton)
            .ok_or_else(Error::missing_handle)?;
        call_for_unit_string(0, |out, slot| {
            handle.format_decimal(&amount.to_string(), out, slot)
        })
    }

    fn ensure_skeleton(&mut self, skeleton: &str) -> Result<()> {
        if self.skeletons.contains_key(skeleton) {
            return Ok(());
        }
        let units = UnitBuffer::from_str(skeleton);
        let handle = invoke_checked(|slot| {
            self.provider
                .open_skeleton_format(units.as_units(), &self.locale, slot)
        })?
        .ok_or_else(Error::missing_handle)?;
        self.skeletons.insert(skeleton.to_owned(), handle);
        Ok(())
    }
}

/// One-shot duration formatting.
pub fn format<P>(
    provider: &P,
    locale: &str,
    style: DurationStyle,
    fields: &[(DurationField, f64)],
) -> Result<String>
where
    P: SkeletonFormatProvider + ListFormatProvider,
{
    DurationFormatter::new(provider, locale, style)?.format(fields)
}
