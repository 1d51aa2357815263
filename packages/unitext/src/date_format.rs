//! Locale-aware date and time formatting.

use std::time::{SystemTime, UNIX_EPOCH};

use unitext_traits::format::{DateFormatHandle, DateFormatProvider, DateStyle};

use crate::buffer::UnitBuffer;
use crate::error::{Error, Result};
use crate::invoke::{call_with_unit_buffer, call_for_unit_string, invoke_checked};

// Zone ids are short; probing at this size virtually never retries.
const ZONE_CAPACITY: usize = 32;

/// Formatter configuration applied at construction. There is no global
/// default state; embedders thread one of these through explicitly.
#[derive(Debug, Clone)]
pub struct DateTimeFormatOptions {
    pub time_style: DateStyle,
    pub date_style: DateStyle,
    pub locale: String,
    /// Time zone id; the engine's default zone when `None`.
    pub zone: Option<String>,
}

impl Default for DateTimeFormatOptions {
    fn default() -> Self {
        Self {
            time_style: DateStyle::Short,
            date_style: DateStyle::Short,
            locale: "C".to_owned(),
            zone: None,
        }
    }
}

pub struct DateTimeFormatter<H: DateFormatHandle> {
    handle: H,
}

impl<H: DateFormatHandle> DateTimeFormatter<H> {
    pub fn open<P>(provider: &P, options: &DateTimeFormatOptions) -> Result<Self>
    where
        P: DateFormatProvider<Format = H>,
    {
        let zone = match &options.zone {
            Some(id) => UnitBuffer::from_str(id),
            None => call_with_unit_buffer(ZONE_CAPACITY, |out, slot| {
                provider.default_time_zone(out, slot)
            })?,
        };
        let handle = invoke_checked(|slot| {
            provider.open_date_format(
                options.time_style,
                options.date_style,
                &options.locale,
                zone.as_units(),
                slot,
            )
        })?
        .ok_or_else(Error::missing_handle)?;
        Ok(Self { handle })
    }

    pub fn format(&self, time: SystemTime) -> Result<String> {
        self.format_epoch_millis(epoch_millis(time))
    }

    /// Format an absolute time given as milliseconds since the Unix epoch.
    pub fn format_epoch_millis(&self, millis: f64) -> Result<String> {
        call_for_unit_string(0, |out, slot| self.handle.format(millis, out, slot))
    }
}

/// One-shot formatting with a fresh formatter.
pub fn format<P: DateFormatProvider>(
    provider: &P,
    time: SystemTime,
    options: &DateTimeFormatOptions,
) -> Result<String> {
    DateTimeFormatter::open(provider, options)?.format(time)
}

fn epoch_millis(time: SystemTime) -> f64 {
    match time.duration_since(UNIX_EPOCH) {
        Ok(after) => after.as_millis() as f64,
        Err(before) => -(before.duration().as_millis() as f64),
    }
}
