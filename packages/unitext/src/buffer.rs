//! Owned UTF-16 code unit buffers and offset mapping.
//!
//! Text crosses the engine boundary as fixed-width 16-bit code units.
//! [`UnitBuffer`] owns such storage exclusively: it is created from host
//! text (or zero-filled for output probing), grown — never shrunk — by the
//! retry protocol, and decoded back to a host `String` over an explicit
//! unit count. One code unit per scalar value in the basic plane;
//! supplementary-plane scalars occupy a surrogate pair.

use crate::error::{Error, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnitBuffer {
    units: Vec<u16>,
}

impl UnitBuffer {
    /// Encode host text. Infallible: every well-formed `&str` has a UTF-16
    /// encoding.
    pub fn from_str(text: &str) -> Self {
        Self {
            units: text.encode_utf16().collect(),
        }
    }

    /// Encode host text into a buffer of exactly `capacity` units, padding
    /// with zeros. Fails fast when the hint cannot hold the encoded text.
    pub fn from_str_with_capacity(text: &str, capacity: usize) -> Result<Self> {
        let mut units: Vec<u16> = text.encode_utf16().collect();
        if capacity < units.len() {
            return Err(Error::CapacityTooSmall {
                capacity,
                required: units.len(),
            });
        }
        units.resize(capacity, 0);
        Ok(Self { units })
    }

    /// A zero-filled output buffer of `capacity` units. A capacity of zero
    /// is the common case for capacity-probing calls.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            units: vec![0; capacity],
        }
    }

    pub fn capacity(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    pub fn as_units(&self) -> &[u16] {
        &self.units
    }

    pub fn as_mut_units(&mut self) -> &mut [u16] {
        &mut self.units
    }

    /// Reallocate to `capacity` units, preserving existing content.
    /// Growth-only: shrinking is rejected rather than risking silent
    /// truncation.
    pub fn resized_to(self, capacity: usize) -> Result<Self> {
        if capacity < self.units.len() {
            return Err(Error::CapacityTooSmall {
                capacity,
                required: self.units.len(),
            });
        }
        let mut units = self.units;
        units.resize(capacity, 0);
        Ok(Self { units })
    }

    /// Drop trailing units past the length a call actually produced.
    pub(crate) fn truncate_to(&mut self, len: usize) {
        self.units.truncate(len);
    }

    /// Decode `len` units (or the whole buffer) back to host text.
    /// Malformed UTF-16 coming back from the engine is a hard error, not a
    /// lossy replacement.
    pub fn decode(&self, len: Option<usize>) -> Result<String> {
        let len = len.unwrap_or(self.units.len());
        if len > self.units.len() {
            return Err(Error::CapacityTooSmall {
                capacity: self.units.len(),
                required: len,
            });
        }
        String::from_utf16(&self.units[..len])
            .map_err(|_| Error::InvalidInput("malformed UTF-16 in engine output".into()))
    }
}

/// Map a UTF-16 code unit offset in `text` to the equivalent UTF-8 byte
/// offset. `None` when the offset is past the end or falls inside a
/// surrogate pair — slicing there would corrupt a scalar value.
pub fn byte_offset(text: &str, unit_offset: usize) -> Option<usize> {
    let mut units = 0;
    for (byte_idx, ch) in text.char_indices() {
        if units == unit_offset {
            return Some(byte_idx);
        }
        if units > unit_offset {
            return None;
        }
        units += ch.len_utf16();
    }
    (units == unit_offset).then_some(text.len())
}

/// The length of `text` in UTF-16 code units.
pub fn unit_len(text: &str) -> usize {
    text.encode_utf16().count()
}
