//! The status channel and the probe-and-retry invocation protocol.
//!
//! Every engine call is routed through [`invoke_checked`], which owns the
//! status slot for exactly one call and maps the raw convention onto the
//! error taxonomy. Calls that fill an output buffer go through
//! [`call_with_unit_buffer`] (or its byte-buffer twin), which encodes the
//! two-call measure-by-overflow idiom once: probe, grow to the reported
//! size, retry exactly once. A second overflow is surfaced fatally rather
//! than looped on — it means the engine's size reporting is wrong or the
//! underlying content changed between calls.

use unitext_traits::status::{self, RawStatus};

use crate::buffer::UnitBuffer;
use crate::error::{Error, Result};

/// Run one engine call through a fresh status slot.
///
/// The slot is zero-initialized, handed to the closure, and inspected once
/// the closure returns: hard failures become [`Error::Engine`], the
/// buffer-too-small code becomes [`Error::BufferOverflow`] (kept distinct
/// so the retry protocol can catch it specifically), and advisory warnings
/// are logged but do not fail the call.
pub fn invoke_checked<T>(call: impl FnOnce(&mut RawStatus) -> T) -> Result<T> {
    let mut slot: RawStatus = status::ZERO;
    let value = call(&mut slot);
    if slot == status::BUFFER_OVERFLOW {
        return Err(Error::BufferOverflow { needed: 0 });
    }
    if status::is_failure(slot) {
        return Err(Error::engine(slot));
    }
    if status::is_warning(slot) {
        #[cfg(feature = "tracing")]
        tracing::warn!(code = slot, name = status::name(slot), "engine warning");
    }
    Ok(value)
}

/// Invoke a buffer-filling capability with the probe-and-retry protocol.
///
/// `call` receives the output buffer and the status slot and returns the
/// length the engine reports — the produced length on success, the
/// required capacity on overflow. The returned buffer is truncated to the
/// produced length.
///
/// An `initial_capacity` that already fits never retries; a capacity of
/// zero probes first and retries exactly once for any non-empty result.
pub fn call_with_unit_buffer<F>(initial_capacity: usize, mut call: F) -> Result<UnitBuffer>
where
    F: FnMut(&mut [u16], &mut RawStatus) -> i32,
{
    let mut buf = UnitBuffer::with_capacity(initial_capacity);
    let mut reported: i32 = 0;

    if let Err(err) = invoke_checked(|slot| reported = call(buf.as_mut_units(), slot)) {
        let Error::BufferOverflow { .. } = err else {
            return Err(err);
        };
        let needed = reported_len(reported)?;
        buf = buf.resized_to(needed)?;
        invoke_checked(|slot| reported = call(buf.as_mut_units(), slot)).map_err(|err| {
            match err {
                // Second overflow on the sized retry: fatal, with the size
                // the retry itself asked for.
                Error::BufferOverflow { .. } => Error::BufferOverflow {
                    needed: reported_len(reported).unwrap_or(needed),
                },
                other => other,
            }
        })?;
    }

    let len = reported_len(reported)?;
    if len > buf.capacity() {
        return Err(Error::InvalidInput(format!(
            "engine reported length {len} past capacity {}",
            buf.capacity()
        )));
    }
    buf.truncate_to(len);
    Ok(buf)
}

/// [`call_with_unit_buffer`] for capabilities producing 8-bit output
/// (identifier-shaped strings, binary sort keys).
pub fn call_with_byte_buffer<F>(initial_capacity: usize, mut call: F) -> Result<Vec<u8>>
where
    F: FnMut(&mut [u8], &mut RawStatus) -> i32,
{
    let mut buf = vec![0u8; initial_capacity];
    let mut reported: i32 = 0;

    if let Err(err) = invoke_checked(|slot| reported = call(&mut buf, slot)) {
        let Error::BufferOverflow { .. } = err else {
            return Err(err);
        };
        let needed = reported_len(reported)?;
        if needed < buf.len() {
            return Err(Error::CapacityTooSmall {
                capacity: needed,
                required: buf.len(),
            });
        }
        buf.resize(needed, 0);
        invoke_checked(|slot| reported = call(&mut buf, slot)).map_err(|err| match err {
            Error::BufferOverflow { .. } => Error::BufferOverflow {
                needed: reported_len(reported).unwrap_or(needed),
            },
            other => other,
        })?;
    }

    let len = reported_len(reported)?;
    if len > buf.len() {
        return Err(Error::InvalidInput(format!(
            "engine reported length {len} past capacity {}",
            buf.len()
        )));
    }
    buf.truncate(len);
    Ok(buf)
}

/// Probe-and-retry straight to a host string, for UTF-16 capabilities.
pub fn call_for_unit_string<F>(initial_capacity: usize, call: F) -> Result<String>
where
    F: FnMut(&mut [u16], &mut RawStatus) -> i32,
{
    call_with_unit_buffer(initial_capacity, call)?.decode(None)
}

/// Probe-and-retry straight to a host string, for byte capabilities.
pub fn call_for_string<F>(initial_capacity: usize, call: F) -> Result<String>
where
    F: FnMut(&mut [u8], &mut RawStatus) -> i32,
{
    let bytes = call_with_byte_buffer(initial_capacity, call)?;
    String::from_utf8(bytes)
        .map_err(|_| Error::InvalidInput("malformed UTF-8 in engine output".into()))
}

fn reported_len(reported: i32) -> Result<usize> {
    usize::try_from(reported)
        .map_err(|_| Error::InvalidInput(format!("engine reported negative length {reported}")))
}
