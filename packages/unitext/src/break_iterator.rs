//! The boundary cursor: locale-aware text segmentation.
//!
//! [`BreakCursor`] wraps an engine break iterator handle together with the
//! text it is bound to. The binding retains both the original host string
//! and its encoded code unit buffer: boundary offsets come back in code
//! unit space, while substring extraction must slice the host string, so
//! the cursor owns both representations for as long as the engine handle
//! may refer to them.

use unitext_traits::boundary::{BreakIter, BreakKind, BreakProvider, DONE};
use unitext_traits::status::RawStatus;

use crate::buffer::{self, UnitBuffer};
use crate::error::{Error, Result};
use crate::invoke::invoke_checked;

pub struct BreakCursor<I: BreakIter> {
    iter: I,
    kind: BreakKind,
    bound: Option<BoundText>,
}

struct BoundText {
    host: String,
    // Held for the lifetime of the binding: the engine handle may keep
    // referring to this storage between calls.
    #[allow(dead_code)]
    units: UnitBuffer,
}

impl<I: BreakIter> BreakCursor<I> {
    /// Open a cursor for `kind` boundaries under `locale` rules. The
    /// cursor starts unbound; bind text with [`set_text`](Self::set_text)
    /// before any positional call.
    pub fn open<P>(provider: &P, kind: BreakKind, locale: &str) -> Result<Self>
    where
        P: BreakProvider<Iter = I>,
    {
        let iter = invoke_checked(|slot| provider.open_break_iter(kind, locale, slot))?
            .ok_or_else(Error::missing_handle)?;
        Ok(Self {
            iter,
            kind,
            bound: None,
        })
    }

    pub fn kind(&self) -> BreakKind {
        self.kind
    }

    /// The currently bound text, if any.
    pub fn text(&self) -> Option<&str> {
        self.bound.as_ref().map(|b| b.host.as_str())
    }

    /// Bind new text, discarding any previous binding and resetting the
    /// cursor position. The old buffer is released only after the engine
    /// has accepted the replacement.
    pub fn set_text(&mut self, text: &str) -> Result<()> {
        let units = UnitBuffer::from_str(text);
        invoke_checked(|slot: &mut RawStatus| self.iter.set_text(units.as_units(), slot))?;
        self.bound = Some(BoundText {
            host: text.to_owned(),
            units,
        });
        Ok(())
    }

    /// Move to the first boundary (the start of text) and return its
    /// offset.
    pub fn first(&mut self) -> Result<u32> {
        self.ensure_bound()?;
        require_offset(self.iter.first())
    }

    /// Move to the last boundary (the end of text) and return its offset.
    pub fn last(&mut self) -> Result<u32> {
        self.ensure_bound()?;
        require_offset(self.iter.last())
    }

    /// Advance one boundary. `None` means the traversal is exhausted — the
    /// normal termination condition, not an error.
    pub fn next(&mut self) -> Result<Option<u32>> {
        self.ensure_bound()?;
        Ok(offset(self.iter.next()))
    }

    /// Retreat one boundary.
    pub fn previous(&mut self) -> Result<Option<u32>> {
        self.ensure_bound()?;
        Ok(offset(self.iter.previous()))
    }

    /// The current position, without moving.
    pub fn current(&self) -> Result<u32> {
        self.ensure_bound()?;
        require_offset(self.iter.current())
    }

    /// Jump to the nearest boundary strictly before `offset`.
    pub fn preceding(&mut self, at: u32) -> Result<Option<u32>> {
        self.ensure_bound()?;
        Ok(offset(self.iter.preceding(clamp(at))))
    }

    /// Jump to the nearest boundary strictly after `offset`.
    pub fn following(&mut self, at: u32) -> Result<Option<u32>> {
        self.ensure_bound()?;
        Ok(offset(self.iter.following(clamp(at))))
    }

    /// Whether `offset` falls on a boundary. The engine may move the
    /// cursor as a side effect.
    pub fn is_boundary(&mut self, at: u32) -> Result<bool> {
        self.ensure_bound()?;
        Ok(self.iter.is_boundary(clamp(at)))
    }

    /// One full forward traversal: every boundary offset from the start of
    /// text through the end, both inclusive. Restarts from the first
    /// boundary each time it is called.
    pub fn offsets(&mut self) -> Result<Offsets<'_, I>> {
        self.ensure_bound()?;
        let first = self.iter.first();
        Ok(Offsets {
            iter: &mut self.iter,
            pending: offset(first),
        })
    }

    /// The segments between consecutive boundaries, sliced out of the
    /// original host string. Concatenating every item reproduces the bound
    /// text exactly.
    pub fn substrings(&mut self) -> Result<Substrings<'_, I>> {
        let host = self.bound.as_ref().ok_or(Error::TextNotBound)?.host.as_str();
        let first = self.iter.first();
        let mut offsets = Offsets {
            iter: &mut self.iter,
            pending: offset(first),
        };
        // The traversal opens at the first boundary; segments start there.
        let start = offsets.next().unwrap_or(0);
        let start_byte = buffer::byte_offset(host, start as usize).unwrap_or(0);
        Ok(Substrings {
            offsets,
            host,
            prev_unit: start,
            prev_byte: start_byte,
        })
    }

    fn ensure_bound(&self) -> Result<()> {
        if self.bound.is_some() {
            Ok(())
        } else {
            Err(Error::TextNotBound)
        }
    }
}

/// Locales the engine has boundary rules for.
pub fn available_locales<P: BreakProvider>(provider: &P) -> Vec<String> {
    provider.available_locales()
}

/// Lazy forward traversal of boundary offsets. See
/// [`BreakCursor::offsets`].
pub struct Offsets<'c, I: BreakIter> {
    iter: &'c mut I,
    pending: Option<u32>,
}

impl<I: BreakIter> Iterator for Offsets<'_, I> {
    type Item = u32;

    fn next(&mut self) -> Option<u32> {
        let current = self.pending?;
        self.pending = offset(self.iter.next());
        Some(current)
    }
}

/// Lazy traversal of the substrings between consecutive boundaries. See
/// [`BreakCursor::substrings`].
pub struct Substrings<'c, I: BreakIter> {
    offsets: Offsets<'c, I>,
    host: &'c str,
    prev_unit: u32,
    prev_byte: usize,
}

impl<'c, I: BreakIter> Iterator for Substrings<'c, I> {
    type Item = &'c str;

    fn next(&mut self) -> Option<&'c str> {
        let end_unit = self.offsets.next()?;
        let end_byte = self.advance_to(end_unit)?;
        let segment = &self.host[self.prev_byte..end_byte];
        self.prev_unit = end_unit;
        self.prev_byte = end_byte;
        Some(segment)
    }
}

impl<I: BreakIter> Substrings<'_, I> {
    /// Walk the host string from the previous boundary to `target_unit`,
    /// returning the matching byte offset. Incremental, so a whole
    /// traversal is linear in the text length.
    fn advance_to(&self, target_unit: u32) -> Option<usize> {
        let mut units = self.prev_unit;
        let mut byte = self.prev_byte;
        for ch in self.host[self.prev_byte..].chars() {
            if units >= target_unit {
                break;
            }
            units += ch.len_utf16() as u32;
            byte += ch.len_utf8();
        }
        (units == target_unit).then_some(byte)
    }
}

fn offset(raw: i32) -> Option<u32> {
    (raw != DONE).then_some(raw.max(0) as u32)
}

fn require_offset(raw: i32) -> Result<u32> {
    offset(raw).ok_or_else(|| Error::InvalidInput("engine returned no boundary".into()))
}

fn clamp(at: u32) -> i32 {
    i32::try_from(at).unwrap_or(i32::MAX)
}
