//! Text boundary analysis: the break iterator handle and its provider.

use crate::status::RawStatus;

/// Sentinel returned by positional moves once no boundary remains in the
/// direction of travel. Callers treat this as the end of iteration, not as
/// an error.
pub const DONE: i32 = -1;

/// The kind of boundary an iterator locates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum BreakKind {
    Character = 0,
    Word = 1,
    Line = 2,
    Sentence = 3,
    Title = 4,
}

/// A stateful boundary iterator owned by an engine backend.
///
/// All offsets are UTF-16 code unit positions into the most recently bound
/// text. Positional moves return [`DONE`] when exhausted. Implementations
/// release the underlying engine resource when dropped.
///
/// Backends are free to retain a copy of the bound text; they must not
/// assume the `units` slice passed to [`set_text`](BreakIter::set_text)
/// outlives the call.
pub trait BreakIter {
    /// Bind new text and reset the iterator position.
    fn set_text(&mut self, units: &[u16], status: &mut RawStatus);

    /// Move to the first boundary and return its offset.
    fn first(&mut self) -> i32;

    /// Move to the last boundary (the end of text) and return its offset.
    fn last(&mut self) -> i32;

    /// Advance to the boundary after the current position.
    fn next(&mut self) -> i32;

    /// Retreat to the boundary before the current position.
    fn previous(&mut self) -> i32;

    /// The current position, without moving.
    fn current(&self) -> i32;

    /// Move to the nearest boundary strictly before `offset`.
    fn preceding(&mut self, offset: i32) -> i32;

    /// Move to the nearest boundary strictly after `offset`.
    fn following(&mut self, offset: i32) -> i32;

    /// Whether `offset` falls on a boundary.
    fn is_boundary(&mut self, offset: i32) -> bool;
}

pub trait BreakProvider {
    type Iter: BreakIter;

    /// Open an iterator for `kind` boundaries under `locale` rules. Returns
    /// `None` with `status` set on failure.
    fn open_break_iter(
        &self,
        kind: BreakKind,
        locale: &str,
        status: &mut RawStatus,
    ) -> Option<Self::Iter>;

    /// Locales the engine has boundary rules for.
    fn available_locales(&self) -> Vec<String>;
}
