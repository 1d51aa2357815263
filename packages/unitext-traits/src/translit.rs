//! Script-to-script transliteration.

use crate::status::RawStatus;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(i32)]
pub enum TransDirection {
    #[default]
    Forward = 0,
    Reverse = 1,
}

/// An open transliterator. Transformation happens in place over a
/// capacity-limited buffer, because transliterated text routinely changes
/// length.
pub trait TransliteratorHandle {
    /// Transform `buf[..*text_length]` in place; `buf.len()` is the
    /// capacity. On success `*text_length` holds the transformed length.
    /// When the result does not fit, `status` is set to
    /// [`BUFFER_OVERFLOW`](crate::status::BUFFER_OVERFLOW) and
    /// `*text_length` holds the required capacity instead. `*limit` tracks
    /// the end of the transformed region.
    fn transform(
        &self,
        buf: &mut [u16],
        text_length: &mut i32,
        limit: &mut i32,
        status: &mut RawStatus,
    );
}

pub trait TransliterationProvider {
    type Transliterator: TransliteratorHandle;

    /// Open a transliterator by compound id, e.g. `"Any-Latin"`.
    fn open_transliterator(
        &self,
        id: &str,
        direction: TransDirection,
        status: &mut RawStatus,
    ) -> Option<Self::Transliterator>;

    /// Every transliterator id the engine knows.
    fn available_ids(&self, status: &mut RawStatus) -> Vec<String>;
}
