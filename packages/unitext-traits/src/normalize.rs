//! Unicode normalization.

use crate::status::RawStatus;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(i32)]
pub enum NormalizationMode {
    None = 1,
    Nfd = 2,
    Nfkd = 3,
    #[default]
    Nfc = 4,
    Nfkc = 5,
    Fcd = 6,
}

pub trait NormalizationProvider {
    /// Normalize `src` into `out`, returning the full length of the
    /// normalized text. When `out` is too small the implementation sets
    /// `status` to [`BUFFER_OVERFLOW`](crate::status::BUFFER_OVERFLOW) and
    /// still returns the required length, so callers can size a retry.
    fn normalize(
        &self,
        mode: NormalizationMode,
        src: &[u16],
        out: &mut [u16],
        status: &mut RawStatus,
    ) -> i32;
}
