//! Unicode normalization.

use unitext_traits::normalize::{NormalizationMode, NormalizationProvider};

use crate::buffer::UnitBuffer;
use crate::error::Result;
use crate::invoke::call_for_unit_string;

pub struct Normalizer<'p, P: NormalizationProvider> {
    provider: &'p P,
    mode: NormalizationMode,
}

impl<'p, P: NormalizationProvider> Normalizer<'p, P> {
    pub fn new(provider: &'p P, mode: NormalizationMode) -> Self {
        Self { provider, mode }
    }

    pub fn mode(&self) -> NormalizationMode {
        self.mode
    }

    /// Normalize `input` to this normalizer's form. The output length is
    /// unknown up front (composition shrinks, decomposition grows), so the
    /// call probes first and retries once at the reported size.
    pub fn normalize(&self, input: &str) -> Result<String> {
        let src = UnitBuffer::from_str(input);
        call_for_unit_string(0, |out, slot| {
            self.provider.normalize(self.mode, src.as_units(), out, slot)
        })
    }
}

/// One-shot normalization.
pub fn normalize<P: NormalizationProvider>(
    provider: &P,
    input: &str,
    mode: NormalizationMode,
) -> Result<String> {
    Normalizer::new(provider, mode).normalize(input)
}
