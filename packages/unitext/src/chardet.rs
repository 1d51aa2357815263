//! Character set detection over raw bytes.

use unitext_traits::detect::{CharsetMatch, DetectionProvider, DetectorHandle};

use crate::error::{Error, Result};
use crate::invoke::invoke_checked;

pub struct CharsetDetector<H: DetectorHandle> {
    handle: H,
}

impl<H: DetectorHandle> CharsetDetector<H> {
    pub fn open<P>(provider: &P) -> Result<Self>
    where
        P: DetectionProvider<Detector = H>,
    {
        let handle =
            invoke_checked(|slot| provider.open_detector(slot))?.ok_or_else(Error::missing_handle)?;
        Ok(Self { handle })
    }

    /// The best charset guess for `input`, or `None` when the detector has
    /// no plausible candidate.
    pub fn detect(&mut self, input: &[u8]) -> Result<Option<CharsetMatch>> {
        invoke_checked(|slot| self.handle.set_text(input, slot))?;
        invoke_checked(|slot| self.handle.detect(slot))
    }

    /// All plausible charsets for `input`, best first.
    pub fn detect_all(&mut self, input: &[u8]) -> Result<Vec<CharsetMatch>> {
        invoke_checked(|slot| self.handle.set_text(input, slot))?;
        invoke_checked(|slot| self.handle.detect_all(slot))
    }

    /// Every charset this detector can recognize.
    pub fn detectable_charsets(&self) -> Result<Vec<String>> {
        invoke_checked(|slot| self.handle.detectable_charsets(slot))
    }

    /// Hint the encoding a transport layer declared, to bias detection.
    pub fn set_declared_encoding(&mut self, name: &str) -> Result<()> {
        invoke_checked(|slot| self.handle.set_declared_encoding(name, slot))
    }

    pub fn input_filter_enabled(&self) -> bool {
        self.handle.input_filter_enabled()
    }

    /// Toggle markup stripping before detection; returns the previous
    /// setting.
    pub fn enable_input_filter(&mut self, enabled: bool) -> bool {
        self.handle.enable_input_filter(enabled)
    }
}

/// One-shot detection with a fresh detector.
pub fn detect<P: DetectionProvider>(provider: &P, input: &[u8]) -> Result<Option<CharsetMatch>> {
    CharsetDetector::open(provider)?.detect(input)
}
