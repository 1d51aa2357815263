//! Character set detection.

use crate::status::RawStatus;

/// One detection candidate. Plain value record with no lifecycle beyond
/// the call that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharsetMatch {
    /// Charset name, e.g. `"UTF-8"`.
    pub name: String,
    /// Confidence in percent, 0..=100.
    pub confidence: i32,
    /// Detected language code, possibly empty.
    pub language: String,
}

/// An open charset detector. Detection input is raw bytes, not text: the
/// whole point is that the encoding is unknown.
pub trait DetectorHandle {
    fn set_text(&mut self, bytes: &[u8], status: &mut RawStatus);

    /// Hint the encoding a transport layer declared, to bias detection.
    fn set_declared_encoding(&mut self, name: &str, status: &mut RawStatus);

    /// The best match for the current text, if any.
    fn detect(&mut self, status: &mut RawStatus) -> Option<CharsetMatch>;

    /// All plausible matches, best first.
    fn detect_all(&mut self, status: &mut RawStatus) -> Vec<CharsetMatch>;

    /// Names of every charset this detector can recognize.
    fn detectable_charsets(&self, status: &mut RawStatus) -> Vec<String>;

    fn input_filter_enabled(&self) -> bool;

    /// Toggle stripping of HTML/XML markup before detection. Returns the
    /// previous setting.
    fn enable_input_filter(&mut self, enabled: bool) -> bool;
}

pub trait DetectionProvider {
    type Detector: DetectorHandle;

    fn open_detector(&self, status: &mut RawStatus) -> Option<Self::Detector>;
}
