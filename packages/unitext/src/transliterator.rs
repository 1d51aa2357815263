//! Script-to-script transliteration.

use unitext_traits::status::RawStatus;
use unitext_traits::translit::{TransDirection, TransliterationProvider, TransliteratorHandle};

use crate::buffer::UnitBuffer;
use crate::error::{Error, Result};
use crate::invoke::invoke_checked;

pub struct Transliterator<H: TransliteratorHandle> {
    handle: H,
}

impl<H: TransliteratorHandle> Transliterator<H> {
    pub fn open<P>(provider: &P, id: &str, direction: TransDirection) -> Result<Self>
    where
        P: TransliterationProvider<Transliterator = H>,
    {
        let handle = invoke_checked(|slot| provider.open_transliterator(id, direction, slot))?
            .ok_or_else(Error::missing_handle)?;
        Ok(Self { handle })
    }

    /// Transliterate `text`. The transform runs in place over a buffer
    /// sized to the input; transliteration routinely changes the length,
    /// so an overflow re-encodes the original into a buffer of the
    /// reported size and retries once. The original text is re-encoded
    /// rather than the partial output reused — a failed in-place transform
    /// leaves the buffer in an unspecified state.
    pub fn transliterate(&self, text: &str) -> Result<String> {
        let len = UnitBuffer::from_str(text).capacity();
        match self.attempt(text, len) {
            Ok(result) => Ok(result),
            // A second overflow escapes the retry as-is: fatal.
            Err(Error::BufferOverflow { needed }) => self.attempt(text, needed),
            Err(other) => Err(other),
        }
    }

    fn attempt(&self, text: &str, capacity: usize) -> Result<String> {
        let mut buf = UnitBuffer::from_str_with_capacity(text, capacity)?;
        let input_len = i32::try_from(crate::buffer::unit_len(text))
            .map_err(|_| Error::InvalidInput("text too long for the engine".into()))?;
        let mut text_length = input_len;
        let mut limit = input_len;

        let outcome = invoke_checked(|slot: &mut RawStatus| {
            self.handle
                .transform(buf.as_mut_units(), &mut text_length, &mut limit, slot)
        });
        match outcome {
            Ok(()) => {
                let produced = usize::try_from(text_length).map_err(|_| {
                    Error::InvalidInput(format!("engine reported negative length {text_length}"))
                })?;
                buf.truncate_to(produced.min(buf.capacity()));
                buf.decode(None)
            }
            Err(Error::BufferOverflow { .. }) => Err(Error::BufferOverflow {
                needed: usize::try_from(text_length).unwrap_or(0),
            }),
            Err(other) => Err(other),
        }
    }
}

/// One-shot forward transliteration.
pub fn transliterate<P: TransliterationProvider>(
    provider: &P,
    id: &str,
    text: &str,
) -> Result<String> {
    Transliterator::open(provider, id, TransDirection::Forward)?.transliterate(text)
}

/// Every transliterator id the engine knows.
pub fn available_ids<P: TransliterationProvider>(provider: &P) -> Result<Vec<String>> {
    invoke_checked(|slot| provider.available_ids(slot))
}
