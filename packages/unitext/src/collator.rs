//! Locale-aware comparison and sorting.

use std::cmp::Ordering;
use std::collections::HashMap;

use unitext_traits::collate::{
    AttributeValue, CollationAttribute, CollationProvider, CollatorHandle,
};

use crate::buffer::UnitBuffer;
use crate::error::{Error, Result};
use crate::invoke::{call_with_byte_buffer, invoke_checked};

pub struct Collator<H: CollatorHandle> {
    handle: H,
}

impl<H: CollatorHandle> Collator<H> {
    pub fn open<P>(provider: &P, locale: &str) -> Result<Self>
    where
        P: CollationProvider<Collator = H>,
    {
        let handle = invoke_checked(|slot| provider.open_collator(locale, slot))?
            .ok_or_else(Error::missing_handle)?;
        Ok(Self { handle })
    }

    pub fn compare(&self, left: &str, right: &str) -> Ordering {
        let left = UnitBuffer::from_str(left);
        let right = UnitBuffer::from_str(right);
        self.handle
            .compare(left.as_units(), right.as_units())
            .cmp(&0)
    }

    pub fn greater(&self, left: &str, right: &str) -> bool {
        self.compare(left, right) == Ordering::Greater
    }

    pub fn greater_or_equal(&self, left: &str, right: &str) -> bool {
        self.compare(left, right) != Ordering::Less
    }

    pub fn equal(&self, left: &str, right: &str) -> bool {
        self.compare(left, right) == Ordering::Equal
    }

    /// Sort `items` in this collator's order.
    pub fn collate(&self, items: &mut [String]) {
        items.sort_by(|a, b| self.compare(a, b));
    }

    /// The binary sort key for `text`: keys compare bytewise the way the
    /// strings compare through [`compare`](Self::compare).
    pub fn sort_key(&self, text: &str) -> Result<Vec<u8>> {
        let units = UnitBuffer::from_str(text);
        call_with_byte_buffer(0, |out, slot| {
            self.handle.sort_key(units.as_units(), out, slot)
        })
    }

    /// The valid locale this collator actually resolved to.
    pub fn locale(&self) -> Result<String> {
        invoke_checked(|slot| self.handle.locale(slot))
    }

    /// The collator's tailoring rules.
    pub fn rules(&self) -> Result<String> {
        String::from_utf16(&self.handle.rules())
            .map_err(|_| Error::InvalidInput("malformed UTF-16 in collation rules".into()))
    }

    pub fn attribute(&self, attribute: CollationAttribute) -> Result<Option<AttributeValue>> {
        let raw = invoke_checked(|slot| self.handle.attribute(attribute, slot))?;
        Ok(AttributeValue::from_raw(raw))
    }

    pub fn set_attribute(
        &mut self,
        attribute: CollationAttribute,
        value: AttributeValue,
    ) -> Result<()> {
        invoke_checked(|slot| self.handle.set_attribute(attribute, value as i32, slot))
    }
}

/// Sort `items` under `locale` rules in one call.
pub fn collate<P: CollationProvider>(
    provider: &P,
    locale: &str,
    items: &[&str],
) -> Result<Vec<String>> {
    let collator = Collator::open(provider, locale)?;
    let mut sorted: Vec<String> = items.iter().map(|s| (*s).to_owned()).collect();
    collator.collate(&mut sorted);
    Ok(sorted)
}

pub fn available_locales<P: CollationProvider>(provider: &P) -> Vec<String> {
    provider.available_locales()
}

/// Collation keywords and the values each accepts.
pub fn keywords<P: CollationProvider>(provider: &P) -> Result<HashMap<String, Vec<String>>> {
    let names = invoke_checked(|slot| provider.keywords(slot))?;
    let mut map = HashMap::with_capacity(names.len());
    for name in names {
        let values = invoke_checked(|slot| provider.keyword_values(&name, slot))?;
        map.insert(name, values);
    }
    Ok(map)
}
