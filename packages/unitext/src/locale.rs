//! Locale identifiers and the data attached to them.
//!
//! A [`Locale`] is a value wrapper around an id string like `"en_US"`;
//! every getter is one engine call through the appropriate retry helper.
//! Identifier-shaped fields travel through byte buffers, display strings
//! through code unit buffers, with per-call initial capacities sized to
//! what each field typically needs so the probe rarely has to retry.

use std::fmt;

use unitext_traits::locale::{LayoutOrientation, LocaleDisplayField, LocaleField, LocaleProvider};

use crate::error::Result;
use crate::invoke::{call_for_string, call_for_unit_string, invoke_checked};

// Initial buffer capacities. Identifiers are short; display names vary by
// field.
const ID_CAPACITY: usize = 64;
const DISPLAY_SCRIPT_CAPACITY: usize = 128;
const DISPLAY_LANGUAGE_CAPACITY: usize = 192;
const DISPLAY_NAME_CAPACITY: usize = 256;

pub struct Locale<'p, P: LocaleProvider> {
    provider: &'p P,
    id: String,
}

impl<'p, P: LocaleProvider> Locale<'p, P> {
    pub fn new(provider: &'p P, id: impl Into<String>) -> Self {
        Self {
            provider,
            id: id.into(),
        }
    }

    /// Every locale the engine has data for.
    pub fn available(provider: &'p P) -> Vec<Self> {
        provider
            .available_locales()
            .into_iter()
            .map(|id| Self::new(provider, id))
            .collect()
    }

    /// The process default locale.
    pub fn default_locale(provider: &'p P) -> Self {
        let id = provider.default_locale();
        Self::new(provider, id)
    }

    pub fn set_default(provider: &P, id: &str) -> Result<()> {
        invoke_checked(|slot| provider.set_default_locale(id, slot))
    }

    /// The locale matching a BCP 47 language tag such as `"en-US"`.
    pub fn for_language_tag(provider: &'p P, tag: &str) -> Result<Self> {
        let id = call_for_string(ID_CAPACITY, |out, slot| {
            provider.from_language_tag(tag, out, slot)
        })?;
        Ok(Self::new(provider, id))
    }

    /// The locale matching a Windows LCID.
    pub fn for_lcid(provider: &'p P, lcid: u32) -> Result<Self> {
        let id = call_for_string(ID_CAPACITY, |out, slot| provider.for_lcid(lcid, out, slot))?;
        Ok(Self::new(provider, id))
    }

    pub fn iso_countries(provider: &P) -> Vec<String> {
        provider.iso_countries()
    }

    pub fn iso_languages(provider: &P) -> Vec<String> {
        provider.iso_languages()
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    fn field(&self, field: LocaleField) -> Result<String> {
        call_for_string(ID_CAPACITY, |out, slot| {
            self.provider.field(&self.id, field, out, slot)
        })
    }

    fn display(
        &self,
        field: LocaleDisplayField,
        display_locale: Option<&str>,
        capacity: usize,
    ) -> Result<String> {
        call_for_unit_string(capacity, |out, slot| {
            self.provider
                .display(&self.id, field, display_locale, out, slot)
        })
    }

    pub fn base_name(&self) -> Result<String> {
        self.field(LocaleField::BaseName)
    }

    pub fn canonical(&self) -> Result<String> {
        self.field(LocaleField::Canonical)
    }

    pub fn country(&self) -> Result<String> {
        self.field(LocaleField::Country)
    }

    pub fn language(&self) -> Result<String> {
        self.field(LocaleField::Language)
    }

    pub fn name(&self) -> Result<String> {
        self.field(LocaleField::Name)
    }

    pub fn parent(&self) -> Result<String> {
        self.field(LocaleField::Parent)
    }

    pub fn script(&self) -> Result<String> {
        self.field(LocaleField::Script)
    }

    pub fn variant(&self) -> Result<String> {
        self.field(LocaleField::Variant)
    }

    pub fn display_country(&self, display_locale: Option<&str>) -> Result<String> {
        self.display(
            LocaleDisplayField::Country,
            display_locale,
            DISPLAY_NAME_CAPACITY,
        )
    }

    pub fn display_language(&self, display_locale: Option<&str>) -> Result<String> {
        self.display(
            LocaleDisplayField::Language,
            display_locale,
            DISPLAY_LANGUAGE_CAPACITY,
        )
    }

    pub fn display_name(&self, display_locale: Option<&str>) -> Result<String> {
        self.display(
            LocaleDisplayField::Name,
            display_locale,
            DISPLAY_NAME_CAPACITY,
        )
    }

    pub fn display_script(&self, display_locale: Option<&str>) -> Result<String> {
        self.display(
            LocaleDisplayField::Script,
            display_locale,
            DISPLAY_SCRIPT_CAPACITY,
        )
    }

    pub fn display_variant(&self, display_locale: Option<&str>) -> Result<String> {
        self.display(LocaleDisplayField::Variant, display_locale, ID_CAPACITY)
    }

    pub fn keyword(&self, keyword: &str) -> Result<String> {
        call_for_string(ID_CAPACITY, |out, slot| {
            self.provider.keyword_value(&self.id, keyword, out, slot)
        })
    }

    pub fn keywords(&self) -> Result<Vec<String>> {
        invoke_checked(|slot| self.provider.keywords(&self.id, slot))
    }

    /// This locale with `keyword` set to `value` (or removed when `None`).
    pub fn with_keyword(&self, keyword: &str, value: Option<&str>) -> Result<Self> {
        // The rewritten id can outgrow the original by the keyword and
        // value plus separators.
        let capacity =
            self.id.len() + keyword.len() + value.map_or(0, str::len) + ID_CAPACITY;
        let id = call_for_string(capacity, |out, slot| {
            self.provider
                .with_keyword_value(&self.id, keyword, value, out, slot)
        })?;
        Ok(Self::new(self.provider, id))
    }

    pub fn with_keywords(&self, pairs: &[(&str, Option<&str>)]) -> Result<Self> {
        let mut locale = Self::new(self.provider, self.id.clone());
        for (keyword, value) in pairs {
            locale = locale.with_keyword(keyword, *value)?;
        }
        Ok(locale)
    }

    pub fn with_likely_subtags(&self) -> Result<Self> {
        let id = call_for_string(ID_CAPACITY, |out, slot| {
            self.provider.add_likely_subtags(&self.id, out, slot)
        })?;
        Ok(Self::new(self.provider, id))
    }

    pub fn with_minimized_subtags(&self) -> Result<Self> {
        let id = call_for_string(ID_CAPACITY, |out, slot| {
            self.provider.minimize_subtags(&self.id, out, slot)
        })?;
        Ok(Self::new(self.provider, id))
    }

    pub fn to_language_tag(&self, strict: bool) -> Result<String> {
        call_for_string(ID_CAPACITY, |out, slot| {
            self.provider.to_language_tag(&self.id, strict, out, slot)
        })
    }

    pub fn lcid(&self) -> u32 {
        self.provider.lcid(&self.id)
    }

    pub fn iso_language(&self) -> String {
        self.provider.iso3_language(&self.id)
    }

    pub fn iso_country(&self) -> String {
        self.provider.iso3_country(&self.id)
    }

    pub fn character_orientation(&self) -> Result<LayoutOrientation> {
        invoke_checked(|slot| self.provider.character_orientation(&self.id, slot))
    }

    pub fn line_orientation(&self) -> Result<LayoutOrientation> {
        invoke_checked(|slot| self.provider.line_orientation(&self.id, slot))
    }
}

impl<P: LocaleProvider> PartialEq for Locale<'_, P> {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl<P: LocaleProvider> Eq for Locale<'_, P> {}

impl<P: LocaleProvider> fmt::Display for Locale<'_, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.id)
    }
}

impl<P: LocaleProvider> fmt::Debug for Locale<'_, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Locale").field(&self.id).finish()
    }
}
