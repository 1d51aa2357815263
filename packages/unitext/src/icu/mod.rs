//! Engine backend binding an installed ICU4C library.
//!
//! [`IcuEngine`] implements every provider trait by calling the versioned
//! C symbols declared in [`sys`]. Each handle wraps one native resource
//! behind a `NonNull` pointer and closes it exactly once in `Drop`; raw
//! pointers never escape the owning type.
//!
//! ICU retains pointers into caller storage for bound text (break
//! iterators, charset detectors), so those handles copy their input into
//! owned buffers before handing the engine a pointer — the copy lives
//! exactly as long as the native handle's reference to it.

pub mod sys;

use std::ffi::{CStr, CString};
use std::ptr::{self, NonNull};

use libc::c_char;

use unitext_traits::boundary::{BreakIter, BreakKind, BreakProvider};
use unitext_traits::collate::{CollationAttribute, CollationProvider, CollatorHandle};
use unitext_traits::detect::{CharsetMatch, DetectionProvider, DetectorHandle};
use unitext_traits::format::{
    DateFormatHandle, DateFormatProvider, DateStyle, ListFormatHandle, ListFormatProvider,
    ListJoinWidth, NumberAttribute, NumberFormatHandle, NumberFormatProvider, NumberStyle,
    SkeletonFormatHandle, SkeletonFormatProvider,
};
use unitext_traits::locale::{LayoutOrientation, LocaleDisplayField, LocaleField, LocaleProvider};
use unitext_traits::normalize::{NormalizationMode, NormalizationProvider};
use unitext_traits::status::{self, RawStatus};
use unitext_traits::translit::{TransDirection, TransliterationProvider, TransliteratorHandle};

/// The process-global ICU library as an engine. Zero-sized: every handle
/// owns its own native resource, and ICU itself carries no per-engine
/// state worth wrapping.
#[derive(Debug, Default, Clone, Copy)]
pub struct IcuEngine;

impl IcuEngine {
    pub fn new() -> Self {
        IcuEngine
    }
}

/// NUL-terminate a host string for the C boundary. Interior NULs are an
/// illegal argument by the engine convention.
fn c_string(text: &str, slot: &mut RawStatus) -> Option<CString> {
    match CString::new(text) {
        Ok(s) => Some(s),
        Err(_) => {
            *slot = status::ILLEGAL_ARGUMENT;
            None
        }
    }
}

fn from_c_str(ptr: *const c_char) -> String {
    if ptr.is_null() {
        return String::new();
    }
    unsafe { CStr::from_ptr(ptr) }.to_string_lossy().into_owned()
}

/// Drain a UEnumeration into host strings, closing it afterwards.
unsafe fn enum_to_vec(en: *mut sys::UEnumeration) -> Vec<String> {
    if en.is_null() {
        return Vec::new();
    }
    let mut out = Vec::new();
    loop {
        let mut slot: RawStatus = status::ZERO;
        let item = unsafe { sys::uenum_next(en, ptr::null_mut(), &mut slot) };
        if item.is_null() || status::is_failure(slot) {
            break;
        }
        out.push(from_c_str(item));
    }
    unsafe { sys::uenum_close(en) };
    out
}

/// Read a NULL-terminated array of C strings (static ICU data).
unsafe fn c_str_array_to_vec(mut ptr: *const *const c_char) -> Vec<String> {
    let mut out = Vec::new();
    if ptr.is_null() {
        return out;
    }
    unsafe {
        while !(*ptr).is_null() {
            out.push(from_c_str(*ptr));
            ptr = ptr.add(1);
        }
    }
    out
}

fn orientation_from_raw(raw: i32) -> LayoutOrientation {
    match raw {
        0 => LayoutOrientation::LeftToRight,
        1 => LayoutOrientation::RightToLeft,
        2 => LayoutOrientation::TopToBottom,
        3 => LayoutOrientation::BottomToTop,
        _ => LayoutOrientation::Unknown,
    }
}

// ---------------------------------------------------------------------------
// Boundary analysis

pub struct IcuBreakIter {
    raw: NonNull<sys::UBreakIterator>,
    // ubrk_setText retains a pointer into this storage for the lifetime of
    // the binding.
    #[allow(dead_code)]
    text: Vec<u16>,
}

impl BreakIter for IcuBreakIter {
    fn set_text(&mut self, units: &[u16], status: &mut RawStatus) {
        let copied = units.to_vec();
        unsafe {
            sys::ubrk_setText(
                self.raw.as_ptr(),
                copied.as_ptr(),
                copied.len() as i32,
                status,
            );
        }
        if status::is_success(*status) {
            self.text = copied;
        }
    }

    fn first(&mut self) -> i32 {
        unsafe { sys::ubrk_first(self.raw.as_ptr()) }
    }

    fn last(&mut self) -> i32 {
        unsafe { sys::ubrk_last(self.raw.as_ptr()) }
    }

    fn next(&mut self) -> i32 {
        unsafe { sys::ubrk_next(self.raw.as_ptr()) }
    }

    fn previous(&mut self) -> i32 {
        unsafe { sys::ubrk_previous(self.raw.as_ptr()) }
    }

    fn current(&self) -> i32 {
        unsafe { sys::ubrk_current(self.raw.as_ptr()) }
    }

    fn preceding(&mut self, offset: i32) -> i32 {
        unsafe { sys::ubrk_preceding(self.raw.as_ptr(), offset) }
    }

    fn following(&mut self, offset: i32) -> i32 {
        unsafe { sys::ubrk_following(self.raw.as_ptr(), offset) }
    }

    fn is_boundary(&mut self, offset: i32) -> bool {
        unsafe { sys::ubrk_isBoundary(self.raw.as_ptr(), offset) != 0 }
    }
}

impl Drop for IcuBreakIter {
    fn drop(&mut self) {
        unsafe { sys::ubrk_close(self.raw.as_ptr()) }
    }
}

impl BreakProvider for IcuEngine {
    type Iter = IcuBreakIter;

    fn open_break_iter(
        &self,
        kind: BreakKind,
        locale: &str,
        status: &mut RawStatus,
    ) -> Option<Self::Iter> {
        let locale = c_string(locale, status)?;
        let raw = unsafe {
            sys::ubrk_open(kind as i32, locale.as_ptr(), ptr::null(), 0, status)
        };
        if status::is_failure(*status) {
            return None;
        }
        NonNull::new(raw).map(|raw| IcuBreakIter {
            raw,
            text: Vec::new(),
        })
    }

    fn available_locales(&self) -> Vec<String> {
        let count = unsafe { sys::ubrk_countAvailable() };
        (0..count)
            .map(|idx| from_c_str(unsafe { sys::ubrk_getAvailable(idx) }))
            .collect()
    }
}

// ---------------------------------------------------------------------------
// Collation

pub struct IcuCollator {
    raw: NonNull<sys::UCollator>,
}

impl CollatorHandle for IcuCollator {
    fn compare(&self, left: &[u16], right: &[u16]) -> i32 {
        unsafe {
            sys::ucol_strcoll(
                self.raw.as_ptr(),
                left.as_ptr(),
                left.len() as i32,
                right.as_ptr(),
                right.len() as i32,
            )
        }
    }

    fn sort_key(&self, units: &[u16], out: &mut [u8], status: &mut RawStatus) -> i32 {
        // ucol_getSortKey has no status parameter; it reports the full key
        // size (terminator included) and writes nothing when the buffer is
        // too small. Translate that into the uniform overflow convention:
        // report the full size on overflow so a retry allocates it, and
        // the terminator-less length on success.
        let needed = unsafe {
            sys::ucol_getSortKey(
                self.raw.as_ptr(),
                units.as_ptr(),
                units.len() as i32,
                out.as_mut_ptr(),
                out.len() as i32,
            )
        };
        if needed as usize > out.len() {
            *status = status::BUFFER_OVERFLOW;
            needed
        } else {
            (needed - 1).max(0)
        }
    }

    fn locale(&self, status: &mut RawStatus) -> String {
        from_c_str(unsafe {
            sys::ucol_getLocaleByType(self.raw.as_ptr(), sys::ULOC_VALID_LOCALE, status)
        })
    }

    fn rules(&self) -> Vec<u16> {
        let mut len: i32 = 0;
        let ptr = unsafe { sys::ucol_getRules(self.raw.as_ptr(), &mut len) };
        if ptr.is_null() || len <= 0 {
            return Vec::new();
        }
        unsafe { std::slice::from_raw_parts(ptr, len as usize) }.to_vec()
    }

    fn attribute(&self, attribute: CollationAttribute, status: &mut RawStatus) -> i32 {
        unsafe { sys::ucol_getAttribute(self.raw.as_ptr(), attribute as i32, status) }
    }

    fn set_attribute(&mut self, attribute: CollationAttribute, value: i32, status: &mut RawStatus) {
        unsafe { sys::ucol_setAttribute(self.raw.as_ptr(), attribute as i32, value, status) }
    }
}

impl Drop for IcuCollator {
    fn drop(&mut self) {
        unsafe { sys::ucol_close(self.raw.as_ptr()) }
    }
}

impl CollationProvider for IcuEngine {
    type Collator = IcuCollator;

    fn open_collator(&self, locale: &str, status: &mut RawStatus) -> Option<Self::Collator> {
        let locale = c_string(locale, status)?;
        let raw = unsafe { sys::ucol_open(locale.as_ptr(), status) };
        if status::is_failure(*status) {
            return None;
        }
        NonNull::new(raw).map(|raw| IcuCollator { raw })
    }

    fn available_locales(&self) -> Vec<String> {
        let count = unsafe { sys::ucol_countAvailable() };
        (0..count)
            .map(|idx| from_c_str(unsafe { sys::ucol_getAvailable(idx) }))
            .collect()
    }

    fn keywords(&self, status: &mut RawStatus) -> Vec<String> {
        let en = unsafe { sys::ucol_getKeywords(status) };
        if status::is_failure(*status) {
            return Vec::new();
        }
        unsafe { enum_to_vec(en) }
    }

    fn keyword_values(&self, keyword: &str, status: &mut RawStatus) -> Vec<String> {
        let Some(keyword) = c_string(keyword, status) else {
            return Vec::new();
        };
        let en = unsafe { sys::ucol_getKeywordValues(keyword.as_ptr(), status) };
        if status::is_failure(*status) {
            return Vec::new();
        }
        unsafe { enum_to_vec(en) }
    }
}

// ---------------------------------------------------------------------------
// Charset detection

pub struct IcuDetector {
    raw: NonNull<sys::UCharsetDetector>,
    // ucsdet_setText does not copy; the bytes must outlive the binding,
    // and so must the declared encoding string.
    #[allow(dead_code)]
    text: Vec<u8>,
    #[allow(dead_code)]
    declared: Option<CString>,
}

impl IcuDetector {
    fn match_to_record(
        m: *const sys::UCharsetMatch,
        status: &mut RawStatus,
    ) -> Option<CharsetMatch> {
        if m.is_null() {
            return None;
        }
        let name = from_c_str(unsafe { sys::ucsdet_getName(m, status) });
        let confidence = unsafe { sys::ucsdet_getConfidence(m, status) };
        let language = from_c_str(unsafe { sys::ucsdet_getLanguage(m, status) });
        if status::is_failure(*status) {
            return None;
        }
        Some(CharsetMatch {
            name,
            confidence,
            language,
        })
    }
}

impl DetectorHandle for IcuDetector {
    fn set_text(&mut self, bytes: &[u8], status: &mut RawStatus) {
        let copied = bytes.to_vec();
        unsafe {
            sys::ucsdet_setText(
                self.raw.as_ptr(),
                copied.as_ptr() as *const c_char,
                copied.len() as i32,
                status,
            );
        }
        if status::is_success(*status) {
            self.text = copied;
        }
    }

    fn set_declared_encoding(&mut self, name: &str, status: &mut RawStatus) {
        let Some(name) = c_string(name, status) else {
            return;
        };
        unsafe {
            sys::ucsdet_setDeclaredEncoding(
                self.raw.as_ptr(),
                name.as_ptr(),
                -1, // NUL-terminated
                status,
            );
        }
        if status::is_success(*status) {
            self.declared = Some(name);
        }
    }

    fn detect(&mut self, status: &mut RawStatus) -> Option<CharsetMatch> {
        let m = unsafe { sys::ucsdet_detect(self.raw.as_ptr(), status) };
        if status::is_failure(*status) {
            return None;
        }
        Self::match_to_record(m, status)
    }

    fn detect_all(&mut self, status: &mut RawStatus) -> Vec<CharsetMatch> {
        let mut found: i32 = 0;
        let matches = unsafe { sys::ucsdet_detectAll(self.raw.as_ptr(), &mut found, status) };
        if status::is_failure(*status) || matches.is_null() {
            return Vec::new();
        }
        (0..found as usize)
            .filter_map(|idx| {
                let m = unsafe { *matches.add(idx) };
                Self::match_to_record(m, status)
            })
            .collect()
    }

    fn detectable_charsets(&self, status: &mut RawStatus) -> Vec<String> {
        let en = unsafe { sys::ucsdet_getAllDetectableCharsets(self.raw.as_ptr(), status) };
        if status::is_failure(*status) {
            return Vec::new();
        }
        unsafe { enum_to_vec(en) }
    }

    fn input_filter_enabled(&self) -> bool {
        unsafe { sys::ucsdet_isInputFilterEnabled(self.raw.as_ptr()) != 0 }
    }

    fn enable_input_filter(&mut self, enabled: bool) -> bool {
        unsafe { sys::ucsdet_enableInputFilter(self.raw.as_ptr(), enabled as i8) != 0 }
    }
}

impl Drop for IcuDetector {
    fn drop(&mut self) {
        unsafe { sys::ucsdet_close(self.raw.as_ptr()) }
    }
}

impl DetectionProvider for IcuEngine {
    type Detector = IcuDetector;

    fn open_detector(&self, status: &mut RawStatus) -> Option<Self::Detector> {
        let raw = unsafe { sys::ucsdet_open(status) };
        if status::is_failure(*status) {
            return None;
        }
        NonNull::new(raw).map(|raw| IcuDetector {
            raw,
            text: Vec::new(),
            declared: None,
        })
    }
}

// ---------------------------------------------------------------------------
// Normalization

impl NormalizationProvider for IcuEngine {
    fn normalize(
        &self,
        mode: NormalizationMode,
        src: &[u16],
        out: &mut [u16],
        status: &mut RawStatus,
    ) -> i32 {
        unsafe {
            sys::unorm_normalize(
                src.as_ptr(),
                src.len() as i32,
                mode as i32,
                0,
                out.as_mut_ptr(),
                out.len() as i32,
                status,
            )
        }
    }
}

// ---------------------------------------------------------------------------
// Transliteration

pub struct IcuTransliterator {
    raw: NonNull<sys::UTransliterator>,
}

impl TransliteratorHandle for IcuTransliterator {
    fn transform(
        &self,
        buf: &mut [u16],
        text_length: &mut i32,
        limit: &mut i32,
        status: &mut RawStatus,
    ) {
        unsafe {
            sys::utrans_transUChars(
                self.raw.as_ptr(),
                buf.as_mut_ptr(),
                text_length,
                buf.len() as i32,
                0,
                limit,
                status,
            );
        }
    }
}

impl Drop for IcuTransliterator {
    fn drop(&mut self) {
        unsafe { sys::utrans_close(self.raw.as_ptr()) }
    }
}

impl TransliterationProvider for IcuEngine {
    type Transliterator = IcuTransliterator;

    fn open_transliterator(
        &self,
        id: &str,
        direction: TransDirection,
        status: &mut RawStatus,
    ) -> Option<Self::Transliterator> {
        let id = c_string(id, status)?;
        let raw = unsafe {
            sys::utrans_open(
                id.as_ptr(),
                direction as i32,
                ptr::null(),
                0,
                ptr::null_mut(),
                status,
            )
        };
        if status::is_failure(*status) {
            return None;
        }
        NonNull::new(raw).map(|raw| IcuTransliterator { raw })
    }

    fn available_ids(&self, status: &mut RawStatus) -> Vec<String> {
        let en = unsafe { sys::utrans_openIDs(status) };
        if status::is_failure(*status) {
            return Vec::new();
        }
        unsafe { enum_to_vec(en) }
    }
}

// ---------------------------------------------------------------------------
// Locale data

impl LocaleProvider for IcuEngine {
    fn field(&self, id: &str, field: LocaleField, out: &mut [u8], status: &mut RawStatus) -> i32 {
        let Some(id) = c_string(id, status) else {
            return 0;
        };
        let buf = out.as_mut_ptr() as *mut c_char;
        let cap = out.len() as i32;
        unsafe {
            match field {
                LocaleField::BaseName => sys::uloc_getBaseName(id.as_ptr(), buf, cap, status),
                LocaleField::Canonical => sys::uloc_canonicalize(id.as_ptr(), buf, cap, status),
                LocaleField::Country => sys::uloc_getCountry(id.as_ptr(), buf, cap, status),
                LocaleField::Language => sys::uloc_getLanguage(id.as_ptr(), buf, cap, status),
                LocaleField::Name => sys::uloc_getName(id.as_ptr(), buf, cap, status),
                LocaleField::Parent => sys::uloc_getParent(id.as_ptr(), buf, cap, status),
                LocaleField::Script => sys::uloc_getScript(id.as_ptr(), buf, cap, status),
                LocaleField::Variant => sys::uloc_getVariant(id.as_ptr(), buf, cap, status),
            }
        }
    }

    fn display(
        &self,
        id: &str,
        field: LocaleDisplayField,
        display_locale: Option<&str>,
        out: &mut [u16],
        status: &mut RawStatus,
    ) -> i32 {
        let Some(id) = c_string(id, status) else {
            return 0;
        };
        let display = match display_locale {
            Some(locale) => match c_string(locale, status) {
                Some(locale) => Some(locale),
                None => return 0,
            },
            None => None,
        };
        let display_ptr = display.as_ref().map_or(ptr::null(), |d| d.as_ptr());
        let buf = out.as_mut_ptr();
        let cap = out.len() as i32;
        unsafe {
            match field {
                LocaleDisplayField::Country => {
                    sys::uloc_getDisplayCountry(id.as_ptr(), display_ptr, buf, cap, status)
                }
                LocaleDisplayField::Language => {
                    sys::uloc_getDisplayLanguage(id.as_ptr(), display_ptr, buf, cap, status)
                }
                LocaleDisplayField::Name => {
                    sys::uloc_getDisplayName(id.as_ptr(), display_ptr, buf, cap, status)
                }
                LocaleDisplayField::Script => {
                    sys::uloc_getDisplayScript(id.as_ptr(), display_ptr, buf, cap, status)
                }
                LocaleDisplayField::Variant => {
                    sys::uloc_getDisplayVariant(id.as_ptr(), display_ptr, buf, cap, status)
                }
            }
        }
    }

    fn keyword_value(
        &self,
        id: &str,
        keyword: &str,
        out: &mut [u8],
        status: &mut RawStatus,
    ) -> i32 {
        let (Some(id), Some(keyword)) = (c_string(id, status), c_string(keyword, status)) else {
            return 0;
        };
        unsafe {
            sys::uloc_getKeywordValue(
                id.as_ptr(),
                keyword.as_ptr(),
                out.as_mut_ptr() as *mut c_char,
                out.len() as i32,
                status,
            )
        }
    }

    fn with_keyword_value(
        &self,
        id: &str,
        keyword: &str,
        value: Option<&str>,
        out: &mut [u8],
        status: &mut RawStatus,
    ) -> i32 {
        // uloc_setKeywordValue rewrites the id in place: seed the output
        // buffer with the current id first.
        if id.len() >= out.len() {
            *status = status::BUFFER_OVERFLOW;
            return (id.len() + keyword.len() + value.map_or(0, str::len) + 2) as i32;
        }
        out[..id.len()].copy_from_slice(id.as_bytes());
        out[id.len()] = 0;
        let Some(keyword) = c_string(keyword, status) else {
            return 0;
        };
        let value = match value {
            Some(v) => match c_string(v, status) {
                Some(v) => Some(v),
                None => return 0,
            },
            None => None,
        };
        unsafe {
            sys::uloc_setKeywordValue(
                keyword.as_ptr(),
                value.as_ref().map_or(ptr::null(), |v| v.as_ptr()),
                out.as_mut_ptr() as *mut c_char,
                out.len() as i32,
                status,
            )
        }
    }

    fn keywords(&self, id: &str, status: &mut RawStatus) -> Vec<String> {
        let Some(id) = c_string(id, status) else {
            return Vec::new();
        };
        let en = unsafe { sys::uloc_openKeywords(id.as_ptr(), status) };
        if status::is_failure(*status) {
            return Vec::new();
        }
        unsafe { enum_to_vec(en) }
    }

    fn add_likely_subtags(&self, id: &str, out: &mut [u8], status: &mut RawStatus) -> i32 {
        let Some(id) = c_string(id, status) else {
            return 0;
        };
        unsafe {
            sys::uloc_addLikelySubtags(
                id.as_ptr(),
                out.as_mut_ptr() as *mut c_char,
                out.len() as i32,
                status,
            )
        }
    }

    fn minimize_subtags(&self, id: &str, out: &mut [u8], status: &mut RawStatus) -> i32 {
        let Some(id) = c_string(id, status) else {
            return 0;
        };
        unsafe {
            sys::uloc_minimizeSubtags(
                id.as_ptr(),
                out.as_mut_ptr() as *mut c_char,
                out.len() as i32,
                status,
            )
        }
    }

    fn to_language_tag(
        &self,
        id: &str,
        strict: bool,
        out: &mut [u8],
        status: &mut RawStatus,
    ) -> i32 {
        let Some(id) = c_string(id, status) else {
            return 0;
        };
        unsafe {
            sys::uloc_toLanguageTag(
                id.as_ptr(),
                out.as_mut_ptr() as *mut c_char,
                out.len() as i32,
                strict as i8,
                status,
            )
        }
    }

    fn from_language_tag(&self, tag: &str, out: &mut [u8], status: &mut RawStatus) -> i32 {
        let Some(tag) = c_string(tag, status) else {
            return 0;
        };
        unsafe {
            sys::uloc_forLanguageTag(
                tag.as_ptr(),
                out.as_mut_ptr() as *mut c_char,
                out.len() as i32,
                ptr::null_mut(),
                status,
            )
        }
    }

    fn lcid(&self, id: &str) -> u32 {
        let Ok(id) = CString::new(id) else {
            return 0;
        };
        unsafe { sys::uloc_getLCID(id.as_ptr()) }
    }

    fn for_lcid(&self, lcid: u32, out: &mut [u8], status: &mut RawStatus) -> i32 {
        unsafe {
            sys::uloc_getLocaleForLCID(
                lcid,
                out.as_mut_ptr() as *mut c_char,
                out.len() as i32,
                status,
            )
        }
    }

    fn iso3_language(&self, id: &str) -> String {
        let Ok(id) = CString::new(id) else {
            return String::new();
        };
        from_c_str(unsafe { sys::uloc_getISO3Language(id.as_ptr()) })
    }

    fn iso3_country(&self, id: &str) -> String {
        let Ok(id) = CString::new(id) else {
            return String::new();
        };
        from_c_str(unsafe { sys::uloc_getISO3Country(id.as_ptr()) })
    }

    fn character_orientation(&self, id: &str, status: &mut RawStatus) -> LayoutOrientation {
        let Some(id) = c_string(id, status) else {
            return LayoutOrientation::Unknown;
        };
        orientation_from_raw(unsafe { sys::uloc_getCharacterOrientation(id.as_ptr(), status) })
    }

    fn line_orientation(&self, id: &str, status: &mut RawStatus) -> LayoutOrientation {
        let Some(id) = c_string(id, status) else {
            return LayoutOrientation::Unknown;
        };
        orientation_from_raw(unsafe { sys::uloc_getLineOrientation(id.as_ptr(), status) })
    }

    fn default_locale(&self) -> String {
        from_c_str(unsafe { sys::uloc_getDefault() })
    }

    fn set_default_locale(&self, id: &str, status: &mut RawStatus) {
        let Some(id) = c_string(id, status) else {
            return;
        };
        unsafe { sys::uloc_setDefault(id.as_ptr(), status) }
    }

    fn available_locales(&self) -> Vec<String> {
        let count = unsafe { sys::uloc_countAvailable() };
        (0..count)
            .map(|idx| from_c_str(unsafe { sys::uloc_getAvailable(idx) }))
            .collect()
    }

    fn iso_countries(&self) -> Vec<String> {
        unsafe { c_str_array_to_vec(sys::uloc_getISOCountries()) }
    }

    fn iso_languages(&self) -> Vec<String> {
        unsafe { c_str_array_to_vec(sys::uloc_getISOLanguages()) }
    }
}

// ---------------------------------------------------------------------------
// Number formatting

pub struct IcuNumberFormat {
    raw: NonNull<sys::UNumberFormat>,
}

impl NumberFormatHandle for IcuNumberFormat {
    fn set_attribute(&mut self, attribute: NumberAttribute, value: i32) {
        unsafe { sys::unum_setAttribute(self.raw.as_ptr(), attribute as i32, value) }
    }

    fn format_i64(&self, value: i64, out: &mut [u16], status: &mut RawStatus) -> i32 {
        unsafe {
            sys::unum_formatInt64(
                self.raw.as_ptr(),
                value,
                out.as_mut_ptr(),
                out.len() as i32,
                ptr::null_mut(),
                status,
            )
        }
    }

    fn format_f64(&self, value: f64, out: &mut [u16], status: &mut RawStatus) -> i32 {
        unsafe {
            sys::unum_formatDouble(
                self.raw.as_ptr(),
                value,
                out.as_mut_ptr(),
                out.len() as i32,
                ptr::null_mut(),
                status,
            )
        }
    }

    fn format_decimal(&self, digits: &str, out: &mut [u16], status: &mut RawStatus) -> i32 {
        let Some(digits) = c_string(digits, status) else {
            return 0;
        };
        unsafe {
            sys::unum_formatDecimal(
                self.raw.as_ptr(),
                digits.as_ptr(),
                digits.as_bytes().len() as i32,
                out.as_mut_ptr(),
                out.len() as i32,
                ptr::null_mut(),
                status,
            )
        }
    }

    fn format_currency(
        &self,
        value: f64,
        currency: &[u16],
        out: &mut [u16],
        status: &mut RawStatus,
    ) -> i32 {
        // The C signature takes a mutable, NUL-terminated currency code.
        let mut code: Vec<u16> = currency.to_vec();
        if code.last() != Some(&0) {
            code.push(0);
        }
        unsafe {
            sys::unum_formatDoubleCurrency(
                self.raw.as_ptr(),
                value,
                code.as_mut_ptr(),
                out.as_mut_ptr(),
                out.len() as i32,
                ptr::null_mut(),
                status,
            )
        }
    }
}

impl Drop for IcuNumberFormat {
    fn drop(&mut self) {
        unsafe { sys::unum_close(self.raw.as_ptr()) }
    }
}

impl NumberFormatProvider for IcuEngine {
    type Format = IcuNumberFormat;

    fn open_number_format(
        &self,
        style: NumberStyle,
        locale: &str,
        status: &mut RawStatus,
    ) -> Option<Self::Format> {
        let locale = c_string(locale, status)?;
        let raw = unsafe {
            sys::unum_open(
                style as i32,
                ptr::null(),
                0,
                locale.as_ptr(),
                ptr::null_mut(),
                status,
            )
        };
        if status::is_failure(*status) {
            return None;
        }
        NonNull::new(raw).map(|raw| IcuNumberFormat { raw })
    }
}

// ---------------------------------------------------------------------------
// Date formatting

pub struct IcuDateFormat {
    raw: NonNull<sys::UDateFormat>,
}

impl DateFormatHandle for IcuDateFormat {
    fn format(&self, epoch_millis: f64, out: &mut [u16], status: &mut RawStatus) -> i32 {
        unsafe {
            sys::udat_format(
                self.raw.as_ptr(),
                epoch_millis,
                out.as_mut_ptr(),
                out.len() as i32,
                ptr::null_mut(),
                status,
            )
        }
    }
}

impl Drop for IcuDateFormat {
    fn drop(&mut self) {
        unsafe { sys::udat_close(self.raw.as_ptr()) }
    }
}

impl DateFormatProvider for IcuEngine {
    type Format = IcuDateFormat;

    fn open_date_format(
        &self,
        time_style: DateStyle,
        date_style: DateStyle,
        locale: &str,
        zone: &[u16],
        status: &mut RawStatus,
    ) -> Option<Self::Format> {
        let locale = c_string(locale, status)?;
        let raw = unsafe {
            sys::udat_open(
                time_style as i32,
                date_style as i32,
                locale.as_ptr(),
                zone.as_ptr(),
                zone.len() as i32,
                ptr::null(),
                -1,
                status,
            )
        };
        if status::is_failure(*status) {
            return None;
        }
        NonNull::new(raw).map(|raw| IcuDateFormat { raw })
    }

    fn default_time_zone(&self, out: &mut [u16], status: &mut RawStatus) -> i32 {
        unsafe { sys::ucal_getDefaultTimeZone(out.as_mut_ptr(), out.len() as i32, status) }
    }
}

// ---------------------------------------------------------------------------
// List and skeleton formatting

pub struct IcuListFormat {
    raw: NonNull<sys::UListFormatter>,
}

impl ListFormatHandle for IcuListFormat {
    fn format(&self, items: &[&[u16]], out: &mut [u16], status: &mut RawStatus) -> i32 {
        let pointers: Vec<*const u16> = items.iter().map(|item| item.as_ptr()).collect();
        let lengths: Vec<i32> = items.iter().map(|item| item.len() as i32).collect();
        unsafe {
            sys::ulistfmt_format(
                self.raw.as_ptr(),
                pointers.as_ptr(),
                lengths.as_ptr(),
                items.len() as i32,
                out.as_mut_ptr(),
                out.len() as i32,
                status,
            )
        }
    }
}

impl Drop for IcuListFormat {
    fn drop(&mut self) {
        unsafe { sys::ulistfmt_close(self.raw.as_ptr()) }
    }
}

impl ListFormatProvider for IcuEngine {
    type Format = IcuListFormat;

    fn open_list_format(
        &self,
        locale: &str,
        width: ListJoinWidth,
        status: &mut RawStatus,
    ) -> Option<Self::Format> {
        let locale = c_string(locale, status)?;
        let raw = unsafe {
            sys::ulistfmt_openForType(
                locale.as_ptr(),
                sys::ULISTFMT_TYPE_UNITS,
                width as i32,
                status,
            )
        };
        if status::is_failure(*status) {
            return None;
        }
        NonNull::new(raw).map(|raw| IcuListFormat { raw })
    }
}

pub struct IcuSkeletonFormat {
    raw: NonNull<sys::UNumberFormatter>,
}

impl SkeletonFormatHandle for IcuSkeletonFormat {
    fn format_decimal(&self, digits: &str, out: &mut [u16], status: &mut RawStatus) -> i32 {
        let Some(digits) = c_string(digits, status) else {
            return 0;
        };
        let result = unsafe { sys::unumf_openResult(status) };
        if status::is_failure(*status) {
            return 0;
        }
        let written = unsafe {
            sys::unumf_formatDecimal(
                self.raw.as_ptr(),
                digits.as_ptr(),
                digits.as_bytes().len() as i32,
                result,
                status,
            );
            sys::unumf_resultToString(result, out.as_mut_ptr(), out.len() as i32, status)
        };
        unsafe { sys::unumf_closeResult(result) };
        written
    }
}

impl Drop for IcuSkeletonFormat {
    fn drop(&mut self) {
        unsafe { sys::unumf_close(self.raw.as_ptr()) }
    }
}

impl SkeletonFormatProvider for IcuEngine {
    type Format = IcuSkeletonFormat;

    fn open_skeleton_format(
        &self,
        skeleton: &[u16],
        locale: &str,
        status: &mut RawStatus,
    ) -> Option<Self::Format> {
        let locale = c_string(locale, status)?;
        let raw = unsafe {
            sys::unumf_openForSkeletonAndLocale(
                skeleton.as_ptr(),
                skeleton.len() as i32,
                locale.as_ptr(),
                status,
            )
        };
        if status::is_failure(*status) {
            return None;
        }
        NonNull::new(raw).map(|raw| IcuSkeletonFormat { raw })
    }
}
