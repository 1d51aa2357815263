//! Raw declarations for the ICU4C C API.
//!
//! ICU mangles every exported symbol with its major version
//! (`ubrk_open_74` and so on), so each declaration carries a `link_name`
//! built from the `ICU_MAJOR_VERSION` environment variable at compile
//! time. Linking against icuuc/icui18n is the embedder's build concern.

#![allow(nonstandard_style)]

use libc::{c_char, c_int, c_void};

macro_rules! versioned_symbols {
    (
        $(
        pub fn $name:ident($($argname:ident: $argty:ty),* $(,)?) $(-> $output:ty)?;
        )+
    ) => {
        unsafe extern "C" {
            $(
            #[link_name = concat!(stringify!($name), "_", env!("ICU_MAJOR_VERSION"))]
            pub fn $name($($argname: $argty),*) $(-> $output)?;
            )+
        }
    };
}

pub type UErrorCode = c_int;
pub type UChar = u16;
pub type UDate = f64;
pub type UBool = i8;

#[repr(C)]
pub struct UBreakIterator(c_void);
#[repr(C)]
pub struct UCollator(c_void);
#[repr(C)]
pub struct UCharsetDetector(c_void);
#[repr(C)]
pub struct UCharsetMatch(c_void);
#[repr(C)]
pub struct UEnumeration(c_void);
#[repr(C)]
pub struct UTransliterator(c_void);
#[repr(C)]
pub struct UNumberFormat(c_void);
#[repr(C)]
pub struct UDateFormat(c_void);
#[repr(C)]
pub struct UListFormatter(c_void);
#[repr(C)]
pub struct UNumberFormatter(c_void);
#[repr(C)]
pub struct UFormattedNumber(c_void);

// ulistfmt_openForType type selector: AND = 0, OR = 1, UNITS = 2.
pub const ULISTFMT_TYPE_UNITS: c_int = 2;
// ucol_getLocaleByType selector for the valid (post-fallback) locale.
pub const ULOC_VALID_LOCALE: c_int = 1;

versioned_symbols! {
    pub fn u_errorName(code: UErrorCode) -> *const c_char;

    pub fn uenum_close(en: *mut UEnumeration);
    pub fn uenum_next(en: *mut UEnumeration, result_length: *mut i32, status: *mut UErrorCode) -> *const c_char;

    pub fn ubrk_open(kind: c_int, locale: *const c_char, text: *const UChar, text_length: i32, status: *mut UErrorCode) -> *mut UBreakIterator;
    pub fn ubrk_close(bi: *mut UBreakIterator);
    pub fn ubrk_setText(bi: *mut UBreakIterator, text: *const UChar, text_length: i32, status: *mut UErrorCode);
    pub fn ubrk_first(bi: *mut UBreakIterator) -> i32;
    pub fn ubrk_last(bi: *mut UBreakIterator) -> i32;
    pub fn ubrk_next(bi: *mut UBreakIterator) -> i32;
    pub fn ubrk_previous(bi: *mut UBreakIterator) -> i32;
    pub fn ubrk_current(bi: *const UBreakIterator) -> i32;
    pub fn ubrk_preceding(bi: *mut UBreakIterator, offset: i32) -> i32;
    pub fn ubrk_following(bi: *mut UBreakIterator, offset: i32) -> i32;
    pub fn ubrk_isBoundary(bi: *mut UBreakIterator, offset: i32) -> UBool;
    pub fn ubrk_countAvailable() -> i32;
    pub fn ubrk_getAvailable(index: i32) -> *const c_char;

    pub fn ucol_open(locale: *const c_char, status: *mut UErrorCode) -> *mut UCollator;
    pub fn ucol_close(coll: *mut UCollator);
    pub fn ucol_strcoll(coll: *const UCollator, source: *const UChar, source_length: i32, target: *const UChar, target_length: i32) -> c_int;
    pub fn ucol_getSortKey(coll: *const UCollator, source: *const UChar, source_length: i32, result: *mut u8, result_capacity: i32) -> i32;
    pub fn ucol_getLocaleByType(coll: *const UCollator, kind: c_int, status: *mut UErrorCode) -> *const c_char;
    pub fn ucol_getRules(coll: *const UCollator, length: *mut i32) -> *const UChar;
    pub fn ucol_getAttribute(coll: *const UCollator, attr: c_int, status: *mut UErrorCode) -> c_int;
    pub fn ucol_setAttribute(coll: *mut UCollator, attr: c_int, value: c_int, status: *mut UErrorCode);
    pub fn ucol_countAvailable() -> i32;
    pub fn ucol_getAvailable(index: i32) -> *const c_char;
    pub fn ucol_getKeywords(status: *mut UErrorCode) -> *mut UEnumeration;
    pub fn ucol_getKeywordValues(keyword: *const c_char, status: *mut UErrorCode) -> *mut UEnumeration;

    pub fn ucsdet_open(status: *mut UErrorCode) -> *mut UCharsetDetector;
    pub fn ucsdet_close(detector: *mut UCharsetDetector);
    pub fn ucsdet_setText(detector: *mut UCharsetDetector, text: *const c_char, length: i32, status: *mut UErrorCode);
    pub fn ucsdet_setDeclaredEncoding(detector: *mut UCharsetDetector, encoding: *const c_char, length: i32, status: *mut UErrorCode);
    pub fn ucsdet_detect(detector: *mut UCharsetDetector, status: *mut UErrorCode) -> *const UCharsetMatch;
    pub fn ucsdet_detectAll(detector: *mut UCharsetDetector, matches_found: *mut i32, status: *mut UErrorCode) -> *mut *const UCharsetMatch;
    pub fn ucsdet_getName(m: *const UCharsetMatch, status: *mut UErrorCode) -> *const c_char;
    pub fn ucsdet_getConfidence(m: *const UCharsetMatch, status: *mut UErrorCode) -> i32;
    pub fn ucsdet_getLanguage(m: *const UCharsetMatch, status: *mut UErrorCode) -> *const c_char;
    pub fn ucsdet_getAllDetectableCharsets(detector: *const UCharsetDetector, status: *mut UErrorCode) -> *mut UEnumeration;
    pub fn ucsdet_isInputFilterEnabled(detector: *const UCharsetDetector) -> UBool;
    pub fn ucsdet_enableInputFilter(detector: *mut UCharsetDetector, filter: UBool) -> UBool;

    pub fn unorm_normalize(source: *const UChar, source_length: i32, mode: c_int, options: i32, result: *mut UChar, result_capacity: i32, status: *mut UErrorCode) -> i32;

    pub fn utrans_open(id: *const c_char, dir: c_int, rules: *const UChar, rules_length: i32, parse_error: *mut c_void, status: *mut UErrorCode) -> *mut UTransliterator;
    pub fn utrans_close(trans: *mut UTransliterator);
    pub fn utrans_transUChars(trans: *const UTransliterator, text: *mut UChar, text_length: *mut i32, text_capacity: i32, start: i32, limit: *mut i32, status: *mut UErrorCode);
    pub fn utrans_openIDs(status: *mut UErrorCode) -> *mut UEnumeration;

    pub fn uloc_getBaseName(locale_id: *const c_char, name: *mut c_char, name_capacity: i32, status: *mut UErrorCode) -> i32;
    pub fn uloc_canonicalize(locale_id: *const c_char, name: *mut c_char, name_capacity: i32, status: *mut UErrorCode) -> i32;
    pub fn uloc_getCountry(locale_id: *const c_char, country: *mut c_char, country_capacity: i32, status: *mut UErrorCode) -> i32;
    pub fn uloc_getLanguage(locale_id: *const c_char, language: *mut c_char, language_capacity: i32, status: *mut UErrorCode) -> i32;
    pub fn uloc_getName(locale_id: *const c_char, name: *mut c_char, name_capacity: i32, status: *mut UErrorCode) -> i32;
    pub fn uloc_getParent(locale_id: *const c_char, parent: *mut c_char, parent_capacity: i32, status: *mut UErrorCode) -> i32;
    pub fn uloc_getScript(locale_id: *const c_char, script: *mut c_char, script_capacity: i32, status: *mut UErrorCode) -> i32;
    pub fn uloc_getVariant(locale_id: *const c_char, variant: *mut c_char, variant_capacity: i32, status: *mut UErrorCode) -> i32;
    pub fn uloc_getDisplayCountry(locale_id: *const c_char, display_locale: *const c_char, country: *mut UChar, country_capacity: i32, status: *mut UErrorCode) -> i32;
    pub fn uloc_getDisplayLanguage(locale_id: *const c_char, display_locale: *const c_char, language: *mut UChar, language_capacity: i32, status: *mut UErrorCode) -> i32;
    pub fn uloc_getDisplayName(locale_id: *const c_char, display_locale: *const c_char, name: *mut UChar, name_capacity: i32, status: *mut UErrorCode) -> i32;
    pub fn uloc_getDisplayScript(locale_id: *const c_char, display_locale: *const c_char, script: *mut UChar, script_capacity: i32, status: *mut UErrorCode) -> i32;
    pub fn uloc_getDisplayVariant(locale_id: *const c_char, display_locale: *const c_char, variant: *mut UChar, variant_capacity: i32, status: *mut UErrorCode) -> i32;
    pub fn uloc_getKeywordValue(locale_id: *const c_char, keyword: *const c_char, buffer: *mut c_char, buffer_capacity: i32, status: *mut UErrorCode) -> i32;
    pub fn uloc_setKeywordValue(keyword: *const c_char, value: *const c_char, buffer: *mut c_char, buffer_capacity: i32, status: *mut UErrorCode) -> i32;
    pub fn uloc_openKeywords(locale_id: *const c_char, status: *mut UErrorCode) -> *mut UEnumeration;
    pub fn uloc_addLikelySubtags(locale_id: *const c_char, maximized: *mut c_char, capacity: i32, status: *mut UErrorCode) -> i32;
    pub fn uloc_minimizeSubtags(locale_id: *const c_char, minimized: *mut c_char, capacity: i32, status: *mut UErrorCode) -> i32;
    pub fn uloc_toLanguageTag(locale_id: *const c_char, langtag: *mut c_char, capacity: i32, strict: UBool, status: *mut UErrorCode) -> i32;
    pub fn uloc_forLanguageTag(langtag: *const c_char, locale_id: *mut c_char, capacity: i32, parsed_length: *mut i32, status: *mut UErrorCode) -> i32;
    pub fn uloc_getLCID(locale_id: *const c_char) -> u32;
    pub fn uloc_getLocaleForLCID(host_id: u32, locale: *mut c_char, capacity: i32, status: *mut UErrorCode) -> i32;
    pub fn uloc_getISO3Language(locale_id: *const c_char) -> *const c_char;
    pub fn uloc_getISO3Country(locale_id: *const c_char) -> *const c_char;
    pub fn uloc_getCharacterOrientation(locale_id: *const c_char, status: *mut UErrorCode) -> c_int;
    pub fn uloc_getLineOrientation(locale_id: *const c_char, status: *mut UErrorCode) -> c_int;
    pub fn uloc_getDefault() -> *const c_char;
    pub fn uloc_setDefault(locale_id: *const c_char, status: *mut UErrorCode);
    pub fn uloc_countAvailable() -> i32;
    pub fn uloc_getAvailable(index: i32) -> *const c_char;
    pub fn uloc_getISOCountries() -> *const *const c_char;
    pub fn uloc_getISOLanguages() -> *const *const c_char;

    pub fn unum_open(style: c_int, pattern: *const UChar, pattern_length: i32, locale: *const c_char, parse_error: *mut c_void, status: *mut UErrorCode) -> *mut UNumberFormat;
    pub fn unum_close(fmt: *mut UNumberFormat);
    pub fn unum_setAttribute(fmt: *mut UNumberFormat, attr: c_int, value: i32);
    pub fn unum_formatInt64(fmt: *const UNumberFormat, number: i64, result: *mut UChar, result_length: i32, pos: *mut c_void, status: *mut UErrorCode) -> i32;
    pub fn unum_formatDouble(fmt: *const UNumberFormat, number: f64, result: *mut UChar, result_length: i32, pos: *mut c_void, status: *mut UErrorCode) -> i32;
    pub fn unum_formatDecimal(fmt: *const UNumberFormat, number: *const c_char, length: i32, result: *mut UChar, result_length: i32, pos: *mut c_void, status: *mut UErrorCode) -> i32;
    pub fn unum_formatDoubleCurrency(fmt: *const UNumberFormat, number: f64, currency: *mut UChar, result: *mut UChar, result_length: i32, pos: *mut c_void, status: *mut UErrorCode) -> i32;

    pub fn udat_open(time_style: c_int, date_style: c_int, locale: *const c_char, tz_id: *const UChar, tz_id_length: i32, pattern: *const UChar, pattern_length: i32, status: *mut UErrorCode) -> *mut UDateFormat;
    pub fn udat_close(fmt: *mut UDateFormat);
    pub fn udat_format(fmt: *const UDateFormat, date_to_format: UDate, result: *mut UChar, result_length: i32, position: *mut c_void, status: *mut UErrorCode) -> i32;
    pub fn ucal_getDefaultTimeZone(result: *mut UChar, result_capacity: i32, status: *mut UErrorCode) -> i32;

    pub fn ulistfmt_openForType(locale: *const c_char, kind: c_int, width: c_int, status: *mut UErrorCode) -> *mut UListFormatter;
    pub fn ulistfmt_close(fmt: *mut UListFormatter);
    pub fn ulistfmt_format(fmt: *const UListFormatter, strings: *const *const UChar, string_lengths: *const i32, string_count: i32, result: *mut UChar, result_capacity: i32, status: *mut UErrorCode) -> i32;

    pub fn unumf_openForSkeletonAndLocale(skeleton: *const UChar, skeleton_length: i32, locale: *const c_char, status: *mut UErrorCode) -> *mut UNumberFormatter;
    pub fn unumf_close(fmt: *mut UNumberFormatter);
    pub fn unumf_openResult(status: *mut UErrorCode) -> *mut UFormattedNumber;
    pub fn unumf_closeResult(result: *mut UFormattedNumber);
    pub fn unumf_formatDecimal(fmt: *const UNumberFormatter, value: *const c_char, value_length: i32, result: *mut UFormattedNumber, status: *mut UErrorCode);
    pub fn unumf_resultToString(result: *const UFormattedNumber, buffer: *mut UChar, buffer_capacity: i32, status: *mut UErrorCode) -> i32;
}
