//! A scripted engine backend for the integration suites.
//!
//! Implements every provider trait with small deterministic rules and
//! fixed data tables, faithfully following the engine conventions the
//! façades are built against: the three-way status slot, the
//! report-required-length-on-overflow sizing convention, and the `DONE`
//! sentinel for boundary traversal. The Unicode behavior here is only as
//! deep as the tests need — the point is exercising the host-side
//! protocol, not reimplementing a real engine.

#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::HashMap;

use unitext_traits::boundary::{BreakIter, BreakKind, BreakProvider, DONE};
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

pub struct StubEngine {
    default_locale: RefCell<String>,
}

impl StubEngine {
    pub fn new() -> Self {
        Self {
            default_locale: RefCell::new("en_US".to_owned()),
        }
    }
}

/// Write `text` into a code unit output buffer under the engine sizing
/// convention: report the full length, flag overflow when it does not fit.
pub fn write_units(text: &str, out: &mut [u16], status: &mut RawStatus) -> i32 {
    let units: Vec<u16> = text.encode_utf16().collect();
    if units.len() > out.len() {
        *status = status::BUFFER_OVERFLOW;
    } else {
        out[..units.len()].copy_from_slice(&units);
    }
    units.len() as i32
}

/// Byte-buffer variant of [`write_units`].
pub fn write_bytes(text: &str, out: &mut [u8], status: &mut RawStatus) -> i32 {
    let bytes = text.as_bytes();
    if bytes.len() > out.len() {
        *status = status::BUFFER_OVERFLOW;
    } else {
        out[..bytes.len()].copy_from_slice(bytes);
    }
    bytes.len() as i32
}

fn check_locale(locale: &str, status: &mut RawStatus) -> bool {
    if locale == "invalid" {
        *status = status::ILLEGAL_ARGUMENT;
        return false;
    }
    if locale == "zz" {
        // Unknown but resolvable: fall back with an advisory warning.
        *status = status::USING_FALLBACK_WARNING;
    }
    true
}

// ---------------------------------------------------------------------------
// Boundary analysis

#[derive(PartialEq, Clone, Copy)]
enum CharClass {
    Word,
    Space,
    Other,
}

fn classify(ch: char) -> CharClass {
    if ch.is_alphanumeric() {
        CharClass::Word
    } else if ch.is_whitespace() {
        CharClass::Space
    } else {
        CharClass::Other
    }
}

/// Word segments: alphanumeric runs stick together, every other character
/// is its own segment.
fn word_boundaries(text: &str) -> Vec<i32> {
    let mut out = vec![0];
    let mut pos = 0i32;
    let mut prev: Option<CharClass> = None;
    for ch in text.chars() {
        let class = classify(ch);
        if let Some(prev) = prev {
            if class != prev || class != CharClass::Word {
                out.push(pos);
            }
        }
        pos += ch.len_utf16() as i32;
        prev = Some(class);
    }
    push_end(&mut out, pos)
}

fn character_boundaries(text: &str) -> Vec<i32> {
    let mut out = vec![0];
    let mut pos = 0i32;
    for ch in text.chars() {
        pos += ch.len_utf16() as i32;
        out.push(pos);
    }
    push_end(&mut out, pos)
}

/// Sentences end after terminator punctuation and any following spaces.
fn sentence_boundaries(text: &str) -> Vec<i32> {
    let mut out = vec![0];
    let mut pos = 0i32;
    let mut pending = false;
    for ch in text.chars() {
        let terminator = matches!(ch, '.' | '!' | '?');
        if pending && !terminator && !ch.is_whitespace() {
            out.push(pos);
            pending = false;
        }
        if terminator {
            pending = true;
        }
        pos += ch.len_utf16() as i32;
    }
    push_end(&mut out, pos)
}

/// Line break opportunities after whitespace runs.
fn line_boundaries(text: &str) -> Vec<i32> {
    let mut out = vec![0];
    let mut pos = 0i32;
    let mut after_space = false;
    for ch in text.chars() {
        if after_space && !ch.is_whitespace() {
            out.push(pos);
        }
        after_space = ch.is_whitespace();
        pos += ch.len_utf16() as i32;
    }
    push_end(&mut out, pos)
}

fn push_end(out: &mut Vec<i32>, end: i32) -> Vec<i32> {
    out.push(end);
    out.dedup();
    std::mem::take(out)
}

pub struct StubBreakIter {
    kind: BreakKind,
    boundaries: Vec<i32>,
    idx: usize,
}

impl BreakIter for StubBreakIter {
    fn set_text(&mut self, units: &[u16], _status: &mut RawStatus) {
        let text = String::from_utf16_lossy(units);
        self.boundaries = match self.kind {
            BreakKind::Character => character_boundaries(&text),
            BreakKind::Word | BreakKind::Title => word_boundaries(&text),
            BreakKind::Line => line_boundaries(&text),
            BreakKind::Sentence => sentence_boundaries(&text),
        };
        self.idx = 0;
    }

    fn first(&mut self) -> i32 {
        self.idx = 0;
        self.boundaries[0]
    }

    fn last(&mut self) -> i32 {
        self.idx = self.boundaries.len() - 1;
        self.boundaries[self.idx]
    }

    fn next(&mut self) -> i32 {
        if self.idx + 1 < self.boundaries.len() {
            self.idx += 1;
            self.boundaries[self.idx]
        } else {
            DONE
        }
    }

    fn previous(&mut self) -> i32 {
        if self.idx > 0 {
            self.idx -= 1;
            self.boundaries[self.idx]
        } else {
            DONE
        }
    }

    fn current(&self) -> i32 {
        self.boundaries[self.idx]
    }

    fn preceding(&mut self, offset: i32) -> i32 {
        match self.boundaries.iter().rposition(|&b| b < offset) {
            Some(idx) => {
                self.idx = idx;
                self.boundaries[idx]
            }
            None => {
                self.idx = 0;
                DONE
            }
        }
    }

    fn following(&mut self, offset: i32) -> i32 {
        match self.boundaries.iter().position(|&b| b > offset) {
            Some(idx) => {
                self.idx = idx;
                self.boundaries[idx]
            }
            None => {
                self.idx = self.boundaries.len() - 1;
                DONE
            }
        }
    }

    fn is_boundary(&mut self, offset: i32) -> bool {
        match self.boundaries.iter().position(|&b| b == offset) {
            Some(idx) => {
                self.idx = idx;
                true
            }
            None => false,
        }
    }
}

impl BreakProvider for StubEngine {
    type Iter = StubBreakIter;

    fn open_break_iter(
        &self,
        kind: BreakKind,
        locale: &str,
        status: &mut RawStatus,
    ) -> Option<Self::Iter> {
        if !check_locale(locale, status) {
            return None;
        }
        Some(StubBreakIter {
            kind,
            boundaries: vec![0],
            idx: 0,
        })
    }

    fn available_locales(&self) -> Vec<String> {
        vec!["en_US".to_owned(), "th_TH".to_owned(), "de_DE".to_owned()]
    }
}

// ---------------------------------------------------------------------------
// Collation

pub struct StubCollator {
    locale: String,
    attributes: HashMap<i32, i32>,
}

fn collation_key(units: &[u16]) -> (String, String) {
    let text = String::from_utf16_lossy(units);
    (text.to_lowercase(), text)
}

impl CollatorHandle for StubCollator {
    fn compare(&self, left: &[u16], right: &[u16]) -> i32 {
        match collation_key(left).cmp(&collation_key(right)) {
            std::cmp::Ordering::Less => -1,
            std::cmp::Ordering::Equal => 0,
            std::cmp::Ordering::Greater => 1,
        }
    }

    fn sort_key(&self, units: &[u16], out: &mut [u8], status: &mut RawStatus) -> i32 {
        // Primary level, separator, tertiary level: keys compare bytewise
        // the way compare() orders the strings.
        let (primary, tertiary) = collation_key(units);
        write_bytes(&format!("{primary}\u{1}{tertiary}"), out, status)
    }

    fn locale(&self, _status: &mut RawStatus) -> String {
        self.locale.clone()
    }

    fn rules(&self) -> Vec<u16> {
        "&a<b<c".encode_utf16().collect()
    }

    fn attribute(&self, attribute: CollationAttribute, _status: &mut RawStatus) -> i32 {
        match self.attributes.get(&(attribute as i32)) {
            Some(value) => *value,
            // Tertiary strength, everything else off.
            None if attribute == CollationAttribute::Strength => 2,
            None => 16,
        }
    }

    fn set_attribute(&mut self, attribute: CollationAttribute, value: i32, _status: &mut RawStatus) {
        self.attributes.insert(attribute as i32, value);
    }
}

impl CollationProvider for StubEngine {
    type Collator = StubCollator;

    fn open_collator(&self, locale: &str, status: &mut RawStatus) -> Option<Self::Collator> {
        if !check_locale(locale, status) {
            return None;
        }
        Some(StubCollator {
            locale: locale.to_owned(),
            attributes: HashMap::new(),
        })
    }

    fn available_locales(&self) -> Vec<String> {
        vec!["en_US".to_owned(), "de_DE".to_owned(), "nb_NO".to_owned()]
    }

    fn keywords(&self, _status: &mut RawStatus) -> Vec<String> {
        vec!["collation".to_owned()]
    }

    fn keyword_values(&self, keyword: &str, status: &mut RawStatus) -> Vec<String> {
        if keyword == "collation" {
            vec!["standard".to_owned(), "phonebook".to_owned()]
        } else {
            *status = status::ILLEGAL_ARGUMENT;
            Vec::new()
        }
    }
}

// ---------------------------------------------------------------------------
// Charset detection

pub struct StubDetector {
    text: Vec<u8>,
    declared: Option<String>,
    filter: bool,
}

fn looks_utf16be(bytes: &[u8]) -> bool {
    bytes.len() >= 2
        && bytes.len() % 2 == 0
        && bytes.iter().step_by(2).all(|&b| b == 0)
        && bytes.iter().skip(1).step_by(2).any(|&b| b != 0)
}

fn best_match(bytes: &[u8]) -> Option<CharsetMatch> {
    if bytes.is_empty() {
        return None;
    }
    if looks_utf16be(bytes) {
        return Some(CharsetMatch {
            name: "UTF-16BE".to_owned(),
            confidence: 100,
            language: "".to_owned(),
        });
    }
    match std::str::from_utf8(bytes) {
        Ok(text) if text.is_ascii() => Some(CharsetMatch {
            name: "ISO-8859-1".to_owned(),
            confidence: 30,
            language: "en".to_owned(),
        }),
        Ok(_) => Some(CharsetMatch {
            name: "UTF-8".to_owned(),
            confidence: 80,
            language: "".to_owned(),
        }),
        Err(_) => Some(CharsetMatch {
            name: "ISO-8859-1".to_owned(),
            confidence: 10,
            language: "".to_owned(),
        }),
    }
}

impl DetectorHandle for StubDetector {
    fn set_text(&mut self, bytes: &[u8], _status: &mut RawStatus) {
        self.text = bytes.to_vec();
    }

    fn set_declared_encoding(&mut self, name: &str, _status: &mut RawStatus) {
        self.declared = Some(name.to_owned());
    }

    fn detect(&mut self, _status: &mut RawStatus) -> Option<CharsetMatch> {
        best_match(&self.text)
    }

    fn detect_all(&mut self, _status: &mut RawStatus) -> Vec<CharsetMatch> {
        let mut matches: Vec<CharsetMatch> = best_match(&self.text).into_iter().collect();
        if matches.first().map(|m| m.name.as_str()) != Some("ISO-8859-1") {
            matches.push(CharsetMatch {
                name: "ISO-8859-1".to_owned(),
                confidence: 10,
                language: "".to_owned(),
            });
        }
        matches
    }

    fn detectable_charsets(&self, _status: &mut RawStatus) -> Vec<String> {
        ["UTF-8", "UTF-16BE", "UTF-16LE", "ISO-8859-1", "Shift_JIS"]
            .map(str::to_owned)
            .to_vec()
    }

    fn input_filter_enabled(&self) -> bool {
        self.filter
    }

    fn enable_input_filter(&mut self, enabled: bool) -> bool {
        std::mem::replace(&mut self.filter, enabled)
    }
}

impl DetectionProvider for StubEngine {
    type Detector = StubDetector;

    fn open_detector(&self, _status: &mut RawStatus) -> Option<Self::Detector> {
        Some(StubDetector {
            text: Vec::new(),
            declared: None,
            filter: false,
        })
    }
}

// ---------------------------------------------------------------------------
// Normalization

const DECOMPOSITIONS: [(char, &str); 3] = [('Å', "A\u{30A}"), ('é', "e\u{301}"), ('ñ', "n\u{303}")];
const COMPATIBILITY: [(char, &str); 2] = [('ﬁ', "fi"), ('ﬂ', "fl")];

impl NormalizationProvider for StubEngine {
    fn normalize(
        &self,
        mode: NormalizationMode,
        src: &[u16],
        out: &mut [u16],
        status: &mut RawStatus,
    ) -> i32 {
        let text = String::from_utf16_lossy(src);
        let normalized = match mode {
            NormalizationMode::None => text,
            NormalizationMode::Nfd | NormalizationMode::Fcd => decompose(&text, false),
            NormalizationMode::Nfkd => decompose(&text, true),
            NormalizationMode::Nfc => compose(&text, false),
            NormalizationMode::Nfkc => compose(&text, true),
        };
        write_units(&normalized, out, status)
    }
}

fn decompose(text: &str, compatibility: bool) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        if let Some((_, parts)) = DECOMPOSITIONS.iter().find(|(c, _)| *c == ch) {
            out.push_str(parts);
        } else if compatibility {
            if let Some((_, parts)) = COMPATIBILITY.iter().find(|(c, _)| *c == ch) {
                out.push_str(parts);
            } else {
                out.push(ch);
            }
        } else {
            out.push(ch);
        }
    }
    out
}

fn compose(text: &str, compatibility: bool) -> String {
    let mut out = if compatibility {
        decompose(text, true)
    } else {
        text.to_owned()
    };
    for (composed, parts) in DECOMPOSITIONS {
        out = out.replace(parts, &composed.to_string());
    }
    out
}

// ---------------------------------------------------------------------------
// Transliteration

const LATIN_ASCII: [(char, &str); 5] = [
    ('é', "e"),
    ('ü', "u"),
    ('å', "a"),
    ('æ', "ae"),
    ('ø', "o"),
];

pub struct StubTransliterator {
    id: String,
    direction: TransDirection,
}

impl StubTransliterator {
    fn apply(&self, text: &str) -> String {
        let upper = match (self.id.as_str(), self.direction) {
            ("Any-Upper", TransDirection::Forward) | ("Any-Lower", TransDirection::Reverse) => true,
            ("Any-Lower", TransDirection::Forward) | ("Any-Upper", TransDirection::Reverse) => {
                false
            }
            ("Latin-ASCII", _) => {
                let mut out = String::with_capacity(text.len());
                for ch in text.chars() {
                    match LATIN_ASCII.iter().find(|(c, _)| *c == ch) {
                        Some((_, ascii)) => out.push_str(ascii),
                        None => out.push(ch),
                    }
                }
                return out;
            }
            _ => return text.to_owned(),
        };
        if upper {
            text.to_uppercase()
        } else {
            text.to_lowercase()
        }
    }
}

impl TransliteratorHandle for StubTransliterator {
    fn transform(
        &self,
        buf: &mut [u16],
        text_length: &mut i32,
        limit: &mut i32,
        status: &mut RawStatus,
    ) {
        let len = (*text_length).max(0) as usize;
        let text = String::from_utf16_lossy(&buf[..len.min(buf.len())]);
        let result: Vec<u16> = self.apply(&text).encode_utf16().collect();
        if result.len() > buf.len() {
            *status = status::BUFFER_OVERFLOW;
            *text_length = result.len() as i32;
            return;
        }
        buf[..result.len()].copy_from_slice(&result);
        *text_length = result.len() as i32;
        *limit = result.len() as i32;
    }
}

impl TransliterationProvider for StubEngine {
    type Transliterator = StubTransliterator;

    fn open_transliterator(
        &self,
        id: &str,
        direction: TransDirection,
        status: &mut RawStatus,
    ) -> Option<Self::Transliterator> {
        if !["Any-Upper", "Any-Lower", "Latin-ASCII"].contains(&id) {
            *status = status::ILLEGAL_ARGUMENT;
            return None;
        }
        Some(StubTransliterator {
            id: id.to_owned(),
            direction,
        })
    }

    fn available_ids(&self, _status: &mut RawStatus) -> Vec<String> {
        ["Any-Upper", "Any-Lower", "Latin-ASCII"]
            .map(str::to_owned)
            .to_vec()
    }
}

// ---------------------------------------------------------------------------
// Locale data

struct LocaleParts {
    language: String,
    script: String,
    country: String,
    variant: String,
    keywords: Vec<(String, String)>,
}

fn parse_locale(id: &str) -> LocaleParts {
    let (base, extension) = match id.split_once('@') {
        Some((base, ext)) => (base, ext),
        None => (id, ""),
    };
    let mut language = String::new();
    let mut script = String::new();
    let mut country = String::new();
    let mut variant = String::new();
    for (idx, part) in base.split(['_', '-']).filter(|p| !p.is_empty()).enumerate() {
        if idx == 0 {
            language = part.to_lowercase();
        } else if part.len() == 4 && part.chars().all(|c| c.is_ascii_alphabetic()) {
            let mut chars = part.chars();
            script = chars
                .next()
                .map(|c| c.to_ascii_uppercase().to_string())
                .unwrap_or_default()
                + &part[1..].to_lowercase();
        } else if part.len() == 2 && part.chars().all(|c| c.is_ascii_alphabetic()) {
            country = part.to_uppercase();
        } else {
            variant = part.to_uppercase();
        }
    }
    let keywords = extension
        .split(';')
        .filter_map(|pair| {
            let (key, value) = pair.split_once('=')?;
            Some((key.to_owned(), value.to_owned()))
        })
        .collect();
    LocaleParts {
        language,
        script,
        country,
        variant,
        keywords,
    }
}

fn assemble_locale(parts: &LocaleParts) -> String {
    let mut id = parts.language.clone();
    if !parts.script.is_empty() {
        id.push('_');
        id.push_str(&parts.script);
    }
    if !parts.country.is_empty() {
        id.push('_');
        id.push_str(&parts.country);
    }
    if !parts.variant.is_empty() {
        id.push('_');
        id.push_str(&parts.variant);
    }
    if !parts.keywords.is_empty() {
        id.push('@');
        let joined: Vec<String> = parts
            .keywords
            .iter()
            .map(|(k, v)| format!("{k}={v}"))
            .collect();
        id.push_str(&joined.join(";"));
    }
    id
}

fn display_language_name(language: &str, display_language: &str) -> Option<&'static str> {
    match (language, display_language) {
        ("en", "en") => Some("English"),
        ("de", "en") => Some("German"),
        ("th", "en") => Some("Thai"),
        ("en", "de") => Some("Englisch"),
        ("de", "de") => Some("Deutsch"),
        _ => None,
    }
}

fn display_country_name(country: &str, display_language: &str) -> Option<&'static str> {
    match (country, display_language) {
        ("US", "en") => Some("United States"),
        ("DE", "en") => Some("Germany"),
        ("TH", "en") => Some("Thailand"),
        ("US", "de") => Some("Vereinigte Staaten"),
        ("DE", "de") => Some("Deutschland"),
        _ => None,
    }
}

impl LocaleProvider for StubEngine {
    fn field(&self, id: &str, field: LocaleField, out: &mut [u8], status: &mut RawStatus) -> i32 {
        let parts = parse_locale(id);
        let value = match field {
            LocaleField::BaseName | LocaleField::Canonical | LocaleField::Name => {
                let mut stripped = parse_locale(id);
                if field == LocaleField::BaseName {
                    stripped.keywords.clear();
                }
                assemble_locale(&stripped)
            }
            LocaleField::Country => parts.country,
            LocaleField::Language => parts.language,
            LocaleField::Script => parts.script,
            LocaleField::Variant => parts.variant,
            LocaleField::Parent => {
                let mut parent = parts;
                parent.keywords.clear();
                if !parent.variant.is_empty() {
                    parent.variant.clear();
                } else if !parent.country.is_empty() {
                    parent.country.clear();
                } else if !parent.script.is_empty() {
                    parent.script.clear();
                } else {
                    parent.language.clear();
                }
                assemble_locale(&parent)
            }
        };
        write_bytes(&value, out, status)
    }

    fn display(
        &self,
        id: &str,
        field: LocaleDisplayField,
        display_locale: Option<&str>,
        out: &mut [u16],
        status: &mut RawStatus,
    ) -> i32 {
        let parts = parse_locale(id);
        let display_language = display_locale
            .map(|l| parse_locale(l).language)
            .unwrap_or_else(|| parse_locale(&self.default_locale.borrow()).language);
        let value = match field {
            LocaleDisplayField::Language => display_language_name(&parts.language, &display_language)
                .map(str::to_owned)
                .unwrap_or_else(|| parts.language.clone()),
            LocaleDisplayField::Country => display_country_name(&parts.country, &display_language)
                .map(str::to_owned)
                .unwrap_or_else(|| parts.country.clone()),
            LocaleDisplayField::Script => parts.script.clone(),
            LocaleDisplayField::Variant => parts.variant.clone(),
            LocaleDisplayField::Name => {
                let language = display_language_name(&parts.language, &display_language)
                    .map(str::to_owned)
                    .unwrap_or_else(|| parts.language.clone());
                if parts.country.is_empty() {
                    language
                } else {
                    let country = display_country_name(&parts.country, &display_language)
                        .map(str::to_owned)
                        .unwrap_or_else(|| parts.country.clone());
                    format!("{language} ({country})")
                }
            }
        };
        write_units(&value, out, status)
    }

    fn keyword_value(
        &self,
        id: &str,
        keyword: &str,
        out: &mut [u8],
        status: &mut RawStatus,
    ) -> i32 {
        let parts = parse_locale(id);
        let value = parts
            .keywords
            .iter()
            .find(|(key, _)| key == keyword)
            .map(|(_, value)| value.clone())
            .unwrap_or_default();
        write_bytes(&value, out, status)
    }

    fn with_keyword_value(
        &self,
        id: &str,
        keyword: &str,
        value: Option<&str>,
        out: &mut [u8],
        status: &mut RawStatus,
    ) -> i32 {
        let mut parts = parse_locale(id);
        parts.keywords.retain(|(key, _)| key != keyword);
        if let Some(value) = value {
            parts.keywords.push((keyword.to_owned(), value.to_owned()));
            parts.keywords.sort();
        }
        write_bytes(&assemble_locale(&parts), out, status)
    }

    fn keywords(&self, id: &str, _status: &mut RawStatus) -> Vec<String> {
        parse_locale(id)
            .keywords
            .into_iter()
            .map(|(key, _)| key)
            .collect()
    }

    fn add_likely_subtags(&self, id: &str, out: &mut [u8], status: &mut RawStatus) -> i32 {
        let mut parts = parse_locale(id);
        match parts.language.as_str() {
            "en" => {
                if parts.script.is_empty() {
                    parts.script = "Latn".to_owned();
                }
                if parts.country.is_empty() {
                    parts.country = "US".to_owned();
                }
            }
            "zh" => {
                if parts.script.is_empty() {
                    parts.script = "Hans".to_owned();
                }
                if parts.country.is_empty() {
                    parts.country = "CN".to_owned();
                }
            }
            _ => {}
        }
        write_bytes(&assemble_locale(&parts), out, status)
    }

    fn minimize_subtags(&self, id: &str, out: &mut [u8], status: &mut RawStatus) -> i32 {
        let mut parts = parse_locale(id);
        match (parts.language.as_str(), parts.script.as_str(), parts.country.as_str()) {
            ("en", "Latn", "US") | ("zh", "Hans", "CN") => {
                parts.script.clear();
                parts.country.clear();
            }
            _ => {}
        }
        write_bytes(&assemble_locale(&parts), out, status)
    }

    fn to_language_tag(
        &self,
        id: &str,
        _strict: bool,
        out: &mut [u8],
        status: &mut RawStatus,
    ) -> i32 {
        let parts = parse_locale(id);
        let mut tag = parts.language.clone();
        if !parts.script.is_empty() {
            tag.push('-');
            tag.push_str(&parts.script);
        }
        if !parts.country.is_empty() {
            tag.push('-');
            tag.push_str(&parts.country);
        }
        write_bytes(&tag, out, status)
    }

    fn from_language_tag(&self, tag: &str, out: &mut [u8], status: &mut RawStatus) -> i32 {
        let mut parts = parse_locale(tag);
        parts.keywords.clear();
        write_bytes(&assemble_locale(&parts), out, status)
    }

    fn lcid(&self, id: &str) -> u32 {
        match assemble_locale(&parse_locale(id)).as_str() {
            "en_US" => 1033,
            "de_DE" => 1031,
            _ => 0,
        }
    }

    fn for_lcid(&self, lcid: u32, out: &mut [u8], status: &mut RawStatus) -> i32 {
        let id = match lcid {
            1033 => "en_US",
            1031 => "de_DE",
            _ => {
                *status = status::ILLEGAL_ARGUMENT;
                return 0;
            }
        };
        write_bytes(id, out, status)
    }

    fn iso3_language(&self, id: &str) -> String {
        match parse_locale(id).language.as_str() {
            "en" => "eng",
            "de" => "deu",
            "th" => "tha",
            _ => "",
        }
        .to_owned()
    }

    fn iso3_country(&self, id: &str) -> String {
        match parse_locale(id).country.as_str() {
            "US" => "USA",
            "DE" => "DEU",
            "TH" => "THA",
            _ => "",
        }
        .to_owned()
    }

    fn character_orientation(&self, id: &str, _status: &mut RawStatus) -> LayoutOrientation {
        match parse_locale(id).language.as_str() {
            "ar" | "he" | "fa" => LayoutOrientation::RightToLeft,
            _ => LayoutOrientation::LeftToRight,
        }
    }

    fn line_orientation(&self, _id: &str, _status: &mut RawStatus) -> LayoutOrientation {
        LayoutOrientation::TopToBottom
    }

    fn default_locale(&self) -> String {
        self.default_locale.borrow().clone()
    }

    fn set_default_locale(&self, id: &str, status: &mut RawStatus) {
        if !check_locale(id, status) {
            return;
        }
        *self.default_locale.borrow_mut() = id.to_owned();
    }

    fn available_locales(&self) -> Vec<String> {
        vec!["en_US".to_owned(), "de_DE".to_owned(), "th_TH".to_owned()]
    }

    fn iso_countries(&self) -> Vec<String> {
        ["US", "DE", "TH", "NO"].map(str::to_owned).to_vec()
    }

    fn iso_languages(&self) -> Vec<String> {
        ["en", "de", "th", "no"].map(str::to_owned).to_vec()
    }
}

// ---------------------------------------------------------------------------
// Number formatting

struct Separators {
    group: char,
    decimal: char,
}

fn separators(locale: &str) -> Separators {
    if locale.starts_with("de") {
        Separators {
            group: '.',
            decimal: ',',
        }
    } else {
        Separators {
            group: ',',
            decimal: '.',
        }
    }
}

fn group_digits(digits: &str, group: char) -> String {
    let mut out = String::new();
    let len = digits.len();
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (len - idx) % 3 == 0 {
            out.push(group);
        }
        out.push(ch);
    }
    out
}

const SPELLOUT: [&str; 11] = [
    "zero", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten",
];

pub struct StubNumberFormat {
    style: NumberStyle,
    locale: String,
    attributes: HashMap<i32, i32>,
}

impl StubNumberFormat {
    fn attribute(&self, attribute: NumberAttribute, default: i32) -> i32 {
        self.attributes
            .get(&(attribute as i32))
            .copied()
            .unwrap_or(default)
    }

    fn grouping_enabled(&self) -> bool {
        self.attribute(NumberAttribute::GroupingUsed, 1) != 0
    }

    /// Render a plain decimal digit string (`-?\d+(\.\d+)?`) per locale and
    /// attributes.
    fn render_decimal(&self, digits: &str) -> String {
        let seps = separators(&self.locale);
        let (sign, unsigned) = match digits.strip_prefix('-') {
            Some(rest) => ("-", rest),
            None => ("", digits),
        };
        let (int_part, frac_part) = match unsigned.split_once('.') {
            Some((int_part, frac_part)) => (int_part, frac_part),
            None => (unsigned, ""),
        };
        let grouped = if self.grouping_enabled() {
            group_digits(int_part, seps.group)
        } else {
            int_part.to_owned()
        };
        let max_fraction = self.attribute(NumberAttribute::MaxFractionDigits, 3) as usize;
        let min_fraction = self.attribute(NumberAttribute::MinFractionDigits, 0) as usize;
        let mut fraction: String = frac_part.chars().take(max_fraction).collect();
        while fraction.len() > min_fraction && fraction.ends_with('0') {
            fraction.pop();
        }
        while fraction.len() < min_fraction {
            fraction.push('0');
        }
        if fraction.is_empty() {
            format!("{sign}{grouped}")
        } else {
            format!("{sign}{grouped}{}{fraction}", seps.decimal)
        }
    }

    fn render(&self, digits: &str) -> String {
        match self.style {
            NumberStyle::Spellout => {
                let spelled = digits
                    .parse::<usize>()
                    .ok()
                    .and_then(|n| SPELLOUT.get(n))
                    .copied();
                match spelled {
                    Some(word) => word.to_owned(),
                    None => self.render_decimal(digits),
                }
            }
            _ => self.render_decimal(digits),
        }
    }
}

impl NumberFormatHandle for StubNumberFormat {
    fn set_attribute(&mut self, attribute: NumberAttribute, value: i32) {
        self.attributes.insert(attribute as i32, value);
    }

    fn format_i64(&self, value: i64, out: &mut [u16], status: &mut RawStatus) -> i32 {
        write_units(&self.render(&value.to_string()), out, status)
    }

    fn format_f64(&self, value: f64, out: &mut [u16], status: &mut RawStatus) -> i32 {
        let rendered = match self.style {
            NumberStyle::Percent => {
                let max_fraction = self.attribute(NumberAttribute::MaxFractionDigits, 0);
                let scaled = format!("{:.*}", max_fraction.max(0) as usize, value * 100.0);
                format!("{}%", self.render_decimal(&scaled))
            }
            _ => {
                let max_fraction = self.attribute(NumberAttribute::MaxFractionDigits, 3);
                let digits = format!("{:.*}", max_fraction.max(0) as usize, value);
                self.render(&digits)
            }
        };
        write_units(&rendered, out, status)
    }

    fn format_decimal(&self, digits: &str, out: &mut [u16], status: &mut RawStatus) -> i32 {
        write_units(&self.render(digits), out, status)
    }

    fn format_currency(
        &self,
        value: f64,
        currency: &[u16],
        out: &mut [u16],
        status: &mut RawStatus,
    ) -> i32 {
        let code = String::from_utf16_lossy(currency);
        let code = code.trim_end_matches('\0');
        let amount = {
            let digits = format!("{value:.2}");
            let seps = separators(&self.locale);
            let (int_part, frac_part) = digits.split_once('.').unwrap_or((digits.as_str(), ""));
            format!(
                "{}{}{}",
                group_digits(int_part, seps.group),
                seps.decimal,
                frac_part
            )
        };
        let rendered = match (self.style, code) {
            (NumberStyle::CurrencyIso, code) => format!("{code} {amount}"),
            (NumberStyle::CurrencyPlural, "USD") => format!("{amount} US dollars"),
            (NumberStyle::CurrencyPlural, code) => format!("{amount} {code}"),
            (_, "USD") => format!("${amount}"),
            (_, "EUR") => format!("€{amount}"),
            (_, code) => format!("{code} {amount}"),
        };
        write_units(&rendered, out, status)
    }
}

impl NumberFormatProvider for StubEngine {
    type Format = StubNumberFormat;

    fn open_number_format(
        &self,
        style: NumberStyle,
        locale: &str,
        status: &mut RawStatus,
    ) -> Option<Self::Format> {
        if !check_locale(locale, status) {
            return None;
        }
        Some(StubNumberFormat {
            style,
            locale: locale.to_owned(),
            attributes: HashMap::new(),
        })
    }
}

// ---------------------------------------------------------------------------
// Date formatting

pub struct StubDateFormat {
    zone: String,
}

/// Civil date from days since the epoch (Gregorian, proleptic).
fn civil_from_days(days: i64) -> (i64, u32, u32) {
    let z = days + 719468;
    let era = if z >= 0 { z } else { z - 146096 } / 146097;
    let doe = z - era * 146097;
    let yoe = (doe - doe / 1460 + doe / 36524 - doe / 146096) / 365;
    let year = yoe + era * 400;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let day = (doy - (153 * mp + 2) / 5 + 1) as u32;
    let month = (if mp < 10 { mp + 3 } else { mp - 9 }) as u32;
    (if month <= 2 { year + 1 } else { year }, month, day)
}

impl DateFormatHandle for StubDateFormat {
    fn format(&self, epoch_millis: f64, out: &mut [u16], status: &mut RawStatus) -> i32 {
        let total_seconds = (epoch_millis / 1000.0).floor() as i64;
        let days = total_seconds.div_euclid(86_400);
        let secs_of_day = total_seconds.rem_euclid(86_400);
        let (year, month, day) = civil_from_days(days);
        let rendered = format!(
            "{year:04}-{month:02}-{day:02} {:02}:{:02}:{:02}",
            secs_of_day / 3600,
            (secs_of_day % 3600) / 60,
            secs_of_day % 60,
        );
        write_units(&rendered, out, status)
    }
}

impl DateFormatProvider for StubEngine {
    type Format = StubDateFormat;

    fn open_date_format(
        &self,
        _time_style: DateStyle,
        _date_style: DateStyle,
        locale: &str,
        zone: &[u16],
        status: &mut RawStatus,
    ) -> Option<Self::Format> {
        if !check_locale(locale, status) {
            return None;
        }
        Some(StubDateFormat {
            zone: String::from_utf16_lossy(zone),
        })
    }

    fn default_time_zone(&self, out: &mut [u16], status: &mut RawStatus) -> i32 {
        write_units("UTC", out, status)
    }
}

// ---------------------------------------------------------------------------
// List and skeleton formatting

pub struct StubListFormat {
    width: ListJoinWidth,
}

impl ListFormatHandle for StubListFormat {
    fn format(&self, items: &[&[u16]], out: &mut [u16], status: &mut RawStatus) -> i32 {
        let decoded: Vec<String> = items
            .iter()
            .map(|item| String::from_utf16_lossy(item))
            .collect();
        let joined = match (self.width, decoded.len()) {
            (_, 0) => String::new(),
            (_, 1) => decoded[0].clone(),
            (ListJoinWidth::Wide, n) => {
                format!("{} and {}", decoded[..n - 1].join(", "), decoded[n - 1])
            }
            (_, _) => decoded.join(", "),
        };
        write_units(&joined, out, status)
    }
}

impl ListFormatProvider for StubEngine {
    type Format = StubListFormat;

    fn open_list_format(
        &self,
        locale: &str,
        width: ListJoinWidth,
        status: &mut RawStatus,
    ) -> Option<Self::Format> {
        if !check_locale(locale, status) {
            return None;
        }
        Some(StubListFormat { width })
    }
}

pub struct StubSkeletonFormat {
    unit: &'static str,
    width: SkeletonWidth,
}

#[derive(Clone, Copy, PartialEq)]
enum SkeletonWidth {
    FullName,
    Short,
    Narrow,
}

const UNITS: [(&str, &str, &str, &str); 10] = [
    // (skeleton stem, singular, short, narrow)
    ("duration-year", "year", "yr", "y"),
    ("duration-month", "month", "mth", "mo"),
    ("duration-week", "week", "wk", "w"),
    ("duration-day", "day", "day", "d"),
    ("duration-hour", "hour", "hr", "h"),
    ("duration-minute", "minute", "min", "m"),
    ("duration-second", "second", "sec", "s"),
    ("duration-millisecond", "millisecond", "ms", "ms"),
    ("duration-microsecond", "microsecond", "μs", "μs"),
    ("duration-nanosecond", "nanosecond", "ns", "ns"),
];

impl SkeletonFormatHandle for StubSkeletonFormat {
    fn format_decimal(&self, digits: &str, out: &mut [u16], status: &mut RawStatus) -> i32 {
        let Some(&(_, singular, short, narrow)) =
            UNITS.iter().find(|(stem, _, _, _)| *stem == self.unit)
        else {
            *status = status::ILLEGAL_ARGUMENT;
            return 0;
        };
        let rendered = match self.width {
            SkeletonWidth::FullName => {
                if digits == "1" {
                    format!("{digits} {singular}")
                } else {
                    format!("{digits} {singular}s")
                }
            }
            SkeletonWidth::Short => format!("{digits} {short}"),
            SkeletonWidth::Narrow => format!("{digits}{narrow}"),
        };
        write_units(&rendered, out, status)
    }
}

impl SkeletonFormatProvider for StubEngine {
    type Format = StubSkeletonFormat;

    fn open_skeleton_format(
        &self,
        skeleton: &[u16],
        locale: &str,
        status: &mut RawStatus,
    ) -> Option<Self::Format> {
        if !check_locale(locale, status) {
            return None;
        }
        let text = String::from_utf16_lossy(skeleton);
        let unit = UNITS
            .iter()
            .map(|(stem, _, _, _)| *stem)
            .find(|stem| text.contains(stem));
        let Some(unit) = unit else {
            *status = status::ILLEGAL_ARGUMENT;
            return None;
        };
        let width = if text.contains("unit-width-full-name") {
            SkeletonWidth::FullName
        } else if text.contains("unit-width-short") {
            SkeletonWidth::Short
        } else {
            SkeletonWidth::Narrow
        };
        Some(StubSkeletonFormat { unit, width })
    }
}
