//! The raw status convention shared by every engine call.
//!
//! Each call writes a single `i32` outcome slot: zero for success, a
//! positive code for a hard failure, a negative code for an advisory
//! warning that does not invalidate the call's result. The positive code
//! [`BUFFER_OVERFLOW`] is reserved for "output buffer too small" and is the
//! signal the retry protocol in the core crate is built around.

pub type RawStatus = i32;

pub const ZERO: RawStatus = 0;

pub const ILLEGAL_ARGUMENT: RawStatus = 1;
pub const MISSING_RESOURCE: RawStatus = 2;
pub const INVALID_FORMAT: RawStatus = 3;
pub const FILE_ACCESS: RawStatus = 4;
pub const INTERNAL_PROGRAM: RawStatus = 5;
pub const MESSAGE_PARSE: RawStatus = 6;
pub const MEMORY_ALLOCATION: RawStatus = 7;
pub const INDEX_OUT_OF_BOUNDS: RawStatus = 8;
pub const PARSE: RawStatus = 9;
pub const INVALID_CHAR_FOUND: RawStatus = 10;
pub const TRUNCATED_CHAR_FOUND: RawStatus = 11;
pub const ILLEGAL_CHAR_FOUND: RawStatus = 12;
pub const BUFFER_OVERFLOW: RawStatus = 15;
pub const UNSUPPORTED: RawStatus = 16;

pub const USING_FALLBACK_WARNING: RawStatus = -128;
pub const USING_DEFAULT_WARNING: RawStatus = -127;
pub const STRING_NOT_TERMINATED_WARNING: RawStatus = -124;

pub fn is_success(code: RawStatus) -> bool {
    code <= ZERO
}

pub fn is_failure(code: RawStatus) -> bool {
    code > ZERO
}

pub fn is_warning(code: RawStatus) -> bool {
    code < ZERO
}

/// Diagnostic name for a status code, for error messages and logs.
pub fn name(code: RawStatus) -> &'static str {
    match code {
        ZERO => "ZERO_ERROR",
        ILLEGAL_ARGUMENT => "ILLEGAL_ARGUMENT_ERROR",
        MISSING_RESOURCE => "MISSING_RESOURCE_ERROR",
        INVALID_FORMAT => "INVALID_FORMAT_ERROR",
        FILE_ACCESS => "FILE_ACCESS_ERROR",
        INTERNAL_PROGRAM => "INTERNAL_PROGRAM_ERROR",
        MESSAGE_PARSE => "MESSAGE_PARSE_ERROR",
        MEMORY_ALLOCATION => "MEMORY_ALLOCATION_ERROR",
        INDEX_OUT_OF_BOUNDS => "INDEX_OUTOFBOUNDS_ERROR",
        PARSE => "PARSE_ERROR",
        INVALID_CHAR_FOUND => "INVALID_CHAR_FOUND",
        TRUNCATED_CHAR_FOUND => "TRUNCATED_CHAR_FOUND",
        ILLEGAL_CHAR_FOUND => "ILLEGAL_CHAR_FOUND",
        BUFFER_OVERFLOW => "BUFFER_OVERFLOW_ERROR",
        UNSUPPORTED => "UNSUPPORTED_ERROR",
        USING_FALLBACK_WARNING => "USING_FALLBACK_WARNING",
        USING_DEFAULT_WARNING => "USING_DEFAULT_WARNING",
        STRING_NOT_TERMINATED_WARNING => "STRING_NOT_TERMINATED_WARNING",
        _ if code > ZERO => "UNKNOWN_ERROR",
        _ => "UNKNOWN_WARNING",
    }
}
