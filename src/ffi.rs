//! FFI Layer for the checksum engine
//!
//! All C-ABI exports are defined here. This is the ONLY file that should
//! contain `extern "C"` functions. All functions follow a consistent pattern:
//! - Input: JSON string (null-terminated C string)
//! - Output: JSON string (must be freed with `mnemonic_free_string`)
//!
//! Error handling: All functions return JSON with `success` field.
//! On error, `success: false` and `error` object is populated.

use std::ffi::{CStr, CString};
use std::os::raw::c_char;

use serde::de::DeserializeOwned;

use crate::error::{ApiError, ErrorCode};
use crate::mnemonic::{self, Wordlist};
use crate::types::*;

// =============================================================================
// Memory Management
// =============================================================================

/// Free a string returned by any mnemonic_* function
///
/// # Safety
/// The pointer must have been returned by a mnemonic_* function
#[unsafe(no_mangle)]
pub extern "C" fn mnemonic_free_string(s: *mut c_char) {
    if s.is_null() {
        return;
    }
    unsafe {
        let _ = CString::from_raw(s);
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Read and deserialize the JSON request behind `input`
fn parse_request<T: DeserializeOwned>(input: *const c_char) -> Result<T, ApiError> {
    if input.is_null() {
        return Err(ApiError::invalid_input("Null input pointer"));
    }

    let c_str = unsafe { CStr::from_ptr(input) };
    let json_str = c_str
        .to_str()
        .map_err(|_| ApiError::invalid_input("Invalid UTF-8 string"))?;

    serde_json::from_str(json_str)
        .map_err(|e| ApiError::from(e).with_details("Invalid JSON request"))
}

/// Create a success response JSON string
fn success_response<T: serde::Serialize>(data: T) -> *mut c_char {
    let response = ApiResponse::ok(data);
    string_to_ptr(response.to_json())
}

/// Create an error response JSON string
fn error_response(error: ApiError) -> *mut c_char {
    let code = format!("{:?}", error.code);
    if error.code == ErrorCode::Internal {
        crate::log_error!("ffi", "Request failed", code = code);
    } else {
        crate::log_warn!("ffi", "Request failed", code = code);
    }
    let response: ApiResponse<()> = ApiResponse::err(error);
    string_to_ptr(response.to_json())
}

fn respond<T: serde::Serialize>(result: Result<T, ApiError>) -> *mut c_char {
    match result {
        Ok(data) => success_response(data),
        Err(e) => error_response(e),
    }
}

/// Convert Rust string to C string pointer
fn string_to_ptr(s: String) -> *mut c_char {
    match CString::new(s) {
        Ok(c_str) => c_str.into_raw(),
        Err(_) => {
            // Serialized JSON never contains NUL; fall back to an empty string
            CString::default().into_raw()
        }
    }
}

// =============================================================================
// Engine Operations
// =============================================================================

/// Generate random entropy and its mnemonic
///
/// # Input
/// ```json
/// { "word_count": 12 }
/// ```
///
/// # Output
/// ```json
/// {
///   "success": true,
///   "data": { "word_count": 12, "entropy_hex": "...", "checksum": "0101", "mnemonic": "word1 word2 ..." }
/// }
/// ```
#[unsafe(no_mangle)]
pub extern "C" fn mnemonic_generate(input: *const c_char) -> *mut c_char {
    respond(parse_request::<GenerateRequest>(input).and_then(|request| {
        mnemonic::generate_mnemonic(request.word_count, Wordlist::english())
            .map(|(_entropy, generated)| generated)
            .map_err(ApiError::from)
    }))
}

/// Compute the checksum bits for hex entropy
///
/// # Input
/// ```json
/// { "entropy_hex": "00000000000000000000000000000000" }
/// ```
///
/// # Output
/// ```json
/// { "success": true, "data": { "entropy_bits": 128, "checksum": "0011" } }
/// ```
#[unsafe(no_mangle)]
pub extern "C" fn mnemonic_calculate_checksum(input: *const c_char) -> *mut c_char {
    respond(parse_request::<ChecksumRequest>(input).and_then(|request| {
        let checksum = mnemonic::calculate_checksum(&request.entropy_hex)?;
        Ok(ChecksumResponse {
            entropy_bits: request.entropy_hex.len() * 4,
            checksum,
        })
    }))
}

/// Validate a mnemonic's embedded checksum and return every intermediate step
///
/// # Input
/// ```json
/// { "mnemonic": "word1 word2 ..." }
/// ```
///
/// # Output
/// ```json
/// {
///   "success": true,
///   "data": { "binary": "...", "entropy_bits": "...", "checksum_bits": "...",
///             "entropy_hex": "...", "hash_hex": "...", "recalculated_checksum": "...", "valid": true }
/// }
/// ```
#[unsafe(no_mangle)]
pub extern "C" fn mnemonic_validate_checksum(input: *const c_char) -> *mut c_char {
    respond(parse_request::<ValidateRequest>(input).and_then(|request| {
        mnemonic::validate_english(&request.mnemonic).map_err(ApiError::from)
    }))
}
