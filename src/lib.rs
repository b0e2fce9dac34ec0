//! Mnemonic Checksum Library
//!
//! Shows, step by step, how a BIP-39 mnemonic's checksum is derived and
//! verified.
//!
//! # Architecture
//!
//! This crate provides:
//! - **mnemonic**: the checksum engine (entropy, encodings, checksum, validation)
//! - **types**: word counts, the validation trace and response payloads
//! - **error**: engine errors and the serializable error envelope
//! - **config**: environment and flag driven settings
//! - **ffi**: C-ABI exports for a host view layer
//!
//! # FFI Usage
//!
//! All public FFI functions are in the `ffi` module and follow this pattern:
//! - Input: JSON string (null-terminated C string)
//! - Output: JSON string (must be freed with `mnemonic_free_string`)
//!
//! # Security
//!
//! Entropy is held in `zeroize` wrappers and cleared when dropped. Log fields
//! that carry phrases, entropy or their bit encodings are redacted.
//!
//! # Example
//!
//! ```rust
//! use mnemonic_checksum::mnemonic::{validate_mnemonic_checksum, Wordlist};
//!
//! let phrase = "abandon abandon abandon abandon abandon abandon \
//!               abandon abandon abandon abandon abandon about";
//! let trace = validate_mnemonic_checksum(phrase, Wordlist::english())?;
//! assert!(trace.valid);
//! assert_eq!(trace.checksum_bits, "0011");
//! # Ok::<(), mnemonic_checksum::ChecksumError>(())
//! ```

pub mod config;
pub mod error;
pub mod ffi;
pub mod mnemonic;
pub mod types;
pub mod utils;

// Re-export key types for convenience
pub use error::{ApiError, ChecksumError, ChecksumResult, ErrorCode};
pub use types::*;

// Re-export engine functions
pub use mnemonic::{
    binary_to_decimal, binary_to_hex, bits_to_words, calculate_checksum, entropy_to_mnemonic,
    generate_entropy, generate_mnemonic, hex_to_binary, mnemonic_to_bits,
    validate_mnemonic_checksum, word_count_to_entropy_bits, words_to_bits, Entropy, Wordlist,
};

// Re-export FFI functions at crate root
pub use ffi::{
    mnemonic_calculate_checksum, mnemonic_free_string, mnemonic_generate,
    mnemonic_validate_checksum,
};
