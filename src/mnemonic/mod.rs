//! Mnemonic Checksum Engine
//!
//! Pure, stateless functions over BIP-39 phrases: entropy generation,
//! checksum derivation, representation conversions and checksum validation.
//! The wordlist is always passed in explicitly.

mod checksum;
mod encoding;
mod entropy;
mod wordlist;

pub use checksum::*;
pub use encoding::*;
pub use entropy::*;
pub use wordlist::*;

use crate::error::ChecksumResult;
use crate::types::ValidationTrace;

/// Validate a phrase against the English wordlist
pub fn validate_english(mnemonic: &str) -> ChecksumResult<ValidationTrace> {
    checksum::validate_mnemonic_checksum(mnemonic, Wordlist::english())
}
