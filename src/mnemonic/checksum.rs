//! Checksum Derivation and Validation
//!
//! The checksum is the first `entropy_bits / 32` bits of SHA-256(entropy).
//! Validation splits a decoded phrase into entropy and checksum segments,
//! recomputes the checksum and reports every intermediate value.

use sha2::{Digest, Sha256};

use super::encoding::{binary_to_hex, bits_to_words, bytes_to_binary, hex_to_binary, words_to_bits};
use super::entropy::{generate_entropy, Entropy};
use super::wordlist::Wordlist;
use crate::error::{ChecksumError, ChecksumResult};
use crate::types::{GeneratedMnemonic, ValidationTrace, WordCount};

/// Checksum bits for hex-encoded entropy
pub fn calculate_checksum(entropy_hex: &str) -> ChecksumResult<String> {
    Ok(checksum_with_digest(entropy_hex)?.0)
}

/// Returns the checksum together with the hex SHA-256 digest it was cut from
fn checksum_with_digest(entropy_hex: &str) -> ChecksumResult<(String, String)> {
    // Reject non-hex characters by position before hex::decode counts bytes
    hex_to_binary(entropy_hex)?;
    let entropy = hex::decode(entropy_hex)?;
    let digest = Sha256::digest(&entropy);

    let checksum_len = entropy_hex.len() * 4 / 32;
    let checksum: String = bytes_to_binary(&digest)
        .chars()
        .take(checksum_len)
        .collect();

    Ok((checksum, hex::encode(digest)))
}

/// Concatenated 11-bit indices of every word, split on single spaces
pub fn mnemonic_to_bits(mnemonic: &str, wordlist: &Wordlist) -> ChecksumResult<String> {
    let words: Vec<&str> = mnemonic.split(' ').collect();
    Ok(words_to_bits(&words, wordlist)?.concat())
}

/// Encode entropy plus its checksum as a space separated phrase
pub fn entropy_to_mnemonic(entropy: &[u8], wordlist: &Wordlist) -> ChecksumResult<String> {
    WordCount::from_entropy_bits(entropy.len() * 8)?;

    let checksum = calculate_checksum(&hex::encode(entropy))?;
    let mut bits = bytes_to_binary(entropy);
    bits.push_str(&checksum);

    Ok(bits_to_words(&bits, wordlist)?.join(" "))
}

/// Fresh random entropy and the phrase that encodes it
pub fn generate_mnemonic(
    word_count: WordCount,
    wordlist: &Wordlist,
) -> ChecksumResult<(Entropy, GeneratedMnemonic)> {
    let entropy = generate_entropy(word_count.entropy_bits())?;
    let entropy_hex = entropy.to_hex();
    let checksum = calculate_checksum(&entropy_hex)?;
    let mnemonic = entropy_to_mnemonic(entropy.as_bytes(), wordlist)?;

    let generated = GeneratedMnemonic {
        word_count: entropy.word_count(),
        entropy_hex,
        checksum,
        mnemonic,
    };

    crate::log_info!("mnemonic", "Generated mnemonic", words = generated.word_count);
    Ok((entropy, generated))
}

/// Re-derive the checksum embedded in `mnemonic` and report each step
pub fn validate_mnemonic_checksum(
    mnemonic: &str,
    wordlist: &Wordlist,
) -> ChecksumResult<ValidationTrace> {
    let binary = mnemonic_to_bits(mnemonic, wordlist)?;
    let (entropy_bits, checksum_bits) = split_entropy_and_checksum(&binary)?;

    let entropy_hex = binary_to_hex(entropy_bits)?;
    let (recalculated_checksum, hash_hex) = checksum_with_digest(&entropy_hex)?;
    let valid = recalculated_checksum == checksum_bits;

    crate::log_debug!(
        "mnemonic",
        "Checksum validated",
        total_bits = binary.len(),
        checksum_len = checksum_bits.len(),
        valid = valid,
    );

    Ok(ValidationTrace {
        entropy_bits: entropy_bits.to_string(),
        checksum_bits: checksum_bits.to_string(),
        binary,
        entropy_hex,
        hash_hex,
        recalculated_checksum,
        valid,
    })
}

/// Entropy is the leading `total * 32 / 33` bits; the checksum is the
/// remaining `entropy / 32` bits.
fn split_entropy_and_checksum(binary: &str) -> ChecksumResult<(&str, &str)> {
    let total = binary.len();
    if total == 0 || total % 33 != 0 {
        return Err(ChecksumError::MalformedMnemonic(format!(
            "{} bits cannot be split into byte-aligned entropy and a checksum of entropy/32 bits",
            total
        )));
    }

    // A multiple of 32 is always byte aligned
    let entropy_len = total / 33 * 32;
    Ok(binary.split_at(entropy_len))
}
