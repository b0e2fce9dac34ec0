//! Conversions between hex, bit-string and word-index representations.
//!
//! Bit-strings are plain `String`s of ASCII `'0'`/`'1'`, most significant bit first.

use num_bigint::BigUint;

use super::wordlist::Wordlist;
use crate::error::{ChecksumError, ChecksumResult};
use crate::types::BITS_PER_WORD;

/// Expand every hex digit (either case) to exactly four bits
pub fn hex_to_binary(hex: &str) -> ChecksumResult<String> {
    hex.chars()
        .enumerate()
        .map(|(position, c)| {
            c.to_digit(16)
                .map(|nibble| format!("{:04b}", nibble))
                .ok_or_else(|| {
                    ChecksumError::InvalidHex(format!(
                        "invalid character {:?} at position {}",
                        c, position
                    ))
                })
        })
        .collect()
}

/// Pack a bit-string into bytes and render them as lowercase hex
pub fn binary_to_hex(bits: &str) -> ChecksumResult<String> {
    Ok(hex::encode(binary_to_bytes(bits)?))
}

pub fn binary_to_bytes(bits: &str) -> ChecksumResult<Vec<u8>> {
    check_binary(bits)?;
    if bits.len() % 8 != 0 {
        return Err(ChecksumError::InvalidBinary(format!(
            "{} bits is not a whole number of bytes",
            bits.len()
        )));
    }
    Ok(bits.as_bytes().chunks(8).map(pack_bits).collect())
}

pub fn bytes_to_binary(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{:08b}", b)).collect()
}

/// Read a bit-string as an unsigned integer and print it in base 10
pub fn binary_to_decimal(bits: &str) -> ChecksumResult<String> {
    check_binary(bits)?;
    BigUint::parse_bytes(bits.as_bytes(), 2)
        .map(|n| n.to_str_radix(10))
        .ok_or_else(|| ChecksumError::InvalidBinary("empty bit string".to_string()))
}

/// Encode each word as its 11-bit wordlist index
pub fn words_to_bits<S: AsRef<str>>(
    words: &[S],
    wordlist: &Wordlist,
) -> ChecksumResult<Vec<String>> {
    words
        .iter()
        .enumerate()
        .map(|(position, word)| {
            let word = word.as_ref();
            wordlist
                .index_of(word)
                .map(|index| format!("{:011b}", index))
                .ok_or_else(|| ChecksumError::UnknownWord {
                    word: word.to_string(),
                    position,
                })
        })
        .collect()
}

/// Decode consecutive 11-bit groups back into words
pub fn bits_to_words<'w>(bits: &str, wordlist: &'w Wordlist) -> ChecksumResult<Vec<&'w str>> {
    check_binary(bits)?;
    if bits.len() % BITS_PER_WORD != 0 {
        return Err(ChecksumError::InvalidBinary(format!(
            "{} bits is not a multiple of {}",
            bits.len(),
            BITS_PER_WORD
        )));
    }

    bits.as_bytes()
        .chunks(BITS_PER_WORD)
        .map(|group| {
            let index = group
                .iter()
                .fold(0usize, |acc, bit| (acc << 1) | usize::from(bit - b'0'));
            wordlist.word(index).ok_or_else(|| {
                ChecksumError::InvalidWordlist(format!("no word at index {}", index))
            })
        })
        .collect()
}

fn pack_bits(chunk: &[u8]) -> u8 {
    chunk.iter().fold(0u8, |acc, bit| (acc << 1) | (bit - b'0'))
}

fn check_binary(bits: &str) -> ChecksumResult<()> {
    match bits.char_indices().find(|(_, c)| *c != '0' && *c != '1') {
        Some((position, c)) => Err(ChecksumError::InvalidBinary(format!(
            "invalid character {:?} at position {}",
            c, position
        ))),
        None => Ok(()),
    }
}
