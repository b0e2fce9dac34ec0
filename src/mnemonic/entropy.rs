//! Entropy Generation
//!
//! SECURITY: Entropy bytes are held in `Zeroizing` and cleared on drop.

use std::fmt;

use rand::rngs::OsRng;
use rand::RngCore;
use zeroize::Zeroizing;

use crate::error::{ChecksumError, ChecksumResult};
use crate::types::WordCount;

/// Raw entropy whose bit length is one of 128, 160, 192, 224 or 256
#[derive(Clone)]
pub struct Entropy {
    bytes: Zeroizing<Vec<u8>>,
    word_count: WordCount,
}

impl Entropy {
    /// Wrap existing bytes, checking the length is a standard BIP-39 size
    pub fn from_bytes(bytes: &[u8]) -> ChecksumResult<Self> {
        let word_count = WordCount::from_entropy_bits(bytes.len() * 8)?;
        Ok(Self {
            bytes: Zeroizing::new(bytes.to_vec()),
            word_count,
        })
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn bit_len(&self) -> usize {
        self.bytes.len() * 8
    }

    pub fn word_count(&self) -> WordCount {
        self.word_count
    }

    pub fn to_hex(&self) -> String {
        hex::encode(self.as_bytes())
    }
}

impl fmt::Debug for Entropy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Entropy([REDACTED:{}bits])", self.bit_len())
    }
}

/// Generate `bit_length / 8` bytes from the operating system CSPRNG
pub fn generate_entropy(bit_length: usize) -> ChecksumResult<Entropy> {
    if bit_length % 32 != 0 {
        return Err(ChecksumError::InvalidLength { bits: bit_length });
    }
    let word_count = WordCount::from_entropy_bits(bit_length)?;

    let mut bytes = Zeroizing::new(vec![0u8; word_count.entropy_bytes()]);
    OsRng.fill_bytes(bytes.as_mut_slice());

    crate::log_debug!("entropy", "Generated entropy", bits = bit_length);
    Ok(Entropy { bytes, word_count })
}

/// Entropy bits carried by a phrase of `word_count` words
pub fn word_count_to_entropy_bits(word_count: usize) -> ChecksumResult<usize> {
    Ok(WordCount::try_from(word_count)?.entropy_bits())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_entropy_lengths() {
        for bits in [128, 160, 192, 224, 256] {
            let entropy = generate_entropy(bits).unwrap();
            assert_eq!(entropy.as_bytes().len(), bits / 8);
            assert_eq!(entropy.bit_len(), bits);
        }
    }

    #[test]
    fn test_generate_entropy_is_random() {
        let a = generate_entropy(128).unwrap();
        let b = generate_entropy(128).unwrap();
        assert_eq!(a.as_bytes().len(), 16);
        assert_ne!(a.as_bytes(), b.as_bytes());
    }

    #[test]
    fn test_generate_entropy_rejects_invalid_lengths() {
        for bits in [0, 64, 96, 100, 129, 288, 512] {
            assert_eq!(
                generate_entropy(bits).unwrap_err(),
                ChecksumError::InvalidLength { bits }
            );
        }
    }

    #[test]
    fn test_word_count_to_entropy_bits() {
        assert_eq!(word_count_to_entropy_bits(12), Ok(128));
        assert_eq!(word_count_to_entropy_bits(15), Ok(160));
        assert_eq!(word_count_to_entropy_bits(18), Ok(192));
        assert_eq!(word_count_to_entropy_bits(21), Ok(224));
        assert_eq!(word_count_to_entropy_bits(24), Ok(256));
        assert_eq!(
            word_count_to_entropy_bits(13),
            Err(ChecksumError::InvalidWordCount(13))
        );
        assert!(word_count_to_entropy_bits(0).is_err());
    }

    #[test]
    fn test_entropy_debug_is_redacted() {
        let entropy = Entropy::from_bytes(&[0xff; 16]).unwrap();
        assert_eq!(format!("{:?}", entropy), "Entropy([REDACTED:128bits])");
        assert_eq!(entropy.word_count(), WordCount::Twelve);
    }

    #[test]
    fn test_entropy_from_bytes_checks_length() {
        assert!(Entropy::from_bytes(&[0u8; 15]).is_err());
        assert!(Entropy::from_bytes(&[0u8; 32]).is_ok());
    }
}
