//! Shared types for the checksum engine
//!
//! All data structures that cross module boundaries are defined here
//! for consistent serialization and FFI compatibility.

use serde::{Deserialize, Serialize};

use crate::error::{ChecksumError, ChecksumResult};

// =============================================================================
// Phrase Lengths
// =============================================================================

/// Bits encoded by a single wordlist entry
pub const BITS_PER_WORD: usize = 11;

/// Number of entries in every BIP-39 wordlist
pub const WORDLIST_SIZE: usize = 2048;

/// Standard BIP-39 phrase lengths
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub enum WordCount {
    Twelve,
    Fifteen,
    Eighteen,
    TwentyOne,
    TwentyFour,
}

impl WordCount {
    pub const ALL: [WordCount; 5] = [
        WordCount::Twelve,
        WordCount::Fifteen,
        WordCount::Eighteen,
        WordCount::TwentyOne,
        WordCount::TwentyFour,
    ];

    pub fn words(&self) -> usize {
        match self {
            WordCount::Twelve => 12,
            WordCount::Fifteen => 15,
            WordCount::Eighteen => 18,
            WordCount::TwentyOne => 21,
            WordCount::TwentyFour => 24,
        }
    }

    /// Entropy plus checksum bits
    pub fn total_bits(&self) -> usize {
        self.words() * BITS_PER_WORD
    }

    pub fn entropy_bits(&self) -> usize {
        let total = self.total_bits();
        total - total / 33
    }

    pub fn checksum_bits(&self) -> usize {
        self.entropy_bits() / 32
    }

    pub fn entropy_bytes(&self) -> usize {
        self.entropy_bits() / 8
    }

    /// Phrase length that carries `bits` of entropy
    pub fn from_entropy_bits(bits: usize) -> ChecksumResult<Self> {
        Self::ALL
            .into_iter()
            .find(|wc| wc.entropy_bits() == bits)
            .ok_or(ChecksumError::InvalidLength { bits })
    }

    /// A sense of scale for the size of the phrase space
    pub fn fun_fact(&self) -> &'static str {
        match self {
            WordCount::Twelve => "A 12-word seed phrase offers about 5.44 x 10^39 combinations. That's like choosing a single atom from a sphere of the Earth's size filled with tiny particles.",
            WordCount::Fifteen => "With a 15-word seed phrase, the combinations jump to approximately 1.41 x 10^50. You could cover the entire surface of the Earth with layers of paper stacks, each as tall as the Empire State Building, and have each stack represent a unique combination.",
            WordCount::Eighteen => "An 18-word seed phrase has around 3.67 x 10^60 combinations. That's more than all the visible stars in the universe, which are estimated to be around 7 x 10^22 stars.",
            WordCount::TwentyOne => "For a 21-word seed phrase, you get about 9.56 x 10^70 combinations. This number is so large that if every star in the universe had its own universe inside it, with just as many stars, the total stars still wouldn't come close to this number.",
            WordCount::TwentyFour => "A 24-word seed phrase has a mind-boggling 2.48 x 10^81 combinations. That's akin to the number of fundamental particles in the observable universe, which is estimated to be between 10^78 to 10^82 particles.",
        }
    }
}

impl TryFrom<usize> for WordCount {
    type Error = ChecksumError;

    fn try_from(words: usize) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|wc| wc.words() == words)
            .ok_or(ChecksumError::InvalidWordCount(words))
    }
}

impl From<WordCount> for usize {
    fn from(wc: WordCount) -> usize {
        wc.words()
    }
}

impl std::fmt::Display for WordCount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.words())
    }
}

// =============================================================================
// Validation Trace
// =============================================================================

/// Every intermediate value produced while re-deriving a mnemonic's checksum.
///
/// Built in one piece by `validate_mnemonic_checksum`; never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationTrace {
    /// Concatenated 11-bit word indices
    pub binary: String,
    pub entropy_bits: String,
    pub checksum_bits: String,
    pub entropy_hex: String,
    /// SHA-256 of the entropy bytes, hex encoded
    pub hash_hex: String,
    pub recalculated_checksum: String,
    pub valid: bool,
}

impl ValidationTrace {
    /// Labeled steps in display order. The verdict step carries no value.
    pub fn steps(&self) -> Vec<TraceStep> {
        vec![
            TraceStep::new("Binary representation", &self.binary),
            TraceStep::new("Extracted entropy", &self.entropy_bits),
            TraceStep::new("Extracted checksum", &self.checksum_bits),
            TraceStep::new("Hex of the entropy", &self.entropy_hex),
            TraceStep::new("SHA-256 hash of entropy", &self.hash_hex),
            TraceStep::new("Recalculated checksum", &self.recalculated_checksum),
            TraceStep::new(self.verdict(), ""),
        ]
    }

    pub fn verdict(&self) -> &'static str {
        if self.valid {
            "Checksum is valid"
        } else {
            "Checksum is invalid"
        }
    }
}

/// One labeled line of a [`ValidationTrace`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraceStep {
    pub label: String,
    pub value: String,
}

impl TraceStep {
    fn new(label: &str, value: &str) -> Self {
        Self {
            label: label.to_string(),
            value: value.to_string(),
        }
    }
}

// =============================================================================
// Surface Payloads
// =============================================================================

/// Result of a "generate" action
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratedMnemonic {
    pub word_count: WordCount,
    pub entropy_hex: String,
    pub checksum: String,
    pub mnemonic: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateRequest {
    #[serde(default = "default_word_count")]
    pub word_count: WordCount,
}

fn default_word_count() -> WordCount {
    WordCount::Twelve
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChecksumRequest {
    pub entropy_hex: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChecksumResponse {
    pub entropy_bits: usize,
    pub checksum: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidateRequest {
    pub mnemonic: String,
}

// =============================================================================
// Response Wrapper
// =============================================================================

/// Standard API response wrapper
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<crate::error::ApiError>,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn err(error: crate::error::ApiError) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error),
        }
    }
}

impl<T: Serialize> ApiResponse<T> {
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| {
            r#"{"success":false,"error":{"code":"internal","message":"Serialization failed"}}"#.to_string()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_count_widths() {
        let expected = [(12, 128, 4), (15, 160, 5), (18, 192, 6), (21, 224, 7), (24, 256, 8)];
        for (wc, (words, ent, cs)) in WordCount::ALL.iter().zip(expected) {
            assert_eq!(wc.words(), words);
            assert_eq!(wc.entropy_bits(), ent);
            assert_eq!(wc.checksum_bits(), cs);
            assert_eq!(wc.total_bits(), ent + cs);
        }
    }

    #[test]
    fn test_word_count_rejects_nonstandard() {
        assert_eq!(WordCount::try_from(13), Err(ChecksumError::InvalidWordCount(13)));
        assert!(WordCount::from_entropy_bits(100).is_err());
        assert_eq!(WordCount::from_entropy_bits(256), Ok(WordCount::TwentyFour));
    }

    #[test]
    fn test_word_count_serde_as_number() {
        let req: GenerateRequest = serde_json::from_str(r#"{"word_count":18}"#).unwrap();
        assert_eq!(req.word_count, WordCount::Eighteen);

        let req: GenerateRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(req.word_count, WordCount::Twelve);

        assert!(serde_json::from_str::<GenerateRequest>(r#"{"word_count":11}"#).is_err());
    }

    #[test]
    fn test_trace_steps_order() {
        let trace = ValidationTrace {
            binary: "b".into(),
            entropy_bits: "e".into(),
            checksum_bits: "c".into(),
            entropy_hex: "h".into(),
            hash_hex: "s".into(),
            recalculated_checksum: "r".into(),
            valid: false,
        };
        let values: Vec<_> = trace.steps().into_iter().map(|s| s.value).collect();
        assert_eq!(values, vec!["b", "e", "c", "h", "s", "r", ""]);
        assert_eq!(trace.steps().last().unwrap().label, "Checksum is invalid");
    }

    #[test]
    fn test_api_response_serialization() {
        let response = ApiResponse::ok("test_data".to_string());
        let json = response.to_json();
        assert!(json.contains("success"));
        assert!(json.contains("test_data"));
    }
}
