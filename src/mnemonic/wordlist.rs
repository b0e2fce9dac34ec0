//! BIP-39 Wordlist
//!
//! An ordered, immutable vocabulary mapping 11-bit indices to words.

use std::collections::HashMap;

use bip39::Language;

use crate::error::{ChecksumError, ChecksumResult};
use crate::types::WORDLIST_SIZE;

lazy_static::lazy_static! {
    static ref ENGLISH: Wordlist = Wordlist::from_bip39(Language::English);
}

/// Exactly 2048 distinct words; a word's position is its index.
#[derive(Debug, Clone)]
pub struct Wordlist {
    words: Vec<String>,
    index: HashMap<String, u16>,
}

impl Wordlist {
    /// The standard English list, built once and shared read-only
    pub fn english() -> &'static Wordlist {
        &ENGLISH
    }

    /// Build a wordlist from caller-supplied words.
    ///
    /// Words are split on single spaces during decoding, so a word may not be
    /// empty or contain whitespace.
    pub fn from_words<S: Into<String>>(words: Vec<S>) -> ChecksumResult<Self> {
        let words: Vec<String> = words.into_iter().map(Into::into).collect();

        if words.len() != WORDLIST_SIZE {
            return Err(ChecksumError::InvalidWordlist(format!(
                "expected {} words, got {}",
                WORDLIST_SIZE,
                words.len()
            )));
        }
        if let Some(bad) = words
            .iter()
            .find(|w| w.is_empty() || w.chars().any(char::is_whitespace))
        {
            return Err(ChecksumError::InvalidWordlist(format!(
                "word {:?} is empty or contains whitespace",
                bad
            )));
        }

        let list = Self::indexed(words);
        if list.index.len() != WORDLIST_SIZE {
            return Err(ChecksumError::InvalidWordlist(
                "words must be distinct".to_string(),
            ));
        }
        Ok(list)
    }

    fn from_bip39(language: Language) -> Self {
        Self::indexed(language.word_list().iter().map(|w| w.to_string()).collect())
    }

    fn indexed(words: Vec<String>) -> Self {
        let index = words
            .iter()
            .enumerate()
            .map(|(i, w)| (w.clone(), i as u16))
            .collect();
        Self { words, index }
    }

    /// Zero-based index of `word`, exact case-sensitive match
    pub fn index_of(&self, word: &str) -> Option<u16> {
        self.index.get(word).copied()
    }

    pub fn word(&self, index: usize) -> Option<&str> {
        self.words.get(index).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
