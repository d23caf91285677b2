//! Word sources.
//!
//! The round machine only needs batches of distinct candidate words. Where the
//! corpus comes from (a bundled list, a file, a database) is up to the host.

use std::collections::HashSet;

use rand::rngs::SmallRng;
use rand::seq::IndexedRandom;
use rand::SeedableRng;

/// Supplier of candidate words.
pub trait WordSource {
    /// Up to `n` distinct words. Returns fewer only when the corpus is smaller
    /// than `n`.
    fn random_words(&mut self, n: usize) -> Vec<String>;

    /// A single word drawn the same way.
    fn random_word(&mut self) -> Option<String> {
        self.random_words(1).into_iter().next()
    }
}

/// In-memory corpus sampled uniformly without replacement.
#[derive(Debug, Clone)]
pub struct WordList {
    words: Vec<String>,
    rng: SmallRng,
}

impl WordList {
    /// Build from any word iterator. Words are trimmed; blanks and duplicates
    /// are dropped.
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::with_rng(words, SmallRng::from_os_rng())
    }

    /// Same as [`WordList::new`] with a deterministic RNG.
    pub fn seeded<I, S>(words: I, seed: u64) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::with_rng(words, SmallRng::seed_from_u64(seed))
    }

    /// Parse a newline-delimited corpus. Lines starting with `#` are comments.
    pub fn parse(corpus: &str) -> Self {
        Self::new(corpus.lines().filter(|l| !l.trim_start().starts_with('#')))
    }

    fn with_rng<I, S>(words: I, rng: SmallRng) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut seen = HashSet::new();
        let words = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_string())
            .filter(|w| !w.is_empty())
            .filter(|w| seen.insert(w.clone()))
            .collect();
        Self { words, rng }
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.iter().any(|w| w == word)
    }
}

impl WordSource for WordList {
    fn random_words(&mut self, n: usize) -> Vec<String> {
        self.words
            .choose_multiple(&mut self.rng, n)
            .cloned()
            .collect()
    }
}
