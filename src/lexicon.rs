// Lexicon loading: partitions a newline-delimited word/phrase list into the
// single-word set and the longest-first multi-word phrase list.

use anyhow::{Context, Result};
use std::collections::HashSet;
use std::path::Path;
use tracing::{debug, info};

/// Curated default adverb list shipped with the crate.
/// One entry per line; entries with interior whitespace are phrases.
const BUILTIN_ADVERBS: &str = include_str!("../data/adverbs.txt");

/// Immutable word/phrase dictionary built once at startup.
///
/// Single words live in a lower-cased `HashSet` for O(1) case-insensitive
/// membership tests. Multi-word phrases are kept in a `Vec` ordered by
/// descending whitespace-token count so that a longer phrase is always
/// scanned before any shorter phrase it contains.
#[derive(Debug, Clone)]
pub struct Lexicon {
    single_words: HashSet<String>,
    phrases: Vec<String>,
}

impl Lexicon {
    /// Parse a newline-delimited entry list.
    ///
    /// Blank and whitespace-only lines are discarded; all entries are
    /// lower-cased before storage. Entries containing interior whitespace
    /// become phrases, everything else a single word.
    pub fn parse(content: &str) -> Self {
        let mut single_words = HashSet::new();
        let mut phrases = Vec::new();

        for line in content.lines() {
            let entry = line.trim();
            if entry.is_empty() {
                continue;
            }
            let entry = entry.to_lowercase();
            if entry.split_whitespace().count() > 1 {
                phrases.push(entry);
            } else {
                single_words.insert(entry);
            }
        }

        // WHY: stable sort keeps input order on equal token counts, so ties
        // between same-length phrases resolve the same way the list was written
        phrases.sort_by(|a, b| {
            let a_tokens = a.split_whitespace().count();
            let b_tokens = b.split_whitespace().count();
            b_tokens.cmp(&a_tokens)
        });

        debug!(
            words = single_words.len(),
            phrases = phrases.len(),
            "Parsed lexicon entries"
        );

        Self {
            single_words,
            phrases,
        }
    }

    /// Built-in curated adverb lexicon (always available, no I/O).
    pub fn builtin() -> Self {
        Self::parse(BUILTIN_ADVERBS)
    }

    /// Load a lexicon from a dictionary file, one entry per line (UTF-8).
    ///
    /// An unreadable path is a hard error: the engine never starts with a
    /// partial or empty fallback dictionary.
    pub async fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read dictionary file: {}", path.display()))?;

        let lexicon = Self::parse(&content);
        info!(
            path = %path.display(),
            words = lexicon.word_count(),
            phrases = lexicon.phrase_count(),
            "Loaded dictionary file"
        );
        Ok(lexicon)
    }

    /// Case-insensitive single-word membership test.
    pub fn contains_word(&self, word: &str) -> bool {
        self.single_words.contains(&word.to_lowercase())
    }

    /// Multi-word phrases, longest (by token count) first.
    pub fn phrases(&self) -> &[String] {
        &self.phrases
    }

    pub fn word_count(&self) -> usize {
        self.single_words.len()
    }

    pub fn phrase_count(&self) -> usize {
        self.phrases.len()
    }
}
