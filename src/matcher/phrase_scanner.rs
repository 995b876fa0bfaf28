// Multi-word phrase scanning over the quote-normalized text.
//
// Patterns are compiled once per lexicon, in lexicon order (longest phrase
// first), so a longer phrase always gets first claim on a region even though
// the regex engine scans left-to-right within a single phrase's pass.

use anyhow::Result;
use regex_automata::{meta::Regex, util::syntax};
use tracing::{debug, trace};

use super::{AdverbMatch, CharMap, ClaimedSpans, Span};

/// One compiled phrase pattern, kept alongside the phrase it was built from.
#[derive(Debug)]
pub(crate) struct PhrasePattern {
    phrase: String,
    regex: Regex,
}

/// Compile one case-insensitive, boundary-anchored pattern per phrase.
/// Input order (longest-first from the lexicon) is preserved.
pub(crate) fn compile_patterns(phrases: &[String]) -> Result<Vec<PhrasePattern>> {
    phrases
        .iter()
        .map(|phrase| {
            let pattern = boundary_pattern(phrase);
            let regex = Regex::builder()
                .syntax(syntax::Config::new().case_insensitive(true))
                .build(&pattern)?;
            trace!(phrase = %phrase, pattern = %pattern, "Compiled phrase pattern");
            Ok(PhrasePattern {
                phrase: phrase.clone(),
                regex,
            })
        })
        .collect()
}

/// Literal phrase pattern with a word-boundary assertion on each end whose
/// first/last character is alphanumeric. A phrase edge that is itself
/// punctuation gets no anchor on that side.
fn boundary_pattern(phrase: &str) -> String {
    let mut pattern = String::new();
    if phrase.chars().next().is_some_and(char::is_alphanumeric) {
        pattern.push_str(r"\b");
    }
    pattern.push_str(&regex_syntax::escape(phrase));
    if phrase.chars().next_back().is_some_and(char::is_alphanumeric) {
        pattern.push_str(r"\b");
    }
    pattern
}

/// Scan for all phrase occurrences, longest phrase first.
///
/// Match offsets come back in bytes over `normalized`; they are converted to
/// character spans before reconciliation, and surface text is sliced from
/// `original` at the same character positions (source casing and original
/// quote characters preserved).
pub(crate) fn scan(
    original: &str,
    normalized: &str,
    original_map: &CharMap,
    normalized_map: &CharMap,
    patterns: &[PhrasePattern],
    claimed: &mut ClaimedSpans,
) -> Vec<AdverbMatch> {
    let mut matches = Vec::new();

    for pattern in patterns {
        for found in pattern.regex.find_iter(normalized) {
            let span = Span::new(
                normalized_map.byte_to_char(found.start()),
                normalized_map.byte_to_char(found.end()),
            );
            if !claimed.try_claim(span) {
                trace!(phrase = %pattern.phrase, ?span, "Discarded overlapping phrase candidate");
                continue;
            }
            matches.push(AdverbMatch {
                text: original_map.slice(original, span).to_string(),
                span,
            });
        }
    }

    debug!(matches = matches.len(), "Phrase scan complete");
    matches
}
