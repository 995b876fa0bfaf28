// Single-word scanning: whitespace tokenization with direct span tracking,
// then the punctuation strip loop against the single-word lexicon.

use tracing::debug;

use super::normalization::strip_to_lexicon_word;
use super::{AdverbMatch, CharMap, ClaimedSpans, Span};
use crate::lexicon::Lexicon;

/// Scan tokens left-to-right, skipping spans already claimed by the phrase
/// pass. Candidates are taken from the quote-normalized text (so curly
/// quotes compare as straight ones); the recorded match text is the
/// original-cased token sliced from `original` at the same character span.
pub(crate) fn scan(
    original: &str,
    normalized: &str,
    original_map: &CharMap,
    lexicon: &Lexicon,
    claimed: &mut ClaimedSpans,
) -> Vec<AdverbMatch> {
    let mut matches = Vec::new();

    for (span, token) in tokenize(normalized) {
        if claimed.overlaps(&span) {
            continue;
        }
        if strip_to_lexicon_word(token, lexicon).is_some() {
            claimed.claim(span);
            matches.push(AdverbMatch {
                text: original_map.slice(original, span).to_string(),
                span,
            });
        }
    }

    debug!(matches = matches.len(), "Word scan complete");
    matches
}

/// Split on runs of whitespace, producing each token with its character
/// span. The walk emits spans directly, so tokens are never empty and no
/// position searching happens.
fn tokenize(text: &str) -> Vec<(Span, &str)> {
    let mut tokens = Vec::new();
    let mut current: Option<(usize, usize)> = None; // (start char, start byte)
    let mut char_idx = 0;

    for (byte_idx, ch) in text.char_indices() {
        if ch.is_whitespace() {
            if let Some((start_char, start_byte)) = current.take() {
                tokens.push((Span::new(start_char, char_idx), &text[start_byte..byte_idx]));
            }
        } else if current.is_none() {
            current = Some((char_idx, byte_idx));
        }
        char_idx += 1;
    }
    if let Some((start_char, start_byte)) = current {
        tokens.push((Span::new(start_char, char_idx), &text[start_byte..]));
    }

    tokens
}
