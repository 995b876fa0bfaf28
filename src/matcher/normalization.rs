// Text normalization: canonical quote forms plus the punctuation strip loop
// that exposes a bare dictionary-comparable word from a noisy token.

use crate::lexicon::Lexicon;

/// Sentence punctuation stripped from token edges.
const SENTENCE_PUNCTUATION: &[char] = &['.', ',', '!', '?', ';', ':', '—', '–'];

/// Matching wrapper pairs stripped one layer at a time.
const WRAPPER_PAIRS: &[(char, char)] = &[('(', ')'), ('[', ']'), ('{', '}'), ('"', '"')];

/// Bracket and quote characters stripped singly from either edge.
const BRACKET_QUOTE_CHARS: &[char] = &['(', ')', '[', ']', '{', '}', '"', '\''];

/// Upper bound on strip steps per token.
/// WHY: punctuation can nest arbitrarily in pathological input; the cap
/// guarantees termination and exceeding it is a no-match, not an error.
const MAX_STRIP_STEPS: usize = 10;

/// Map curly quote variants to straight apostrophe / double quote.
///
/// Every replacement is one char for one char, so the output has exactly
/// the same character count as the input. Scanners rely on this: character
/// spans computed over the normalized text index the original text directly.
pub fn normalize_quotes(text: &str) -> String {
    text.chars()
        .map(|ch| match ch {
            '\u{2018}' | '\u{2019}' => '\'',
            '\u{201C}' | '\u{201D}' => '"',
            other => other,
        })
        .collect()
}

/// Strip wrapping and edge punctuation from `token` until it hits the
/// single-word lexicon or the rule set is exhausted.
///
/// Rules apply in fixed priority order, one strip per step:
/// matching wrapper pair, trailing sentence punctuation, leading sentence
/// punctuation, trailing bracket/quote, leading bracket/quote. The lexicon
/// test runs before every step. Returns the candidate at the moment of the
/// hit, case preserved.
pub fn strip_to_lexicon_word<'a>(token: &'a str, lexicon: &Lexicon) -> Option<&'a str> {
    let mut candidate = token;

    for _ in 0..MAX_STRIP_STEPS {
        if !candidate.is_empty() && lexicon.contains_word(candidate) {
            return Some(candidate);
        }
        candidate = apply_strip_rule(candidate)?;
    }

    // Final membership test for a word reached exactly at the cap
    if !candidate.is_empty() && lexicon.contains_word(candidate) {
        return Some(candidate);
    }
    None
}

/// Apply the highest-priority strip rule that matches, removing one layer
/// or one character. `None` means no rule applies and the token is a dead end.
fn apply_strip_rule(candidate: &str) -> Option<&str> {
    let mut chars = candidate.chars();
    let first = chars.next()?;
    let last = chars.next_back().unwrap_or(first);
    let char_count = candidate.chars().count();

    if char_count > 2
        && WRAPPER_PAIRS
            .iter()
            .any(|&(open, close)| first == open && last == close)
    {
        return Some(strip_both(candidate, first, last));
    }
    if SENTENCE_PUNCTUATION.contains(&last) {
        return Some(strip_last(candidate, last));
    }
    if SENTENCE_PUNCTUATION.contains(&first) {
        return Some(strip_first(candidate, first));
    }
    if BRACKET_QUOTE_CHARS.contains(&last) {
        return Some(strip_last(candidate, last));
    }
    if BRACKET_QUOTE_CHARS.contains(&first) {
        return Some(strip_first(candidate, first));
    }
    None
}

fn strip_first(candidate: &str, first: char) -> &str {
    &candidate[first.len_utf8()..]
}

fn strip_last(candidate: &str, last: char) -> &str {
    &candidate[..candidate.len() - last.len_utf8()]
}

fn strip_both(candidate: &str, first: char, last: char) -> &str {
    &candidate[first.len_utf8()..candidate.len() - last.len_utf8()]
}
