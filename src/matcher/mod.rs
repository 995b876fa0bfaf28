// Adverb matching engine: quote-normalize once, run the phrase pass, then
// the word pass, reconciling every candidate against the claimed-span ledger.

use anyhow::Result;
use serde::Serialize;
use tracing::debug;

use crate::lexicon::Lexicon;

pub mod normalization;
mod phrase_scanner;
mod word_scanner;

use phrase_scanner::PhrasePattern;

/// Half-open `[start, end)` interval over the original text's character
/// offsets (character, not byte: quote normalization keeps character
/// positions aligned between original and normalized text, byte positions
/// shift).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Two half-open spans overlap iff neither ends at or before the other
    /// starts.
    pub fn overlaps(&self, other: &Span) -> bool {
        !(self.end <= other.start || other.end <= self.start)
    }
}

/// One matched adverb: the literal substring of the original input plus the
/// character span it occupies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdverbMatch {
    pub text: String,
    pub span: Span,
}

/// Result of one check: matched surface substrings in discovery order
/// (phrase matches first, then word matches) and their count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckResult {
    pub adverbs: Vec<String>,
    pub count: usize,
}

/// Ledger of spans already claimed by a match. Both scan passes share one
/// ledger per request, so no two matches can ever overlap.
#[derive(Debug, Default)]
pub(crate) struct ClaimedSpans {
    spans: Vec<Span>,
}

impl ClaimedSpans {
    pub fn overlaps(&self, span: &Span) -> bool {
        self.spans.iter().any(|claimed| claimed.overlaps(span))
    }

    pub fn claim(&mut self, span: Span) {
        self.spans.push(span);
    }

    /// Claim `span` unless it overlaps an existing claim.
    pub fn try_claim(&mut self, span: Span) -> bool {
        if self.overlaps(&span) {
            return false;
        }
        self.claim(span);
        true
    }
}

/// Byte-offset/char-offset mapping for one text.
///
/// Pattern matches come back as byte ranges; the reconciliation contract is
/// in character offsets, and surface text is sliced from a *different*
/// string (the original) at the same character positions.
#[derive(Debug)]
pub(crate) struct CharMap {
    byte_starts: Vec<usize>,
    len_bytes: usize,
}

impl CharMap {
    pub fn new(text: &str) -> Self {
        Self {
            byte_starts: text.char_indices().map(|(offset, _)| offset).collect(),
            len_bytes: text.len(),
        }
    }

    /// Character offset of the char starting at `byte` (which must lie on a
    /// char boundary; match offsets from the regex engine always do).
    pub fn byte_to_char(&self, byte: usize) -> usize {
        self.byte_starts.partition_point(|&start| start < byte)
    }

    /// Slice `text` by a character span. `text` must have the same character
    /// count as the text this map was built from.
    pub fn slice<'a>(&self, text: &'a str, span: Span) -> &'a str {
        let start = self.byte_starts[span.start];
        let end = match self.byte_starts.get(span.end) {
            Some(&offset) => offset,
            None => self.len_bytes,
        };
        &text[start..end]
    }
}

/// The adverb matching engine.
///
/// Construction consumes a [`Lexicon`] and compiles one pattern per
/// multi-word phrase; both are immutable afterwards, so one matcher can be
/// shared read-only across concurrent requests. The per-request path
/// performs no I/O and cannot fail.
pub struct AdverbMatcher {
    lexicon: Lexicon,
    phrase_patterns: Vec<PhrasePattern>,
}

impl AdverbMatcher {
    /// Build a matcher from a lexicon, compiling all phrase patterns.
    pub fn new(lexicon: Lexicon) -> Result<Self> {
        let phrase_patterns = phrase_scanner::compile_patterns(lexicon.phrases())?;
        Ok(Self {
            lexicon,
            phrase_patterns,
        })
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// Find all adverb matches in `text`: phrase matches in longest-first
    /// phrase order, then single-word matches in token order. Returned spans
    /// are pairwise non-overlapping.
    pub fn find_matches(&self, text: &str) -> Vec<AdverbMatch> {
        let normalized = normalization::normalize_quotes(text);
        let original_map = CharMap::new(text);
        let normalized_map = CharMap::new(&normalized);
        let mut claimed = ClaimedSpans::default();

        let mut matches = phrase_scanner::scan(
            text,
            &normalized,
            &original_map,
            &normalized_map,
            &self.phrase_patterns,
            &mut claimed,
        );
        matches.extend(word_scanner::scan(
            text,
            &normalized,
            &original_map,
            &self.lexicon,
            &mut claimed,
        ));

        debug!(matches = matches.len(), "Adverb scan complete");
        matches
    }

    /// Check `text` for adverbs, returning surface substrings and count.
    pub fn check(&self, text: &str) -> CheckResult {
        let matches = self.find_matches(text);
        let adverbs: Vec<String> = matches.into_iter().map(|m| m.text).collect();
        let count = adverbs.len();
        CheckResult { adverbs, count }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matcher_with(entries: &str) -> AdverbMatcher {
        AdverbMatcher::new(Lexicon::parse(entries)).unwrap()
    }

    #[test]
    fn test_span_overlap_rule() {
        let a = Span::new(0, 5);
        let b = Span::new(5, 10);
        let c = Span::new(4, 6);

        assert!(!a.overlaps(&b), "adjacent spans do not overlap");
        assert!(!b.overlaps(&a));
        assert!(a.overlaps(&c));
        assert!(c.overlaps(&b));
    }

    #[test]
    fn test_claimed_spans_reject_overlap() {
        let mut claimed = ClaimedSpans::default();
        assert!(claimed.try_claim(Span::new(3, 8)));
        assert!(!claimed.try_claim(Span::new(7, 12)));
        assert!(claimed.try_claim(Span::new(8, 12)));
    }

    #[test]
    fn test_char_map_multibyte() {
        let text = "a\u{2019}b";
        let map = CharMap::new(text);

        assert_eq!(map.byte_to_char(0), 0);
        assert_eq!(map.byte_to_char(1), 1); // curly quote starts at byte 1
        assert_eq!(map.byte_to_char(4), 2); // 'b' after the 3-byte quote
        assert_eq!(map.slice(text, Span::new(1, 3)), "\u{2019}b");
    }

    #[test]
    fn test_check_empty_input() {
        let matcher = matcher_with("quickly\n");
        let result = matcher.check("");
        assert_eq!(result.adverbs, Vec::<String>::new());
        assert_eq!(result.count, 0);
    }

    #[test]
    fn test_check_counts_match_adverbs_length() {
        let matcher = matcher_with("quickly\nsoftly\nall of a sudden\n");
        for text in [
            "",
            "She ran quickly.",
            "All of a sudden he spoke softly and quickly.",
            "No matches here at all.",
        ] {
            let result = matcher.check(text);
            assert_eq!(result.count, result.adverbs.len(), "input: {text:?}");
        }
    }

    #[test]
    fn test_no_false_match_for_plain_text() {
        let matcher = matcher_with("quickly\n");
        let result = matcher.check("The cat sat.");
        assert_eq!(result.count, 0);
    }

    #[test]
    fn test_matches_never_overlap() {
        let matcher = matcher_with("quickly\nnow\nnow and then\nevery now and then\n");
        let matches = matcher.find_matches("Every now and then she moved quickly, now and then slowly.");

        for (i, a) in matches.iter().enumerate() {
            for b in matches.iter().skip(i + 1) {
                assert!(
                    !a.span.overlaps(&b.span),
                    "overlapping matches: {a:?} vs {b:?}"
                );
            }
        }
    }

    #[test]
    fn test_phrase_matches_precede_word_matches() {
        let matcher = matcher_with("quickly\nall of a sudden\n");
        // The word match occurs before the phrase in document order, but the
        // phrase pass runs first
        let result = matcher.check("Quickly it was over, all of a sudden.");
        assert_eq!(result.adverbs, vec!["all of a sudden", "Quickly"]);
    }

    #[test]
    fn test_duplicate_occurrences_both_count() {
        let matcher = matcher_with("quickly\n");
        let result = matcher.check("quickly and quickly");
        assert_eq!(result.count, 2);
        assert_eq!(result.adverbs, vec!["quickly", "quickly"]);
    }
}
