//! Fuzzy similarity between two free-text fields.
//!
//! The score is a cascade of cheap checks: exact match after normalization,
//! then containment, then a blend of character-bigram Jaccard and word
//! overlap. The cascade never returns less than the strongest single signal.

use crate::ngram::{jaccard, ngrams, DEFAULT_NGRAM_SIZE};
use crate::whitespace::normalize;

/// Floor for a containment match; short substrings of long texts land here.
pub const CONTAINMENT_BASE: f64 = 0.7;
/// Extra credit scaled by `len(shorter) / len(longer)` on containment.
pub const CONTAINMENT_SPAN: f64 = 0.3;
/// Weight of the n-gram Jaccard score in the blended score.
pub const NGRAM_BLEND_WEIGHT: f64 = 0.6;
/// Weight of the word-overlap score in the blended score.
pub const WORD_BLEND_WEIGHT: f64 = 0.4;

/// Similarity in `[0, 1]` between two free-text strings.
///
/// Symmetric in its arguments. Empty (or whitespace-only) input on either
/// side scores 0.
///
/// ```rust
/// use canonical::similarity;
///
/// assert_eq!(similarity("Black Wallet", "black   wallet"), 1.0);
/// assert_eq!(similarity("", "wallet"), 0.0);
///
/// // "keys" is contained in "car keys": 0.7 + 0.3 * 4/8
/// assert!((similarity("keys", "car keys") - 0.85).abs() < 1e-12);
/// ```
pub fn similarity(a: &str, b: &str) -> f64 {
    let a = normalize(a);
    let b = normalize(b);
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }
    if a == b {
        return 1.0;
    }
    if let Some(score) = containment_score(&a, &b) {
        return score;
    }

    let ngram_score = jaccard(
        &ngrams(&a, DEFAULT_NGRAM_SIZE),
        &ngrams(&b, DEFAULT_NGRAM_SIZE),
    );
    let word_score = word_overlap(&a, &b);
    let blended = NGRAM_BLEND_WEIGHT * ngram_score + WORD_BLEND_WEIGHT * word_score;

    blended.max(ngram_score).max(word_score).clamp(0.0, 1.0)
}

/// Score for one normalized string containing the other, if it does.
fn containment_score(a: &str, b: &str) -> Option<f64> {
    let (shorter, longer) = if a.len() <= b.len() { (a, b) } else { (b, a) };
    if !longer.contains(shorter) {
        return None;
    }
    let ratio = shorter.chars().count() as f64 / longer.chars().count() as f64;
    Some(CONTAINMENT_BASE + CONTAINMENT_SPAN * ratio)
}

/// Share of whitespace-delimited words with a partner on the other side.
///
/// A word has a partner when it is a substring of, or contains, some word in
/// the other text. Common words are counted on both sides, so the score is
/// `(c1 + c2) / (|W1| + |W2|)`: symmetric and never above 1.
///
/// ```rust
/// use canonical::word_overlap;
///
/// assert_eq!(word_overlap("red umbrella", "umbrella red"), 1.0);
/// assert_eq!(word_overlap("red umbrella", "blue bag"), 0.0);
/// assert_eq!(word_overlap("", ""), 0.0);
/// ```
pub fn word_overlap(a: &str, b: &str) -> f64 {
    let a = normalize(a);
    let b = normalize(b);
    let words_a: Vec<&str> = a.split_whitespace().collect();
    let words_b: Vec<&str> = b.split_whitespace().collect();

    let total = words_a.len() + words_b.len();
    if total == 0 {
        return 0.0;
    }

    let common = count_with_partner(&words_a, &words_b) + count_with_partner(&words_b, &words_a);
    common as f64 / total as f64
}

fn count_with_partner(words: &[&str], others: &[&str]) -> usize {
    words
        .iter()
        .filter(|w| others.iter().any(|o| w.contains(o) || o.contains(*w)))
        .count()
}
