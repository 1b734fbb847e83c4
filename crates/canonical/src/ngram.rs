//! Character n-grams and set overlap.
//!
//! N-grams are taken over Unicode scalar values rather than whitespace
//! tokens: Thai and other scripts written without spaces between words
//! still produce useful overlap this way.

use fxhash::FxHashSet;

use crate::whitespace::normalize;

/// Window size used by the similarity scorer.
pub const DEFAULT_NGRAM_SIZE: usize = 2;

/// Set of distinct character n-grams.
pub type NgramSet = FxHashSet<String>;

/// Sliding-window character n-grams of length `n` over the normalized text.
///
/// Returns an empty set when `n == 0` or the normalized text is shorter than
/// `n` characters.
///
/// ```rust
/// use canonical::ngrams;
///
/// let grams = ngrams("Keys", 2);
/// assert_eq!(grams.len(), 3);
/// assert!(grams.contains("ke") && grams.contains("ey") && grams.contains("ys"));
/// assert!(ngrams("k", 2).is_empty());
/// ```
pub fn ngrams(text: &str, n: usize) -> NgramSet {
    let normalized = normalize(text);
    let chars: Vec<char> = normalized.chars().collect();
    if n == 0 || chars.len() < n {
        return NgramSet::default();
    }

    let mut out = NgramSet::default();
    out.reserve(chars.len() - n + 1);
    for window in chars.windows(n) {
        out.insert(window.iter().collect());
    }
    out
}

/// `|a ∩ b| / |a ∪ b|`, defined as 0 when the union is empty.
pub fn jaccard(a: &NgramSet, b: &NgramSet) -> f64 {
    // Iterate the smaller set for the intersection count.
    let (small, large) = if a.len() <= b.len() { (a, b) } else { (b, a) };
    let intersection = small.iter().filter(|g| large.contains(*g)).count();
    let union = a.len() + b.len() - intersection;
    if union == 0 {
        return 0.0;
    }
    intersection as f64 / union as f64
}
