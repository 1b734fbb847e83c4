use canonical::normalize;

use crate::config::{normalize_keywords, LexiconError};

/// Whether a normalized `keyword` occurs in normalized `text`.
///
/// ASCII keywords match whole tokens only, with an optional plural `s` or
/// `es` suffix, so "hat" hits "hats" but not "that". Keywords containing
/// other scripts match as plain substrings; Thai text has no spaces between
/// words.
///
/// ```rust
/// use lexicon::contains_keyword;
///
/// assert!(contains_keyword("two red keys", "key"));
/// assert!(!contains_keyword("hockey stick", "key"));
/// assert!(contains_keyword("พวงกุญแจสีแดง", "กุญแจ"));
/// ```
pub fn contains_keyword(text: &str, keyword: &str) -> bool {
    if keyword.is_empty() {
        return false;
    }
    if !keyword.is_ascii() {
        return text.contains(keyword);
    }
    text.match_indices(keyword).any(|(start, _)| {
        let starts_token = !text[..start].chars().next_back().is_some_and(is_word_char);
        let rest = &text[start + keyword.len()..];
        starts_token
            && ["", "s", "es"].into_iter().any(|suffix| {
                rest.strip_prefix(suffix)
                    .is_some_and(|tail| !tail.chars().next().is_some_and(is_word_char))
            })
    })
}

fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric()
}

/// Ordered keyword list used for co-occurrence bonuses (brands, colors).
///
/// Only the first keyword present in both texts counts; later keywords are
/// never added on top of it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct KeywordList {
    name: String,
    keywords: Vec<String>,
}

impl KeywordList {
    pub fn new(name: impl Into<String>, keywords: Vec<String>) -> Result<Self, LexiconError> {
        let name = name.into();
        let keywords = normalize_keywords(&name, keywords)?;
        Ok(Self { name, keywords })
    }

    /// First keyword, in list order, that appears in both texts.
    ///
    /// ```rust
    /// use lexicon::KeywordList;
    ///
    /// let colors = KeywordList::new("colors", vec!["black".into(), "red".into()]).unwrap();
    /// assert_eq!(colors.first_shared("Red and BLACK bag", "black, red strap"), Some("black"));
    /// assert_eq!(colors.first_shared("red bag", "blue bag"), None);
    /// ```
    pub fn first_shared(&self, a: &str, b: &str) -> Option<&str> {
        let a = normalize(a);
        let b = normalize(b);
        if a.is_empty() || b.is_empty() {
            return None;
        }
        self.keywords
            .iter()
            .find(|k| contains_keyword(&a, k) && contains_keyword(&b, k))
            .map(String::as_str)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_empty(&self) -> bool {
        self.keywords.is_empty()
    }

    pub fn len(&self) -> usize {
        self.keywords.len()
    }
}
