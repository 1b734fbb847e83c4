//! Lost-and-found canonical text layer.
//!
//! Report fields arrive as free text typed by students and staff: mixed
//! case, stray whitespace, Thai without word breaks, English model names.
//! This crate turns them into a comparable form and scores how alike two
//! of them are.
//!
//! ## What we do
//!
//! - Lowercasing and whitespace collapsing ([`normalize`])
//! - Character n-grams over Unicode scalars ([`ngrams`])
//! - Jaccard overlap of n-gram sets ([`jaccard`])
//! - A cascaded 0–1 similarity score ([`similarity`])
//!
//! ## Pure function guarantee
//!
//! No I/O, no clock, no locale. Same input, same score, on any machine.

mod ngram;
mod similarity;
mod whitespace;

pub use crate::ngram::{jaccard, ngrams, NgramSet, DEFAULT_NGRAM_SIZE};
pub use crate::similarity::{
    similarity, word_overlap, CONTAINMENT_BASE, CONTAINMENT_SPAN, NGRAM_BLEND_WEIGHT,
    WORD_BLEND_WEIGHT,
};
pub use crate::whitespace::{collapse_whitespace, normalize, normalize_opt};
