//! Normalizer — the single text-folding function every comparison goes
//! through.
//!
//! Queries and record fields are folded identically before any comparison:
//! Unicode lowercase, NFD decomposition with combining marks discarded, then
//! every character that is neither alphanumeric nor whitespace is dropped.
//! Punctuation-stripping means `f-003` and `F003` fold to the same string.
//!
//! The function is idempotent: folding an already-folded string is a no-op.

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Fold a string for comparison.
pub fn normalize(s: &str) -> String {
    s.to_lowercase()
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .filter(|c| c.is_alphanumeric() || c.is_whitespace())
        .collect()
}
