//! Search layer — the matcher over the loaded dataset.
//!
//! A record matches a query when ANY of three rules holds:
//!
//! 1. **Direct substring** — the normalized query is a substring of any
//!    normalized descriptive field.
//! 2. **Code variation** — the normalized query is *exactly equal* to one of
//!    the mechanically derived spellings of the record's code (see
//!    [`code_variants`]). Codes match through this rule alone. Equality,
//!    never substring: `003` hits `F003` but not `F0031`.
//! 3. **Synonym** — the normalized query resolves through the
//!    [synonym table](crate::synonyms) to a canonical term, which is then
//!    substring-matched against the descriptive fields.
//!
//! The result preserves dataset order, is uncapped, and mutates nothing.

use crate::normalizer::normalize;
use crate::synonyms;
use crate::types::ServiceOrder;

/// Why a search produced no result set. The two variants are distinct
/// user-visible states and must not collapse into "no matches".
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    /// Search attempted before the dataset finished loading.
    #[error("dataset is not loaded yet")]
    NotReady,
    /// Query was blank — or nothing but punctuation — after trimming.
    #[error("query is empty")]
    EmptyQuery,
}

/// Filter `orders` down to the records matching `query`.
///
/// Pure and synchronous. Returns the matches in their original relative
/// order; an empty vec means a well-formed query matched nothing.
pub fn search<'a>(
    query: &str,
    orders: &'a [ServiceOrder],
) -> Result<Vec<&'a ServiceOrder>, SearchError> {
    let term = normalize(query.trim());
    if term.is_empty() {
        return Err(SearchError::EmptyQuery);
    }
    tracing::debug!(%term, total = orders.len(), "search dispatched");
    Ok(orders.iter().filter(|order| matches(&term, order)).collect())
}

fn matches(term: &str, order: &ServiceOrder) -> bool {
    direct_substring(term, order)
        || code_variant_equals(term, &order.code)
        || synonym_match(term, order)
}

fn direct_substring(term: &str, order: &ServiceOrder) -> bool {
    order
        .descriptive_fields()
        .any(|field| normalize(field).contains(term))
}

fn code_variant_equals(term: &str, code: &str) -> bool {
    code_variants(code)
        .iter()
        .any(|variant| normalize(variant) == term)
}

fn synonym_match(term: &str, order: &ServiceOrder) -> bool {
    let Some(canonical) = synonyms::canonical_for(term) else {
        return false;
    };
    order
        .descriptive_fields()
        .any(|field| normalize(field).contains(canonical))
}

/// Mechanically derived alternate spellings of a record code, used for
/// exact-match lookup.
///
/// For `"F003"` this yields `F003`, `003`, `F-003`, `3`, and `F3`: the code
/// itself, the code minus a single leading non-digit prefix character, the
/// trailing digit run (plain and `F`-prefixed), the zero-stripped digit run
/// (plain and `F`-prefixed), and a hyphenated form when the code carries no
/// hyphen of its own.
pub fn code_variants(code: &str) -> Vec<String> {
    let mut variants = vec![code.to_string()];

    // Leading non-digit prefix character removed
    if let Some(first) = code.chars().next() {
        if !first.is_ascii_digit() && code.len() > first.len_utf8() {
            push_unique(&mut variants, code[first.len_utf8()..].to_string());
        }
    }

    // Trailing digit run, zero-stripped, and their F-prefixed forms
    let prefix = code.trim_end_matches(|c: char| c.is_ascii_digit());
    let digits = &code[prefix.len()..];
    if !digits.is_empty() {
        push_unique(&mut variants, digits.to_string());
        push_unique(&mut variants, format!("F{digits}"));
        let bare = digits.trim_start_matches('0');
        if !bare.is_empty() {
            push_unique(&mut variants, bare.to_string());
            push_unique(&mut variants, format!("F{bare}"));
        }
    }

    // Hyphen between a leading letter run and the first digit
    if !code.contains('-') {
        if let Some(pos) = code.find(|c: char| c.is_ascii_digit()) {
            if pos > 0 {
                push_unique(&mut variants, format!("{}-{}", &code[..pos], &code[pos..]));
            }
        }
    }

    variants
}

fn push_unique(variants: &mut Vec<String>, candidate: String) {
    if !variants.contains(&candidate) {
        variants.push(candidate);
    }
}
