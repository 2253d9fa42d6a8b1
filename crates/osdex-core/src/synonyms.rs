//! Static synonym table — canonical workshop terms and their equivalents.
//!
//! A compile-time perfect hash map from a canonical domain term to related
//! terms. Keys and values are stored pre-normalized (lowercase, no
//! diacritics) so lookups can be done directly with a normalized query.
//!
//! The table is intentionally small and fixed; broadening it is a data
//! change, not a code change.

use phf::phf_map;

static SYNONYMS: phf::Map<&'static str, &'static [&'static str]> = phf_map! {
    "bucha" => &["mancal", "casquilho", "pivo"],
    "junta" => &["vedacao", "gaxeta", "retentor"],
    "oleo" => &["lubrificante", "fluido"],
    "bico" => &["injetor", "injetores"],
    "correia" => &["polia", "tensor"],
    "freio" => &["pastilha", "lona"],
    "mangueira" => &["duto", "tubulacao"],
};

/// Resolve a normalized term to its canonical form.
///
/// Returns the canonical term when `term` is either a canonical key or one
/// of its synonyms, `None` otherwise. The caller is expected to pass a
/// normalized term; raw input will simply miss.
pub fn canonical_for(term: &str) -> Option<&'static str> {
    if let Some((key, _)) = SYNONYMS.get_entry(term) {
        return Some(key);
    }
    SYNONYMS
        .entries()
        .find(|(_, syns)| syns.contains(&term))
        .map(|(key, _)| *key)
}
