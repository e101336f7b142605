//! Legal term extraction: free text → fixed legal vocabulary.
//!
//! DESIGN
//! ======
//! A flat, case-insensitive substring scan over a static keyword list. The
//! output follows the list's declaration order, never the order terms appear
//! in the input, so downstream precedent matching is deterministic.

/// The keyword vocabulary, in enumeration order.
pub const LEGAL_TERMS: &[&str] = &[
    "eviction",
    "rent",
    "lease",
    "tenant",
    "landlord",
    "wage",
    "salary",
    "compensation",
    "employer",
    "employee",
    "divorce",
    "custody",
    "alimony",
    "marriage",
    "child support",
    "property",
    "ownership",
    "title",
    "deed",
    "inheritance",
    "contract",
    "agreement",
    "breach",
    "damages",
    "liability",
    "criminal",
    "offense",
    "bail",
    "arrest",
    "prosecution",
];

/// Return every vocabulary term that occurs in `text`, ignoring case.
///
/// Terms are plain substrings: "parent" contains "rent" and matches it.
#[must_use]
pub fn extract_legal_terms(text: &str) -> Vec<&'static str> {
    let lowered = text.to_lowercase();
    LEGAL_TERMS
        .iter()
        .copied()
        .filter(|term| lowered.contains(term))
        .collect()
}

#[cfg(test)]
#[path = "legal_terms_test.rs"]
mod tests;
