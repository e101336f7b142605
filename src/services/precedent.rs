//! Precedent matching: legal terms → case-law references.
//!
//! DESIGN
//! ======
//! The category table is plain data, built once at startup and shared behind
//! an `Arc` in `AppState`. Matching is a pure function of (query, table) so
//! tests can inject small tables of their own.
//!
//! A term selects a category when either string contains the other. Results
//! keep encounter order (terms outer, categories inner), drop repeated titles,
//! and are capped at [`MAX_RESULTS`].
//!
//! KNOWN GAP
//! =========
//! No vocabulary term relates to the `family` category, so its precedents are
//! never returned for free-text queries. Left as-is pending product guidance.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::legal_terms::extract_legal_terms;

/// Maximum number of precedents returned for one query.
pub const MAX_RESULTS: usize = 5;

/// Queries shorter than this (after trimming) return no precedents.
pub const MIN_QUERY_CHARS: usize = 10;

/// A reference legal case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Precedent {
    pub title: String,
    pub citation: String,
    #[serde(default)]
    pub summary: String,
}

impl Precedent {
    #[must_use]
    pub fn new(title: &str, citation: &str, summary: &str) -> Self {
        Self { title: title.into(), citation: citation.into(), summary: summary.into() }
    }
}

/// Ordered category → precedents mapping. Declaration order is significant.
#[derive(Debug, Clone, Default)]
pub struct PrecedentTable {
    categories: Vec<(String, Vec<Precedent>)>,
}

impl PrecedentTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a category. Later categories are visited after earlier ones.
    #[must_use]
    pub fn with_category(mut self, name: &str, precedents: Vec<Precedent>) -> Self {
        self.categories.push((name.to_string(), precedents));
        self
    }

    /// Iterate categories in declaration order.
    pub fn categories(&self) -> impl Iterator<Item = (&str, &[Precedent])> {
        self.categories
            .iter()
            .map(|(name, precedents)| (name.as_str(), precedents.as_slice()))
    }

    /// The built-in table of Indian case law.
    #[must_use]
    pub fn builtin() -> Self {
        Self::new()
            .with_category(
                "eviction",
                vec![
                    Precedent::new(
                        "Samaraditya Pal v. Smt. Meera Pal",
                        "(2019) 8 SCC 714",
                        "Case regarding eviction notice requirements and tenant rights",
                    ),
                    Precedent::new(
                        "Atma Ram Properties (P) Ltd. v. Federal Motors (P) Ltd.",
                        "(2005) 1 SCC 705",
                        "Landmark case on landlord's right to evict for personal use",
                    ),
                ],
            )
            .with_category(
                "rent",
                vec![Precedent::new(
                    "Sarup Singh Gupta v. S. Jagdish Singh",
                    "(2006) 4 SCC 551",
                    "Case regarding rent control and fair rent determination",
                )],
            )
            .with_category(
                "wage",
                vec![
                    Precedent::new(
                        "People's Union for Democratic Rights v. Union of India",
                        "AIR 1982 SC 1473",
                        "Landmark case on minimum wage rights and labor laws",
                    ),
                    Precedent::new(
                        "Workmen v. Management of Reptakos Brett",
                        "AIR 1992 SC 504",
                        "Case regarding fair wages and living wage standards",
                    ),
                ],
            )
            .with_category(
                "property",
                vec![
                    Precedent::new(
                        "Ashok Kapil v. Sana Ullah",
                        "(1996) 6 SCC 342",
                        "Case regarding property ownership disputes and evidence requirements",
                    ),
                    Precedent::new(
                        "R. Rajagopal Reddy v. Padmini Chandrasekharan",
                        "(1995) 2 SCC 630",
                        "Case on property title disputes and documentation",
                    ),
                ],
            )
            .with_category(
                "family",
                vec![
                    Precedent::new(
                        "Amardeep Singh v. Harveen Kaur",
                        "(2017) 8 SCC 746",
                        "Case regarding mutual consent divorce and waiting period",
                    ),
                    Precedent::new(
                        "Shamima Farooqui v. Shahid Khan",
                        "(2015) 5 SCC 705",
                        "Case on maintenance rights in divorce proceedings",
                    ),
                ],
            )
            .with_category(
                "criminal",
                vec![
                    Precedent::new(
                        "Arnesh Kumar v. State of Bihar",
                        "(2014) 8 SCC 273",
                        "Case regarding arrest procedures and bail in criminal cases",
                    ),
                    Precedent::new(
                        "Lalita Kumari v. Govt. of U.P.",
                        "(2014) 2 SCC 1",
                        "Case on mandatory FIR registration for cognizable offenses",
                    ),
                ],
            )
    }
}

/// Collect precedents for already-extracted terms.
#[must_use]
pub fn match_precedents(terms: &[&str], table: &PrecedentTable) -> Vec<Precedent> {
    let mut seen = HashSet::new();
    let mut matched = Vec::new();

    for &term in terms {
        for (category, precedents) in table.categories() {
            if !(term.contains(category) || category.contains(term)) {
                continue;
            }
            for precedent in precedents {
                if matched.len() == MAX_RESULTS {
                    return matched;
                }
                if seen.insert(precedent.title.as_str()) {
                    matched.push(precedent.clone());
                }
            }
        }
    }

    matched
}

/// Full search: short-query guard, term extraction, then matching.
#[must_use]
pub fn search_precedents(query: &str, table: &PrecedentTable) -> Vec<Precedent> {
    if query.trim().chars().count() < MIN_QUERY_CHARS {
        return Vec::new();
    }
    let terms = extract_legal_terms(query);
    let precedents = match_precedents(&terms, table);
    debug!(?terms, matched = precedents.len(), "precedent search");
    precedents
}

#[cfg(test)]
#[path = "precedent_test.rs"]
mod tests;
