use super::*;

fn titles(precedents: &[Precedent]) -> Vec<&str> {
    precedents.iter().map(|p| p.title.as_str()).collect()
}

#[test]
fn short_query_returns_nothing() {
    let table = PrecedentTable::builtin();
    assert!(search_precedents("eviction", &table).is_empty());
    assert!(search_precedents("   rent    ", &table).is_empty());
}

#[test]
fn short_query_guard_counts_trimmed_chars() {
    let table = PrecedentTable::builtin();
    // Exactly ten characters passes the guard.
    assert_eq!(search_precedents("  eviction!!  ", &table).len(), 2);
}

#[test]
fn empty_query_returns_nothing() {
    assert!(search_precedents("", &PrecedentTable::builtin()).is_empty());
}

#[test]
fn eviction_and_rent_query() {
    let table = PrecedentTable::builtin();
    let cases = search_precedents("I received an eviction notice because I owe two months rent", &table);
    assert_eq!(
        titles(&cases),
        vec![
            "Samaraditya Pal v. Smt. Meera Pal",
            "Atma Ram Properties (P) Ltd. v. Federal Motors (P) Ltd.",
            "Sarup Singh Gupta v. S. Jagdish Singh",
        ]
    );
}

#[test]
fn results_are_capped_at_five() {
    let table = PrecedentTable::builtin();
    let cases = search_precedents("eviction over unpaid rent, my wage was withheld and criminal charges", &table);
    assert_eq!(cases.len(), MAX_RESULTS);
    assert_eq!(cases[4].title, "Workmen v. Management of Reptakos Brett");
}

#[test]
fn family_category_is_unreachable_from_text() {
    let table = PrecedentTable::builtin();
    let cases = search_precedents("divorce, custody, alimony and marriage problems in my family", &table);
    assert!(cases.is_empty());
}

#[test]
fn family_category_matches_when_term_supplied_directly() {
    let cases = match_precedents(&["family"], &PrecedentTable::builtin());
    assert_eq!(cases.len(), 2);
    assert_eq!(cases[0].citation, "(2017) 8 SCC 746");
}

#[test]
fn containment_works_in_both_directions() {
    let table = PrecedentTable::new()
        .with_category("prop", vec![Precedent::new("A", "c1", "s")])
        .with_category("property law", vec![Precedent::new("B", "c2", "s")]);
    let cases = match_precedents(&["property"], &table);
    assert_eq!(titles(&cases), vec!["A", "B"]);
}

#[test]
fn overlapping_categories_deduplicate_by_title() {
    let shared = Precedent::new("Shared v. Title", "(2000) 1 SCC 1", "first copy");
    let table = PrecedentTable::new()
        .with_category("property", vec![shared.clone(), Precedent::new("Only Property", "c", "s")])
        .with_category("prop", vec![Precedent::new("Shared v. Title", "other", "second copy")]);
    let cases = match_precedents(&["property", "ownership"], &table);
    assert_eq!(titles(&cases), vec!["Shared v. Title", "Only Property"]);
    assert_eq!(cases[0].summary, "first copy");
}

#[test]
fn repeated_terms_do_not_duplicate() {
    let cases = match_precedents(&["rent", "rent"], &PrecedentTable::builtin());
    assert_eq!(cases.len(), 1);
}

#[test]
fn no_terms_no_precedents() {
    assert!(match_precedents(&[], &PrecedentTable::builtin()).is_empty());
}

#[test]
fn builtin_table_declaration_order() {
    let table = PrecedentTable::builtin();
    let names: Vec<&str> = table.categories().map(|(name, _)| name).collect();
    assert_eq!(names, vec!["eviction", "rent", "wage", "property", "family", "criminal"]);
}
