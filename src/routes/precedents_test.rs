use super::*;
use crate::services::precedent::PrecedentTable;
use crate::state::test_helpers;

#[tokio::test]
async fn search_short_query_is_empty() {
    let state = test_helpers::test_app_state();
    let Json(resp) = search(State(state), Json(SearchBody { query: " rent ".into() })).await;
    assert!(resp.cases.is_empty());
}

#[tokio::test]
async fn search_uses_injected_table() {
    let table = PrecedentTable::new().with_category("wage", vec![Precedent::new("W v. X", "2020 SC 1", "Unpaid wages.")]);
    let state = AppState::new(table, None);

    let Json(resp) = search(State(state), Json(SearchBody { query: "my wage was withheld".into() })).await;

    assert_eq!(resp.cases, vec![Precedent::new("W v. X", "2020 SC 1", "Unpaid wages.")]);
}

#[test]
fn search_body_missing_query_defaults_empty() {
    let body: SearchBody = serde_json::from_str("{}").unwrap();
    assert!(body.query.is_empty());
}

#[tokio::test]
async fn terms_in_keyword_order() {
    let body = TermsBody { text: "The Landlord filed for EVICTION".into() };
    let Json(resp) = terms(Json(body)).await;
    assert_eq!(resp.terms, vec!["eviction", "landlord"]);
}
