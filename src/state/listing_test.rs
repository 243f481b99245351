use super::*;

fn page_of(rows: &[&'static str], total_pages: u32) -> Result<Page<&'static str>, ApiError> {
    Ok(Page { rows: rows.to_vec(), total_pages: Some(total_pages) })
}

fn module_filters(module_id: i64) -> Filters {
    Filters::new().with("moduleId", module_id)
}

// =============================================================
// ListQuery
// =============================================================

#[test]
fn paginated_query_pairs_include_page_and_limit() {
    let list = ListState::<()>::paginated(module_filters(4), 15);
    assert_eq!(
        list.query().pairs(),
        vec![
            ("moduleId".to_owned(), "4".to_owned()),
            ("page".to_owned(), "1".to_owned()),
            ("limit".to_owned(), "15".to_owned()),
        ]
    );
}

#[test]
fn unpaginated_query_omits_page_and_limit() {
    let query = ListQuery::unpaginated(Filters::new().with("MarkerID", 7));
    assert_eq!(query.pairs(), vec![("MarkerID".to_owned(), "7".to_owned())]);
}

#[test]
fn page_size_is_at_least_one() {
    let list = ListState::<()>::paginated(Filters::new(), 0);
    assert_eq!(list.query().page, Some(PageRequest { page: 1, limit: 1 }));
}

// =============================================================
// Fetch lifecycle
// =============================================================

#[test]
fn begin_fetch_clears_previous_rows() {
    let mut list = ListState::paginated(module_filters(1), 15);
    let ticket = list.begin_fetch();
    list.apply(ticket, page_of(&["a", "b"], 1));

    list.begin_fetch();
    assert!(list.rows.is_empty());
    assert!(list.loading);
}

#[test]
fn apply_latest_ticket_replaces_rows() {
    let mut list = ListState::paginated(module_filters(1), 15);
    let ticket = list.begin_fetch();
    assert!(list.apply(ticket, page_of(&["a", "b"], 3)));
    assert_eq!(list.rows, vec!["a", "b"]);
    assert_eq!(list.total_pages, Some(3));
    assert!(!list.loading);
}

#[test]
fn stale_response_never_overwrites_newer_one() {
    let mut list = ListState::paginated(module_filters(1), 15);
    let old = list.begin_fetch();
    list.set_filters(module_filters(2));
    let new = list.begin_fetch();

    assert!(list.apply(new, page_of(&["module-2"], 1)));
    assert!(!list.apply(old, page_of(&["module-1"], 1)));
    assert_eq!(list.rows, vec!["module-2"]);
}

#[test]
fn stale_response_arriving_first_is_dropped_while_loading() {
    let mut list = ListState::paginated(module_filters(1), 15);
    let old = list.begin_fetch();
    let new = list.begin_fetch();

    assert!(!list.apply(old, page_of(&["old"], 1)));
    assert!(list.rows.is_empty());
    assert!(list.loading);
    assert!(list.apply(new, page_of(&["new"], 1)));
    assert_eq!(list.rows, vec!["new"]);
}

#[test]
fn failed_fetch_records_error_and_stops_loading() {
    let mut list = ListState::<&str>::paginated(module_filters(1), 15);
    let ticket = list.begin_fetch();
    list.apply(ticket, Err(ApiError::Status(500)));
    assert!(!list.loading);
    assert!(list.rows.is_empty());
    assert_eq!(list.error.as_deref(), Some("server responded with status 500"));

    let retry = list.begin_fetch();
    assert!(list.error.is_none());
    list.apply(retry, page_of(&["ok"], 1));
    assert!(list.error.is_none());
}

// =============================================================
// Controls
// =============================================================

#[test]
fn selecting_page_two_of_three_reissues_query_for_page_two() {
    let mut list = ListState::paginated(module_filters(1), 15);
    let ticket = list.begin_fetch();
    list.apply(ticket, page_of(&["a"], 3));
    assert_eq!(list.page(), 1);

    assert!(list.set_page(2));
    assert_eq!(list.page(), 2);
    assert_eq!(list.query().page, Some(PageRequest { page: 2, limit: 15 }));
}

#[test]
fn set_page_to_current_page_is_not_a_change() {
    let mut list = ListState::<()>::paginated(Filters::new(), 15);
    assert!(!list.set_page(1));
}

#[test]
fn set_page_does_not_validate_range() {
    let mut list = ListState::<()>::paginated(Filters::new(), 15);
    assert!(list.set_page(99));
    assert_eq!(list.query().page, Some(PageRequest { page: 99, limit: 15 }));
}

#[test]
fn filter_change_resets_page() {
    let mut list = ListState::<()>::paginated(module_filters(1), 15);
    list.set_page(3);
    assert!(list.set_filters(module_filters(2)));
    assert_eq!(list.page(), 1);
    assert!(!list.set_filters(module_filters(2)));
}

#[test]
fn pagination_shows_only_for_multiple_pages() {
    let mut list = ListState::paginated(module_filters(1), 15);
    assert!(!list.shows_pagination());
    let ticket = list.begin_fetch();
    list.apply(ticket, page_of(&["a"], 1));
    assert!(!list.shows_pagination());
    let ticket = list.begin_fetch();
    list.apply(ticket, page_of(&["a"], 3));
    assert!(list.shows_pagination());
}

#[test]
fn show_full_list_permanently_suppresses_pagination() {
    let mut list = ListState::paginated(module_filters(1), 15);
    let ticket = list.begin_fetch();
    list.apply(ticket, page_of(&["a"], 3));

    list.show_full_list();
    assert!(list.is_unpaginated());
    assert_eq!(list.query().page, None);

    let ticket = list.begin_fetch();
    list.apply(ticket, page_of(&["a", "b", "c"], 3));
    list.set_page(2);
    list.set_filters(module_filters(5));
    assert!(!list.shows_pagination());
    assert_eq!(list.query().page, None);
}

#[test]
fn unpaginated_constructor_never_pages() {
    let list = ListState::<()>::unpaginated(Filters::new().with("QuestionID", 9));
    assert!(list.is_unpaginated());
    assert_eq!(list.query(), ListQuery::unpaginated(Filters::new().with("QuestionID", 9)));
}
