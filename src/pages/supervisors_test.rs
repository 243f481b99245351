use super::*;
use crate::error::ApiError;
use crate::net::types::{Page, Staff};

fn supervision(id: i64) -> Supervision {
    Supervision {
        staff: Staff { id, name: format!("Staff {id}"), email: format!("s{id}@uni.test") },
        module_id: Some(3),
    }
}

#[test]
fn supervision_filters_use_module_id_key() {
    let pairs = ListState::<Supervision>::paginated(supervision_filters(3), 15).query().pairs();
    assert_eq!(
        pairs,
        vec![
            ("moduleId".to_owned(), "3".to_owned()),
            ("page".to_owned(), "1".to_owned()),
            ("limit".to_owned(), "15".to_owned()),
        ]
    );
}

#[test]
fn moving_to_another_module_returns_to_first_page() {
    let mut list = ListState::<Supervision>::paginated(supervision_filters(3), 15);
    list.set_page(4);
    assert!(list.set_filters(supervision_filters(5)));
    assert_eq!(list.page(), 1);
    assert!(!list.set_filters(supervision_filters(5)));
}

#[test]
fn page_response_drives_pagination_bar() {
    let mut list = ListState::paginated(supervision_filters(3), 15);
    let ticket = list.begin_fetch();
    list.apply(ticket, Ok(Page { rows: vec![supervision(1), supervision(2)], total_pages: Some(3) }));
    assert!(list.shows_pagination());

    list.show_full_list();
    assert!(!list.shows_pagination());
    assert_eq!(list.query().pairs(), vec![("moduleId".to_owned(), "3".to_owned())]);
}

#[test]
fn forbidden_response_renders_message() {
    let mut list = ListState::<Supervision>::paginated(supervision_filters(3), 15);
    let ticket = list.begin_fetch();
    list.apply(ticket, Err(ApiError::Status(403)));
    assert_eq!(list.error.as_deref(), Some("You are not allowed to view this."));
    assert!(list.rows.is_empty());
}
