use super::*;

#[test]
fn review_scope_needs_every_part() {
    assert_eq!(
        review_scope(Some(2), Some(9), Some(41)),
        Some(ReviewScope { module_id: 2, question_id: 9, marker_id: 41 })
    );
    assert_eq!(review_scope(None, Some(9), Some(41)), None);
    assert_eq!(review_scope(Some(2), None, Some(41)), None);
    assert_eq!(review_scope(Some(2), Some(9), None), None);
}

#[test]
fn scope_for_marker_filters_pairings_and_rubrics() {
    let scope = review_scope(Some(2), Some(9), Some(41)).unwrap();
    let mut state = GradingState::default();
    state.set_scope(scope.marker_id, scope.question_id);
    assert_eq!(state.pairings.query().pairs(), vec![("MarkerID".to_owned(), "41".to_owned())]);
    assert_eq!(state.rubrics.query().pairs(), vec![("QuestionID".to_owned(), "9".to_owned())]);
}
