use super::*;
use serde_json::json;

#[test]
fn page_decodes_rows_and_total_pages() {
    let page: Page<Supervision> = serde_json::from_value(json!({
        "rows": [{ "Staff": { "ID": 4, "Name": "Dr Tan", "Email": "tan@u.edu" }, "ModuleID": 2 }],
        "totalPages": 3
    }))
    .unwrap();
    assert_eq!(page.total_pages, Some(3));
    assert_eq!(page.rows.len(), 1);
    assert_eq!(page.rows[0].staff.name, "Dr Tan");
    assert_eq!(page.rows[0].module_id, Some(2));
}

#[test]
fn page_defaults_missing_fields() {
    let page: Page<Rubric> = serde_json::from_value(json!({})).unwrap();
    assert!(page.rows.is_empty());
    assert_eq!(page.total_pages, None);
}

#[test]
fn pairing_decodes_nested_student() {
    let pairing: Pairing = serde_json::from_value(json!({
        "ID": 11,
        "Student": { "ID": 42 },
        "MarkerID": 7
    }))
    .unwrap();
    assert_eq!(pairing.id, 11);
    assert_eq!(pairing.student.id, 42);
    assert_eq!(pairing.student.name, None);
    assert_eq!(pairing.marker_id, Some(7));
}

#[test]
fn rubric_decodes_mark_range() {
    let rubric: Rubric = serde_json::from_value(json!({
        "ID": 3,
        "QuestionID": 9,
        "Criteria": "Clarity",
        "Description": "Is the report readable?",
        "MinMark": 0,
        "MaxMark": 10
    }))
    .unwrap();
    assert_eq!(rubric.question_id, Some(9));
    assert_eq!(rubric.criteria, "Clarity");
    assert!((rubric.max_mark - 10.0).abs() < f64::EPSILON);
}

#[test]
fn grade_post_omits_undrafted_fields() {
    let post = GradePost { rubric_id: 5, pairing_id: 1, grade: Some(7.0), comment: None };
    assert_eq!(
        serde_json::to_value(&post).unwrap(),
        json!({ "RubricID": 5, "PairingID": 1, "Grade": 7.0 })
    );
}

#[test]
fn login_request_uses_server_field_names() {
    let body = LoginRequest { email: "a@u.edu".to_owned(), password: "pw".to_owned() };
    assert_eq!(serde_json::to_value(&body).unwrap(), json!({ "Email": "a@u.edu", "Password": "pw" }));
}

#[test]
fn page_of_rows_without_default_decodes() {
    let page: Page<Grade> = serde_json::from_value(json!({
        "rows": [{ "RubricID": 3, "PairingID": 1, "Grade": 6.5 }]
    }))
    .unwrap();
    assert_eq!(page.rows[0].grade, Some(6.5));
    assert_eq!(page.total_pages, None);
}
