use super::*;

#[test]
fn supervisors_path_matches_admin_route() {
    assert_eq!(supervisors_path(12), "/admin/module/12/supervisors");
}
