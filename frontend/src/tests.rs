use crate::state::CertificationBoard;
use crate::Route;
use pretty_assertions::assert_eq;
use shared::{
    CertificationCategory, CertificationEdit, Completed, CompletedInput, DirectoryRepository,
    MockDirectory,
};
use std::rc::Rc;
use yew::Reducible;
use yew_router::Routable;

fn seeded_board() -> Rc<CertificationBoard> {
    Rc::new(CertificationBoard::new(MockDirectory::seeded().certifications()))
}

#[test]
fn test_route_recognition() {
    assert_eq!(Route::recognize("/"), Some(Route::Home));
    assert_eq!(Route::recognize("/alumni-management"), Some(Route::AlumniManagement));
    assert_eq!(
        Route::recognize("/content-management/edit-events"),
        Some(Route::EditEvents)
    );
    assert_eq!(
        Route::recognize("/analytics-and-report/certifications/2"),
        Some(Route::CertificationCredentials { id: "2".to_string() })
    );
}

#[test]
fn test_unknown_paths_fall_back_to_not_found() {
    assert_eq!(Route::recognize("/does-not-exist"), Some(Route::NotFound));
    assert_eq!(Route::NotFound.section(), Route::AlumniManagement);
}

#[test]
fn test_non_numeric_detail_id_still_routes() {
    // Resolution happens on the page, which renders the not-found placeholder
    assert_eq!(
        Route::recognize("/analytics-and-report/certifications/abc"),
        Some(Route::CertificationCredentials { id: "abc".to_string() })
    );
}

#[test]
fn test_route_sections() {
    assert_eq!(Route::ManageJobPost.section(), Route::ContentManagement);
    assert_eq!(
        Route::CertificationCredentials { id: "1".to_string() }.section(),
        Route::AnalyticsAndReport
    );
    assert_eq!(Route::Home.section(), Route::AlumniManagement);
}

#[test]
fn test_route_paths() {
    assert_eq!(Route::AnalyticsAndReport.to_path(), "/analytics-and-report");
    assert_eq!(
        Route::CertificationCredentials { id: "3".to_string() }.to_path(),
        "/analytics-and-report/certifications/3"
    );
}

#[test]
fn test_board_set_category_changes_only_target() {
    let board = seeded_board();
    let next = board.clone().reduce(CertificationEdit::SetCategory {
        id: 2,
        category: CertificationCategory::Sa,
    });

    assert_eq!(next.records[1].category, CertificationCategory::Sa);
    assert_eq!(next.records[0], board.records[0]);
    assert_eq!(next.records[2], board.records[2]);
}

#[test]
fn test_board_completed_coercion() {
    let board = seeded_board();

    let next = board.reduce(CertificationEdit::SetCompleted {
        id: 1,
        input: CompletedInput::from("-5"),
    });
    assert_eq!(next.records[0].completed, Completed::Count(0));

    let next = next.reduce(CertificationEdit::SetCompleted {
        id: 1,
        input: CompletedInput::from(""),
    });
    assert_eq!(next.records[0].completed, Completed::Cleared);

    let next = next.reduce(CertificationEdit::SetCompleted {
        id: 1,
        input: CompletedInput::from("7"),
    });
    assert_eq!(next.records[0].completed, Completed::Count(7));
}

#[test]
fn test_board_unknown_id_returns_same_state() {
    let board = seeded_board();
    let next = board.clone().reduce(CertificationEdit::SetCategory {
        id: 99,
        category: CertificationCategory::Qa,
    });

    assert!(Rc::ptr_eq(&board, &next));
}
