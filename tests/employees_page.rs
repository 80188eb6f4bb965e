mod support;

use actix_web::http::StatusCode;
use actix_web::test;
use hrms_lite::gateway::memory::{Call, InMemoryGateway};
use pretty_assertions::assert_eq;
use support::{get, location, page_uri, post_form, session_of, ui_app};

fn body_text(bytes: actix_web::web::Bytes) -> String {
    String::from_utf8(bytes.to_vec()).unwrap()
}

#[actix_web::test]
async fn empty_backend_shows_the_empty_directory() {
    let (app, gateway) = ui_app!(InMemoryGateway::new());

    let html = body_text(test::call_and_read_body(&app, get("/employees").to_request()).await);

    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("No Employees Found"));
    assert!(html.contains("Employee List (0)"));
    assert_eq!(gateway.calls(), vec![Call::ListEmployees]);
}

#[actix_web::test]
async fn creating_an_employee_refreshes_the_directory() {
    let (app, gateway) = ui_app!(InMemoryGateway::new());
    let html = body_text(test::call_and_read_body(&app, get("/employees").to_request()).await);
    let session = session_of(&html);

    let resp = test::call_service(
        &app,
        post_form(
            "/employees/create",
            &[
                ("session", session.as_str()),
                ("employee_id", "EMP001"),
                ("full_name", "John Doe"),
                ("email", "john@example.com"),
                ("department", "Engineering"),
            ],
        )
        .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&resp), page_uri("/employees", &session));

    let html = body_text(
        test::call_and_read_body(&app, get(&page_uri("/employees", &session)).to_request()).await,
    );
    assert!(html.contains("Employee created successfully"));
    assert!(html.contains("Employee List (1)"));
    assert!(html.contains("john@example.com"));
    // draft was reset after success
    assert!(html.contains("name=\"employee_id\" value=\"\""));
    assert_eq!(gateway.count_calls(|c| *c == Call::ListEmployees), 2);
    assert_eq!(gateway.employee_count(), 1);
}

#[actix_web::test]
async fn duplicate_id_keeps_the_draft_and_shows_the_backend_detail() {
    let (app, gateway) = ui_app!(InMemoryGateway::new().with_employee("EMP001", "John Doe", "Engineering"));
    let html = body_text(test::call_and_read_body(&app, get("/employees").to_request()).await);
    let session = session_of(&html);

    test::call_service(
        &app,
        post_form(
            "/employees/create",
            &[
                ("session", session.as_str()),
                ("employee_id", "EMP001"),
                ("full_name", "Johnny"),
                ("email", "johnny@example.com"),
                ("department", "Sales"),
            ],
        )
        .to_request(),
    )
    .await;

    let html = body_text(
        test::call_and_read_body(&app, get(&page_uri("/employees", &session)).to_request()).await,
    );
    assert!(html.contains("already exists"));
    assert!(html.contains("value=\"johnny@example.com\""));
    // no refresh without a successful creation
    assert_eq!(gateway.count_calls(|c| *c == Call::ListEmployees), 1);
}

#[actix_web::test]
async fn declined_delete_sends_nothing() {
    let (app, gateway) = ui_app!(InMemoryGateway::new().with_employee("EMP001", "John Doe", "Engineering"));
    let html = body_text(test::call_and_read_body(&app, get("/employees").to_request()).await);
    let session = session_of(&html);

    let confirm = body_text(
        test::call_and_read_body(
            &app,
            get(&format!("/employees/EMP001/delete?session={session}")).to_request(),
        )
        .await,
    );
    assert!(confirm.contains("This will also delete all their attendance records."));
    assert!(confirm.contains("John Doe"));

    let resp = test::call_service(
        &app,
        post_form(
            "/employees/EMP001/delete",
            &[("session", session.as_str()), ("full_name", "John Doe"), ("confirmed", "no")],
        )
        .to_request(),
    )
    .await;

    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(gateway.count_calls(|c| matches!(c, Call::DeleteEmployee(_))), 0);
    assert_eq!(gateway.employee_count(), 1);
}

#[actix_web::test]
async fn confirmed_delete_cascades_and_refetches() {
    let day = chrono::NaiveDate::from_ymd_opt(2026, 10, 16).unwrap();
    let (app, gateway) = ui_app!(
        InMemoryGateway::new()
            .with_employee("EMP001", "John Doe", "Engineering")
            .with_attendance("EMP001", day, hrms_lite::model::AttendanceStatus::Present)
    );
    let html = body_text(test::call_and_read_body(&app, get("/employees").to_request()).await);
    let session = session_of(&html);

    test::call_service(
        &app,
        post_form(
            "/employees/EMP001/delete",
            &[("session", session.as_str()), ("full_name", "John Doe"), ("confirmed", "yes")],
        )
        .to_request(),
    )
    .await;

    assert_eq!(
        gateway.calls(),
        vec![
            Call::ListEmployees,
            Call::DeleteEmployee("EMP001".to_string()),
            Call::ListEmployees,
        ]
    );
    assert_eq!(gateway.attendance_count(), 0);

    let html = body_text(
        test::call_and_read_body(&app, get(&page_uri("/employees", &session)).to_request()).await,
    );
    assert!(html.contains("and all associated records deleted successfully"));
    assert!(html.contains("No Employees Found"));
}

#[actix_web::test]
async fn failed_fetch_shows_the_error() {
    let gateway = InMemoryGateway::new();
    gateway.set_offline(true);
    let (app, _gateway) = ui_app!(gateway);

    let html = body_text(test::call_and_read_body(&app, get("/employees").to_request()).await);

    assert!(html.contains("Failed to fetch employees"));
}

#[actix_web::test]
async fn unknown_session_redirects_to_a_fresh_page() {
    let (app, gateway) = ui_app!(InMemoryGateway::new());

    let resp = test::call_service(
        &app,
        post_form(
            "/employees/create",
            &[
                ("session", "00000000-0000-0000-0000-000000000000"),
                ("employee_id", "EMP001"),
            ],
        )
        .to_request(),
    )
    .await;

    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&resp), "/employees");
    assert!(gateway.calls().is_empty());
}

#[actix_web::test]
async fn navigating_away_ends_the_page() {
    let (app, _gateway) = ui_app!(InMemoryGateway::new());
    let html = body_text(test::call_and_read_body(&app, get("/employees").to_request()).await);
    let session = session_of(&html);

    test::call_service(&app, get(&format!("/attendance?from={session}")).to_request()).await;

    let resp = test::call_service(
        &app,
        post_form(
            "/employees/create",
            &[("session", session.as_str()), ("employee_id", "EMP001")],
        )
        .to_request(),
    )
    .await;
    assert_eq!(location(&resp), "/employees");
}
