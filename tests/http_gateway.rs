use actix_web::{App, HttpResponse, HttpServer, web};
use hrms_lite::gateway::{AttendanceApi, EmployeeApi, HealthApi, HttpGateway};
use hrms_lite::model::{AttendanceDraft, AttendanceStatus, EmployeeDraft};
use pretty_assertions::assert_eq;
use reqwest::Url;
use serde_json::{Value, json};

async fn list_employees() -> HttpResponse {
    HttpResponse::Ok().json(json!([
        {
            "id": 1,
            "employee_id": "EMP001",
            "full_name": "John Doe",
            "email": "john@example.com",
            "department": "Engineering"
        }
    ]))
}

async fn get_employee(path: web::Path<String>) -> HttpResponse {
    match path.as_str() {
        "EMP001" => HttpResponse::Ok().json(json!({
            "id": 1,
            "employee_id": "EMP001",
            "full_name": "John Doe",
            "email": "john@example.com",
            "department": "Engineering"
        })),
        "EMP500" => HttpResponse::InternalServerError().body("boom"),
        other => HttpResponse::NotFound()
            .json(json!({ "detail": format!("Employee with ID '{other}' not found") })),
    }
}

async fn create_employee(body: web::Json<Value>) -> HttpResponse {
    if body["employee_id"] == "EMP001" {
        return HttpResponse::BadRequest()
            .json(json!({ "detail": "Employee ID 'EMP001' already exists" }));
    }
    HttpResponse::Created().json(json!({
        "message": "Employee created successfully",
        "detail": { "employee_id": body["employee_id"] }
    }))
}

async fn delete_employee() -> HttpResponse {
    HttpResponse::InternalServerError().body("boom")
}

async fn mark_attendance() -> HttpResponse {
    HttpResponse::UnprocessableEntity().json(json!({
        "detail": [
            { "loc": ["body", "date"], "msg": "invalid date format", "type": "value_error" },
            { "loc": ["body", "status"], "msg": "unexpected value", "type": "value_error" }
        ]
    }))
}

async fn employee_attendance(path: web::Path<String>) -> HttpResponse {
    match path.as_str() {
        "EMP001" => HttpResponse::Ok().json(json!([
            { "id": 2, "employee_id": "EMP001", "date": "2026-10-16", "status": "Absent" },
            { "id": 1, "employee_id": "EMP001", "date": "2026-10-15", "status": "Present" }
        ])),
        _ => HttpResponse::Ok().json(json!([])),
    }
}

async fn all_attendance() -> HttpResponse {
    HttpResponse::Ok().json(json!([
        {
            "id": 3,
            "employee_id": "EMP002",
            "full_name": "Jane Roe",
            "date": "2026-10-16",
            "status": "Present"
        },
        {
            "id": 1,
            "employee_id": "EMP001",
            "full_name": "John Doe",
            "date": "2026-10-15",
            "status": "Absent"
        }
    ]))
}

async fn health() -> HttpResponse {
    HttpResponse::Ok().json(json!({ "status": "healthy", "service": "HRMS Lite API" }))
}

fn backend(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/employees/")
            .route(web::get().to(list_employees))
            .route(web::post().to(create_employee)),
    )
    .service(
        web::resource("/employees/{employee_id}")
            .route(web::get().to(get_employee))
            .route(web::delete().to(delete_employee)),
    )
    .service(
        web::resource("/attendance/")
            .route(web::get().to(all_attendance))
            .route(web::post().to(mark_attendance)),
    )
    .service(web::resource("/attendance/{employee_id}").route(web::get().to(employee_attendance)))
    .service(web::resource("/health").route(web::get().to(health)));
}

/// Serves the mock backend on an ephemeral port and returns its base URL.
fn spawn_backend() -> Url {
    let server = HttpServer::new(|| App::new().configure(backend))
        .workers(1)
        .bind(("127.0.0.1", 0))
        .expect("bind mock backend");
    let addr = server.addrs()[0];
    actix_web::rt::spawn(server.run());
    Url::parse(&format!("http://{addr}")).unwrap()
}

#[actix_web::test]
async fn lists_employees() {
    let gateway = HttpGateway::new(spawn_backend());

    let employees = EmployeeApi::get_all(&gateway).await.unwrap();

    assert_eq!(employees.len(), 1);
    assert_eq!(employees[0].employee_id, "EMP001");
    assert_eq!(employees[0].department, "Engineering");
}

#[actix_web::test]
async fn looks_up_one_employee() {
    let gateway = HttpGateway::new(spawn_backend());

    let employee = gateway.get_by_id("EMP001").await.unwrap();

    assert_eq!(employee.full_name, "John Doe");
    assert_eq!(employee.email, "john@example.com");
}

#[actix_web::test]
async fn missing_employee_reports_the_backend_detail() {
    let gateway = HttpGateway::new(spawn_backend());

    let err = gateway.get_by_id("EMP404").await.unwrap_err();

    assert_eq!(err.message, "Employee with ID 'EMP404' not found");
}

#[actix_web::test]
async fn employee_lookup_without_detail_uses_the_fallback() {
    let gateway = HttpGateway::new(spawn_backend());

    let err = gateway.get_by_id("EMP500").await.unwrap_err();

    assert_eq!(err.message, "Failed to fetch employee");
}

#[actix_web::test]
async fn create_returns_the_backend_message() {
    let gateway = HttpGateway::new(spawn_backend());
    let draft = EmployeeDraft {
        employee_id: "EMP002".to_string(),
        full_name: "Jane Roe".to_string(),
        email: "jane@example.com".to_string(),
        department: "Sales".to_string(),
    };

    let response = gateway.create(&draft).await.unwrap();

    assert_eq!(response.message, "Employee created successfully");
}

#[actix_web::test]
async fn string_detail_becomes_the_error_message() {
    let gateway = HttpGateway::new(spawn_backend());
    let draft = EmployeeDraft {
        employee_id: "EMP001".to_string(),
        ..EmployeeDraft::default()
    };

    let err = gateway.create(&draft).await.unwrap_err();

    assert_eq!(err.message, "Employee ID 'EMP001' already exists");
}

#[actix_web::test]
async fn validation_details_are_joined() {
    let gateway = HttpGateway::new(spawn_backend());
    let draft = AttendanceDraft {
        employee_id: "EMP001".to_string(),
        date: chrono::NaiveDate::from_ymd_opt(2026, 10, 16).unwrap(),
        status: AttendanceStatus::Present,
    };

    let err = gateway.mark(&draft).await.unwrap_err();

    assert_eq!(err.message, "invalid date format; unexpected value");
}

#[actix_web::test]
async fn error_without_detail_uses_the_operation_fallback() {
    let gateway = HttpGateway::new(spawn_backend());

    let err = gateway.delete("EMP001").await.unwrap_err();

    assert_eq!(err.message, "Failed to delete employee");
}

#[actix_web::test]
async fn attendance_records_decode_and_keep_backend_order() {
    let gateway = HttpGateway::new(spawn_backend());

    let records = gateway.get_by_employee("EMP001").await.unwrap();
    let empty = gateway.get_by_employee("EMP404").await.unwrap();

    assert_eq!(records.len(), 2);
    assert_eq!(records[0].status, AttendanceStatus::Absent);
    assert_eq!(records[0].weekday_name(), "Friday");
    assert!(empty.is_empty());
}

#[actix_web::test]
async fn all_attendance_carries_employee_names() {
    let gateway = HttpGateway::new(spawn_backend());

    let records = AttendanceApi::get_all(&gateway).await.unwrap();

    assert_eq!(records.len(), 2);
    assert_eq!(records[0].employee_id, "EMP002");
    assert_eq!(records[0].full_name.as_deref(), Some("Jane Roe"));
    assert_eq!(records[1].status, AttendanceStatus::Absent);
    assert_eq!(records[1].full_name.as_deref(), Some("John Doe"));
}

#[actix_web::test]
async fn health_reports_the_service() {
    let gateway = HttpGateway::new(spawn_backend());

    let health = gateway.health().await.unwrap();

    assert_eq!(health.status, "healthy");
    assert_eq!(health.service, "HRMS Lite API");
}

#[actix_web::test]
async fn unreachable_backend_uses_the_fallback() {
    // nothing listens on the discard port
    let gateway = HttpGateway::new(Url::parse("http://127.0.0.1:9").unwrap());

    let err = EmployeeApi::get_all(&gateway).await.unwrap_err();

    assert_eq!(err.message, "Failed to fetch employees");
    let err = AttendanceApi::get_all(&gateway).await.unwrap_err();
    assert_eq!(err.message, "Failed to fetch attendance records");
}
