use actix_web::{HttpResponse, Responder, web};
use serde_json::json;
use tracing::warn;

use super::{PageQuery, Pages, html};
use crate::gateway::{AttendanceApi, EmployeeApi, Gateway, HealthApi};
use crate::ui::{self, NavTab, home::Overview};

/// Landing page with the backend status and record totals. Failures only
/// blank out the affected figure.
pub async fn show<G: Gateway + 'static>(
    gateway: web::Data<G>,
    pages: web::Data<Pages>,
    query: web::Query<PageQuery>,
) -> actix_web::Result<HttpResponse> {
    pages.leave(&query).await;

    let gw = gateway.get_ref();
    let (health, employees, attendance) = futures::join!(
        HealthApi::health(gw),
        EmployeeApi::get_all(gw),
        AttendanceApi::get_all(gw)
    );
    if let Err(err) = &health {
        warn!(error = %err, "Backend health check failed");
    }

    let overview = Overview {
        health: health.ok(),
        employees: employees.ok().map(|list| list.len()),
        attendance: attendance.ok().map(|list| list.len()),
    };
    let body = ui::render_document("Home", NavTab::Home, None, None, ui::home::page(overview));
    Ok(html(body))
}

/// Liveness of this server, independent of the backend.
pub async fn healthz() -> impl Responder {
    HttpResponse::Ok().json(json!({ "status": "ok", "service": "hrms-lite" }))
}
