use std::time::Instant;

use actix_web::{HttpResponse, web};
use chrono::{Local, NaiveDate};
use serde::Deserialize;
use tracing::{debug, info};

use super::{PageQuery, Pages, html, resume, see_other};
use crate::components::{AttendanceForm, AttendanceView, Selection};
use crate::gateway::{AttendanceApi, EmployeeApi, Gateway};
use crate::model::AttendanceField;
use crate::ui::{self, NavTab, page_url, reload_after};

const PATH: &str = "/attendance";

/// Attendance screen. A successful mark hands the marked employee to the
/// record view through `selection`.
#[derive(Debug)]
pub struct AttendancePage {
    selection: Selection,
    form: AttendanceForm,
    view: AttendanceView,
}

impl AttendancePage {
    pub fn new(today: NaiveDate) -> Self {
        let selection = Selection::default();
        Self {
            form: AttendanceForm::new(today),
            view: AttendanceView::new(&selection),
            selection,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct MarkAttendanceForm {
    pub session: String,
    #[serde(default)]
    pub employee_id: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub status: String,
}

#[derive(Debug, Deserialize)]
pub struct SelectEmployeeForm {
    pub session: String,
    #[serde(default)]
    pub employee_id: String,
}

/// Requests a render pass has to make before the page can be shown.
#[derive(Debug, Default)]
struct Loads {
    form_employees: bool,
    view_employees: bool,
    records: Option<String>,
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

fn render(session: &str, page: &AttendancePage) -> String {
    let now = Instant::now();
    let busy = page.form.is_loading() || page.view.is_loading();
    let remaining = [page.form.flash().remaining(now)];
    let reload = reload_after(&remaining, busy).map(|secs| (secs, page_url(PATH, session)));

    ui::render_document(
        "Attendance",
        NavTab::Attendance,
        Some(session.to_string()),
        reload,
        ui::attendance::page(session, &page.form, &page.view, now),
    )
}

pub async fn show<G: Gateway + 'static>(
    gateway: web::Data<G>,
    pages: web::Data<Pages>,
    query: web::Query<PageQuery>,
) -> actix_web::Result<HttpResponse> {
    pages.leave(&query).await;
    let (id, slot) = match resume(&pages.attendance, query.session.as_deref()).await {
        Some(found) => found,
        None => pages.attendance.open(AttendancePage::new(today())).await,
    };

    let loads = {
        let mut page = slot.lock().await;
        page.form.set_today(today());
        let selection = page.selection.clone();
        page.view.sync_external(&selection);
        Loads {
            form_employees: page.form.take_employees_request(),
            view_employees: page.view.take_employees_request(),
            records: page.view.begin_fetch(),
        }
    };

    let gw = gateway.get_ref();
    let work = async {
        let form_employees = async {
            if loads.form_employees {
                Some(EmployeeApi::get_all(gw).await)
            } else {
                None
            }
        };
        let view_employees = async {
            if loads.view_employees {
                Some(EmployeeApi::get_all(gw).await)
            } else {
                None
            }
        };
        let records = async {
            match &loads.records {
                Some(employee_id) => Some(AttendanceApi::get_by_employee(gw, employee_id).await),
                None => None,
            }
        };
        futures::join!(form_employees, view_employees, records)
    };
    let Ok((form_employees, view_employees, records)) = slot.scope().run(work).await else {
        return Ok(see_other(PATH));
    };

    let mut page = slot.lock().await;
    if let Some(result) = form_employees {
        page.form.finish_employees(result);
    }
    if let Some(result) = view_employees {
        page.view.finish_employees(result);
    }
    if let (Some(employee_id), Some(result)) = (&loads.records, records) {
        page.view.finish_fetch(employee_id, result);
    }
    Ok(html(render(&id.to_string(), &page)))
}

pub async fn mark<G: Gateway + 'static>(
    gateway: web::Data<G>,
    pages: web::Data<Pages>,
    form: web::Form<MarkAttendanceForm>,
) -> actix_web::Result<HttpResponse> {
    let input = form.into_inner();
    let Some((id, slot)) = resume(&pages.attendance, Some(input.session.as_str())).await else {
        debug!(session = %input.session, "Mark for an unknown page");
        return Ok(see_other(PATH));
    };

    let draft = {
        let mut page = slot.lock().await;
        page.form.set_today(today());
        page.form.on_field_change(AttendanceField::EmployeeId, &input.employee_id);
        page.form.on_field_change(AttendanceField::Date, &input.date);
        page.form.on_field_change(AttendanceField::Status, &input.status);
        page.form.begin_submit()
    };

    if let Some(draft) = draft {
        let Ok(result) = slot.scope().run(AttendanceApi::mark(gateway.get_ref(), &draft)).await else {
            return Ok(see_other(PATH));
        };
        let mut page = slot.lock().await;
        if let Some(employee_id) = page.form.finish_submit(&draft, result, Instant::now()) {
            info!(%employee_id, date = %draft.date, status = %draft.status, "Attendance marked");
            page.selection.hand_over(employee_id);
        }
    }

    Ok(see_other(page_url(PATH, &id.to_string())))
}

/// Selection made in the record view's own select.
pub async fn select(
    pages: web::Data<Pages>,
    form: web::Form<SelectEmployeeForm>,
) -> actix_web::Result<HttpResponse> {
    let input = form.into_inner();
    let Some((id, slot)) = resume(&pages.attendance, Some(input.session.as_str())).await else {
        return Ok(see_other(PATH));
    };
    slot.lock().await.view.select(&input.employee_id);
    Ok(see_other(page_url(PATH, &id.to_string())))
}
