use std::time::Instant;

use actix_web::{HttpResponse, web};
use serde::Deserialize;
use tracing::{debug, info};

use super::{PageQuery, Pages, html, resume, see_other};
use crate::components::employee_directory::delete_prompt;
use crate::components::{EmployeeDirectory, EmployeeForm, RefreshTrigger};
use crate::gateway::{EmployeeApi, Gateway};
use crate::model::EmployeeField;
use crate::ui::{self, NavTab, page_url, reload_after};
use crate::utils::page_store::PageSlot;

const PATH: &str = "/employees";

/// Employees screen: the creation form and the directory, wired through a
/// refresh trigger bumped after every successful creation.
#[derive(Debug, Default)]
pub struct EmployeesPage {
    refresh: RefreshTrigger,
    form: EmployeeForm,
    directory: EmployeeDirectory,
}

#[derive(Debug, Deserialize)]
pub struct CreateEmployeeForm {
    pub session: String,
    #[serde(default)]
    pub employee_id: String,
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub department: String,
}

#[derive(Debug, Deserialize)]
pub struct DeleteEmployeeForm {
    pub session: String,
    #[serde(default)]
    pub full_name: String,
    pub confirmed: Option<String>,
}

/// Directory fetch bound to the page scope. `false` when the page went away.
async fn fetch_directory<G: Gateway>(gateway: &G, slot: &PageSlot<EmployeesPage>) -> bool {
    let Ok(result) = slot.scope().run(EmployeeApi::get_all(gateway)).await else {
        return false;
    };
    slot.lock().await.directory.finish_fetch(result);
    true
}

fn render(session: &str, page: &EmployeesPage) -> String {
    let now = Instant::now();
    let busy = page.form.is_loading() || page.directory.is_loading();
    let remaining = [
        page.form.flash().remaining(now),
        page.directory.flash().remaining(now),
    ];
    let reload = reload_after(&remaining, busy).map(|secs| (secs, page_url(PATH, session)));

    ui::render_document(
        "Employees",
        NavTab::Employees,
        Some(session.to_string()),
        reload,
        ui::employees::page(session, &page.form, &page.directory, now),
    )
}

pub async fn show<G: Gateway + 'static>(
    gateway: web::Data<G>,
    pages: web::Data<Pages>,
    query: web::Query<PageQuery>,
) -> actix_web::Result<HttpResponse> {
    pages.leave(&query).await;
    let (id, slot) = match resume(&pages.employees, query.session.as_deref()).await {
        Some(found) => found,
        None => pages.employees.open(EmployeesPage::default()).await,
    };

    let fetch = {
        let mut page = slot.lock().await;
        let trigger = page.refresh;
        let changed = page.directory.observe(trigger);
        if changed {
            page.directory.begin_fetch();
        }
        changed
    };
    if fetch && !fetch_directory(gateway.get_ref(), &slot).await {
        return Ok(see_other(PATH));
    }

    let page = slot.lock().await;
    Ok(html(render(&id.to_string(), &page)))
}

pub async fn create<G: Gateway + 'static>(
    gateway: web::Data<G>,
    pages: web::Data<Pages>,
    form: web::Form<CreateEmployeeForm>,
) -> actix_web::Result<HttpResponse> {
    let input = form.into_inner();
    let Some((id, slot)) = resume(&pages.employees, Some(input.session.as_str())).await else {
        debug!(session = %input.session, "Create for an unknown page");
        return Ok(see_other(PATH));
    };

    let draft = {
        let mut page = slot.lock().await;
        page.form.on_field_change(EmployeeField::EmployeeId, input.employee_id);
        page.form.on_field_change(EmployeeField::FullName, input.full_name);
        page.form.on_field_change(EmployeeField::Email, input.email);
        page.form.on_field_change(EmployeeField::Department, input.department);
        page.form.begin_submit()
    };

    if let Some(draft) = draft {
        debug!(employee_id = %draft.employee_id, "Submitting new employee");
        let Ok(result) = slot.scope().run(gateway.create(&draft)).await else {
            return Ok(see_other(PATH));
        };
        let mut page = slot.lock().await;
        if page.form.finish_submit(result, Instant::now()) {
            info!(employee_id = %draft.employee_id, "Employee created");
            page.refresh.bump();
        }
    }

    Ok(see_other(page_url(PATH, &id.to_string())))
}

/// Asks for confirmation before a delete.
pub async fn confirm_delete(
    pages: web::Data<Pages>,
    path: web::Path<String>,
    query: web::Query<PageQuery>,
) -> actix_web::Result<HttpResponse> {
    let employee_id = path.into_inner();
    let Some((id, slot)) = resume(&pages.employees, query.session.as_deref()).await else {
        return Ok(see_other(PATH));
    };

    let page = slot.lock().await;
    let full_name = page
        .directory
        .find(&employee_id)
        .map_or_else(|| employee_id.clone(), |e| e.full_name.clone());
    let session = id.to_string();
    let body = ui::render_document(
        "Delete Employee",
        NavTab::Employees,
        Some(session.clone()),
        None,
        ui::employees::confirm_delete(&session, &employee_id, &full_name, &delete_prompt(&full_name)),
    );
    Ok(html(body))
}

pub async fn delete<G: Gateway + 'static>(
    gateway: web::Data<G>,
    pages: web::Data<Pages>,
    path: web::Path<String>,
    form: web::Form<DeleteEmployeeForm>,
) -> actix_web::Result<HttpResponse> {
    let employee_id = path.into_inner();
    let input = form.into_inner();
    let Some((id, slot)) = resume(&pages.employees, Some(input.session.as_str())).await else {
        return Ok(see_other(PATH));
    };
    let confirmed = input.confirmed.as_deref() == Some("yes");

    let target = {
        let mut page = slot.lock().await;
        page.directory
            .begin_delete(&employee_id, &input.full_name, |_prompt| confirmed)
    };

    if let Some(target) = target {
        let Ok(result) = slot.scope().run(gateway.delete(&target)).await else {
            return Ok(see_other(PATH));
        };
        let refetch = {
            let mut page = slot.lock().await;
            let refetch = page.directory.finish_delete(result, Instant::now());
            if refetch {
                page.directory.begin_fetch();
            }
            refetch
        };
        if refetch && !fetch_directory(gateway.get_ref(), &slot).await {
            return Ok(see_other(PATH));
        }
    }

    Ok(see_other(page_url(PATH, &id.to_string())))
}
