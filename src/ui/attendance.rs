use std::time::Instant;

use leptos::prelude::*;
use strum::IntoEnumIterator;

use crate::components::{AttendanceForm, AttendanceView, RecordsDisplay};
use crate::model::{AttendanceRecord, AttendanceStatus, AttendanceSummary, Employee};

fn option_label(emp: &Employee) -> String {
    format!("{} - {} ({})", emp.employee_id, emp.full_name, emp.department)
}

fn status_class(status: AttendanceStatus) -> &'static str {
    match status {
        AttendanceStatus::Present => "status-badge status-present",
        AttendanceStatus::Absent => "status-badge status-absent",
    }
}

fn employee_options(employees: &[Employee], selected: &str) -> Vec<AnyView> {
    employees
        .iter()
        .map(|emp| {
            let is_selected = emp.employee_id == selected;
            view! {
                <option value=emp.employee_id.clone() selected=is_selected>{option_label(emp)}</option>
            }
            .into_any()
        })
        .collect()
}

/// Body of the "Mark Attendance" card.
pub fn form_card(session: &str, form: &AttendanceForm, now: Instant) -> impl IntoView + 'static {
    let loading = form.is_loading();
    let draft = form.draft().clone();
    let no_employees = form.employees().is_empty();
    let options = employee_options(form.employees(), &draft.employee_id);
    let radios = AttendanceStatus::iter()
        .map(|status| {
            let checked = draft.status == status;
            view! {
                <label>
                    <input type="radio" name="status" value=status.as_ref().to_string()
                        checked=checked disabled=loading />
                    " " {status.to_string()}
                </label>
            }
        })
        .collect::<Vec<_>>();
    let error = form.error().map(str::to_string);
    let success = form.success(now).map(str::to_string);
    let session = session.to_string();
    let date = form
        .unparsed_date()
        .map_or_else(|| draft.date.to_string(), str::to_string);
    let max_date = form.max_date().to_string();
    let select_disabled = loading || no_employees;
    let submit_disabled = !form.can_submit();

    view! {
        <div class="card">
            <h2>"Mark Attendance"</h2>
            {error.map(|e| view! { <div class="alert alert-error">{e}</div> })}
            {success.map(|s| view! { <div class="alert alert-success">{s}</div> })}
            <form method="post" action="/attendance/mark">
                <input type="hidden" name="session" value=session />
                <div class="form-grid">
                    <label class="form-group">
                        <span>"Select Employee " <span class="required">"*"</span></span>
                        <select name="employee_id" required=true disabled=select_disabled>
                            <option value="">"-- Choose Employee --"</option>
                            {options}
                        </select>
                        {no_employees.then(|| view! {
                            <small class="form-help">"No employees available. Please add employees first."</small>
                        })}
                    </label>
                    <label class="form-group">
                        <span>"Date " <span class="required">"*"</span></span>
                        <input type="date" name="date" value=date max=max_date
                            required=true disabled=loading />
                    </label>
                    <div class="form-group">
                        <span>"Status " <span class="required">"*"</span></span>
                        <div class="radio-group">{radios}</div>
                    </div>
                </div>
                <button type="submit" class="btn btn-primary" disabled=submit_disabled>
                    {if loading { "Marking Attendance..." } else { "Mark Attendance" }}
                </button>
            </form>
        </div>
    }
}

#[component]
fn RecordsTable(records: Vec<AttendanceRecord>, summary: AttendanceSummary) -> impl IntoView {
    let rows = records
        .into_iter()
        .map(|record| {
            let weekday = record.weekday_name();
            view! {
                <tr>
                    <td>{record.date.format("%Y-%m-%d").to_string()}</td>
                    <td>{weekday}</td>
                    <td><span class=status_class(record.status)>{record.status.to_string()}</span></td>
                </tr>
            }
        })
        .collect::<Vec<_>>();
    let totals = format!(
        "Total Records: {} | Present: {} | Absent: {}",
        summary.total, summary.present, summary.absent
    );

    view! {
        <table>
            <thead>
                <tr><th>"Date"</th><th>"Day"</th><th>"Status"</th></tr>
            </thead>
            <tbody>{rows}</tbody>
        </table>
        <div class="attendance-summary">
            <p><strong>{totals}</strong></p>
        </div>
    }
}

fn records_body(view_state: &AttendanceView) -> AnyView {
    match view_state.display() {
        RecordsDisplay::NoSelection => view! {
            <div class="empty-state">
                <h3>"No Employee Selected"</h3>
                <p>"Please select an employee to view their attendance records."</p>
            </div>
        }
        .into_any(),
        RecordsDisplay::Loading => {
            view! { <div class="loading">"Loading attendance records..."</div> }.into_any()
        }
        RecordsDisplay::Records => {
            let details = view_state.selected_employee().map(|emp| {
                let name = emp.full_name.clone();
                let meta = format!("{} | {}", emp.employee_id, emp.department);
                view! {
                    <div class="employee-info">
                        <h3>{name}</h3>
                        <p class="text-muted">{meta}</p>
                    </div>
                }
            });
            let table = if view_state.records().is_empty() {
                view! {
                    <div class="empty-state">
                        <h3>"No Attendance Records"</h3>
                        <p>"No attendance has been marked for this employee yet."</p>
                    </div>
                }
                .into_any()
            } else {
                view! {
                    <RecordsTable
                        records=view_state.records().to_vec()
                        summary=view_state.summary()
                    />
                }
                .into_any()
            };
            view! { <div>{details}{table}</div> }.into_any()
        }
    }
}

/// Body of the "View Attendance Records" card.
pub fn view_card(session: &str, view_state: &AttendanceView) -> impl IntoView + 'static {
    let options = employee_options(view_state.employees(), view_state.selected());
    let error = view_state.error().map(str::to_string);
    let body = records_body(view_state);
    let session = session.to_string();

    view! {
        <div class="card">
            <h2>"View Attendance Records"</h2>
            {error.map(|e| view! { <div class="alert alert-error">{e}</div> })}
            <form method="post" action="/attendance/select">
                <input type="hidden" name="session" value=session />
                <label class="form-group">
                    <span>"Select Employee"</span>
                    <select name="employee_id">
                        <option value="">"-- Choose Employee --"</option>
                        {options}
                    </select>
                </label>
                <button type="submit" class="btn btn-secondary">"View Records"</button>
            </form>
            {body}
        </div>
    }
}

pub fn page(
    session: &str,
    form: &AttendanceForm,
    view_state: &AttendanceView,
    now: Instant,
) -> impl IntoView + 'static {
    let form = form_card(session, form, now);
    let records = view_card(session, view_state);
    view! {
        <div>
            <h1 class="page-title">"Attendance Management"</h1>
            {form}
            {records}
        </div>
    }
}
