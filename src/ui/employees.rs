use std::time::Instant;

use leptos::prelude::*;

use crate::components::{EmployeeDirectory, EmployeeForm};
use crate::model::{Employee, EmployeeDraft};

fn delete_href(employee_id: &str, session: &str) -> String {
    format!(
        "/employees/{}/delete?session={}",
        urlencoding::encode(employee_id),
        session
    )
}

#[component]
fn FormCard(
    session: String,
    draft: EmployeeDraft,
    loading: bool,
    error: Option<String>,
    success: Option<String>,
) -> impl IntoView {
    view! {
        <div class="card">
            <h2>"Add New Employee"</h2>
            {error.map(|e| view! { <div class="alert alert-error">{e}</div> })}
            {success.map(|s| view! { <div class="alert alert-success">{s}</div> })}
            <form method="post" action="/employees/create">
                <input type="hidden" name="session" value=session />
                <div class="form-grid">
                    <label class="form-group">
                        <span>"Employee ID " <span class="required">"*"</span></span>
                        <input type="text" name="employee_id" value=draft.employee_id
                            placeholder="e.g., EMP001" required=true disabled=loading />
                    </label>
                    <label class="form-group">
                        <span>"Full Name " <span class="required">"*"</span></span>
                        <input type="text" name="full_name" value=draft.full_name
                            placeholder="e.g., John Doe" required=true disabled=loading />
                    </label>
                    <label class="form-group">
                        <span>"Email Address " <span class="required">"*"</span></span>
                        <input type="email" name="email" value=draft.email
                            placeholder="e.g., john.doe@company.com" required=true disabled=loading />
                    </label>
                    <label class="form-group">
                        <span>"Department " <span class="required">"*"</span></span>
                        <input type="text" name="department" value=draft.department
                            placeholder="e.g., Engineering" required=true disabled=loading />
                    </label>
                </div>
                <button type="submit" class="btn btn-primary" disabled=loading>
                    {if loading { "Adding Employee..." } else { "Add Employee" }}
                </button>
            </form>
        </div>
    }
}

#[component]
fn EmployeeTable(session: String, employees: Vec<Employee>) -> impl IntoView {
    let rows = employees
        .into_iter()
        .map(|emp| {
            let href = delete_href(&emp.employee_id, &session);
            view! {
                <tr>
                    <td><span class="badge">{emp.employee_id}</span></td>
                    <td><strong>{emp.full_name}</strong></td>
                    <td>{emp.email}</td>
                    <td>{emp.department}</td>
                    <td><a href=href class="btn btn-danger btn-sm">"Delete"</a></td>
                </tr>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <table>
            <thead>
                <tr>
                    <th>"Employee ID"</th>
                    <th>"Full Name"</th>
                    <th>"Email"</th>
                    <th>"Department"</th>
                    <th>"Actions"</th>
                </tr>
            </thead>
            <tbody>{rows}</tbody>
        </table>
    }
}

#[component]
fn ListCard(
    session: String,
    employees: Vec<Employee>,
    loading: bool,
    error: Option<String>,
    deleted: Option<String>,
) -> impl IntoView {
    if loading {
        return view! {
            <div class="card"><div class="loading">"Loading employees..."</div></div>
        }
        .into_any();
    }

    let heading = format!("Employee List ({})", employees.len());
    let body = if employees.is_empty() {
        view! {
            <div class="empty-state">
                <h3>"No Employees Found"</h3>
                <p>"Start by adding your first employee using the form above."</p>
            </div>
        }
        .into_any()
    } else {
        view! { <EmployeeTable session=session employees=employees /> }.into_any()
    };

    view! {
        <div class="card">
            <h2>{heading}</h2>
            {error.map(|e| view! { <div class="alert alert-error">{e}</div> })}
            {deleted.map(|s| view! { <div class="alert alert-success">{s}</div> })}
            {body}
        </div>
    }
    .into_any()
}

/// Body of the Employees page: creation form above the directory.
pub fn page(
    session: &str,
    form: &EmployeeForm,
    directory: &EmployeeDirectory,
    now: Instant,
) -> impl IntoView + 'static {
    let form_card = view! {
        <FormCard
            session=session.to_string()
            draft=form.draft().clone()
            loading=form.is_loading()
            error=form.error().map(str::to_string)
            success=form.success(now).map(str::to_string)
        />
    };
    let list_card = view! {
        <ListCard
            session=session.to_string()
            employees=directory.employees().to_vec()
            loading=directory.is_loading()
            error=directory.error().map(str::to_string)
            deleted=directory.deleted(now).map(str::to_string)
        />
    };

    view! {
        <div>
            <h1 class="page-title">"Employee Management"</h1>
            {form_card}
            {list_card}
        </div>
    }
}

/// Confirmation step of a delete. `prompt` paragraphs are separated by
/// blank lines.
pub fn confirm_delete(
    session: &str,
    employee_id: &str,
    full_name: &str,
    prompt: &str,
) -> impl IntoView + 'static {
    let action = format!("/employees/{}/delete", urlencoding::encode(employee_id));
    let paragraphs = prompt
        .split("\n\n")
        .map(|p| view! { <p>{p.to_string()}</p> })
        .collect::<Vec<_>>();
    let session = session.to_string();
    let full_name = full_name.to_string();

    view! {
        <div class="card">
            <h2>"Delete Employee"</h2>
            <div class="alert alert-error">{paragraphs}</div>
            <form method="post" action=action>
                <input type="hidden" name="session" value=session />
                <input type="hidden" name="full_name" value=full_name />
                <button type="submit" name="confirmed" value="yes" class="btn btn-danger">"Delete"</button>
                " "
                <button type="submit" name="confirmed" value="no" class="btn btn-secondary">"Cancel"</button>
            </form>
        </div>
    }
}
