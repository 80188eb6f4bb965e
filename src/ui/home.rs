use leptos::prelude::*;

use crate::model::BackendHealth;

/// What the landing page knows about the backend.
#[derive(Debug, Clone, Default)]
pub struct Overview {
    pub health: Option<BackendHealth>,
    pub employees: Option<usize>,
    pub attendance: Option<usize>,
}

#[component]
fn Feature(icon: &'static str, title: &'static str, text: &'static str, href: &'static str, cta: &'static str) -> impl IntoView {
    view! {
        <div class="feature-card">
            <div class="feature-icon">{icon}</div>
            <h3>{title}</h3>
            <p>{text}</p>
            <a href=href class="btn btn-primary">{cta}</a>
        </div>
    }
}

fn count(value: Option<usize>) -> String {
    value.map_or_else(|| "n/a".to_string(), |n| n.to_string())
}

pub fn page(overview: Overview) -> impl IntoView + 'static {
    let status = match &overview.health {
        Some(health) => {
            let text = format!("Backend: {} ({})", health.status, health.service);
            view! { <div class="alert alert-success">{text}</div> }.into_any()
        }
        None => view! { <div class="alert alert-error">"Backend is unreachable"</div> }.into_any(),
    };
    let employees = format!("Employees: {}", count(overview.employees));
    let attendance = format!("Attendance records: {}", count(overview.attendance));

    view! {
        <div class="home">
            <div class="hero">
                <h1>"Welcome to HRMS Lite"</h1>
                <p class="hero-subtitle">"A lightweight Human Resource Management System"</p>
            </div>
            {status}
            <div class="stats">
                <span>{employees}</span>
                <span>{attendance}</span>
            </div>
            <div class="features-grid">
                <Feature
                    icon="👥"
                    title="Employee Management"
                    text="Add, view, and delete employee records with their personal details."
                    href="/employees"
                    cta="Manage Employees"
                />
                <Feature
                    icon="📅"
                    title="Attendance Tracking"
                    text="Mark daily attendance and review the history of every employee."
                    href="/attendance"
                    cta="Track Attendance"
                />
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::tachys::view::RenderHtml;

    #[test]
    fn unreachable_backend_is_reported() {
        let html = page(Overview::default()).to_html();
        assert!(html.contains("Welcome to HRMS Lite"));
        assert!(html.contains("Backend is unreachable"));
        assert!(html.contains("Employees: n/a"));
    }

    #[test]
    fn totals_are_shown_when_known() {
        let html = page(Overview {
            health: Some(BackendHealth {
                status: "healthy".to_string(),
                service: "HRMS Lite API".to_string(),
            }),
            employees: Some(3),
            attendance: Some(12),
        })
        .to_html();
        assert!(html.contains("Backend: healthy (HRMS Lite API)"));
        assert!(html.contains("Employees: 3"));
        assert!(html.contains("Attendance records: 12"));
    }
}
