//! HTML rendering with Leptos in SSR mode.
//!
//! Pages are rendered from a snapshot of their component state; nothing in
//! here talks to the backend.

pub mod attendance;
pub mod employees;
pub mod home;
pub mod styles;

use std::time::Duration;

use leptos::prelude::*;
use leptos::tachys::view::RenderHtml;

use styles::APP_CSS;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavTab {
    Home,
    Employees,
    Attendance,
}

impl NavTab {
    fn path(self) -> &'static str {
        match self {
            NavTab::Home => "/",
            NavTab::Employees => "/employees",
            NavTab::Attendance => "/attendance",
        }
    }

    fn label(self) -> &'static str {
        match self {
            NavTab::Home => "Home",
            NavTab::Employees => "Employees",
            NavTab::Attendance => "Attendance",
        }
    }
}

/// `path?session=<id>`, the address of one page activation.
pub fn page_url(path: &str, session: &str) -> String {
    format!("{path}?session={session}")
}

/// Seconds until the browser should reload the page: when a transient
/// message expires, or shortly when a request of this page is in flight.
pub fn reload_after(remaining: &[Option<Duration>], busy: bool) -> Option<u64> {
    let expiry = remaining
        .iter()
        .flatten()
        .map(|d| d.as_millis().div_ceil(1000).max(1) as u64)
        .min();
    match (expiry, busy) {
        (Some(secs), true) => Some(secs.min(1)),
        (Some(secs), false) => Some(secs),
        (None, true) => Some(1),
        (None, false) => None,
    }
}

/// Link to another tab; leaving a page session tells the target to end it.
pub fn nav_href(tab: NavTab, session: Option<&str>) -> String {
    match session {
        Some(id) => format!("{}?from={}", tab.path(), id),
        None => tab.path().to_string(),
    }
}

#[component]
fn NavBar(active: NavTab, session: Option<String>) -> impl IntoView {
    let home = nav_href(NavTab::Home, session.as_deref());
    let links = [NavTab::Home, NavTab::Employees, NavTab::Attendance]
        .into_iter()
        .map(|tab| {
            let href = nav_href(tab, session.as_deref());
            let class = if tab == active { "nav-link active" } else { "nav-link" };
            view! { <a href=href class=class>{tab.label()}</a> }
        })
        .collect::<Vec<_>>();

    view! {
        <nav class="navbar">
            <div class="nav-container">
                <a href=home class="logo">"🏢 HRMS Lite"</a>
                <div class="nav-links">{links}</div>
            </div>
        </nav>
    }
}

#[component]
fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <p>"© 2026 HRMS Lite. Built with Rust, Actix Web & Leptos."</p>
        </footer>
    }
}

/// Wraps page content in the document shell and renders it to a string.
///
/// `session` is the page being shown; navigation links carry it as `from`
/// so the next page can end it. `reload` is `(seconds, url)`.
pub fn render_document(
    title: &str,
    active: NavTab,
    session: Option<String>,
    reload: Option<(u64, String)>,
    content: impl IntoView + 'static,
) -> String {
    let title = format!("{title} · HRMS Lite");
    let refresh = reload.map(|(secs, url)| {
        let content = format!("{secs};url={url}");
        view! { <meta http-equiv="refresh" content=content /> }
    });

    let doc = view! {
        <html lang="en">
            <head>
                <meta charset="UTF-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                {refresh}
                <title>{title}</title>
                <style>{APP_CSS}</style>
            </head>
            <body>
                <NavBar active=active session=session />
                <div class="container">{content}</div>
                <Footer />
            </body>
        </html>
    };

    format!("<!DOCTYPE html>\n{}", doc.to_html())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reload_follows_the_earliest_deadline() {
        let remaining = [Some(Duration::from_millis(2100)), None, Some(Duration::from_secs(3))];
        assert_eq!(reload_after(&remaining, false), Some(3));
        assert_eq!(reload_after(&[Some(Duration::from_millis(10))], false), Some(1));
        assert_eq!(reload_after(&[None], false), None);
        assert_eq!(reload_after(&[None], true), Some(1));
    }

    #[test]
    fn document_has_doctype_navigation_and_content() {
        let html = render_document(
            "Employees",
            NavTab::Employees,
            Some("abc".to_string()),
            Some((3, "/employees?session=abc".to_string())),
            view! { <p>"hello"</p> },
        );

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<p>hello</p>"));
        assert!(html.contains("/attendance?from=abc"));
        assert!(html.contains("nav-link active"));
        assert!(html.contains("3;url=/employees?session=abc"));
    }

    #[test]
    fn logo_leaves_the_page_like_the_tabs() {
        let html = render_document("Home", NavTab::Employees, Some("abc".to_string()), None, view! { <p>"x"</p> });

        assert!(html.contains("href=\"/?from=abc\" class=\"logo\""));
        assert!(!html.contains("href=\"/\" class=\"logo\""));
        assert_eq!(nav_href(NavTab::Home, None), "/");
    }
}
