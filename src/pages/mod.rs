//! HTTP handlers of the server-rendered UI.
//!
//! A page activation lives in a [`PageStore`] under a random id that travels
//! in the `session` query or form field. Handlers lock the page state only
//! between gateway calls; the calls themselves run in the page's scope, so
//! leaving the page aborts them and drops their results.

pub mod attendance;
pub mod employees;
pub mod home;

use std::sync::Arc;
use std::time::Duration;

use actix_web::{HttpResponse, http::header};
use serde::Deserialize;
use uuid::Uuid;

use crate::utils::page_store::{PageSlot, PageStore, parse_page_id};

pub use attendance::AttendancePage;
pub use employees::EmployeesPage;

/// Query of every page GET: the page to continue and the page being left.
#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    pub session: Option<String>,
    pub from: Option<String>,
}

/// Live page sessions of both screens.
pub struct Pages {
    pub employees: PageStore<EmployeesPage>,
    pub attendance: PageStore<AttendancePage>,
}

impl Pages {
    pub fn new(idle: Duration) -> Self {
        Self {
            employees: PageStore::new(idle),
            attendance: PageStore::new(idle),
        }
    }

    /// Ends the page the user navigated away from, unless it is the one
    /// being shown.
    pub async fn leave(&self, query: &PageQuery) {
        let Some(from) = parse_page_id(query.from.as_deref()) else {
            return;
        };
        if parse_page_id(query.session.as_deref()) == Some(from) {
            return;
        }
        self.employees.close(&from).await;
        self.attendance.close(&from).await;
    }
}

/// Existing page for `session`, if it is still alive.
pub(crate) async fn resume<P: Send + 'static>(
    store: &PageStore<P>,
    session: Option<&str>,
) -> Option<(Uuid, Arc<PageSlot<P>>)> {
    let id = parse_page_id(session)?;
    store.find(&id).await.map(|slot| (id, slot))
}

pub(crate) fn html(body: String) -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(body)
}

pub(crate) fn see_other(location: impl Into<String>) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, location.into()))
        .finish()
}
