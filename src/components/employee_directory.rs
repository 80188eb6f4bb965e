use std::time::Instant;

use tracing::{debug, info};

use super::flash::Flash;
use crate::gateway::{EmployeeApi, FetchError};
use crate::model::{ApiMessage, Employee};

/// Opaque counter owned by the Employees page; every change asks the
/// directory to fetch again.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RefreshTrigger(u64);

impl RefreshTrigger {
    pub fn bump(&mut self) {
        self.0 = self.0.wrapping_add(1);
    }
}

/// State of the "Employee List" card.
#[derive(Debug)]
pub struct EmployeeDirectory {
    employees: Vec<Employee>,
    loading: bool,
    error: Option<String>,
    deleted: Flash,
    seen: Option<RefreshTrigger>,
}

impl Default for EmployeeDirectory {
    fn default() -> Self {
        Self {
            employees: Vec::new(),
            loading: true,
            error: None,
            deleted: Flash::default(),
            seen: None,
        }
    }
}

pub fn delete_prompt(full_name: &str) -> String {
    format!(
        "Are you sure you want to delete employee \"{full_name}\"?\n\n\
         This will also delete all their attendance records."
    )
}

impl EmployeeDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn employees(&self) -> &[Employee] {
        &self.employees
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn deleted(&self, now: Instant) -> Option<&str> {
        self.deleted.visible(now)
    }

    pub fn flash(&self) -> &Flash {
        &self.deleted
    }

    pub fn find(&self, employee_id: &str) -> Option<&Employee> {
        self.employees.iter().find(|e| e.employee_id == employee_id)
    }

    /// Records the owner's trigger value. Returns `true` on first
    /// activation or when the value changed since the last call.
    pub fn observe(&mut self, trigger: RefreshTrigger) -> bool {
        if self.seen == Some(trigger) {
            return false;
        }
        self.seen = Some(trigger);
        true
    }

    pub fn begin_fetch(&mut self) {
        self.loading = true;
        self.error = None;
    }

    pub fn finish_fetch(&mut self, result: Result<Vec<Employee>, FetchError>) {
        self.loading = false;
        match result {
            Ok(employees) => self.employees = employees,
            Err(err) => self.error = Some(err.message),
        }
    }

    pub async fn fetch<G: EmployeeApi>(&mut self, gateway: &G) {
        self.begin_fetch();
        let result = gateway.get_all().await;
        self.finish_fetch(result);
    }

    /// Fetches when `trigger` differs from the last observed value.
    pub async fn sync<G: EmployeeApi>(&mut self, trigger: RefreshTrigger, gateway: &G) {
        if self.observe(trigger) {
            self.fetch(gateway).await;
        }
    }

    /// Asks `confirm` with the cascade warning. Returns the id to delete
    /// when the user agreed, `None` when they declined.
    pub fn begin_delete(
        &mut self,
        employee_id: &str,
        full_name: &str,
        confirm: impl FnOnce(&str) -> bool,
    ) -> Option<String> {
        if confirm(&delete_prompt(full_name)) {
            Some(employee_id.to_string())
        } else {
            debug!(employee_id, "Delete declined");
            None
        }
    }

    /// Returns `true` when the list has to be fetched again.
    pub fn finish_delete(&mut self, result: Result<ApiMessage, FetchError>, now: Instant) -> bool {
        match result {
            Ok(response) => {
                info!(message = %response.message, "Employee deleted");
                self.deleted.show(response.message, now);
                true
            }
            Err(err) => {
                self.error = Some(err.message);
                false
            }
        }
    }

    pub async fn on_delete<G: EmployeeApi>(
        &mut self,
        gateway: &G,
        employee_id: &str,
        full_name: &str,
        confirm: impl FnOnce(&str) -> bool,
    ) {
        let Some(employee_id) = self.begin_delete(employee_id, full_name, confirm) else {
            return;
        };
        let result = gateway.delete(&employee_id).await;
        if self.finish_delete(result, Instant::now()) {
            self.fetch(gateway).await;
        }
    }
}
