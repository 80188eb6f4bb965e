use tracing::debug;

use super::attendance_form::EMPLOYEES_UNAVAILABLE;
use crate::gateway::{AttendanceApi, EmployeeApi, FetchError};
use crate::model::{AttendanceRecord, AttendanceSummary, Employee};

/// Selected-employee value handed down by the Attendance page after a
/// successful mark. `revision` changes on every hand-over, so marking the
/// already selected employee again still refreshes the records.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    pub employee_id: String,
    pub revision: u64,
}

impl Selection {
    pub fn hand_over(&mut self, employee_id: impl Into<String>) {
        self.employee_id = employee_id.into();
        self.revision = self.revision.wrapping_add(1);
    }
}

/// What the record card shows; exactly one at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordsDisplay {
    NoSelection,
    Loading,
    Records,
}

/// State of the "View Attendance Records" card.
#[derive(Debug, Default)]
pub struct AttendanceView {
    employees: Vec<Employee>,
    employees_requested: bool,
    selected: String,
    external: Option<Selection>,
    fetched_for: Option<String>,
    records: Vec<AttendanceRecord>,
    loading: bool,
    error: Option<String>,
}

impl AttendanceView {
    /// The initial selection comes from the owner's pass-through value.
    pub fn new(initial: &Selection) -> Self {
        Self {
            selected: initial.employee_id.clone(),
            external: Some(initial.clone()),
            ..Self::default()
        }
    }

    pub fn employees(&self) -> &[Employee] {
        &self.employees
    }

    pub fn selected(&self) -> &str {
        &self.selected
    }

    pub fn records(&self) -> &[AttendanceRecord] {
        &self.records
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn display(&self) -> RecordsDisplay {
        if self.selected.is_empty() {
            RecordsDisplay::NoSelection
        } else if self.loading {
            RecordsDisplay::Loading
        } else {
            RecordsDisplay::Records
        }
    }

    /// Details of the selected employee, looked up in the loaded list.
    pub fn selected_employee(&self) -> Option<&Employee> {
        self.employees
            .iter()
            .find(|e| e.employee_id == self.selected)
    }

    pub fn summary(&self) -> AttendanceSummary {
        AttendanceSummary::from_records(&self.records)
    }

    pub fn take_employees_request(&mut self) -> bool {
        !std::mem::replace(&mut self.employees_requested, true)
    }

    pub fn finish_employees(&mut self, result: Result<Vec<Employee>, FetchError>) {
        match result {
            Ok(employees) => self.employees = employees,
            Err(_) => self.error = Some(EMPLOYEES_UNAVAILABLE.to_string()),
        }
    }

    /// Follows the owner's value when it changes after mount. Empty values
    /// never override a choice made in this card.
    pub fn sync_external(&mut self, external: &Selection) {
        if self.external.as_ref() == Some(external) {
            return;
        }
        self.external = Some(external.clone());
        if !external.employee_id.is_empty() {
            self.selected = external.employee_id.clone();
            self.fetched_for = None;
        }
    }

    /// User picked an employee in this card's own select.
    pub fn select(&mut self, employee_id: &str) {
        self.selected = employee_id.to_string();
    }

    /// Starts a fetch when the selection moved since the last one. An empty
    /// selection clears the records without a request.
    pub fn begin_fetch(&mut self) -> Option<String> {
        if self.fetched_for.as_deref() == Some(self.selected.as_str()) {
            return None;
        }
        self.fetched_for = Some(self.selected.clone());
        if self.selected.is_empty() {
            self.records.clear();
            self.loading = false;
            return None;
        }
        self.loading = true;
        self.error = None;
        Some(self.selected.clone())
    }

    /// Results for a selection that is no longer current are dropped.
    pub fn finish_fetch(
        &mut self,
        employee_id: &str,
        result: Result<Vec<AttendanceRecord>, FetchError>,
    ) {
        if employee_id != self.selected {
            debug!(employee_id, "Dropping stale attendance response");
            return;
        }
        self.loading = false;
        match result {
            Ok(records) => self.records = records,
            Err(err) => {
                self.error = Some(err.message);
                self.records.clear();
            }
        }
    }

    pub async fn load_employees<G: EmployeeApi>(&mut self, gateway: &G) {
        if self.take_employees_request() {
            let result = gateway.get_all().await;
            self.finish_employees(result);
        }
    }

    pub async fn refresh<G: AttendanceApi>(&mut self, gateway: &G) {
        if let Some(employee_id) = self.begin_fetch() {
            let result = gateway.get_by_employee(&employee_id).await;
            self.finish_fetch(&employee_id, result);
        }
    }
}
