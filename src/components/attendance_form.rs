use std::str::FromStr;
use std::time::Instant;

use chrono::NaiveDate;
use tracing::debug;

use super::flash::Flash;
use crate::gateway::{AttendanceApi, EmployeeApi, FetchError};
use crate::model::{
    ApiMessage, AttendanceDraft, AttendanceField, AttendanceStatus, Employee,
};

pub const SELECT_EMPLOYEE: &str = "Please select an employee";
pub const INVALID_DATE: &str = "Please enter a valid date";
pub const FUTURE_DATE: &str = "Attendance cannot be marked for a future date";
pub const EMPLOYEES_UNAVAILABLE: &str = "Failed to load employees";

/// State of the "Mark Attendance" card.
#[derive(Debug)]
pub struct AttendanceForm {
    employees: Vec<Employee>,
    employees_requested: bool,
    draft: AttendanceDraft,
    unparsed_date: Option<String>,
    today: NaiveDate,
    loading: bool,
    error: Option<String>,
    success: Flash,
}

impl AttendanceForm {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            employees: Vec::new(),
            employees_requested: false,
            draft: AttendanceDraft::new(today),
            unparsed_date: None,
            today,
            loading: false,
            error: None,
            success: Flash::default(),
        }
    }

    pub fn employees(&self) -> &[Employee] {
        &self.employees
    }

    pub fn draft(&self) -> &AttendanceDraft {
        &self.draft
    }

    /// Latest date the date input accepts.
    pub fn max_date(&self) -> NaiveDate {
        self.today
    }

    /// Moves the date bound to the caller's current day. A draft still on
    /// the previous default follows along.
    pub fn set_today(&mut self, today: NaiveDate) {
        if today == self.today {
            return;
        }
        if self.draft.date == self.today && self.unparsed_date.is_none() && !self.loading {
            self.draft.date = today;
        }
        self.today = today;
    }

    /// Raw date input that did not parse, echoed back so it can be fixed.
    pub fn unparsed_date(&self) -> Option<&str> {
        self.unparsed_date.as_deref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn success(&self, now: Instant) -> Option<&str> {
        self.success.visible(now)
    }

    pub fn flash(&self) -> &Flash {
        &self.success
    }

    /// Submit and employee select are disabled while busy or when there is
    /// nobody to pick.
    pub fn can_submit(&self) -> bool {
        !self.loading && !self.employees.is_empty()
    }

    /// Returns `true` exactly once: the selection source is loaded on first
    /// activation only.
    pub fn take_employees_request(&mut self) -> bool {
        !std::mem::replace(&mut self.employees_requested, true)
    }

    pub fn finish_employees(&mut self, result: Result<Vec<Employee>, FetchError>) {
        match result {
            Ok(employees) => self.employees = employees,
            Err(_) => self.error = Some(EMPLOYEES_UNAVAILABLE.to_string()),
        }
    }

    pub async fn load_employees<G: EmployeeApi>(&mut self, gateway: &G) {
        if self.take_employees_request() {
            let result = gateway.get_all().await;
            self.finish_employees(result);
        }
    }

    /// Dates are validated at submit time; an unparsable value is kept
    /// aside so the submission can be rejected instead of using a stale date.
    pub fn on_field_change(&mut self, field: AttendanceField, value: &str) {
        if self.loading {
            return;
        }
        match field {
            AttendanceField::EmployeeId => self.draft.employee_id = value.to_string(),
            AttendanceField::Date => match NaiveDate::from_str(value.trim()) {
                Ok(date) => {
                    self.draft.date = date;
                    self.unparsed_date = None;
                }
                Err(_) => {
                    debug!(value, "Unparsable attendance date");
                    self.unparsed_date = Some(value.to_string());
                }
            },
            AttendanceField::Status => {
                if let Ok(status) = AttendanceStatus::from_str(value) {
                    self.draft.status = status;
                }
            }
        }
    }

    /// First half of a submission. `None` when busy or when the draft fails
    /// local validation (no employee, unparsable or future date); those set
    /// the error message without touching the gateway.
    pub fn begin_submit(&mut self) -> Option<AttendanceDraft> {
        if self.loading {
            return None;
        }
        self.error = None;
        self.success.clear();

        if self.draft.employee_id.is_empty() {
            self.error = Some(SELECT_EMPLOYEE.to_string());
            return None;
        }
        if self.unparsed_date.is_some() {
            self.error = Some(INVALID_DATE.to_string());
            return None;
        }
        if self.draft.date > self.today {
            self.error = Some(FUTURE_DATE.to_string());
            return None;
        }
        self.loading = true;
        Some(self.draft.clone())
    }

    /// Second half of a submission. On success returns the employee id the
    /// owner hands to the record view.
    pub fn finish_submit(
        &mut self,
        marked: &AttendanceDraft,
        result: Result<ApiMessage, FetchError>,
        now: Instant,
    ) -> Option<String> {
        self.loading = false;
        match result {
            Ok(response) => {
                self.success.show(response.message, now);
                Some(marked.employee_id.clone())
            }
            Err(err) => {
                self.error = Some(err.message);
                None
            }
        }
    }

    pub async fn on_submit<G: AttendanceApi>(&mut self, gateway: &G) -> Option<String> {
        let draft = self.begin_submit()?;
        let result = gateway.mark(&draft).await;
        self.finish_submit(&draft, result, Instant::now())
    }
}
