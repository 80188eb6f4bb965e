//! In-memory stand-in for the HRMS backend.
//!
//! Mirrors the backend's observable contract: unique `employee_id` and
//! email, cascade delete, upsert on (employee_id, date), newest first
//! ordering. Every call is recorded so tests can assert on traffic.

use std::sync::{Mutex, MutexGuard};

use chrono::NaiveDate;

use super::{AttendanceApi, EmployeeApi, FetchError, HealthApi, fallback};
use crate::model::{
    ApiMessage, AttendanceDraft, AttendanceRecord, BackendHealth, Employee, EmployeeDraft,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    ListEmployees,
    GetEmployee(String),
    CreateEmployee(EmployeeDraft),
    DeleteEmployee(String),
    MarkAttendance(AttendanceDraft),
    EmployeeAttendance(String),
    AllAttendance,
    Health,
}

#[derive(Default)]
struct Backend {
    next_id: i64,
    employees: Vec<Employee>,
    attendance: Vec<AttendanceRecord>,
    calls: Vec<Call>,
    offline: bool,
    fail_next: Option<String>,
}

impl Backend {
    fn next_id(&mut self) -> i64 {
        self.next_id += 1;
        self.next_id
    }

    /// Records the call and applies injected failures.
    fn enter(&mut self, call: Call, fallback: &str) -> Result<(), FetchError> {
        self.calls.push(call);
        if self.offline {
            return Err(FetchError::new(fallback));
        }
        match self.fail_next.take() {
            Some(detail) => Err(FetchError::new(detail)),
            None => Ok(()),
        }
    }

    fn employee(&self, employee_id: &str) -> Result<&Employee, FetchError> {
        self.employees
            .iter()
            .find(|e| e.employee_id == employee_id)
            .ok_or_else(|| FetchError::new(format!("Employee with ID '{employee_id}' not found")))
    }
}

#[derive(Default)]
pub struct InMemoryGateway {
    backend: Mutex<Backend>,
}

impl InMemoryGateway {
    pub fn new() -> Self {
        Self::default()
    }

    fn backend(&self) -> MutexGuard<'_, Backend> {
        self.backend.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Seeds an employee directly, bypassing validation and the call log.
    pub fn with_employee(self, employee_id: &str, full_name: &str, department: &str) -> Self {
        {
            let mut backend = self.backend();
            let id = backend.next_id();
            backend.employees.push(Employee {
                id,
                employee_id: employee_id.to_string(),
                full_name: full_name.to_string(),
                email: format!("{}@example.com", employee_id.to_lowercase()),
                department: department.to_string(),
            });
        }
        self
    }

    /// Seeds an attendance record directly, bypassing the call log.
    pub fn with_attendance(
        self,
        employee_id: &str,
        date: NaiveDate,
        status: crate::model::AttendanceStatus,
    ) -> Self {
        {
            let mut backend = self.backend();
            let id = backend.next_id();
            backend.attendance.push(AttendanceRecord {
                id,
                employee_id: employee_id.to_string(),
                date,
                status,
                full_name: None,
            });
        }
        self
    }

    /// Makes every following call fail as if the backend were unreachable.
    pub fn set_offline(&self, offline: bool) {
        self.backend().offline = offline;
    }

    /// Makes the next call fail with the given `detail`.
    pub fn fail_next(&self, detail: impl Into<String>) {
        self.backend().fail_next = Some(detail.into());
    }

    pub fn calls(&self) -> Vec<Call> {
        self.backend().calls.clone()
    }

    pub fn count_calls(&self, matches: impl Fn(&Call) -> bool) -> usize {
        self.backend().calls.iter().filter(|c| matches(c)).count()
    }

    pub fn clear_calls(&self) {
        self.backend().calls.clear();
    }

    pub fn employee_count(&self) -> usize {
        self.backend().employees.len()
    }

    pub fn attendance_count(&self) -> usize {
        self.backend().attendance.len()
    }
}

fn looks_like_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty() && domain.contains('.') && !domain.starts_with('.')
        }
        None => false,
    }
}

impl EmployeeApi for InMemoryGateway {
    async fn get_all(&self) -> Result<Vec<Employee>, FetchError> {
        let mut backend = self.backend();
        backend.enter(Call::ListEmployees, fallback::LIST_EMPLOYEES)?;
        Ok(backend.employees.clone())
    }

    async fn get_by_id(&self, employee_id: &str) -> Result<Employee, FetchError> {
        let mut backend = self.backend();
        backend.enter(Call::GetEmployee(employee_id.to_string()), fallback::GET_EMPLOYEE)?;
        backend.employee(employee_id).cloned()
    }

    async fn create(&self, draft: &EmployeeDraft) -> Result<ApiMessage, FetchError> {
        let mut backend = self.backend();
        backend.enter(Call::CreateEmployee(draft.clone()), fallback::CREATE_EMPLOYEE)?;

        if !looks_like_email(&draft.email) {
            return Err(FetchError::new("value is not a valid email address"));
        }
        if backend.employees.iter().any(|e| e.employee_id == draft.employee_id) {
            return Err(FetchError::new(format!(
                "Employee ID '{}' already exists",
                draft.employee_id
            )));
        }
        if backend.employees.iter().any(|e| e.email == draft.email) {
            return Err(FetchError::new(format!(
                "Email '{}' already exists",
                draft.email
            )));
        }

        let id = backend.next_id();
        backend.employees.push(Employee {
            id,
            employee_id: draft.employee_id.clone(),
            full_name: draft.full_name.clone(),
            email: draft.email.clone(),
            department: draft.department.clone(),
        });
        Ok(ApiMessage {
            message: "Employee created successfully".to_string(),
            detail: Some(serde_json::json!({ "employee_id": draft.employee_id })),
        })
    }

    async fn delete(&self, employee_id: &str) -> Result<ApiMessage, FetchError> {
        let mut backend = self.backend();
        backend.enter(Call::DeleteEmployee(employee_id.to_string()), fallback::DELETE_EMPLOYEE)?;
        backend.employee(employee_id)?;

        backend.attendance.retain(|r| r.employee_id != employee_id);
        backend.employees.retain(|e| e.employee_id != employee_id);
        Ok(ApiMessage::new(format!(
            "Employee '{employee_id}' and all associated records deleted successfully"
        )))
    }
}

impl AttendanceApi for InMemoryGateway {
    async fn mark(&self, record: &AttendanceDraft) -> Result<ApiMessage, FetchError> {
        let mut backend = self.backend();
        backend.enter(Call::MarkAttendance(record.clone()), fallback::MARK_ATTENDANCE)?;
        backend.employee(&record.employee_id)?;

        if let Some(existing) = backend
            .attendance
            .iter_mut()
            .find(|r| r.employee_id == record.employee_id && r.date == record.date)
        {
            existing.status = record.status;
            return Ok(ApiMessage::new(format!(
                "Attendance updated successfully for {}",
                record.date
            )));
        }

        let id = backend.next_id();
        backend.attendance.push(AttendanceRecord {
            id,
            employee_id: record.employee_id.clone(),
            date: record.date,
            status: record.status,
            full_name: None,
        });
        Ok(ApiMessage::new(format!(
            "Attendance marked successfully for {}",
            record.date
        )))
    }

    async fn get_by_employee(
        &self,
        employee_id: &str,
    ) -> Result<Vec<AttendanceRecord>, FetchError> {
        let mut backend = self.backend();
        backend.enter(
            Call::EmployeeAttendance(employee_id.to_string()),
            fallback::EMPLOYEE_ATTENDANCE,
        )?;

        let mut records: Vec<AttendanceRecord> = backend
            .attendance
            .iter()
            .filter(|r| r.employee_id == employee_id)
            .cloned()
            .collect();
        records.sort_by(|a, b| b.date.cmp(&a.date));
        Ok(records)
    }

    async fn get_all(&self) -> Result<Vec<AttendanceRecord>, FetchError> {
        let mut backend = self.backend();
        backend.enter(Call::AllAttendance, fallback::ALL_ATTENDANCE)?;

        let mut records: Vec<AttendanceRecord> = backend
            .attendance
            .iter()
            .filter_map(|r| {
                let employee = backend.employee(&r.employee_id).ok()?;
                Some(AttendanceRecord {
                    full_name: Some(employee.full_name.clone()),
                    ..r.clone()
                })
            })
            .collect();
        records.sort_by(|a, b| b.date.cmp(&a.date));
        Ok(records)
    }
}

impl HealthApi for InMemoryGateway {
    async fn health(&self) -> Result<BackendHealth, FetchError> {
        let mut backend = self.backend();
        backend.enter(Call::Health, fallback::HEALTH)?;
        Ok(BackendHealth {
            status: "healthy".to_string(),
            service: "HRMS Lite API".to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::AttendanceStatus;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[actix_web::test]
    async fn delete_cascades_to_attendance() {
        let gw = InMemoryGateway::new()
            .with_employee("EMP001", "John Doe", "Engineering")
            .with_employee("EMP002", "Jane Roe", "Sales")
            .with_attendance("EMP001", date("2026-10-01"), AttendanceStatus::Present)
            .with_attendance("EMP002", date("2026-10-01"), AttendanceStatus::Absent);

        gw.delete("EMP001").await.unwrap();

        assert_eq!(gw.employee_count(), 1);
        assert!(gw.get_by_employee("EMP001").await.unwrap().is_empty());
        assert_eq!(gw.get_by_employee("EMP002").await.unwrap().len(), 1);
    }

    #[actix_web::test]
    async fn marking_the_same_day_twice_updates_in_place() {
        let gw = InMemoryGateway::new().with_employee("EMP001", "John Doe", "Engineering");
        let mut draft = AttendanceDraft::new(date("2026-10-01"));
        draft.employee_id = "EMP001".into();

        let first = gw.mark(&draft).await.unwrap();
        draft.status = AttendanceStatus::Absent;
        let second = gw.mark(&draft).await.unwrap();

        assert_eq!(first.message, "Attendance marked successfully for 2026-10-01");
        assert_eq!(second.message, "Attendance updated successfully for 2026-10-01");
        let records = gw.get_by_employee("EMP001").await.unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].status, AttendanceStatus::Absent);
    }

    #[actix_web::test]
    async fn records_come_back_newest_first() {
        let gw = InMemoryGateway::new()
            .with_employee("EMP001", "John Doe", "Engineering")
            .with_attendance("EMP001", date("2026-09-01"), AttendanceStatus::Present)
            .with_attendance("EMP001", date("2026-10-01"), AttendanceStatus::Absent);

        let dates: Vec<NaiveDate> = AttendanceApi::get_all(&gw)
            .await
            .unwrap()
            .into_iter()
            .map(|r| r.date)
            .collect();
        assert_eq!(dates, [date("2026-10-01"), date("2026-09-01")]);
    }

    #[actix_web::test]
    async fn employee_lookup_by_business_id() {
        let gw = InMemoryGateway::new().with_employee("EMP001", "John Doe", "Engineering");

        let found = gw.get_by_id("EMP001").await.unwrap();
        let missing = gw.get_by_id("EMP404").await.unwrap_err();

        assert_eq!(found.full_name, "John Doe");
        assert_eq!(missing.message, "Employee with ID 'EMP404' not found");
        assert_eq!(
            gw.calls(),
            vec![Call::GetEmployee("EMP001".into()), Call::GetEmployee("EMP404".into())]
        );

        gw.set_offline(true);
        assert_eq!(gw.get_by_id("EMP001").await.unwrap_err().message, "Failed to fetch employee");
    }

    #[actix_web::test]
    async fn offline_backend_reports_endpoint_fallbacks() {
        let gw = InMemoryGateway::new();
        gw.set_offline(true);

        let err = EmployeeApi::get_all(&gw).await.unwrap_err();
        assert_eq!(err.message, "Failed to fetch employees");
        let err = gw.delete("EMP001").await.unwrap_err();
        assert_eq!(err.message, "Failed to delete employee");
        assert_eq!(gw.calls().len(), 2);
    }
}
