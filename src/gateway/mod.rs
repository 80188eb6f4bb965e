//! Gateway to the HRMS backend.
//!
//! Every screen talks to the backend only through these traits. The
//! production implementation is [`HttpGateway`]; [`memory::InMemoryGateway`]
//! stands in for the backend in tests.
#![allow(async_fn_in_trait)]

pub mod error;
pub mod http;
pub mod memory;

pub use error::FetchError;
pub use http::HttpGateway;

use crate::model::{
    ApiMessage, AttendanceDraft, AttendanceRecord, BackendHealth, Employee, EmployeeDraft,
};

pub(crate) mod fallback {
    pub const LIST_EMPLOYEES: &str = "Failed to fetch employees";
    pub const GET_EMPLOYEE: &str = "Failed to fetch employee";
    pub const CREATE_EMPLOYEE: &str = "Failed to create employee";
    pub const DELETE_EMPLOYEE: &str = "Failed to delete employee";
    pub const MARK_ATTENDANCE: &str = "Failed to mark attendance";
    pub const EMPLOYEE_ATTENDANCE: &str = "Failed to fetch attendance";
    pub const ALL_ATTENDANCE: &str = "Failed to fetch attendance records";
    pub const HEALTH: &str = "Backend is unreachable";
}

/// `/employees` resource.
pub trait EmployeeApi {
    async fn get_all(&self) -> Result<Vec<Employee>, FetchError>;

    async fn get_by_id(&self, employee_id: &str) -> Result<Employee, FetchError>;

    async fn create(&self, draft: &EmployeeDraft) -> Result<ApiMessage, FetchError>;

    /// The backend also removes every attendance record of the employee.
    async fn delete(&self, employee_id: &str) -> Result<ApiMessage, FetchError>;
}

/// `/attendance` resource.
pub trait AttendanceApi {
    async fn mark(&self, record: &AttendanceDraft) -> Result<ApiMessage, FetchError>;

    /// Newest first. An employee without records yields an empty list.
    async fn get_by_employee(&self, employee_id: &str)
    -> Result<Vec<AttendanceRecord>, FetchError>;

    async fn get_all(&self) -> Result<Vec<AttendanceRecord>, FetchError>;
}

pub trait HealthApi {
    async fn health(&self) -> Result<BackendHealth, FetchError>;
}

/// Everything the pages need from a backend.
pub trait Gateway: EmployeeApi + AttendanceApi + HealthApi {}

impl<T: EmployeeApi + AttendanceApi + HealthApi> Gateway for T {}
