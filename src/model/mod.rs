pub mod attendance;
pub mod employee;
pub mod message;

pub use attendance::{AttendanceDraft, AttendanceField, AttendanceRecord, AttendanceStatus, AttendanceSummary};
pub use employee::{Employee, EmployeeDraft, EmployeeField};
pub use message::{ApiMessage, BackendHealth};
