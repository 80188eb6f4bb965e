//! Screen components. Each one owns its state and talks to the backend only
//! through the gateway traits; the owning page wires them together.
//!
//! Operations come in two forms: an `async` method for callers that can hold
//! the component across the request, and a `begin_*`/`finish_*` pair for the
//! pages, which release the page lock while the request is in flight.

pub mod attendance_form;
pub mod attendance_view;
pub mod employee_directory;
pub mod employee_form;
pub mod flash;

pub use attendance_form::AttendanceForm;
pub use attendance_view::{AttendanceView, RecordsDisplay, Selection};
pub use employee_directory::{EmployeeDirectory, RefreshTrigger};
pub use employee_form::EmployeeForm;
pub use flash::Flash;
