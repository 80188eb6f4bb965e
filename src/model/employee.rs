use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, EnumIter, EnumString};

/// Employee as returned by `GET /employees/`.
///
/// `employee_id` is the business key every attendance record refers to;
/// `id` is the backend's surrogate key and is only used for row identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    pub id: i64,
    pub employee_id: String,
    pub full_name: String,
    pub email: String,
    pub department: String,
}

/// Request body of `POST /employees/`, also the registration form's draft.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeDraft {
    #[serde(default)]
    pub employee_id: String,
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub department: String,
}

/// Editable fields of [`EmployeeDraft`], named as the form inputs are.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, AsRefStr, EnumIter)]
#[strum(serialize_all = "snake_case")]
pub enum EmployeeField {
    EmployeeId,
    FullName,
    Email,
    Department,
}

impl EmployeeDraft {
    pub fn set(&mut self, field: EmployeeField, value: impl Into<String>) {
        let value = value.into();
        match field {
            EmployeeField::EmployeeId => self.employee_id = value,
            EmployeeField::FullName => self.full_name = value,
            EmployeeField::Email => self.email = value,
            EmployeeField::Department => self.department = value,
        }
    }

    pub fn get(&self, field: EmployeeField) -> &str {
        match field {
            EmployeeField::EmployeeId => &self.employee_id,
            EmployeeField::FullName => &self.full_name,
            EmployeeField::Email => &self.email,
            EmployeeField::Department => &self.department,
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
