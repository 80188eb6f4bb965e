use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

/// Presence determination for one employee on one day.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
    AsRefStr, EnumIter,
)]
pub enum AttendanceStatus {
    #[default]
    Present,
    Absent,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    pub id: i64,
    pub employee_id: String,
    pub date: NaiveDate,
    pub status: AttendanceStatus,
    /// Only filled by `GET /attendance/`, which joins the employee.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
}

impl AttendanceRecord {
    pub fn weekday_name(&self) -> &'static str {
        weekday_name(self.date.weekday())
    }
}

/// Request body of `POST /attendance/`, also the marking form's draft.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceDraft {
    pub employee_id: String,
    pub date: NaiveDate,
    pub status: AttendanceStatus,
}

impl AttendanceDraft {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            employee_id: String::new(),
            date: today,
            status: AttendanceStatus::default(),
        }
    }
}

/// Editable fields of [`AttendanceDraft`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, AsRefStr, EnumIter)]
#[strum(serialize_all = "snake_case")]
pub enum AttendanceField {
    EmployeeId,
    Date,
    Status,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AttendanceSummary {
    pub total: usize,
    pub present: usize,
    pub absent: usize,
}

impl AttendanceSummary {
    pub fn from_records(records: &[AttendanceRecord]) -> Self {
        records.iter().fold(
            Self {
                total: records.len(),
                ..Self::default()
            },
            |mut summary, record| {
                match record.status {
                    AttendanceStatus::Present => summary.present += 1,
                    AttendanceStatus::Absent => summary.absent += 1,
                }
                summary
            },
        )
    }
}

pub fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}
