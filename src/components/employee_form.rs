use std::time::Instant;

use tracing::debug;

use super::flash::Flash;
use crate::gateway::{EmployeeApi, FetchError};
use crate::model::{ApiMessage, EmployeeDraft, EmployeeField};

/// State of the "Add New Employee" card.
#[derive(Debug, Default)]
pub struct EmployeeForm {
    draft: EmployeeDraft,
    loading: bool,
    error: Option<String>,
    success: Flash,
}

impl EmployeeForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn draft(&self) -> &EmployeeDraft {
        &self.draft
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

    /// Inputs are disabled while a submission is in flight.
    pub fn on_field_change(&mut self, field: EmployeeField, value: impl Into<String>) {
        if !self.loading {
            self.draft.set(field, value);
        }
    }

    /// First half of a submission: returns the draft to send, or `None`
    /// when a submission is already in flight.
    pub fn begin_submit(&mut self) -> Option<EmployeeDraft> {
        if self.loading {
            return None;
        }
        self.error = None;
        self.success.clear();
        self.loading = true;
        Some(self.draft.clone())
    }

    /// Second half of a submission. Returns `true` when the employee was
    /// created and the owner should refresh dependent views.
    pub fn finish_submit(&mut self, result: Result<ApiMessage, FetchError>, now: Instant) -> bool {
        self.loading = false;
        match result {
            Ok(response) => {
                self.success.show(response.message, now);
                self.draft = EmployeeDraft::default();
                true
            }
            Err(err) => {
                self.error = Some(err.message);
                false
            }
        }
    }

    pub async fn on_submit<G: EmployeeApi>(&mut self, gateway: &G) -> bool {
        let Some(draft) = self.begin_submit() else {
            return false;
        };
        debug!(employee_id = %draft.employee_id, "Submitting new employee");
        let result = gateway.create(&draft).await;
        self.finish_submit(result, Instant::now())
    }
}
