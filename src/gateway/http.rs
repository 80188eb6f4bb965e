use reqwest::{Client, RequestBuilder, Url};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use super::{AttendanceApi, EmployeeApi, FetchError, HealthApi, fallback};
use crate::model::{
    ApiMessage, AttendanceDraft, AttendanceRecord, BackendHealth, Employee, EmployeeDraft,
};

/// reqwest backed gateway. Cheap to clone; clones share one connection pool.
#[derive(Clone, Debug)]
pub struct HttpGateway {
    client: Client,
    base_url: Url,
}

impl HttpGateway {
    /// `base_url` must be an http(s) URL; `Config` validates this.
    pub fn new(base_url: Url) -> Self {
        Self {
            client: Client::new(),
            base_url,
        }
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Appends path segments to the base URL, percent-encoding each one.
    /// A trailing `""` segment yields the collection form (`/employees/`).
    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    async fn send<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
        fallback: &str,
    ) -> Result<T, FetchError> {
        let response = request.send().await.map_err(|e| {
            warn!(error = %e, "Backend request failed");
            FetchError::new(fallback)
        })?;

        let status = response.status();
        let url = response.url().clone();
        debug!(%url, %status, "Backend responded");

        if status.is_success() {
            return response.json::<T>().await.map_err(|e| {
                warn!(error = %e, %url, "Undecodable backend response");
                FetchError::new(fallback)
            });
        }

        let body = response.json::<serde_json::Value>().await.ok();
        let err = FetchError::from_body(body.as_ref(), fallback);
        warn!(%url, %status, error = %err, "Backend rejected request");
        Err(err)
    }
}

impl EmployeeApi for HttpGateway {
    async fn get_all(&self) -> Result<Vec<Employee>, FetchError> {
        let url = self.endpoint(&["employees", ""]);
        self.send(self.client.get(url), fallback::LIST_EMPLOYEES).await
    }

    async fn get_by_id(&self, employee_id: &str) -> Result<Employee, FetchError> {
        let url = self.endpoint(&["employees", employee_id]);
        self.send(self.client.get(url), fallback::GET_EMPLOYEE).await
    }

    async fn create(&self, draft: &EmployeeDraft) -> Result<ApiMessage, FetchError> {
        let url = self.endpoint(&["employees", ""]);
        self.send(self.client.post(url).json(draft), fallback::CREATE_EMPLOYEE)
            .await
    }

    async fn delete(&self, employee_id: &str) -> Result<ApiMessage, FetchError> {
        let url = self.endpoint(&["employees", employee_id]);
        self.send(self.client.delete(url), fallback::DELETE_EMPLOYEE)
            .await
    }
}

impl AttendanceApi for HttpGateway {
    async fn mark(&self, record: &AttendanceDraft) -> Result<ApiMessage, FetchError> {
        let url = self.endpoint(&["attendance", ""]);
        self.send(self.client.post(url).json(record), fallback::MARK_ATTENDANCE)
            .await
    }

    async fn get_by_employee(
        &self,
        employee_id: &str,
    ) -> Result<Vec<AttendanceRecord>, FetchError> {
        let url = self.endpoint(&["attendance", employee_id]);
        self.send(self.client.get(url), fallback::EMPLOYEE_ATTENDANCE)
            .await
    }

    async fn get_all(&self) -> Result<Vec<AttendanceRecord>, FetchError> {
        let url = self.endpoint(&["attendance", ""]);
        self.send(self.client.get(url), fallback::ALL_ATTENDANCE).await
    }
}

impl HealthApi for HttpGateway {
    async fn health(&self) -> Result<BackendHealth, FetchError> {
        let url = self.endpoint(&["health"]);
        self.send(self.client.get(url), fallback::HEALTH).await
    }
}
