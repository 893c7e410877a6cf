//! Dashboard Endpoints

use serde::de::IgnoredAny;
use tasche_core::dashboard::RecordRequest;
use tasche_core::{ApiError, DashboardSnapshot, Endpoint};

use super::ApiClient;

impl ApiClient {
    pub async fn dashboard(&self) -> Result<DashboardSnapshot, ApiError> {
        self.send(Endpoint::Dashboard, None).await
    }

    /// The acknowledgement body is not used; the caller refetches the snapshot
    pub async fn record_actual(&self, request: &RecordRequest) -> Result<(), ApiError> {
        let endpoint = Endpoint::RecordActual(request.day, &request.task_id);
        let _: IgnoredAny = self.send_json(endpoint, &request.body()).await?;
        Ok(())
    }
}
