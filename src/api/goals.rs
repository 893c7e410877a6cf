//! Weekly Goal Endpoints

use tasche_core::{ApiError, Endpoint, GoalsResponse, GoalsUpdate, GoalsUpdateResponse};

use super::ApiClient;

impl ApiClient {
    pub async fn current_goals(&self) -> Result<GoalsResponse, ApiError> {
        self.send(Endpoint::CurrentGoals, None).await
    }

    pub async fn update_current_goals(&self, update: &GoalsUpdate) -> Result<GoalsUpdateResponse, ApiError> {
        self.send_json(Endpoint::UpdateCurrentGoals, update).await
    }
}
