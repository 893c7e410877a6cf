//! Task Endpoints

use tasche_core::models::TaskNameArgs;
use tasche_core::{ApiError, Endpoint, Task, TaskList};

use super::ApiClient;

impl ApiClient {
    /// Active and archived tasks
    pub async fn list_tasks(&self) -> Result<TaskList, ApiError> {
        self.send(Endpoint::ListTasks, None).await
    }

    pub async fn create_task(&self, name: &str) -> Result<Task, ApiError> {
        self.send_json(Endpoint::CreateTask, &TaskNameArgs { name }).await
    }

    pub async fn rename_task(&self, task_id: &str, name: &str) -> Result<Task, ApiError> {
        self.send_json(Endpoint::UpdateTask(task_id), &TaskNameArgs { name }).await
    }

    /// Returns the tombstoned task
    pub async fn delete_task(&self, task_id: &str) -> Result<Task, ApiError> {
        self.send(Endpoint::DeleteTask(task_id), None).await
    }
}
