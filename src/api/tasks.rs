//! Task CRUD, querying, and statistics.

use reqwest::Method;

use crate::error::ApiError;
use crate::models::{
    ApiMessage, CreateTaskData, Task, TaskPage, TaskQuery, TaskResponse, TaskStats, UpdateTaskData,
};

use super::{ApiClient, Body};

impl ApiClient {
    /// `POST /tasks`.
    pub async fn create_task(&self, data: &CreateTaskData) -> Result<TaskResponse, ApiError> {
        self.post("/tasks", data).await
    }

    /// `GET /tasks` with pagination, filtering, search, and sort parameters.
    pub async fn list_tasks(&self, query: &TaskQuery) -> Result<TaskPage, ApiError> {
        let mut url = self.endpoint("/tasks")?;
        query.append_to(&mut url);
        self.request(Method::GET, url, Body::Empty).await
    }

    /// `GET /tasks/{id}`.
    pub async fn get_task(&self, task_id: &str) -> Result<Task, ApiError> {
        self.get_path(&format!("/tasks/{task_id}")).await
    }

    /// `PATCH /tasks/{id}`.
    pub async fn update_task(
        &self,
        task_id: &str,
        data: &UpdateTaskData,
    ) -> Result<TaskResponse, ApiError> {
        self.patch(&format!("/tasks/{task_id}"), data).await
    }

    /// `DELETE /tasks/{id}`.
    pub async fn delete_task(&self, task_id: &str) -> Result<ApiMessage, ApiError> {
        self.delete_path(&format!("/tasks/{task_id}")).await
    }

    /// `GET /tasks/stats`.
    pub async fn task_stats(&self) -> Result<TaskStats, ApiError> {
        self.get_path("/tasks/stats").await
    }
}
