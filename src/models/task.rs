//! Task and category payloads.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use url::Url;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaskStatus {
    Todo,
    InProgress,
    Done,
    Cancelled,
}

impl TaskStatus {
    /// Wire value, as used in query strings.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Todo => "TODO",
            Self::InProgress => "IN_PROGRESS",
            Self::Done => "DONE",
            Self::Cancelled => "CANCELLED",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Priority {
    Low,
    Medium,
    High,
    Urgent,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "LOW",
            Self::Medium => "MEDIUM",
            Self::High => "HIGH",
            Self::Urgent => "URGENT",
        }
    }
}

/// Category summary embedded in a task.
#[derive(Debug, Clone, Deserialize)]
pub struct CategoryRef {
    pub id: String,
    pub name: String,
    pub color: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub status: TaskStatus,
    pub priority: Priority,
    pub due_date: Option<DateTime<Utc>>,
    pub position: i64,
    pub completed_at: Option<DateTime<Utc>>,
    pub category: Option<CategoryRef>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: String,
    pub name: String,
    pub color: String,
    pub task_count: u64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Body of `POST /tasks`. Optional fields are omitted from the JSON when
/// unset so server-side defaults apply.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTaskData {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<String>,
}

impl CreateTaskData {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
            priority: None,
            due_date: None,
            category_id: None,
        }
    }
}

/// Body of `PATCH /tasks/{id}`. Only the set fields are sent.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTaskData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<TaskStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

/// Query parameters of `GET /tasks`. Unset fields and empty search strings
/// are left out of the URL.
#[derive(Debug, Clone, Default)]
pub struct TaskQuery {
    pub page: Option<u32>,
    pub limit: Option<u32>,
    pub status: Option<TaskStatus>,
    pub priority: Option<Priority>,
    pub category_id: Option<String>,
    pub search: Option<String>,
    pub sort_by: Option<String>,
    pub sort_order: Option<SortOrder>,
}

impl TaskQuery {
    pub(crate) fn append_to(&self, url: &mut Url) {
        let mut pairs = url.query_pairs_mut();
        if let Some(page) = self.page {
            pairs.append_pair("page", &page.to_string());
        }
        if let Some(limit) = self.limit {
            pairs.append_pair("limit", &limit.to_string());
        }
        if let Some(status) = self.status {
            pairs.append_pair("status", status.as_str());
        }
        if let Some(priority) = self.priority {
            pairs.append_pair("priority", priority.as_str());
        }
        if let Some(category_id) = &self.category_id {
            pairs.append_pair("categoryId", category_id);
        }
        if let Some(search) = self.search.as_deref().filter(|s| !s.is_empty()) {
            pairs.append_pair("search", search);
        }
        if let Some(sort_by) = &self.sort_by {
            pairs.append_pair("sortBy", sort_by);
        }
        if let Some(sort_order) = self.sort_order {
            pairs.append_pair("sortOrder", sort_order.as_str());
        }
        drop(pairs);
        // Keep "no parameters" URLs clean: `/tasks` rather than `/tasks?`.
        if url.query() == Some("") {
            url.set_query(None);
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub page: u32,
    pub limit: u32,
    pub total: u64,
    pub total_pages: u32,
}

/// One page of `GET /tasks` results.
#[derive(Debug, Clone, Deserialize)]
pub struct TaskPage {
    pub tasks: Vec<Task>,
    pub pagination: Pagination,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskStats {
    pub total_tasks: u64,
    pub completed_tasks: u64,
    pub completion_rate: f64,
    pub status_breakdown: HashMap<TaskStatus, u64>,
    pub priority_breakdown: HashMap<Priority, u64>,
}

/// `{ task, message }` envelope of the task mutation endpoints.
#[derive(Debug, Clone, Deserialize)]
pub struct TaskResponse {
    pub task: Task,
    pub message: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct CreateCategoryData {
    pub name: String,
    pub color: String,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateCategoryData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CategoryResponse {
    pub category: Category,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_task_omits_unset_fields() {
        let data = CreateTaskData::new("Write report");
        let json = serde_json::to_value(&data).unwrap();
        assert_eq!(json["title"], "Write report");
        assert!(json.get("description").is_none());
        assert!(json.get("categoryId").is_none());
    }

    #[test]
    fn test_create_task_uses_camel_case_keys() {
        let mut data = CreateTaskData::new("t");
        data.category_id = Some("c1".to_string());
        data.priority = Some(Priority::Urgent);
        let json = serde_json::to_value(&data).unwrap();
        assert_eq!(json["categoryId"], "c1");
        assert_eq!(json["priority"], "URGENT");
    }

    #[test]
    fn test_task_query_builds_expected_url() {
        let mut url = Url::parse("http://localhost:3000/tasks").unwrap();
        let query = TaskQuery {
            page: Some(2),
            limit: Some(20),
            status: Some(TaskStatus::InProgress),
            search: Some("report".to_string()),
            sort_order: Some(SortOrder::Desc),
            ..Default::default()
        };
        query.append_to(&mut url);

        let q = url.query().unwrap();
        assert!(q.contains("page=2"));
        assert!(q.contains("limit=20"));
        assert!(q.contains("status=IN_PROGRESS"));
        assert!(q.contains("search=report"));
        assert!(q.contains("sortOrder=desc"));
    }

    #[test]
    fn test_task_query_skips_empty_search() {
        let mut url = Url::parse("http://localhost:3000/tasks").unwrap();
        let query = TaskQuery {
            search: Some(String::new()),
            ..Default::default()
        };
        query.append_to(&mut url);
        assert_eq!(url.query(), None);
    }

    #[test]
    fn test_task_deserializes_with_nested_category() {
        let task: Task = serde_json::from_str(
            r##"{
                "id": "t1",
                "title": "Ship release",
                "description": null,
                "status": "IN_PROGRESS",
                "priority": "HIGH",
                "dueDate": "2024-04-01T00:00:00.000Z",
                "position": 3,
                "completedAt": null,
                "category": { "id": "c1", "name": "Work", "color": "#ff0000" },
                "createdAt": "2024-03-01T08:00:00.000Z",
                "updatedAt": "2024-03-02T09:30:00.000Z"
            }"##,
        )
        .unwrap();

        assert_eq!(task.status, TaskStatus::InProgress);
        assert_eq!(task.priority, Priority::High);
        assert_eq!(task.category.unwrap().name, "Work");
        assert!(task.completed_at.is_none());
    }

    #[test]
    fn test_task_stats_breakdown_maps() {
        let stats: TaskStats = serde_json::from_str(
            r#"{
                "totalTasks": 10,
                "completedTasks": 4,
                "completionRate": 0.4,
                "statusBreakdown": { "TODO": 5, "DONE": 4, "CANCELLED": 1 },
                "priorityBreakdown": { "LOW": 2, "URGENT": 8 }
            }"#,
        )
        .unwrap();

        assert_eq!(stats.status_breakdown[&TaskStatus::Todo], 5);
        assert_eq!(stats.priority_breakdown[&Priority::Urgent], 8);
    }
}
