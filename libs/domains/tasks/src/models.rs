use chrono::{DateTime, Utc};
use domain_categories::models::Category;
use sea_orm::{DeriveActiveEnum, EnumIter};
use serde::{Deserialize, Deserializer, Serialize};
use strum::Display;
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

/// Task workflow status
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    Display,
    Default,
    DeriveActiveEnum,
    EnumIter,
    ToSchema,
)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "task_status")]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum TaskStatus {
    /// Not started yet
    #[default]
    #[sea_orm(string_value = "todo")]
    Todo,
    /// Actively being worked on
    #[sea_orm(string_value = "in_progress")]
    InProgress,
    /// Finished
    #[sea_orm(string_value = "completed")]
    Completed,
}

/// Task priority level
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    Display,
    Default,
    DeriveActiveEnum,
    EnumIter,
    ToSchema,
)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "task_priority")]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum TaskPriority {
    #[sea_orm(string_value = "low")]
    Low,
    #[default]
    #[sea_orm(string_value = "medium")]
    Medium,
    #[sea_orm(string_value = "high")]
    High,
}

/// Task entity - a unit of work, optionally assigned to a category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Task {
    /// Unique identifier
    pub id: i32,
    /// Task title
    pub title: String,
    /// Detailed description
    pub description: Option<String>,
    /// Current status
    pub status: TaskStatus,
    /// Priority level
    pub priority: TaskPriority,
    /// Foreign key to category, if assigned
    pub category_id: Option<i32>,
    /// The referenced category, eagerly attached on reads
    pub category: Option<Category>,
    /// Optional deadline
    pub due_date: Option<DateTime<Utc>>,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

/// DTO for creating a new task
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateTask {
    #[validate(length(min = 1, max = 200))]
    pub title: String,
    pub description: Option<String>,
    #[serde(default)]
    pub status: TaskStatus,
    #[serde(default)]
    pub priority: TaskPriority,
    pub category_id: Option<i32>,
    pub due_date: Option<DateTime<Utc>>,
}

/// Deserialize helper distinguishing an absent field from an explicit null.
///
/// Serde only calls this when the field is present in the body, so the outer
/// `Option` ends up `None` for absent fields and `Some(None)` for `null`.
fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Deserialize::deserialize(deserializer).map(Some)
}

/// DTO for updating an existing task
///
/// All fields are optional; fields absent from the request body are left
/// untouched. For nullable columns, an explicit `null` clears the value.
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateTask {
    #[validate(length(min = 1, max = 200))]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<String>)]
    pub description: Option<Option<String>>,
    pub status: Option<TaskStatus>,
    pub priority: Option<TaskPriority>,
    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<i32>)]
    pub category_id: Option<Option<i32>>,
    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<DateTime<Utc>>)]
    pub due_date: Option<Option<DateTime<Utc>>>,
}

/// DTO for updating only the task status
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct TaskStatusUpdate {
    pub status: TaskStatus,
}

/// Query filters for listing tasks, AND-combined
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema, IntoParams)]
pub struct TaskFilter {
    pub status: Option<TaskStatus>,
    pub priority: Option<TaskPriority>,
    pub category_id: Option<i32>,
}

impl TaskFilter {
    /// True when a task matches every present constraint
    pub fn matches(&self, task: &Task) -> bool {
        if let Some(status) = self.status {
            if task.status != status {
                return false;
            }
        }
        if let Some(priority) = self.priority {
            if task.priority != priority {
                return false;
            }
        }
        if let Some(category_id) = self.category_id {
            if task.category_id != Some(category_id) {
                return false;
            }
        }
        true
    }
}

/// Response for listing tasks
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TaskListResponse {
    /// Tasks ordered by creation time, newest first
    pub tasks: Vec<Task>,
    /// Total number of tasks matching the filter
    pub total: u64,
}

impl Task {
    /// Apply a partial update, refreshing `updated_at`
    pub fn apply_update(&mut self, update: UpdateTask) {
        if let Some(title) = update.title {
            self.title = title;
        }
        if let Some(description) = update.description {
            self.description = description;
        }
        if let Some(status) = update.status {
            self.status = status;
        }
        if let Some(priority) = update.priority {
            self.priority = priority;
        }
        if let Some(category_id) = update.category_id {
            self.category_id = category_id;
        }
        if let Some(due_date) = update.due_date {
            self.due_date = due_date;
        }
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_and_priority_serialize_as_lowercase_strings() {
        assert_eq!(
            serde_json::to_value(TaskStatus::InProgress).unwrap(),
            serde_json::json!("in_progress")
        );
        assert_eq!(
            serde_json::to_value(TaskPriority::High).unwrap(),
            serde_json::json!("high")
        );
    }

    #[test]
    fn create_task_defaults_status_and_priority() {
        let input: CreateTask = serde_json::from_str(r#"{"title": "Write report"}"#).unwrap();
        assert_eq!(input.status, TaskStatus::Todo);
        assert_eq!(input.priority, TaskPriority::Medium);
        assert!(input.category_id.is_none());
    }

    #[test]
    fn update_task_distinguishes_absent_from_null() {
        let absent: UpdateTask = serde_json::from_str(r#"{"title": "New"}"#).unwrap();
        assert_eq!(absent.category_id, None);

        let null: UpdateTask =
            serde_json::from_str(r#"{"category_id": null, "due_date": null}"#).unwrap();
        assert_eq!(null.category_id, Some(None));
        assert_eq!(null.due_date, Some(None));

        let set: UpdateTask = serde_json::from_str(r#"{"category_id": 3}"#).unwrap();
        assert_eq!(set.category_id, Some(Some(3)));
    }

    #[test]
    fn apply_update_only_touches_present_fields() {
        let mut task = Task {
            id: 1,
            title: "Original".to_string(),
            description: Some("keep me".to_string()),
            status: TaskStatus::Todo,
            priority: TaskPriority::Low,
            category_id: Some(2),
            category: None,
            due_date: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        task.apply_update(UpdateTask {
            title: Some("Renamed".to_string()),
            ..Default::default()
        });

        assert_eq!(task.title, "Renamed");
        assert_eq!(task.description.as_deref(), Some("keep me"));
        assert_eq!(task.status, TaskStatus::Todo);
        assert_eq!(task.category_id, Some(2));
    }

    #[test]
    fn apply_update_clears_nullable_fields_on_explicit_null() {
        let mut task = Task {
            id: 1,
            title: "Task".to_string(),
            description: Some("stale".to_string()),
            status: TaskStatus::Todo,
            priority: TaskPriority::Medium,
            category_id: Some(2),
            category: None,
            due_date: Some(Utc::now()),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        task.apply_update(UpdateTask {
            description: Some(None),
            category_id: Some(None),
            due_date: Some(None),
            ..Default::default()
        });

        assert!(task.description.is_none());
        assert!(task.category_id.is_none());
        assert!(task.due_date.is_none());
    }

    #[test]
    fn filter_combines_constraints_with_and() {
        let task = Task {
            id: 1,
            title: "Task".to_string(),
            description: None,
            status: TaskStatus::InProgress,
            priority: TaskPriority::High,
            category_id: Some(4),
            category: None,
            due_date: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        assert!(TaskFilter::default().matches(&task));
        assert!(
            TaskFilter {
                status: Some(TaskStatus::InProgress),
                priority: Some(TaskPriority::High),
                category_id: Some(4),
            }
            .matches(&task)
        );
        assert!(
            !TaskFilter {
                status: Some(TaskStatus::InProgress),
                priority: Some(TaskPriority::Low),
                category_id: None,
            }
            .matches(&task)
        );
    }
}
