use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum TaskStatus {
    #[serde(rename = "To Do")]
    ToDo,
    #[serde(rename = "In Progress")]
    InProgress,
    Done,
}

impl TaskStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::ToDo => "To Do",
            TaskStatus::InProgress => "In Progress",
            TaskStatus::Done => "Done",
        }
    }

    /// Identifier-safe column key: the status label with whitespace
    /// collapsed to dashes, e.g. "In Progress" -> "In-Progress".
    pub fn column_key(&self) -> String {
        self.as_str().split_whitespace().collect::<Vec<_>>().join("-")
    }

    pub fn from_label(label: &str) -> Option<TaskStatus> {
        TaskStatus::all().into_iter().find(|s| s.as_str() == label)
    }

    pub fn all() -> Vec<TaskStatus> {
        vec![TaskStatus::ToDo, TaskStatus::InProgress, TaskStatus::Done]
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "Low",
            Priority::Medium => "Medium",
            Priority::High => "High",
        }
    }

    /// Sort rank, High=3 > Medium=2 > Low=1.
    pub fn rank(&self) -> u8 {
        match self {
            Priority::Low => 1,
            Priority::Medium => 2,
            Priority::High => 3,
        }
    }

    pub fn from_label(label: &str) -> Option<Priority> {
        Priority::all().into_iter().find(|p| p.as_str() == label)
    }

    pub fn all() -> Vec<Priority> {
        vec![Priority::Low, Priority::Medium, Priority::High]
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Task {
    pub id: String,
    pub title: String,
    pub description: String,
    pub status: TaskStatus,
    pub priority: Priority,
    #[serde(default, deserialize_with = "lenient_due_date")]
    pub due_date: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub assignee: Option<String>,
}

impl Task {
    pub fn new(
        title: String,
        description: String,
        status: TaskStatus,
        priority: Priority,
        due_date: Option<NaiveDate>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            title,
            description,
            status,
            priority,
            due_date,
            created_at: Utc::now(),
            assignee: None,
        }
    }
}

// Due dates arrive as "%Y-%m-%d" strings and may be missing, empty, or
// garbage; anything that doesn't parse behaves like no due date at all.
fn lenient_due_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.and_then(|s| NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()))
}
