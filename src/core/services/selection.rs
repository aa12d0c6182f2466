use crate::models::{Priority, TaskStatus};

/// Status dropdown state: "All" or one concrete status label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusFilter {
    All,
    Only(TaskStatus),
}

impl StatusFilter {
    /// Parse a dropdown value. Unknown labels fold to `All` so a stale or
    /// mistyped option can never hide the whole board.
    pub fn from_value(value: &str) -> Self {
        TaskStatus::from_label(value)
            .map(StatusFilter::Only)
            .unwrap_or(StatusFilter::All)
    }

    pub fn value(&self) -> &'static str {
        match self {
            StatusFilter::All => "All",
            StatusFilter::Only(status) => status.as_str(),
        }
    }

    pub fn matches(&self, status: TaskStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(wanted) => *wanted == status,
        }
    }
}

/// Priority dropdown state, same contract as [`StatusFilter`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriorityFilter {
    All,
    Only(Priority),
}

impl PriorityFilter {
    pub fn from_value(value: &str) -> Self {
        Priority::from_label(value)
            .map(PriorityFilter::Only)
            .unwrap_or(PriorityFilter::All)
    }

    pub fn value(&self) -> &'static str {
        match self {
            PriorityFilter::All => "All",
            PriorityFilter::Only(priority) => priority.as_str(),
        }
    }

    pub fn matches(&self, priority: Priority) -> bool {
        match self {
            PriorityFilter::All => true,
            PriorityFilter::Only(wanted) => *wanted == priority,
        }
    }
}

/// Sort dropdown state. Every wire value the control can emit maps to one
/// variant; anything else folds to `Unsorted`, which leaves the incoming
/// task order untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    #[default]
    Unsorted,
    DueDateAsc,
    DueDateDesc,
    Priority,
    CreationDateAsc,
    CreationDateDesc,
}

impl SortKey {
    pub fn from_value(value: &str) -> Self {
        match value {
            "due_date_asc" => SortKey::DueDateAsc,
            "due_date_desc" => SortKey::DueDateDesc,
            "priority" => SortKey::Priority,
            "creation_date_asc" => SortKey::CreationDateAsc,
            "creation_date_desc" => SortKey::CreationDateDesc,
            _ => SortKey::Unsorted,
        }
    }

    pub fn value(&self) -> &'static str {
        match self {
            SortKey::Unsorted => "",
            SortKey::DueDateAsc => "due_date_asc",
            SortKey::DueDateDesc => "due_date_desc",
            SortKey::Priority => "priority",
            SortKey::CreationDateAsc => "creation_date_asc",
            SortKey::CreationDateDesc => "creation_date_desc",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortKey::Unsorted => "None",
            SortKey::DueDateAsc => "Due date (earliest first)",
            SortKey::DueDateDesc => "Due date (latest first)",
            SortKey::Priority => "Priority (high to low)",
            SortKey::CreationDateAsc => "Created (oldest first)",
            SortKey::CreationDateDesc => "Created (newest first)",
        }
    }

    pub fn all() -> Vec<SortKey> {
        vec![
            SortKey::Unsorted,
            SortKey::DueDateAsc,
            SortKey::DueDateDesc,
            SortKey::Priority,
            SortKey::CreationDateAsc,
            SortKey::CreationDateDesc,
        ]
    }
}

/// The three current dropdown values, read fresh on every refresh.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    pub status: StatusFilter,
    pub priority: PriorityFilter,
    pub sort: SortKey,
}

impl Default for Selection {
    fn default() -> Self {
        Self {
            status: StatusFilter::All,
            priority: PriorityFilter::All,
            sort: SortKey::Unsorted,
        }
    }
}
