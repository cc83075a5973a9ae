use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Default for Priority {
    fn default() -> Self {
        Priority::Medium
    }
}

#[derive(Error, Debug, PartialEq)]
#[error("Invalid priority: {0}")]
pub struct ParsePriorityError(String);

impl FromStr for Priority {
    type Err = ParsePriorityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "low" => Ok(Priority::Low),
            "medium" => Ok(Priority::Medium),
            "high" => Ok(Priority::High),
            _ => Err(ParsePriorityError(s.to_string())),
        }
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Priority::Low => write!(f, "low"),
            Priority::Medium => write!(f, "medium"),
            Priority::High => write!(f, "high"),
        }
    }
}

/// Calendar unit between occurrences of a recurring series.
///
/// Wire tokens are `daily|weekly|monthly|yearly`. Any unrecognized token
/// maps to `Daily` rather than failing — a deliberate fallback, so stored
/// data with an unknown unit degrades to the smallest step instead of
/// rejecting the whole record.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum RecurrenceUnit {
    Daily,
    Weekly,
    Monthly,
    Yearly,
}

impl RecurrenceUnit {
    /// Parse a wire token, falling back to `Daily` for anything unknown.
    pub fn from_token(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "weekly" => RecurrenceUnit::Weekly,
            "monthly" => RecurrenceUnit::Monthly,
            "yearly" => RecurrenceUnit::Yearly,
            _ => RecurrenceUnit::Daily,
        }
    }
}

impl FromStr for RecurrenceUnit {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(RecurrenceUnit::from_token(s))
    }
}

impl<'de> Deserialize<'de> for RecurrenceUnit {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let token = String::deserialize(deserializer)?;
        Ok(RecurrenceUnit::from_token(&token))
    }
}

impl std::fmt::Display for RecurrenceUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RecurrenceUnit::Daily => write!(f, "daily"),
            RecurrenceUnit::Weekly => write!(f, "weekly"),
            RecurrenceUnit::Monthly => write!(f, "monthly"),
            RecurrenceUnit::Yearly => write!(f, "yearly"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    pub id: Uuid,
    pub name: String,
    pub color: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    pub id: Uuid,
    pub title: String,
    pub category_id: Uuid,
    pub priority: Priority,
    /// Calendar-day due date; no time-of-day or timezone component.
    pub due_date: Option<NaiveDate>,
    pub completed: bool,
    pub archived: bool,
    pub created_at: DateTime<Utc>,
    /// Set only by the recurrence engine on generated instances.
    pub series_id: Option<Uuid>,
    /// Marks the task as a generated occurrence of its series.
    pub recurring_instance: bool,
}

impl Default for Task {
    fn default() -> Self {
        Self {
            id: Uuid::now_v7(),
            title: "".to_string(),
            category_id: Uuid::nil(),
            priority: Priority::Medium,
            due_date: None,
            completed: false,
            archived: false,
            created_at: Utc::now(),
            series_id: None,
            recurring_instance: false,
        }
    }
}

/// Template governing generation of future task instances.
///
/// The series owns the generation policy; instances are independent records.
/// Edits flow forward only — the next generated instance picks up the
/// series' current title/category/priority, past instances are untouched.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecurringSeries {
    pub id: Uuid,
    pub title: String,
    pub category_id: Uuid,
    pub priority: Priority,
    pub unit: RecurrenceUnit,
    /// Number of units between occurrences, >= 1.
    pub interval: u32,
    /// Upper bound on generated occurrences; the series retires once the
    /// computed next due date passes it.
    pub end_date: Option<NaiveDate>,
    /// Due date of the next instance not yet created.
    pub next_due: NaiveDate,
    /// A paused series generates nothing until externally unpaused.
    pub paused: bool,
    pub created_at: DateTime<Utc>,
}

impl Default for RecurringSeries {
    fn default() -> Self {
        Self {
            id: Uuid::now_v7(),
            title: "".to_string(),
            category_id: Uuid::nil(),
            priority: Priority::Medium,
            unit: RecurrenceUnit::Daily,
            interval: 1,
            end_date: None,
            next_due: Utc::now().date_naive(),
            paused: false,
            created_at: Utc::now(),
        }
    }
}

// ============================================================================
// Data Transfer Objects
// ============================================================================

/// Recurrence options attached to a new task.
#[derive(Debug, Clone, Copy)]
pub struct Recurrence {
    pub unit: RecurrenceUnit,
    pub interval: u32,
    pub end_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, Default)]
pub struct NewTaskData {
    pub title: String,
    pub category_id: Uuid,
    pub priority: Option<Priority>,
    pub due_date: Option<NaiveDate>,
    /// When present, a RecurringSeries is created instead of a plain task
    /// and the first instance is generated immediately.
    pub recurrence: Option<Recurrence>,
    /// For creating series instances: links the task to its series.
    /// Engine-internal; hand-authored input is stripped of it.
    pub series_id: Option<Uuid>,
    pub recurring_instance: bool,
}

#[derive(Debug, Clone, Default)]
pub struct UpdateTaskData {
    pub title: Option<String>,
    pub category_id: Option<Uuid>,
    pub priority: Option<Priority>,
    pub due_date: Option<Option<NaiveDate>>,
    pub completed: Option<bool>,
    pub archived: Option<bool>,
}

#[derive(Debug, Clone)]
pub struct NewSeriesData {
    pub title: String,
    pub category_id: Uuid,
    pub priority: Priority,
    /// Due date of the first instance; the series starts with
    /// `next_due = start`.
    pub start: NaiveDate,
    pub unit: RecurrenceUnit,
    pub interval: u32,
    pub end_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, Default)]
pub struct UpdateSeriesData {
    pub title: Option<String>,
    pub category_id: Option<Uuid>,
    pub priority: Option<Priority>,
    pub unit: Option<RecurrenceUnit>,
    pub interval: Option<u32>,
    pub end_date: Option<Option<NaiveDate>>,
    /// Pause/resume the series. Resuming a retired series is permitted
    /// but never initiated by the engine itself.
    pub paused: Option<bool>,
    /// Engine-internal: due-date advancement after generating an instance.
    pub next_due: Option<NaiveDate>,
}

#[derive(Debug, Clone, Default)]
pub struct NewCategoryData {
    pub name: String,
    pub color: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct UpdateCategoryData {
    pub name: Option<String>,
    pub color: Option<Option<String>>,
}

// ============================================================================
// Operation results
// ============================================================================

#[derive(Debug)]
pub enum TaskCreation {
    Single(Task),
    Recurring(SeriesCreation),
}

/// A freshly created series together with its unconditionally generated
/// first instance.
#[derive(Debug)]
pub struct SeriesCreation {
    pub series: RecurringSeries,
    pub first_task: Task,
}

#[derive(Debug)]
pub enum CompletionResult {
    Single(Task),
    Recurring {
        completed: Task,
        /// The next instance, when the series was due at completion time.
        next: Option<Task>,
    },
}
