use crate::models::{Priority, Task};
use uuid::Uuid;

/// Predicate set applied client-side over the full task list.
///
/// Every populated field must match; an empty filter matches everything.
#[derive(Debug, Clone, Default)]
pub struct TaskFilter {
    /// Case-insensitive substring match on the title.
    pub text: Option<String>,
    pub category_id: Option<Uuid>,
    pub priority: Option<Priority>,
    pub completed: Option<bool>,
    pub archived: Option<bool>,
}

impl TaskFilter {
    pub fn matches(&self, task: &Task) -> bool {
        if let Some(text) = &self.text {
            if !task.title.to_lowercase().contains(&text.to_lowercase()) {
                return false;
            }
        }
        if let Some(category_id) = self.category_id {
            if task.category_id != category_id {
                return false;
            }
        }
        if let Some(priority) = self.priority {
            if task.priority != priority {
                return false;
            }
        }
        if let Some(completed) = self.completed {
            if task.completed != completed {
                return false;
            }
        }
        if let Some(archived) = self.archived {
            if task.archived != archived {
                return false;
            }
        }
        true
    }
}
