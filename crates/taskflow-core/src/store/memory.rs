//! In-memory store backing the task tracker.
//!
//! State lives in plain vectors behind a single `RwLock`, standing in for a
//! real persistence service. Every mutation takes one write guard for its
//! whole read-modify-write, so each call is atomic with respect to the
//! records it touches.

use crate::error::CoreError;
use crate::models::{
    Category, NewCategoryData, NewSeriesData, NewTaskData, Priority, RecurringSeries, Task,
    UpdateCategoryData, UpdateSeriesData, UpdateTaskData,
};
use async_trait::async_trait;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use uuid::Uuid;

#[derive(Debug, Default)]
struct State {
    tasks: Vec<Task>,
    series: Vec<RecurringSeries>,
    categories: Vec<Category>,
}

/// Serializable image of the full store contents.
///
/// Calendar dates encode as `YYYY-MM-DD`, recurrence units as their
/// lowercase tokens.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Snapshot {
    pub tasks: Vec<Task>,
    pub series: Vec<RecurringSeries>,
    pub categories: Vec<Category>,
}

#[derive(Debug, Default)]
pub struct MemoryStore {
    state: RwLock<State>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_snapshot(snapshot: Snapshot) -> Self {
        Self {
            state: RwLock::new(State {
                tasks: snapshot.tasks,
                series: snapshot.series,
                categories: snapshot.categories,
            }),
        }
    }

    pub async fn snapshot(&self) -> Snapshot {
        let state = self.state.read().await;
        Snapshot {
            tasks: state.tasks.clone(),
            series: state.series.clone(),
            categories: state.categories.clone(),
        }
    }

    /// A store pre-seeded with a few categories and tasks, standing in for
    /// the mock fixture data the tracker ships with.
    pub fn with_sample_data() -> Self {
        let work = Category {
            id: Uuid::now_v7(),
            name: "Work".to_string(),
            color: Some("#6366f1".to_string()),
            created_at: Utc::now(),
        };
        let personal = Category {
            id: Uuid::now_v7(),
            name: "Personal".to_string(),
            color: Some("#10b981".to_string()),
            created_at: Utc::now(),
        };
        let home = Category {
            id: Uuid::now_v7(),
            name: "Home".to_string(),
            color: Some("#f59e0b".to_string()),
            created_at: Utc::now(),
        };

        let today = Utc::now().date_naive();
        let sample_task = |title: &str, category: &Category, priority: Priority| Task {
            id: Uuid::now_v7(),
            title: title.to_string(),
            category_id: category.id,
            priority,
            due_date: Some(today),
            ..Task::default()
        };

        let tasks = vec![
            sample_task("Review quarterly report", &work, Priority::High),
            sample_task("Reply to project thread", &work, Priority::Medium),
            sample_task("Book dentist appointment", &personal, Priority::Low),
            sample_task("Plan weekend trip", &personal, Priority::Medium),
            sample_task("Water the plants", &home, Priority::Low),
        ];

        Self {
            state: RwLock::new(State {
                tasks,
                series: Vec::new(),
                categories: vec![work, personal, home],
            }),
        }
    }
}

#[async_trait]
impl super::TaskStore for MemoryStore {
    async fn create_task(&self, data: NewTaskData) -> Result<Task, CoreError> {
        let task = Task {
            id: Uuid::now_v7(),
            title: data.title,
            category_id: data.category_id,
            priority: data.priority.unwrap_or_default(),
            due_date: data.due_date,
            completed: false,
            archived: false,
            created_at: Utc::now(),
            series_id: data.series_id,
            recurring_instance: data.recurring_instance,
        };

        let mut state = self.state.write().await;
        if state.tasks.iter().any(|t| t.id == task.id) {
            return Err(CoreError::Invariant(format!("task id collision: {}", task.id)));
        }
        state.tasks.push(task.clone());
        Ok(task)
    }

    async fn find_task_by_id(&self, id: Uuid) -> Result<Option<Task>, CoreError> {
        let state = self.state.read().await;
        Ok(state.tasks.iter().find(|t| t.id == id).cloned())
    }

    async fn update_task(&self, id: Uuid, data: UpdateTaskData) -> Result<Task, CoreError> {
        let mut state = self.state.write().await;
        let task = state
            .tasks
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or_else(|| CoreError::task_not_found(id))?;

        if let Some(title) = data.title {
            task.title = title;
        }
        if let Some(category_id) = data.category_id {
            task.category_id = category_id;
        }
        if let Some(priority) = data.priority {
            task.priority = priority;
        }
        if let Some(due_date) = data.due_date {
            task.due_date = due_date;
        }
        if let Some(completed) = data.completed {
            task.completed = completed;
        }
        if let Some(archived) = data.archived {
            task.archived = archived;
        }

        Ok(task.clone())
    }

    async fn delete_task(&self, id: Uuid) -> Result<(), CoreError> {
        let mut state = self.state.write().await;
        let index = state
            .tasks
            .iter()
            .position(|t| t.id == id)
            .ok_or_else(|| CoreError::task_not_found(id))?;
        state.tasks.remove(index);
        Ok(())
    }

    async fn list_tasks(&self) -> Result<Vec<Task>, CoreError> {
        let state = self.state.read().await;
        Ok(state.tasks.clone())
    }
}

#[async_trait]
impl super::SeriesStore for MemoryStore {
    async fn create_series(&self, data: NewSeriesData) -> Result<RecurringSeries, CoreError> {
        let series = RecurringSeries {
            id: Uuid::now_v7(),
            title: data.title,
            category_id: data.category_id,
            priority: data.priority,
            unit: data.unit,
            interval: data.interval,
            end_date: data.end_date,
            next_due: data.start,
            paused: false,
            created_at: Utc::now(),
        };

        let mut state = self.state.write().await;
        if state.series.iter().any(|s| s.id == series.id) {
            return Err(CoreError::Invariant(format!("series id collision: {}", series.id)));
        }
        state.series.push(series.clone());
        Ok(series)
    }

    async fn find_series_by_id(&self, id: Uuid) -> Result<Option<RecurringSeries>, CoreError> {
        let state = self.state.read().await;
        Ok(state.series.iter().find(|s| s.id == id).cloned())
    }

    async fn update_series(
        &self,
        id: Uuid,
        data: UpdateSeriesData,
    ) -> Result<RecurringSeries, CoreError> {
        let mut state = self.state.write().await;
        let series = state
            .series
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or_else(|| CoreError::series_not_found(id))?;

        if let Some(title) = data.title {
            series.title = title;
        }
        if let Some(category_id) = data.category_id {
            series.category_id = category_id;
        }
        if let Some(priority) = data.priority {
            series.priority = priority;
        }
        if let Some(unit) = data.unit {
            series.unit = unit;
        }
        if let Some(interval) = data.interval {
            series.interval = interval;
        }
        if let Some(end_date) = data.end_date {
            series.end_date = end_date;
        }
        if let Some(paused) = data.paused {
            series.paused = paused;
        }
        if let Some(next_due) = data.next_due {
            series.next_due = next_due;
        }

        Ok(series.clone())
    }

    async fn delete_series(&self, id: Uuid) -> Result<(), CoreError> {
        let mut state = self.state.write().await;
        let index = state
            .series
            .iter()
            .position(|s| s.id == id)
            .ok_or_else(|| CoreError::series_not_found(id))?;
        state.series.remove(index);
        Ok(())
    }

    async fn list_series(&self) -> Result<Vec<RecurringSeries>, CoreError> {
        let state = self.state.read().await;
        Ok(state.series.clone())
    }
}

#[async_trait]
impl super::CategoryStore for MemoryStore {
    async fn create_category(&self, data: NewCategoryData) -> Result<Category, CoreError> {
        let category = Category {
            id: Uuid::now_v7(),
            name: data.name,
            color: data.color,
            created_at: Utc::now(),
        };

        let mut state = self.state.write().await;
        state.categories.push(category.clone());
        Ok(category)
    }

    async fn find_category_by_id(&self, id: Uuid) -> Result<Option<Category>, CoreError> {
        let state = self.state.read().await;
        Ok(state.categories.iter().find(|c| c.id == id).cloned())
    }

    async fn update_category(
        &self,
        id: Uuid,
        data: UpdateCategoryData,
    ) -> Result<Category, CoreError> {
        let mut state = self.state.write().await;
        let category = state
            .categories
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(|| CoreError::category_not_found(id))?;

        if let Some(name) = data.name {
            category.name = name;
        }
        if let Some(color) = data.color {
            category.color = color;
        }

        Ok(category.clone())
    }

    async fn delete_category(&self, id: Uuid) -> Result<(), CoreError> {
        let mut state = self.state.write().await;
        let index = state
            .categories
            .iter()
            .position(|c| c.id == id)
            .ok_or_else(|| CoreError::category_not_found(id))?;
        state.categories.remove(index);
        Ok(())
    }

    async fn list_categories(&self) -> Result<Vec<Category>, CoreError> {
        let state = self.state.read().await;
        Ok(state.categories.clone())
    }
}

impl super::Store for MemoryStore {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RecurrenceUnit;
    use crate::store::TaskStore;
    use chrono::NaiveDate;

    #[tokio::test]
    async fn test_snapshot_round_trip() {
        let store = MemoryStore::with_sample_data();
        let snapshot = store.snapshot().await;

        let json = serde_json::to_string(&snapshot).expect("snapshot serializes");
        let restored: Snapshot = serde_json::from_str(&json).expect("snapshot deserializes");

        assert_eq!(restored.tasks.len(), snapshot.tasks.len());
        assert_eq!(restored.categories.len(), snapshot.categories.len());
        assert_eq!(restored.tasks[0].id, snapshot.tasks[0].id);
        assert_eq!(restored.tasks[0].title, snapshot.tasks[0].title);
    }

    #[test]
    fn test_series_wire_encoding() {
        let series = RecurringSeries {
            unit: RecurrenceUnit::Weekly,
            interval: 2,
            next_due: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
            end_date: Some(NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()),
            ..RecurringSeries::default()
        };

        let value = serde_json::to_value(&series).unwrap();
        assert_eq!(value["unit"], "weekly");
        assert_eq!(value["next_due"], "2024-01-15");
        assert_eq!(value["end_date"], "2024-06-01");
    }

    #[test]
    fn test_unknown_unit_token_falls_back_to_daily() {
        let series = RecurringSeries::default();
        let mut value = serde_json::to_value(&series).unwrap();
        value["unit"] = serde_json::Value::String("fortnightly".to_string());

        let restored: RecurringSeries = serde_json::from_value(value).unwrap();
        assert_eq!(restored.unit, RecurrenceUnit::Daily);
    }

    #[tokio::test]
    async fn test_update_unknown_task_is_not_found() {
        let store = MemoryStore::new();
        let result = store.update_task(Uuid::now_v7(), UpdateTaskData::default()).await;
        assert!(matches!(result, Err(CoreError::NotFound(_))));
    }
}
