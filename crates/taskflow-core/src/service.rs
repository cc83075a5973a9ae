//! Task lifecycle operations behind one facade.
//!
//! `TaskFlow` wraps the store with validation and wires the completion
//! toggle to the recurrence engine. Individual task operations are unaware
//! of recurrence; the only crossover points are `add_task` (input carrying
//! a recurrence rule creates a series instead) and `toggle_complete`
//! (a transition to completed fires the engine's completion hook).

use chrono::Utc;
use uuid::Uuid;

use crate::error::CoreError;
use crate::models::{
    Category, CompletionResult, NewCategoryData, NewSeriesData, NewTaskData, RecurringSeries,
    SeriesCreation, Task, TaskCreation, UpdateCategoryData, UpdateSeriesData, UpdateTaskData,
};
use crate::query::TaskFilter;
use crate::recurrence::RecurrenceEngine;
use crate::store::Store;

pub struct TaskFlow<S: Store> {
    store: S,
}

impl<S: Store> TaskFlow<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// The underlying store, for snapshotting and direct reads.
    pub fn store(&self) -> &S {
        &self.store
    }

    fn engine(&self) -> RecurrenceEngine<'_, S> {
        RecurrenceEngine::new(&self.store)
    }

    // ------------------------------------------------------------------
    // Task operations
    // ------------------------------------------------------------------

    /// Creates a task, or a recurring series when the input carries a
    /// recurrence rule (the series path generates the first instance).
    pub async fn add_task(&self, mut data: NewTaskData) -> Result<TaskCreation, CoreError> {
        if data.title.trim().is_empty() {
            return Err(CoreError::Validation("title is required".to_string()));
        }

        if let Some(recurrence) = data.recurrence.take() {
            let start = data.due_date.ok_or_else(|| {
                CoreError::Validation("a recurring task requires a due date".to_string())
            })?;
            let creation = self
                .engine()
                .create_series(NewSeriesData {
                    title: data.title,
                    category_id: data.category_id,
                    priority: data.priority.unwrap_or_default(),
                    start,
                    unit: recurrence.unit,
                    interval: recurrence.interval,
                    end_date: recurrence.end_date,
                })
                .await?;
            return Ok(TaskCreation::Recurring(creation));
        }

        if self.store.find_category_by_id(data.category_id).await?.is_none() {
            return Err(CoreError::Validation(format!(
                "unknown category: {}",
                data.category_id
            )));
        }

        // Instances are minted by the engine only.
        data.series_id = None;
        data.recurring_instance = false;

        let task = self.store.create_task(data).await?;
        Ok(TaskCreation::Single(task))
    }

    pub async fn find_task(&self, id: Uuid) -> Result<Task, CoreError> {
        self.store
            .find_task_by_id(id)
            .await?
            .ok_or_else(|| CoreError::task_not_found(id))
    }

    pub async fn update_task(&self, id: Uuid, data: UpdateTaskData) -> Result<Task, CoreError> {
        if let Some(title) = &data.title {
            if title.trim().is_empty() {
                return Err(CoreError::Validation("title is required".to_string()));
            }
        }
        if let Some(category_id) = data.category_id {
            if self.store.find_category_by_id(category_id).await?.is_none() {
                return Err(CoreError::Validation(format!(
                    "unknown category: {category_id}"
                )));
            }
        }
        self.store.update_task(id, data).await
    }

    /// Flips the completed flag. A transition to completed on a recurring
    /// instance may generate the series' next instance; un-completing never
    /// reverses generation (recurrence is forward-only).
    pub async fn toggle_complete(&self, id: Uuid) -> Result<CompletionResult, CoreError> {
        let task = self.find_task(id).await?;
        let updated = self
            .store
            .update_task(
                id,
                UpdateTaskData {
                    completed: Some(!task.completed),
                    ..Default::default()
                },
            )
            .await?;

        if updated.completed && updated.series_id.is_some() {
            let today = Utc::now().date_naive();
            let next = self.engine().on_task_completed(id, today).await?;
            return Ok(CompletionResult::Recurring {
                completed: updated,
                next,
            });
        }

        Ok(CompletionResult::Single(updated))
    }

    pub async fn archive(&self, id: Uuid) -> Result<Task, CoreError> {
        self.store
            .update_task(
                id,
                UpdateTaskData {
                    archived: Some(true),
                    ..Default::default()
                },
            )
            .await
    }

    pub async fn unarchive(&self, id: Uuid) -> Result<Task, CoreError> {
        self.store
            .update_task(
                id,
                UpdateTaskData {
                    archived: Some(false),
                    ..Default::default()
                },
            )
            .await
    }

    pub async fn delete_task(&self, id: Uuid) -> Result<(), CoreError> {
        self.store.delete_task(id).await
    }

    /// Deletes every task in `ids` that still exists, skipping the rest.
    /// Returns how many were removed.
    pub async fn bulk_delete(&self, ids: &[Uuid]) -> Result<usize, CoreError> {
        let mut removed = 0;
        for &id in ids {
            match self.store.delete_task(id).await {
                Ok(()) => removed += 1,
                Err(CoreError::NotFound(_)) => continue,
                Err(e) => return Err(e),
            }
        }
        Ok(removed)
    }

    pub async fn list_tasks(&self, filter: &TaskFilter) -> Result<Vec<Task>, CoreError> {
        let tasks = self.store.list_tasks().await?;
        Ok(tasks.into_iter().filter(|t| filter.matches(t)).collect())
    }

    // ------------------------------------------------------------------
    // Category operations
    // ------------------------------------------------------------------

    pub async fn add_category(&self, data: NewCategoryData) -> Result<Category, CoreError> {
        if data.name.trim().is_empty() {
            return Err(CoreError::Validation("category name is required".to_string()));
        }
        self.store.create_category(data).await
    }

    pub async fn update_category(
        &self,
        id: Uuid,
        data: UpdateCategoryData,
    ) -> Result<Category, CoreError> {
        if let Some(name) = &data.name {
            if name.trim().is_empty() {
                return Err(CoreError::Validation("category name is required".to_string()));
            }
        }
        self.store.update_category(id, data).await
    }

    /// Refuses to delete a category that tasks or series still reference.
    pub async fn delete_category(&self, id: Uuid) -> Result<(), CoreError> {
        let task_count = self
            .store
            .list_tasks()
            .await?
            .iter()
            .filter(|t| t.category_id == id)
            .count();
        let series_count = self
            .store
            .list_series()
            .await?
            .iter()
            .filter(|s| s.category_id == id)
            .count();

        if task_count > 0 || series_count > 0 {
            return Err(CoreError::Validation(format!(
                "category is still referenced by {task_count} task(s) and {series_count} series"
            )));
        }

        self.store.delete_category(id).await
    }

    pub async fn list_categories(&self) -> Result<Vec<Category>, CoreError> {
        self.store.list_categories().await
    }

    pub async fn find_category(&self, id: Uuid) -> Result<Category, CoreError> {
        self.store
            .find_category_by_id(id)
            .await?
            .ok_or_else(|| CoreError::category_not_found(id))
    }

    // ------------------------------------------------------------------
    // Series operations
    // ------------------------------------------------------------------

    pub async fn create_series(&self, data: NewSeriesData) -> Result<SeriesCreation, CoreError> {
        self.engine().create_series(data).await
    }

    /// Generates the next instance of a series if it is due today.
    pub async fn generate_next(&self, series_id: Uuid) -> Result<Option<Task>, CoreError> {
        let today = Utc::now().date_naive();
        self.engine().generate_next(series_id, today).await
    }

    pub async fn pause_series(&self, series_id: Uuid) -> Result<(), CoreError> {
        self.engine().pause_series(series_id).await
    }

    /// The externally-settable unpause; the engine never resumes a series
    /// on its own.
    pub async fn resume_series(&self, series_id: Uuid) -> Result<RecurringSeries, CoreError> {
        self.engine()
            .update_series(
                series_id,
                UpdateSeriesData {
                    paused: Some(false),
                    ..Default::default()
                },
            )
            .await
    }

    pub async fn update_series(
        &self,
        series_id: Uuid,
        data: UpdateSeriesData,
    ) -> Result<RecurringSeries, CoreError> {
        self.engine().update_series(series_id, data).await
    }

    pub async fn delete_series(&self, series_id: Uuid) -> Result<(), CoreError> {
        self.engine().delete_series(series_id).await
    }

    pub async fn list_series(&self) -> Result<Vec<RecurringSeries>, CoreError> {
        self.store.list_series().await
    }

    pub async fn find_series(&self, id: Uuid) -> Result<RecurringSeries, CoreError> {
        self.store
            .find_series_by_id(id)
            .await?
            .ok_or_else(|| CoreError::series_not_found(id))
    }
}
