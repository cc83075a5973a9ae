//! Recurrence calculation and series lifecycle.
//!
//! A [`RecurringSeries`] is a template; tasks are generated from it one
//! occurrence at a time. There is no background scheduler — due-ness is
//! evaluated lazily, either when a series is created (the first instance is
//! unconditional) or when an instance of the series is completed.

use chrono::{Days, Months, NaiveDate};
use tracing::{debug, info};
use uuid::Uuid;

use crate::error::CoreError;
use crate::models::{
    NewSeriesData, NewTaskData, RecurrenceUnit, RecurringSeries, SeriesCreation, Task,
    UpdateSeriesData,
};
use crate::store::Store;

/// Advances a calendar date by `interval` units.
///
/// Month and year steps clamp the day-of-month to the last valid day of the
/// target month (Jan 31 + 1 month is Feb 28/29, Feb 29 + 1 year is Feb 28
/// in a non-leap year). `interval` must be >= 1; zero is a caller contract
/// violation and never produced by validated input.
pub fn advance_date(base: NaiveDate, unit: RecurrenceUnit, interval: u32) -> NaiveDate {
    debug_assert!(interval >= 1, "recurrence interval must be positive");
    match unit {
        RecurrenceUnit::Daily => add_days(base, u64::from(interval)),
        RecurrenceUnit::Weekly => add_days(base, 7 * u64::from(interval)),
        RecurrenceUnit::Monthly => add_months(base, interval),
        RecurrenceUnit::Yearly => add_months(base, interval.saturating_mul(12)),
    }
}

// chrono's calendar ends at year ~262142; saturate instead of panicking.
fn add_days(base: NaiveDate, days: u64) -> NaiveDate {
    base.checked_add_days(Days::new(days)).unwrap_or(NaiveDate::MAX)
}

fn add_months(base: NaiveDate, months: u32) -> NaiveDate {
    base.checked_add_months(Months::new(months))
        .unwrap_or(NaiveDate::MAX)
}

/// Owns the lifecycle of recurring series: creation, instance generation,
/// due-date advancement, completion-triggered regeneration, and retirement
/// once the series passes its end date.
///
/// The engine reads and writes through the injected [`Store`] and carries
/// no state of its own. "Today" is always an explicit parameter so callers
/// decide the reference date.
pub struct RecurrenceEngine<'a, S: Store> {
    store: &'a S,
}

impl<'a, S: Store> RecurrenceEngine<'a, S> {
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// Creates a series and unconditionally generates its first instance.
    ///
    /// Validation happens before any store mutation: non-empty title, an
    /// existing category, interval >= 1, and an end date strictly after the
    /// start. The stored series begins with `next_due = start`; after the
    /// first instance is generated, `next_due` is advanced by one interval.
    ///
    /// This is the only place an instance bypasses the due check — creation
    /// always yields exactly one task.
    pub async fn create_series(&self, data: NewSeriesData) -> Result<SeriesCreation, CoreError> {
        if data.title.trim().is_empty() {
            return Err(CoreError::Validation("title is required".to_string()));
        }
        if data.interval < 1 {
            return Err(CoreError::Validation(
                "recurrence interval must be at least 1".to_string(),
            ));
        }
        if let Some(end) = data.end_date {
            if end <= data.start {
                return Err(CoreError::Validation(
                    "end date must be after the start date".to_string(),
                ));
            }
        }
        if self.store.find_category_by_id(data.category_id).await?.is_none() {
            return Err(CoreError::Validation(format!(
                "unknown category: {}",
                data.category_id
            )));
        }

        let series = self.store.create_series(data).await?;

        let first_task = self
            .store
            .create_task(NewTaskData {
                title: series.title.clone(),
                category_id: series.category_id,
                priority: Some(series.priority),
                due_date: Some(series.next_due),
                recurrence: None,
                series_id: Some(series.id),
                recurring_instance: true,
            })
            .await?;

        let advanced = advance_date(series.next_due, series.unit, series.interval);
        let series = self
            .store
            .update_series(
                series.id,
                UpdateSeriesData {
                    next_due: Some(advanced),
                    ..Default::default()
                },
            )
            .await?;

        info!(
            series_id = %series.id,
            unit = %series.unit,
            interval = series.interval,
            next_due = %series.next_due,
            "created recurring series"
        );

        Ok(SeriesCreation { series, first_task })
    }

    /// Generates the next instance of a series if it is due.
    ///
    /// Returns `Ok(None)` — not an error — when the series does not exist,
    /// is paused, or its next due date is still in the future (same-day
    /// counts as due). When an instance is generated, the new candidate due
    /// date is computed from the just-used one; a candidate past the end
    /// date retires the series (`paused = true`, `next_due` left at the
    /// candidate value).
    pub async fn generate_next(
        &self,
        series_id: Uuid,
        today: NaiveDate,
    ) -> Result<Option<Task>, CoreError> {
        let Some(series) = self.store.find_series_by_id(series_id).await? else {
            return Ok(None);
        };
        if series.paused || series.next_due > today {
            return Ok(None);
        }

        let task = self
            .store
            .create_task(NewTaskData {
                title: series.title.clone(),
                category_id: series.category_id,
                priority: Some(series.priority),
                due_date: Some(series.next_due),
                recurrence: None,
                series_id: Some(series.id),
                recurring_instance: true,
            })
            .await?;

        let candidate = advance_date(series.next_due, series.unit, series.interval);
        let retire = series.end_date.is_some_and(|end| candidate > end);

        self.store
            .update_series(
                series.id,
                UpdateSeriesData {
                    next_due: Some(candidate),
                    paused: retire.then_some(true),
                    ..Default::default()
                },
            )
            .await?;

        if retire {
            info!(series_id = %series.id, "series passed its end date, retiring");
        } else {
            debug!(series_id = %series.id, next_due = %candidate, "generated next instance");
        }

        Ok(Some(task))
    }

    /// Completion hook: the sole automatic generation trigger besides
    /// series creation. Only fires generation for tasks that reference a
    /// series; completing a plain task never touches the series store.
    pub async fn on_task_completed(
        &self,
        task_id: Uuid,
        today: NaiveDate,
    ) -> Result<Option<Task>, CoreError> {
        let task = self
            .store
            .find_task_by_id(task_id)
            .await?
            .ok_or_else(|| CoreError::task_not_found(task_id))?;

        match task.series_id {
            Some(series_id) => self.generate_next(series_id, today).await,
            None => Ok(None),
        }
    }

    pub async fn pause_series(&self, series_id: Uuid) -> Result<(), CoreError> {
        self.store
            .update_series(
                series_id,
                UpdateSeriesData {
                    paused: Some(true),
                    ..Default::default()
                },
            )
            .await?;
        Ok(())
    }

    /// Field updates on the series record; the identifier is immutable.
    /// Edits flow forward only — already-generated instances are untouched.
    pub async fn update_series(
        &self,
        series_id: Uuid,
        data: UpdateSeriesData,
    ) -> Result<RecurringSeries, CoreError> {
        if let Some(title) = &data.title {
            if title.trim().is_empty() {
                return Err(CoreError::Validation("title is required".to_string()));
            }
        }
        if let Some(interval) = data.interval {
            if interval < 1 {
                return Err(CoreError::Validation(
                    "recurrence interval must be at least 1".to_string(),
                ));
            }
        }
        if let Some(category_id) = data.category_id {
            if self.store.find_category_by_id(category_id).await?.is_none() {
                return Err(CoreError::Validation(format!(
                    "unknown category: {category_id}"
                )));
            }
        }

        self.store.update_series(series_id, data).await
    }

    /// Deletes a series and every task instance generated from it.
    pub async fn delete_series(&self, series_id: Uuid) -> Result<(), CoreError> {
        if self.store.find_series_by_id(series_id).await?.is_none() {
            return Err(CoreError::series_not_found(series_id));
        }

        let instances: Vec<Uuid> = self
            .store
            .list_tasks()
            .await?
            .into_iter()
            .filter(|t| t.series_id == Some(series_id))
            .map(|t| t.id)
            .collect();

        let removed = instances.len();
        for task_id in instances {
            self.store.delete_task(task_id).await?;
        }
        self.store.delete_series(series_id).await?;

        info!(series_id = %series_id, removed_instances = removed, "deleted recurring series");
        Ok(())
    }
}
