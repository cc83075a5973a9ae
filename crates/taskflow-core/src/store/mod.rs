use crate::error::CoreError;
use crate::models::{
    Category, NewCategoryData, NewSeriesData, NewTaskData, RecurringSeries, Task,
    UpdateCategoryData, UpdateSeriesData, UpdateTaskData,
};
use async_trait::async_trait;
use uuid::Uuid;

pub mod memory;

pub use memory::{MemoryStore, Snapshot};

/// Domain-specific trait for task records.
///
/// Plain keyed CRUD: identifiers are assigned at creation and immutable,
/// `update`/`delete` on an unknown id surface `CoreError::NotFound`. No
/// business rules live here — validation belongs to the callers.
#[async_trait]
pub trait TaskStore: Send + Sync {
    async fn create_task(&self, data: NewTaskData) -> Result<Task, CoreError>;
    async fn find_task_by_id(&self, id: Uuid) -> Result<Option<Task>, CoreError>;
    async fn update_task(&self, id: Uuid, data: UpdateTaskData) -> Result<Task, CoreError>;
    async fn delete_task(&self, id: Uuid) -> Result<(), CoreError>;
    async fn list_tasks(&self) -> Result<Vec<Task>, CoreError>;
}

/// Domain-specific trait for recurring-series records.
#[async_trait]
pub trait SeriesStore: Send + Sync {
    async fn create_series(&self, data: NewSeriesData) -> Result<RecurringSeries, CoreError>;
    async fn find_series_by_id(&self, id: Uuid) -> Result<Option<RecurringSeries>, CoreError>;
    async fn update_series(
        &self,
        id: Uuid,
        data: UpdateSeriesData,
    ) -> Result<RecurringSeries, CoreError>;
    async fn delete_series(&self, id: Uuid) -> Result<(), CoreError>;
    async fn list_series(&self) -> Result<Vec<RecurringSeries>, CoreError>;
}

/// Domain-specific trait for category records.
#[async_trait]
pub trait CategoryStore: Send + Sync {
    async fn create_category(&self, data: NewCategoryData) -> Result<Category, CoreError>;
    async fn find_category_by_id(&self, id: Uuid) -> Result<Option<Category>, CoreError>;
    async fn update_category(
        &self,
        id: Uuid,
        data: UpdateCategoryData,
    ) -> Result<Category, CoreError>;
    async fn delete_category(&self, id: Uuid) -> Result<(), CoreError>;
    async fn list_categories(&self) -> Result<Vec<Category>, CoreError>;
}

/// Main store trait composing all record stores.
///
/// The recurrence engine and service facade are generic over this, so a
/// durable backend can replace [`MemoryStore`] without touching either.
pub trait Store: TaskStore + SeriesStore + CategoryStore {}
