//! # TaskFlow Core Library
//!
//! A single-user task tracker with interval-based recurring tasks: create,
//! edit, complete, archive, and filter tasks organized by category and
//! priority, with automatic generation of recurring-task instances.
//!
//! ## Features
//!
//! - **Interval Recurrence**: daily/weekly/monthly/yearly series with a
//!   configurable interval and optional end date; month and year steps
//!   clamp end-of-month overflow
//! - **Lazy Generation**: no background scheduler — the next instance is
//!   generated when a series is created or one of its instances is
//!   completed
//! - **Injected Storage**: store traits with an in-memory implementation;
//!   a durable backend swaps in without touching the engine
//! - **Type Safety**: explicit record structs and input DTOs, validated
//!   before any store mutation
//!
//! ## Core Modules
//!
//! - [`models`]: Core data structures and transfer objects
//! - [`store`]: Store traits and the in-memory implementation
//! - [`recurrence`]: Date-interval calculation and the recurrence engine
//! - [`service`]: Task lifecycle operations behind the `TaskFlow` facade
//! - [`query`]: Client-side task filtering
//! - [`error`]: Error types
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use taskflow_core::{
//!     error::CoreError,
//!     models::{NewCategoryData, NewTaskData, Recurrence, RecurrenceUnit},
//!     service::TaskFlow,
//!     store::MemoryStore,
//! };
//!
//! #[tokio::main]
//! async fn main() -> Result<(), CoreError> {
//!     let flow = TaskFlow::new(MemoryStore::new());
//!
//!     let category = flow
//!         .add_category(NewCategoryData {
//!             name: "Work".to_string(),
//!             ..Default::default()
//!         })
//!         .await?;
//!
//!     // A daily recurring task; the first instance is created immediately.
//!     let created = flow
//!         .add_task(NewTaskData {
//!             title: "Daily standup".to_string(),
//!             category_id: category.id,
//!             due_date: Some(chrono::Utc::now().date_naive()),
//!             recurrence: Some(Recurrence {
//!                 unit: RecurrenceUnit::Daily,
//!                 interval: 1,
//!                 end_date: None,
//!             }),
//!             ..Default::default()
//!         })
//!         .await?;
//!     println!("created: {created:?}");
//!
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod models;
pub mod query;
pub mod recurrence;
pub mod service;
pub mod store;
