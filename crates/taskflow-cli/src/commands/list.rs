use anyhow::Result;
use std::collections::HashMap;
use taskflow_core::query::TaskFilter;
use taskflow_core::service::TaskFlow;
use taskflow_core::store::Store;
use uuid::Uuid;

use crate::cli::ListCommand;
use crate::views::table::{display_tasks, ViewTask};

pub async fn list_tasks(flow: &TaskFlow<impl Store>, command: ListCommand) -> Result<()> {
    let category_id = match &command.category {
        Some(category) => Some(crate::util::resolve_category(flow, category).await?.id),
        None => None,
    };
    let completed = if command.completed {
        Some(true)
    } else if command.pending {
        Some(false)
    } else {
        None
    };

    let filter = TaskFilter {
        text: command.search,
        category_id,
        priority: command.priority,
        completed,
        archived: Some(command.archived),
    };

    let tasks = flow.list_tasks(&filter).await?;
    let category_names: HashMap<Uuid, String> = flow
        .list_categories()
        .await?
        .into_iter()
        .map(|c| (c.id, c.name))
        .collect();

    let view_tasks: Vec<ViewTask> = tasks
        .iter()
        .map(|t| {
            let name = category_names
                .get(&t.category_id)
                .cloned()
                .unwrap_or_else(|| "None".to_string());
            ViewTask::from_task(t, name)
        })
        .collect();

    display_tasks(&view_tasks);
    Ok(())
}
