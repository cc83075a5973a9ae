use anyhow::Result;
use taskflow_core::models::UpdateTaskData;
use taskflow_core::service::TaskFlow;
use taskflow_core::store::Store;

use crate::cli::EditCommand;
use crate::parser::parse_calendar_date;
use crate::util::{resolve_category, resolve_task_id};

pub async fn edit_task(flow: &TaskFlow<impl Store>, command: EditCommand) -> Result<()> {
    let task_id = resolve_task_id(flow, &command.id).await?;

    let category_id = match &command.category {
        Some(category) => Some(resolve_category(flow, category).await?.id),
        None => None,
    };
    let due_date = if command.due_clear {
        Some(None)
    } else {
        command
            .due
            .as_deref()
            .map(parse_calendar_date)
            .transpose()?
            .map(Some)
    };

    let updated = flow
        .update_task(
            task_id,
            UpdateTaskData {
                title: command.title,
                category_id,
                priority: command.priority,
                due_date,
                ..Default::default()
            },
        )
        .await?;

    println!("Updated task: '{}'", updated.title);
    Ok(())
}
