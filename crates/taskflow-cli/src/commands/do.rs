use anyhow::Result;
use taskflow_core::models::CompletionResult;
use taskflow_core::service::TaskFlow;
use taskflow_core::store::Store;

use crate::cli::DoCommand;
use crate::util::resolve_task_id;

pub async fn do_task(flow: &TaskFlow<impl Store>, command: DoCommand) -> Result<()> {
    let task_id = resolve_task_id(flow, &command.id).await?;

    match flow.toggle_complete(task_id).await? {
        CompletionResult::Single(task) => {
            if task.completed {
                println!("Completed task: '{}'", task.title);
            } else {
                println!("Reopened task: '{}'", task.title);
            }
        }
        CompletionResult::Recurring { completed, next } => {
            println!("Completed task: '{}'", completed.title);
            match next {
                Some(next) => {
                    if let Some(due) = next.due_date {
                        println!("Created recurring task '{}' due {}", next.title, due);
                    } else {
                        println!("Created recurring task '{}'", next.title);
                    }
                }
                None => println!("No new occurrence is due yet."),
            }
        }
    }

    Ok(())
}
