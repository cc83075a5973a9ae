use anyhow::Result;
use taskflow_core::service::TaskFlow;
use taskflow_core::store::Store;

use crate::cli::ArchiveCommand;
use crate::util::resolve_task_id;

pub async fn archive_task(flow: &TaskFlow<impl Store>, command: ArchiveCommand) -> Result<()> {
    let task_id = resolve_task_id(flow, &command.id).await?;
    let task = flow.archive(task_id).await?;
    println!("Archived task: '{}'", task.title);
    Ok(())
}

pub async fn unarchive_task(flow: &TaskFlow<impl Store>, command: ArchiveCommand) -> Result<()> {
    let task_id = resolve_task_id(flow, &command.id).await?;
    let task = flow.unarchive(task_id).await?;
    println!("Unarchived task: '{}'", task.title);
    Ok(())
}
