use anyhow::Result;
use taskflow_core::service::TaskFlow;
use taskflow_core::store::Store;
use uuid::Uuid;

pub async fn delete_task(flow: &TaskFlow<impl Store>, task_id: Uuid) -> Result<()> {
    flow.delete_task(task_id).await?;
    println!("Task deleted.");
    Ok(())
}
