use anyhow::{anyhow, Result};
use taskflow_core::error::CoreError;
use taskflow_core::models::Category;
use taskflow_core::query::TaskFilter;
use taskflow_core::service::TaskFlow;
use taskflow_core::store::Store;
use uuid::Uuid;

pub async fn resolve_task_id(flow: &TaskFlow<impl Store>, short_id: &str) -> Result<Uuid> {
    if short_id.len() < 2 {
        return Err(anyhow!(CoreError::Validation(
            "Short ID must be at least 2 characters long.".to_string()
        )));
    }
    let prefix = short_id.to_lowercase();
    let tasks: Vec<_> = flow
        .list_tasks(&TaskFilter::default())
        .await?
        .into_iter()
        .filter(|t| t.id.to_string().starts_with(&prefix))
        .collect();

    if tasks.len() == 1 {
        Ok(tasks[0].id)
    } else if tasks.is_empty() {
        Err(anyhow!(CoreError::NotFound(format!(
            "no task with ID prefix '{short_id}'"
        ))))
    } else {
        let candidates = tasks
            .iter()
            .map(|t| format!("  {} ({})", t.id, t.title))
            .collect::<Vec<_>>()
            .join("\n");
        Err(anyhow!(
            "Ambiguous short ID '{short_id}'. Did you mean one of these?\n{candidates}"
        ))
    }
}

pub async fn resolve_series_id(flow: &TaskFlow<impl Store>, short_id: &str) -> Result<Uuid> {
    if short_id.len() < 2 {
        return Err(anyhow!(CoreError::Validation(
            "Short ID must be at least 2 characters long.".to_string()
        )));
    }
    let prefix = short_id.to_lowercase();
    let series: Vec<_> = flow
        .list_series()
        .await?
        .into_iter()
        .filter(|s| s.id.to_string().starts_with(&prefix))
        .collect();

    if series.len() == 1 {
        Ok(series[0].id)
    } else if series.is_empty() {
        Err(anyhow!(CoreError::NotFound(format!(
            "no series with ID prefix '{short_id}'"
        ))))
    } else {
        let candidates = series
            .iter()
            .map(|s| format!("  {} ({})", s.id, s.title))
            .collect::<Vec<_>>()
            .join("\n");
        Err(anyhow!(
            "Ambiguous short ID '{short_id}'. Did you mean one of these?\n{candidates}"
        ))
    }
}

/// Categories resolve by name first (case-insensitive), then by ID prefix.
pub async fn resolve_category(flow: &TaskFlow<impl Store>, name_or_id: &str) -> Result<Category> {
    let categories = flow.list_categories().await?;

    if let Some(category) = categories
        .iter()
        .find(|c| c.name.eq_ignore_ascii_case(name_or_id))
    {
        return Ok(category.clone());
    }

    let prefix = name_or_id.to_lowercase();
    let matches: Vec<_> = categories
        .iter()
        .filter(|c| c.id.to_string().starts_with(&prefix))
        .collect();

    match matches.len() {
        1 => Ok(matches[0].clone()),
        0 => Err(anyhow!(CoreError::NotFound(format!(
            "no category named '{name_or_id}'"
        )))),
        _ => Err(anyhow!("Ambiguous category '{name_or_id}'.")),
    }
}
