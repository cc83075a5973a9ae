use anyhow::Result;
use dialoguer::Confirm;
use taskflow_core::query::TaskFilter;
use taskflow_core::service::TaskFlow;
use taskflow_core::store::Store;

use crate::cli::{RecurrenceCommand, RecurrenceSubcommand};
use crate::parser::parse_calendar_date;
use crate::util::{resolve_category, resolve_series_id};
use crate::views::table::{describe_cadence, display_series, ViewSeries};

pub async fn recurrence_command(
    flow: &TaskFlow<impl Store>,
    command: RecurrenceCommand,
) -> Result<()> {
    match command.command {
        RecurrenceSubcommand::List => {
            let series = flow.list_series().await?;
            let mut views = Vec::with_capacity(series.len());
            for s in series {
                let category_name = flow
                    .find_category(s.category_id)
                    .await
                    .map(|c| c.name)
                    .unwrap_or_else(|_| "None".to_string());
                views.push(ViewSeries {
                    series: s,
                    category_name,
                });
            }
            display_series(&views);
        }
        RecurrenceSubcommand::Info(info) => {
            let series_id = resolve_series_id(flow, &info.id).await?;
            let series = flow.find_series(series_id).await?;
            let instances = flow
                .list_tasks(&TaskFilter::default())
                .await?
                .into_iter()
                .filter(|t| t.series_id == Some(series_id))
                .count();

            println!("Series: '{}'", series.title);
            println!("  Repeats: {}", describe_cadence(&series));
            println!("  Next due: {}", series.next_due);
            match series.end_date {
                Some(end) => println!("  Ends: {end}"),
                None => println!("  Ends: never"),
            }
            println!("  Status: {}", if series.paused { "paused" } else { "active" });
            println!("  Instances generated: {instances}");
        }
        RecurrenceSubcommand::Generate(generate) => {
            let series_id = resolve_series_id(flow, &generate.id).await?;
            match flow.generate_next(series_id).await? {
                Some(task) => {
                    if let Some(due) = task.due_date {
                        println!("Generated instance '{}' due {}", task.title, due);
                    } else {
                        println!("Generated instance '{}'", task.title);
                    }
                }
                None => println!("Series is not due (or is paused)."),
            }
        }
        RecurrenceSubcommand::Pause(pause) => {
            let series_id = resolve_series_id(flow, &pause.id).await?;
            flow.pause_series(series_id).await?;
            let series = flow.find_series(series_id).await?;
            println!("Paused series: '{}'", series.title);
        }
        RecurrenceSubcommand::Resume(resume) => {
            let series_id = resolve_series_id(flow, &resume.id).await?;
            let series = flow.resume_series(series_id).await?;
            println!("Resumed series: '{}'", series.title);
        }
        RecurrenceSubcommand::Edit(edit) => {
            let series_id = resolve_series_id(flow, &edit.id).await?;
            let category_id = match &edit.category {
                Some(category) => Some(resolve_category(flow, category).await?.id),
                None => None,
            };
            let end_date = if edit.until_clear {
                Some(None)
            } else {
                edit.until
                    .as_deref()
                    .map(parse_calendar_date)
                    .transpose()?
                    .map(Some)
            };

            let updated = flow
                .update_series(
                    series_id,
                    taskflow_core::models::UpdateSeriesData {
                        title: edit.title,
                        category_id,
                        priority: edit.priority,
                        unit: edit.every,
                        interval: edit.interval,
                        end_date,
                        ..Default::default()
                    },
                )
                .await?;
            println!("Updated series: '{}'", updated.title);
        }
        RecurrenceSubcommand::Delete(delete) => {
            let series_id = resolve_series_id(flow, &delete.id).await?;
            let series = flow.find_series(series_id).await?;

            if !delete.force {
                let confirmation = Confirm::new()
                    .with_prompt(format!(
                        "Delete series '{}' and all of its instances?",
                        series.title
                    ))
                    .default(false)
                    .interact()
                    .unwrap_or(false);

                if !confirmation {
                    println!("Deletion cancelled.");
                    return Ok(());
                }
            }

            flow.delete_series(series_id).await?;
            println!("Deleted series: '{}'", series.title);
        }
    }

    Ok(())
}
