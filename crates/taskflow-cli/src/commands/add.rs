use anyhow::Result;
use owo_colors::{OwoColorize, Style};
use taskflow_core::models::{NewTaskData, Recurrence, TaskCreation};
use taskflow_core::service::TaskFlow;
use taskflow_core::store::Store;

use crate::cli::AddCommand;
use crate::parser::parse_calendar_date;
use crate::util::resolve_category;
use crate::views::table::describe_cadence;

pub async fn add_task(flow: &TaskFlow<impl Store>, command: AddCommand) -> Result<()> {
    let category = resolve_category(flow, &command.category).await?;
    let due_date = command
        .due
        .as_deref()
        .map(parse_calendar_date)
        .transpose()?;

    let recurrence = match command.every {
        Some(unit) => Some(Recurrence {
            unit,
            interval: command.interval,
            end_date: command.until.as_deref().map(parse_calendar_date).transpose()?,
        }),
        None => None,
    };

    let created = flow
        .add_task(NewTaskData {
            title: command.title,
            category_id: category.id,
            priority: command.priority,
            due_date,
            recurrence,
            ..Default::default()
        })
        .await?;

    let success_style = Style::new().green().bold();
    let info_style = Style::new().blue();

    match created {
        TaskCreation::Single(task) => {
            println!(
                "{} Created task: {}",
                "✓".style(success_style),
                task.title.bright_white().bold()
            );
            println!("  {} Task ID: {}", "→".style(info_style), task.id);
            if let Some(due) = task.due_date {
                println!("  {} Due: {}", "→".style(info_style), due.to_string().cyan());
            }
        }
        TaskCreation::Recurring(creation) => {
            println!(
                "{} Created recurring task: {}",
                "✓".style(success_style),
                creation.first_task.title.bright_white().bold()
            );
            println!("  {} Task ID: {}", "→".style(info_style), creation.first_task.id);
            println!("  {} Series ID: {}", "→".style(info_style), creation.series.id);
            println!(
                "  {} Repeats {}, next occurrence {}",
                "→".style(info_style),
                describe_cadence(&creation.series),
                creation.series.next_due.to_string().cyan()
            );
            if let Some(end) = creation.series.end_date {
                println!("  {} Ends {}", "→".style(info_style), end.to_string().cyan());
            }
        }
    }

    Ok(())
}
