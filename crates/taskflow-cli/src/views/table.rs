use chrono::{NaiveDate, Utc};
use chrono_humanize::Humanize;
use comfy_table::{Attribute, Cell, Color, Row, Table};
use taskflow_core::models::{Category, Priority, RecurrenceUnit, RecurringSeries, Task};
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct ViewTask {
    pub id: Uuid,
    pub title: String,
    pub completed: bool,
    pub priority: Priority,
    pub due_date: Option<NaiveDate>,
    pub category_name: String,
    pub recurring: bool,
}

impl ViewTask {
    pub fn from_task(task: &Task, category_name: String) -> Self {
        Self {
            id: task.id,
            title: task.title.clone(),
            completed: task.completed,
            priority: task.priority,
            due_date: task.due_date,
            category_name,
            recurring: task.recurring_instance,
        }
    }
}

pub fn display_tasks(tasks: &[ViewTask]) {
    if tasks.is_empty() {
        println!("No tasks found.");
        return;
    }

    let mut table = Table::new();
    table.set_header(vec!["ID", "Title", "Status", "Priority", "Due Date", "Category"]);

    let today = Utc::now().date_naive();
    for task in tasks {
        let mut row = Row::new();
        row.add_cell(Cell::new(&task.id.to_string()[..8]));

        let mut display_title = String::new();
        if task.recurring {
            display_title.push('↻');
            display_title.push(' ');
        }
        display_title.push_str(&task.title);

        let mut title_cell = Cell::new(display_title);
        if task.completed {
            title_cell = title_cell
                .add_attribute(Attribute::CrossedOut)
                .fg(Color::DarkGrey);
        } else {
            title_cell = match task.priority {
                Priority::High => title_cell.fg(Color::Red).add_attribute(Attribute::Bold),
                Priority::Medium => title_cell.fg(Color::Yellow),
                Priority::Low => title_cell.fg(Color::Green),
            };
        }
        row.add_cell(title_cell);

        let status_cell = if task.completed {
            Cell::new("Done").fg(Color::Green)
        } else {
            Cell::new("Pending")
        };
        row.add_cell(status_cell);

        row.add_cell(Cell::new(task.priority.to_string()));

        let due_cell = match task.due_date {
            Some(due) if !task.completed && due < today => {
                Cell::new(due.to_string()).fg(Color::Red)
            }
            Some(due) if !task.completed && due == today => {
                Cell::new(due.to_string()).fg(Color::Yellow)
            }
            Some(due) => Cell::new(due.to_string()),
            None => Cell::new("None"),
        };
        row.add_cell(due_cell);

        row.add_cell(Cell::new(&task.category_name));
        table.add_row(row);
    }

    println!("{table}");
}

pub fn display_categories(categories: &[Category]) {
    if categories.is_empty() {
        println!("No categories found.");
        return;
    }

    let mut table = Table::new();
    table.set_header(vec!["ID", "Name", "Color", "Created"]);

    for category in categories {
        let mut row = Row::new();
        row.add_cell(Cell::new(&category.id.to_string()[..8]));
        row.add_cell(Cell::new(&category.name));
        row.add_cell(Cell::new(category.color.as_deref().unwrap_or("None")));
        row.add_cell(Cell::new(category.created_at.humanize()));
        table.add_row(row);
    }

    println!("{table}");
}

#[derive(Debug, Clone)]
pub struct ViewSeries {
    pub series: RecurringSeries,
    pub category_name: String,
}

pub fn display_series(series: &[ViewSeries]) {
    if series.is_empty() {
        println!("No recurring series found.");
        return;
    }

    let mut table = Table::new();
    table.set_header(vec![
        "ID", "Title", "Repeats", "Next Due", "End Date", "Status", "Category",
    ]);

    for view in series {
        let s = &view.series;
        let mut row = Row::new();
        row.add_cell(Cell::new(&s.id.to_string()[..8]));
        row.add_cell(Cell::new(&s.title));
        row.add_cell(Cell::new(describe_cadence(s)));
        row.add_cell(Cell::new(s.next_due.to_string()));
        row.add_cell(Cell::new(
            s.end_date.map_or_else(|| "None".to_string(), |d| d.to_string()),
        ));
        let status_cell = if s.paused {
            Cell::new("Paused").fg(Color::DarkGrey)
        } else {
            Cell::new("Active").fg(Color::Green)
        };
        row.add_cell(status_cell);
        row.add_cell(Cell::new(&view.category_name));
        table.add_row(row);
    }

    println!("{table}");
}

/// "every day", "every 2 weeks", ...
pub fn describe_cadence(series: &RecurringSeries) -> String {
    let unit = match series.unit {
        RecurrenceUnit::Daily => "day",
        RecurrenceUnit::Weekly => "week",
        RecurrenceUnit::Monthly => "month",
        RecurrenceUnit::Yearly => "year",
    };
    if series.interval == 1 {
        format!("every {unit}")
    } else {
        format!("every {} {}s", series.interval, unit)
    }
}
