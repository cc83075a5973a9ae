use clap::{Parser, Subcommand};
use taskflow_core::models::{Priority, RecurrenceUnit};

/// A command-line task tracker with categories, priorities, and recurring tasks
#[derive(Parser, Debug)]
#[command(name = "taskflow", author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Add a new task
    Add(AddCommand),
    /// List tasks
    List(ListCommand),
    /// Mark a task as completed, or reopen a completed one
    Do(DoCommand),
    /// Edit a task
    Edit(EditCommand),
    /// Delete a task
    Delete(DeleteCommand),
    /// Archive a task
    Archive(ArchiveCommand),
    /// Move a task out of the archive
    Unarchive(ArchiveCommand),
    /// Manage categories
    Category(CategoryCommand),
    /// Manage recurring task series
    Recur(RecurrenceCommand),
}

#[derive(Parser, Debug, Clone)]
pub struct AddCommand {
    /// The title of the task
    pub title: String,
    /// The category of the task (name or ID prefix)
    #[clap(short, long)]
    pub category: String,
    /// The due date of the task (e.g. '2025-03-01', 'tomorrow')
    #[clap(short, long)]
    pub due: Option<String>,
    /// The priority of the task (low, medium, high)
    #[clap(long)]
    pub priority: Option<Priority>,
    /// Make the task recurring with this frequency
    /// (daily, weekly, monthly, yearly)
    #[clap(long)]
    pub every: Option<RecurrenceUnit>,
    /// Number of frequency units between occurrences
    #[clap(long, default_value_t = 1)]
    pub interval: u32,
    /// End date for recurrence
    #[clap(long, requires = "every")]
    pub until: Option<String>,
}

#[derive(Parser, Debug, Clone)]
pub struct ListCommand {
    /// Filter by category (name or ID prefix)
    #[clap(short, long)]
    pub category: Option<String>,
    /// Filter by priority
    #[clap(long)]
    pub priority: Option<Priority>,
    /// Only completed tasks
    #[clap(long)]
    pub completed: bool,
    /// Only tasks still pending
    #[clap(long, conflicts_with = "completed")]
    pub pending: bool,
    /// Show archived tasks instead of active ones
    #[clap(long)]
    pub archived: bool,
    /// Case-insensitive title search
    #[clap(short, long)]
    pub search: Option<String>,
}

#[derive(Parser, Debug, Clone)]
pub struct DoCommand {
    /// The ID of the task to toggle
    pub id: String,
}

#[derive(Parser, Debug, Clone)]
pub struct EditCommand {
    /// The ID of the task to edit
    pub id: String,

    #[arg(long)]
    pub title: Option<String>,

    /// Move the task to another category (name or ID prefix)
    #[arg(long)]
    pub category: Option<String>,

    #[arg(long)]
    pub due: Option<String>,
    #[arg(long, conflicts_with = "due")]
    pub due_clear: bool,

    #[arg(long)]
    pub priority: Option<Priority>,
}

#[derive(Parser, Debug, Clone)]
pub struct DeleteCommand {
    /// The ID of the task to delete
    pub id: String,
    /// Force deletion without confirmation
    #[clap(short, long)]
    pub force: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct ArchiveCommand {
    /// The ID of the task
    pub id: String,
}

#[derive(Parser, Debug, Clone)]
pub struct CategoryCommand {
    #[command(subcommand)]
    pub command: CategorySubcommand,
}

#[derive(Subcommand, Debug, Clone)]
pub enum CategorySubcommand {
    /// Add a new category
    Add(AddCategoryCommand),
    /// List categories
    List,
    /// Edit a category
    Edit(EditCategoryCommand),
    /// Delete a category (must have no tasks or series)
    Delete(DeleteCategoryCommand),
}

#[derive(Parser, Debug, Clone)]
pub struct AddCategoryCommand {
    /// The name of the category
    pub name: String,

    /// Display color, e.g. '#6366f1'
    #[arg(long)]
    pub color: Option<String>,
}

#[derive(Parser, Debug, Clone)]
pub struct EditCategoryCommand {
    /// The category to edit (name or ID prefix)
    pub name: String,

    #[arg(long)]
    pub rename: Option<String>,

    #[arg(long)]
    pub color: Option<String>,
}

#[derive(Parser, Debug, Clone)]
pub struct DeleteCategoryCommand {
    /// The category to delete (name or ID prefix)
    pub name: String,
}

/// Recurring-series management commands
#[derive(Parser, Debug, Clone)]
pub struct RecurrenceCommand {
    #[command(subcommand)]
    pub command: RecurrenceSubcommand,
}

#[derive(Subcommand, Debug, Clone)]
pub enum RecurrenceSubcommand {
    /// List recurring series
    List,
    /// Show series details and instance count
    Info(RecurIdCommand),
    /// Generate the next instance now, if the series is due
    Generate(RecurIdCommand),
    /// Pause a series (stop generating new instances)
    Pause(RecurIdCommand),
    /// Resume a paused series
    Resume(RecurIdCommand),
    /// Edit a series (changes apply to future instances only)
    Edit(RecurEditCommand),
    /// Delete a series and every instance it generated
    Delete(RecurDeleteCommand),
}

#[derive(Parser, Debug, Clone)]
pub struct RecurIdCommand {
    /// Series ID (or ID prefix)
    pub id: String,
}

#[derive(Parser, Debug, Clone)]
pub struct RecurEditCommand {
    /// Series ID (or ID prefix)
    pub id: String,

    #[arg(long)]
    pub title: Option<String>,

    /// Move the series to another category (name or ID prefix)
    #[arg(long)]
    pub category: Option<String>,

    #[arg(long)]
    pub priority: Option<Priority>,

    /// New frequency (daily, weekly, monthly, yearly)
    #[arg(long)]
    pub every: Option<RecurrenceUnit>,

    #[arg(long)]
    pub interval: Option<u32>,

    #[arg(long)]
    pub until: Option<String>,
    #[arg(long, conflicts_with = "until")]
    pub until_clear: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct RecurDeleteCommand {
    /// Series ID (or ID prefix)
    pub id: String,
    /// Force deletion without confirmation
    #[clap(short, long)]
    pub force: bool,
}
