use anyhow::Context;
use clap::Parser;
use dialoguer::Confirm;
use owo_colors::{OwoColorize, Style};
use std::path::{Path, PathBuf};
use taskflow_core::error::CoreError;
use taskflow_core::service::TaskFlow;
use taskflow_core::store::{MemoryStore, Snapshot};
use tracing_subscriber::EnvFilter;
use util::resolve_task_id;

mod cli;
mod commands;
mod config;
mod parser;
mod util;
mod views;

const DATA_FILE: &str = "taskflow.json";

#[tokio::main]
async fn main() {
    init_tracing();

    let config = config::Config::new().unwrap_or_default();
    let data_path = config
        .data_file
        .clone()
        .unwrap_or_else(|| PathBuf::from(DATA_FILE));

    let store = match load_store(&data_path, &config) {
        Ok(store) => store,
        Err(e) => {
            handle_error(e);
            std::process::exit(1);
        }
    };
    let flow = TaskFlow::new(store);

    let cli = cli::Cli::parse();

    let result = match cli.command {
        cli::Commands::Add(command) => commands::add::add_task(&flow, command).await,
        cli::Commands::List(command) => commands::list::list_tasks(&flow, command).await,
        cli::Commands::Do(command) => commands::r#do::do_task(&flow, command).await,
        cli::Commands::Edit(command) => commands::edit::edit_task(&flow, command).await,
        cli::Commands::Delete(command) => {
            match resolve_task_id(&flow, &command.id).await {
                Ok(task_id) => {
                    let confirmed = if command.force {
                        true
                    } else {
                        let task = flow.find_task(task_id).await;
                        let title = task.map(|t| t.title).unwrap_or_else(|_| task_id.to_string());
                        Confirm::new()
                            .with_prompt(format!("Are you sure you want to delete task '{title}'?"))
                            .default(false)
                            .interact()
                            .unwrap_or(false)
                    };
                    if confirmed {
                        commands::delete::delete_task(&flow, task_id).await
                    } else {
                        println!("Deletion cancelled.");
                        Ok(())
                    }
                }
                Err(e) => Err(e),
            }
        }
        cli::Commands::Archive(command) => commands::archive::archive_task(&flow, command).await,
        cli::Commands::Unarchive(command) => {
            commands::archive::unarchive_task(&flow, command).await
        }
        cli::Commands::Category(command) => {
            commands::category::category_command(&flow, command).await
        }
        cli::Commands::Recur(command) => {
            commands::recurrence::recurrence_command(&flow, command).await
        }
    };

    if let Err(e) = result {
        handle_error(e);
        std::process::exit(1);
    }

    if let Err(e) = save_store(&flow, &data_path).await {
        handle_error(e);
        std::process::exit(1);
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .compact();
    let _ = subscriber.try_init();
}

fn load_store(path: &Path, config: &config::Config) -> anyhow::Result<MemoryStore> {
    if path.exists() {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let snapshot: Snapshot = serde_json::from_str(&raw)
            .with_context(|| format!("Failed to parse {}", path.display()))?;
        Ok(MemoryStore::from_snapshot(snapshot))
    } else if config.sample_data {
        Ok(MemoryStore::with_sample_data())
    } else {
        Ok(MemoryStore::new())
    }
}

async fn save_store(flow: &TaskFlow<MemoryStore>, path: &Path) -> anyhow::Result<()> {
    let snapshot = flow.store().snapshot().await;
    let json = serde_json::to_string_pretty(&snapshot)?;
    std::fs::write(path, json).with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}

fn handle_error(err: anyhow::Error) {
    let error_style = Style::new().red().bold();

    if let Some(core_error) = err.chain().find_map(|e| e.downcast_ref::<CoreError>()) {
        eprintln!("{} {}", "Error:".style(error_style), core_error);
    } else {
        eprintln!("{} {}", "Error:".style(error_style), err);
    }
}
