use anyhow::Result;
use owo_colors::{OwoColorize, Style};
use taskflow_core::models::{NewCategoryData, UpdateCategoryData};
use taskflow_core::service::TaskFlow;
use taskflow_core::store::Store;

use crate::cli::{CategoryCommand, CategorySubcommand};
use crate::util::resolve_category;
use crate::views::table::display_categories;

pub async fn category_command(
    flow: &TaskFlow<impl Store>,
    command: CategoryCommand,
) -> Result<()> {
    match command.command {
        CategorySubcommand::Add(add) => {
            let category = flow
                .add_category(NewCategoryData {
                    name: add.name,
                    color: add.color,
                })
                .await?;
            let success_style = Style::new().green().bold();
            println!(
                "{} Created category: {}",
                "✓".style(success_style),
                category.name.bright_white().bold()
            );
        }
        CategorySubcommand::List => {
            let categories = flow.list_categories().await?;
            display_categories(&categories);
        }
        CategorySubcommand::Edit(edit) => {
            let category = resolve_category(flow, &edit.name).await?;
            let updated = flow
                .update_category(
                    category.id,
                    UpdateCategoryData {
                        name: edit.rename,
                        color: edit.color.map(Some),
                    },
                )
                .await?;
            println!("Updated category: '{}'", updated.name);
        }
        CategorySubcommand::Delete(delete) => {
            let category = resolve_category(flow, &delete.name).await?;
            flow.delete_category(category.id).await?;
            println!("Deleted category: '{}'", category.name);
        }
    }

    Ok(())
}
