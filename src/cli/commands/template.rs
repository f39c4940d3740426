use crate::cli::parser::{Commands, TemplateCommands};
use crate::config::Config;
use crate::core::templates::TemplateLogic;
use crate::db::pool::DbPool;
use crate::db::templates::load_templates;
use crate::errors::{AppError, AppResult};
use crate::models::cadence::Cadence;
use crate::notify::ChangeNotifier;
use crate::sync;
use crate::ui::messages::{info, success, warning};
use crate::utils::table::{Column, Table};

use std::io::{self, Write};

fn ask_confirmation(prompt: &str) -> bool {
    warning(prompt);
    print!("Confirm [y/N]: ");
    let _ = io::stdout().flush();

    let mut s = String::new();
    if io::stdin().read_line(&mut s).is_ok() {
        matches!(s.trim().to_lowercase().as_str(), "y" | "yes")
    } else {
        false
    }
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Template { action } = cmd {
        let mut pool = DbPool::new(&cfg.database)?;
        let cloud = sync::from_config(cfg);
        let notifier = ChangeNotifier::new();

        match action {
            //
            // MAKE PERMANENT
            //
            TemplateCommands::Make { entry_id, cadence } => {
                let cadence = Cadence::from_code(cadence)
                    .ok_or_else(|| AppError::InvalidCadence(cadence.clone()))?;

                let tpl = TemplateLogic::make_permanent(
                    &mut pool,
                    *entry_id,
                    cadence,
                    cloud.as_ref(),
                    &notifier,
                )?;

                success(format!(
                    "Created template #{} '{}' ({}, {}-{})",
                    tpl.id,
                    tpl.task,
                    cadence.to_db_str(),
                    tpl.start_str(),
                    tpl.end_str()
                ));
            }

            //
            // LIST
            //
            TemplateCommands::List => {
                let templates = load_templates(&pool.conn)?;

                if templates.is_empty() {
                    println!("No templates.");
                    return Ok(());
                }

                let mut table = Table::new(vec![
                    Column {
                        header: "ID".to_string(),
                        width: 5,
                    },
                    Column {
                        header: "TIME".to_string(),
                        width: 12,
                    },
                    Column {
                        header: "TASK".to_string(),
                        width: 28,
                    },
                    Column {
                        header: "CADENCE".to_string(),
                        width: 10,
                    },
                ]);

                for t in &templates {
                    table.add_row(vec![
                        t.id.to_string(),
                        format!("{}-{}", t.start_str(), t.end_str()),
                        t.task.clone(),
                        t.cadence.to_db_str().to_string(),
                    ]);
                }

                print!("{}", table.render());
            }

            //
            // DELETE (CASCADE)
            //
            TemplateCommands::Del { id } => {
                let prompt = format!(
                    "Delete template #{} and ALL entries linked to it? This action is irreversible.",
                    id
                );
                if !ask_confirmation(&prompt) {
                    info("Operation cancelled.");
                    return Ok(());
                }

                let removed =
                    TemplateLogic::delete_cascade(&mut pool, *id, cloud.as_ref(), &notifier)?;

                success(format!(
                    "Template #{} deleted along with {} linked entries.",
                    id, removed
                ));
            }
        }
    }

    Ok(())
}
