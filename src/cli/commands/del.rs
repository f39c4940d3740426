use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::entries::EntryLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::notify::ChangeNotifier;
use crate::sync;
use crate::ui::messages::{info, success, warning};

use std::io::{self, Write};

/// Ask a yes/no confirmation from the user
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
    if let Commands::Del { id, hard } = cmd {
        //
        // Hard deletes are irreversible, soft deletes are not: only the
        // former needs a confirmation prompt.
        //
        if *hard {
            let prompt = format!("Permanently delete entry #{}? This action is irreversible.", id);
            if !ask_confirmation(&prompt) {
                info("Operation cancelled.");
                return Ok(());
            }
        }

        let mut pool = DbPool::new(&cfg.database)?;
        let cloud = sync::from_config(cfg);
        let notifier = ChangeNotifier::new();

        EntryLogic::delete(&mut pool, *id, *hard, cloud.as_ref(), &notifier)?;

        if *hard {
            success(format!("Entry #{} permanently deleted.", id));
        } else {
            success(format!("Entry #{} deleted.", id));
        }
    }

    Ok(())
}
