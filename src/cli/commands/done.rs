use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::entries::EntryLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::completion::Completion;
use crate::notify::ChangeNotifier;
use crate::sync;
use crate::ui::messages::success;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Done { id, partial, reset } = cmd {
        let completed = if *partial {
            Completion::Partial
        } else if *reset {
            Completion::No
        } else {
            Completion::Yes
        };

        let mut pool = DbPool::new(&cfg.database)?;
        let cloud = sync::from_config(cfg);
        let notifier = ChangeNotifier::new();

        let entry = EntryLogic::set_completion(&mut pool, *id, completed, cloud.as_ref(), &notifier)?;

        success(format!(
            "Entry #{} '{}' marked as {}",
            entry.id,
            entry.task,
            completed.to_db_str()
        ));
    }

    Ok(())
}
