use crate::cli::parser::Commands;
use crate::core::entries::EntryLogic;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::entry::Entry;
use crate::notify::ChangeNotifier;
use crate::sync;
use crate::ui::messages::success;
use crate::utils::date;
use crate::utils::time::parse_required_time;

/// Add a time-block entry.
pub fn handle(cmd: &Commands, cfg: &crate::config::Config) -> AppResult<()> {
    if let Commands::Add {
        date,
        start,
        end,
        task,
        comment,
    } = cmd
    {
        //
        // 1. Parse date (mandatory)
        //
        let d = date::parse_date(date).ok_or_else(|| AppError::InvalidDate(date.to_string()))?;

        //
        // 2. Parse start/end times
        //
        let start_time = parse_required_time(start)?;
        let end_time = parse_required_time(end)?;

        if end_time <= start_time {
            return Err(AppError::InvalidTime(format!(
                "Block must end after it starts ({} >= {})",
                start, end
            )));
        }

        //
        // 3. Open DB and collaborators
        //
        let mut pool = DbPool::new(&cfg.database)?;
        let cloud = sync::from_config(cfg);
        let notifier = ChangeNotifier::new();

        //
        // 4. Execute logic
        //
        let entry = Entry::new(d, start_time, end_time, task, comment.as_deref().unwrap_or(""));
        let entry = EntryLogic::add(&mut pool, entry, cloud.as_ref(), &notifier)?;

        success(format!(
            "Added entry #{} '{}' on {} ({})",
            entry.id,
            entry.task,
            entry.date_str(),
            entry.span_str()
        ));
    }

    Ok(())
}
