use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::reconciler::Reconciler;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::notify::ChangeNotifier;
use crate::sync;
use crate::ui::messages::{info, success};
use crate::utils::date;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Reconcile { date } = cmd {
        let day = match date {
            Some(s) => date::parse_date(s).ok_or_else(|| AppError::InvalidDate(s.clone()))?,
            None => date::today(),
        };

        let mut pool = DbPool::new(&cfg.database)?;
        let cloud = sync::from_config(cfg);
        let notifier = ChangeNotifier::new();

        let report = Reconciler::run(&mut pool, day, cloud.as_ref(), &notifier)?;

        if report.changed() {
            success(format!(
                "Reconciled {}: moved {} overdue, materialized {} from templates.",
                day, report.moved, report.materialized
            ));
        } else {
            info(format!("Nothing to reconcile for {}.", day));
        }
    }

    Ok(())
}
