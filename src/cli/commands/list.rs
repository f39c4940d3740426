use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::reconciler::Reconciler;
use crate::db::entries::{load_entries, load_entries_by_date};
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::entry::Entry;
use crate::notify::ChangeNotifier;
use crate::sync;
use crate::ui::messages::warning;
use crate::utils::date;
use crate::utils::table::{Column, Table};
use crate::utils::time::{format_minutes, minutes_between};
use chrono::NaiveDate;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { date, all } = cmd {
        let mut pool = DbPool::new(&cfg.database)?;
        let cloud = sync::from_config(cfg);
        let notifier = ChangeNotifier::new();

        let day = match date {
            Some(s) => date::parse_date(s).ok_or_else(|| AppError::InvalidDate(s.clone()))?,
            None => date::today(),
        };

        //
        // View-mount semantics: reconcile before rendering. A failed pass
        // leaves local state stale until the next load, never blocks the view.
        //
        if let Err(e) = Reconciler::run(&mut pool, day, cloud.as_ref(), &notifier) {
            warning(format!("Reconciliation failed: {}", e));
        }

        if *all {
            let entries = load_entries(&pool.conn)?;
            if entries.is_empty() {
                println!("No entries.");
                return Ok(());
            }

            let mut current: Option<NaiveDate> = None;
            for e in &entries {
                if current != Some(e.date) {
                    println!("\n📅 {}{}", e.date_str(), weekday_suffix(e.date, cfg));
                    current = Some(e.date);
                }
                println!("{}", render_row(e, cfg));
            }
            println!();
            return Ok(());
        }

        let entries = load_entries_by_date(&pool.conn, &day)?;
        if entries.is_empty() {
            println!("No entries for {}", day);
            return Ok(());
        }

        println!("\n📅 Entries for {}{}", day, weekday_suffix(day, cfg));
        print!("{}", build_table(&entries).render());
    }

    Ok(())
}

fn weekday_suffix(day: NaiveDate, cfg: &Config) -> String {
    if cfg.show_weekday == "None" {
        String::new()
    } else {
        format!(" ({})", date::weekday_label(day))
    }
}

fn build_table(entries: &[Entry]) -> Table {
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
            header: "DUR".to_string(),
            width: 7,
        },
        Column {
            header: "TASK".to_string(),
            width: 28,
        },
        Column {
            header: "DONE".to_string(),
            width: 8,
        },
        Column {
            header: "NOTE".to_string(),
            width: 30,
        },
    ]);

    for e in entries {
        let mark = if e.is_permanent() { "⟳ " } else { "" };
        table.add_row(vec![
            e.id.to_string(),
            e.span_str(),
            format_minutes(minutes_between(e.start_time, e.end_time)),
            format!("{}{}", mark, e.task),
            e.completed.to_db_str().to_string(),
            e.adjustment.clone(),
        ]);
    }

    table
}

fn render_row(e: &Entry, cfg: &Config) -> String {
    let sep = &cfg.separator_char;
    let mark = if e.is_permanent() { " ⟳" } else { "" };
    format!(
        "  #{:<4} {} {} {} [{}]{}",
        e.id,
        e.span_str(),
        sep,
        e.task,
        e.completed.to_db_str(),
        mark
    )
}
