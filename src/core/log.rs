use crate::db::log::load_log;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::utils::table::{Column, Table};

pub struct LogLogic;

impl LogLogic {
    /// Print the internal operation log, newest first.
    pub fn print_log(pool: &mut DbPool) -> AppResult<()> {
        let rows = load_log(pool)?;

        if rows.is_empty() {
            println!("No log entries.");
            return Ok(());
        }

        let mut table = Table::new(vec![
            Column {
                header: "DATE".to_string(),
                width: 32,
            },
            Column {
                header: "OP".to_string(),
                width: 10,
            },
            Column {
                header: "MESSAGE".to_string(),
                width: 50,
            },
        ]);

        for (date, operation, message) in rows {
            table.add_row(vec![date, operation, message]);
        }

        print!("{}", table.render());
        Ok(())
    }
}
