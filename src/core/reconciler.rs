//! Daily reconciliation pass.
//!
//! On each view load (and on explicit request) the reconciler:
//!   1. forward-moves every overdue, incomplete, standalone entry to today,
//!      stamping "Auto-moved from <date>" into its adjustment note;
//!   2. materializes one entry per applicable template not yet represented
//!      among today's entries.
//!
//! Template-linked entries are exempt from the move: they regenerate fresh
//! each applicable day instead of dragging forward.
//!
//! Writes are persisted one at a time, no transaction. A failure mid-pass
//! leaves a partially-reconciled day; the pass is idempotent, so the next
//! run picks up where this one stopped.

use crate::db::entries::{insert_entry, load_entries, load_entries_by_date, update_entry};
use crate::db::log::oplog;
use crate::db::pool::DbPool;
use crate::db::templates::load_templates;
use crate::errors::AppResult;
use crate::models::entry::Entry;
use crate::notify::{ChangeNotifier, Store};
use crate::sync::{self, CloudSync};
use chrono::NaiveDate;

#[derive(Debug, Default, Clone, Copy)]
pub struct ReconcileReport {
    pub moved: usize,
    pub materialized: usize,
}

impl ReconcileReport {
    pub fn changed(&self) -> bool {
        self.moved + self.materialized > 0
    }
}

pub struct Reconciler;

impl Reconciler {
    pub fn run(
        pool: &mut DbPool,
        today: NaiveDate,
        sync: &dyn CloudSync,
        notifier: &ChangeNotifier,
    ) -> AppResult<ReconcileReport> {
        let conn = &pool.conn;

        let entries = load_entries(conn)?;
        let templates = load_templates(conn)?;

        let mut report = ReconcileReport::default();

        //
        // 1) Forward-move overdue standalone entries
        //
        for e in &entries {
            if e.date >= today || e.completed.is_done() || e.template_id.is_some() {
                continue;
            }

            let mut moved = e.clone();
            let from = moved.date_str();

            moved.date = today;
            moved.adjustment = if moved.adjustment.is_empty() {
                format!("Auto-moved from {}", from)
            } else {
                format!("{}; Auto-moved from {}", moved.adjustment, from)
            };

            update_entry(conn, &moved)?;
            oplog(
                conn,
                "reconcile",
                &format!("entry:{}", moved.id),
                &format!("Auto-moved from {} to {}", from, today),
            )?;
            sync::push_entry(sync, &moved);

            report.moved += 1;
        }

        //
        // 2) Materialize today's instances of applicable templates
        //
        // Re-read today's entries so the moves above take part in the
        // represented-set check via the composite key.
        let todays = load_entries_by_date(conn, &today)?;

        for tpl in &templates {
            if !tpl.cadence.applies_on(today) {
                continue;
            }

            // Primary check by template_id; composite (start,end,task) key
            // as fallback to tolerate lost linkage.
            let represented = todays
                .iter()
                .any(|e| e.template_id == Some(tpl.id) || e.matches_shape(tpl));

            if represented {
                continue;
            }

            let mut fresh = Entry::from_template(tpl, today);
            fresh.id = insert_entry(conn, &fresh)?;

            oplog(
                conn,
                "reconcile",
                &format!("template:{}", tpl.id),
                &format!("Materialized '{}' for {}", tpl.task, today),
            )?;
            sync::push_entry(sync, &fresh);

            report.materialized += 1;
        }

        if report.changed() {
            notifier.emit(Store::Entries);
        }

        Ok(report)
    }
}
