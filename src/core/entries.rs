//! High-level business logic for entry mutations. Every local write is
//! followed by a best-effort cloud push and a change notification.

use crate::db::entries::{
    hard_delete_entry, insert_entry, load_entry, soft_delete_entry, update_entry,
};
use crate::db::log::oplog;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::completion::Completion;
use crate::models::entry::Entry;
use crate::notify::{ChangeNotifier, Store};
use crate::sync::{self, CloudSync};

pub struct EntryLogic;

impl EntryLogic {
    /// Create a standalone entry for a given day.
    pub fn add(
        pool: &mut DbPool,
        mut entry: Entry,
        sync: &dyn CloudSync,
        notifier: &ChangeNotifier,
    ) -> AppResult<Entry> {
        let conn = &pool.conn;

        entry.id = insert_entry(conn, &entry)?;
        oplog(
            conn,
            "add",
            &format!("entry:{}", entry.id),
            &format!("Added '{}' on {}", entry.task, entry.date_str()),
        )?;

        sync::push_entry(sync, &entry);
        notifier.emit(Store::Entries);

        Ok(entry)
    }

    /// Toggle completion status.
    pub fn set_completion(
        pool: &mut DbPool,
        id: i64,
        completed: Completion,
        sync: &dyn CloudSync,
        notifier: &ChangeNotifier,
    ) -> AppResult<Entry> {
        let conn = &pool.conn;

        let mut entry = load_entry(conn, id)?;
        entry.completed = completed;
        update_entry(conn, &entry)?;

        oplog(
            conn,
            "done",
            &format!("entry:{}", id),
            &format!("Marked '{}' as {}", entry.task, completed.to_db_str()),
        )?;

        sync::push_entry(sync, &entry);
        notifier.emit(Store::Entries);

        Ok(entry)
    }

    /// Delete an entry. Soft by default: the row is flagged, not removed,
    /// and the mirror receives a tombstoned document so a later sync cannot
    /// resurrect it. `hard = true` removes row and mirror document.
    pub fn delete(
        pool: &mut DbPool,
        id: i64,
        hard: bool,
        sync: &dyn CloudSync,
        notifier: &ChangeNotifier,
    ) -> AppResult<()> {
        let conn = &pool.conn;

        let entry = load_entry(conn, id)?;

        if hard {
            hard_delete_entry(conn, id)?;
            sync::delete_mirrored(sync, sync::ENTRIES, id);
        } else {
            soft_delete_entry(conn, id)?;
            push_tombstone(sync, &entry);
        }

        oplog(
            conn,
            "del",
            &format!("entry:{}", id),
            &format!(
                "{} '{}' ({})",
                if hard { "Hard-deleted" } else { "Soft-deleted" },
                entry.task,
                entry.date_str()
            ),
        )?;

        notifier.emit(Store::Entries);
        Ok(())
    }
}

/// Mirror a soft-deleted entry as a tombstoned document.
fn push_tombstone(sync: &dyn CloudSync, entry: &Entry) {
    let mut doc = match serde_json::to_value(entry) {
        Ok(v) => v,
        Err(_) => return,
    };

    if let Some(obj) = doc.as_object_mut() {
        obj.insert("deleted".to_string(), serde_json::Value::Bool(true));
    }

    if let Err(err) = sync.push_item(sync::ENTRIES, entry.id, &doc) {
        crate::ui::messages::warning(format!(
            "Cloud push failed for entry {}: {}",
            entry.id, err
        ));
    }
}
