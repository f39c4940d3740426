//! Template lifecycle: promotion ("make permanent") and the deletion
//! cascade. The storage layer enforces no referential integrity; the
//! cascade discipline lives here.

use crate::db::entries::{hard_delete_entries_for_template, load_entry, update_entry};
use crate::db::log::oplog;
use crate::db::pool::DbPool;
use crate::db::templates::{hard_delete_template, insert_template, load_template};
use crate::errors::{AppError, AppResult};
use crate::models::cadence::Cadence;
use crate::models::template::Template;
use crate::notify::{ChangeNotifier, Store};
use crate::sync::{self, CloudSync};

pub struct TemplateLogic;

impl TemplateLogic {
    /// Promote an existing entry to a recurring template and link the entry
    /// to it, so the reconciler recognizes it as today's instance.
    pub fn make_permanent(
        pool: &mut DbPool,
        entry_id: i64,
        cadence: Cadence,
        sync: &dyn CloudSync,
        notifier: &ChangeNotifier,
    ) -> AppResult<Template> {
        let conn = &pool.conn;

        let mut entry = load_entry(conn, entry_id)?;
        if let Some(tid) = entry.template_id {
            return Err(AppError::AlreadyPermanent(entry_id, tid));
        }

        let mut tpl = Template::new(
            entry.start_time,
            entry.end_time,
            &entry.task,
            "",
            "",
            cadence,
        );
        tpl.id = insert_template(conn, &tpl)?;

        entry.template_id = Some(tpl.id);
        entry.cadence = Some(cadence);
        update_entry(conn, &entry)?;

        oplog(
            conn,
            "template",
            &format!("template:{}", tpl.id),
            &format!(
                "Made '{}' permanent ({}) from entry {}",
                tpl.task,
                cadence.to_db_str(),
                entry_id
            ),
        )?;

        sync::push_template(sync, &tpl);
        sync::push_entry(sync, &entry);
        notifier.emit(Store::Templates);
        notifier.emit(Store::Entries);

        Ok(tpl)
    }

    /// Delete a template and cascade to every entry referencing it.
    /// Returns the number of entries removed alongside the template.
    pub fn delete_cascade(
        pool: &mut DbPool,
        template_id: i64,
        sync: &dyn CloudSync,
        notifier: &ChangeNotifier,
    ) -> AppResult<usize> {
        let conn = &pool.conn;

        let tpl = load_template(conn, template_id)?;

        hard_delete_template(conn, template_id)?;
        sync::delete_mirrored(sync, sync::TEMPLATES, template_id);

        let removed = hard_delete_entries_for_template(conn, template_id)?;
        for id in &removed {
            sync::delete_mirrored(sync, sync::ENTRIES, *id);
        }

        oplog(
            conn,
            "template",
            &format!("template:{}", template_id),
            &format!(
                "Deleted template '{}' and {} linked entries",
                tpl.task,
                removed.len()
            ),
        )?;

        notifier.emit(Store::Templates);
        notifier.emit(Store::Entries);

        Ok(removed.len())
    }
}
