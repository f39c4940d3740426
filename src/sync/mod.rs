//! Best-effort cloud mirror. Every local write is pushed to the configured
//! collaborator after the fact; a push failure is logged and swallowed, so
//! local state stays authoritative and writes never block on the mirror.
//! There are no retries: the next write of the same record pushes again.

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::entry::Entry;
use crate::models::template::Template;
use crate::ui::messages::warning;
use std::fs;
use std::path::PathBuf;

pub const ENTRIES: &str = "entries";
pub const TEMPLATES: &str = "templates";

/// Remote document store, interface only. One JSON document per record,
/// keyed by (collection, id).
pub trait CloudSync {
    fn push_item(&self, collection: &str, id: i64, doc: &serde_json::Value) -> AppResult<()>;
    fn delete_item(&self, collection: &str, id: i64) -> AppResult<()>;
    fn is_enabled(&self) -> bool;
}

/// No cloud configured: every push is a successful no-op.
pub struct DisabledSync;

impl CloudSync for DisabledSync {
    fn push_item(&self, _collection: &str, _id: i64, _doc: &serde_json::Value) -> AppResult<()> {
        Ok(())
    }

    fn delete_item(&self, _collection: &str, _id: i64) -> AppResult<()> {
        Ok(())
    }

    fn is_enabled(&self) -> bool {
        false
    }
}

/// Filesystem-directory document mirror: `<root>/<collection>/<id>.json`.
/// Stands in for the remote document store behind the same interface.
pub struct DirSync {
    root: PathBuf,
}

impl DirSync {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn doc_path(&self, collection: &str, id: i64) -> PathBuf {
        self.root.join(collection).join(format!("{}.json", id))
    }
}

impl CloudSync for DirSync {
    fn push_item(&self, collection: &str, id: i64, doc: &serde_json::Value) -> AppResult<()> {
        let dir = self.root.join(collection);
        fs::create_dir_all(&dir)?;

        let body = serde_json::to_string_pretty(doc)
            .map_err(|e| AppError::Sync(format!("serialize {}/{}: {}", collection, id, e)))?;

        fs::write(self.doc_path(collection, id), body)?;
        Ok(())
    }

    fn delete_item(&self, collection: &str, id: i64) -> AppResult<()> {
        match fs::remove_file(self.doc_path(collection, id)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    fn is_enabled(&self) -> bool {
        true
    }
}

/// Build the sync collaborator from configuration.
pub fn from_config(cfg: &Config) -> Box<dyn CloudSync> {
    match &cfg.sync_dir {
        Some(dir) if !dir.is_empty() => Box::new(DirSync::new(dir)),
        _ => Box::new(DisabledSync),
    }
}

/// Push an entry to the mirror, best-effort.
pub fn push_entry(sync: &dyn CloudSync, e: &Entry) {
    let doc = match serde_json::to_value(e) {
        Ok(v) => v,
        Err(err) => {
            warning(format!("Cloud push skipped for entry {}: {}", e.id, err));
            return;
        }
    };

    if let Err(err) = sync.push_item(ENTRIES, e.id, &doc) {
        warning(format!("Cloud push failed for entry {}: {}", e.id, err));
    }
}

/// Push a template to the mirror, best-effort.
pub fn push_template(sync: &dyn CloudSync, t: &Template) {
    let doc = match serde_json::to_value(t) {
        Ok(v) => v,
        Err(err) => {
            warning(format!("Cloud push skipped for template {}: {}", t.id, err));
            return;
        }
    };

    if let Err(err) = sync.push_item(TEMPLATES, t.id, &doc) {
        warning(format!("Cloud push failed for template {}: {}", t.id, err));
    }
}

/// Remove a mirrored document, best-effort.
pub fn delete_mirrored(sync: &dyn CloudSync, collection: &str, id: i64) {
    if let Err(err) = sync.delete_item(collection, id) {
        warning(format!(
            "Cloud delete failed for {}/{}: {}",
            collection, id, err
        ));
    }
}
