pub mod entries;
pub mod log;
pub mod reconciler;
pub mod templates;
