pub mod cadence;
pub mod completion;
pub mod entry;
pub mod template;
