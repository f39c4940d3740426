pub mod add;
pub mod config;
pub mod db;
pub mod del;
pub mod done;
pub mod init;
pub mod list;
pub mod log;
pub mod reconcile;
pub mod template;
