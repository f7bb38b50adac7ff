// src/lib.rs
pub mod cli;
pub mod config;
pub mod error;
pub mod loader;
pub mod logging;
pub mod mongo;
pub mod records;

pub use config::LoaderConfig;
pub use error::LoadError;
pub use loader::{dry_run, insert_records, load_and_insert, load_into};
