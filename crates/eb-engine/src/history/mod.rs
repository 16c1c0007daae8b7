//! Chronological record of a tournament run.

pub mod entry;
pub mod log;

pub use entry::HistoryEntry;
pub use log::History;
