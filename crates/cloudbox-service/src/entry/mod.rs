//! Reading and reorganising existing entries.

pub mod service;

pub use service::{EntryService, ListEntriesRequest};
