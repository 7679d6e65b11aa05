//! PostgreSQL repository implementations.

pub mod entry;

pub use entry::EntryRepository;
