//! # cloudbox-database
//!
//! PostgreSQL connection management, the migration runner, and the two
//! [`EntryStore`] implementations: [`EntryRepository`] on PostgreSQL and
//! [`MemoryEntryStore`] for tests and local development.

pub mod connection;
pub mod memory;
pub mod migration;
pub mod repositories;
pub mod store;

pub use connection::DatabasePool;
pub use memory::MemoryEntryStore;
pub use repositories::EntryRepository;
pub use store::{EntryQuery, EntryStore, Relocation};
