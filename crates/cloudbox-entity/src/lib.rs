//! # cloudbox-entity
//!
//! Domain entity models for Cloudbox. The whole metadata store is one
//! self-referential table of entries; every struct in this crate is either
//! a row of that table or the data needed to write one.

pub mod entry;

pub use entry::{Entry, NewEntry};
