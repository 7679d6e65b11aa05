//! Route handlers, grouped by resource.

pub mod entry;
pub mod folder;
pub mod health;
pub mod upload;
