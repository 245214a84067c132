// crates/db/src/queries/mod.rs
// Category and activity operations for the daytrack SQLite database.

mod activities;
mod aggregates;
mod categories;
pub(crate) mod row_types;
