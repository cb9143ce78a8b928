//! Storage layer for pos-client.
//!
//! `SQLite`-backed persistence for the offline sales queue.

mod database;
mod migrations;

pub use database::Database;
