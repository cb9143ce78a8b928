//! Command-line interface for pos-client.

pub mod args;
pub mod commands;
