//! pos-client - an offline-capable point-of-sale cashier client
//!
//! Sales are posted to a remote backend as they are made. When the backend
//! cannot be reached the sale is kept in a local `SQLite` queue and re-posted
//! by a manually triggered sync sweep.

#![deny(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod backend;
pub mod cli;
pub mod config;
pub mod error;
pub mod features;
pub mod logging;
pub mod output;
pub mod storage;

pub use backend::{HttpBackend, SalesBackend};
pub use cli::args::{Cli, Commands, OutputFormat};
pub use error::PosError;
