//! Configuration management for pos-client.
//!
//! Settings are read from `~/.pos-client/config.yaml` and resolved, together
//! with command-line and environment overrides, into a [`Session`].

mod paths;
mod session;
mod settings;

pub use paths::Paths;
pub use session::{Overrides, Session};
pub use settings::{BackendConfig, Config, StoreConfig};
