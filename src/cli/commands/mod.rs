//! Command implementations for pos-client.
//!
//! Each command returns the text to print; `main` does the printing.

mod config;
mod lookup;
mod queue;
mod sell;
mod sync;

pub use config::config;
pub use lookup::lookup;
pub use queue::queue;
pub use sell::sell;
pub use sync::sync;

use clap::CommandFactory;
use clap_complete::Shell;

use crate::cli::args::Cli;
use crate::error::PosError;

/// Generate a completion script for `shell`.
///
/// # Errors
///
/// Returns `PosError::Io` if the generated script is not valid UTF-8.
pub fn completions(shell: Shell) -> Result<String, PosError> {
    let mut cmd = Cli::command();
    let mut buf = Vec::new();
    clap_complete::generate(shell, &mut cmd, "pos-client", &mut buf);

    String::from_utf8(buf).map_err(|e| {
        PosError::Io(std::io::Error::new(std::io::ErrorKind::InvalidData, e))
    })
}
