//! Config commands.

use serde_json::json;

use crate::cli::args::{ConfigCommands, OutputFormat};
use crate::config::{Config, Overrides, Paths, Session};
use crate::error::PosError;
use crate::output::to_json;

/// Execute config subcommands against the default paths.
///
/// # Errors
///
/// Returns an error if the config file cannot be read, parsed, or written.
pub fn config(
    cmd: ConfigCommands,
    overrides: &Overrides,
    format: OutputFormat,
) -> Result<String, PosError> {
    let paths = Paths::new()?;
    run(&paths, cmd, overrides, format)
}

fn run(
    paths: &Paths,
    cmd: ConfigCommands,
    overrides: &Overrides,
    format: OutputFormat,
) -> Result<String, PosError> {
    match cmd {
        ConfigCommands::Show => {
            let config = Config::load_from_path(&paths.config_file)?;
            let session = Session::resolve(&config, overrides)?;
            show(paths, &session, format)
        }
        ConfigCommands::Init { force } => {
            if paths.config_file.exists() && !force {
                return Err(PosError::Config(format!(
                    "{} already exists; use --force to overwrite",
                    paths.config_file.display()
                )));
            }
            paths.ensure_dirs()?;
            Config::default().save_to_path(&paths.config_file)?;

            match format {
                OutputFormat::Json => to_json(&json!({
                    "written": paths.config_file.display().to_string(),
                })),
                OutputFormat::Pretty => Ok(format!(
                    "Wrote default config to {}",
                    paths.config_file.display()
                )),
            }
        }
    }
}

fn show(paths: &Paths, session: &Session, format: OutputFormat) -> Result<String, PosError> {
    match format {
        OutputFormat::Json => to_json(&json!({
            "config_file": paths.config_file.display().to_string(),
            "database": paths.database.display().to_string(),
            "session": session,
        })),
        OutputFormat::Pretty => Ok([
            format!("Config file:     {}", paths.config_file.display()),
            format!("Queue database:  {}", paths.database.display()),
            format!("Backend URL:     {}", session.backend_url),
            format!("Store id:        {}", session.store_id),
            format!("Payment status:  {}", session.payment_status),
            format!("Sale timeout:    {}s", session.sale_timeout.as_secs()),
            format!("Lookup timeout:  {}s", session.lookup_timeout.as_secs()),
        ]
        .join("\n")),
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_init_then_refuse_overwrite() {
        let temp_dir = TempDir::new().unwrap();
        let paths = Paths::with_root(temp_dir.path().join(".pos-client"));
        let overrides = Overrides::default();

        run(
            &paths,
            ConfigCommands::Init { force: false },
            &overrides,
            OutputFormat::Pretty,
        )
        .unwrap();
        assert!(paths.config_file.exists());

        let again = run(
            &paths,
            ConfigCommands::Init { force: false },
            &overrides,
            OutputFormat::Pretty,
        );
        assert!(matches!(again, Err(PosError::Config(_))));

        run(
            &paths,
            ConfigCommands::Init { force: true },
            &overrides,
            OutputFormat::Pretty,
        )
        .unwrap();
    }

    #[test]
    fn test_show_applies_overrides() {
        let temp_dir = TempDir::new().unwrap();
        let paths = Paths::with_root(temp_dir.path().to_path_buf());
        let overrides = Overrides {
            backend_url: Some("http://10.0.0.5:8000".to_string()),
            store_id: Some("S2".to_string()),
        };

        let output = run(&paths, ConfigCommands::Show, &overrides, OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(value["session"]["backend_url"], "http://10.0.0.5:8000");
        assert_eq!(value["session"]["store_id"], "S2");
        assert_eq!(value["session"]["sale_timeout"], 5);
    }
}
