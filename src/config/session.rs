//! Resolved runtime configuration.
//!
//! A [`Session`] is built once per invocation and passed explicitly to the
//! backend client and the submission path.

use std::time::Duration;

use serde::Serialize;

use crate::config::Config;
use crate::error::PosError;

/// Values supplied on the command line or through the environment.
///
/// These take precedence over the config file.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub backend_url: Option<String>,
    pub store_id: Option<String>,
}

/// Immutable configuration for one run of the client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Session {
    /// Backend base URL without a trailing slash.
    pub backend_url: String,
    pub store_id: String,
    pub payment_status: String,
    #[serde(with = "secs")]
    pub sale_timeout: Duration,
    #[serde(with = "secs")]
    pub lookup_timeout: Duration,
}

impl Session {
    /// Resolve a session from the config file and overrides.
    ///
    /// # Errors
    ///
    /// Returns `PosError::Config` if the backend URL or store id is empty, the
    /// URL is not http(s), or a timeout is zero.
    pub fn resolve(config: &Config, overrides: &Overrides) -> Result<Self, PosError> {
        let backend_url = overrides
            .backend_url
            .as_deref()
            .unwrap_or(&config.backend.url)
            .trim()
            .trim_end_matches('/')
            .to_string();

        if !(backend_url.starts_with("http://") || backend_url.starts_with("https://")) {
            return Err(PosError::Config(format!(
                "Backend URL must start with http:// or https://, got '{backend_url}'"
            )));
        }

        let store_id = overrides
            .store_id
            .as_deref()
            .unwrap_or(&config.store.id)
            .trim()
            .to_string();

        if store_id.is_empty() {
            return Err(PosError::Config("Store id must not be empty".to_string()));
        }

        Ok(Self {
            backend_url,
            store_id,
            payment_status: config.store.payment_status.clone(),
            sale_timeout: timeout("sale_timeout_secs", config.backend.sale_timeout_secs)?,
            lookup_timeout: timeout("lookup_timeout_secs", config.backend.lookup_timeout_secs)?,
        })
    }
}

fn timeout(key: &str, secs: u64) -> Result<Duration, PosError> {
    if secs == 0 {
        return Err(PosError::Config(format!("backend.{key} must be at least 1 second")));
    }
    Ok(Duration::from_secs(secs))
}

mod secs {
    use std::time::Duration;

    use serde::Serializer;

    pub fn serialize<S: Serializer>(d: &Duration, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_u64(d.as_secs())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_defaults() {
        let session = Session::resolve(&Config::default(), &Overrides::default()).unwrap();

        assert_eq!(session.backend_url, "http://localhost:8000");
        assert_eq!(session.store_id, "STORE-1");
        assert_eq!(session.sale_timeout, Duration::from_secs(5));
        assert_eq!(session.lookup_timeout, Duration::from_secs(3));
    }

    #[test]
    fn test_overrides_win() {
        let overrides = Overrides {
            backend_url: Some("https://backend.example.com/".to_string()),
            store_id: Some(" S1 ".to_string()),
        };
        let session = Session::resolve(&Config::default(), &overrides).unwrap();

        assert_eq!(session.backend_url, "https://backend.example.com");
        assert_eq!(session.store_id, "S1");
    }

    #[test]
    fn test_rejects_bad_url() {
        let overrides = Overrides {
            backend_url: Some("localhost:8000".to_string()),
            store_id: None,
        };
        let err = Session::resolve(&Config::default(), &overrides).unwrap_err();
        assert!(matches!(err, PosError::Config(_)));
    }

    #[test]
    fn test_rejects_empty_store_id() {
        let overrides = Overrides {
            backend_url: None,
            store_id: Some("   ".to_string()),
        };
        assert!(Session::resolve(&Config::default(), &overrides).is_err());
    }

    #[test]
    fn test_rejects_zero_timeouts() {
        let mut config = Config::default();
        config.backend.sale_timeout_secs = 0;
        let err = Session::resolve(&config, &Overrides::default()).unwrap_err();
        assert!(matches!(err, PosError::Config(ref m) if m.contains("sale_timeout_secs")));

        let mut config = Config::default();
        config.backend.lookup_timeout_secs = 0;
        let err = Session::resolve(&config, &Overrides::default()).unwrap_err();
        assert!(matches!(err, PosError::Config(ref m) if m.contains("lookup_timeout_secs")));
    }
}
