//! Configuration module for the mail service.

use serde::Deserialize;
use std::path::Path;

use crate::{MailServiceError, Result};

/// SMTP authentication credentials.
///
/// Both members are optional and are passed to the transport as given.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct AuthConfig {
    /// Authentication user.
    #[serde(default)]
    pub user: Option<String>,
    /// Authentication password.
    #[serde(default)]
    pub pass: Option<String>,
}

/// Mailer connection configuration.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct MailerConfig {
    /// SMTP server host. Required.
    #[serde(default)]
    pub host: Option<String>,
    /// SMTP server port. Required.
    #[serde(default)]
    pub port: Option<u16>,
    /// Connect over TLS.
    #[serde(default = "default_is_secure")]
    pub is_secure: bool,
    /// Authentication credentials.
    #[serde(default)]
    pub auth: AuthConfig,
}

fn default_is_secure() -> bool {
    true
}

impl Default for MailerConfig {
    fn default() -> Self {
        Self {
            host: None,
            port: None,
            is_secure: default_is_secure(),
            auth: AuthConfig::default(),
        }
    }
}

impl MailerConfig {
    /// Create a configuration for the given host and port.
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: Some(host.into()),
            port: Some(port),
            ..Self::default()
        }
    }

    /// Set authentication credentials.
    pub fn with_auth(mut self, user: impl Into<String>, pass: impl Into<String>) -> Self {
        self.auth = AuthConfig {
            user: Some(user.into()),
            pass: Some(pass.into()),
        };
        self
    }

    /// Set whether the connection uses TLS.
    pub fn with_secure(mut self, is_secure: bool) -> Self {
        self.is_secure = is_secure;
        self
    }

    /// Return the host and port, or the name of the first one missing.
    ///
    /// An empty host and a zero port count as missing.
    pub fn require_endpoint(&self) -> Result<(&str, u16)> {
        let host = self
            .host
            .as_deref()
            .filter(|host| !host.is_empty())
            .ok_or(MailServiceError::MissingParameter("host"))?;
        let port = self
            .port
            .filter(|port| *port != 0)
            .ok_or(MailServiceError::MissingParameter("port"))?;
        Ok((host, port))
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Optional log file, written in addition to stdout.
    #[serde(default)]
    pub file: Option<String>,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: None,
        }
    }
}

/// Main configuration structure.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    /// Mailer configuration.
    #[serde(default)]
    pub mailer: MailerConfig,
    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::parse(&content)
    }

    /// Load configuration from a TOML file and apply environment variable overrides.
    pub fn load_with_env<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Parse configuration from a TOML string.
    pub fn parse(s: &str) -> Result<Self> {
        toml::from_str(s).map_err(|e| MailServiceError::Config(format!("config parse error: {e}")))
    }

    /// Apply environment variable overrides to the configuration.
    ///
    /// Supported environment variables:
    /// - `MAIL_SERVICE_SMTP_USER`: Override the SMTP authentication user
    /// - `MAIL_SERVICE_SMTP_PASS`: Override the SMTP authentication password
    pub fn apply_env_overrides(&mut self) {
        if let Some(user) = non_empty_env("MAIL_SERVICE_SMTP_USER") {
            self.mailer.auth.user = Some(user);
        }
        if let Some(pass) = non_empty_env("MAIL_SERVICE_SMTP_PASS") {
            self.mailer.auth.pass = Some(pass);
        }
    }

    /// Validate the configuration.
    ///
    /// Returns an error if the mailer host or port is missing.
    pub fn validate(&self) -> Result<()> {
        self.mailer.require_endpoint().map(|_| ())
    }
}

fn non_empty_env(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|value| !value.is_empty())
}
