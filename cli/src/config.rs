//! Layered configuration for the `stratos` binary using figment.
//!
//! Sources in priority order, highest wins:
//! 1. Command-line flags (`--url`, `--username`, ...)
//! 2. Environment variables (`STRATOS_URL`, `STRATOS_USERNAME`, ...)
//! 3. Working-directory `.stratos.toml`
//! 4. User-level `~/.config/stratos/config.toml`
//! 5. Built-in defaults

use std::path::PathBuf;
use std::time::Duration;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use stratos_core::Credentials;

use crate::error::ConfigError;

pub const DEFAULT_URL: &str = "https://localhost:9443";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct StratosConfig {
    pub url: String,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
    /// Skip TLS certificate verification.
    #[serde(default)]
    pub insecure: bool,
    pub timeout_secs: u64,
}

impl Default for StratosConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_URL.to_string(),
            username: None,
            password: None,
            insecure: false,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

/// Values given on the command line. `None` leaves lower layers in charge.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ConfigOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub insecure: Option<bool>,
}

impl StratosConfig {
    pub fn load(overrides: &ConfigOverrides) -> Result<Self, ConfigError> {
        let config: Self = Self::figment()
            .merge(Serialized::defaults(overrides))
            .extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Every layer except the command line.
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        let local_path = PathBuf::from(".stratos.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment.merge(Env::prefixed("STRATOS_").ignore(&["log"]))
    }

    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("stratos").join("config.toml"))
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if !(self.url.starts_with("http://") || self.url.starts_with("https://")) {
            return Err(ConfigError::InvalidValue {
                field: "url",
                reason: format!("'{}' is not an http(s) URL", self.url),
            });
        }
        if self.timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "timeout_secs",
                reason: "must be at least 1".to_string(),
            });
        }
        Ok(())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Basic-auth credentials; both halves must be configured.
    pub fn credentials(&self) -> Result<Credentials, ConfigError> {
        let username = self.username.as_deref().filter(|u| !u.is_empty()).ok_or(
            ConfigError::NotConfigured {
                field: "username",
                env: "USERNAME",
                flag: "username",
            },
        )?;
        let password = self.password.as_deref().ok_or(ConfigError::NotConfigured {
            field: "password",
            env: "PASSWORD",
            flag: "password",
        })?;
        Ok(Credentials::new(username, password))
    }
}

#[cfg(test)]
mod tests {
    use figment::Jail;

    use super::*;

    #[test]
    fn defaults_apply_without_sources() {
        Jail::expect_with(|jail| {
            jail.set_env("HOME", jail.directory().display().to_string());
            jail.set_env("XDG_CONFIG_HOME", jail.directory().display().to_string());
            let config = StratosConfig::load(&ConfigOverrides::default()).unwrap();
            assert_eq!(config, StratosConfig::default());
            assert_eq!(config.timeout(), Duration::from_secs(30));
            Ok(())
        });
    }

    #[test]
    fn env_overrides_local_file_and_flags_override_env() {
        Jail::expect_with(|jail| {
            jail.set_env("XDG_CONFIG_HOME", jail.directory().display().to_string());
            jail.create_file(
                ".stratos.toml",
                r#"
                    url = "https://stratos.local:9443"
                    username = "file-user"
                    timeout_secs = 5
                "#,
            )?;
            jail.set_env("STRATOS_USERNAME", "env-user");
            jail.set_env("STRATOS_INSECURE", "true");
            jail.set_env("STRATOS_LOG", "debug");

            let config = StratosConfig::load(&ConfigOverrides::default()).unwrap();
            assert_eq!(config.url, "https://stratos.local:9443");
            assert_eq!(config.username.as_deref(), Some("env-user"));
            assert!(config.insecure);
            assert_eq!(config.timeout_secs, 5);

            let overrides = ConfigOverrides {
                username: Some("flag-user".into()),
                password: Some("pw".into()),
                ..Default::default()
            };
            let config = StratosConfig::load(&overrides).unwrap();
            let credentials = config.credentials().unwrap();
            assert_eq!(credentials.username, "flag-user");
            assert_eq!(credentials.password, "pw");
            Ok(())
        });
    }

    #[test]
    fn user_config_dir_is_read() {
        Jail::expect_with(|jail| {
            jail.set_env("XDG_CONFIG_HOME", jail.directory().display().to_string());
            jail.create_dir("stratos")?;
            jail.create_file("stratos/config.toml", r#"password = "from-home""#)?;

            // dirs only honours XDG_CONFIG_HOME on Linux.
            if cfg!(target_os = "linux") {
                let config = StratosConfig::load(&ConfigOverrides::default()).unwrap();
                assert_eq!(config.password.as_deref(), Some("from-home"));
            }
            Ok(())
        });
    }

    #[test]
    fn missing_credentials_are_reported() {
        let config = StratosConfig::default();
        let err = config.credentials().unwrap_err();
        assert!(matches!(err, ConfigError::NotConfigured { field: "username", .. }));

        let config = StratosConfig {
            username: Some("admin".into()),
            ..Default::default()
        };
        let err = config.credentials().unwrap_err();
        assert!(matches!(err, ConfigError::NotConfigured { field: "password", .. }));
    }

    #[test]
    fn non_http_url_is_rejected() {
        Jail::expect_with(|jail| {
            jail.set_env("XDG_CONFIG_HOME", jail.directory().display().to_string());
            let overrides = ConfigOverrides {
                url: Some("stratos.example.com".into()),
                ..Default::default()
            };
            let err = StratosConfig::load(&overrides).unwrap_err();
            assert!(matches!(err, ConfigError::InvalidValue { field: "url", .. }));
            Ok(())
        });
    }
}
