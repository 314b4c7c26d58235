use std::env;
use std::path::PathBuf;

use crate::modules::structured_data::json_ld::site::{
    DEFAULT_BASE_URL, DEFAULT_FALLBACK_COUNTRY,
};
use crate::modules::structured_data::json_ld::SiteIdentity;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_CONTENT_DIR: &str = "src/content";
const DEFAULT_SMTP_HOST: &str = "localhost";
const DEFAULT_SMTP_PORT: u16 = 1025;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} is not set")]
    Missing(&'static str),

    #[error("{key}='{value}' is invalid: {reason}")]
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SmtpTransport {
    /// Authenticated relay for real delivery.
    Relay {
        server: String,
        username: String,
        password: String,
    },
    /// Plain local catcher (Mailpit, MailHog) used when `RUST_ENV=test`.
    Local { host: String, port: u16 },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotifierConfig {
    Log,
    Smtp {
        inbox: String,
        from: String,
        transport: SmtpTransport,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub content_dir: PathBuf,
    pub site: SiteIdentity,
    /// Overrides the profile name as blog post author.
    pub author_name: Option<String>,
    pub notifier: NotifierConfig,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any key lookup. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let require = |key: &'static str| get(key).ok_or(ConfigError::Missing(key));

        let host = get("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());
        let port = match get("PORT") {
            Some(raw) => parse_port("PORT", &raw)?,
            None => DEFAULT_PORT,
        };
        let content_dir = PathBuf::from(
            get("CONTENT_DIR").unwrap_or_else(|| DEFAULT_CONTENT_DIR.to_string()),
        );

        let site_url = get("SITE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        if !site_url.starts_with("http://") && !site_url.starts_with("https://") {
            return Err(ConfigError::Invalid {
                key: "SITE_URL",
                value: site_url,
                reason: "must start with http:// or https://".to_string(),
            });
        }
        let site = SiteIdentity::new(
            site_url,
            get("SITE_FALLBACK_COUNTRY").unwrap_or_else(|| DEFAULT_FALLBACK_COUNTRY.to_string()),
        );

        let notifier = match get("CONTACT_NOTIFIER").as_deref() {
            None | Some("log") => NotifierConfig::Log,
            Some("smtp") => {
                let transport = if get("RUST_ENV").as_deref() == Some("test") {
                    SmtpTransport::Local {
                        host: get("SMTP_HOST").unwrap_or_else(|| DEFAULT_SMTP_HOST.to_string()),
                        port: match get("SMTP_PORT") {
                            Some(raw) => parse_port("SMTP_PORT", &raw)?,
                            None => DEFAULT_SMTP_PORT,
                        },
                    }
                } else {
                    SmtpTransport::Relay {
                        server: require("SMTP_SERVER")?,
                        username: require("SMTP_USERNAME")?,
                        password: require("SMTP_PASSWORD")?,
                    }
                };
                NotifierConfig::Smtp {
                    inbox: require("CONTACT_INBOX")?,
                    from: require("EMAIL_FROM")?,
                    transport,
                }
            }
            Some(other) => {
                return Err(ConfigError::Invalid {
                    key: "CONTACT_NOTIFIER",
                    value: other.to_string(),
                    reason: "expected 'log' or 'smtp'".to_string(),
                })
            }
        };

        Ok(Self {
            host,
            port,
            content_dir,
            site,
            author_name: get("SITE_AUTHOR_NAME"),
            notifier,
        })
    }

    pub fn server_url(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_port(key: &'static str, raw: &str) -> Result<u16, ConfigError> {
    raw.trim().parse().map_err(|e: std::num::ParseIntError| ConfigError::Invalid {
        key,
        value: raw.to_string(),
        reason: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> Result<AppConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config(&[]).unwrap();

        assert_eq!(config.server_url(), "127.0.0.1:8080");
        assert_eq!(config.content_dir, PathBuf::from("src/content"));
        assert_eq!(config.site, SiteIdentity::default());
        assert_eq!(config.author_name, None);
        assert_eq!(config.notifier, NotifierConfig::Log);
    }

    #[test]
    fn test_site_values() {
        let config = config(&[
            ("SITE_URL", "https://jane.dev/"),
            ("SITE_FALLBACK_COUNTRY", "Portugal"),
            ("SITE_AUTHOR_NAME", "J. Doe"),
            ("CONTENT_DIR", "/srv/content"),
        ])
        .unwrap();

        assert_eq!(config.site.base_url(), "https://jane.dev");
        assert_eq!(config.site.fallback_country(), "Portugal");
        assert_eq!(config.author_name.as_deref(), Some("J. Doe"));
        assert_eq!(config.content_dir, PathBuf::from("/srv/content"));
    }

    #[test]
    fn test_bad_port_is_an_error_not_a_panic() {
        let err = config(&[("PORT", "eighty")]).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { key: "PORT", .. }));
    }

    #[test]
    fn test_site_url_needs_scheme() {
        let err = config(&[("SITE_URL", "jane.dev")]).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { key: "SITE_URL", .. }));
    }

    #[test]
    fn test_unknown_notifier() {
        let err = config(&[("CONTACT_NOTIFIER", "pigeon")]).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid {
                key: "CONTACT_NOTIFIER",
                ..
            }
        ));
    }

    #[test]
    fn test_smtp_relay_requires_credentials() {
        let err = config(&[
            ("CONTACT_NOTIFIER", "smtp"),
            ("CONTACT_INBOX", "jane@example.com"),
            ("EMAIL_FROM", "site@example.com"),
            ("SMTP_SERVER", "smtp.example.com"),
        ])
        .unwrap_err();

        assert_eq!(err, ConfigError::Missing("SMTP_USERNAME"));
    }

    #[test]
    fn test_smtp_relay() {
        let config = config(&[
            ("CONTACT_NOTIFIER", "smtp"),
            ("CONTACT_INBOX", "jane@example.com"),
            ("EMAIL_FROM", "site@example.com"),
            ("SMTP_SERVER", "smtp.example.com"),
            ("SMTP_USERNAME", "site"),
            ("SMTP_PASSWORD", "secret"),
        ])
        .unwrap();

        assert_eq!(
            config.notifier,
            NotifierConfig::Smtp {
                inbox: "jane@example.com".to_string(),
                from: "site@example.com".to_string(),
                transport: SmtpTransport::Relay {
                    server: "smtp.example.com".to_string(),
                    username: "site".to_string(),
                    password: "secret".to_string(),
                },
            }
        );
    }

    #[test]
    fn test_smtp_in_test_env_uses_local_catcher() {
        let config = config(&[
            ("RUST_ENV", "test"),
            ("CONTACT_NOTIFIER", "smtp"),
            ("CONTACT_INBOX", "jane@example.com"),
            ("EMAIL_FROM", "site@example.com"),
        ])
        .unwrap();

        match config.notifier {
            NotifierConfig::Smtp { transport, .. } => assert_eq!(
                transport,
                SmtpTransport::Local {
                    host: "localhost".to_string(),
                    port: 1025
                }
            ),
            other => panic!("Expected smtp notifier, got {other:?}"),
        }
    }

    #[test]
    fn test_blank_values_count_as_unset() {
        let config = config(&[("HOST", "  "), ("SITE_AUTHOR_NAME", "")]).unwrap();
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.author_name, None);
    }
}
