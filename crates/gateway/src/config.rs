//! Gateway configuration.

use std::env;

use common::ServiceConfig;
use domain::PasswordScheme;

/// Gateway configuration.
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// Bind address and default log level
    pub service: ServiceConfig,
    /// Load the demo fixtures at start-up
    pub seed_fixtures: bool,
    /// NON-PRODUCTION: store and compare credentials in the clear
    pub allow_plaintext_passwords: bool,
    /// Origin allowed by the CORS layer; no CORS layer when unset
    pub cors_allowed_origin: Option<String>,
}

impl GatewayConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let defaults = ServiceConfig::default();

        Self {
            service: ServiceConfig {
                host: env::var("GATEWAY_HOST").unwrap_or(defaults.host),
                port: env::var("GATEWAY_PORT")
                    .ok()
                    .and_then(|p| p.parse().ok())
                    .unwrap_or(defaults.port),
                log_level: env::var("RUST_LOG").unwrap_or(defaults.log_level),
                ..defaults
            },
            seed_fixtures: env_flag("SEED_FIXTURES").unwrap_or(true),
            allow_plaintext_passwords: env_flag("ALLOW_PLAINTEXT_PASSWORDS").unwrap_or(false),
            cors_allowed_origin: env::var("CORS_ALLOWED_ORIGIN")
                .ok()
                .filter(|origin| !origin.is_empty()),
        }
    }

    /// Scheme used for new credentials.
    pub fn password_scheme(&self) -> PasswordScheme {
        if self.allow_plaintext_passwords {
            PasswordScheme::Plaintext
        } else {
            PasswordScheme::Argon2
        }
    }
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            service: ServiceConfig::default(),
            seed_fixtures: true,
            allow_plaintext_passwords: false,
            cors_allowed_origin: None,
        }
    }
}

/// Parse a boolean environment variable. Unset or unparsable is `None`.
fn env_flag(name: &str) -> Option<bool> {
    env::var(name).ok().and_then(|v| parse_flag(&v))
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
