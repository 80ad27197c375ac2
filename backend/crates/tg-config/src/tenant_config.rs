use crate::{ConfigError, ConfigErrorResult, DEFAULT_ALLOWED_TENANTS};

use serde::Deserialize;

/// Tenant allow-list. Read once at startup and never changed afterwards.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TenantConfig {
    pub allowed: Vec<String>,
}

impl Default for TenantConfig {
    fn default() -> Self {
        Self {
            allowed: DEFAULT_ALLOWED_TENANTS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl TenantConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.allowed.is_empty() {
            return Err(ConfigError::tenants(
                "tenants.allowed must list at least one domain",
            ));
        }

        for domain in &self.allowed {
            if domain.is_empty() {
                return Err(ConfigError::tenants(
                    "tenants.allowed cannot contain an empty domain",
                ));
            }
            if domain.contains('@') {
                return Err(ConfigError::tenants(format!(
                    "tenants.allowed entry '{}' must be a bare domain without '@'",
                    domain
                )));
            }
            if domain.chars().any(char::is_whitespace) {
                return Err(ConfigError::tenants(format!(
                    "tenants.allowed entry '{}' cannot contain whitespace",
                    domain
                )));
            }
        }

        Ok(())
    }
}
