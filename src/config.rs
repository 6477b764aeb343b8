use serde::{Deserialize, Serialize};

use crate::error::{Result, RummageError};
use crate::query::CollationKind;

/// Default number of index slots in the registry
pub const DEFAULT_INDEX_CAPACITY: usize = 32;

/// Largest page a query may request before the size is reset
pub const DEFAULT_MAX_PAGE_SIZE: usize = 200;

/// Page size used when the requested size is out of range
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// BCP-47 tag used by the locale collation
pub const DEFAULT_LOCALE: &str = "en";

/// Search service configuration
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    /// Fixed number of index slots; allocation beyond this fails
    pub index_capacity: usize,
    pub max_page_size: usize,
    pub default_page_size: usize,
    /// String ordering used when ranking by keyword fields
    pub collation: CollationKind,
    /// Locale tailoring applied by the locale collation
    pub locale: String,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            index_capacity: DEFAULT_INDEX_CAPACITY,
            max_page_size: DEFAULT_MAX_PAGE_SIZE,
            default_page_size: DEFAULT_PAGE_SIZE,
            collation: CollationKind::Locale,
            locale: DEFAULT_LOCALE.to_string(),
        }
    }
}

impl ServiceConfig {
    /// Set the number of index slots
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.index_capacity = capacity;
        self
    }

    /// Set the page size limits
    pub fn with_page_limits(mut self, default_size: usize, max_size: usize) -> Self {
        self.default_page_size = default_size;
        self.max_page_size = max_size;
        self
    }

    /// Set the collation used for ranking
    pub fn with_collation(mut self, collation: CollationKind) -> Self {
        self.collation = collation;
        self
    }

    /// Set the locale used by the locale collation
    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = locale.into();
        self
    }

    /// Check that the configuration describes a usable service
    pub fn validate(&self) -> Result<()> {
        if self.index_capacity == 0 {
            return Err(RummageError::InvalidRequest(
                "index_capacity must be greater than zero".to_string(),
            ));
        }
        if self.default_page_size == 0 || self.default_page_size > self.max_page_size {
            return Err(RummageError::InvalidRequest(format!(
                "default_page_size must be within 1..={}, got {}",
                self.max_page_size, self.default_page_size
            )));
        }
        Ok(())
    }
}

/// HTTP server configuration
#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub bind_addr: String,
    pub http_port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: "0.0.0.0".to_string(),
            http_port: 8080,
        }
    }
}

impl ServerConfig {
    /// Create a new server configuration
    pub fn new(bind_addr: impl Into<String>, http_port: u16) -> Self {
        Self {
            bind_addr: bind_addr.into(),
            http_port,
        }
    }

    /// Socket address string to listen on
    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.bind_addr, self.http_port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_configs() {
        let config = ServiceConfig::default();
        assert_eq!(config.index_capacity, 32);
        assert_eq!(config.max_page_size, 200);
        assert_eq!(config.default_page_size, 10);
        assert_eq!(config.collation, CollationKind::Locale);
        assert_eq!(config.locale, "en");
        assert!(config.validate().is_ok());

        let server = ServerConfig::default();
        assert_eq!(server.listen_addr(), "0.0.0.0:8080");
    }

    #[test]
    fn test_service_config_builder() {
        let config = ServiceConfig::default()
            .with_capacity(4)
            .with_page_limits(5, 50)
            .with_collation(CollationKind::Binary)
            .with_locale("sv");

        assert_eq!(config.index_capacity, 4);
        assert_eq!(config.default_page_size, 5);
        assert_eq!(config.max_page_size, 50);
        assert_eq!(config.collation, CollationKind::Binary);
        assert_eq!(config.locale, "sv");
    }

    #[test]
    fn test_validate_rejects_bad_limits() {
        assert!(ServiceConfig::default().with_capacity(0).validate().is_err());
        assert!(ServiceConfig::default()
            .with_page_limits(0, 200)
            .validate()
            .is_err());
        assert!(ServiceConfig::default()
            .with_page_limits(300, 200)
            .validate()
            .is_err());
    }

    #[test]
    fn test_config_from_json() {
        let config: ServiceConfig = serde_json::from_str(
            r#"{"index_capacity":8,"max_page_size":100,"default_page_size":20,"collation":"binary"}"#,
        )
        .unwrap();
        assert_eq!(config.index_capacity, 8);
        assert_eq!(config.collation, CollationKind::Binary);
        assert_eq!(config.locale, "en");

        let config: ServiceConfig =
            serde_json::from_str(r#"{"collation":"locale","locale":"de"}"#).unwrap();
        assert_eq!(config.collation, CollationKind::Locale);
        assert_eq!(config.locale, "de");
        assert_eq!(config.index_capacity, DEFAULT_INDEX_CAPACITY);
    }
}
