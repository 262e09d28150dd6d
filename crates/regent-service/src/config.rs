//! Service configuration.
//!
//! All fields have compile-time defaults, so an empty config file (or
//! none at all) yields a working service wired to the conventional
//! resource names.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Top-level configuration for the record service.
///
/// # Example
///
/// ```
/// use regent_service::ServiceConfig;
///
/// let config = ServiceConfig::from_toml(
///     r#"
///     [policy]
///     create = "OPERATOR"
///
///     [watch]
///     threshold = 100
///     "#,
/// )
/// .unwrap();
///
/// assert_eq!(config.policy.create, "OPERATOR");
/// assert_eq!(config.policy.update, "ADMIN"); // default preserved
/// assert_eq!(config.watch.threshold, 100);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    /// Logical names of external resources.
    pub resources: ResourcesConfig,
    /// Required role per mutating operation.
    pub policy: PolicyConfig,
    /// Notification fan-out settings.
    pub notify: NotifyConfig,
    /// Record watch task settings.
    pub watch: WatchConfig,
}

impl ServiceConfig {
    /// Creates a config with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Deserializes from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns error if deserialization fails.
    pub fn from_toml(toml_str: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(toml_str)
    }

    /// Serializes to a TOML string.
    ///
    /// # Errors
    ///
    /// Returns error if serialization fails.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            resources: ResourcesConfig::default(),
            policy: PolicyConfig::default(),
            notify: NotifyConfig::default(),
            watch: WatchConfig::default(),
        }
    }
}

/// Logical resource names handed to the directory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResourcesConfig {
    /// Directory name of the record store handle.
    pub store: String,
    /// Directory name of the broker publisher handle.
    pub broker: String,
    /// Destination queue for published messages.
    pub queue: String,
}

impl Default for ResourcesConfig {
    fn default() -> Self {
        Self {
            store: "jdbc/records".to_string(),
            broker: "jms/records".to_string(),
            queue: "regent.records".to_string(),
        }
    }
}

/// Required role per mutating operation.
///
/// Roles are literal strings compared exactly; configure the exact
/// casing callers will send.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PolicyConfig {
    /// Role required to create records.
    pub create: String,
    /// Role required to update records.
    pub update: String,
    /// Role required to delete records.
    pub delete: String,
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self {
            create: "ADMIN".to_string(),
            update: "ADMIN".to_string(),
            delete: "ADMIN".to_string(),
        }
    }
}

/// Notification fan-out settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NotifyConfig {
    /// Recipient of post-mutation emails.
    pub recipient: String,
    /// Source tag stamped on events and queued messages.
    pub source: String,
    /// Per-channel attempt timeout in milliseconds.
    pub timeout_ms: u64,
}

impl NotifyConfig {
    /// Returns the per-channel attempt timeout.
    #[must_use]
    pub fn attempt_timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

impl Default for NotifyConfig {
    fn default() -> Self {
        Self {
            recipient: "records-ops@example.com".to_string(),
            source: "regent-service".to_string(),
            timeout_ms: 2_000,
        }
    }
}

/// Record watch task settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WatchConfig {
    /// Whether the watch task runs at all.
    pub enabled: bool,
    /// Seconds between ticks. Zero disables the watch.
    pub interval_secs: u64,
    /// Record count above which the alert email is sent.
    pub threshold: usize,
    /// Alert recipient.
    pub recipient: String,
}

impl WatchConfig {
    /// Returns the tick interval.
    #[must_use]
    pub fn interval(&self) -> Duration {
        Duration::from_secs(self.interval_secs)
    }
}

impl Default for WatchConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            interval_secs: 60,
            threshold: 7,
            recipient: "records-ops@example.com".to_string(),
        }
    }
}
