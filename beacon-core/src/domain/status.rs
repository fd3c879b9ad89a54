//! Database connection status

use serde::{Deserialize, Serialize};

/// Transient connection-test status shown in the dashboard header
///
/// Not persisted; every process start begins disconnected.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DbConnectionStatus {
    #[default]
    Disconnected,
    Connecting,
    Connected,
}

impl std::fmt::Display for DbConnectionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            DbConnectionStatus::Disconnected => "disconnected",
            DbConnectionStatus::Connecting => "connecting",
            DbConnectionStatus::Connected => "connected",
        };
        write!(f, "{}", s)
    }
}
