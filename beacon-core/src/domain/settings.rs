//! Settings domain types
//!
//! The full settings object is persisted as one JSON document; partial saves
//! merge into it by top-level section. Field names serialize in camelCase to
//! match the backend API bodies.

use serde::{Deserialize, Serialize};

/// Persisted dashboard settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub database: DatabaseSettings,
    #[serde(default)]
    pub system: SystemSettings,
    #[serde(default)]
    pub security: SecuritySettings,
}

/// Database connection settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DatabaseSettings {
    #[serde(rename = "type")]
    pub db_type: DatabaseType,
    pub host: String,
    pub port: Option<u16>,
    pub name: String,
    pub username: String,
    pub connection_string: String,
}

impl Default for DatabaseSettings {
    fn default() -> Self {
        let db_type = DatabaseType::default();
        Self {
            db_type,
            host: "localhost".to_string(),
            port: db_type.default_port(),
            name: String::new(),
            username: String::new(),
            connection_string: String::new(),
        }
    }
}

/// Supported database types
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DatabaseType {
    #[default]
    Postgresql,
    Mysql,
    Sqlite,
    Mongodb,
}

impl DatabaseType {
    /// Default port for the database type; sqlite has none
    pub fn default_port(&self) -> Option<u16> {
        match self {
            DatabaseType::Postgresql => Some(5432),
            DatabaseType::Mysql => Some(3306),
            DatabaseType::Sqlite => None,
            DatabaseType::Mongodb => Some(27017),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DatabaseType::Postgresql => "postgresql",
            DatabaseType::Mysql => "mysql",
            DatabaseType::Sqlite => "sqlite",
            DatabaseType::Mongodb => "mongodb",
        }
    }

    /// Parse a database type from its lowercase name
    pub fn parse(input: &str) -> Option<Self> {
        match input {
            "postgresql" => Some(DatabaseType::Postgresql),
            "mysql" => Some(DatabaseType::Mysql),
            "sqlite" => Some(DatabaseType::Sqlite),
            "mongodb" => Some(DatabaseType::Mongodb),
            _ => None,
        }
    }
}

impl std::fmt::Display for DatabaseType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// System-wide execution settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SystemSettings {
    pub max_concurrent_jobs: u32,
    pub log_retention_days: u32,
    /// Dashboard polling interval in seconds
    pub polling_interval: u64,
    pub enable_notifications: bool,
    pub auto_restart_failed: bool,
}

impl Default for SystemSettings {
    fn default() -> Self {
        Self {
            max_concurrent_jobs: 5,
            log_retention_days: 30,
            polling_interval: 5,
            enable_notifications: true,
            auto_restart_failed: false,
        }
    }
}

/// Security settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SecuritySettings {
    pub api_key: String,
    /// Session timeout in minutes
    pub session_timeout: u32,
    #[serde(rename = "enableSSL")]
    pub enable_ssl: bool,
}

impl Default for SecuritySettings {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            session_timeout: 30,
            enable_ssl: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_ports() {
        assert_eq!(DatabaseType::Postgresql.default_port(), Some(5432));
        assert_eq!(DatabaseType::Mysql.default_port(), Some(3306));
        assert_eq!(DatabaseType::Sqlite.default_port(), None);
        assert_eq!(DatabaseType::Mongodb.default_port(), Some(27017));
    }

    #[test]
    fn test_settings_field_names_match_api() {
        let settings = Settings::default();
        let json = serde_json::to_value(&settings).unwrap();

        assert!(json["database"].get("type").is_some());
        assert!(json["database"].get("connectionString").is_some());
        assert!(json["system"].get("maxConcurrentJobs").is_some());
        assert!(json["system"].get("logRetentionDays").is_some());
        assert!(json["security"].get("apiKey").is_some());
        assert!(json["security"].get("enableSSL").is_some());
    }

    #[test]
    fn test_database_type_roundtrip() {
        for db_type in [
            DatabaseType::Postgresql,
            DatabaseType::Mysql,
            DatabaseType::Sqlite,
            DatabaseType::Mongodb,
        ] {
            assert_eq!(DatabaseType::parse(db_type.as_str()), Some(db_type));
        }
        assert_eq!(DatabaseType::parse("oracle"), None);
    }
}
