//! Settings and database API endpoints

use crate::BackendClient;
use crate::error::Result;
use beacon_core::domain::settings::{DatabaseSettings, SecuritySettings, SystemSettings};
use beacon_core::dto::settings::ConnectionTestResult;

impl BackendClient {
    // =============================================================================
    // Database
    // =============================================================================

    /// Test a database configuration without persisting it
    ///
    /// # Arguments
    /// * `config` - The database settings to test
    ///
    /// # Returns
    /// The backend's verdict with a human-readable message
    pub async fn test_database(&self, config: &DatabaseSettings) -> Result<ConnectionTestResult> {
        let url = format!("{}/api/database/test", self.base_url);
        let response = self.client.post(&url).json(config).send().await?;

        self.handle_response(response).await
    }

    /// Persist the database configuration on the backend
    pub async fn save_database_config(&self, config: &DatabaseSettings) -> Result<()> {
        let url = format!("{}/api/database/config", self.base_url);
        let response = self.client.post(&url).json(config).send().await?;

        self.handle_empty_response(response).await
    }

    // =============================================================================
    // System & Security
    // =============================================================================

    /// Persist the system configuration on the backend
    pub async fn save_system_config(&self, config: &SystemSettings) -> Result<()> {
        let url = format!("{}/api/system/config", self.base_url);
        let response = self.client.post(&url).json(config).send().await?;

        self.handle_empty_response(response).await
    }

    /// Persist the security configuration on the backend
    pub async fn save_security_config(&self, config: &SecuritySettings) -> Result<()> {
        let url = format!("{}/api/security/config", self.base_url);
        let response = self.client.post(&url).json(config).send().await?;

        self.handle_empty_response(response).await
    }
}
