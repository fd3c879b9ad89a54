//! Backend API seam
//!
//! The controller talks to the backend through this trait so its behavior
//! can be exercised against an in-memory fake in tests.

use async_trait::async_trait;
use beacon_client::{BackendClient, Result};
use beacon_core::domain::settings::{DatabaseSettings, SecuritySettings, SystemSettings};
use beacon_core::dto::job::CreateJob;
use beacon_core::dto::pipeline::CreatePipeline;
use beacon_core::dto::settings::ConnectionTestResult;

/// The backend API surface the dashboard consumes
#[async_trait]
pub trait Backend: Send + Sync {
    async fn create_pipeline(&self, req: CreatePipeline) -> Result<()>;

    async fn create_job(&self, pipeline_id: &str, req: CreateJob) -> Result<()>;

    async fn run_pipeline(&self, pipeline_id: &str) -> Result<()>;

    async fn test_database(&self, config: &DatabaseSettings) -> Result<ConnectionTestResult>;

    async fn save_database_config(&self, config: &DatabaseSettings) -> Result<()>;

    async fn save_system_config(&self, config: &SystemSettings) -> Result<()>;

    async fn save_security_config(&self, config: &SecuritySettings) -> Result<()>;
}

#[async_trait]
impl Backend for BackendClient {
    async fn create_pipeline(&self, req: CreatePipeline) -> Result<()> {
        BackendClient::create_pipeline(self, req).await
    }

    async fn create_job(&self, pipeline_id: &str, req: CreateJob) -> Result<()> {
        BackendClient::create_job(self, pipeline_id, req).await
    }

    async fn run_pipeline(&self, pipeline_id: &str) -> Result<()> {
        BackendClient::run_pipeline(self, pipeline_id).await
    }

    async fn test_database(&self, config: &DatabaseSettings) -> Result<ConnectionTestResult> {
        BackendClient::test_database(self, config).await
    }

    async fn save_database_config(&self, config: &DatabaseSettings) -> Result<()> {
        BackendClient::save_database_config(self, config).await
    }

    async fn save_system_config(&self, config: &SystemSettings) -> Result<()> {
        BackendClient::save_system_config(self, config).await
    }

    async fn save_security_config(&self, config: &SecuritySettings) -> Result<()> {
        BackendClient::save_security_config(self, config).await
    }
}
