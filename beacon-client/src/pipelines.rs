//! Pipeline-related API endpoints

use crate::BackendClient;
use crate::error::Result;
use beacon_core::dto::pipeline::CreatePipeline;

impl BackendClient {
    // =============================================================================
    // Pipeline Management
    // =============================================================================

    /// Create a new pipeline
    ///
    /// # Arguments
    /// * `req` - The pipeline creation request
    ///
    /// # Example
    /// ```no_run
    /// # use beacon_client::BackendClient;
    /// # use beacon_core::dto::pipeline::CreatePipeline;
    /// # async fn example() -> beacon_client::Result<()> {
    /// let client = BackendClient::new("http://localhost:8080");
    /// client.create_pipeline(CreatePipeline {
    ///     id: "build-1".to_string(),
    ///     name: "Build".to_string(),
    ///     description: "Main build pipeline".to_string(),
    /// }).await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn create_pipeline(&self, req: CreatePipeline) -> Result<()> {
        let url = format!("{}/api/pipelines", self.base_url);
        let response = self.client.post(&url).json(&req).send().await?;

        self.handle_empty_response(response).await
    }

    /// Trigger a run of a pipeline
    ///
    /// # Arguments
    /// * `pipeline_id` - The pipeline id to run
    pub async fn run_pipeline(&self, pipeline_id: &str) -> Result<()> {
        let url = format!("{}/api/pipelines/{}/run", self.base_url, pipeline_id);
        let response = self.client.post(&url).send().await?;

        self.handle_empty_response(response).await
    }
}
