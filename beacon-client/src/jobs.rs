//! Job-related API endpoints

use crate::BackendClient;
use crate::error::Result;
use beacon_core::dto::job::CreateJob;

impl BackendClient {
    /// Create a job under a pipeline
    ///
    /// # Arguments
    /// * `pipeline_id` - The pipeline the job belongs to
    /// * `req` - The job creation request (name and command list)
    pub async fn create_job(&self, pipeline_id: &str, req: CreateJob) -> Result<()> {
        let url = format!("{}/api/pipelines/{}/jobs", self.base_url, pipeline_id);
        let response = self.client.post(&url).json(&req).send().await?;

        self.handle_empty_response(response).await
    }
}
