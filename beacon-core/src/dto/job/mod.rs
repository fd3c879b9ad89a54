//! Job DTOs

use serde::{Deserialize, Serialize};

/// Request to create a job under a pipeline
///
/// The pipeline id travels in the URL path, not the body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateJob {
    pub name: String,
    pub commands: Vec<String>,
}
