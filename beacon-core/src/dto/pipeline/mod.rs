//! Pipeline DTOs

use serde::{Deserialize, Serialize};

/// Request to create a new pipeline
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePipeline {
    pub id: String,
    pub name: String,
    pub description: String,
}
