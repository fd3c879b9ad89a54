//! Job domain types

use serde::{Deserialize, Serialize};

/// Job as known to the dashboard
///
/// The name acts as the unique key in client state. The pipeline reference
/// is not enforced against known pipelines.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Job {
    pub name: String,
    pub status: JobStatus,
    pub pipeline_id: String,
}

/// Job lifecycle status
///
/// This client only ever writes `Pending`; the other variants are reported
/// by the backend and rendered as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JobStatus {
    Pending,
    Running,
    Completed,
    Failed,
}

impl std::fmt::Display for JobStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            JobStatus::Pending => "pending",
            JobStatus::Running => "running",
            JobStatus::Completed => "completed",
            JobStatus::Failed => "failed",
        };
        write!(f, "{}", s)
    }
}
