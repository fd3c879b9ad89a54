//! Settings DTOs

use serde::{Deserialize, Serialize};

/// Outcome of a database connection test
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConnectionTestResult {
    pub success: bool,
    pub message: String,
}
