//! Pipeline domain types

use serde::{Deserialize, Serialize};

/// Pipeline as known to the dashboard
///
/// The id is user-supplied and acts as the unique key in client state.
/// Pipelines are never mutated or deleted by this client once created.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pipeline {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
}
