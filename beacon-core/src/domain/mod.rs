//! Domain types for the dashboard client

pub mod job;
pub mod log;
pub mod pipeline;
pub mod settings;
pub mod status;
