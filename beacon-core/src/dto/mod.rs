//! Request and response bodies for the backend API

pub mod job;
pub mod pipeline;
pub mod settings;
