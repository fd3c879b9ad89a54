//! Beacon Core
//!
//! Core types for the Beacon CI/CD dashboard client.
//!
//! This crate contains:
//! - Domain types: Core business entities (Pipeline, Job, LogEntry, Settings)
//! - DTOs: Request/response bodies for the backend API

pub mod domain;
pub mod dto;
