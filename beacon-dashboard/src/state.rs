//! Dashboard state
//!
//! All client-side state lives here: entity collections, the activity log,
//! the current section, and the transient connection status. Nothing but the
//! settings object survives a restart.

use beacon_core::domain::job::{Job, JobStatus};
use beacon_core::domain::log::LogEntry;
use beacon_core::domain::pipeline::Pipeline;
use beacon_core::domain::settings::Settings;
use beacon_core::domain::status::DbConnectionStatus;

use crate::logs::LogBuffer;

/// The mutually exclusive top-level sections
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Dashboard,
    Pipelines,
    Jobs,
    Logs,
    Settings,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Section::Dashboard,
        Section::Pipelines,
        Section::Jobs,
        Section::Logs,
        Section::Settings,
    ];

    /// Parse a section from its lowercase name
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "dashboard" => Some(Section::Dashboard),
            "pipelines" => Some(Section::Pipelines),
            "jobs" => Some(Section::Jobs),
            "logs" => Some(Section::Logs),
            "settings" => Some(Section::Settings),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Section::Dashboard => "dashboard",
            Section::Pipelines => "pipelines",
            Section::Jobs => "jobs",
            Section::Logs => "logs",
            Section::Settings => "settings",
        }
    }
}

impl std::fmt::Display for Section {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Counters and recent activity shown on the dashboard section
///
/// Recomputed from state on every dashboard refresh (navigation, action
/// outcomes, and poller ticks), never incrementally updated.
#[derive(Debug, Clone, Default)]
pub struct DashboardSnapshot {
    pub total_pipelines: usize,
    pub running_jobs: usize,
    /// The five most recent log entries, newest first
    pub recent_activity: Vec<LogEntry>,
}

/// In-memory state owned by the dashboard controller
#[derive(Debug)]
pub struct DashboardState {
    pub current_section: Section,
    pub pipelines: Vec<Pipeline>,
    pub jobs: Vec<Job>,
    pub logs: LogBuffer,
    pub settings: Settings,
    pub db_status: DbConnectionStatus,
    pub dashboard: DashboardSnapshot,
}

impl DashboardState {
    pub fn new(log_capacity: usize, settings: Settings) -> Self {
        Self {
            current_section: Section::Dashboard,
            pipelines: Vec::new(),
            jobs: Vec::new(),
            logs: LogBuffer::new(log_capacity),
            settings,
            db_status: DbConnectionStatus::default(),
            dashboard: DashboardSnapshot::default(),
        }
    }

    /// Count of jobs whose status is exactly `Running`
    ///
    /// This client never transitions a job to `Running` itself, so the count
    /// reflects only statuses reported by the backend.
    pub fn running_jobs(&self) -> usize {
        self.jobs
            .iter()
            .filter(|job| job.status == JobStatus::Running)
            .count()
    }

    /// Recomputes the dashboard counters and recent activity
    pub fn refresh_dashboard(&mut self) {
        self.dashboard = DashboardSnapshot {
            total_pipelines: self.pipelines.len(),
            running_jobs: self.running_jobs(),
            recent_activity: self.logs.recent(5),
        };
    }
}
