//! Section views
//!
//! Pure render functions from state to text, one per section. Keeping these
//! free of terminal concerns makes the state-to-view mapping testable; the
//! shell decides when to print them.

use beacon_core::domain::log::LogEntry;
use chrono::SecondsFormat;

use crate::state::{DashboardState, Section};

/// Renders the given section from state
pub fn render_section(state: &DashboardState, section: Section) -> String {
    match section {
        Section::Dashboard => render_dashboard(state),
        Section::Pipelines => render_pipelines(state),
        Section::Jobs => render_jobs(state),
        Section::Logs => render_logs(state),
        Section::Settings => render_settings(state),
    }
}

/// Dashboard: counters plus the five most recent activity entries
pub fn render_dashboard(state: &DashboardState) -> String {
    let mut out = String::new();
    out.push_str("== Dashboard ==\n");
    out.push_str(&format!(
        "Total pipelines: {}\n",
        state.dashboard.total_pipelines
    ));
    out.push_str(&format!("Running jobs: {}\n", state.dashboard.running_jobs));
    out.push_str(&format!("Database status: {}\n", state.db_status));
    out.push_str("Recent activity:\n");
    if state.dashboard.recent_activity.is_empty() {
        out.push_str("  (no activity yet)\n");
    }
    for entry in &state.dashboard.recent_activity {
        out.push_str(&format!("  {} - {}\n", timestamp(entry), entry.message));
    }
    out
}

pub fn render_pipelines(state: &DashboardState) -> String {
    let mut out = String::new();
    out.push_str("== Pipelines ==\n");
    if state.pipelines.is_empty() {
        out.push_str("No pipelines found.\n");
        return out;
    }
    for pipeline in &state.pipelines {
        out.push_str(&format!("▸ {}\n", pipeline.id));
        out.push_str(&format!("  Name: {}\n", pipeline.name));
        if !pipeline.description.is_empty() {
            out.push_str(&format!("  Description: {}\n", pipeline.description));
        }
    }
    out
}

pub fn render_jobs(state: &DashboardState) -> String {
    let mut out = String::new();
    out.push_str("== Jobs ==\n");
    if state.jobs.is_empty() {
        out.push_str("No jobs found.\n");
        return out;
    }
    for job in &state.jobs {
        out.push_str(&format!(
            "▸ {} [{}] (pipeline: {})\n",
            job.name, job.status, job.pipeline_id
        ));
    }
    out
}

/// Log output: one `[timestamp] LEVEL: message` line per entry, oldest first
pub fn render_logs(state: &DashboardState) -> String {
    let mut out = String::new();
    out.push_str("== Logs ==\n");
    if state.logs.is_empty() {
        out.push_str("(no log entries)\n");
        return out;
    }
    for entry in state.logs.entries() {
        out.push_str(&format!(
            "[{}] {}: {}\n",
            timestamp(entry),
            entry.level,
            entry.message
        ));
    }
    out
}

pub fn render_settings(state: &DashboardState) -> String {
    let settings = &state.settings;
    let mut out = String::new();
    out.push_str("== Settings ==\n");
    out.push_str(&format!("Database status: {}\n", state.db_status));
    out.push_str("Database:\n");
    out.push_str(&format!("  Type: {}\n", settings.database.db_type));
    out.push_str(&format!("  Host: {}\n", settings.database.host));
    out.push_str(&format!(
        "  Port: {}\n",
        settings
            .database
            .port
            .map(|p| p.to_string())
            .unwrap_or_default()
    ));
    out.push_str(&format!("  Name: {}\n", settings.database.name));
    out.push_str(&format!("  Username: {}\n", settings.database.username));
    out.push_str("System:\n");
    out.push_str(&format!(
        "  Max concurrent jobs: {}\n",
        settings.system.max_concurrent_jobs
    ));
    out.push_str(&format!(
        "  Log retention days: {}\n",
        settings.system.log_retention_days
    ));
    out.push_str(&format!(
        "  Polling interval: {}s\n",
        settings.system.polling_interval
    ));
    out.push_str(&format!(
        "  Notifications: {}\n",
        settings.system.enable_notifications
    ));
    out.push_str(&format!(
        "  Auto-restart failed: {}\n",
        settings.system.auto_restart_failed
    ));
    out.push_str("Security:\n");
    out.push_str(&format!(
        "  API key: {}\n",
        if settings.security.api_key.is_empty() {
            "(not set)"
        } else {
            settings.security.api_key.as_str()
        }
    ));
    out.push_str(&format!(
        "  Session timeout: {}m\n",
        settings.security.session_timeout
    ));
    out.push_str(&format!("  SSL: {}\n", settings.security.enable_ssl));
    out
}

fn timestamp(entry: &LogEntry) -> String {
    entry.timestamp.to_rfc3339_opts(SecondsFormat::Millis, true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use beacon_core::domain::job::{Job, JobStatus};
    use beacon_core::domain::log::LogLevel;
    use beacon_core::domain::pipeline::Pipeline;
    use beacon_core::domain::settings::Settings;

    fn state() -> DashboardState {
        DashboardState::new(1000, Settings::default())
    }

    #[test]
    fn test_render_dashboard_counters() {
        let mut state = state();
        state.pipelines.push(Pipeline {
            id: "build-1".to_string(),
            name: "Build".to_string(),
            description: String::new(),
        });
        state.logs.push("Pipeline \"build-1\" created successfully", LogLevel::Info);
        state.refresh_dashboard();

        let rendered = render_dashboard(&state);
        assert!(rendered.contains("Total pipelines: 1"));
        assert!(rendered.contains("Running jobs: 0"));
        assert!(rendered.contains("Database status: disconnected"));
        assert!(rendered.contains("Pipeline \"build-1\" created successfully"));
    }

    #[test]
    fn test_render_logs_reflects_every_entry_in_order() {
        let mut state = state();
        state.logs.push("first", LogLevel::Info);
        state.logs.push("second", LogLevel::Error);

        let rendered = render_logs(&state);
        let first = rendered.find("INFO: first").unwrap();
        let second = rendered.find("ERROR: second").unwrap();
        assert!(first < second);

        // Re-rendering reflects the full current collection.
        state.logs.push("third", LogLevel::Info);
        let rendered = render_logs(&state);
        assert!(rendered.contains("first"));
        assert!(rendered.contains("third"));
    }

    #[test]
    fn test_render_jobs_shows_status() {
        let mut state = state();
        state.jobs.push(Job {
            name: "unit-tests".to_string(),
            status: JobStatus::Pending,
            pipeline_id: "build-1".to_string(),
        });

        let rendered = render_jobs(&state);
        assert!(rendered.contains("unit-tests [pending] (pipeline: build-1)"));
    }

    #[test]
    fn test_render_empty_collections() {
        let state = state();
        assert!(render_pipelines(&state).contains("No pipelines found."));
        assert!(render_jobs(&state).contains("No jobs found."));
    }
}
