//! Dashboard controller
//!
//! Owns all client-side state and mediates between user actions, the backend
//! API, and the persisted settings store. Handlers log the outcome of their
//! own request after it settles, so the activity log is ordered by call
//! sequence rather than response arrival.
//!
//! Network and API failures are caught here, surfaced as a single
//! error-level log entry, and otherwise swallowed; there is no retry.

use std::sync::Mutex;

use beacon_core::domain::job::{Job, JobStatus};
use beacon_core::domain::log::LogLevel;
use beacon_core::domain::pipeline::Pipeline;
use beacon_core::domain::settings::{
    DatabaseSettings, SecuritySettings, Settings, SystemSettings,
};
use beacon_core::domain::status::DbConnectionStatus;
use beacon_core::dto::job::CreateJob;
use beacon_core::dto::pipeline::CreatePipeline;
use beacon_core::dto::settings::ConnectionTestResult;
use tracing::{debug, warn};

use crate::backend::Backend;
use crate::config::Config;
use crate::keygen;
use crate::settings_store::{SettingsSection, SettingsStore};
use crate::state::{DashboardState, Section};
use crate::views;

/// Fields of the create-pipeline form
#[derive(Debug, Clone)]
pub struct PipelineForm {
    pub id: String,
    pub name: String,
    pub description: String,
}

/// Fields of the create-job form
///
/// `commands` is the raw newline-delimited text; blank lines are filtered
/// when the request is built.
#[derive(Debug, Clone)]
pub struct JobForm {
    pub name: String,
    pub pipeline_id: String,
    pub commands: String,
}

/// The dashboard controller
///
/// Explicitly constructed at application start (no implicit singleton); the
/// state sits behind a mutex so the polling task can share the controller.
pub struct DashboardController<B> {
    state: Mutex<DashboardState>,
    backend: B,
    store: SettingsStore,
}

impl<B: Backend> DashboardController<B> {
    /// Creates the controller, loading persisted settings from the store
    pub fn new(config: &Config, backend: B, store: SettingsStore) -> anyhow::Result<Self> {
        let settings = store.load()?;
        let mut state = DashboardState::new(config.log_capacity, settings);
        state.refresh_dashboard();

        Ok(Self {
            state: Mutex::new(state),
            backend,
            store,
        })
    }

    // =============================================================================
    // Navigation
    // =============================================================================

    /// Navigate to a section by name
    ///
    /// Unknown names are logged as a warning and ignored; the current section
    /// is left unchanged.
    pub fn navigate(&self, name: &str) -> Option<Section> {
        let Some(section) = Section::parse(name) else {
            warn!(section = name, "ignoring navigation to unknown section");
            return None;
        };
        self.navigate_to(section);
        Some(section)
    }

    /// Navigate to a known section and refresh its data
    pub fn navigate_to(&self, section: Section) {
        let mut state = self.lock();
        state.current_section = section;
        if section == Section::Dashboard {
            state.refresh_dashboard();
        }
        debug!(section = %section, "navigated");
    }

    pub fn current_section(&self) -> Section {
        self.lock().current_section
    }

    /// Renders the currently active section
    pub fn render_current(&self) -> String {
        let state = self.lock();
        views::render_section(&state, state.current_section)
    }

    /// One polling tick: refresh and render the dashboard if it is active
    pub fn poll_tick(&self) -> Option<String> {
        let mut state = self.lock();
        if state.current_section != Section::Dashboard {
            return None;
        }
        state.refresh_dashboard();
        Some(views::render_dashboard(&state))
    }

    // =============================================================================
    // Pipelines & Jobs
    // =============================================================================

    /// Create a pipeline from the form fields
    ///
    /// On success the pipeline is recorded in memory and the dashboard
    /// counters refresh; on failure state is left unchanged. No client-side
    /// uniqueness check is performed on the id.
    pub async fn create_pipeline(&self, form: PipelineForm) -> bool {
        let req = CreatePipeline {
            id: form.id.clone(),
            name: form.name.clone(),
            description: form.description.clone(),
        };

        match self.backend.create_pipeline(req).await {
            Ok(()) => {
                let mut state = self.lock();
                state.pipelines.push(Pipeline {
                    id: form.id.clone(),
                    name: form.name,
                    description: form.description,
                });
                state.logs.push(
                    format!("Pipeline \"{}\" created successfully", form.id),
                    LogLevel::Info,
                );
                state.refresh_dashboard();
                true
            }
            Err(e) => {
                let mut state = self.lock();
                state
                    .logs
                    .push(format!("Error creating pipeline: {}", e), LogLevel::Error);
                false
            }
        }
    }

    /// Create a job under a pipeline from the form fields
    ///
    /// Blank command lines are filtered out; the job is recorded with status
    /// `Pending` on success and never transitioned by this client.
    pub async fn create_job(&self, form: JobForm) -> bool {
        let commands: Vec<String> = form
            .commands
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(str::to_string)
            .collect();

        let req = CreateJob {
            name: form.name.clone(),
            commands,
        };

        match self.backend.create_job(&form.pipeline_id, req).await {
            Ok(()) => {
                let mut state = self.lock();
                state.jobs.push(Job {
                    name: form.name.clone(),
                    status: JobStatus::Pending,
                    pipeline_id: form.pipeline_id,
                });
                state.logs.push(
                    format!("Job \"{}\" created successfully", form.name),
                    LogLevel::Info,
                );
                state.refresh_dashboard();
                true
            }
            Err(e) => {
                let mut state = self.lock();
                state
                    .logs
                    .push(format!("Error creating job: {}", e), LogLevel::Error);
                false
            }
        }
    }

    /// Trigger a run of a pipeline
    ///
    /// Only logs and refreshes the dashboard on success; no local status is
    /// updated and completion is not polled.
    pub async fn run_pipeline(&self, pipeline_id: &str) -> bool {
        match self.backend.run_pipeline(pipeline_id).await {
            Ok(()) => {
                let mut state = self.lock();
                state
                    .logs
                    .push(format!("Pipeline \"{}\" started", pipeline_id), LogLevel::Info);
                state.refresh_dashboard();
                true
            }
            Err(e) => {
                let mut state = self.lock();
                state
                    .logs
                    .push(format!("Error running pipeline: {}", e), LogLevel::Error);
                false
            }
        }
    }

    // =============================================================================
    // Activity log
    // =============================================================================

    pub fn add_log(&self, message: impl Into<String>, level: LogLevel) {
        self.lock().logs.push(message, level);
    }

    pub fn clear_logs(&self) {
        self.lock().logs.clear();
    }

    // =============================================================================
    // Settings
    // =============================================================================

    /// Current in-memory settings (form state)
    pub fn settings(&self) -> Settings {
        self.lock().settings.clone()
    }

    pub fn db_status(&self) -> DbConnectionStatus {
        self.lock().db_status
    }

    /// Ids of known pipelines, in creation order
    pub fn pipeline_ids(&self) -> Vec<String> {
        self.lock().pipelines.iter().map(|p| p.id.clone()).collect()
    }

    /// Save the database settings section
    ///
    /// The section is only merged into the persisted store after the backend
    /// accepts it; other stored sections are untouched.
    pub async fn save_database_settings(&self, database: DatabaseSettings) -> bool {
        match self.backend.save_database_config(&database).await {
            Ok(()) => self.persist_section(SettingsSection::Database(database), "database"),
            Err(e) => {
                let mut state = self.lock();
                state.logs.push(
                    format!("Error saving database settings: {}", e),
                    LogLevel::Error,
                );
                false
            }
        }
    }

    /// Save the system settings section
    pub async fn save_system_settings(&self, system: SystemSettings) -> bool {
        match self.backend.save_system_config(&system).await {
            Ok(()) => self.persist_section(SettingsSection::System(system), "system"),
            Err(e) => {
                let mut state = self.lock();
                state.logs.push(
                    format!("Error saving system settings: {}", e),
                    LogLevel::Error,
                );
                false
            }
        }
    }

    /// Save the security settings section
    pub async fn save_security_settings(&self, security: SecuritySettings) -> bool {
        match self.backend.save_security_config(&security).await {
            Ok(()) => self.persist_section(SettingsSection::Security(security), "security"),
            Err(e) => {
                let mut state = self.lock();
                state.logs.push(
                    format!("Error saving security settings: {}", e),
                    LogLevel::Error,
                );
                false
            }
        }
    }

    fn persist_section(&self, section: SettingsSection, label: &str) -> bool {
        if let Err(e) = self.store.save_section(&section) {
            let mut state = self.lock();
            state.logs.push(
                format!("Error persisting {} settings: {}", label, e),
                LogLevel::Error,
            );
            return false;
        }

        let mut state = self.lock();
        match section {
            SettingsSection::Database(s) => state.settings.database = s,
            SettingsSection::System(s) => state.settings.system = s,
            SettingsSection::Security(s) => state.settings.security = s,
        }
        state
            .logs
            .push(format!("{} settings saved", capitalize(label)), LogLevel::Info);
        true
    }

    /// Erase the persisted settings and restore defaults
    ///
    /// Interactive confirmation happens in the shell before this is called.
    pub fn reset_settings(&self) -> anyhow::Result<()> {
        self.store.reset()?;
        let mut state = self.lock();
        state.settings = Settings::default();
        state
            .logs
            .push("Settings reset to defaults", LogLevel::Info);
        Ok(())
    }

    /// Generate a fresh API key into the in-memory security form
    ///
    /// The key is not persisted until the security section is saved.
    pub fn generate_api_key(&self) -> String {
        let key = keygen::generate_random_key(keygen::API_KEY_LENGTH);
        self.lock().settings.security.api_key = key.clone();
        key
    }

    // =============================================================================
    // Database connection test
    // =============================================================================

    /// Test the current database settings against the backend
    ///
    /// The status indicator shows `connecting` for the duration of the
    /// request, then `connected` or `disconnected` from the outcome. A
    /// network failure is reported identically to an explicit failure.
    pub async fn test_db_connection(&self) -> ConnectionTestResult {
        let database = {
            let mut state = self.lock();
            state.db_status = DbConnectionStatus::Connecting;
            state.settings.database.clone()
        };

        let result = match self.backend.test_database(&database).await {
            Ok(result) => result,
            Err(e) => ConnectionTestResult {
                success: false,
                message: e.to_string(),
            },
        };

        let mut state = self.lock();
        state.db_status = if result.success {
            DbConnectionStatus::Connected
        } else {
            DbConnectionStatus::Disconnected
        };
        let level = if result.success {
            LogLevel::Info
        } else {
            LogLevel::Error
        };
        state.logs.push(
            format!("Database connection test: {}", result.message),
            level,
        );
        result
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, DashboardState> {
        // Lock poisoning only happens if a handler panicked mid-update;
        // propagating the panic is the right call for a UI process.
        self.state.lock().unwrap()
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use beacon_client::{ClientError, Result as ClientResult};
    use beacon_core::domain::settings::DatabaseType;
    use std::sync::Mutex as StdMutex;

    /// In-memory backend recording calls; fails everything when `fail` is set
    #[derive(Default)]
    struct FakeBackend {
        fail: bool,
        test_success: bool,
        calls: StdMutex<Vec<String>>,
    }

    impl FakeBackend {
        fn ok() -> Self {
            Self {
                fail: false,
                test_success: true,
                calls: StdMutex::new(Vec::new()),
            }
        }

        fn failing() -> Self {
            Self {
                fail: true,
                test_success: false,
                calls: StdMutex::new(Vec::new()),
            }
        }

        fn record(&self, call: impl Into<String>) -> ClientResult<()> {
            self.calls.lock().unwrap().push(call.into());
            if self.fail {
                Err(ClientError::api_error(500, "backend unavailable"))
            } else {
                Ok(())
            }
        }
    }

    #[async_trait]
    impl Backend for FakeBackend {
        async fn create_pipeline(&self, req: CreatePipeline) -> ClientResult<()> {
            self.record(format!("create_pipeline {}", req.id))
        }

        async fn create_job(&self, pipeline_id: &str, req: CreateJob) -> ClientResult<()> {
            self.record(format!(
                "create_job {} {} [{}]",
                pipeline_id,
                req.name,
                req.commands.join(";")
            ))
        }

        async fn run_pipeline(&self, pipeline_id: &str) -> ClientResult<()> {
            self.record(format!("run_pipeline {}", pipeline_id))
        }

        async fn test_database(
            &self,
            _config: &DatabaseSettings,
        ) -> ClientResult<ConnectionTestResult> {
            self.record("test_database")?;
            Ok(ConnectionTestResult {
                success: self.test_success,
                message: if self.test_success {
                    "Connection established".to_string()
                } else {
                    "Connection refused".to_string()
                },
            })
        }

        async fn save_database_config(&self, _config: &DatabaseSettings) -> ClientResult<()> {
            self.record("save_database_config")
        }

        async fn save_system_config(&self, _config: &SystemSettings) -> ClientResult<()> {
            self.record("save_system_config")
        }

        async fn save_security_config(&self, _config: &SecuritySettings) -> ClientResult<()> {
            self.record("save_security_config")
        }
    }

    fn controller_with(
        backend: FakeBackend,
        dir: &tempfile::TempDir,
    ) -> DashboardController<FakeBackend> {
        let config = Config::new(
            "http://localhost:8080".to_string(),
            dir.path().join("settings.json"),
        );
        let store = SettingsStore::new(dir.path().join("settings.json"));
        DashboardController::new(&config, backend, store).unwrap()
    }

    fn log_messages(controller: &DashboardController<FakeBackend>) -> Vec<(LogLevel, String)> {
        controller
            .lock()
            .logs
            .entries()
            .map(|e| (e.level, e.message.clone()))
            .collect()
    }

    #[tokio::test]
    async fn test_create_pipeline_then_job_scenario() {
        let dir = tempfile::tempdir().unwrap();
        let controller = controller_with(FakeBackend::ok(), &dir);

        assert!(
            controller
                .create_pipeline(PipelineForm {
                    id: "build-1".to_string(),
                    name: "Build".to_string(),
                    description: String::new(),
                })
                .await
        );
        assert!(
            controller
                .create_job(JobForm {
                    name: "unit-tests".to_string(),
                    pipeline_id: "build-1".to_string(),
                    commands: "npm test".to_string(),
                })
                .await
        );

        let state = controller.lock();
        assert_eq!(state.pipelines.len(), 1);
        assert_eq!(state.pipelines[0].id, "build-1");
        assert_eq!(state.jobs.len(), 1);
        assert_eq!(state.jobs[0].name, "unit-tests");
        assert_eq!(state.jobs[0].status, JobStatus::Pending);
        drop(state);

        let logs = log_messages(&controller);
        assert_eq!(logs.len(), 2);
        assert_eq!(logs[0].0, LogLevel::Info);
        assert!(logs[0].1.contains("build-1"));
        assert_eq!(logs[1].0, LogLevel::Info);
        assert!(logs[1].1.contains("unit-tests"));
    }

    #[tokio::test]
    async fn test_create_pipeline_failure_leaves_state_unchanged() {
        let dir = tempfile::tempdir().unwrap();
        let controller = controller_with(FakeBackend::failing(), &dir);

        let created = controller
            .create_pipeline(PipelineForm {
                id: "build-1".to_string(),
                name: "Build".to_string(),
                description: String::new(),
            })
            .await;

        assert!(!created);
        let state = controller.lock();
        assert!(state.pipelines.is_empty());
        drop(state);

        let logs = log_messages(&controller);
        assert_eq!(logs.len(), 1);
        assert_eq!(logs[0].0, LogLevel::Error);
        assert!(logs[0].1.starts_with("Error creating pipeline:"));
    }

    #[tokio::test]
    async fn test_job_commands_filter_blank_lines() {
        let dir = tempfile::tempdir().unwrap();
        let controller = controller_with(FakeBackend::ok(), &dir);

        controller
            .create_job(JobForm {
                name: "build".to_string(),
                pipeline_id: "p1".to_string(),
                commands: "npm install\n\n   \nnpm test\n".to_string(),
            })
            .await;

        let calls = controller.backend.calls.lock().unwrap().clone();
        assert_eq!(calls, vec!["create_job p1 build [npm install;npm test]"]);
    }

    #[tokio::test]
    async fn test_run_pipeline_does_not_touch_job_status() {
        let dir = tempfile::tempdir().unwrap();
        let controller = controller_with(FakeBackend::ok(), &dir);

        controller
            .create_pipeline(PipelineForm {
                id: "build-1".to_string(),
                name: "Build".to_string(),
                description: String::new(),
            })
            .await;
        controller
            .create_job(JobForm {
                name: "unit-tests".to_string(),
                pipeline_id: "build-1".to_string(),
                commands: "npm test".to_string(),
            })
            .await;

        assert!(controller.run_pipeline("build-1").await);

        let state = controller.lock();
        // No transition path exists in this client, so running stays 0.
        assert_eq!(state.jobs[0].status, JobStatus::Pending);
        assert_eq!(state.dashboard.running_jobs, 0);
        drop(state);

        let logs = log_messages(&controller);
        assert_eq!(logs.last().unwrap().1, "Pipeline \"build-1\" started");
    }

    #[tokio::test]
    async fn test_db_connection_success_and_failure() {
        let dir = tempfile::tempdir().unwrap();
        let controller = controller_with(FakeBackend::ok(), &dir);

        let result = controller.test_db_connection().await;
        assert!(result.success);
        assert_eq!(controller.db_status(), DbConnectionStatus::Connected);

        let dir = tempfile::tempdir().unwrap();
        let controller = controller_with(FakeBackend::failing(), &dir);

        let result = controller.test_db_connection().await;
        assert!(!result.success);
        assert_eq!(controller.db_status(), DbConnectionStatus::Disconnected);
        let logs = log_messages(&controller);
        assert_eq!(logs.last().unwrap().0, LogLevel::Error);
    }

    #[tokio::test]
    async fn test_save_settings_persists_only_on_success() {
        let dir = tempfile::tempdir().unwrap();
        let controller = controller_with(FakeBackend::failing(), &dir);

        let mut database = DatabaseSettings::default();
        database.db_type = DatabaseType::Mysql;
        assert!(!controller.save_database_settings(database).await);

        // Nothing persisted on failure.
        assert!(!dir.path().join("settings.json").exists());
        assert_eq!(
            controller.settings().database.db_type,
            DatabaseType::Postgresql
        );
    }

    #[tokio::test]
    async fn test_save_settings_section_merges() {
        let dir = tempfile::tempdir().unwrap();
        let controller = controller_with(FakeBackend::ok(), &dir);

        let mut database = DatabaseSettings::default();
        database.name = "ci".to_string();
        assert!(controller.save_database_settings(database.clone()).await);

        let mut system = SystemSettings::default();
        system.max_concurrent_jobs = 9;
        assert!(controller.save_system_settings(system.clone()).await);

        let store = SettingsStore::new(dir.path().join("settings.json"));
        let persisted = store.load().unwrap();
        assert_eq!(persisted.database, database);
        assert_eq!(persisted.system, system);
    }

    #[tokio::test]
    async fn test_generate_api_key_is_not_persisted() {
        let dir = tempfile::tempdir().unwrap();
        let controller = controller_with(FakeBackend::ok(), &dir);

        let key = controller.generate_api_key();
        assert_eq!(key.len(), 32);
        assert_eq!(controller.settings().security.api_key, key);

        let store = SettingsStore::new(dir.path().join("settings.json"));
        assert_eq!(store.load().unwrap().security.api_key, "");
    }

    #[tokio::test]
    async fn test_reset_settings() {
        let dir = tempfile::tempdir().unwrap();
        let controller = controller_with(FakeBackend::ok(), &dir);

        let mut system = SystemSettings::default();
        system.log_retention_days = 90;
        controller.save_system_settings(system).await;

        controller.reset_settings().unwrap();
        assert_eq!(controller.settings(), Settings::default());
        assert!(!dir.path().join("settings.json").exists());
    }

    #[tokio::test]
    async fn test_navigate_unknown_section_is_ignored() {
        let dir = tempfile::tempdir().unwrap();
        let controller = controller_with(FakeBackend::ok(), &dir);

        controller.navigate_to(Section::Logs);
        assert_eq!(controller.navigate("nonexistent"), None);
        assert_eq!(controller.current_section(), Section::Logs);

        assert_eq!(controller.navigate("dashboard"), Some(Section::Dashboard));
        assert_eq!(controller.current_section(), Section::Dashboard);
    }

    #[tokio::test]
    async fn test_poll_tick_only_refreshes_active_dashboard() {
        let dir = tempfile::tempdir().unwrap();
        let controller = controller_with(FakeBackend::ok(), &dir);

        controller.navigate_to(Section::Logs);
        assert!(controller.poll_tick().is_none());

        controller.navigate_to(Section::Dashboard);
        let rendered = controller.poll_tick().unwrap();
        assert!(rendered.contains("Total pipelines"));
    }
}
