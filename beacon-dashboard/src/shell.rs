//! Interactive shell
//!
//! Stand-in for the original dashboard's navigation buttons and modal forms:
//! a section is rendered, then a menu of navigation entries plus the actions
//! that section offers. Forms are dialoguer prompts; the connection test
//! shows a spinner while its request is pending.

use anyhow::Result;
use colored::*;
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Confirm, Input, Select};
use indicatif::ProgressBar;
use std::sync::Arc;
use std::time::Duration;

use beacon_core::domain::settings::{
    DatabaseSettings, DatabaseType, SecuritySettings, SystemSettings,
};

use crate::backend::Backend;
use crate::controller::{DashboardController, JobForm, PipelineForm};
use crate::state::Section;

/// One selectable menu entry
enum MenuAction {
    Navigate(Section),
    NewPipeline,
    RunPipeline,
    ConfigurePipeline,
    DeletePipeline,
    NewJob,
    JobDetails,
    DeleteJob,
    ClearLogs,
    SaveDatabase,
    TestConnection,
    SaveSystem,
    SaveSecurity,
    GenerateKey,
    ResetSettings,
    Quit,
}

/// Runs the shell loop until the user quits
pub async fn run<B: Backend>(controller: Arc<DashboardController<B>>) -> Result<()> {
    let theme = ColorfulTheme::default();

    loop {
        println!("\n{}", controller.render_current());

        let (labels, actions) = menu_for(controller.current_section());
        let choice = Select::with_theme(&theme)
            .with_prompt("Action")
            .items(&labels)
            .default(0)
            .interact()?;

        match &actions[choice] {
            MenuAction::Navigate(section) => controller.navigate_to(*section),
            MenuAction::NewPipeline => new_pipeline(&controller, &theme).await?,
            MenuAction::RunPipeline => run_pipeline(&controller, &theme).await?,
            MenuAction::NewJob => new_job(&controller, &theme).await?,
            MenuAction::ConfigurePipeline
            | MenuAction::DeletePipeline
            | MenuAction::JobDetails
            | MenuAction::DeleteJob => {
                println!("{}", "Not implemented.".dimmed());
            }
            MenuAction::ClearLogs => controller.clear_logs(),
            MenuAction::SaveDatabase => save_database(&controller, &theme).await?,
            MenuAction::TestConnection => test_connection(&controller).await,
            MenuAction::SaveSystem => save_system(&controller, &theme).await?,
            MenuAction::SaveSecurity => save_security(&controller, &theme).await?,
            MenuAction::GenerateKey => {
                let key = controller.generate_api_key();
                println!("Generated API key: {}", key.cyan());
                println!("{}", "Save security settings to persist it.".dimmed());
            }
            MenuAction::ResetSettings => reset_settings(&controller, &theme)?,
            MenuAction::Quit => return Ok(()),
        }
    }
}

fn menu_for(section: Section) -> (Vec<String>, Vec<MenuAction>) {
    let mut labels = Vec::new();
    let mut actions = Vec::new();

    for target in Section::ALL {
        if target != section {
            labels.push(format!("Go to {}", target));
            actions.push(MenuAction::Navigate(target));
        }
    }

    match section {
        Section::Dashboard => {}
        Section::Pipelines => {
            labels.push("New pipeline".to_string());
            actions.push(MenuAction::NewPipeline);
            labels.push("Run pipeline".to_string());
            actions.push(MenuAction::RunPipeline);
            labels.push("Configure pipeline".to_string());
            actions.push(MenuAction::ConfigurePipeline);
            labels.push("Delete pipeline".to_string());
            actions.push(MenuAction::DeletePipeline);
        }
        Section::Jobs => {
            labels.push("New job".to_string());
            actions.push(MenuAction::NewJob);
            labels.push("View details".to_string());
            actions.push(MenuAction::JobDetails);
            labels.push("Delete job".to_string());
            actions.push(MenuAction::DeleteJob);
        }
        Section::Logs => {
            labels.push("Clear logs".to_string());
            actions.push(MenuAction::ClearLogs);
        }
        Section::Settings => {
            labels.push("Edit & save database settings".to_string());
            actions.push(MenuAction::SaveDatabase);
            labels.push("Test database connection".to_string());
            actions.push(MenuAction::TestConnection);
            labels.push("Edit & save system settings".to_string());
            actions.push(MenuAction::SaveSystem);
            labels.push("Edit & save security settings".to_string());
            actions.push(MenuAction::SaveSecurity);
            labels.push("Generate API key".to_string());
            actions.push(MenuAction::GenerateKey);
            labels.push("Reset settings".to_string());
            actions.push(MenuAction::ResetSettings);
        }
    }

    labels.push("Quit".to_string());
    actions.push(MenuAction::Quit);

    (labels, actions)
}

fn required(label: &'static str) -> impl FnMut(&String) -> Result<(), String> {
    move |input: &String| {
        if input.trim().is_empty() {
            Err(format!("{} is required", label))
        } else {
            Ok(())
        }
    }
}

async fn new_pipeline<B: Backend>(
    controller: &DashboardController<B>,
    theme: &ColorfulTheme,
) -> Result<()> {
    let id: String = Input::with_theme(theme)
        .with_prompt("Pipeline ID")
        .validate_with(required("Pipeline ID"))
        .interact_text()?;
    let name: String = Input::with_theme(theme)
        .with_prompt("Pipeline name")
        .validate_with(required("Pipeline name"))
        .interact_text()?;
    let description: String = Input::with_theme(theme)
        .with_prompt("Description")
        .allow_empty(true)
        .interact_text()?;

    if controller
        .create_pipeline(PipelineForm {
            id: id.clone(),
            name,
            description,
        })
        .await
    {
        println!("{}", format!("✓ Pipeline \"{}\" created", id).green());
    } else {
        println!("{}", "✗ Failed to create pipeline (see logs)".red());
    }
    Ok(())
}

async fn run_pipeline<B: Backend>(
    controller: &DashboardController<B>,
    theme: &ColorfulTheme,
) -> Result<()> {
    let ids = controller.pipeline_ids();
    if ids.is_empty() {
        println!("{}", "No pipelines to run.".yellow());
        return Ok(());
    }

    let choice = Select::with_theme(theme)
        .with_prompt("Pipeline")
        .items(&ids)
        .default(0)
        .interact()?;

    if controller.run_pipeline(&ids[choice]).await {
        println!("{}", format!("✓ Pipeline \"{}\" started", ids[choice]).green());
    } else {
        println!("{}", "✗ Failed to run pipeline (see logs)".red());
    }
    Ok(())
}

async fn new_job<B: Backend>(
    controller: &DashboardController<B>,
    theme: &ColorfulTheme,
) -> Result<()> {
    let ids = controller.pipeline_ids();
    if ids.is_empty() {
        println!("{}", "Create a pipeline first.".yellow());
        return Ok(());
    }

    let name: String = Input::with_theme(theme)
        .with_prompt("Job name")
        .validate_with(required("Job name"))
        .interact_text()?;
    let choice = Select::with_theme(theme)
        .with_prompt("Pipeline")
        .items(&ids)
        .default(0)
        .interact()?;

    // One command per line, like the original textarea; empty line finishes.
    let mut commands = String::new();
    loop {
        let line: String = Input::with_theme(theme)
            .with_prompt("Command (empty to finish)")
            .allow_empty(true)
            .interact_text()?;
        if line.trim().is_empty() {
            break;
        }
        commands.push_str(&line);
        commands.push('\n');
    }

    if controller
        .create_job(JobForm {
            name: name.clone(),
            pipeline_id: ids[choice].clone(),
            commands,
        })
        .await
    {
        println!("{}", format!("✓ Job \"{}\" created", name).green());
    } else {
        println!("{}", "✗ Failed to create job (see logs)".red());
    }
    Ok(())
}

async fn save_database<B: Backend>(
    controller: &DashboardController<B>,
    theme: &ColorfulTheme,
) -> Result<()> {
    let current = controller.settings().database;

    let types = [
        DatabaseType::Postgresql,
        DatabaseType::Mysql,
        DatabaseType::Sqlite,
        DatabaseType::Mongodb,
    ];
    let labels: Vec<&str> = types.iter().map(|t| t.as_str()).collect();
    let default_index = types.iter().position(|t| *t == current.db_type).unwrap_or(0);
    let choice = Select::with_theme(theme)
        .with_prompt("Database type")
        .items(&labels)
        .default(default_index)
        .interact()?;
    let db_type = types[choice];

    let host: String = Input::with_theme(theme)
        .with_prompt("Host")
        .default(current.host)
        .interact_text()?;

    // Changing the type re-defaults the port; sqlite has none.
    let port_default = db_type
        .default_port()
        .map(|p| p.to_string())
        .unwrap_or_default();
    let port_raw: String = Input::with_theme(theme)
        .with_prompt("Port")
        .default(port_default)
        .allow_empty(true)
        .interact_text()?;
    let port = port_raw.trim().parse::<u16>().ok();

    let name: String = Input::with_theme(theme)
        .with_prompt("Database name")
        .default(current.name)
        .allow_empty(true)
        .interact_text()?;
    let username: String = Input::with_theme(theme)
        .with_prompt("Username")
        .default(current.username)
        .allow_empty(true)
        .interact_text()?;
    let connection_string: String = Input::with_theme(theme)
        .with_prompt("Connection string")
        .default(current.connection_string)
        .allow_empty(true)
        .interact_text()?;

    let database = DatabaseSettings {
        db_type,
        host,
        port,
        name,
        username,
        connection_string,
    };

    if controller.save_database_settings(database).await {
        println!("{}", "✓ Database settings saved".green());
    } else {
        println!("{}", "✗ Failed to save database settings (see logs)".red());
    }
    Ok(())
}

async fn test_connection<B: Backend>(controller: &DashboardController<B>) {
    let spinner = ProgressBar::new_spinner();
    spinner.set_message("Testing database connection...");
    spinner.enable_steady_tick(Duration::from_millis(100));

    let result = controller.test_db_connection().await;

    spinner.finish_and_clear();
    if result.success {
        println!("{}", format!("✓ {}", result.message).green());
    } else {
        println!("{}", format!("✗ {}", result.message).red());
    }
    println!("Database status: {}", controller.db_status());
}

async fn save_system<B: Backend>(
    controller: &DashboardController<B>,
    theme: &ColorfulTheme,
) -> Result<()> {
    let current = controller.settings().system;

    let max_concurrent_jobs: u32 = Input::with_theme(theme)
        .with_prompt("Max concurrent jobs")
        .default(current.max_concurrent_jobs)
        .interact_text()?;
    let log_retention_days: u32 = Input::with_theme(theme)
        .with_prompt("Log retention days")
        .default(current.log_retention_days)
        .interact_text()?;
    let polling_interval: u64 = Input::with_theme(theme)
        .with_prompt("Polling interval (seconds)")
        .default(current.polling_interval)
        .interact_text()?;
    let enable_notifications = Confirm::with_theme(theme)
        .with_prompt("Enable notifications?")
        .default(current.enable_notifications)
        .interact()?;
    let auto_restart_failed = Confirm::with_theme(theme)
        .with_prompt("Auto-restart failed jobs?")
        .default(current.auto_restart_failed)
        .interact()?;

    let system = SystemSettings {
        max_concurrent_jobs,
        log_retention_days,
        polling_interval,
        enable_notifications,
        auto_restart_failed,
    };

    if controller.save_system_settings(system).await {
        println!("{}", "✓ System settings saved".green());
    } else {
        println!("{}", "✗ Failed to save system settings (see logs)".red());
    }
    Ok(())
}

async fn save_security<B: Backend>(
    controller: &DashboardController<B>,
    theme: &ColorfulTheme,
) -> Result<()> {
    let current = controller.settings().security;

    let api_key: String = Input::with_theme(theme)
        .with_prompt("API key")
        .default(current.api_key)
        .allow_empty(true)
        .interact_text()?;
    let session_timeout: u32 = Input::with_theme(theme)
        .with_prompt("Session timeout (minutes)")
        .default(current.session_timeout)
        .interact_text()?;
    let enable_ssl = Confirm::with_theme(theme)
        .with_prompt("Enable SSL?")
        .default(current.enable_ssl)
        .interact()?;

    let security = SecuritySettings {
        api_key,
        session_timeout,
        enable_ssl,
    };

    if controller.save_security_settings(security).await {
        println!("{}", "✓ Security settings saved".green());
    } else {
        println!("{}", "✗ Failed to save security settings (see logs)".red());
    }
    Ok(())
}

fn reset_settings<B: Backend>(
    controller: &DashboardController<B>,
    theme: &ColorfulTheme,
) -> Result<()> {
    let confirmed = Confirm::with_theme(theme)
        .with_prompt("Reset all settings to defaults?")
        .default(false)
        .interact()?;

    if confirmed {
        controller.reset_settings()?;
        println!("{}", "✓ Settings reset to defaults".green());
    }
    Ok(())
}
