use assistant_config::config::lookup;
use assistant_config::config::{ApiEndpoint, ConfigError, ConfigSource, HttpConfigClient, SystemConfiguration};
use assistant_config::util::{Density, DensityToggle, DocumentRoot};
use clap::{Parser, Subcommand};
use serde_json::Value;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("invalid JSON payload: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

#[derive(Parser, Debug)]
#[command(name = "assistant-config", about = "Inspect the assistant roster configuration")]
struct Cli {
    /// Base URL of the API; empty targets the same origin.
    #[arg(long, env = "API_BASE_URL", default_value = "")]
    base_url: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    #[command(flatten)]
    Config(ConfigCommand),
    /// Apply a display density to a document root and print its tag.
    Density { density: Density },
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Print the validated configuration.
    Show,
    /// List the modes of a role.
    Modes { role: String },
    /// Print a role's display name, optionally for a mode.
    DisplayName {
        role: String,
        #[arg(long)]
        mode: Option<String>,
    },
    /// Print a mode's description.
    Describe { role: String, mode: String },
    /// Print a mode's icon identifier.
    Icon { role: String, mode: String },
    /// Print a mode's quick actions as JSON.
    QuickActions { role: String, mode: String },
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let cli = Cli::parse();
    match cli.command {
        Command::Config(command) => {
            let client = HttpConfigClient::new(ApiEndpoint::new(cli.base_url))?;
            run_config(&client, command).await
        }
        Command::Density { density } => {
            run_density(density);
            Ok(())
        }
    }
}

async fn run_config(source: &dyn ConfigSource, command: ConfigCommand) -> Result<(), CliError> {
    let config = load(source).await?;

    match command {
        ConfigCommand::Show => print_json(&serde_json::to_value(&config)?)?,
        ConfigCommand::Modes { role } => {
            for mode in lookup::get_modes_for_role(&config, &role) {
                println!("{mode}");
            }
        }
        ConfigCommand::DisplayName { role, mode } => {
            println!("{}", lookup::get_display_name(&config, &role, mode.as_deref()));
        }
        ConfigCommand::Describe { role, mode } => println!("{}", lookup::get_mode_description(&config, &role, &mode)),
        ConfigCommand::Icon { role, mode } => println!("{}", lookup::get_mode_icon(&config, &role, &mode)),
        ConfigCommand::QuickActions { role, mode } => {
            let actions = lookup::get_quick_actions(&config, &role, &mode);
            print_json(&serde_json::to_value(actions)?)?;
        }
    }
    Ok(())
}

async fn load(source: &dyn ConfigSource) -> Result<SystemConfiguration, ConfigError> {
    match source.fetch_system_configuration().await {
        Ok(config) => Ok(config),
        Err(e) => {
            tracing::error!(error = %e, code = e.error_code(), "configuration unavailable");
            Err(e)
        }
    }
}

fn run_density(density: Density) {
    let mut toggle = DensityToggle::new(DocumentRoot::new());
    toggle.trigger(density);
    println!("{}", toggle.into_inner().render_open_tag());
}

fn print_json(value: &Value) -> Result<(), CliError> {
    let rendered = serde_json::to_string_pretty(value)?;
    println!("{rendered}");
    Ok(())
}

#[cfg(test)]
#[path = "main_test.rs"]
mod tests;
