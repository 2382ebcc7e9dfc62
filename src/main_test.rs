use clap::CommandFactory;

use super::*;

struct CannedSource(&'static str);

#[async_trait::async_trait]
impl ConfigSource for CannedSource {
    async fn fetch_system_configuration(&self) -> Result<SystemConfiguration, ConfigError> {
        SystemConfiguration::from_json(self.0)
    }
}

#[test]
fn cli_definition_is_consistent() {
    Cli::command().debug_assert();
}

#[test]
fn density_parses_as_its_own_command() {
    let cli = Cli::try_parse_from(["assistant-config", "density", "compact"]).unwrap();
    assert!(matches!(cli.command, Command::Density { density: Density::Compact }));
}

#[test]
fn unknown_density_is_rejected() {
    assert!(Cli::try_parse_from(["assistant-config", "density", "roomy"]).is_err());
}

#[test]
fn lookup_commands_parse_as_config_commands() {
    let cli = Cli::try_parse_from([
        "assistant-config",
        "--base-url",
        "http://127.0.0.1:9",
        "display-name",
        "dev",
        "--mode",
        "debug_mode",
    ])
    .unwrap();
    assert_eq!(cli.base_url, "http://127.0.0.1:9");
    assert!(matches!(
        cli.command,
        Command::Config(ConfigCommand::DisplayName { ref role, mode: Some(ref mode) }) if role == "dev" && mode == "debug_mode"
    ));

    let cli = Cli::try_parse_from(["assistant-config", "show"]).unwrap();
    assert!(matches!(cli.command, Command::Config(ConfigCommand::Show)));
}

#[tokio::test]
async fn run_config_succeeds_with_valid_source() {
    let source = CannedSource(r#"{"roles": {"dev": {"display_name": "Developer"}}, "settings": {}}"#);
    assert!(run_config(&source, ConfigCommand::Modes { role: "dev".into() }).await.is_ok());
}

#[tokio::test]
async fn run_config_surfaces_validation_errors() {
    let source = CannedSource(r#"{"roles": {}}"#);
    let err = run_config(&source, ConfigCommand::Show).await.unwrap_err();
    assert!(matches!(err, CliError::Config(ConfigError::Validation(_))));
}
