use crate::config::AppConfig;
use crate::errors::{AppError, AppResult};
use crate::gateway::{IneClient, StatisticsGateway};
use crate::server;
use crate::service::DemographicsService;
use clap::{Arg, ArgAction, ArgMatches, Command};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

// CLI metadata constants
const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
const APP_AUTHOR: &str = env!("CARGO_PKG_AUTHORS");
const APP_ABOUT: &str = env!("CARGO_PKG_DESCRIPTION");

fn config_arg() -> Arg<'static> {
    Arg::new("config")
        .short('c')
        .long("config")
        .help("Path to a TOML configuration file")
        .value_parser(clap::value_parser!(PathBuf))
        .action(ArgAction::Set)
}

/// Builds the command-line definition.
///
/// - `serve`: run the HTTP API (`GET /api/demographics?municipality=...`)
/// - `lookup`: resolve one municipality and print the JSON response
pub fn build_command() -> Command<'static> {
    Command::new("ine-demographics")
        .version(APP_VERSION)
        .author(APP_AUTHOR)
        .about(APP_ABOUT)
        .subcommand(
            Command::new("serve")
                .about("Serve the demographics API over HTTP")
                .after_help("Example:\n  ine-demographics serve --bind 0.0.0.0:5328")
                .arg(config_arg())
                .arg(
                    Arg::new("bind")
                        .short('b')
                        .long("bind")
                        .help("Address to listen on, overrides the config file")
                        .action(ArgAction::Set),
                ),
        )
        .subcommand(
            Command::new("lookup")
                .about("Look up one municipality and print the JSON response")
                .arg(config_arg())
                .arg(
                    Arg::new("municipality")
                        .help("Free-text municipality name, e.g. 'Madrid'")
                        .required(true)
                        .action(ArgAction::Set),
                ),
        )
}

/// Parses command-line arguments and runs the selected subcommand.
///
/// Without a subcommand the help text is printed.
///
/// # Errors
///
/// Returns an error if the configuration is invalid, the gateway client cannot
/// be built, or the server cannot bind its address. Lookups themselves never fail.
pub async fn cli() -> AppResult<()> {
    let cmd = build_command();
    let mut cmd_for_help = cmd.clone();
    let matches = cmd.get_matches();

    match matches.subcommand() {
        Some(("serve", sub)) => {
            let mut config = load_config(sub)?;
            if let Some(bind) = sub.get_one::<String>("bind") {
                config.bind_address = bind.clone();
            }
            let addr = config.socket_addr()?;
            let service = build_service(&config)?;
            info!(
                table_id = %config.table_id,
                base_url = %config.base_url,
                "Starting demographics API"
            );
            server::serve(addr, service).await?;
        }
        Some(("lookup", sub)) => {
            let config = load_config(sub)?;
            let query = sub.get_one::<String>("municipality").map(String::as_str);
            let service = build_service(&config)?;
            let response = service.lookup(query).await;
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
        _ => {
            cmd_for_help
                .print_help()
                .map_err(|e| AppError::IoError(format!("Failed to print help: {e}")))?;
        }
    }

    Ok(())
}

fn load_config(sub: &ArgMatches) -> AppResult<AppConfig> {
    match sub.get_one::<PathBuf>("config") {
        Some(path) => {
            info!(path = %path.display(), "Loading configuration");
            AppConfig::from_toml_file(path)
        }
        None => Ok(AppConfig::default()),
    }
}

/// Constructs the gateway once and wires it into both pipeline stages.
fn build_service(config: &AppConfig) -> AppResult<Arc<DemographicsService>> {
    let gateway: Arc<dyn StatisticsGateway> = Arc::new(IneClient::new(config)?);
    Ok(Arc::new(DemographicsService::new(gateway, config)))
}
