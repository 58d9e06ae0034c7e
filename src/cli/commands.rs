//! Command dispatch

use std::io;

use clap::CommandFactory;
use clap_complete::generate;
use itertools::Itertools;
use tracing::{debug, instrument};

use crate::cli::args::{Cli, Commands};
use crate::cli::output;
use crate::cli::shell::Shell;
use crate::cli::CliResult;
use crate::config::Settings;
use crate::domain::{Carrier, STATIONS};
use crate::infrastructure::ServiceContainer;

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    match &cli.command {
        None | Some(Commands::Shell) => _shell(cli),
        Some(Commands::Stations) => _stations(),
        Some(Commands::Carriers) => _carriers(),
        Some(Commands::Config { template }) => _config(cli, *template),
        Some(Commands::Completion { shell }) => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            generate(*shell, &mut cmd, name, &mut io::stdout());
            Ok(())
        }
    }
}

fn load_settings(cli: &Cli) -> CliResult<Settings> {
    let settings = Settings::load(cli.config.as_deref())?.with_seed(cli.seed);
    debug!("settings: {settings:?}");
    Ok(settings)
}

#[instrument(skip(cli))]
fn _shell(cli: &Cli) -> CliResult<()> {
    let settings = load_settings(cli)?;
    let mut container = ServiceContainer::new(settings);
    let default_station = container.settings.default_station.clone();

    let stdin = io::stdin();
    Shell::new(&mut container.store, default_station, stdin.lock()).run()
}

fn _stations() -> CliResult<()> {
    output::header("Stations");
    for (idx, name) in STATIONS.iter().enumerate() {
        output::detail(&format!("{}. {}", idx + 1, name));
    }
    Ok(())
}

fn _carriers() -> CliResult<()> {
    output::header("Carriers");
    for carrier in Carrier::all() {
        output::field(carrier.code(), carrier.display_name());
    }
    output::info(&format!("codes: {}", Carrier::all().map(Carrier::code).join(", ")));
    Ok(())
}

fn _config(cli: &Cli, template: bool) -> CliResult<()> {
    if template {
        output::info(&Settings::template());
        return Ok(());
    }
    let settings = load_settings(cli)?;
    output::info(&settings.to_toml()?);
    Ok(())
}
