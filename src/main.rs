use clap::Parser;

use mathkit::cli::commands::{eval, init, list, menu};
use mathkit::cli::{Cli, Commands};
use mathkit::config::Settings;
use mathkit::io::ExitCode;
use mathkit::logging;

fn main() {
    let cli = Cli::parse();

    let config = load_settings(&cli).unwrap_or_else(|e| {
        eprintln!("Configuration error: {e}");
        eprintln!("Using default configuration.");
        Settings::default()
    });

    logging::init_with_config(&config.logging);

    let exit = match cli.command.unwrap_or(Commands::Menu) {
        Commands::Menu => match menu::run_menu(&config) {
            Ok(()) => ExitCode::Success,
            Err(e) => {
                eprintln!("Error: {e}");
                ExitCode::GeneralError
            }
        },
        Commands::Eval {
            operation,
            args,
            json,
        } => eval::run_eval(&operation, &args, json),
        Commands::List { json } => list::run_list(json),
        Commands::Init { force } => init::run_init(force),
        Commands::Config => init::run_config(&config),
    };

    if exit != ExitCode::Success {
        exit.exit();
    }
}

fn load_settings(cli: &Cli) -> Result<Settings, figment::Error> {
    match &cli.config {
        Some(path) => Settings::load_from(path),
        None => Settings::load(),
    }
}
