use anyhow::anyhow;
use clap::Parser;
use location_picker::cli::{Cli, Command};
use location_picker::commands;
use location_picker::geo::{GeoLookupService, IbgeClient};
use location_picker::logging::{default_log_file, init_tracing, LogTarget};
use location_picker::ui;
use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = cli.resolve_config()?;
    let command = cli.command();

    let target = match command {
        Command::Pick => LogTarget::File(
            config
                .logging
                .file
                .clone()
                .unwrap_or_else(default_log_file),
        ),
        Command::States | Command::Municipalities { .. } => LogTarget::Stderr,
    };
    init_tracing(&config.logging.level, target)
        .map_err(|e| anyhow!("Failed to initialize logging: {}", e))?;

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .map_err(|e| anyhow!("Failed to start async runtime: {}", e))?;
    let client = IbgeClient::new(&config.service)?;
    tracing::info!(base_url = %client.base_url(), "Using geography service");

    match command {
        Command::Pick => {
            let label = client.base_url().to_string();
            let service: Arc<dyn GeoLookupService> = Arc::new(client);
            ui::run(
                runtime.handle(),
                service,
                &label,
                Duration::from_millis(config.ui.tick_rate_ms),
            )?;
        }
        Command::States => {
            let states = runtime.block_on(commands::list_states(&client))?;
            print!("{}", commands::format_states(&states));
        }
        Command::Municipalities { code } => {
            let municipalities = runtime.block_on(commands::list_municipalities(&client, &code))?;
            print!("{}", commands::format_municipalities(&municipalities));
        }
    }

    Ok(())
}
