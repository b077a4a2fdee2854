//! pystrap CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use pystrap::cli::commands::completions::CompletionsCommand;
use pystrap::cli::{resolve_project_root, Cli, Command, CommandDispatcher};
use pystrap::config::load_settings;
use pystrap::ui::{create_ui, OutputMode};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is WARN
///
/// Logs always go to stderr; stdout carries action results only.
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("pystrap=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("pystrap=warn"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    tracing::debug!("pystrap starting with args: {:?}", cli);

    let output_mode = if cli.quiet {
        OutputMode::Quiet
    } else if cli.verbose {
        OutputMode::Verbose
    } else {
        OutputMode::Normal
    };

    let mut ui = create_ui(output_mode, !cli.no_color);

    let action = match (cli.completions, cli.action) {
        (Some(shell), _) => {
            return match CompletionsCommand::new(shell).execute(ui.as_mut()) {
                Ok(result) => ExitCode::from(result.exit_code as u8),
                Err(e) => {
                    ui.error(&e.to_string());
                    ExitCode::from(1)
                }
            };
        }
        (None, Some(action)) => action,
        (None, None) => {
            ui.error("No action given. Run `pystrap --help` for the list of actions.");
            return ExitCode::from(2);
        }
    };

    // A settings file that fails to parse leaves only the flag to decide.
    let mut legacy_exit = cli.legacy_exit;
    let outcome = resolve_project_root(cli.project.as_deref()).and_then(|project_root| {
        let mut settings = load_settings(&project_root)?;
        if let Some(seconds) = cli.timeout {
            settings.command_timeout = (seconds > 0).then_some(seconds);
        }
        settings.legacy_exit |= cli.legacy_exit;
        legacy_exit = settings.legacy_exit;

        CommandDispatcher::new(project_root, settings).dispatch(action, ui.as_mut())
    });

    match outcome {
        Ok(result) => ExitCode::from(result.exit_code as u8),
        Err(e) if legacy_exit => {
            tracing::debug!("Reporting error on stdout: {}", e);
            ui.result(&e.to_string());
            ExitCode::SUCCESS
        }
        Err(e) => {
            ui.error(&e.to_string());
            ExitCode::from(1)
        }
    }
}
