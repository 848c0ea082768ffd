//! # Libris CLI
//!
//! Personal library catalog with an interactive menu.
//!
//! ## Startup sequence
//!
//! 1. Parse CLI arguments (clap handles `--help` / `--version` early-exit).
//! 2. Initialise the tracing subscriber (logging, on stderr).
//! 3. Load configuration (defaults + file + env + flags).
//! 4. Build the [`OutputManager`].
//! 5. Dispatch to the appropriate command handler (the shell by default).
//! 6. Translate any [`CliError`] into a user-facing message and exit code.
//!
//! ## Exit codes
//!
//! | Code | Meaning                                  |
//! |------|------------------------------------------|
//! |  0   | Success / "Exit" chosen / input closed   |
//! |  1   | Internal error (storage, corrupt file)   |
//! |  2   | User / input error                       |
//! |  4   | Configuration error                      |

use std::process::ExitCode;

use clap::Parser;
use tracing::{debug, info, instrument};

use crate::{
    cli::{Cli, Commands, ConfigCommands},
    config::AppConfig,
    error::{CliError, CliResult},
    logging::init_logging,
    output::OutputManager,
};

mod cli;
mod commands;
mod config;
mod error;
mod logging;
mod messages;
mod output;
mod shell;

fn main() -> ExitCode {
    // Load .env before anything else, including tracing init.
    // A missing .env is not an error.
    let _ = dotenvy::dotenv();

    // ── 1. Parse arguments ────────────────────────────────────────────────
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // --help / --version also arrive here and must exit 0.
            let code = if e.use_stderr() { 2 } else { 0 };
            let _ = e.print();
            return ExitCode::from(code);
        }
    };

    // ── 2. Initialise tracing ─────────────────────────────────────────────
    if let Err(e) = init_logging(&cli.global) {
        eprintln!("Failed to initialise logging: {e}");
        return ExitCode::from(1);
    }

    debug!(
        verbose = cli.global.verbose,
        quiet = cli.global.quiet,
        no_color = cli.global.no_color,
        "CLI started"
    );

    // ── 3. Load configuration ─────────────────────────────────────────────
    let config = match load_config(&cli) {
        Ok(cfg) => cfg,
        Err(e) => return handle_error(e, cli.global.verbose > 0),
    };

    // ── 4. Build output manager ───────────────────────────────────────────
    let output = OutputManager::new(&cli.global, &config);

    // ── 5. Dispatch + 6. Error handling ──────────────────────────────────
    let verbose = cli.global.verbose > 0;
    match run(cli, config, output) {
        Ok(()) => {
            info!("Libris finished");
            ExitCode::SUCCESS
        }
        Err(e) => handle_error(e, verbose),
    }
}

/// Load configuration and apply flag overrides.
///
/// `config init` and `config path` must work before any file exists, so
/// they start from the defaults.
fn load_config(cli: &Cli) -> CliResult<AppConfig> {
    let mut config = match &cli.command {
        Some(Commands::Config(ConfigCommands::Init { .. } | ConfigCommands::Path)) => {
            AppConfig::default()
        }
        _ => AppConfig::load(cli.global.config.as_ref()).map_err(|e| CliError::ConfigError {
            message: format!("{e:#}"),
            source: Some(e.into()),
        })?,
    };

    config.apply_overrides(&cli.global);
    Ok(config)
}

/// Dispatch to the correct command handler.
#[instrument(skip_all)]
fn run(cli: Cli, config: AppConfig, output: OutputManager) -> CliResult<()> {
    match cli.command {
        None | Some(Commands::Shell) => commands::shell::execute(config, output),
        Some(Commands::Completions(cmd)) => commands::completions::execute(cmd),
        Some(Commands::Config(cmd)) => commands::config::execute(cmd, cli.global, config, output),
    }
}

/// Translate a `CliError` into a user message and an appropriate exit code.
///
/// This is the single place where structured errors become human-readable
/// output and OS exit codes.
fn handle_error(err: CliError, verbose: bool) -> ExitCode {
    err.log();

    // stderr, so the message appears even when stdout is redirected.
    let msg = if std::io::IsTerminal::is_terminal(&std::io::stderr()) {
        err.format_colored(verbose)
    } else {
        err.format_plain(verbose)
    };
    eprint!("{msg}");

    ExitCode::from(err.exit_code())
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_structure_is_valid() {
        // Clap's internal consistency check: catches missing values, conflicts, etc.
        Cli::command().debug_assert();
    }

    #[test]
    fn cli_version_matches_cargo() {
        let cmd = Cli::command();
        assert_eq!(cmd.get_version(), Some(env!("CARGO_PKG_VERSION")));
    }

    #[test]
    fn config_init_skips_file_loading() {
        let cli = Cli::parse_from([
            "libris",
            "--config",
            "/definitely/not/here.toml",
            "config",
            "init",
        ]);
        assert!(load_config(&cli).is_ok());
    }

    #[test]
    fn missing_explicit_config_is_configuration_error() {
        let cli = Cli::parse_from(["libris", "--config", "/definitely/not/here.toml"]);
        let err = load_config(&cli).unwrap_err();
        assert_eq!(err.exit_code(), 4);
    }

    #[test]
    fn data_dir_flag_reaches_config() {
        let cli = Cli::parse_from(["libris", "config", "path", "--data-dir", "/srv/books"]);
        let cfg = load_config(&cli).unwrap();
        assert_eq!(cfg.storage.data_dir, std::path::PathBuf::from("/srv/books"));
    }
}
