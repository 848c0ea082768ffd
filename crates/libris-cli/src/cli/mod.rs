//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::GlobalArgs;

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "libris",
    bin_name = "libris",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{1f4da} Personal library catalog",
    long_about = "Libris keeps a small catalog of books and users in two JSON \
                  files and lets you manage it from an interactive menu.",
    after_help = "EXAMPLES:\n\
        \x20 libris                      # open the interactive menu\n\
        \x20 libris --data-dir ~/books   # keep books.json/users.json elsewhere\n\
        \x20 libris config list\n\
        \x20 libris completions bash > /usr/share/bash-completion/completions/libris",
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute; the interactive shell when omitted.
    #[command(subcommand)]
    pub command: Option<Commands>,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Open the interactive catalog menu (the default).
    #[command(visible_alias = "sh", about = "Open the interactive menu")]
    Shell,

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 libris completions bash > ~/.local/share/bash-completion/completions/libris\n\
            \x20 libris completions zsh  > ~/.zfunc/_libris\n\
            \x20 libris completions fish > ~/.config/fish/completions/libris.fish"
    )]
    Completions(CompletionsArgs),

    /// Manage the Libris configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 libris config get storage.data_dir\n\
            \x20 libris config list\n\
            \x20 libris config init"
    )]
    Config(ConfigCommands),
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `libris completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum)]
    pub shell: Shell,
}

/// Shells supported by `libris completions`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config ────────────────────────────────────────────────────────────────────

/// `libris config` subcommands.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print a single configuration value.
    Get {
        /// Dotted key, e.g. `storage.data_dir`.
        key: String,
    },

    /// Print the effective configuration as TOML.
    List,

    /// Print the default configuration file path.
    Path,

    /// Write a configuration file with the default values.
    Init {
        /// Overwrite an existing file.
        #[arg(short = 'f', long = "force")]
        force: bool,
    },
}

// ── tests ─────────────────────────────────────────────────────────────────────
