//! `libris` / `libris shell`: open the catalog and run the interactive menu.
//!
//! Responsibility: wire the JSON storage adapter to the library service and
//! hand stdin to the [`Shell`]. No catalog logic lives here.

use std::io;

use tracing::{info, instrument};

use libris_adapters::{JsonFileStorage, LocalFilesystem};
use libris_core::application::LibraryService;

use crate::{config::AppConfig, error::CliResult, output::OutputManager, shell::Shell};

/// Execute the interactive shell.
#[instrument(skip_all)]
pub fn execute(config: AppConfig, mut output: OutputManager) -> CliResult<()> {
    let books_path = config.storage.books_path();
    let users_path = config.storage.users_path();

    info!(
        books = %books_path.display(),
        users = %users_path.display(),
        locale = %config.ui.locale,
        "Opening catalog"
    );

    let storage = JsonFileStorage::new(Box::new(LocalFilesystem::new()), books_path, users_path);
    let mut library = LibraryService::open(Box::new(storage))?;

    let stdin = io::stdin();
    Shell::new(&mut library, stdin.lock(), &mut output, config.ui.locale).run()
}
