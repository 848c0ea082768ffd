//! Output management and formatting.

use std::io::{self, IsTerminal, Write};

use console::Term;
use owo_colors::OwoColorize;

use crate::cli::global::GlobalArgs;
use crate::config::AppConfig;

/// Writes everything the user sees on stdout.
///
/// Plain lines (menu, listings) go out verbatim; status lines get a symbol
/// and, when colour is enabled, a colour.
pub struct OutputManager {
    quiet: bool,
    no_color: bool,
    writer: Box<dyn Write>,
}

impl OutputManager {
    /// Build an `OutputManager` on stdout from parsed CLI flags and config.
    ///
    /// Colour is only used when stdout is a terminal.
    pub fn new(args: &GlobalArgs, config: &AppConfig) -> Self {
        let no_color = args.no_color || config.output.no_color || !io::stdout().is_terminal();
        Self::with_writer(Box::new(Term::stdout()), args.quiet, no_color)
    }

    /// Build an `OutputManager` on an arbitrary writer.
    pub fn with_writer(writer: Box<dyn Write>, quiet: bool, no_color: bool) -> Self {
        Self {
            quiet,
            no_color,
            writer,
        }
    }

    // ── Public write methods ───────────────────────────────────────────────

    /// Plain line. Never suppressed: menus and listings are the product.
    pub fn print(&mut self, msg: &str) -> io::Result<()> {
        writeln!(self.writer, "{msg}")?;
        self.writer.flush()
    }

    /// Prompt without a trailing newline, flushed so it shows before input.
    pub fn prompt(&mut self, msg: &str) -> io::Result<()> {
        write!(self.writer, "{msg}")?;
        self.writer.flush()
    }

    /// Success indicator: `✓ <msg>`.
    pub fn success(&mut self, msg: &str) -> io::Result<()> {
        let line = if self.no_color {
            format!("\u{2713} {msg}") // ✓
        } else {
            format!("{} {}", "\u{2713}".green().bold(), msg.green())
        };
        self.print(&line)
    }

    /// Error indicator: `✗ <msg>`.
    pub fn error(&mut self, msg: &str) -> io::Result<()> {
        let line = if self.no_color {
            format!("\u{2717} {msg}") // ✗
        } else {
            format!("{} {}", "\u{2717}".red().bold(), msg.red())
        };
        self.print(&line)
    }

    /// Informational indicator: `ℹ <msg>`.  Suppressed in quiet mode.
    pub fn info(&mut self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            format!("\u{2139} {msg}") // ℹ
        } else {
            format!("{} {}", "\u{2139}".blue().bold(), msg.blue())
        };
        self.print(&line)
    }

    /// Bold cyan header line.  Suppressed in quiet mode.
    pub fn header(&mut self, text: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            text.to_owned()
        } else {
            text.cyan().bold().to_string()
        };
        self.print(&line)
    }
}


// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::test_support::SharedBuffer;
    use super::*;

    fn make_manager(quiet: bool, no_color: bool) -> (OutputManager, SharedBuffer) {
        let buffer = SharedBuffer::default();
        let out = OutputManager::with_writer(Box::new(buffer.clone()), quiet, no_color);
        (out, buffer)
    }

    #[test]
    fn print_is_verbatim_even_when_quiet() {
        let (mut out, buffer) = make_manager(true, true);
        out.print("1: Dune - Herbert (1965)").unwrap();
        assert_eq!(buffer.contents(), "1: Dune - Herbert (1965)\n");
    }

    #[test]
    fn prompt_has_no_newline() {
        let (mut out, buffer) = make_manager(false, true);
        out.prompt("Enter the book title: ").unwrap();
        assert_eq!(buffer.contents(), "Enter the book title: ");
    }

    #[test]
    fn plain_status_lines_use_symbols() {
        let (mut out, buffer) = make_manager(false, true);
        out.success("saved").unwrap();
        out.error("failed").unwrap();
        assert_eq!(buffer.contents(), "\u{2713} saved\n\u{2717} failed\n");
    }

    #[test]
    fn quiet_suppresses_info_and_header() {
        let (mut out, buffer) = make_manager(true, true);
        out.info("loaded").unwrap();
        out.header("Catalog").unwrap();
        assert!(buffer.contents().is_empty());
    }

    #[test]
    fn colored_success_contains_ansi() {
        let (mut out, buffer) = make_manager(false, false);
        out.success("saved").unwrap();
        assert!(buffer.contents().contains('\u{1b}'));
    }
}
