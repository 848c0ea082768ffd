//! The interactive catalog menu.
//!
//! One state (waiting at the menu) and six transitions. The shell reads
//! from any [`BufRead`] and writes through an [`OutputManager`], so tests
//! drive it with in-memory buffers.
//!
//! End of input behaves like choosing "Exit".

use std::io::BufRead;

use tracing::{debug, instrument, trace};

use libris_core::{
    application::LibraryService,
    domain::{Book, EntityId, User, parse_year},
};

use crate::{
    error::{CliError, CliResult, IntoCli},
    messages::{Locale, Messages, fill},
    output::OutputManager,
};

/// A menu entry, chosen by typing its number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    AddBook,
    RemoveBook,
    ListBooks,
    AddUser,
    ListUsers,
    Exit,
}

impl MenuChoice {
    /// Anything other than `1`..`6` is `None`.
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(Self::AddBook),
            "2" => Some(Self::RemoveBook),
            "3" => Some(Self::ListBooks),
            "4" => Some(Self::AddUser),
            "5" => Some(Self::ListUsers),
            "6" => Some(Self::Exit),
            _ => None,
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

/// Interactive session over a [`LibraryService`].
pub struct Shell<'a, R> {
    library: &'a mut LibraryService,
    input: R,
    output: &'a mut OutputManager,
    messages: &'static Messages,
}

impl<'a, R: BufRead> Shell<'a, R> {
    pub fn new(
        library: &'a mut LibraryService,
        input: R,
        output: &'a mut OutputManager,
        locale: Locale,
    ) -> Self {
        Self {
            library,
            input,
            output,
            messages: locale.messages(),
        }
    }

    /// Loop until the user exits or input ends.
    ///
    /// A malformed year and any persistence failure end the session with an
    /// error.
    #[instrument(skip_all)]
    pub fn run(&mut self) -> CliResult<()> {
        loop {
            self.output.print(self.messages.menu)?;

            let Some(line) = self.read_line()? else {
                debug!("Input closed");
                return Ok(());
            };

            let Some(choice) = MenuChoice::parse(&line) else {
                trace!(input = %line, "Unrecognised menu input");
                continue;
            };

            debug!(?choice, "Menu choice");
            if self.dispatch(choice)? == Flow::Exit {
                return Ok(());
            }
        }
    }

    fn dispatch(&mut self, choice: MenuChoice) -> CliResult<Flow> {
        match choice {
            MenuChoice::AddBook => self.add_book(),
            MenuChoice::RemoveBook => self.remove_book(),
            MenuChoice::ListBooks => self.list_books(),
            MenuChoice::AddUser => self.add_user(),
            MenuChoice::ListUsers => self.list_users(),
            MenuChoice::Exit => Ok(Flow::Exit),
        }
    }

    // ── Actions ──────────────────────────────────────────────────────────────

    fn add_book(&mut self) -> CliResult<Flow> {
        let Some(title) = self.ask(self.messages.prompt_title)? else {
            return Ok(Flow::Exit);
        };
        let Some(author) = self.ask(self.messages.prompt_author)? else {
            return Ok(Flow::Exit);
        };
        let Some(year) = self.ask(self.messages.prompt_year)? else {
            return Ok(Flow::Exit);
        };

        let year = parse_year(&year).map_err(|e| CliError::InvalidInput {
            message: e.to_string(),
            source: Some(Box::new(e)),
        })?;

        let id = self.library.next_book_id()?;
        let book = Book::new(id, title, author, year);
        let confirmation = fill(self.messages.book_added, &[("title", book.title.as_str())]);

        self.library.add_book(book)?;
        self.output.success(&confirmation)?;
        Ok(Flow::Continue)
    }

    fn remove_book(&mut self) -> CliResult<Flow> {
        let Some(input) = self.ask(self.messages.prompt_remove_id)? else {
            return Ok(Flow::Exit);
        };

        let id: EntityId = match input.parse() {
            Ok(id) => id,
            Err(e) => {
                debug!(error = %e, "Remove aborted");
                self.output.error(self.messages.invalid_id)?;
                return Ok(Flow::Continue);
            }
        };

        // Confirmed whether or not anything matched.
        self.library.remove_book(id)?;
        let id = id.to_string();
        self.output
            .success(&fill(self.messages.book_removed, &[("id", id.as_str())]))?;
        Ok(Flow::Continue)
    }

    fn list_books(&mut self) -> CliResult<Flow> {
        let books = self.library.books();
        if books.is_empty() {
            self.output.print(self.messages.no_books)?;
            return Ok(Flow::Continue);
        }

        for book in books {
            self.output.print(&book.to_string())?;
        }
        Ok(Flow::Continue)
    }

    fn add_user(&mut self) -> CliResult<Flow> {
        let Some(name) = self.ask(self.messages.prompt_user_name)? else {
            return Ok(Flow::Exit);
        };
        let Some(email) = self.ask(self.messages.prompt_user_email)? else {
            return Ok(Flow::Exit);
        };

        let id = self.library.next_user_id()?;
        let user = User::new(id, name, email);
        let confirmation = fill(self.messages.user_added, &[("name", user.name.as_str())]);

        self.library.add_user(user)?;
        self.output.success(&confirmation)?;
        Ok(Flow::Continue)
    }

    fn list_users(&mut self) -> CliResult<Flow> {
        let users = self.library.users();
        if users.is_empty() {
            self.output.print(self.messages.no_users)?;
            return Ok(Flow::Continue);
        }

        for user in users {
            self.output.print(&user.to_string())?;
        }
        Ok(Flow::Continue)
    }

    // ── Input ────────────────────────────────────────────────────────────────

    fn ask(&mut self, prompt: &str) -> CliResult<Option<String>> {
        self.output.prompt(prompt)?;
        self.read_line()
    }

    /// Next line without its terminator; `None` at end of input.
    fn read_line(&mut self) -> CliResult<Option<String>> {
        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .with_cli_context(|| "Failed to read from standard input")?;

        if read == 0 {
            return Ok(None);
        }

        Ok(Some(line.trim_end_matches(['\r', '\n']).to_owned()))
    }
}
