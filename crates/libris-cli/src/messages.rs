//! User-facing strings of the interactive menu, per locale.
//!
//! Templates use `{name}` placeholders filled in by [`fill`].

use std::fmt;

use serde::{Deserialize, Serialize};

/// Language of the interactive menu.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Ru,
}

impl Locale {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Ru => "ru",
        }
    }

    pub const fn messages(self) -> &'static Messages {
        match self {
            Self::En => &EN,
            Self::Ru => &RU,
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Message catalog for one locale.
#[derive(Debug)]
pub struct Messages {
    pub menu: &'static str,
    pub prompt_title: &'static str,
    pub prompt_author: &'static str,
    pub prompt_year: &'static str,
    pub prompt_user_name: &'static str,
    pub prompt_user_email: &'static str,
    pub prompt_remove_id: &'static str,
    /// `{title}`
    pub book_added: &'static str,
    /// `{id}`
    pub book_removed: &'static str,
    /// `{name}`
    pub user_added: &'static str,
    pub invalid_id: &'static str,
    pub no_books: &'static str,
    pub no_users: &'static str,
}

static EN: Messages = Messages {
    menu: "Choose an action: 1. Add book 2. Remove book 3. List books 4. Add user 5. List users 6. Exit",
    prompt_title: "Enter the book title: ",
    prompt_author: "Enter the author name: ",
    prompt_year: "Enter the publication year: ",
    prompt_user_name: "Enter the user name: ",
    prompt_user_email: "Enter the user email: ",
    prompt_remove_id: "Enter the ID of the book to remove: ",
    book_added: "Book '{title}' added.",
    book_removed: "Book with ID '{id}' removed.",
    user_added: "User '{name}' added.",
    invalid_id: "Invalid ID.",
    no_books: "No books in the library.",
    no_users: "No users in the system.",
};

static RU: Messages = Messages {
    menu: "Выберите действие: 1. Добавить книгу 2. Удалить книгу 3. Просмотреть книги 4. Добавить пользователя 5. Просмотреть пользователей 6. Выход",
    prompt_title: "Введите название книги: ",
    prompt_author: "Введите имя автора: ",
    prompt_year: "Введите год публикации: ",
    prompt_user_name: "Введите имя пользователя: ",
    prompt_user_email: "Введите почту пользователя: ",
    prompt_remove_id: "Введите ID книги для удаления: ",
    book_added: "Книга '{title}' добавлена.",
    book_removed: "Книга с ID '{id}' удалена.",
    user_added: "Пользователь '{name}' добавлен.",
    invalid_id: "Неверный ID.",
    no_books: "Нет книг в библиотеке.",
    no_users: "Нет пользователей в системе.",
};

/// Replace each `{key}` in `template` with its value.
pub fn fill(template: &str, values: &[(&str, &str)]) -> String {
    values
        .iter()
        .fold(template.to_owned(), |text, (key, value)| {
            text.replace(&format!("{{{key}}}"), value)
        })
}
