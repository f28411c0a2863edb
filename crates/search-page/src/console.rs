use crate::controller::SearchPageController;
use std::num::ParseIntError;

#[derive(Debug, thiserror::Error)]
pub enum ConsoleError {
    #[error("Unknown command: {0}")]
    UnknownCommand(String),
    #[error("Invalid page number: {0}")]
    InvalidPage(#[from] ParseIntError),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// One line of console input.
#[derive(Debug, PartialEq, Eq)]
pub enum Command {
    Search(String),
    Clear,
    Next,
    Previous,
    Submit,
    Page(u32),
    Quit,
}

pub fn parse_command(line: &str) -> Result<Command, ConsoleError> {
    let line = line.trim_end_matches(['\r', '\n']);

    let Some(command) = line.strip_prefix(':') else {
        return Ok(Command::Search(line.to_string()));
    };

    let mut parts = command.split_whitespace();
    match (parts.next(), parts.next()) {
        (Some("next"), None) => Ok(Command::Next),
        (Some("prev"), None) => Ok(Command::Previous),
        (Some("submit"), None) => Ok(Command::Submit),
        (Some("clear"), None) => Ok(Command::Clear),
        (Some("quit"), None) => Ok(Command::Quit),
        (Some("page"), Some(page)) => Ok(Command::Page(page.parse()?)),
        _ => Err(ConsoleError::UnknownCommand(line.to_string())),
    }
}

/// Applies a command to the controller. Returns false once the console should exit.
pub fn apply_command(controller: &SearchPageController, command: Command) -> bool {
    match command {
        Command::Search(text) => controller.set_query_text(text),
        Command::Clear => controller.set_query_text(""),
        Command::Next => controller.go_next(),
        Command::Previous => controller.go_previous(),
        Command::Submit => controller.submit(),
        Command::Page(page) => controller.set_page(page),
        Command::Quit => return false,
    }

    true
}
