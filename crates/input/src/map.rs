//! Mapping from typed menu lines to menu options.

use derive_more::{Display, Error};

use crate::types::MenuOption;

/// Why a line could not be turned into a menu option.
#[derive(Debug, Display, Error)]
pub enum InputError {
    /// The line was not a number.
    #[display("invalid input: {_0:?}")]
    Malformed(#[error(not(source))] String),

    /// A number that no menu entry carries.
    #[display("invalid option: {_0}")]
    UnknownOption(#[error(not(source))] i64),

    /// Reading from the input stream failed.
    #[display("failed to read input: {_0}")]
    Io(std::io::Error),
}

impl From<std::io::Error> for InputError {
    fn from(err: std::io::Error) -> Self {
        InputError::Io(err)
    }
}

impl InputError {
    /// Whether the prompt should simply be shown again.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, InputError::Io(_))
    }
}

/// Map one line of text to a menu option.
///
/// Surrounding whitespace is ignored. Only the first whitespace-separated
/// token is considered, matching a `%d` read at the prompt.
pub fn parse_menu_line(line: &str) -> Result<MenuOption, InputError> {
    let token = line.split_whitespace().next().unwrap_or("");
    let code: i64 = token
        .parse()
        .map_err(|_| InputError::Malformed(line.trim().to_string()))?;

    u8::try_from(code)
        .ok()
        .and_then(MenuOption::from_code)
        .ok_or(InputError::UnknownOption(code))
}
