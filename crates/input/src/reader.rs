//! Line reader for the menu prompt.

use std::io::BufRead;

use tracing::trace;

use crate::map::{parse_menu_line, InputError};
use crate::types::MenuOption;

/// Reads one menu command per line.
pub struct MenuReader<R> {
    inner: R,
    buf: Vec<u8>,
}

impl<R: BufRead> MenuReader<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            buf: Vec::with_capacity(16),
        }
    }

    /// Read the next command.
    ///
    /// Returns `None` at end of input. Malformed or unknown entries come back
    /// as recoverable errors; the line has already been consumed. Bytes that
    /// are not valid UTF-8 decode lossily and so parse as malformed.
    pub fn next_option(&mut self) -> Option<Result<MenuOption, InputError>> {
        self.buf.clear();
        match self.inner.read_until(b'\n', &mut self.buf) {
            Ok(0) => None,
            Ok(_) => {
                let line = String::from_utf8_lossy(&self.buf);
                trace!(line = line.trim_end(), "read menu line");
                Some(parse_menu_line(&line))
            }
            Err(e) => Some(Err(InputError::from(e))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_reads_until_eof() {
        let mut reader = MenuReader::new(Cursor::new("1\nx\n7\n0\n"));

        assert_eq!(reader.next_option().unwrap().unwrap(), MenuOption::Play);
        assert!(matches!(
            reader.next_option(),
            Some(Err(InputError::Malformed(_)))
        ));
        assert!(matches!(
            reader.next_option(),
            Some(Err(InputError::UnknownOption(7)))
        ));
        assert_eq!(reader.next_option().unwrap().unwrap(), MenuOption::Quit);
        assert!(reader.next_option().is_none());
    }

    #[test]
    fn test_last_line_without_newline() {
        let mut reader = MenuReader::new(Cursor::new("2"));
        assert_eq!(reader.next_option().unwrap().unwrap(), MenuOption::Reserve);
        assert!(reader.next_option().is_none());
    }

    #[test]
    fn test_invalid_utf8_line_is_malformed() {
        let mut reader = MenuReader::new(Cursor::new(b"\xff\xfe\n1\n".to_vec()));

        match reader.next_option() {
            Some(Err(e @ InputError::Malformed(_))) => assert!(e.is_recoverable()),
            other => panic!("expected malformed input, got {:?}", other),
        }
        assert_eq!(reader.next_option().unwrap().unwrap(), MenuOption::Play);
        assert!(reader.next_option().is_none());
    }
}
