//! Whitespace-separated token reader.

use std::collections::VecDeque;
use std::io::BufRead;
use std::str::FromStr;

use super::InputError;

/// Reads whitespace-separated tokens from a buffered reader, a line at a time.
///
/// Lines are only pulled from the reader when the buffered tokens run out,
/// so the same reader can be shared between network construction and an
/// interactive session that follows it.
pub struct TokenReader<R> {
    reader: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> TokenReader<R> {
    /// Wrap a reader.
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            pending: VecDeque::new(),
        }
    }

    /// Next token, or `None` at end of input.
    pub fn next_token(&mut self) -> std::io::Result<Option<String>> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(Some(token));
            }

            let mut line = String::new();
            if self.reader.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            self.pending
                .extend(line.split_whitespace().map(str::to_string));
        }
    }

    /// Next token; running out of input is an error naming what was expected.
    pub fn expect_token(&mut self, expected: &'static str) -> Result<String, InputError> {
        self.next_token()?
            .ok_or(InputError::UnexpectedEof { expected })
    }

    /// Next token parsed as a number.
    pub fn expect_number<T: FromStr>(&mut self, expected: &'static str) -> Result<T, InputError> {
        let token = self.expect_token(expected)?;
        token
            .parse()
            .map_err(|_| InputError::InvalidNumber {
                expected,
                found: token,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn splits_across_lines_and_spaces() {
        let mut tokens = TokenReader::new(Cursor::new("  a b\n\n\tc  \nd"));
        let mut all = Vec::new();
        while let Some(t) = tokens.next_token().unwrap() {
            all.push(t);
        }
        assert_eq!(all, vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn expect_token_at_end() {
        let mut tokens = TokenReader::new(Cursor::new(""));
        assert!(matches!(
            tokens.expect_token("station"),
            Err(InputError::UnexpectedEof {
                expected: "station"
            })
        ));
    }

    #[test]
    fn expect_number() {
        let mut tokens = TokenReader::new(Cursor::new("42 x -1"));
        assert_eq!(tokens.expect_number::<u32>("fare").unwrap(), 42);

        match tokens.expect_number::<u32>("fare") {
            Err(InputError::InvalidNumber { expected, found }) => {
                assert_eq!(expected, "fare");
                assert_eq!(found, "x");
            }
            other => panic!("unexpected {other:?}"),
        }

        assert!(matches!(
            tokens.expect_number::<usize>("count"),
            Err(InputError::InvalidNumber { .. })
        ));
    }
}
