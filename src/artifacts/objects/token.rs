//! Delimiter-terminated header tokens
//!
//! Object headers have no fixed-width fields: the kind ends at a space and the
//! length ends at a NUL byte. [`read_token`] reads one such field and reports
//! whether the delimiter was actually seen.

use std::io::{self, BufRead};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// The delimiter was found; it is consumed but not included.
    Delimited(Vec<u8>),
    /// The stream ended before the delimiter, with whatever was read so far.
    Eof(Vec<u8>),
}

/// Read bytes up to and including `delimiter`
pub fn read_token(reader: &mut impl BufRead, delimiter: u8) -> io::Result<Token> {
    let mut token = Vec::new();
    reader.read_until(delimiter, &mut token)?;

    match token.last() {
        Some(&last) if last == delimiter => {
            token.pop();
            Ok(Token::Delimited(token))
        }
        _ => Ok(Token::Eof(token)),
    }
}
