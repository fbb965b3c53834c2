//! Object header parsing
//!
//! A decompressed loose object starts with `<kind> <size>\0`. Neither field
//! has a fixed width, so both are read as delimiter-terminated tokens:
//!
//! 1. kind: up to the first space, must be a known [`ObjectType`]
//! 2. size: up to the first NUL, canonical base-10 without sign or padding

use crate::artifacts::objects::error::{ObjectError, ObjectResult, Stage};
use crate::artifacts::objects::object_type::ObjectType;
use crate::artifacts::objects::token::{Token, read_token};
use derive_new::new;
use std::io::BufRead;

#[derive(Debug, Clone, Copy, PartialEq, Eq, new)]
pub struct ObjectHeader {
    object_type: ObjectType,
    size: u64,
}

impl ObjectHeader {
    pub fn object_type(&self) -> ObjectType {
        self.object_type
    }

    /// Declared payload length in bytes
    pub fn size(&self) -> u64 {
        self.size
    }

    /// Read and validate the header, leaving `reader` at the first payload byte
    pub fn read_from(reader: &mut impl BufRead) -> ObjectResult<Self> {
        let kind = match read_token(reader, b' ')
            .map_err(|e| ObjectError::from_read(Stage::ParseKind, e))?
        {
            Token::Delimited(kind) => kind,
            Token::Eof(_) => {
                return Err(ObjectError::UnexpectedEof {
                    stage: Stage::ParseKind,
                    delimiter: ' ',
                });
            }
        };
        let object_type = ObjectType::try_from(kind.as_slice())?;

        let size = match read_token(reader, b'\0')
            .map_err(|e| ObjectError::from_read(Stage::ParseLength, e))?
        {
            Token::Delimited(size) => parse_size(&size)?,
            Token::Eof(_) => {
                return Err(ObjectError::UnexpectedEof {
                    stage: Stage::ParseLength,
                    delimiter: '\0',
                });
            }
        };

        Ok(Self::new(object_type, size))
    }
}

fn parse_size(token: &[u8]) -> ObjectResult<u64> {
    let malformed = || ObjectError::MalformedLength(String::from_utf8_lossy(token).into_owned());

    // "0" is the only size allowed to start with a zero
    let canonical = !token.is_empty()
        && token.iter().all(u8::is_ascii_digit)
        && (token.len() == 1 || token[0] != b'0');
    if !canonical {
        return Err(malformed());
    }

    std::str::from_utf8(token)
        .ok()
        .and_then(|size| size.parse::<u64>().ok())
        .ok_or_else(malformed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Cursor, Read};

    fn parse(raw: &[u8]) -> ObjectResult<ObjectHeader> {
        ObjectHeader::read_from(&mut Cursor::new(raw.to_vec()))
    }

    #[test]
    fn reads_blob_header_and_stops_at_payload() {
        let mut reader = Cursor::new(b"blob 5\0hello".to_vec());
        let header = ObjectHeader::read_from(&mut reader).unwrap();

        assert_eq!(header, ObjectHeader::new(ObjectType::Blob, 5));

        let mut payload = Vec::new();
        reader.read_to_end(&mut payload).unwrap();
        assert_eq!(payload, b"hello");
    }

    #[test]
    fn zero_size_is_valid() {
        assert_eq!(parse(b"blob 0\0").unwrap().size(), 0);
    }

    #[test]
    fn large_sizes_are_accepted() {
        assert_eq!(
            parse(b"blob 18446744073709551615\0").unwrap().size(),
            u64::MAX
        );
    }

    #[test]
    fn missing_space_is_unexpected_eof() {
        assert!(matches!(
            parse(b"blob"),
            Err(ObjectError::UnexpectedEof {
                stage: Stage::ParseKind,
                delimiter: ' '
            })
        ));
    }

    #[test]
    fn empty_stream_is_unexpected_eof() {
        assert!(matches!(
            parse(b""),
            Err(ObjectError::UnexpectedEof {
                stage: Stage::ParseKind,
                ..
            })
        ));
    }

    #[test]
    fn missing_nul_is_unexpected_eof() {
        assert!(matches!(
            parse(b"blob 5hello"),
            Err(ObjectError::UnexpectedEof {
                stage: Stage::ParseLength,
                delimiter: '\0'
            })
        ));
    }

    #[test]
    fn tree_kind_is_unsupported() {
        assert!(matches!(
            parse(b"tree 5\0hello"),
            Err(ObjectError::UnsupportedType(kind)) if kind == "tree"
        ));
    }

    #[test]
    fn kind_is_checked_before_length() {
        assert!(matches!(
            parse(b"tree -1\0"),
            Err(ObjectError::UnsupportedType(_))
        ));
    }

    #[test]
    fn non_canonical_lengths_are_malformed() {
        let tokens: [&[u8]; 10] = [
            b"07",
            b"-1",
            b"+1",
            b"",
            b" 5",
            b"5 ",
            b"5\n",
            b"0x10",
            b"1e3",
            b"18446744073709551616",
        ];

        for token in tokens {
            let mut raw = b"blob ".to_vec();
            raw.extend_from_slice(token);
            raw.push(b'\0');

            assert!(
                matches!(parse(&raw), Err(ObjectError::MalformedLength(_))),
                "length token {:?} should be rejected",
                String::from_utf8_lossy(token)
            );
        }
    }

    #[test]
    fn malformed_length_keeps_the_token() {
        assert!(matches!(
            parse(b"blob 07\0"),
            Err(ObjectError::MalformedLength(token)) if token == "07"
        ));
    }
}
