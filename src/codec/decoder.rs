//! Schema-driven line decoder
//!
//! Walks a record schema over one header line, either by fixed character
//! widths or by comma-separated columns, and builds the record atomically:
//! the first failing field aborts the decode and nothing is returned.

use crate::error::{CodecError, DecodeError};

use super::field::{FieldKind, FieldSpec};

/// How a line is cut into raw field substrings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Strategy {
    /// Fixed character widths, consumed left to right
    Positional,
    /// One comma-separated column per field
    Delimited,
}

/// A fully populated record and how much of the line it consumed
/// (characters for positional lines, columns for delimited ones).
#[derive(Debug)]
pub(crate) struct Decoded<T> {
    pub(crate) record: T,
    pub(crate) consumed: usize,
}

enum Cursor<'a> {
    Positional { rest: &'a str, offset: usize },
    Delimited { columns: Vec<&'a str>, index: usize },
}

impl<'a> Cursor<'a> {
    fn new(strategy: Strategy, line: &'a str) -> Self {
        match strategy {
            Strategy::Positional => Cursor::Positional {
                rest: line,
                offset: 0,
            },
            Strategy::Delimited => Cursor::Delimited {
                columns: line.split(',').collect(),
                index: 0,
            },
        }
    }

    fn next(&mut self, kind: FieldKind) -> Result<&'a str, CodecError> {
        match self {
            Cursor::Positional { rest, offset } => {
                let width = kind.width();
                let (raw, tail) = split_chars(*rest, width).ok_or(CodecError::UnexpectedEnd)?;
                *rest = tail;
                *offset += width;
                Ok(raw)
            }
            Cursor::Delimited { columns, index } => {
                let raw = *columns.get(*index).ok_or(CodecError::UnexpectedEnd)?;
                *index += 1;
                Ok(raw)
            }
        }
    }

    fn consumed(&self) -> usize {
        match self {
            Cursor::Positional { offset, .. } => *offset,
            Cursor::Delimited { index, .. } => *index,
        }
    }
}

/// Split after `n` characters, or `None` when fewer remain
fn split_chars(s: &str, n: usize) -> Option<(&str, &str)> {
    let end = s
        .char_indices()
        .map(|(i, _)| i)
        .chain(std::iter::once(s.len()))
        .nth(n)?;
    Some(s.split_at(end))
}

/// Decode `line` into a fresh record following `schema`.
///
/// Trailing characters (or columns) beyond the last field are ignored.
pub(crate) fn decode<T: Default>(
    schema: &[FieldSpec<T>],
    strategy: Strategy,
    line: &str,
) -> Result<Decoded<T>, DecodeError> {
    let mut record = T::default();
    let mut cursor = Cursor::new(strategy, line);
    for field in schema {
        cursor
            .next(field.kind)
            .and_then(|raw| field.apply(&mut record, raw))
            .map_err(|source| DecodeError {
                field: field.name,
                source,
            })?;
    }
    Ok(Decoded {
        record,
        consumed: cursor.consumed(),
    })
}
