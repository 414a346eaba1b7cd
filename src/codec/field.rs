//! Field-level codec
//!
//! Turns one raw substring into a typed value according to its declared
//! kind, and stores it into a record through the schema's setter table.

use chrono::NaiveDate;

use crate::error::CodecError;

/// Symbolic date tokens usable in schemas, mapped to chrono patterns.
static PATTERN_ALIASES: &[(&str, &str)] = &[
    ("yyyymmdd", "%Y%m%d"),
    ("yyyy-mm-dd", "%Y-%m-%d"),
    ("yymmdd", "%y%m%d"),
    ("yy-mm-dd", "%y-%m-%d"),
    ("ddmmyyyy", "%d%m%Y"),
    ("dd-mm-yyyy", "%d-%m-%Y"),
];

/// Resolve a symbolic date token to its chrono pattern
pub(crate) fn resolve_pattern(token: &str) -> Result<&'static str, CodecError> {
    PATTERN_ALIASES
        .iter()
        .find(|(alias, _)| *alias == token)
        .map(|(_, pattern)| *pattern)
        .ok_or_else(|| CodecError::MissingPattern(token.to_string()))
}

/// Declared kind of a field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum FieldKind {
    /// Signed integer of `bits` width, `len` characters wide when positional
    Integer { bits: u8, len: usize },
    /// Raw text, `len` characters wide when positional
    Text { len: usize },
    /// Date read through a symbolic token. The positional width is the
    /// token's own length, not the resolved pattern's.
    Date { token: &'static str },
}

impl FieldKind {
    /// Number of characters the field occupies in a positional line
    pub(crate) fn width(self) -> usize {
        match self {
            FieldKind::Integer { len, .. } | FieldKind::Text { len } => len,
            FieldKind::Date { token } => token.chars().count(),
        }
    }
}

/// A decoded field value
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Value {
    Int(i64),
    Text(String),
    Date(NaiveDate),
}

impl Value {
    fn type_name(&self) -> &'static str {
        match self {
            Value::Int(_) => "integer",
            Value::Text(_) => "text",
            Value::Date(_) => "date",
        }
    }
}

/// Typed setter storing a decoded value into a record
pub(crate) enum Assign<T> {
    Int(fn(&mut T, i64)),
    Text(fn(&mut T, String)),
    Date(fn(&mut T, NaiveDate)),
}

impl<T> Assign<T> {
    fn type_name(&self) -> &'static str {
        match self {
            Assign::Int(_) => "integer",
            Assign::Text(_) => "text",
            Assign::Date(_) => "date",
        }
    }
}

/// One entry of a record schema
pub(crate) struct FieldSpec<T> {
    pub(crate) name: &'static str,
    pub(crate) kind: FieldKind,
    pub(crate) assign: Assign<T>,
}

impl<T> FieldSpec<T> {
    pub(crate) const fn int(
        name: &'static str,
        bits: u8,
        len: usize,
        set: fn(&mut T, i64),
    ) -> Self {
        FieldSpec {
            name,
            kind: FieldKind::Integer { bits, len },
            assign: Assign::Int(set),
        }
    }

    pub(crate) const fn text(name: &'static str, len: usize, set: fn(&mut T, String)) -> Self {
        FieldSpec {
            name,
            kind: FieldKind::Text { len },
            assign: Assign::Text(set),
        }
    }

    pub(crate) const fn date(
        name: &'static str,
        token: &'static str,
        set: fn(&mut T, NaiveDate),
    ) -> Self {
        FieldSpec {
            name,
            kind: FieldKind::Date { token },
            assign: Assign::Date(set),
        }
    }

    /// Decode `raw` and store it into `record`
    pub(crate) fn apply(&self, record: &mut T, raw: &str) -> Result<(), CodecError> {
        let value = decode_value(raw, self.kind)?;
        match (&self.assign, value) {
            (Assign::Int(set), Value::Int(v)) => set(record, v),
            (Assign::Text(set), Value::Text(v)) => set(record, v),
            (Assign::Date(set), Value::Date(v)) => set(record, v),
            (assign, value) => {
                return Err(CodecError::UnsupportedType(format!(
                    "{} value into {} setter",
                    value.type_name(),
                    assign.type_name()
                )));
            }
        }
        Ok(())
    }
}

/// Convert one raw substring into a typed value
pub(crate) fn decode_value(raw: &str, kind: FieldKind) -> Result<Value, CodecError> {
    match kind {
        FieldKind::Integer { bits, .. } => decode_integer(raw, bits).map(Value::Int),
        FieldKind::Text { .. } => Ok(Value::Text(raw.to_string())),
        FieldKind::Date { token } => decode_date(raw, token).map(Value::Date),
    }
}

fn decode_integer(raw: &str, bits: u8) -> Result<i64, CodecError> {
    if !matches!(bits, 8 | 16 | 32 | 64) {
        return Err(CodecError::UnsupportedType(format!("i{bits}")));
    }
    let numeric = || CodecError::NumericFormat {
        raw: raw.to_string(),
        bits,
    };
    let value: i64 = raw.parse().map_err(|_| numeric())?;
    let fits = match bits {
        8 => i8::try_from(value).is_ok(),
        16 => i16::try_from(value).is_ok(),
        32 => i32::try_from(value).is_ok(),
        _ => true,
    };
    if fits { Ok(value) } else { Err(numeric()) }
}

fn decode_date(raw: &str, token: &str) -> Result<NaiveDate, CodecError> {
    let pattern = resolve_pattern(token)?;
    let mismatch = |source| CodecError::DateFormat {
        raw: raw.to_string(),
        token: token.to_string(),
        source,
    };
    // chrono tolerates padding and one-digit fields; the token's shape does not.
    if !matches_token_shape(raw, token) {
        return Err(mismatch(None));
    }
    NaiveDate::parse_from_str(raw, pattern).map_err(|e| mismatch(Some(e)))
}

/// Every letter of `token` is a digit in `raw`, every other char is literal
fn matches_token_shape(raw: &str, token: &str) -> bool {
    raw.chars().count() == token.chars().count()
        && raw.chars().zip(token.chars()).all(|(r, t)| {
            if t.is_ascii_alphabetic() {
                r.is_ascii_digit()
            } else {
                r == t
            }
        })
}
