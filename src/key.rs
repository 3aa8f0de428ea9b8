use std::cmp::Ordering;
use std::str::FromStr;

use anyhow::anyhow;
use chrono::NaiveDate;

use crate::field::Field;
use crate::field_type::FieldType;
use crate::tokenizer::{is_quoted, QUOTE};

/// A field value converted for comparison.
///
/// `Invalid` stands for a value that could not be converted to the field's type and orders after
/// every valid key.
#[derive(Clone, Debug)]
pub(crate) enum Key {
    String {
        s: String
    },
    Integer {
        i: i64
    },
    Number {
        n: f64
    },
    Date {
        d: NaiveDate
    },
    Invalid,
}

impl Key {
    pub(crate) fn new(field: &str, field_def: &Field) -> Result<Key, anyhow::Error> {
        match field_def.field_type() {
            FieldType::String => {
                let mut key = unquote(field).to_string();
                if field_def.ignore_blanks() {
                    key = key.trim().to_string();
                }

                if field_def.ignore_case() {
                    key = key.to_uppercase()
                }

                Ok(
                    Key::String {
                        s: key
                    }
                )
            }
            FieldType::Integer => {
                let value = strip(field, field_def.strip_chars());
                let key = parse_integer(&value)?;
                Ok(
                    Key::Integer {
                        i: key
                    }
                )
            }
            FieldType::Number => {
                let value = strip(field, field_def.strip_chars());
                let key = f64::from_str(&value)?;
                if key.is_nan() {
                    return Err(anyhow!("NaN is not comparable"));
                }
                Ok(
                    Key::Number {
                        n: key
                    }
                )
            }
            FieldType::Date => {
                let value = unquote(field.trim()).trim();
                let key = NaiveDate::parse_from_str(value, field_def.date_format())
                    .map_err(|e| anyhow!("{e}, expected format: {}", field_def.date_format()))?;
                Ok(
                    Key::Date {
                        d: key
                    }
                )
            }
        }
    }

    pub(crate) fn is_invalid(&self) -> bool {
        matches!(self, Key::Invalid)
    }

    fn rank(&self) -> u8 {
        match self {
            Key::String { .. } => 0,
            Key::Integer { .. } => 1,
            Key::Number { .. } => 2,
            Key::Date { .. } => 3,
            Key::Invalid => 4,
        }
    }
}

fn unquote(field: &str) -> &str {
    if is_quoted(field) {
        &field[QUOTE.len_utf8()..field.len() - QUOTE.len_utf8()]
    } else {
        field
    }
}

fn strip(field: &str, strip_chars: &str) -> String {
    unquote(field.trim())
        .chars()
        .filter(|c| !strip_chars.contains(*c))
        .collect::<String>()
        .trim()
        .to_string()
}

/// Parse an integer, accepting trailing garbage after a leading run of digits, as in `12kg`.
fn parse_integer(value: &str) -> Result<i64, anyhow::Error> {
    if let Ok(i) = i64::from_str(value) {
        return Ok(i);
    }
    let sign = value.starts_with(['-', '+']) as usize;
    let digits = value[sign..]
        .char_indices()
        .find(|(_, c)| !c.is_ascii_digit())
        .map(|(i, _)| i + sign)
        .unwrap_or(value.len());
    if digits == sign {
        return Err(anyhow!("invalid digit found in string: {value}"));
    }
    Ok(i64::from_str(&value[..digits])?)
}

impl Eq for Key {}

impl PartialEq<Self> for Key {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl PartialOrd<Self> for Key {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Key {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Key::Invalid, Key::Invalid) => Ordering::Equal,
            (Key::Invalid, _) => Ordering::Greater,
            (_, Key::Invalid) => Ordering::Less,
            (Key::String { s }, Key::String { s: other }) => s.cmp(other),
            (Key::Integer { i }, Key::Integer { i: other }) => i.cmp(other),
            (Key::Number { n }, Key::Number { n: other }) => n.total_cmp(other),
            (Key::Date { d }, Key::Date { d: other }) => d.cmp(other),
            _ => self.rank().cmp(&other.rank()),
        }
    }
}
