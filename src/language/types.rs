//! Types representing the values produced by parsing a CSV document

use serde::Serialize;
use std::fmt;

/// A parsed document: the rows in the order they appeared in the source.
#[derive(Eq, Debug, PartialEq, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct Document {
    pub rows: Vec<Row>,
}

impl Document {
    pub fn is_empty(&self) -> bool {
        self.rows
            .is_empty()
    }

    pub fn len(&self) -> usize {
        self.rows
            .len()
    }
}

/// A single record. Never empty; a row always has at least one field.
#[derive(Eq, Debug, PartialEq, Clone, Serialize)]
#[serde(transparent)]
pub struct Row {
    pub fields: Vec<Field>,
}

impl Row {
    /// Borrow the resolved values of each field, mostly for convenient
    /// comparison in tests and for the writer.
    pub fn values(&self) -> Vec<&str> {
        self.fields
            .iter()
            .map(Field::as_str)
            .collect()
    }
}

/// The fully resolved content of one field. Whether it was quoted in the
/// source or not is no longer relevant once escapes have been substituted.
#[derive(Eq, Debug, PartialEq, Clone, Serialize)]
#[serde(transparent)]
pub struct Field(pub String);

impl Field {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Field {
    fn from(value: &str) -> Self {
        Field(value.to_string())
    }
}

impl From<String> for Field {
    fn from(value: String) -> Self {
        Field(value)
    }
}
