//! A parser for a CSV dialect supporting quoted fields with escape sequences
//! alongside bare, unquoted fields.

pub mod error;
pub mod formatting;
pub mod language;
pub mod parsing;
