use std::fmt;

use crate::language::*;
use crate::parsing::escapes;

/// Parse the entire content into a Document, or return the error that
/// stopped the parse.
pub fn parse_document(content: &str) -> Result<Document, ParsingError> {
    let mut input = Parser::new();
    input.initialize(content);
    input.read_document()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsingError {
    UnterminatedQuote(usize),
    UnknownEscape(usize, Option<char>),
    EmptyUnquotedField(usize),
    TrailingSeparator(usize),
    TrailingInput(usize, char),
}

impl ParsingError {
    pub fn offset(&self) -> usize {
        match self {
            ParsingError::UnterminatedQuote(offset) => *offset,
            ParsingError::UnknownEscape(offset, _) => *offset,
            ParsingError::EmptyUnquotedField(offset) => *offset,
            ParsingError::TrailingSeparator(offset) => *offset,
            ParsingError::TrailingInput(offset, _) => *offset,
        }
    }

    pub fn message(&self) -> String {
        match self {
            ParsingError::UnterminatedQuote(_) => "unterminated quoted field".to_string(),
            ParsingError::UnknownEscape(_, Some(c)) => {
                format!("unknown escape sequence '\\{}'", c.escape_default())
            }
            ParsingError::UnknownEscape(_, None) => "incomplete escape sequence".to_string(),
            ParsingError::EmptyUnquotedField(_) => "empty field".to_string(),
            ParsingError::TrailingSeparator(_) => "trailing separator".to_string(),
            ParsingError::TrailingInput(_, c) => {
                format!("unexpected character '{}'", c.escape_default())
            }
        }
    }

    /// What the parser was looking for when it gave up.
    pub fn expected(&self) -> &'static str {
        match self {
            ParsingError::UnterminatedQuote(_) => "a closing quote",
            ParsingError::UnknownEscape(_, _) => "an escape character after '\\'",
            ParsingError::EmptyUnquotedField(_) => "a field",
            ParsingError::TrailingSeparator(_) => "a field after ','",
            ParsingError::TrailingInput(_, _) => "',' or the end of the line",
        }
    }

    pub fn details(&self) -> String {
        match self {
            ParsingError::UnterminatedQuote(_) => r#"
A field that begins with a quote must end with one. Quoted fields cannot
contain raw control characters such as newlines or tabs; write them with an
escape sequence like \n or \t instead. A literal quote inside a quoted field
is written either as \" or by doubling it as "".
            "#
            .trim_ascii()
            .to_string(),
            ParsingError::UnknownEscape(_, _) => {
                let valid = escapes::triggers()
                    .map(|c| format!("\\{}", c))
                    .collect::<Vec<_>>()
                    .join(" ");
                format!(
                    r#"
A backslash begins an escape sequence and must be followed by one of:

    {}
                    "#,
                    valid
                )
                .trim_ascii()
                .to_string()
            }
            ParsingError::EmptyUnquotedField(_) => r#"
Every field must have content. To write an empty field, quote it: "".
Blank lines between rows are not permitted.
            "#
            .trim_ascii()
            .to_string(),
            ParsingError::TrailingSeparator(_) => r#"
A comma separates two fields, so one must follow it on the same line. If the
last field of the row is meant to be empty, write it as "".
            "#
            .trim_ascii()
            .to_string(),
            ParsingError::TrailingInput(_, _) => r#"
After a field the row either continues with a comma and another field, or
ends with a newline. Content directly after a closing quote must be separated
from it by a comma.
            "#
            .trim_ascii()
            .to_string(),
        }
    }
}

impl fmt::Display for ParsingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, expected {}", self.message(), self.expected())
    }
}

impl std::error::Error for ParsingError {}

#[derive(Debug)]
pub struct Parser<'i> {
    source: &'i str,
    offset: usize,
}

impl<'i> Parser<'i> {
    pub fn new() -> Parser<'i> {
        Parser {
            source: "",
            offset: 0,
        }
    }

    pub fn initialize(&mut self, content: &'i str) {
        self.source = content;
        self.offset = 0;
    }

    /// Position of the parser as a byte offset into the original content.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// The content not yet consumed.
    pub fn remaining(&self) -> &'i str {
        self.source
    }

    fn advance(&mut self, width: usize) {
        // advance the parser position
        self.source = &self.source[width..];
        self.offset += width;
    }

    fn is_finished(&self) -> bool {
        self.source
            .is_empty()
    }

    fn peek_next_char(&self) -> Option<char> {
        self.source
            .chars()
            .next()
    }

    /// The character after the next one. Only called when the next
    /// character is known to be a single byte wide.
    fn peek_following_char(&self) -> Option<char> {
        self.source[1..]
            .chars()
            .next()
    }

    /// Width in bytes of the leading run of characters satisfying the
    /// predicate.
    fn measure_while<P>(&self, predicate: P) -> usize
    where
        P: Fn(char) -> bool,
    {
        self.source
            .char_indices()
            .find(|(_, c)| !predicate(*c))
            .map(|(i, _)| i)
            .unwrap_or(self.source.len())
    }

    /// Skip spaces and tabs; these are tolerated between a field and the
    /// comma or line ending that follows it.
    fn trim_blanks(&mut self) {
        let l = self.measure_while(|c| c == ' ' || c == '\t');
        self.advance(l);
    }

    fn is_line_ending(&self) -> bool {
        self.source == "\n" || self.source == "\r\n"
    }

    /// Parse zero or more rows through to the end of the input.
    pub fn read_document(&mut self) -> Result<Document, ParsingError> {
        let mut rows = Vec::new();

        loop {
            if self.is_finished() {
                break;
            }

            // a document consisting of a lone line ending has no rows
            if rows.is_empty() && self.is_line_ending() {
                self.advance(self.source.len());
                break;
            }

            let row = self.read_row()?;
            rows.push(row);

            self.require_boundary()?;
        }

        Ok(Document { rows })
    }

    /// Parse one or more fields separated by commas.
    pub fn read_row(&mut self) -> Result<Row, ParsingError> {
        let mut fields = vec![self.read_field()?];
        self.trim_blanks();

        while self.peek_next_char() == Some(',') {
            let comma = self.offset;
            self.advance(1);

            match self.peek_next_char() {
                None | Some('\n') | Some('\r') => {
                    return Err(ParsingError::TrailingSeparator(comma));
                }
                _ => {}
            }

            fields.push(self.read_field()?);
            self.trim_blanks();
        }

        Ok(Row { fields })
    }

    /// Parse a single field, choosing between quoted and unquoted forms by
    /// looking at the first character.
    pub fn read_field(&mut self) -> Result<Field, ParsingError> {
        match self.peek_next_char() {
            Some('"') => self.read_quoted_field(),
            _ => self.read_unquoted_field(),
        }
    }

    fn read_quoted_field(&mut self) -> Result<Field, ParsingError> {
        // opening quote
        self.advance(1);

        let mut value = String::new();

        loop {
            let c = match self.peek_next_char() {
                Some(c) => c,
                None => return Err(ParsingError::UnterminatedQuote(self.offset)),
            };

            match c {
                '"' => {
                    // a quote is only the terminator if another quote
                    // doesn't immediately follow it.
                    match self
                        .peek_following_char()
                        .and_then(escapes::doubled_quote)
                    {
                        Some(literal) => {
                            value.push(literal);
                            self.advance(2);
                        }
                        None => {
                            self.advance(1);
                            return Ok(Field(value));
                        }
                    }
                }
                '\\' => {
                    if self.source.len() == 1 {
                        self.advance(1);
                        return Err(ParsingError::UnterminatedQuote(self.offset));
                    }
                    value.push(self.read_escape()?);
                }
                c if c.is_ascii_control() => {
                    return Err(ParsingError::UnterminatedQuote(self.offset));
                }
                _ => {
                    let width = self.measure_while(is_quoted_char);
                    value.push_str(&self.source[..width]);
                    self.advance(width);
                }
            }
        }
    }

    fn read_unquoted_field(&mut self) -> Result<Field, ParsingError> {
        let start = self.offset;
        let mut value = String::new();

        loop {
            match self.peek_next_char() {
                Some('\\') => {
                    value.push(self.read_escape()?);
                }
                Some(c) if is_unquoted_char(c) => {
                    let width = self.measure_while(is_unquoted_char);
                    value.push_str(&self.source[..width]);
                    self.advance(width);
                }
                _ => break,
            }
        }

        if self.offset == start {
            return Err(ParsingError::EmptyUnquotedField(start));
        }

        Ok(Field(value))
    }

    /// Consume a backslash and the character following it, returning the
    /// character it stands for.
    fn read_escape(&mut self) -> Result<char, ParsingError> {
        let start = self.offset;

        let trigger = match self.peek_following_char() {
            Some(c) => c,
            None => return Err(ParsingError::UnknownEscape(start, None)),
        };

        match escapes::general(trigger) {
            Some(literal) => {
                self.advance(1 + trigger.len_utf8());
                Ok(literal)
            }
            None => Err(ParsingError::UnknownEscape(start, Some(trigger))),
        }
    }

    // because the last row of a file might omit its newline, reaching the
    // end of input is acceptable too.
    fn require_boundary(&mut self) -> Result<(), ParsingError> {
        if self.is_finished() {
            return Ok(());
        }

        if self
            .source
            .starts_with("\r\n")
        {
            self.advance(2);
            Ok(())
        } else if self
            .source
            .starts_with('\n')
        {
            self.advance(1);
            Ok(())
        } else {
            match self.peek_next_char() {
                Some(c) => Err(ParsingError::TrailingInput(self.offset, c)),
                None => Ok(()),
            }
        }
    }
}

impl<'i> Default for Parser<'i> {
    fn default() -> Self {
        Parser::new()
    }
}

fn is_quoted_char(c: char) -> bool {
    c != '"' && c != '\\' && !c.is_ascii_control()
}

fn is_unquoted_char(c: char) -> bool {
    c != ',' && c != '\\' && !c.is_ascii_control()
}
