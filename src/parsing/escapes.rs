//! Escape sequences recognized inside fields

/// Characters that may follow a backslash, and what they stand for.
const GENERAL: &[(char, char)] = &[
    ('"', '"'),
    ('\'', '\''),
    ('\\', '\\'),
    ('/', '/'),
    ('b', '\u{0008}'),
    ('f', '\u{000C}'),
    ('n', '\n'),
    ('r', '\r'),
    ('t', '\t'),
];

/// Inside a quoted field a quote may also be escaped by doubling it.
const DOUBLED_QUOTE: &[(char, char)] = &[('"', '"')];

fn lookup(table: &[(char, char)], trigger: char) -> Option<char> {
    table
        .iter()
        .find(|(key, _)| *key == trigger)
        .map(|(_, value)| *value)
}

/// Resolve the character following a backslash.
pub fn general(trigger: char) -> Option<char> {
    lookup(GENERAL, trigger)
}

/// Resolve the character following a quote inside a quoted field.
pub fn doubled_quote(trigger: char) -> Option<char> {
    lookup(DOUBLED_QUOTE, trigger)
}

/// The trigger that, after a backslash, would produce the given literal.
pub fn trigger_for(literal: char) -> Option<char> {
    GENERAL
        .iter()
        .find(|(_, value)| *value == literal)
        .map(|(key, _)| *key)
}

/// All the characters valid after a backslash, in table order.
pub fn triggers() -> impl Iterator<Item = char> {
    GENERAL
        .iter()
        .map(|(key, _)| *key)
}
