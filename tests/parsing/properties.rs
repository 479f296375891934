#[cfg(test)]
mod properties {
    use csvdialect::parsing::escapes;
    use csvdialect::parsing::parser::parse_document;
    use proptest::prelude::*;

    /// Write a value as a quoted field, escaping whatever needs it.
    fn quote(value: &str) -> String {
        let mut result = String::from('"');
        for c in value.chars() {
            match c {
                '"' => result.push_str("\"\""),
                '\\' => result.push_str("\\\\"),
                c if c.is_ascii_control() => {
                    let trigger = escapes::trigger_for(c).expect("representable control character");
                    result.push('\\');
                    result.push(trigger);
                }
                c => result.push(c),
            }
        }
        result.push('"');
        result
    }

    /// Write a value as an unquoted field using backslash escapes.
    fn escape(value: &str) -> String {
        let mut result = String::new();
        for c in value.chars() {
            match c {
                ',' => result.push_str("\\,"),
                '\\' => result.push_str("\\\\"),
                c if c.is_ascii_control() => {
                    let trigger = escapes::trigger_for(c).expect("representable control character");
                    result.push('\\');
                    result.push(trigger);
                }
                c => result.push(c),
            }
        }
        result
    }

    fn content_char() -> impl Strategy<Value = char> {
        prop_oneof![
            8 => prop::char::range(' ', '~'),
            1 => prop::sample::select(vec!['\n', '\t', '\r', '\u{0008}', '\u{000C}']),
            1 => prop::sample::select(vec!['é', 'ß', '日', '→']),
        ]
    }

    fn content() -> impl Strategy<Value = String> {
        prop::collection::vec(content_char(), 0..24).prop_map(|chars| {
            chars
                .into_iter()
                .collect()
        })
    }

    /// Values that can be written unquoted: non-empty and not starting with
    /// a quote or whitespace.
    fn bare_content() -> impl Strategy<Value = String> {
        (prop::char::range('a', 'z'), content()).prop_map(|(first, rest)| {
            let mut value = String::new();
            value.push(first);
            value.push_str(&rest);
            value
        })
    }

    proptest! {
        #[test]
        fn quoted_round_trip(value in content()) {
            let document = parse_document(&quote(&value)).unwrap();
            prop_assert_eq!(document.len(), 1);
            prop_assert_eq!(document.rows[0].values(), vec![value.as_str()]);
        }

        #[test]
        fn unquoted_round_trip(value in bare_content()) {
            let document = parse_document(&escape(&value)).unwrap();
            prop_assert_eq!(document.len(), 1);
            prop_assert_eq!(document.rows[0].values(), vec![value.as_str()]);
        }

        #[test]
        fn field_count_is_commas_plus_one(values in prop::collection::vec(content(), 1..8)) {
            let line = values
                .iter()
                .map(|value| quote(value))
                .collect::<Vec<_>>()
                .join(",");

            let document = parse_document(&line).unwrap();
            prop_assert_eq!(document.len(), 1);

            let row = &document.rows[0];
            prop_assert_eq!(row.fields.len(), values.len());
            prop_assert_eq!(
                row.values(),
                values
                    .iter()
                    .map(String::as_str)
                    .collect::<Vec<_>>()
            );
        }

        #[test]
        fn one_row_per_line(lines in prop::collection::vec(prop::collection::vec(bare_content(), 1..4), 0..6)) {
            let content = lines
                .iter()
                .map(|fields| {
                    fields
                        .iter()
                        .map(|value| escape(value))
                        .collect::<Vec<_>>()
                        .join(",")
                })
                .collect::<Vec<_>>()
                .join("\n");

            let document = parse_document(&content).unwrap();
            prop_assert_eq!(document.len(), lines.len());
        }
    }
}
