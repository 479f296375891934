#[cfg(test)]
mod syntax {
    use std::path::Path;

    use csvdialect::parsing;
    use csvdialect::parsing::parser::{parse_document, ParsingError};

    /// Helper function to check if parsing produces exactly the expected
    /// error
    fn expect_error(content: &str, expected: ParsingError) {
        let result = parse_document(content);
        match result {
            Ok(document) => panic!(
                "Expected parsing to fail, but it succeeded with {:?} for input: {}",
                document, content
            ),
            Err(error) => {
                if error != expected {
                    panic!(
                        "Expected error {:?} but got: {:?} for input '{}'",
                        expected, error, content
                    );
                }
            }
        }
    }

    #[test]
    fn unterminated_at_end_of_input() {
        expect_error(r#""abc"#, ParsingError::UnterminatedQuote(4));
        expect_error(r#"a,"b"#, ParsingError::UnterminatedQuote(4));
        expect_error(r#"""#, ParsingError::UnterminatedQuote(1));
    }

    #[test]
    fn unterminated_at_newline() {
        expect_error(
            r#"
a,"b
c"
            "#
            .trim_ascii(),
            ParsingError::UnterminatedQuote(4),
        );
    }

    #[test]
    fn unterminated_after_doubled_quote() {
        expect_error(r#""abc"""#, ParsingError::UnterminatedQuote(6));
    }

    #[test]
    fn unknown_escape_quoted() {
        expect_error(r#""a\qb""#, ParsingError::UnknownEscape(2, Some('q')));
        expect_error(r#""\u0041""#, ParsingError::UnknownEscape(1, Some('u')));
    }

    #[test]
    fn unknown_escape_unquoted() {
        expect_error(r"a,b\x", ParsingError::UnknownEscape(3, Some('x')));
        expect_error(r"a,b\", ParsingError::UnknownEscape(3, None));
        expect_error("a\\\nb", ParsingError::UnknownEscape(1, Some('\n')));
    }

    #[test]
    fn empty_unquoted_field() {
        expect_error(",a", ParsingError::EmptyUnquotedField(0));
        expect_error("a,,b", ParsingError::EmptyUnquotedField(2));
        expect_error("a\n\nb", ParsingError::EmptyUnquotedField(2));
    }

    #[test]
    fn trailing_separator() {
        expect_error("a,b,", ParsingError::TrailingSeparator(3));
        expect_error("a,\nb", ParsingError::TrailingSeparator(1));
        expect_error("a,\r\nb", ParsingError::TrailingSeparator(1));
    }

    #[test]
    fn trailing_input() {
        expect_error(r#""a"b"#, ParsingError::TrailingInput(3, 'b'));
        expect_error(r#""a"  x"#, ParsingError::TrailingInput(5, 'x'));
        expect_error(r#""a""b"c"#, ParsingError::TrailingInput(6, 'c'));
        expect_error("a\rb", ParsingError::TrailingInput(1, '\r'));
    }

    #[test]
    fn trailing_input_message() {
        let error = parse_document(r#""a"  x,b"#).unwrap_err();
        assert_eq!(error, ParsingError::TrailingInput(5, 'x'));
        assert_eq!(
            error.to_string(),
            "unexpected character 'x', expected ',' or the end of the line"
        );

        // blanks between a closing quote and the comma are not an error
        let document = parse_document(r#""a" ,b"#).unwrap();
        assert_eq!(document.rows[0].values(), vec!["a", "b"]);
    }

    #[test]
    fn errors_are_located() {
        let content = "one,two\nthree,\"four\nfive";
        let error = parsing::parse(Path::new("located.csv"), content).unwrap_err();

        assert_eq!(error.offset(), 19);
        assert_eq!(error.line(), 2);
        assert_eq!(error.column(), 12);
        assert_eq!(error.code(), "three,\"four");
        assert_eq!(error.expected(), "a closing quote");
        assert_eq!(
            error.to_string(),
            "error: located.csv:2:12 unterminated quoted field, expected a closing quote"
        );
    }
}
