use csvdialect::{
    error::CsvError,
    formatting::{Render, Syntax},
    language::LoadingError,
};

/// Format a parsing error with full details including source code context
pub fn full_parsing_error(error: &CsvError, renderer: &impl Render) -> String {
    let line = error.line();
    let column = error.column();
    let width = 3.max(
        line.to_string()
            .len(),
    );

    let gutter = renderer.style(Syntax::Gutter, "|");

    format!(
        r#"
{}: {}:{}:{} {}

{:width$} {}
{} {} {}
{:width$} {} {}{}

Expected {}. {}
        "#,
        renderer.style(Syntax::Error, "error"),
        renderer.style(
            Syntax::Location,
            &error
                .filename
                .to_string_lossy()
        ),
        line,
        column,
        renderer.style(Syntax::Problem, &error.problem()),
        ' ',
        gutter,
        renderer.style(Syntax::Gutter, &format!("{:>width$}", line)),
        gutter,
        error.code(),
        ' ',
        gutter,
        " ".repeat(column - 1),
        renderer.style(Syntax::Caret, "^"),
        error.expected(),
        error.details()
    )
    .trim_ascii()
    .to_string()
}

/// Format a parsing error with concise single-line output
pub fn concise_parsing_error(error: &CsvError, renderer: &impl Render) -> String {
    format!(
        "{}: {}:{}:{} {}",
        renderer.style(Syntax::Error, "error"),
        renderer.style(
            Syntax::Location,
            &error
                .filename
                .to_string_lossy()
        ),
        error.line(),
        error.column(),
        renderer.style(Syntax::Problem, &error.problem()),
    )
}

/// Format a LoadingError with concise single-line output
pub fn concise_loading_error<'i>(error: &LoadingError<'i>, renderer: &impl Render) -> String {
    format!(
        "{}: {}: {}",
        renderer.style(Syntax::Error, "error"),
        error
            .filename
            .display(),
        renderer.style(Syntax::Problem, &error.to_string())
    )
}

/// Format a failure serializing output as JSON
pub fn concise_json_error(error: &serde_json::Error, renderer: &impl Render) -> String {
    format!(
        "{}: {}",
        renderer.style(Syntax::Error, "error"),
        renderer.style(Syntax::Problem, &format!("Unable to write JSON: {}", error))
    )
}
