//! Run the parser over every file in a directory, checking that each one
//! yields as many rows as it has lines.

use std::path::{Path, PathBuf};

use csvdialect::formatting::{self, Render, Syntax};
use csvdialect::language::{Document, LoadingError};
use csvdialect::parsing;
use tracing::{debug, info};

use crate::problem;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Passed,
    Failed,
}

#[derive(Debug, Default, PartialEq, Eq)]
pub struct Summary {
    pub passed: usize,
    pub failed: usize,
}

/// List the regular files in the directory, sorted so that runs are
/// repeatable.
pub fn load_test_cases(directory: &Path) -> Result<Vec<PathBuf>, LoadingError<'_>> {
    let entries = match std::fs::read_dir(directory) {
        Ok(entries) => entries,
        Err(error) => {
            debug!(?error);
            return Err(LoadingError {
                problem: "Unable to read test directory".to_string(),
                details: error
                    .kind()
                    .to_string(),
                filename: directory,
            });
        }
    };

    let mut files = Vec::new();
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_file() {
            files.push(path);
        }
    }
    files.sort();

    Ok(files)
}

/// The number of rows a test file is expected to hold: one per line, where a
/// final newline does not begin another line.
pub fn expected_rows(content: &str) -> usize {
    content
        .lines()
        .count()
}

pub fn evaluate(document: &Document, expected: usize) -> Verdict {
    if document.len() == expected {
        Verdict::Passed
    } else {
        Verdict::Failed
    }
}

/// Run each test case in turn, printing the parsed rows and a verdict. A
/// file that fails to load or parse stops the run. Returns the process exit
/// code.
pub fn run(directory: &Path, renderer: &impl Render) -> i32 {
    let files = match load_test_cases(directory) {
        Ok(files) => files,
        Err(error) => {
            eprintln!("{}", problem::concise_loading_error(&error, renderer));
            return 1;
        }
    };

    info!("Found {} test cases in {}", files.len(), directory.display());

    let mut summary = Summary::default();

    for filename in &files {
        println!("Testing {}", filename.display());

        let content = match parsing::load(filename) {
            Ok(content) => content,
            Err(error) => {
                eprintln!("{}", problem::concise_loading_error(&error, renderer));
                return 1;
            }
        };

        let expected = expected_rows(&content);

        let document = match parsing::parse(filename, &content) {
            Ok(document) => document,
            Err(error) => {
                eprintln!("{}", problem::full_parsing_error(&error, renderer));
                return 1;
            }
        };

        println!(
            "parsed {} row{}",
            document.len(),
            if document.len() == 1 { "" } else { "s" }
        );
        print!("{}", formatting::render(&document, renderer));

        match evaluate(&document, expected) {
            Verdict::Passed => {
                summary.passed += 1;
                println!("{}", renderer.style(Syntax::Field, "TEST PASSED"));
            }
            Verdict::Failed => {
                summary.failed += 1;
                debug!(expected, actual = document.len());
                println!("{}", renderer.style(Syntax::Error, "TEST FAILED"));
            }
        }

        println!();
    }

    info!("{} passed, {} failed", summary.passed, summary.failed);

    if summary.failed > 0 {
        1
    } else {
        0
    }
}
