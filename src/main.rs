use std::io::IsTerminal;
use std::path::Path;

use clap::{Arg, ArgAction, Command};
use csvdialect::formatting::{Identity, Render, Terminal};
use csvdialect::parsing;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

mod harness;
mod output;
mod problem;

use output::Output;

fn command() -> Command {
    const VERSION: &str = concat!("v", env!("CARGO_PKG_VERSION"));

    Command::new("csvdialect")
        .version(VERSION)
        .propagate_version(true)
        .author("Andrew Cowie")
        .about("Parse CSV files with quoted fields, escapes, and bare fields.")
        .disable_help_subcommand(true)
        .arg_required_else_help(true)
        .subcommand_required(true)
        .subcommand(
            Command::new("check")
                .about("Syntax-check the given file")
                .arg(
                    Arg::new("filename")
                        .required(true)
                        .help("The file containing the CSV data you want to check. Use '-' to read standard input."),
                ),
        )
        .subcommand(
            Command::new("print")
                .about("Parse the given file and write out its rows")
                .arg(
                    Arg::new("output")
                        .short('o')
                        .long("output")
                        .value_parser(["native", "json"])
                        .default_value("native")
                        .help("Which kind of output to produce: fields re-joined with commas, or a JSON array of rows."),
                )
                .arg(
                    Arg::new("raw-control-chars")
                        .short('R')
                        .long("raw-control-chars")
                        .action(ArgAction::SetTrue)
                        .help("Emit ANSI escape codes for syntax highlighting even if output is redirected to a pipe or file."),
                )
                .arg(
                    Arg::new("filename")
                        .required(true)
                        .help("The file containing the CSV data you want to print. Use '-' to read standard input."),
                ),
        )
        .subcommand(
            Command::new("test")
                .about("Parse every file in a directory, expecting one row per line")
                .arg(
                    Arg::new("directory")
                        .required(true)
                        .help("The directory containing the test files."),
                ),
        )
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let matches = command().get_matches();

    let colour = std::io::stdout().is_terminal();

    let code = match matches.subcommand() {
        Some(("check", submatches)) => {
            let filename = submatches
                .get_one::<String>("filename")
                .map(Path::new)
                .unwrap_or(Path::new("-"));
            debug!(?filename);

            if colour {
                check_file(filename, &Terminal)
            } else {
                check_file(filename, &Identity)
            }
        }
        Some(("print", submatches)) => {
            let filename = submatches
                .get_one::<String>("filename")
                .map(Path::new)
                .unwrap_or(Path::new("-"));
            let output = submatches
                .get_one::<String>("output")
                .and_then(|name| Output::from_name(name))
                .unwrap_or(Output::Native);
            let raw = submatches.get_flag("raw-control-chars");
            debug!(?filename, ?output, raw);

            if colour || raw {
                print_file(filename, output, &Terminal)
            } else {
                print_file(filename, output, &Identity)
            }
        }
        Some(("test", submatches)) => {
            let directory = submatches
                .get_one::<String>("directory")
                .map(Path::new)
                .unwrap_or(Path::new("."));
            debug!(?directory);

            if colour {
                harness::run(directory, &Terminal)
            } else {
                harness::run(directory, &Identity)
            }
        }
        _ => unreachable!("clap rejects a missing or unknown subcommand"),
    };

    std::process::exit(code);
}

fn check_file(filename: &Path, renderer: &impl Render) -> i32 {
    let content = match parsing::load(filename) {
        Ok(content) => content,
        Err(error) => {
            eprintln!("{}", problem::concise_loading_error(&error, renderer));
            return 1;
        }
    };

    match parsing::parse(filename, &content) {
        Ok(document) => {
            info!("Parsed {}", filename.display());
            println!(
                "parsed {} row{}",
                document.len(),
                if document.len() == 1 { "" } else { "s" }
            );
            0
        }
        Err(error) => {
            eprintln!("{}", problem::full_parsing_error(&error, renderer));
            1
        }
    }
}

fn print_file(filename: &Path, kind: Output, renderer: &impl Render) -> i32 {
    let content = match parsing::load(filename) {
        Ok(content) => content,
        Err(error) => {
            eprintln!("{}", problem::concise_loading_error(&error, renderer));
            return 1;
        }
    };

    let document = match parsing::parse(filename, &content) {
        Ok(document) => document,
        Err(error) => {
            eprintln!("{}", problem::concise_parsing_error(&error, renderer));
            return 1;
        }
    };

    match kind {
        Output::Native => {
            print!("{}", output::via_text(&document, renderer));
            0
        }
        Output::Json => match output::via_json(&document) {
            Ok(json) => {
                println!("{}", json);
                0
            }
            Err(error) => {
                debug!(?error);
                eprintln!("{}", problem::concise_json_error(&error, renderer));
                1
            }
        },
    }
}
