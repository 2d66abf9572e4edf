use std::{
    fs,
    io::{self, BufRead, BufReader},
    process::ExitCode,
};

use calc_cli::{
    evaluate,
    interpreter::{
        constants::ConstantTable,
        environment::Environment,
        evaluator::{core::Calculator, function::core::FunctionTable},
    },
};
use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// calc-cli evaluates arithmetic statements, one per line.
///
/// Variables declared with `let` and the previous result `_` carry over from
/// one statement to the next.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells calc-cli to read statements from a file, one per line.
    #[arg(short, long)]
    file: bool,

    /// Prints results with this many fractional digits.
    #[arg(short, long)]
    precision: Option<usize>,

    /// Starts without the predefined constants `pi`, `e` and `phi`.
    #[arg(long)]
    no_constants: bool,

    /// A statement, or a path when `--file` is given. Statements are read
    /// from standard input when this is omitted.
    contents: Option<String>,
}

fn main() -> ExitCode {
    let filter =
        EnvFilter::try_from_env("CALC_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt().with_env_filter(filter)
                             .with_writer(io::stderr)
                             .init();

    let args = Args::parse();
    debug!(?args, "starting");

    let calculator = if args.no_constants {
        Calculator::with_tables(ConstantTable::empty(), FunctionTable::default())
    } else {
        Calculator::new()
    };
    let mut env = Environment::new();

    let succeeded = match (args.contents, args.file) {
        (Some(path), true) => {
            let Ok(file) = fs::File::open(&path) else {
                eprintln!("Failed to read the input file '{path}'. Perhaps this file does not \
                           exist?");
                return ExitCode::FAILURE;
            };
            run(read_lines(BufReader::new(file)), &calculator, &mut env, args.precision)
        },
        (Some(statement), false) => run([Ok(statement)], &calculator, &mut env, args.precision),
        (None, true) => {
            eprintln!("--file needs the path of a file to read.");
            return ExitCode::FAILURE;
        },
        (None, false) => run(read_lines(io::stdin().lock()),
                             &calculator,
                             &mut env,
                             args.precision),
    };

    if succeeded {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

/// Splits `reader` into lines.
///
/// Bytes that are not valid UTF-8 are replaced with `U+FFFD`, so such a line
/// still reaches the evaluator and fails there as an unknown token.
fn read_lines<R: BufRead>(reader: R) -> impl Iterator<Item = io::Result<String>> {
    reader.split(b'\n')
          .map(|line| line.map(|bytes| String::from_utf8_lossy(&bytes).into_owned()))
}

/// Evaluates every non-blank line in order against one environment.
///
/// Results are printed to stdout as `= value` and errors to stderr as
/// `Error: message`. A failing statement does not stop the ones after it.
/// A read error is reported the same way and ends the run, since nothing
/// more can be read.
///
/// Returns `false` if any line failed.
fn run<I, S>(lines: I,
             calculator: &Calculator,
             env: &mut Environment,
             precision: Option<usize>)
             -> bool
    where I: IntoIterator<Item = io::Result<S>>,
          S: AsRef<str>
{
    let mut succeeded = true;

    for line in lines {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                eprintln!("Error: {e}");
                return false;
            },
        };
        let statement = line.as_ref().trim();
        if statement.is_empty() {
            continue;
        }

        match evaluate(statement, calculator, env) {
            Ok(value) => println!("= {}", format_value(value, precision)),
            Err(e) => {
                eprintln!("Error: {e}");
                succeeded = false;
            },
        }
    }

    succeeded
}

fn format_value(value: f64, precision: Option<usize>) -> String {
    match precision {
        Some(digits) => format!("{value:.digits$}"),
        None => value.to_string(),
    }
}
