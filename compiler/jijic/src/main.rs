//! Jiji Compiler CLI
//!
//! Compiles a `.ji` file to JavaScript.

use std::path::PathBuf;
use std::process::ExitCode;

use jijic::{compile_file, tracing_setup, CompileError};

const USAGE: &str = "\
Usage: jiji <file.ji> [-o <out.js>]

Compile a Jiji file to JavaScript. The program is printed to stdout
unless -o is given.

Options:
  -o <path>      Write the JavaScript to <path>
  -h, --help     Print this help
  -V, --version  Print the version

Environment:
  JIJI_LOG       Tracing filter, e.g. jiji_parse=trace (falls back to RUST_LOG)
  JIJI_LOG_TREE  Set to 1 to print traces as an indented tree";

/// What the command line asked for.
#[derive(Debug, PartialEq, Eq)]
enum Command {
    Help,
    Version,
    Compile {
        input: PathBuf,
        output: Option<PathBuf>,
    },
}

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("missing file path")]
    MissingInput,
    #[error("missing path after -o")]
    MissingOutput,
    #[error("unexpected argument `{0}`")]
    Unexpected(String),
    #[error("Error reading file: {0}")]
    Read(CompileError),
    #[error("{0}")]
    Compile(CompileError),
    #[error("could not write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl From<CompileError> for CliError {
    fn from(err: CompileError) -> Self {
        if err.is_read_error() {
            CliError::Read(err)
        } else {
            CliError::Compile(err)
        }
    }
}

fn parse_args(args: &[String]) -> Result<Command, CliError> {
    let mut input = None;
    let mut output = None;
    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => return Ok(Command::Help),
            "-V" | "--version" => return Ok(Command::Version),
            "-o" => {
                let path = args.get(i + 1).ok_or(CliError::MissingOutput)?;
                output = Some(PathBuf::from(path));
                i += 1;
            }
            arg if !arg.starts_with('-') && input.is_none() => {
                input = Some(PathBuf::from(arg));
            }
            arg => return Err(CliError::Unexpected(arg.to_string())),
        }
        i += 1;
    }
    let input = input.ok_or(CliError::MissingInput)?;
    Ok(Command::Compile { input, output })
}

async fn run(args: &[String]) -> Result<(), CliError> {
    match parse_args(args)? {
        Command::Help => println!("{USAGE}"),
        Command::Version => println!("jiji {}", env!("CARGO_PKG_VERSION")),
        Command::Compile { input, output } => {
            let js = compile_file(&input).await?;
            match output {
                Some(path) => tokio::fs::write(&path, js)
                    .await
                    .map_err(|source| CliError::Write { path, source })?,
                None => println!("{js}"),
            }
        }
    }
    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    tracing_setup::init_tracing();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.is_empty() {
        eprintln!("{USAGE}");
        return ExitCode::FAILURE;
    }

    match run(&args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            if matches!(
                err,
                CliError::Unexpected(_) | CliError::MissingInput | CliError::MissingOutput
            ) {
                eprintln!("{USAGE}");
            }
            ExitCode::FAILURE
        }
    }
}
