use std::{
    fs,
    io::{self, Write},
    path::{Path, PathBuf},
    process::ExitCode,
};

use clap::{Parser, Subcommand};
use golden::{Document, ParseError};
use thiserror::Error;

#[derive(Parser, Debug)]
#[command(version, about = "Validate and normalize HTTP fixture files")]
struct Cli {
    /// Log filter used when RUST_LOG is not set.
    #[arg(long, env = "GOLDEN_LOG", default_value = "info", global = true)]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Parse fixture files and print their sections.
    Check {
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },
    /// Re-serialize a fixture file in canonical form.
    Fmt {
        file: PathBuf,

        /// Rewrite the file in place instead of printing it.
        #[arg(long)]
        write: bool,
    },
}

#[derive(Error, Debug)]
enum CliError {
    #[error(transparent)]
    Shared(#[from] shared::SharedError),

    #[error("{}: {source}", path.display())]
    Parse { path: PathBuf, source: ParseError },

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

fn load(path: &Path) -> Result<Document, CliError> {
    let data = shared::load_fixture(path)?;
    Document::parse(&data).map_err(|source| CliError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

fn check(files: &[PathBuf], mut out: impl Write) -> Result<bool, CliError> {
    let mut ok = true;

    for path in files {
        match load(path) {
            Ok(document) => {
                writeln!(out, "{}: {} sections", path.display(), document.section_count())?;
                for section in document.sections() {
                    writeln!(
                        out,
                        "  {:<10} {} line(s)",
                        section.id().to_string(),
                        section.line_count()
                    )?;
                }
            }
            Err(CliError::Parse { path, source }) => {
                tracing::error!(path = %path.display(), "{source}");
                ok = false;
            }
            Err(CliError::Shared(e)) => {
                tracing::error!("{e}");
                ok = false;
            }
            Err(e) => return Err(e),
        }
    }

    Ok(ok)
}

fn format(file: &Path, write: bool, out: impl Write) -> Result<(), CliError> {
    let document = load(file)?;

    if write {
        fs::write(file, document.to_wire())?;
        tracing::info!(path = %file.display(), "Rewrote fixture");
    } else {
        document.write_to(out)?;
    }

    Ok(())
}

fn run(cli: Cli) -> Result<bool, CliError> {
    shared::init_logging(&cli.log_level)?;

    match cli.command {
        Command::Check { files } => check(&files, io::stdout().lock()),
        Command::Fmt { file, write } => format(&file, write, io::stdout().lock()).map(|()| true),
    }
}

fn main() -> ExitCode {
    // A missing .env file is fine.
    let _ = dotenvy::dotenv();

    match run(Cli::parse()) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
