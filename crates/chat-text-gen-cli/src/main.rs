// crates/chat-text-gen-cli/src/main.rs
// ============================================================================
// Module: Chat Text Generator CLI Entry Point
// Description: Positional-argument front end for header generation.
// Purpose: Open the three files, run the generator and write its output.
// Dependencies: chat-text-gen, clap, thiserror, tracing, tracing-subscriber
// ============================================================================

//! ## Overview
//! `chat-text-gen <optionsFile> <inputFile> <outputFile>` renders the header
//! for a chat message catalog.
//!
//! Build scripts invoke this tool and depend on its exit status, so two cases
//! deliberately exit with success:
//! - fewer than three positional arguments print the usage line to stdout;
//! - a file that cannot be opened prints a one-line diagnostic to stdout.
//!
//! Read, parse and schema failures print to stderr and exit with failure. The
//! output file is only rewritten once generation has succeeded.

#[cfg(test)]
mod main_tests;

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::ffi::OsString;
use std::fs;
use std::fs::File;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::atomic::AtomicUsize;
use std::sync::atomic::Ordering;

use chat_text_gen::ChatTextGenerator;
use chat_text_gen_cli::t;
use clap::Parser;
use clap::error::ErrorKind;
use thiserror::Error;
use tracing::debug;
use tracing::info;
use tracing_subscriber::EnvFilter;

// ============================================================================
// CONSTANTS: Logging defaults
// ============================================================================

/// Log filter applied when `RUST_LOG` is unset or invalid.
const DEFAULT_LOG_FILTER: &str = "warn";

/// Program name used when the process has no first argument.
const FALLBACK_PROGRAM_NAME: &str = "chat-text-gen";

// ============================================================================
// CONSTANTS: Temporary output file handling
// ============================================================================

/// Attempts made to find an unused temporary output name.
const TEMP_ATTEMPTS: usize = 16;
/// Per-process counter distinguishing temporary output names.
static TEMP_COUNTER: AtomicUsize = AtomicUsize::new(0);

// ============================================================================
// SECTION: CLI Types
// ============================================================================

/// CLI arguments for header generation.
///
/// All positionals are optional so that missing ones print the usage line
/// instead of a clap error. Positionals accept leading hyphens, so `-x` or
/// `-opts.json` are paths rather than unknown flags.
#[derive(Debug, Parser)]
#[command(
    name = "chat-text-gen",
    version,
    about = "Generate C++ compile-time chat message tables from a JSON catalog."
)]
struct Cli {
    /// Options document (JSON).
    #[arg(value_name = "OPTIONS_FILE", allow_hyphen_values = true)]
    options: Option<PathBuf>,
    /// Message catalog document (JSON).
    #[arg(value_name = "INPUT_FILE", allow_hyphen_values = true)]
    input: Option<PathBuf>,
    /// Generated header destination.
    #[arg(value_name = "OUTPUT_FILE", allow_hyphen_values = true)]
    output: Option<PathBuf>,
    /// Trailing positionals, accepted and ignored.
    #[arg(value_name = "EXTRA", hide = true, allow_hyphen_values = true)]
    extra: Vec<OsString>,
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// CLI error wrapper for catalog messages.
#[derive(Debug, Error)]
#[error("{message}")]
struct CliError {
    /// Human-readable error message.
    message: String,
}

impl CliError {
    /// Constructs a new [`CliError`] from a catalog message.
    const fn new(message: String) -> Self {
        Self {
            message,
        }
    }
}

/// CLI result alias for fallible operations.
type CliResult<T> = Result<T, CliError>;

// ============================================================================
// SECTION: Entry Point
// ============================================================================

/// CLI entry point returning an exit code.
fn main() -> ExitCode {
    init_tracing();
    match run() {
        Ok(code) => code,
        Err(err) => emit_error(&err.to_string()),
    }
}

/// Installs the stderr log subscriber.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Runs the open, generate and write pipeline.
fn run() -> CliResult<ExitCode> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => return report_parse_outcome(&err),
    };
    if !cli.extra.is_empty() {
        debug!(count = cli.extra.len(), "ignoring extra positional arguments");
    }
    let (Some(options_path), Some(input_path), Some(output_path)) =
        (cli.options, cli.input, cli.output)
    else {
        return print_usage();
    };

    let options_file = match File::open(&options_path) {
        Ok(file) => file,
        Err(err) => {
            return report_open_failure(
                &t!("open.options_failed", path = options_path.display()),
                &err,
            );
        }
    };
    let input_file = match File::open(&input_path) {
        Ok(file) => file,
        Err(err) => {
            return report_open_failure(
                &t!("open.input_failed", path = input_path.display()),
                &err,
            );
        }
    };
    if let Err(err) = open_output(&output_path) {
        return report_open_failure(
            &t!("open.output_failed", path = output_path.display()),
            &err,
        );
    }

    let generator = ChatTextGenerator::load(options_file, input_file)
        .map_err(|err| CliError::new(t!("generate.failed", error = err)))?;
    let header = generator.generate();
    write_generated(&output_path, &header).map_err(|err| {
        CliError::new(t!("output.write_failed", path = output_path.display(), error = err))
    })?;
    info!(
        path = %output_path.display(),
        messages = generator.catalog().messages.len(),
        bytes = header.len(),
        "wrote generated header"
    );
    Ok(ExitCode::SUCCESS)
}

/// Returns the invoked program name for the usage line.
fn program_name() -> String {
    std::env::args_os()
        .next()
        .map_or_else(|| FALLBACK_PROGRAM_NAME.to_string(), |arg| arg.to_string_lossy().into_owned())
}

/// Handles clap help/version requests and otherwise falls back to the usage line.
fn report_parse_outcome(err: &clap::Error) -> CliResult<ExitCode> {
    if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) {
        err.print().map_err(|err| CliError::new(output_error(&err)))?;
        return Ok(ExitCode::SUCCESS);
    }
    debug!(error = %err, "argument parsing failed");
    print_usage()
}

/// Prints the usage line to stdout and exits successfully.
fn print_usage() -> CliResult<ExitCode> {
    write_stdout_line(&t!("main.usage", program = program_name()))
        .map_err(|err| CliError::new(output_error(&err)))?;
    Ok(ExitCode::SUCCESS)
}

/// Prints an open diagnostic to stdout and exits successfully.
fn report_open_failure(message: &str, err: &std::io::Error) -> CliResult<ExitCode> {
    debug!(error = %err, "file open failed");
    write_stdout_line(message).map_err(|err| CliError::new(output_error(&err)))?;
    Ok(ExitCode::SUCCESS)
}

// ============================================================================
// SECTION: Output Helpers
// ============================================================================

/// Checks the destination can be opened for writing without truncating it.
fn open_output(path: &Path) -> std::io::Result<File> {
    OpenOptions::new().write(true).create(true).truncate(false).open(path)
}

/// Replaces the destination with the generated text.
///
/// Contents go to a temporary file beside the destination, which is then
/// renamed over it; a failed write leaves the previous output in place.
fn write_generated(path: &Path, contents: &str) -> std::io::Result<()> {
    let (temp_path, mut file) = create_temp_output(path)?;
    let written = file.write_all(contents.as_bytes()).and_then(|()| file.sync_all());
    drop(file);
    if let Err(err) = written.and_then(|()| fs::rename(&temp_path, path)) {
        let _ = fs::remove_file(&temp_path);
        return Err(err);
    }
    Ok(())
}

/// Creates a unique temporary file in the destination's directory.
fn create_temp_output(path: &Path) -> std::io::Result<(PathBuf, File)> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let file_name = path.file_name().map_or_else(
        || FALLBACK_PROGRAM_NAME.to_string(),
        |name| name.to_string_lossy().into_owned(),
    );
    for _ in 0 .. TEMP_ATTEMPTS {
        let attempt = TEMP_COUNTER.fetch_add(1, Ordering::Relaxed);
        let temp_path = parent.join(format!(".{file_name}.tmp.{}.{attempt}", std::process::id()));
        match OpenOptions::new().write(true).create_new(true).open(&temp_path) {
            Ok(file) => return Ok((temp_path, file)),
            Err(err) if err.kind() == std::io::ErrorKind::AlreadyExists => {}
            Err(err) => return Err(err),
        }
    }
    Err(std::io::Error::new(
        std::io::ErrorKind::AlreadyExists,
        "failed to allocate temporary output path",
    ))
}

/// Writes a single line to stdout.
fn write_stdout_line(message: &str) -> std::io::Result<()> {
    let mut stdout = std::io::stdout();
    writeln!(&mut stdout, "{message}")
}

/// Writes a single line to stderr.
fn write_stderr_line(message: &str) -> std::io::Result<()> {
    let mut stderr = std::io::stderr();
    writeln!(&mut stderr, "{message}")
}

/// Formats a stdout write failure.
fn output_error(error: &std::io::Error) -> String {
    t!("output.stream_failed", stream = t!("output.stream.stdout"), error = error)
}

/// Emits an error message to stderr and returns a failure exit code.
fn emit_error(message: &str) -> ExitCode {
    let _ = write_stderr_line(message);
    ExitCode::FAILURE
}
