use std::{ffi::OsString, fmt, io::{BufRead, Write}, process::ExitCode};

use colored::Colorize;

use super::Command;
use crate::domain::DecodingError;
use crate::utils::normalizations::{normalize_bytes, WordClass};

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("Failed to decode {at}: {source}")]
    Decoding { at: InputLabel, source: DecodingError },

    #[error(transparent)]
    IOError(#[from] std::io::Error)
}

/// Position of an input, used in messages and reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputLabel {
    Argument(usize),
    Line(usize)
}

impl fmt::Display for InputLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputLabel::Argument(n) => write!(f, "argument {}", n),
            InputLabel::Line(n) => write!(f, "line {}", n),
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct Mismatch {
    pub at: InputLabel,
    pub value: String,
    pub expected: String
}

#[derive(Debug, Default)]
pub struct CheckReport {
    pub checked: usize,
    pub mismatches: Vec<Mismatch>
}

impl CheckReport {
    pub fn all_normalized(&self) -> bool {
        self.mismatches.is_empty()
    }
}

/// Feeds every argument, or every stdin line when there are none, to `visit`.
/// Stops at the first error.
fn each_input<R, F>(names: &[OsString], stdin: R, mut visit: F) -> Result<(), CliError>
where
    R: BufRead,
    F: FnMut(InputLabel, &[u8]) -> Result<(), CliError>
{
    if !names.is_empty() {
        for (i, name) in names.iter().enumerate() {
            visit(InputLabel::Argument(i + 1), name.as_encoded_bytes())?;
        }
        return Ok(());
    }

    for (i, line) in stdin.split(b'\n').enumerate() {
        let mut line = line?;
        if line.last() == Some(&b'\r') {
            line.pop();
        }
        visit(InputLabel::Line(i + 1), &line)?;
    }

    Ok(())
}

fn normalize_input(at: InputLabel, raw: &[u8], class: WordClass) -> Result<String, CliError> {
    normalize_bytes(raw, class).map_err(|source| CliError::Decoding { at, source })
}

/// Writes one normalized stem per input. Inputs that normalize to nothing
/// still produce an (empty) line so output lines up with input.
pub fn run_normalize<R, W>(names: &[OsString], stdin: R, out: &mut W, class: WordClass) -> Result<usize, CliError>
where
    R: BufRead,
    W: Write
{
    let mut count = 0;

    each_input(names, stdin, |at, raw| {
        let normalized = normalize_input(at, raw, class)?;

        if normalized.is_empty() {
            log::warn!("{} ({:?}) normalized to an empty name.", at, String::from_utf8_lossy(raw));
        } else {
            log::debug!("{}: {:?} -> {:?}", at, String::from_utf8_lossy(raw), normalized);
        }

        writeln!(out, "{}", normalized)?;
        count += 1;
        Ok(())
    })?;

    out.flush()?;
    Ok(count)
}

pub fn run_check<R, W>(names: &[OsString], stdin: R, out: &mut W, class: WordClass) -> Result<CheckReport, CliError>
where
    R: BufRead,
    W: Write
{
    let mut report = CheckReport::default();

    each_input(names, stdin, |at, raw| {
        let expected = normalize_input(at, raw, class)?;
        let value = std::str::from_utf8(raw).map_err(|err| CliError::Decoding { at, source: err.into() })?;
        report.checked += 1;

        if value != expected {
            let value = value.to_string();
            writeln!(out, "{}: '{}' -> '{}'", at, value, expected)?;
            report.mismatches.push(Mismatch { at, value, expected });
        }
        Ok(())
    })?;

    log::info!("Checked {} names, {} not normalized.", report.checked, report.mismatches.len());
    out.flush()?;
    Ok(report)
}

/// Runs `command` and maps its outcome to the process exit code.
/// `check` fails when any input is not normalized.
pub fn dispatch<R, W>(command: Command, stdin: R, out: &mut W, class: WordClass) -> Result<ExitCode, CliError>
where
    R: BufRead,
    W: Write
{
    match command {
        Command::Normalize { names } => {
            run_normalize(&names, stdin, out, class)?;
            Ok(ExitCode::SUCCESS)
        }
        Command::Check { names } => {
            let report = run_check(&names, stdin, out, class)?;
            if report.all_normalized() {
                Ok(ExitCode::SUCCESS)
            } else {
                Ok(ExitCode::FAILURE)
            }
        }
    }
}

/// Like [`dispatch`], but reports errors on `err_out` and exits with failure.
pub fn execute<R, W, E>(command: Command, stdin: R, out: &mut W, err_out: &mut E, class: WordClass) -> ExitCode
where
    R: BufRead,
    W: Write,
    E: Write
{
    match dispatch(command, stdin, out, class) {
        Ok(code) => code,
        Err(err) => {
            if let Err(write_err) = writeln!(err_out, "{} {}", "error:".red().bold(), err) {
                log::error!("Failed to report '{}': {}", err, write_err);
            }
            ExitCode::FAILURE
        }
    }
}
