//! Implementation of `ibancheck batch <FILE|->`.
//!
//! Reads one candidate per line, skipping blank lines, and validates each
//! after normalization. Results go to stdout, prefixed with their line
//! number; `--verbose` adds each result's field decomposition. A summary
//! line goes to stderr.
//!
//! Exit codes:
//! - 0 = every line is a valid IBAN (an input with no candidates is valid)
//! - 1 = at least one line is not valid
//! - 2 = the input could not be read
use std::io::Write;

use ibancheck_core::{normalize, validate};

use crate::cmd::write_failed;
use crate::error::CliError;
use crate::format::{FormatMode, FormatterConfig, Tally, write_result, write_summary};
use crate::io::{candidate_lines, read_input};
use crate::{OutputFormat, PathOrStdin};

/// Runs the `batch` command.
///
/// # Errors
///
/// - Exit code 2 variants from [`read_input`] when the input cannot be read.
/// - [`CliError::InvalidIbans`] when any line is not a valid IBAN.
pub fn run(
    file: &PathOrStdin,
    max_file_size: u64,
    format: &OutputFormat,
    quiet: bool,
    verbose: bool,
    no_color: bool,
) -> Result<(), CliError> {
    let content = read_input(file, max_file_size)?;
    let config = FormatterConfig::from_flags(no_color, quiet, verbose);
    let stdout = std::io::stdout();
    let stderr = std::io::stderr();
    execute(
        &mut stdout.lock(),
        &mut stderr.lock(),
        &content,
        FormatMode::from(format),
        &config,
    )
}

/// Validates every candidate line of `content`.
pub(crate) fn execute<O: Write, E: Write>(
    out: &mut O,
    err: &mut E,
    content: &str,
    mode: FormatMode,
    config: &FormatterConfig,
) -> Result<(), CliError> {
    let mut tally = Tally::default();
    for (line, raw) in candidate_lines(content) {
        let candidate = normalize(raw);
        let result = validate(&candidate);
        tally.record(result.status);
        write_result(
            out,
            &candidate,
            Some(line),
            &result,
            config.verbose,
            mode,
            config,
        )
        .map_err(write_failed("stdout"))?;
    }
    tracing::info!(
        total = tally.total(),
        failed = tally.failed(),
        "batch validation finished"
    );

    write_summary(err, &tally, mode, config).map_err(write_failed("stderr"))?;

    if tally.failed() > 0 {
        Err(CliError::InvalidIbans {
            failed: tally.failed(),
            total: tally.total(),
        })
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used)]
    #![allow(clippy::panic)]

    use super::*;

    fn config(quiet: bool, verbose: bool) -> FormatterConfig {
        FormatterConfig {
            colors: false,
            quiet,
            verbose,
        }
    }

    fn run_capture(
        content: &str,
        mode: FormatMode,
        config: &FormatterConfig,
    ) -> (Result<(), CliError>, String, String) {
        let mut out: Vec<u8> = Vec::new();
        let mut err: Vec<u8> = Vec::new();
        let result = execute(&mut out, &mut err, content, mode, config);
        (
            result,
            String::from_utf8(out).expect("utf8"),
            String::from_utf8(err).expect("utf8"),
        )
    }

    const MIXED: &str = "GB82 WEST 1234 5698 7654 32\n\
                         \n\
                         de89370400440532013001\n\
                         ZZ820000000000000000\n\
                         NL91ABNA0417164300\n";

    #[test]
    fn mixed_batch_reports_each_line() {
        let (result, out, err) = run_capture(MIXED, FormatMode::Human, &config(false, false));
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 4, "stdout: {out}");
        assert!(lines[0].contains("1: GB82WEST12345698765432"), "{}", lines[0]);
        assert!(lines[1].contains("3: DE89370400440532013001"), "{}", lines[1]);
        assert!(lines[1].starts_with("[invalid]"), "{}", lines[1]);
        assert!(lines[2].starts_with("[unknown-country]"), "{}", lines[2]);
        assert!(lines[3].contains("5: NL91ABNA0417164300"), "{}", lines[3]);
        assert_eq!(err, "2 valid, 1 invalid, 0 incomplete, 1 unknown\n");
        match result {
            Err(CliError::InvalidIbans { failed, total }) => {
                assert_eq!((failed, total), (2, 4));
            }
            other => panic!("expected InvalidIbans, got {other:?}"),
        }
    }

    #[test]
    fn all_valid_batch_is_ok() {
        let content = "GB82WEST12345698765432\nBE68539007547034\n";
        let (result, out, _) = run_capture(content, FormatMode::Human, &config(false, false));
        assert!(result.is_ok(), "{result:?}");
        assert_eq!(out.lines().count(), 2);
    }

    #[test]
    fn empty_batch_is_ok() {
        let (result, out, err) = run_capture("\n\n", FormatMode::Human, &config(false, false));
        assert!(result.is_ok());
        assert!(out.is_empty());
        assert_eq!(err, "0 valid, 0 invalid, 0 incomplete, 0 unknown\n");
    }

    #[test]
    fn verbose_adds_decomposition() {
        let content = "BE68539007547034\n";
        let (_, out, _) = run_capture(content, FormatMode::Human, &config(false, true));
        assert!(out.contains("Human-readable IBAN"), "stdout: {out}");
        assert!(out.contains("BE68 5390 0754 7034"), "stdout: {out}");
    }

    #[test]
    fn quiet_suppresses_summary() {
        let (_, _, err) = run_capture(MIXED, FormatMode::Human, &config(true, false));
        assert!(err.is_empty(), "stderr: {err}");
    }

    #[test]
    fn json_batch_is_ndjson_with_line_numbers() {
        let (_, out, err) = run_capture(MIXED, FormatMode::Json, &config(false, false));
        let records: Vec<serde_json::Value> = out
            .lines()
            .map(|l| serde_json::from_str(l).expect("valid JSON"))
            .collect();
        assert_eq!(records.len(), 4);
        assert_eq!(records[0]["line"], 1);
        assert_eq!(records[1]["line"], 3);
        assert_eq!(records[1]["message"], "Check digits invalid");
        assert_eq!(records[2]["status"], "unknown_country");
        let summary: serde_json::Value = serde_json::from_str(err.trim()).expect("valid JSON");
        assert_eq!(summary["summary"]["invalid"], 1);
    }
}
