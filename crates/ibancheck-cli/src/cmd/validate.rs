//! Implementation of `ibancheck validate <IBAN>...`.
//!
//! Normalizes each argument (whitespace removed, uppercased), runs the
//! validation engine, and prints one result per argument to stdout together
//! with its field decomposition. A summary line goes to stderr.
//!
//! Exit codes:
//! - 0 = every argument is a valid IBAN
//! - 1 = at least one argument is invalid, incomplete, or of unknown country
use std::io::Write;

use ibancheck_core::{normalize, validate};

use crate::OutputFormat;
use crate::cmd::write_failed;
use crate::error::CliError;
use crate::format::{FormatMode, FormatterConfig, Tally, write_result, write_summary};

// ---------------------------------------------------------------------------
// run
// ---------------------------------------------------------------------------

/// Runs the `validate` command.
///
/// # Errors
///
/// - [`CliError::InvalidIbans`] when any argument is not a valid IBAN.
/// - [`CliError::IoError`] when writing to stdout or stderr fails.
pub fn run(
    ibans: &[String],
    format: &OutputFormat,
    quiet: bool,
    verbose: bool,
    no_color: bool,
) -> Result<(), CliError> {
    let config = FormatterConfig::from_flags(no_color, quiet, verbose);
    let stdout = std::io::stdout();
    let stderr = std::io::stderr();
    execute(
        &mut stdout.lock(),
        &mut stderr.lock(),
        ibans,
        FormatMode::from(format),
        &config,
    )
}

/// Validates every argument, writing results to `out` and the summary to
/// `err`.
pub(crate) fn execute<O: Write, E: Write>(
    out: &mut O,
    err: &mut E,
    ibans: &[String],
    mode: FormatMode,
    config: &FormatterConfig,
) -> Result<(), CliError> {
    let mut tally = Tally::default();
    for raw in ibans {
        let candidate = normalize(raw);
        let result = validate(&candidate);
        tally.record(result.status);
        write_result(out, &candidate, None, &result, true, mode, config)
            .map_err(write_failed("stdout"))?;
    }

    if ibans.len() > 1 {
        write_summary(err, &tally, mode, config).map_err(write_failed("stderr"))?;
    }

    if tally.failed() > 0 {
        Err(CliError::InvalidIbans {
            failed: tally.failed(),
            total: tally.total(),
        })
    } else {
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used)]
    #![allow(clippy::panic)]

    use super::*;

    fn plain_config() -> FormatterConfig {
        FormatterConfig {
            colors: false,
            quiet: false,
            verbose: false,
        }
    }

    fn run_capture(ibans: &[&str], mode: FormatMode) -> (Result<(), CliError>, String, String) {
        let ibans: Vec<String> = ibans.iter().map(|s| (*s).to_owned()).collect();
        let mut out: Vec<u8> = Vec::new();
        let mut err: Vec<u8> = Vec::new();
        let result = execute(&mut out, &mut err, &ibans, mode, &plain_config());
        (
            result,
            String::from_utf8(out).expect("utf8"),
            String::from_utf8(err).expect("utf8"),
        )
    }

    #[test]
    fn valid_iban_returns_ok_with_decomposition() {
        let (result, out, err) = run_capture(&["GB82WEST12345698765432"], FormatMode::Human);
        assert!(result.is_ok(), "{result:?}");
        assert!(out.starts_with("[valid]"), "stdout: {out}");
        assert!(out.contains("Account number"), "stdout: {out}");
        assert!(err.is_empty(), "single argument prints no summary: {err}");
    }

    #[test]
    fn printed_form_is_normalized() {
        let (result, out, _) = run_capture(&["gb82 west 1234 5698 7654 32"], FormatMode::Human);
        assert!(result.is_ok(), "{result:?}");
        assert!(out.contains("GB82WEST12345698765432"), "stdout: {out}");
    }

    #[test]
    fn invalid_iban_returns_exit_1() {
        let (result, out, _) = run_capture(&["DE89370400440532013001"], FormatMode::Human);
        let err = result.expect_err("should fail");
        assert_eq!(err.exit_code(), 1);
        assert!(out.contains("Check digits invalid"), "stdout: {out}");
    }

    #[test]
    fn mixed_arguments_report_counts() {
        let (result, _, err) = run_capture(
            &["GB82WEST12345698765432", "ZZ00", "GB82WEST1234"],
            FormatMode::Human,
        );
        match result {
            Err(CliError::InvalidIbans { failed, total }) => {
                assert_eq!(failed, 2);
                assert_eq!(total, 3);
            }
            other => panic!("expected InvalidIbans, got {other:?}"),
        }
        assert_eq!(err, "1 valid, 0 invalid, 1 incomplete, 1 unknown\n");
    }

    #[test]
    fn json_mode_emits_one_object_per_argument() {
        let (_, out, err) = run_capture(
            &["GB82WEST12345698765432", "DE89370400440532013000"],
            FormatMode::Json,
        );
        assert_eq!(out.lines().count(), 2);
        for line in out.lines() {
            let value: serde_json::Value = serde_json::from_str(line).expect("valid JSON");
            assert_eq!(value["status"], "valid");
        }
        let summary: serde_json::Value = serde_json::from_str(err.trim()).expect("valid JSON");
        assert_eq!(summary["summary"]["valid"], 2);
    }
}
