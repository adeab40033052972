//! Implementation of `ibancheck countries [CODE] [--check]`.
//!
//! Without arguments, lists every registered country with its IBAN length,
//! check-digit policy, and alias base. With a code, prints that country's
//! BBAN field layout. With `--check`, verifies every layout and reports
//! violations.
//!
//! Exit codes:
//! - 0 = listing printed, or no layout violations
//! - 1 = unknown country code, or at least one layout violation
use std::io::Write;

use ibancheck_core::{CountryRule, Registry, normalize, registry};

use crate::OutputFormat;
use crate::cmd::write_failed;
use crate::error::CliError;
use crate::format::{
    FormatMode, FormatterConfig, write_country_detail, write_country_list, write_violation,
};

/// Runs the `countries` command against the built-in registry.
///
/// # Errors
///
/// - [`CliError::UnknownCountry`] when `code` is not registered.
/// - [`CliError::LayoutViolations`] when `check` finds a malformed layout.
/// - [`CliError::IoError`] when writing to stdout or stderr fails.
pub fn run(
    code: Option<&str>,
    check: bool,
    format: &OutputFormat,
    quiet: bool,
    no_color: bool,
) -> Result<(), CliError> {
    let config = FormatterConfig::from_flags(no_color, quiet, false);
    let mode = FormatMode::from(format);
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    if check {
        let stderr = std::io::stderr();
        return check_layouts(&mut out, &mut stderr.lock(), registry(), mode, &config);
    }
    match code {
        Some(code) => describe(&mut out, registry(), code, mode),
        None => {
            let rules: Vec<&CountryRule> = registry().iter().collect();
            write_country_list(&mut out, &rules, mode).map_err(write_failed("stdout"))
        }
    }
}

/// Prints the layout of `code`, normalized first so `gb` finds `GB`.
pub(crate) fn describe<W: Write>(
    out: &mut W,
    registry: &Registry,
    code: &str,
    mode: FormatMode,
) -> Result<(), CliError> {
    let code = normalize(code);
    let rule = registry
        .lookup(&code)
        .ok_or_else(|| CliError::UnknownCountry { code: code.clone() })?;
    write_country_detail(out, rule, mode).map_err(write_failed("stdout"))
}

/// Reports every layout violation in `registry`, then a one-line verdict on
/// `err` unless quiet.
pub(crate) fn check_layouts<O: Write, E: Write>(
    out: &mut O,
    err: &mut E,
    registry: &Registry,
    mode: FormatMode,
    config: &FormatterConfig,
) -> Result<(), CliError> {
    let violations = registry.layout_violations();
    for violation in &violations {
        write_violation(out, violation, mode, config).map_err(write_failed("stdout"))?;
    }
    if !config.quiet && mode == FormatMode::Human {
        writeln!(
            err,
            "checked {} countries, {} layout violations",
            registry.len(),
            violations.len()
        )
        .map_err(write_failed("stderr"))?;
    }
    if violations.is_empty() {
        Ok(())
    } else {
        Err(CliError::LayoutViolations {
            count: violations.len(),
        })
    }
}
