/// Output formatting: human-readable and JSON (NDJSON) modes.
///
/// - **Human mode** (default): one status line per candidate, optionally
///   followed by an aligned table of its display elements. The status tag is
///   colored unless `--no-color` is set, the `NO_COLOR` environment variable
///   is present (per <https://no-color.org>), or stdout is not a TTY.
/// - **JSON mode**: every record is a single-line JSON object (NDJSON).
///
/// Results go to stdout. Summaries go to stderr and are suppressed by
/// `--quiet`.
use std::io::{IsTerminal as _, Write};

use ibancheck_core::{
    CountryRule, DisplayElement, LayoutViolation, ValidationResult, ValidationStatus,
};
use serde::Serialize;

use crate::OutputFormat;

// ---------------------------------------------------------------------------
// Color support detection
// ---------------------------------------------------------------------------

/// Returns `true` if ANSI color codes should be emitted to stdout.
pub fn colors_enabled(no_color_flag: bool) -> bool {
    if no_color_flag {
        return false;
    }
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }
    std::io::stdout().is_terminal()
}

// ---------------------------------------------------------------------------
// ANSI escape sequences
// ---------------------------------------------------------------------------

const ANSI_GREEN: &str = "\x1b[32m";
const ANSI_RED: &str = "\x1b[31m";
const ANSI_YELLOW: &str = "\x1b[33m";
const ANSI_CYAN: &str = "\x1b[36m";
const ANSI_RESET: &str = "\x1b[0m";

/// Width of the widest status tag, `[unknown-country]`.
const TAG_WIDTH: usize = 17;

// ---------------------------------------------------------------------------
// FormatterConfig
// ---------------------------------------------------------------------------

/// Configuration for the formatter, derived from CLI flags.
#[derive(Debug, Clone)]
pub struct FormatterConfig {
    /// Whether ANSI colors are enabled.
    pub colors: bool,
    /// Suppress summaries.
    pub quiet: bool,
    /// Show element tables in batch output.
    pub verbose: bool,
}

impl FormatterConfig {
    /// Constructs a [`FormatterConfig`] from the raw CLI flags.
    pub fn from_flags(no_color_flag: bool, quiet: bool, verbose: bool) -> Self {
        Self {
            colors: colors_enabled(no_color_flag),
            quiet,
            verbose,
        }
    }
}

/// Output format selection, mirroring the CLI `--format` flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatMode {
    /// Human-readable, optionally colored output.
    Human,
    /// Structured NDJSON output.
    Json,
}

impl From<&OutputFormat> for FormatMode {
    fn from(format: &OutputFormat) -> Self {
        match format {
            OutputFormat::Human => Self::Human,
            OutputFormat::Json => Self::Json,
        }
    }
}

// ---------------------------------------------------------------------------
// Tally
// ---------------------------------------------------------------------------

/// Per-status counts over a run of validations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Tally {
    /// Valid IBANs.
    pub valid: usize,
    /// Invalid IBANs.
    pub invalid: usize,
    /// Candidates too short for their country.
    pub incomplete: usize,
    /// Candidates with an unregistered country code.
    pub unknown: usize,
}

impl Tally {
    /// Counts one result.
    pub fn record(&mut self, status: ValidationStatus) {
        match status {
            ValidationStatus::Valid => self.valid += 1,
            ValidationStatus::Invalid => self.invalid += 1,
            ValidationStatus::Incomplete => self.incomplete += 1,
            ValidationStatus::UnknownCountry => self.unknown += 1,
        }
    }

    /// Total results counted.
    pub fn total(&self) -> usize {
        self.valid + self.invalid + self.incomplete + self.unknown
    }

    /// Results that were not valid.
    pub fn failed(&self) -> usize {
        self.total() - self.valid
    }
}

// ---------------------------------------------------------------------------
// Validation results
// ---------------------------------------------------------------------------

/// One NDJSON record: the candidate as validated, its batch line if any,
/// and the full result.
#[derive(Serialize)]
struct ResultRecord<'a> {
    input: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    line: Option<usize>,
    #[serde(flatten)]
    result: &'a ValidationResult,
}

/// Writes one validation result.
///
/// `input` is the normalized candidate; `line` is its one-based line number
/// in a batch input. In human mode the element table follows the status
/// line when `show_elements` is set and the result carries elements.
///
/// # Errors
///
/// Returns an error only if writing to `writer` fails.
pub fn write_result<W: Write>(
    writer: &mut W,
    input: &str,
    line: Option<usize>,
    result: &ValidationResult,
    show_elements: bool,
    mode: FormatMode,
    config: &FormatterConfig,
) -> std::io::Result<()> {
    match mode {
        FormatMode::Human => {
            write_result_human(writer, input, line, result, config)?;
            if show_elements {
                write_elements_human(writer, &result.elements)?;
            }
            Ok(())
        }
        FormatMode::Json => {
            let record = ResultRecord {
                input,
                line,
                result,
            };
            serde_json::to_writer(&mut *writer, &record)?;
            writeln!(writer)
        }
    }
}

/// Format: `[valid]           GB82WEST12345698765432  United Kingdom: Valid IBAN`
///
/// A batch line number, when present, prefixes the candidate as `3: `.
fn write_result_human<W: Write>(
    writer: &mut W,
    input: &str,
    line: Option<usize>,
    result: &ValidationResult,
    config: &FormatterConfig,
) -> std::io::Result<()> {
    let tag = format!("{:<TAG_WIDTH$}", format!("[{}]", result.status));
    let color = match result.status {
        ValidationStatus::Valid => ANSI_GREEN,
        ValidationStatus::Invalid => ANSI_RED,
        ValidationStatus::Incomplete => ANSI_YELLOW,
        ValidationStatus::UnknownCountry => ANSI_CYAN,
    };
    let location = match line {
        Some(n) => format!("{n}: {input}"),
        None => input.to_owned(),
    };
    let (open, close) = if config.colors {
        (color, ANSI_RESET)
    } else {
        ("", "")
    };
    writeln!(
        writer,
        "{open}{tag}{close} {location}  {country}: {message}",
        country = result.country_name,
        message = result.message,
    )
}

/// Writes `elements` as an indented two-column table.
fn write_elements_human<W: Write>(
    writer: &mut W,
    elements: &[DisplayElement],
) -> std::io::Result<()> {
    let width = elements
        .iter()
        .map(|e| e.label.chars().count())
        .max()
        .unwrap_or(0);
    for element in elements {
        writeln!(writer, "    {:<width$}  {}", element.label, element.value)?;
    }
    Ok(())
}

/// Writes the closing summary: `3 valid, 1 invalid, 0 incomplete, 0 unknown`,
/// or `{"summary":{...}}` in JSON mode. Suppressed in quiet mode.
///
/// # Errors
///
/// Returns an error only if writing to `writer` fails.
pub fn write_summary<W: Write>(
    writer: &mut W,
    tally: &Tally,
    mode: FormatMode,
    config: &FormatterConfig,
) -> std::io::Result<()> {
    if config.quiet {
        return Ok(());
    }
    match mode {
        FormatMode::Human => writeln!(
            writer,
            "{} valid, {} invalid, {} incomplete, {} unknown",
            tally.valid, tally.invalid, tally.incomplete, tally.unknown
        ),
        FormatMode::Json => {
            serde_json::to_writer(&mut *writer, &serde_json::json!({ "summary": tally }))?;
            writeln!(writer)
        }
    }
}

// ---------------------------------------------------------------------------
// Country listings
// ---------------------------------------------------------------------------

/// Writes one line per rule set.
///
/// Human format: `MC  Monaco          27  mod97     unofficial, alias of FR`
///
/// # Errors
///
/// Returns an error only if writing to `writer` fails.
pub fn write_country_list<W: Write>(
    writer: &mut W,
    rules: &[&CountryRule],
    mode: FormatMode,
) -> std::io::Result<()> {
    match mode {
        FormatMode::Human => {
            let name_width = rules
                .iter()
                .map(|r| r.name.chars().count())
                .max()
                .unwrap_or(0);
            for rule in rules {
                let notes = country_notes(rule);
                let line = format!(
                    "{code}  {name:<name_width$}  {length:>2}  {policy:<9}  {notes}",
                    code = rule.code,
                    name = rule.name,
                    length = rule.expected_length,
                    policy = rule.check_digits.to_string(),
                );
                writeln!(writer, "{}", line.trim_end())?;
            }
            Ok(())
        }
        FormatMode::Json => {
            for rule in rules {
                serde_json::to_writer(&mut *writer, rule)?;
                writeln!(writer)?;
            }
            Ok(())
        }
    }
}

fn country_notes(rule: &CountryRule) -> String {
    let mut notes = Vec::new();
    if !rule.official_use {
        notes.push("unofficial".to_owned());
    }
    if let Some(base) = rule.alias_of {
        notes.push(format!("alias of {base}"));
    }
    notes.join(", ")
}

/// Writes the full layout of one rule set.
///
/// # Errors
///
/// Returns an error only if writing to `writer` fails.
pub fn write_country_detail<W: Write>(
    writer: &mut W,
    rule: &CountryRule,
    mode: FormatMode,
) -> std::io::Result<()> {
    match mode {
        FormatMode::Human => {
            writeln!(writer, "{} ({})", rule.name, rule.code)?;
            writeln!(writer, "  IBAN length    {}", rule.expected_length)?;
            writeln!(writer, "  Check digits   {}", rule.check_digits)?;
            let official = if rule.official_use { "yes" } else { "no" };
            writeln!(writer, "  Official use   {official}")?;
            if let Some(base) = rule.alias_of {
                writeln!(writer, "  Layout of      {base}")?;
            }
            writeln!(writer, "  BBAN fields")?;
            for field in rule.fields {
                let span = format!("{}..{}", field.offset, field.end());
                let format = format!("{}{}", field.length, field.class.symbol());
                writeln!(
                    writer,
                    "    {span:<7} {format:<4} {}",
                    field.label.unwrap_or("(unnamed)")
                )?;
            }
            for check in rule.supplementary_checks {
                writeln!(writer, "  Extra check    {}", check.name)?;
            }
            Ok(())
        }
        FormatMode::Json => {
            serde_json::to_writer(&mut *writer, rule)?;
            writeln!(writer)
        }
    }
}

/// Writes one layout violation.
///
/// # Errors
///
/// Returns an error only if writing to `writer` fails.
pub fn write_violation<W: Write>(
    writer: &mut W,
    violation: &LayoutViolation,
    mode: FormatMode,
    config: &FormatterConfig,
) -> std::io::Result<()> {
    match mode {
        FormatMode::Human if config.colors => {
            writeln!(writer, "{ANSI_RED}[E]{ANSI_RESET} {violation}")
        }
        FormatMode::Human => writeln!(writer, "[E] {violation}"),
        FormatMode::Json => {
            let record = serde_json::json!({ "violation": violation.to_string() });
            serde_json::to_writer(&mut *writer, &record)?;
            writeln!(writer)
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
