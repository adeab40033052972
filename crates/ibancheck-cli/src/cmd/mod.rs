/// Command module for the `ibancheck` CLI.
///
/// Each submodule implements one subcommand. The `run` function in each
/// module takes the parsed arguments, writes to the locked stdout and
/// stderr, and returns `Ok(())` on success or a [`CliError`] on failure.
/// The actual work happens in an `execute` function generic over its
/// writers so unit tests can capture the output.
use crate::error::CliError;

pub mod batch;
pub mod countries;
pub mod validate;

/// Maps a failed write to `sink` into a [`CliError::IoError`].
pub(crate) fn write_failed(sink: &'static str) -> impl FnOnce(std::io::Error) -> CliError {
    move |e| CliError::IoError {
        source: sink.to_owned(),
        detail: e.to_string(),
    }
}
