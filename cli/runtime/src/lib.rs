use std::io::{self, Write};

pub mod args;
pub mod config;
pub mod error;
pub mod launcher;
pub mod loader;
pub mod module_builder;
pub mod require;

pub use args::ArgList;
pub use config::{ENTRY_INTERNAL, ENTRY_MAIN, LaunchConfig, SearchPath};
pub use error::LaunchError;
pub use launcher::{Launcher, State, launch};

/// Process exit code for every reported failure.
pub const EXIT_FAILURE: i32 = 1;

/// Write the contractual `Error:<message>` line.
///
/// # Errors
/// Returns an error if `out` cannot be written to.
pub fn report<W: Write>(error: &LaunchError, out: &mut W) -> io::Result<()> {
    writeln!(out, "Error:{error}")
}

/// Exit code for the outcome of [`launch`].
pub fn exit_code(result: &Result<(), LaunchError>) -> i32 {
    match result {
        Ok(()) => 0,
        Err(_) => EXIT_FAILURE,
    }
}
