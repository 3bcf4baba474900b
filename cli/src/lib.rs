use deno_terminal::colors;
use mboot_runtime::{ArgList, LaunchConfig, LaunchError, exit_code, launch, report};
use std::io::{self, Write};

/// Launch `default_entry` (or `MBOOT_ENTRY`) with the process arguments and
/// return the process exit code.
pub fn run(default_entry: &str) -> i32 {
    let config = LaunchConfig::new(default_entry).from_env();
    let trace = config.trace;

    let result = launch(config, &ArgList::from_env());
    if let Err(error) = &result {
        print_error(error, trace);
    }
    exit_code(&result)
}

fn print_error(error: &LaunchError, trace: bool) {
    let mut stderr = io::stderr().lock();
    let _ = report(error, &mut stderr);

    if trace {
        if let Some(stack) = error.stack() {
            let _ = writeln!(stderr, "{}", colors::gray(stack.trim_end()));
        }
    }
    let _ = stderr.flush();
}
