mod entry;
mod logger;
mod shutdown_handlers;

use std::process::ExitCode;

/// Exit status for errors raised before any call is dispatched.
const EXIT_FATAL: u8 = 2;

fn main() -> ExitCode {
    match entry::run() {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {}", err);
            ExitCode::from(EXIT_FATAL)
        }
    }
}
