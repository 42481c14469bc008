use std::{error::Error as _, fmt::Display, process::ExitCode};

use clap::{error::ErrorKind, CommandFactory, Parser};

use mandelbrot::cli::{self, Args};

/// Report invalid input together with the usage line and exit.
fn usage_error(message: impl Display) -> ! {
    Args::command()
        .error(ErrorKind::ValueValidation, message)
        .exit()
}

fn main() -> ExitCode {
    env_logger::init();

    // clap leaves the usage line out of value errors.
    let args = Args::try_parse().unwrap_or_else(|err| match err.kind() {
        ErrorKind::ValueValidation => match err.source() {
            Some(cause) => usage_error(cause),
            None => err.exit(),
        },
        _ => err.exit(),
    });

    match cli::run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) if err.is_invalid_input() => usage_error(err),
        Err(err) => {
            eprintln!("error: {}", err);
            ExitCode::FAILURE
        }
    }
}
