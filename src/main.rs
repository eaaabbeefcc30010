//! repotidy - check a library repository against a declarative standard

#![deny(clippy::all, unsafe_code)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions, clippy::missing_errors_doc)]

mod cli;
mod commands;

use std::process::ExitCode;

fn main() -> ExitCode {
    let code = match cli::run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("error: {e:#}");
            repotidy::EXIT_CONFIG_ERROR
        },
    };
    ExitCode::from(u8::try_from(code).unwrap_or(1))
}
