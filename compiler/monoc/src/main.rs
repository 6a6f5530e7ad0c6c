//! Mono CLI
//!
//! Scanner front end: an interactive prompt and a file mode.

use std::io;
use std::process::ExitCode;

use monoc::cli::color_mode_from_env;
use monoc::commands::{run_file, run_interactive};
use monoc::{init_tracing, parse_args, Command};

fn main() -> ExitCode {
    init_tracing();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let command = match parse_args(&args) {
        Ok(command) => command,
        Err(err) => {
            if err.is_usage() {
                println!("{err}");
            } else {
                eprintln!("{err}");
            }
            return ExitCode::FAILURE;
        }
    };

    match command {
        Command::Interactive => {
            let stdin = io::stdin();
            let stdout = io::stdout();
            match run_interactive(stdin.lock(), &mut stdout.lock()) {
                Ok(()) => ExitCode::SUCCESS,
                Err(err) => {
                    eprintln!("error: {err}");
                    ExitCode::FAILURE
                }
            }
        }
        Command::File(path) => match run_file(&path, color_mode_from_env()) {
            Ok(outcome) => outcome.exit_code(),
            Err(err) => {
                eprintln!("{err}");
                ExitCode::FAILURE
            }
        },
    }
}
