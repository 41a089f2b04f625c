//! Command-line interface implementation

use clap::Parser;
use std::error::Error;
use std::path::Path;
use std::process::ExitCode;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use crate::output::DEFAULT_OUTPUT_DIR;
use crate::renderer::render_all;

/// Exit codes; clap exits with 2 on its own for invalid arguments
const EXIT_SUCCESS: u8 = 0;
const EXIT_ERROR: u8 = 1;

/// Generate every game sprite as a 16x16 PNG under assets/sprites
#[derive(Parser)]
#[command(name = "spritegen")]
#[command(about = "Generate every game sprite as a 16x16 PNG under assets/sprites")]
#[command(version)]
pub struct Cli {}

/// Run the CLI application
pub fn run() -> ExitCode {
    let _cli = Cli::parse();

    init_logging();

    match render_all(Path::new(DEFAULT_OUTPUT_DIR)) {
        Ok(_) => ExitCode::from(EXIT_SUCCESS),
        Err(e) => {
            eprintln!("Error: {}", e);
            let mut cause = e.source();
            while let Some(err) = cause {
                eprintln!("  caused by: {}", err);
                cause = err.source();
            }
            ExitCode::from(EXIT_ERROR)
        }
    }
}

fn init_logging() {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_writer(std::io::stderr)
        .finish();

    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Warning: logging disabled: {}", e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_cli_accepts_no_arguments() {
        assert!(Cli::try_parse_from(["spritegen"]).is_ok());
    }

    #[test]
    fn test_cli_rejects_arguments() {
        assert!(Cli::try_parse_from(["spritegen", "fire"]).is_err());
        assert!(Cli::try_parse_from(["spritegen", "--out", "x"]).is_err());
    }
}
