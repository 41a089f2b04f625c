//! spritegen - writes every game sprite to assets/sprites

use std::process::ExitCode;

use spritegen::cli;

fn main() -> ExitCode {
    cli::run()
}
