mod args;
mod config;

use tbt::Result;

use std::io;

fn main() -> Result {
    config::configure_app()?;

    let session_config = args::parse_input_args()?;

    log::debug!("Application configured. Beginning session...");

    let stdin = io::stdin();
    let stdout = io::stdout();
    tbt::run_session(session_config, stdin.lock(), stdout.lock())?;

    log::debug!("Application finished successfully!");

    Ok(())
}
