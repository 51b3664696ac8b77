pub mod ids;
pub mod ledger;
pub mod models;
mod money;
pub mod report;
mod result;
pub mod services;
mod session;
pub mod terminal;
pub mod validators;

pub use money::{Money, MoneyError};
pub use result::Result;
pub use session::{Config, Session};
pub use terminal::Terminal;

use std::io::{BufRead, Write};

/// Runs a whole session over the given input and output, returning once the user exits or the
/// input is exhausted
pub fn run_session<R: BufRead, W: Write>(config: Config, input: R, output: W) -> Result {
    let mut session = Session::new(config);
    let mut terminal = Terminal::new(input, output);

    log::debug!("Starting session with config: {:?}", session.config());
    terminal.run(&mut session)?;
    log::debug!(
        "Session finished with {} user(s) and {} account(s)",
        session.directory().users().len(),
        session.directory().accounts().len()
    );

    return Ok(());
}
