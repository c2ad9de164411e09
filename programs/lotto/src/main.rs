use anchor_lang::prelude::*;
use std::io;

use lotto::{log, Config, Console, Session};

fn main() -> Result<()> {
    let config = Config::from_env()?;
    log::install(config.log_sink);

    let source = config.number_source();
    msg!("session seed {}", source.fingerprint());

    let stdin = io::stdin();
    let stdout = io::stdout();
    let console = Console::new(stdin.lock(), stdout.lock());
    Session::new(console, source).play()?;
    Ok(())
}
