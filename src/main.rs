mod args;
mod config;
mod reader;
mod shell;
mod writer;

use bank::{Bank, Result};

use shell::Shell;

use std::io;

fn main() -> Result {
    config::configure_app()?;

    log::debug!("Application configured. Loading bank...");

    let bank = Bank::with_config(config::load_bank_config()?);

    let input_path = args::parse_input_arg()?;
    log::debug!("Reading operator input from: {input_path:?}");

    let scripted = input_path.is_some();
    let input = reader::build_input_reader(input_path)?;

    let mut shell = Shell::new(bank, input, io::stdout().lock()).stop_on_error(scripted);
    shell.run()?;

    log::debug!("Application finished successfully!");

    Ok(())
}
