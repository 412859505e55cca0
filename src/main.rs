//! Wordle Opener CLI

mod cli;
mod logging;

use cli::{parse_cli, run};
use logging::init_logging;

fn main() -> anyhow::Result<()> {
    let cli = parse_cli();
    init_logging(cli.verbose);
    run(cli)
}
