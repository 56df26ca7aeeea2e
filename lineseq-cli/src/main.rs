use std::io;

use clap::Parser;

mod commands;
mod error;

use commands::Commands;
pub use error::AppError;

#[derive(Parser, Debug)]
#[clap(name = "lineseq")]
#[clap(about = "Read, filter and sample the lines of text files", long_about = None)]
struct Cli {
    #[clap(subcommand)]
    command: Commands,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args = Cli::parse();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    args.command.run(&mut out)?;

    Ok(())
}
