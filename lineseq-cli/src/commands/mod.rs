use std::io::Write;
use std::path::Path;

use clap::Subcommand;
use seq_core::{Sequence, SequenceExt};

use crate::AppError;

mod count;
mod head;
mod line;
mod sample;

#[derive(Debug, Subcommand)]
pub enum Commands {
    Count(count::Count),
    Line(line::Line),
    Head(head::Head),
    Sample(sample::Sample),
}

impl Commands {
    pub fn run(&self, out: &mut impl Write) -> Result<(), AppError> {
        match self {
            Commands::Count(count) => count.run(out),
            Commands::Line(line) => line.run(out),
            Commands::Head(head) => head.run(out),
            Commands::Sample(sample) => sample.run(out),
        }
    }
}

/// Fail early with a readable message instead of a raw I/O error.
fn ensure_file(path: &Path) -> Result<(), AppError> {
    if path.is_file() {
        Ok(())
    } else {
        Err(AppError::FileNotFound(path.to_path_buf()))
    }
}

/// Write every line of `seq` to `out`, returning how many were written.
fn write_lines<S>(seq: S, out: &mut impl Write) -> Result<usize, AppError>
where
    S: Sequence<Item = String>,
{
    let mut written = 0;
    for line in seq.iter() {
        writeln!(out, "{}", line?)?;
        written += 1;
    }
    log::debug!("{} lines written", written);
    Ok(written)
}
