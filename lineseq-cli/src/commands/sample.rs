use std::io::Write;
use std::path::PathBuf;

use fs_lines::{FileLines, RandomLines};
use seq_core::SequenceExt;

use super::{ensure_file, write_lines};
use crate::AppError;

#[derive(Clone, Debug, clap::Args)]
#[clap(name = "sample", about = "Print random lines of a file without repeats")]
pub struct Sample {
    #[clap(value_parser, help = "Path to the text file")]
    path: PathBuf,
    #[clap(
        long,
        default_value_t = 0,
        help = "Number of lines to hold back from drawing"
    )]
    shoe: usize,
    #[clap(long, help = "Seed for a reproducible draw")]
    seed: Option<u64>,
    #[clap(short = 'n', long, help = "Maximum number of lines to print")]
    lines: Option<usize>,
}

impl Sample {
    pub fn run(&self, out: &mut impl Write) -> Result<(), AppError> {
        ensure_file(&self.path)?;

        let rng = match self.seed {
            Some(seed) => fastrand::Rng::with_seed(seed),
            None => fastrand::Rng::new(),
        };
        let collection = FileLines::new(&self.path);
        let seq = RandomLines::with_rng(collection, self.shoe, rng);

        match self.lines {
            Some(n) => write_lines(seq.limit(n), out)?,
            None => write_lines(seq, out)?,
        };
        Ok(())
    }
}
