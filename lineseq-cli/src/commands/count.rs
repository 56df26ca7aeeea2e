use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

use fs_lines::{CharSeq, FileLines, LineCollection};
use seq_core::count;

use super::ensure_file;
use crate::AppError;

#[derive(Clone, Debug, clap::Args)]
#[clap(name = "count", about = "Count the lines of a file")]
pub struct Count {
    #[clap(value_parser, help = "Path to the text file")]
    path: PathBuf,
    #[clap(long, action, help = "Count characters instead of lines")]
    chars: bool,
}

impl Count {
    pub fn run(&self, out: &mut impl Write) -> Result<(), AppError> {
        ensure_file(&self.path)?;

        let n = if self.chars {
            let mut chars = CharSeq::new(File::open(&self.path)?);
            count(&mut chars)?
        } else {
            FileLines::new(&self.path).count()?
        };

        writeln!(out, "{}", n)?;
        Ok(())
    }
}
