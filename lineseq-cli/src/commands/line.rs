use std::io::Write;
use std::path::PathBuf;

use fs_lines::{FileLines, LineCollection};

use super::ensure_file;
use crate::AppError;

#[derive(Clone, Debug, clap::Args)]
#[clap(name = "line", about = "Print a single line by its index")]
pub struct Line {
    #[clap(value_parser, help = "Path to the text file")]
    path: PathBuf,
    #[clap(help = "Zero-based index of the line")]
    index: usize,
}

impl Line {
    pub fn run(&self, out: &mut impl Write) -> Result<(), AppError> {
        ensure_file(&self.path)?;
        let line = FileLines::new(&self.path).line(self.index)?;
        writeln!(out, "{}", line)?;
        Ok(())
    }
}
