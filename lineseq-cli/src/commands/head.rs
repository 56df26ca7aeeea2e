use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

use fs_lines::LineSeq;
use seq_core::SequenceExt;

use super::{ensure_file, write_lines};
use crate::AppError;

#[derive(Clone, Debug, clap::Args)]
#[clap(
    name = "head",
    about = "Print the first lines of a file, optionally skipping and filtering"
)]
pub struct Head {
    #[clap(value_parser, help = "Path to the text file")]
    path: PathBuf,
    #[clap(
        short = 'n',
        long,
        default_value_t = 10,
        help = "Maximum number of lines to print"
    )]
    lines: usize,
    #[clap(long, default_value_t = 0, help = "Lines to skip before reading")]
    skip: usize,
    #[clap(long, help = "Only print lines starting with this prefix")]
    prefix: Option<String>,
}

impl Head {
    pub fn run(&self, out: &mut impl Write) -> Result<(), AppError> {
        ensure_file(&self.path)?;

        let prefix = self.prefix.as_deref();
        let seq = LineSeq::new(File::open(&self.path)?)
            .skip(self.skip)
            .filter(|line| prefix.map_or(true, |p| line.starts_with(p)))
            .limit(self.lines);

        write_lines(seq, out)?;
        Ok(())
    }
}
