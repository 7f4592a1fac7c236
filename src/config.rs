use clap::Parser;

use crate::input::MalformedLines;

/// Reads calorie lists from stdin, one number per line, groups separated by
/// blank lines. Prints the greatest group totals and their sum.
#[derive(Debug, Parser)]
pub struct Args {
    /// How many of the greatest totals to keep
    #[arg(short = 'n', long)]
    pub top: Option<usize>,

    /// What to do with lines that are not numbers
    #[arg(long, value_enum, default_value_t)]
    pub malformed: MalformedLines,
}

impl Args {
    pub fn top_or(&self, default: usize) -> usize {
        self.top.unwrap_or(default)
    }
}
