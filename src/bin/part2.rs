use calorie_counting::{get_top_totals, Args};

use anyhow::Result;
use clap::Parser;
use util::{init_tracing, read_input_lines};

fn main() -> Result<()> {
    init_tracing();
    let args = Args::parse();

    let totals = get_top_totals(
        read_input_lines()?.into_iter(),
        args.top_or(3),
        args.malformed,
    )?;

    println!("{totals}");

    Ok(())
}
