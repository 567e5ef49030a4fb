//! Showcase command: prints every demonstration in a fixed sequence.

use std::io::{self, Write};

use tracing::debug;

use crate::{cli::CliConfig, Result};
use ct_core::{non_negative, square, DisplaySink, Naturals, Pipeline, TypeClass, SQUARES_TABLE};

/// Arguments for the run command
#[derive(Debug, Default, clap::Args)]
pub struct RunArgs {}

/// Execute the run command
pub fn run_command(_args: RunArgs, config: &CliConfig) -> Result<()> {
    let stdout = io::stdout();
    render_showcase(stdout.lock(), config)?;
    Ok(())
}

/// Render the full showcase into `out`.
///
/// The sequence is fixed: the two compile-time scalars, the squares table,
/// the two lazy pipelines, the sorted numbers, then the type-conditional
/// pair.
pub fn render_showcase<W: Write>(out: W, config: &CliConfig) -> Result<()> {
    debug!("rendering showcase");
    let mut sink = DisplaySink::new(out).with_width(config.display.label_width);

    // Both constants are evaluated before the program starts.
    const VAL: i64 = square(4);
    const SAFE: i64 = non_negative(10);
    sink.scalar("Const square(4)", VAL)?;
    sink.scalar("Validated non-negative(10)", SAFE)?;
    sink.sequence("Const squares table", SQUARES_TABLE)?;

    let numbers = vec![1i64, 2, 3, 4, 5, 6, 7, 8, 9, 10];
    let even_squares = Pipeline::new(numbers)
        .filter(|x| x % 2 == 0)
        .transform(|x| x * x);
    sink.sequence("Even squares", even_squares)?;

    let first_five = Pipeline::new(Naturals::new()).take(5);
    sink.sequence("First five naturals", first_five)?;

    let unsorted = vec![5i64, 1, 8, 3, 11, 25, 43, 54];
    sink.sequence("Sorted numbers", Pipeline::new(unsorted).sorted())?;

    42i64.describe(&mut sink)?;
    3.14f64.describe(&mut sink)?;

    if config.display.summary {
        let demos = sink.lines_written();
        sink.scalar("Summary", format!("{} demonstrations", demos))?;
    }

    Ok(())
}
