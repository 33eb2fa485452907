//!
//! The devbench arguments.
//!

use clap::Parser;

///
/// The devbench arguments.
///
/// The benchmark inputs are fixed, so only the console output can be tuned.
///
#[derive(Debug, Parser)]
#[command(about, long_about = None)]
pub struct Arguments {
    /// Adds the wall-clock duration to every trial outcome line.
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppresses the progress output. The report is still printed.
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}
