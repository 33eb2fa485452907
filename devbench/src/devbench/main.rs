//!
//! The devbench executable.
//!

pub(crate) mod arguments;

use clap::Parser;
use colored::Colorize;

use self::arguments::Arguments;

///
/// The application entry point.
///
fn main() {
    let exit_code = match Arguments::try_parse()
        .map_err(|error| anyhow::anyhow!(error))
        .and_then(main_inner)
    {
        Ok(()) => devbench::EXIT_CODE_SUCCESS,
        Err(error) => {
            eprintln!("{error:?}");
            devbench::EXIT_CODE_FAILURE
        }
    };
    std::process::exit(exit_code);
}

///
/// The entry point wrapper used for proper error handling.
///
fn main_inner(arguments: Arguments) -> anyhow::Result<()> {
    if !arguments.quiet {
        eprintln!(
            "    {} {} v{}",
            "Starting".bright_green().bold(),
            env!("CARGO_PKG_DESCRIPTION"),
            env!("CARGO_PKG_VERSION"),
        );
    }

    let git = devbench::Git::new()?;
    let config = devbench::Config::default();

    let stopwatch =
        devbench::Driver::new(config, git, arguments.verbose, arguments.quiet).run()?;
    println!("{}", stopwatch.render()?);

    Ok(())
}
