//!
//! The benchmark driver.
//!

use std::time::Duration;
use std::time::Instant;

use colored::Colorize;

use crate::config::Config;
use crate::git::Git;
use crate::stopwatch::Stopwatch;
use crate::trial::Trial;

///
/// The benchmark driver.
///
/// Runs an untimed warm-up trial followed by the timed ones, strictly one after another.
///
#[derive(Debug)]
pub struct Driver {
    /// The benchmark configuration.
    config: Config,
    /// The `git` executable.
    git: Git,
    /// Whether the trial durations are reported.
    verbose: bool,
    /// Whether the progress output is suppressed.
    quiet: bool,
}

impl Driver {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(config: Config, git: Git, verbose: bool, quiet: bool) -> Self {
        Self {
            config,
            git,
            verbose,
            quiet,
        }
    }

    ///
    /// Runs the benchmark, returning the stopwatch with the timed trials samples.
    ///
    pub fn run(&self) -> anyhow::Result<Stopwatch> {
        let trial = Trial::new(&self.config, &self.git);
        let run_time_start = Instant::now();

        if !self.quiet {
            eprintln!(
                "     {} with {:?}",
                "Warming".bright_green().bold(),
                self.config.reference_archive_path,
            );
        }
        let mut warm_up = Stopwatch::default();
        let trial_start = Instant::now();
        let modified = trial.run(&mut warm_up)?;
        self.report_trial(0, modified, trial_start.elapsed());

        if !self.quiet {
            eprintln!(
                "     {} {} trials in {:?}",
                "Running".bright_green().bold(),
                self.config.trial_count,
                self.config.working_directory,
            );
        }
        let mut stopwatch = Stopwatch::default();
        for index in 1..=self.config.trial_count {
            let trial_start = Instant::now();
            let modified = trial.run(&mut stopwatch)?;
            self.report_trial(index, modified, trial_start.elapsed());
        }

        if !self.quiet {
            let elapsed = run_time_start.elapsed().as_secs();
            eprintln!(
                "    {} {} trials in {}m{:02}s",
                "Finished".bright_green().bold(),
                self.config.trial_count,
                elapsed / 60,
                elapsed % 60,
            );
        }
        Ok(stopwatch)
    }

    ///
    /// Prints the trial outcome unless the output is suppressed.
    ///
    fn report_trial(&self, index: usize, modified: usize, elapsed: Duration) {
        if let Some(message) = self.trial_message(index, modified, elapsed) {
            eprintln!("{message}");
        }
    }

    ///
    /// Formats the trial outcome. The warm-up trial has index 0.
    ///
    fn trial_message(&self, index: usize, modified: usize, elapsed: Duration) -> Option<String> {
        if self.quiet {
            return None;
        }
        let name = if index == 0 {
            "warm-up".to_owned()
        } else {
            format!("{index}/{}", self.config.trial_count)
        };
        let mut message = format!(
            "    {} {modified} files in trial {name}",
            "Modified".bright_green().bold(),
        );
        if self.verbose {
            message.push_str(format!(" ({:.3}s)", elapsed.as_secs_f64()).as_str());
        }
        Some(message)
    }
}
