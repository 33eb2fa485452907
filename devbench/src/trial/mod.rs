//!
//! The benchmark trial.
//!

pub mod step;

use crate::archive;
use crate::config::Config;
use crate::filesystem;
use crate::git::Git;
use crate::stopwatch::Stopwatch;

use self::step::Step;

///
/// The benchmark trial.
///
/// Runs the fixed sequence of steps against the working directory, recording the duration
/// of every step but the initial reset.
///
#[derive(Debug)]
pub struct Trial<'a> {
    /// The benchmark configuration.
    config: &'a Config,
    /// The `git` executable.
    git: &'a Git,
}

impl<'a> Trial<'a> {
    /// The repository option disabling the line ending conversion.
    pub const AUTOCRLF_KEY: &'static str = "core.autocrlf";

    ///
    /// A shortcut constructor.
    ///
    pub fn new(config: &'a Config, git: &'a Git) -> Self {
        Self { config, git }
    }

    ///
    /// Runs all steps in order.
    ///
    /// Returns the number of files modified by the trial.
    ///
    pub fn run(&self, stopwatch: &mut Stopwatch) -> anyhow::Result<usize> {
        self.reset()?;
        self.unzip(stopwatch)?;
        self.git_init(stopwatch)?;
        self.git_add(stopwatch)?;
        self.git_initial_commit(stopwatch)?;
        let modified = self.modify_all_files(stopwatch)?;
        self.git_stash(stopwatch)?;
        self.git_stash_pop(stopwatch)?;
        self.git_add_modified(stopwatch)?;
        self.git_status(stopwatch)?;
        self.git_second_commit(stopwatch)?;
        self.recursive_remove(stopwatch)?;
        Ok(modified)
    }

    ///
    /// Removes the working directory left by a previous run, if any. Not timed.
    ///
    pub fn reset(&self) -> anyhow::Result<()> {
        filesystem::remove::remove_dir_all_if_exists(self.config.working_directory.as_path())?;
        Ok(())
    }

    ///
    /// Extracts the reference archive into the working directory.
    ///
    pub fn unzip(&self, stopwatch: &mut Stopwatch) -> anyhow::Result<()> {
        stopwatch.measure(Step::Unzip.label(), || {
            archive::extract(
                self.config.reference_archive_path.as_path(),
                self.config.working_directory.as_path(),
            )
        })?;
        Ok(())
    }

    ///
    /// Creates the repository and disables the line ending conversion in it.
    ///
    pub fn git_init(&self, stopwatch: &mut Stopwatch) -> anyhow::Result<()> {
        let directory = self.config.working_directory.as_path();
        stopwatch.measure(Step::GitInit.label(), || {
            self.git.init(directory)?;
            self.git.config(directory, Self::AUTOCRLF_KEY, "false")
        })?;
        Ok(())
    }

    ///
    /// Stages the whole working tree.
    ///
    pub fn git_add(&self, stopwatch: &mut Stopwatch) -> anyhow::Result<()> {
        let directory = self.config.working_directory.as_path();
        stopwatch.measure(Step::GitAdd.label(), || self.git.add_all(directory))?;
        Ok(())
    }

    ///
    /// Commits the extracted tree.
    ///
    pub fn git_initial_commit(&self, stopwatch: &mut Stopwatch) -> anyhow::Result<()> {
        let directory = self.config.working_directory.as_path();
        stopwatch.measure(Step::GitInitialCommit.label(), || {
            self.git
                .commit(directory, self.config.initial_commit_message.as_str())
        })?;
        Ok(())
    }

    ///
    /// Appends the extra content to every non-hidden file of the working tree.
    ///
    /// Returns the number of modified files.
    ///
    pub fn modify_all_files(&self, stopwatch: &mut Stopwatch) -> anyhow::Result<usize> {
        let modified = stopwatch.measure(Step::ModifyAllFiles.label(), || {
            filesystem::modify::append_to_all_files(
                self.config.working_directory.as_path(),
                self.config.extra_content.as_bytes(),
            )
        })?;
        Ok(modified)
    }

    ///
    /// Stashes the working tree modifications.
    ///
    pub fn git_stash(&self, stopwatch: &mut Stopwatch) -> anyhow::Result<()> {
        let directory = self.config.working_directory.as_path();
        stopwatch.measure(Step::GitStash.label(), || self.git.stash(directory))?;
        Ok(())
    }

    ///
    /// Re-applies the stashed modifications.
    ///
    pub fn git_stash_pop(&self, stopwatch: &mut Stopwatch) -> anyhow::Result<()> {
        let directory = self.config.working_directory.as_path();
        stopwatch.measure(Step::GitStashPop.label(), || self.git.stash_pop(directory))?;
        Ok(())
    }

    ///
    /// Stages the modified tracked files.
    ///
    pub fn git_add_modified(&self, stopwatch: &mut Stopwatch) -> anyhow::Result<()> {
        let directory = self.config.working_directory.as_path();
        stopwatch.measure(Step::GitAddModified.label(), || {
            self.git.add_updated(directory)
        })?;
        Ok(())
    }

    ///
    /// Queries the working tree status.
    ///
    pub fn git_status(&self, stopwatch: &mut Stopwatch) -> anyhow::Result<()> {
        let directory = self.config.working_directory.as_path();
        stopwatch.measure(Step::GitStatus.label(), || self.git.status(directory))?;
        Ok(())
    }

    ///
    /// Commits the modifications.
    ///
    pub fn git_second_commit(&self, stopwatch: &mut Stopwatch) -> anyhow::Result<()> {
        let directory = self.config.working_directory.as_path();
        stopwatch.measure(Step::GitSecondCommit.label(), || {
            self.git
                .commit(directory, self.config.second_commit_message.as_str())
        })?;
        Ok(())
    }

    ///
    /// Removes the working directory.
    ///
    pub fn recursive_remove(&self, stopwatch: &mut Stopwatch) -> anyhow::Result<()> {
        stopwatch.measure(Step::RecursiveRemove.label(), || {
            filesystem::remove::remove_dir_all(self.config.working_directory.as_path())
        })?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use crate::config::Config;
    use crate::git::tests::git;
    use crate::stopwatch::Stopwatch;

    use super::Step;
    use super::Trial;

    fn config(root: &Path, entries: &[(&str, &[u8])]) -> Config {
        let reference_archive_path = root.join("reference.zip");
        crate::archive::tests::write_archive(reference_archive_path.as_path(), entries);
        Config {
            reference_archive_path,
            working_directory: root.join("testrun"),
            trial_count: 2,
            ..Config::default()
        }
    }

    #[test]
    fn modifies_readme() {
        let Some(git) = git() else {
            return;
        };
        let directory = tempfile::tempdir().expect("Temporary directory creation failed");
        let config = config(directory.path(), &[("README.md", b"# Reference\n")]);
        let trial = Trial::new(&config, &git);
        let mut stopwatch = Stopwatch::default();

        trial.reset().expect("Reset failed");
        trial.unzip(&mut stopwatch).expect("Unzip failed");
        trial.git_init(&mut stopwatch).expect("Init failed");
        trial.git_add(&mut stopwatch).expect("Add failed");
        trial
            .git_initial_commit(&mut stopwatch)
            .expect("Commit failed");
        let modified = trial
            .modify_all_files(&mut stopwatch)
            .expect("Modification failed");

        assert_eq!(modified, 1);
        let readme =
            std::fs::read(config.working_directory.join("README.md")).expect("Always exists");
        let expected = [b"# Reference\n".as_slice(), config.extra_content.as_bytes()].concat();
        assert_eq!(readme, expected);
        assert!(config.working_directory.join(".git").is_dir());
    }

    #[test]
    fn run() {
        let Some(git) = git() else {
            return;
        };
        let directory = tempfile::tempdir().expect("Temporary directory creation failed");
        let config = config(
            directory.path(),
            &[
                ("README.md", b"# Reference\n"),
                ("packages/react/index.js", b"export {};\n"),
                ("packages/react/.eslintrc.js", b"module.exports = {};\n"),
                (".github/workflows/ci.yml", b"on: push\n"),
            ],
        );
        let trial = Trial::new(&config, &git);
        let mut stopwatch = Stopwatch::default();

        let modified = trial.run(&mut stopwatch).expect("Trial failed");

        assert_eq!(modified, 2);
        assert!(!config.working_directory.exists());
        assert_eq!(
            stopwatch.labels().collect::<Vec<&str>>(),
            Step::ALL.iter().map(Step::label).collect::<Vec<&str>>()
        );
    }

    #[test]
    fn run_twice_over_leftover() {
        let Some(git) = git() else {
            return;
        };
        let directory = tempfile::tempdir().expect("Temporary directory creation failed");
        let config = config(directory.path(), &[("README.md", b"# Reference\n")]);
        std::fs::create_dir_all(config.working_directory.join("leftover/.git"))
            .expect("Always valid");
        std::fs::write(config.working_directory.join("leftover/file.txt"), "stale")
            .expect("Always valid");
        let trial = Trial::new(&config, &git);
        let mut stopwatch = Stopwatch::default();

        trial.run(&mut stopwatch).expect("First trial failed");
        trial.unzip(&mut Stopwatch::default()).expect("Unzip failed");
        trial.run(&mut stopwatch).expect("Second trial failed");

        assert!(!config.working_directory.exists());
        for step in Step::ALL {
            assert_eq!(stopwatch.samples(step.label()).map(<[f64]>::len), Some(2));
        }
        stopwatch.render().expect("Rendering failed");
    }

    #[test]
    fn error_missing_archive() {
        let Some(git) = git() else {
            return;
        };
        let directory = tempfile::tempdir().expect("Temporary directory creation failed");
        let config = Config {
            reference_archive_path: directory.path().join("missing.zip"),
            working_directory: directory.path().join("testrun"),
            ..Config::default()
        };
        let trial = Trial::new(&config, &git);
        let mut stopwatch = Stopwatch::default();

        assert!(trial.run(&mut stopwatch).is_err());
        assert_eq!(
            stopwatch.samples(Step::Unzip.label()).map(<[f64]>::len),
            Some(1)
        );
        assert!(stopwatch.samples(Step::GitInit.label()).is_none());
    }

    #[test]
    fn step_labels() {
        assert_eq!(Step::ALL.len(), 11);
        assert_eq!(Step::GitStashPop.to_string(), "git stash pop");
        assert_eq!(Step::RecursiveRemove.label(), "recursive remove");
    }
}
