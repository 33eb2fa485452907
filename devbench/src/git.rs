//!
//! The `git` executable.
//!

use std::path::Path;
use std::path::PathBuf;
use std::process::Command;
use std::process::Stdio;

///
/// The `git` executable error.
///
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The executable is not found in `${PATH}`.
    #[error("The `{executable}` executable not found in ${{PATH}}: {error}")]
    NotFound {
        /// The executable name.
        executable: String,
        /// The underlying lookup error.
        error: which::Error,
    },
    /// The subprocess cannot be started or waited for.
    #[error("`git {arguments}` subprocess spawning error: {error}")]
    Spawning {
        /// The space-separated subprocess arguments.
        arguments: String,
        /// The underlying IO error.
        error: std::io::Error,
    },
}

///
/// The `git` executable.
///
/// The subprocess output and exit status are always discarded, so a failing command
/// is only noticed through its timing.
///
#[derive(Debug, Clone)]
pub struct Git {
    /// The resolved executable path.
    pub executable: PathBuf,
}

impl Git {
    /// The default executable name.
    pub const DEFAULT_EXECUTABLE_NAME: &'static str = "git";

    ///
    /// Resolves the default executable in `${PATH}`.
    ///
    pub fn new() -> Result<Self, Error> {
        Self::with_executable(Self::DEFAULT_EXECUTABLE_NAME)
    }

    ///
    /// Resolves the specified executable name or path.
    ///
    pub fn with_executable(executable: &str) -> Result<Self, Error> {
        let executable = which::which(executable).map_err(|error| Error::NotFound {
            executable: executable.to_owned(),
            error,
        })?;
        Ok(Self { executable })
    }

    ///
    /// Creates an empty repository at `path`.
    ///
    pub fn init(&self, path: &Path) -> Result<(), Error> {
        let mut command = self.command(None);
        command.arg("init").arg(path);
        Self::run(command)
    }

    ///
    /// Sets a repository-local configuration value.
    ///
    pub fn config(&self, repository: &Path, key: &str, value: &str) -> Result<(), Error> {
        let mut command = self.command(Some(repository));
        command.args(["config", key, value]);
        Self::run(command)
    }

    ///
    /// Stages the whole working tree.
    ///
    pub fn add_all(&self, repository: &Path) -> Result<(), Error> {
        let mut command = self.command(Some(repository));
        command.args(["add", "."]);
        Self::run(command)
    }

    ///
    /// Stages the modified tracked files only.
    ///
    pub fn add_updated(&self, repository: &Path) -> Result<(), Error> {
        let mut command = self.command(Some(repository));
        command.args(["add", "-u"]);
        Self::run(command)
    }

    ///
    /// Commits the staged changes.
    ///
    pub fn commit(&self, repository: &Path, message: &str) -> Result<(), Error> {
        let mut command = self.command(Some(repository));
        command.args(["commit", "-m", message]);
        Self::run(command)
    }

    ///
    /// Stashes the working tree modifications.
    ///
    pub fn stash(&self, repository: &Path) -> Result<(), Error> {
        let mut command = self.command(Some(repository));
        command.arg("stash");
        Self::run(command)
    }

    ///
    /// Re-applies the latest stash entry and drops it.
    ///
    pub fn stash_pop(&self, repository: &Path) -> Result<(), Error> {
        let mut command = self.command(Some(repository));
        command.args(["stash", "pop"]);
        Self::run(command)
    }

    ///
    /// Queries the working tree status.
    ///
    pub fn status(&self, repository: &Path) -> Result<(), Error> {
        let mut command = self.command(Some(repository));
        command.arg("status");
        Self::run(command)
    }

    ///
    /// Creates a command with captured output, run in `directory` if specified.
    ///
    fn command(&self, directory: Option<&Path>) -> Command {
        let mut command = Command::new(self.executable.as_path());
        command.stdin(Stdio::null());
        command.stdout(Stdio::piped());
        command.stderr(Stdio::piped());
        if let Some(directory) = directory {
            command.current_dir(directory);
        }
        command
    }

    ///
    /// Runs the command to completion, discarding its output and exit status.
    ///
    fn run(mut command: Command) -> Result<(), Error> {
        command.output().map_err(|error| Error::Spawning {
            arguments: command
                .get_args()
                .map(|argument| argument.to_string_lossy())
                .collect::<Vec<_>>()
                .join(" "),
            error,
        })?;
        Ok(())
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::Error;
    use super::Git;

    ///
    /// Returns `git` if it is installed.
    ///
    pub(crate) fn git() -> Option<Git> {
        match Git::new() {
            Ok(git) => Some(git),
            Err(error) => {
                eprintln!("Skipping: {error}");
                None
            }
        }
    }

    #[test]
    fn error_not_found() {
        let result = Git::with_executable("git-executable-that-does-not-exist");

        assert!(matches!(result, Err(Error::NotFound { .. })));
    }

    #[test]
    fn init() {
        let Some(git) = git() else {
            return;
        };
        let directory = tempfile::tempdir().expect("Temporary directory creation failed");
        let repository = directory.path().join("testrun");

        git.init(repository.as_path()).expect("Always valid");
        git.config(repository.as_path(), "core.autocrlf", "false")
            .expect("Always valid");

        assert!(repository.join(".git").is_dir());
        let config =
            std::fs::read_to_string(repository.join(".git/config")).expect("Always exists");
        assert!(config.contains("autocrlf = false"));
    }

    #[test]
    fn failing_command_is_ignored() {
        let Some(git) = git() else {
            return;
        };
        let directory = tempfile::tempdir().expect("Temporary directory creation failed");

        git.stash_pop(directory.path())
            .expect("Non-zero exit status must be ignored");
        git.commit(directory.path(), "nothing to commit")
            .expect("Non-zero exit status must be ignored");
    }
}
