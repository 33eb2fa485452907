//!
//! The timed trial step.
//!

///
/// The timed trial step, in the order of execution.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Extracting the reference archive.
    Unzip,
    /// Creating the repository.
    GitInit,
    /// Staging the extracted tree.
    GitAdd,
    /// Committing the extracted tree.
    GitInitialCommit,
    /// Appending the extra content to every file.
    ModifyAllFiles,
    /// Stashing the modifications.
    GitStash,
    /// Re-applying the stashed modifications.
    GitStashPop,
    /// Staging the modified tracked files.
    GitAddModified,
    /// Querying the working tree status.
    GitStatus,
    /// Committing the modifications.
    GitSecondCommit,
    /// Removing the working directory.
    RecursiveRemove,
}

impl Step {
    /// All steps in the order of execution.
    pub const ALL: [Self; 11] = [
        Self::Unzip,
        Self::GitInit,
        Self::GitAdd,
        Self::GitInitialCommit,
        Self::ModifyAllFiles,
        Self::GitStash,
        Self::GitStashPop,
        Self::GitAddModified,
        Self::GitStatus,
        Self::GitSecondCommit,
        Self::RecursiveRemove,
    ];

    ///
    /// The report label.
    ///
    pub fn label(&self) -> &'static str {
        match self {
            Self::Unzip => "unzip",
            Self::GitInit => "git init",
            Self::GitAdd => "git add",
            Self::GitInitialCommit => "git initial commit",
            Self::ModifyAllFiles => "modify all files",
            Self::GitStash => "git stash",
            Self::GitStashPop => "git stash pop",
            Self::GitAddModified => "git add modified",
            Self::GitStatus => "git status",
            Self::GitSecondCommit => "git second commit",
            Self::RecursiveRemove => "recursive remove",
        }
    }
}

impl std::fmt::Display for Step {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
