//!
//! The working tree modification.
//!

use std::collections::VecDeque;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;
use std::path::PathBuf;

///
/// The working tree modification error.
///
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The directory cannot be listed.
    #[error("Listing directory {path:?}: {error}")]
    Listing {
        /// The underlying IO error.
        error: std::io::Error,
        /// The directory path.
        path: PathBuf,
    },
    /// The file cannot be appended to.
    #[error("Appending to file {path:?}: {error}")]
    Appending {
        /// The underlying IO error.
        error: std::io::Error,
        /// The file path.
        path: PathBuf,
    },
}

///
/// Appends `content` to every file under `root`, visiting directories breadth-first.
///
/// Entries whose names start with a dot are skipped at every depth, and hidden
/// directories are never descended into. The existing file bytes are left untouched.
///
/// Returns the number of modified files.
///
pub fn append_to_all_files(root: &Path, content: &[u8]) -> Result<usize, Error> {
    let mut queue = VecDeque::from([root.to_owned()]);
    let mut modified = 0;

    while let Some(directory) = queue.pop_front() {
        let entries = std::fs::read_dir(directory.as_path()).map_err(|error| Error::Listing {
            error,
            path: directory.clone(),
        })?;
        for entry in entries {
            let entry = entry.map_err(|error| Error::Listing {
                error,
                path: directory.clone(),
            })?;
            if super::is_hidden(entry.file_name().as_os_str()) {
                continue;
            }

            let path = entry.path();
            if path.is_file() {
                OpenOptions::new()
                    .append(true)
                    .open(path.as_path())
                    .and_then(|mut file| file.write_all(content))
                    .map_err(|error| Error::Appending {
                        error,
                        path: path.clone(),
                    })?;
                modified += 1;
            } else if path.is_dir() {
                queue.push_back(path);
            }
        }
    }

    Ok(modified)
}
