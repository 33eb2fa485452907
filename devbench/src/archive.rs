//!
//! The reference archive.
//!

use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::path::PathBuf;

///
/// The reference archive error.
///
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The archive file cannot be opened.
    #[error("Opening archive {path:?}: {error}")]
    Opening {
        /// The underlying IO error.
        error: std::io::Error,
        /// The path to the archive.
        path: PathBuf,
    },
    /// The archive is not a readable zip file.
    #[error("Reading archive {path:?}: {error}")]
    Reading {
        /// The underlying zip error.
        error: zip::result::ZipError,
        /// The path to the archive.
        path: PathBuf,
    },
    /// An entry cannot be written to the destination directory.
    #[error("Extracting archive entry to {path:?}: {error}")]
    Writing {
        /// The underlying IO error.
        error: std::io::Error,
        /// The path to the extracted entry.
        path: PathBuf,
    },
}

///
/// Extracts all entries of the zip archive at `path` into `destination`, preserving
/// their relative paths.
///
/// Entry names are sanitized rather than rejected: root, prefix, `.` and `..` components
/// are dropped, so nothing is written outside of `destination`.
///
/// Returns the number of extracted files.
///
pub fn extract(path: &Path, destination: &Path) -> Result<usize, Error> {
    let file = File::open(path).map_err(|error| Error::Opening {
        error,
        path: path.to_owned(),
    })?;
    let mut archive =
        zip::ZipArchive::new(BufReader::new(file)).map_err(|error| Error::Reading {
            error,
            path: path.to_owned(),
        })?;

    std::fs::create_dir_all(destination).map_err(|error| Error::Writing {
        error,
        path: destination.to_owned(),
    })?;

    let mut files = 0;
    for index in 0..archive.len() {
        let mut entry = archive.by_index(index).map_err(|error| Error::Reading {
            error,
            path: path.to_owned(),
        })?;
        let relative_path = entry.mangled_name();
        if relative_path.as_os_str().is_empty() {
            continue;
        }
        let entry_path = destination.join(relative_path);

        if entry.is_dir() {
            std::fs::create_dir_all(entry_path.as_path()).map_err(|error| Error::Writing {
                error,
                path: entry_path,
            })?;
            continue;
        }

        if let Some(parent) = entry_path.parent() {
            std::fs::create_dir_all(parent).map_err(|error| Error::Writing {
                error,
                path: parent.to_owned(),
            })?;
        }
        let mut output = File::create(entry_path.as_path()).map_err(|error| Error::Writing {
            error,
            path: entry_path.clone(),
        })?;
        std::io::copy(&mut entry, &mut output).map_err(|error| Error::Writing {
            error,
            path: entry_path,
        })?;
        files += 1;
    }

    Ok(files)
}
