//!
//! The recursive removal with permission recovery.
//!

use std::io::ErrorKind;
use std::path::Path;
use std::path::PathBuf;

///
/// The recursive removal error.
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
    /// The entry cannot be removed.
    #[error("Removing {path:?}: {error}")]
    Removing {
        /// The underlying IO error.
        error: std::io::Error,
        /// The entry path.
        path: PathBuf,
    },
    /// The write protection of the entry cannot be cleared.
    #[error("Clearing write protection of {path:?}: {error}")]
    Unprotecting {
        /// The underlying IO error.
        error: std::io::Error,
        /// The entry path.
        path: PathBuf,
    },
}

///
/// Removes the directory at `path` with all its contents.
///
/// If removing an entry is denied, its write protection is cleared and the removal of the
/// same entry is retried once. Any other failure aborts the removal.
///
pub fn remove_dir_all(path: &Path) -> Result<(), Error> {
    let entries = std::fs::read_dir(path).map_err(|error| Error::Listing {
        error,
        path: path.to_owned(),
    })?;
    for entry in entries {
        let entry = entry.map_err(|error| Error::Listing {
            error,
            path: path.to_owned(),
        })?;
        let entry_path = entry.path();
        let file_type = entry.file_type().map_err(|error| Error::Listing {
            error,
            path: entry_path.clone(),
        })?;

        if file_type.is_dir() {
            remove_dir_all(entry_path.as_path())?;
        } else {
            remove_with_retry(entry_path.as_path(), |path| std::fs::remove_file(path))?;
        }
    }
    remove_with_retry(path, |path| std::fs::remove_dir(path))
}

///
/// Removes the directory at `path` if it exists.
///
/// Returns whether anything has been removed.
///
pub fn remove_dir_all_if_exists(path: &Path) -> Result<bool, Error> {
    match std::fs::symlink_metadata(path) {
        Ok(metadata) if metadata.is_dir() => remove_dir_all(path).map(|()| true),
        Ok(_) => remove_with_retry(path, |path| std::fs::remove_file(path)).map(|()| true),
        Err(error) if error.kind() == ErrorKind::NotFound => Ok(false),
        Err(error) => Err(Error::Listing {
            error,
            path: path.to_owned(),
        }),
    }
}

///
/// Runs `remove` on `path`, clearing the write protection and retrying once on a
/// permission error.
///
fn remove_with_retry<F>(path: &Path, remove: F) -> Result<(), Error>
where
    F: Fn(&Path) -> std::io::Result<()>,
{
    match remove(path) {
        Ok(()) => Ok(()),
        Err(error) if error.kind() == ErrorKind::PermissionDenied => {
            clear_write_protection(path).map_err(|error| Error::Unprotecting {
                error,
                path: path.to_owned(),
            })?;
            remove(path).map_err(|error| Error::Removing {
                error,
                path: path.to_owned(),
            })
        }
        Err(error) => Err(Error::Removing {
            error,
            path: path.to_owned(),
        }),
    }
}

///
/// Grants the owner write access to the entry.
///
/// Symbolic links are left as is: setting their permissions changes the target.
///
pub fn clear_write_protection(path: &Path) -> std::io::Result<()> {
    let metadata = std::fs::symlink_metadata(path)?;
    if metadata.file_type().is_symlink() {
        return Ok(());
    }
    let mut permissions = metadata.permissions();

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        permissions.set_mode(permissions.mode() | 0o200);
    }
    #[cfg(not(unix))]
    #[allow(clippy::permissions_set_readonly_false)]
    permissions.set_readonly(false);

    std::fs::set_permissions(path, permissions)
}
