//!
//! The working directory file system operations.
//!

pub mod modify;
pub mod remove;

///
/// Whether the entry name is hidden, that is, starts with a dot.
///
pub fn is_hidden(name: &std::ffi::OsStr) -> bool {
    name.as_encoded_bytes().starts_with(b".")
}
