//!
//! The git working tree benchmark library.
//!

pub mod archive;
pub mod config;
pub mod driver;
pub mod filesystem;
pub mod git;
pub mod stopwatch;
pub mod trial;

pub use self::config::Config;
pub use self::driver::Driver;
pub use self::git::Git;
pub use self::stopwatch::error::Error as StopwatchError;
pub use self::stopwatch::statistics::Statistics;
pub use self::stopwatch::Stopwatch;
pub use self::trial::step::Step;
pub use self::trial::Trial;

/// The process exit code on success.
pub const EXIT_CODE_SUCCESS: i32 = 0;

/// The process exit code on failure.
pub const EXIT_CODE_FAILURE: i32 = 1;
