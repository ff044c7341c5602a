//! Version source implementations

mod git;

pub use git::GitVersionSource;
