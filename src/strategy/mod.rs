//! Version resolution strategies
//!
//! Each strategy turns project state into a version string or a typed
//! failure. They do not talk to the host; reporting is the dispatcher's job.

pub mod file;
pub mod git_tag;
pub mod init;
pub mod module_name;
pub mod python;

pub use file::resolve_file_version;
pub use git_tag::{resolve_git_tag_version, GitCommand, GitOutput, SystemGit};
pub use init::{locate_init_file, read_init_version};
