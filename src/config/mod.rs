// Configuration layer: CLI arguments and the optional branch profile.

#[cfg(feature = "cli")]
pub mod cli;
pub mod profile;

#[cfg(feature = "cli")]
pub use cli::{Cli, Command};
pub use profile::BranchProfile;
