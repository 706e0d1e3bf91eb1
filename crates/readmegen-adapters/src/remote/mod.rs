//! Remote-origin adapters.

mod git_cli;
mod static_remote;

pub use git_cli::GitCliRemote;
pub use static_remote::StaticRemote;
