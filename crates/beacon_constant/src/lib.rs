//! Application metadata constants

pub const NAME: &str = "beacon";
pub const DISPLAY_NAME: &str = "beacon.term";
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const DESCRIPTION: &str = "Live tool-activity indicators for terminal coding agents";
pub const REPO_URL: &str = "https://github.com/beacon-term/beacon";
