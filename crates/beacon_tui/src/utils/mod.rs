//! Shared utilities for the beacon TUI.
//!
//! - **[constants]** — Spacing and padding constants.
//! - **[format]** — Display-width measurement and truncation.
//! - **[layout]** — Rect padding and scroll clamping.

mod constants;
mod format;
mod layout;

pub use constants::*;
pub use format::{display_width, truncate_ellipsis};
pub use layout::{clamp_scroll, horizontal_padding, horizontal_padding_with};
