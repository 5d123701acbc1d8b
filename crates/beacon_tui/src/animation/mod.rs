//! Animations for the indicator feed.
//!
//! - **[dots]** — Cycling dot suffix for running tools.

mod dots;

pub use dots::{DOTS_FRAMES, DOTS_INTERVAL, DotsAnimation, dots_frame};
