//! Beacon theme: semantic color palette for the indicator feed.
//!
//! # Example
//!
//! ```ignore
//! use beacon_tui::theme::{Appearance, BeaconPalette};
//!
//! let palette = BeaconPalette::beacon_dark();
//! let text = palette.text.tuple(); // (r, g, b) for ratatui
//!
//! let palette = BeaconPalette::for_appearance(Appearance::Light);
//! ```

mod appearance;
mod palette;
mod rgb;

pub use appearance::Appearance;
pub use palette::BeaconPalette;
pub use rgb::Rgb;
