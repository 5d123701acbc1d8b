//! Beacon palette: semantic color roles (surfaces, borders, text, semantic, tool).
//!
//! Every color the indicator feed draws comes from here. The tool roles
//! (tool, tool_description, tool_result) color the indicator label,
//! parenthesized description, and result line; the semantic roles
//! (danger, success, warning, info) back the status and category maps.

use super::Appearance;
use super::rgb::Rgb;

/// One full palette for an appearance (dark or light). All colors are semantic roles.
#[derive(Clone, Debug, PartialEq)]
pub struct BeaconPalette {
    // --- Surfaces
    /// App / window background.
    pub background: Rgb,
    /// Header and footer strips.
    pub surface_background: Rgb,

    // --- Borders
    pub border: Rgb,
    pub border_variant: Rgb,
    pub border_focused: Rgb,

    // --- Text
    pub text: Rgb,
    pub text_muted: Rgb,
    pub text_disabled: Rgb,

    // --- Semantic
    pub accent: Rgb,
    pub danger: Rgb,
    pub success: Rgb,
    pub warning: Rgb,
    pub info: Rgb,

    // --- Tool indicator roles
    /// Tool label and fallback accent when no category/status applies.
    pub tool: Rgb,
    /// Parenthesized description after the label.
    pub tool_description: Rgb,
    /// Result continuation line (↳ marker and success message).
    pub tool_result: Rgb,
}

impl BeaconPalette {
    /// Default beacon dark palette.
    pub fn beacon_dark() -> Self {
        Self {
            background: Rgb(12, 13, 18),
            surface_background: Rgb(20, 22, 30),
            border: Rgb(34, 37, 50),
            border_variant: Rgb(27, 29, 40),
            border_focused: Rgb(110, 168, 254),
            text: Rgb(214, 220, 240),
            text_muted: Rgb(118, 127, 156),
            text_disabled: Rgb(72, 78, 102),
            accent: Rgb(110, 168, 254),
            danger: Rgb(242, 104, 116),
            success: Rgb(108, 210, 134),
            warning: Rgb(235, 188, 90),
            info: Rgb(96, 202, 230),
            tool: Rgb(111, 194, 146),
            tool_description: Rgb(130, 138, 168),
            tool_result: Rgb(136, 178, 186),
        }
    }

    /// Default beacon light palette.
    pub fn beacon_light() -> Self {
        Self {
            background: Rgb(255, 255, 255),
            surface_background: Rgb(248, 249, 251),
            border: Rgb(226, 228, 235),
            border_variant: Rgb(238, 240, 245),
            border_focused: Rgb(59, 130, 216),
            text: Rgb(30, 34, 46),
            text_muted: Rgb(110, 118, 144),
            text_disabled: Rgb(168, 174, 192),
            accent: Rgb(59, 130, 216),
            danger: Rgb(205, 56, 70),
            success: Rgb(42, 150, 84),
            warning: Rgb(182, 128, 28),
            info: Rgb(26, 144, 178),
            tool: Rgb(34, 138, 92),
            tool_description: Rgb(122, 130, 156),
            tool_result: Rgb(86, 128, 138),
        }
    }

    /// Palette for the given appearance.
    pub fn for_appearance(appearance: Appearance) -> Self {
        match appearance {
            Appearance::Dark => Self::beacon_dark(),
            Appearance::Light => Self::beacon_light(),
        }
    }
}
