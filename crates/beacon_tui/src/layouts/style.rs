//! Map theme palette to ratatui styles.
//!
//! All colors come from [BeaconPalette]; use these helpers so indicator
//! rows and chrome (borders, backgrounds, text) stay consistent with the
//! theme.
//!
//! [BeaconPalette]: crate::theme::BeaconPalette

use ratatui::style::{Color, Modifier, Style};

use crate::theme::Rgb;

/// Convert theme [Rgb] to ratatui [Color].
#[inline]
pub fn rgb_to_color(rgb: Rgb) -> Color {
    let (r, g, b) = rgb.tuple();
    Color::Rgb(r, g, b)
}

/// Style for borders (border color, no fill).
pub fn border_style(border_rgb: Rgb) -> Style {
    Style::default().fg(rgb_to_color(border_rgb))
}

/// Style for strip backgrounds (header, footer fill).
pub fn background_style(bg_rgb: Rgb) -> Style {
    Style::default().bg(rgb_to_color(bg_rgb))
}

/// Style for primary text (e.g. palette.text).
pub fn text_style(text_rgb: Rgb) -> Style {
    Style::default().fg(rgb_to_color(text_rgb))
}

/// Style for muted/secondary text (e.g. palette.text_muted).
pub fn text_muted_style(text_muted_rgb: Rgb) -> Style {
    Style::default().fg(rgb_to_color(text_muted_rgb))
}

/// Bold style for the tool label on an indicator row.
pub fn label_style(label_rgb: Rgb) -> Style {
    Style::default()
        .fg(rgb_to_color(label_rgb))
        .add_modifier(Modifier::BOLD)
}

/// Style for success state (e.g. tool completed).
pub fn success_style(success_rgb: Rgb) -> Style {
    Style::default().fg(rgb_to_color(success_rgb))
}

/// Style for error/danger state (e.g. tool failed).
pub fn danger_style(danger_rgb: Rgb) -> Style {
    Style::default().fg(rgb_to_color(danger_rgb))
}

/// Style for warning state (e.g. tool pending).
pub fn warning_style(warning_rgb: Rgb) -> Style {
    Style::default().fg(rgb_to_color(warning_rgb))
}

/// Style for info state (e.g. tool running).
pub fn info_style(info_rgb: Rgb) -> Style {
    Style::default().fg(rgb_to_color(info_rgb))
}
