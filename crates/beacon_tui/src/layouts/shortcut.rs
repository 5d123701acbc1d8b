//! Shortcut hint line: fixed muted line in the footer, context-aware.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};

use super::style::text_muted_style;
use crate::theme::BeaconPalette;
use crate::utils::horizontal_padding;

/// Rect for the shortcut line, padded to align with the feed content above.
pub fn shortcut_inner_rect(area: Rect) -> Rect {
    horizontal_padding(area)
}

/// Build the shortcut line for the footer:
/// - While tools run: "Running…  ·  q: quit"
/// - Otherwise: "↑↓: scroll  ·  q: quit  ·  Ctrl+C: quit"
pub fn shortcut_line(palette: &BeaconPalette, any_running: bool) -> Line<'static> {
    let hint = if any_running {
        "Running…  ·  q: quit"
    } else {
        "↑↓: scroll  ·  q: quit  ·  Ctrl+C: quit"
    };
    Line::from(vec![Span::styled(
        hint.to_string(),
        text_muted_style(palette.text_muted),
    )])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shortcut_line_running() {
        let palette = BeaconPalette::beacon_dark();
        let line = shortcut_line(&palette, true);
        assert!(line.spans.iter().any(|s| s.content.contains("Running")));
    }

    #[test]
    fn shortcut_line_idle() {
        let palette = BeaconPalette::beacon_dark();
        let line = shortcut_line(&palette, false);
        assert!(line.spans.iter().any(|s| s.content.contains("scroll")));
    }

    #[test]
    fn shortcut_inner_rect_zero_width() {
        let inner = shortcut_inner_rect(Rect::new(0, 0, 0, 1));
        assert_eq!(inner.width, 0);
    }
}
