//! Rect helpers for the feed layout.

use ratatui::layout::Rect;

use crate::utils::constants::HORIZONTAL_PADDING;

/// Apply horizontal padding to a Rect (symmetric left/right).
#[inline]
pub fn horizontal_padding(area: Rect) -> Rect {
    horizontal_padding_with(area, HORIZONTAL_PADDING)
}

/// Apply horizontal padding with a custom amount.
#[inline]
pub fn horizontal_padding_with(area: Rect, pad: u16) -> Rect {
    Rect {
        x: area.x.saturating_add(pad),
        y: area.y,
        width: area.width.saturating_sub(pad.saturating_mul(2)),
        height: area.height,
    }
}

/// Clamp a scroll offset so content never scrolls past its end.
/// Max offset is content_height - viewport_height (last line can sit at the bottom).
pub fn clamp_scroll(offset: usize, content_height: usize, viewport_height: usize) -> usize {
    let max_offset = content_height.saturating_sub(viewport_height);
    offset.min(max_offset)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn padding_shrinks_width_only() {
        let area = Rect::new(0, 0, 80, 20);
        let inner = horizontal_padding(area);
        assert_eq!(inner.width, 80 - 2 * HORIZONTAL_PADDING);
        assert_eq!(inner.height, 20);
    }

    #[test]
    fn padding_zero_area() {
        let inner = horizontal_padding(Rect::new(0, 0, 0, 0));
        assert_eq!(inner.width, 0);
    }

    #[test]
    fn clamp_scroll_content_fits() {
        assert_eq!(clamp_scroll(7, 10, 20), 0);
    }

    #[test]
    fn clamp_scroll_overflow() {
        assert_eq!(clamp_scroll(100, 50, 20), 30);
    }
}
