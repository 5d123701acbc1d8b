//! Split the terminal area into header, body, and footer regions.

use ratatui::layout::Rect;

use crate::utils::horizontal_padding;

/// Fixed height for the header (top, two lines: title + border).
pub const HEADER_HEIGHT: u16 = 2;

/// Fixed height for the footer (status line + shortcut line).
pub const FOOTER_HEIGHT: u16 = 2;

/// Regions for the feed layout: header, scrollable body, footer.
#[derive(Debug, Clone)]
pub struct MainSplits {
    /// Top strip (title, activity dot).
    pub header: Rect,
    /// Middle area (indicator feed). May have zero height if area too small.
    pub body: Rect,
    /// Bottom strip (status, shortcut hints).
    pub footer: Rect,
}

/// Split `area` into header (fixed top), body (scrollable middle), footer (fixed bottom).
/// Uses [HEADER_HEIGHT] and [FOOTER_HEIGHT]. Body height = area.height - header - footer.
pub fn main_splits(area: Rect) -> MainSplits {
    let height = area.height;
    let (header_h, footer_h) = (HEADER_HEIGHT, FOOTER_HEIGHT);
    let body_h = height.saturating_sub(header_h + footer_h);

    let header = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: header_h,
    };
    let body = Rect {
        x: area.x,
        y: area.y.saturating_add(header_h),
        width: area.width,
        height: body_h,
    };
    let footer = Rect {
        x: area.x,
        y: area.y.saturating_add(header_h + body_h),
        width: area.width,
        height: footer_h,
    };

    MainSplits {
        header,
        body,
        footer,
    }
}

/// Same as [main_splits] but body is the padded inner area (horizontal padding only).
pub fn main_splits_with_padding(area: Rect) -> MainSplits {
    let raw = main_splits(area);
    MainSplits {
        header: raw.header,
        body: horizontal_padding(raw.body),
        footer: raw.footer,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn main_splits_assigns_regions() {
        let area = Rect::new(0, 0, 80, 24);
        let s = main_splits(area);
        assert_eq!(s.header.height, 2);
        assert_eq!(s.footer.height, 2);
        assert_eq!(s.body.height, 20);
        assert_eq!(s.body.y, 2);
        assert_eq!(s.footer.y, 22);
    }

    #[test]
    fn main_splits_tiny_terminal() {
        let area = Rect::new(0, 0, 80, 3);
        let s = main_splits(area);
        // Body collapses to 0 when the terminal is too small
        assert_eq!(s.body.height, 0);
        assert_eq!(s.header.height, HEADER_HEIGHT);
    }

    #[test]
    fn padded_body_is_narrower() {
        let area = Rect::new(0, 0, 80, 24);
        let s = main_splits_with_padding(area);
        assert!(s.body.width < area.width);
        assert_eq!(s.header.width, area.width);
    }
}
