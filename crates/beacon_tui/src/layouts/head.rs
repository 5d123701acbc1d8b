//! Header strip: title left, right-aligned activity status with colored dot.

use ratatui::Frame;
use ratatui::style::Modifier;
use ratatui::text::Span;
use ratatui::{
    layout::Rect,
    text::Line,
    widgets::{Block, Borders, Paragraph},
};

use super::style::{
    background_style, border_style, danger_style, info_style, success_style, text_muted_style,
    text_style,
};
use crate::theme::BeaconPalette;
use crate::utils::{display_width, horizontal_padding};

/// Layout for the header: outer area and padded inner rect for content.
#[derive(Debug, Clone)]
pub struct HeadLayout {
    /// Full header strip (e.g. from [super::split::MainSplits::header]).
    pub area: Rect,
    /// Inner rect with horizontal padding for title and right text.
    pub inner: Rect,
}

impl HeadLayout {
    /// Build from the header [Rect]. Uses [crate::utils::horizontal_padding].
    pub fn new(area: Rect) -> Self {
        let inner = horizontal_padding(area);
        Self { area, inner }
    }
}

/// Default status when no tool is active.
pub const HEADER_STATUS_IDLE: &str = "Idle";

/// Build the header line: title (bold) left, right-aligned status with colored dot.
/// any_running: info dot; has_error: danger dot; else success dot.
pub fn header_line(
    title: &str,
    right: &str,
    any_running: bool,
    has_error: bool,
    palette: &BeaconPalette,
    width: u16,
) -> Line<'static> {
    let title_style = text_style(palette.text).add_modifier(Modifier::BOLD);
    let dot_style = if any_running {
        info_style(palette.info)
    } else if has_error {
        danger_style(palette.danger)
    } else {
        success_style(palette.success)
    };
    let right_style = text_muted_style(palette.text_muted);
    let left_len = display_width(title);
    let right_len = 2 + display_width(right); // "● " + status
    let gap = (width as usize).saturating_sub(left_len + right_len).max(1);
    Line::from(vec![
        Span::styled(title.to_string(), title_style),
        Span::raw(" ".repeat(gap)),
        Span::styled("● ".to_string(), dot_style),
        Span::styled(right.to_string(), right_style),
    ])
}

/// Block for the header bar: full-width background, bottom border on second line.
pub fn block_for_head(palette: &BeaconPalette) -> Block<'static> {
    Block::default()
        .borders(Borders::BOTTOM)
        .border_style(border_style(palette.border))
        .style(background_style(palette.surface_background))
}

/// Draw the header: two-line block (title line, then border), status with colored dot.
pub fn render_header(
    frame: &mut Frame,
    area: Rect,
    palette: &BeaconPalette,
    title: &str,
    status: &str,
    any_running: bool,
    has_error: bool,
) {
    let layout = HeadLayout::new(area);
    let block = block_for_head(palette);
    let line = header_line(
        title,
        status,
        any_running,
        has_error,
        palette,
        layout.inner.width,
    );
    let bg = background_style(palette.surface_background);
    frame.render_widget(block, area);
    frame.render_widget(Paragraph::new(line).style(bg), layout.inner);
}
