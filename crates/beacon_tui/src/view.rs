//! Feed view: header (fixed top), scrollable indicator feed, footer hints.

use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Paragraph},
};

use crate::layouts::{
    HEADER_STATUS_IDLE, background_style, main_splits_with_padding, render_header,
    shortcut_inner_rect, shortcut_line, text_muted_style, text_style,
};
use crate::indicator;
use crate::state::{FeedItem, FeedState};
use crate::utils::{ITEM_SPACING_LINES, LEFT_PADDING, clamp_scroll, truncate_ellipsis};

/// Title shown in the header.
pub const HEADER_TITLE: &str = "beacon.term";

/// Draw the full feed screen.
pub fn draw(frame: &mut Frame, state: &mut FeedState, area: Rect) {
    let palette = state.palette.clone();
    frame.render_widget(
        Block::default().style(background_style(palette.background)),
        area,
    );

    let splits = main_splits_with_padding(area);

    // ---- Header: title + activity dot ----
    let any_running = state.any_running();
    let has_error = state.any_error();
    let running_count = state
        .items
        .iter()
        .filter(|item| match item {
            FeedItem::Single { indicator, .. } => indicator.is_running(),
            FeedItem::Pair { indicator, .. } => indicator.is_running,
            FeedItem::Separator(_) => false,
        })
        .count();
    let right = if running_count == 1 {
        "1 tool running".to_string()
    } else if running_count > 1 {
        format!("{} tools running", running_count)
    } else if state.finished {
        "Done".to_string()
    } else {
        HEADER_STATUS_IDLE.to_string()
    };
    render_header(
        frame,
        splits.header,
        &palette,
        HEADER_TITLE,
        &right,
        any_running,
        has_error,
    );

    // ---- Body: scrollable indicator feed ----
    let width = splits.body.width as usize;
    let viewport_height = splits.body.height as usize;

    state.sync_animation();
    let dots = state.dots.as_ref();

    let spacer = Line::from("");
    let mut all_lines: Vec<Line> = Vec::new();
    for item in &state.items {
        if !all_lines.is_empty() {
            for _ in 0..ITEM_SPACING_LINES {
                all_lines.push(spacer.clone());
            }
        }
        match item {
            FeedItem::Single {
                indicator: single, ..
            } => {
                all_lines.extend(indicator::indicator_lines(single, &palette, width, dots));
            }
            FeedItem::Pair {
                indicator: pair, ..
            } => {
                all_lines.extend(indicator::pair_lines(pair, &palette, dots));
            }
            FeedItem::Separator(label) => {
                all_lines.push(Line::from(vec![
                    Span::raw(LEFT_PADDING),
                    Span::styled(
                        format!("── {} ──", label),
                        text_muted_style(palette.text_disabled),
                    ),
                ]));
            }
        }
    }

    let content_height = all_lines.len();

    // Scroll clamp: state.scroll is "lines scrolled UP from bottom" (0 = at bottom).
    let max_scroll = content_height.saturating_sub(viewport_height);
    state.scroll = clamp_scroll(state.scroll, content_height, viewport_height);
    state.last_content_height = content_height;
    state.last_viewport_height = viewport_height;

    // Convert to offset from top: scroll=0 → show last lines, scroll=max → show first lines.
    let offset_from_top = max_scroll.saturating_sub(state.scroll);
    let visible: Vec<Line> = all_lines
        .into_iter()
        .skip(offset_from_top)
        .take(viewport_height)
        .collect();

    if state.items.is_empty() {
        // Empty state: waiting for the producer.
        let para = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled(
                HEADER_TITLE.to_string(),
                text_style(palette.text),
            )),
            Line::from(""),
            Line::from(Span::styled(
                "Waiting for tool activity.".to_string(),
                text_muted_style(palette.text_muted),
            )),
        ])
        .alignment(ratatui::layout::Alignment::Center);
        frame.render_widget(para, splits.body);
    } else {
        frame.render_widget(Paragraph::new(visible), splits.body);
    }

    // ---- Footer: status line + shortcut hints ----
    let footer_inner = shortcut_inner_rect(splits.footer);
    let status_line = Line::from(vec![Span::styled(
        truncate_ellipsis(&state.status, footer_inner.width as usize),
        text_muted_style(palette.text_muted),
    )]);
    let footer = Paragraph::new(vec![status_line, shortcut_line(&palette, any_running)]);
    frame.render_widget(footer, footer_inner);
}
