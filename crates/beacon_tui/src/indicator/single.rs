//! Single tool indicator: one feed row with icon, label, status glyph,
//! description, and dot suffix while running.
//!
//! A running indicator is framed in a border colored like its status; the
//! border is derived from the status on every call, never stored.

use ratatui::text::{Line, Span};

use crate::animation::{DOTS_FRAMES, DotsAnimation};
use crate::layouts::{label_style, text_muted_style, text_style};
use crate::theme::BeaconPalette;
use crate::utils::{LEFT_PADDING, display_width};

use super::presentation::{
    ExecutionStatus, ToolCategory, category_color, status_color, status_glyph, tool_icon,
};

/// One tool invocation to show in the feed. All fields beyond the tool
/// name are optional and degrade by omission.
#[derive(Debug, Clone)]
pub struct ToolIndicator {
    pub tool_name: String,
    /// Overrides the raw tool name for the label when present.
    pub display_name: Option<String>,
    /// Short human text shown in parentheses after the label.
    pub description: Option<String>,
    pub status: Option<ExecutionStatus>,
    pub category: Option<ToolCategory>,
    /// Dot suffix while running (off unless requested).
    pub animated: bool,
}

impl ToolIndicator {
    /// Indicator with only a tool name; everything else off.
    pub fn new(tool_name: impl Into<String>) -> Self {
        Self {
            tool_name: tool_name.into(),
            display_name: None,
            description: None,
            status: None,
            category: None,
            animated: false,
        }
    }

    pub fn with_display_name(mut self, name: impl Into<String>) -> Self {
        self.display_name = Some(name.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_status(mut self, status: ExecutionStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn with_category(mut self, category: ToolCategory) -> Self {
        self.category = Some(category);
        self
    }

    pub fn animated(mut self) -> Self {
        self.animated = true;
        self
    }

    /// Label text: display name when present, else the raw tool name.
    pub fn label(&self) -> &str {
        self.display_name.as_deref().unwrap_or(&self.tool_name)
    }

    pub fn is_running(&self) -> bool {
        self.status == Some(ExecutionStatus::Running)
    }
}

/// Build the feed lines for one indicator. One line normally; three while
/// running (top rule, framed content row, bottom rule).
///
/// `dots` supplies the animation frame; when absent the suffix falls back
/// to the first frame.
pub fn indicator_lines(
    msg: &ToolIndicator,
    palette: &BeaconPalette,
    width: usize,
    dots: Option<&DotsAnimation>,
) -> Vec<Line<'static>> {
    let accent = category_color(msg.category, palette);
    let glyph = status_glyph(msg.status);
    let s_color = status_color(msg.status, palette);

    let mut row: Vec<Span<'static>> = Vec::new();
    row.push(Span::styled(
        format!("{} ", tool_icon(&msg.tool_name)),
        text_style(accent),
    ));
    row.push(Span::styled(msg.label().to_string(), label_style(palette.tool)));
    if !glyph.is_empty() {
        row.push(Span::raw(" "));
        row.push(Span::styled(glyph.to_string(), text_style(s_color)));
    }
    if let Some(desc) = &msg.description {
        row.push(Span::raw(" "));
        row.push(Span::styled(
            format!("({})", desc),
            text_muted_style(palette.tool_description),
        ));
    }
    if msg.animated && msg.is_running() {
        let frame = dots.map(DotsAnimation::frame).unwrap_or(DOTS_FRAMES[0]);
        row.push(Span::raw(" "));
        row.push(Span::styled(frame.to_string(), text_style(s_color)));
    }

    if !msg.is_running() {
        let mut spans = vec![Span::raw(LEFT_PADDING)];
        spans.extend(row);
        return vec![Line::from(spans)];
    }

    // Running: frame the row, border in the status color.
    let border = text_style(s_color);
    let inner_width = width.saturating_sub(LEFT_PADDING.len());
    let rule_len = inner_width.saturating_sub(2);
    let top = "┌".to_string() + &"─".repeat(rule_len) + "┐";
    let bottom = "└".to_string() + &"─".repeat(rule_len) + "┘";

    let content_width: usize = row.iter().map(|s| display_width(&s.content)).sum();
    // │ + one space each side + │
    let pad = rule_len.saturating_sub(content_width + 2);

    let mut framed = vec![Span::raw(LEFT_PADDING), Span::styled("│ ".to_string(), border)];
    framed.extend(row);
    framed.push(Span::raw(" ".repeat(pad)));
    framed.push(Span::styled(" │".to_string(), border));

    vec![
        Line::from(vec![Span::raw(LEFT_PADDING), Span::styled(top, border)]),
        Line::from(framed),
        Line::from(vec![Span::raw(LEFT_PADDING), Span::styled(bottom, border)]),
    ]
}
