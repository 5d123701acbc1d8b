//! Paired tool indicator: invocation row plus an optional result row.
//!
//! Row 1 shows exactly one outcome glyph, running > error > success >
//! none. The result row appears only once the tool has a result and is no
//! longer running; a stale result stays hidden while a re-run is active.

use ratatui::text::{Line, Span};

use crate::animation::{DOTS_FRAMES, DotsAnimation};
use crate::layouts::{danger_style, label_style, success_style, text_muted_style, text_style};
use crate::theme::BeaconPalette;
use crate::utils::{LEFT_PADDING, RESULT_INDENT};

use super::presentation::{ToolCategory, category_color, tool_icon};

/// Result-line text when the call failed.
pub const RESULT_FAILED: &str = "Execution failed";

/// Result-line text when the call completed without error.
pub const RESULT_COMPLETED: &str = "Completed successfully";

/// A two-phase tool call (invocation → result) to show in the feed.
///
/// The three flags are taken as given; no combination is rejected here.
/// The producer owns their consistency.
#[derive(Debug, Clone)]
pub struct ToolPairIndicator {
    pub tool_name: String,
    /// Overrides the raw tool name for the label when present.
    pub display_name: Option<String>,
    /// Short human text shown in parentheses after the label.
    pub description: Option<String>,
    pub category: Option<ToolCategory>,
    /// A result has arrived for this call.
    pub has_result: bool,
    /// The call is currently executing.
    pub is_running: bool,
    /// The call failed.
    pub has_error: bool,
}

impl ToolPairIndicator {
    /// Pair with only a tool name; all flags off.
    pub fn new(tool_name: impl Into<String>) -> Self {
        Self {
            tool_name: tool_name.into(),
            display_name: None,
            description: None,
            category: None,
            has_result: false,
            is_running: false,
            has_error: false,
        }
    }

    /// Pair in the running phase.
    pub fn running(tool_name: impl Into<String>) -> Self {
        Self {
            is_running: true,
            ..Self::new(tool_name)
        }
    }

    /// Pair with a successful result.
    pub fn succeeded(tool_name: impl Into<String>) -> Self {
        Self {
            has_result: true,
            ..Self::new(tool_name)
        }
    }

    /// Pair with a failed result.
    pub fn failed(tool_name: impl Into<String>) -> Self {
        Self {
            has_result: true,
            has_error: true,
            ..Self::new(tool_name)
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

    pub fn with_category(mut self, category: ToolCategory) -> Self {
        self.category = Some(category);
        self
    }

    /// Label text: display name when present, else the raw tool name.
    pub fn label(&self) -> &str {
        self.display_name.as_deref().unwrap_or(&self.tool_name)
    }
}

/// Build the feed lines for a paired indicator: the invocation row, then
/// the result row when one should be visible.
pub fn pair_lines(
    msg: &ToolPairIndicator,
    palette: &BeaconPalette,
    dots: Option<&DotsAnimation>,
) -> Vec<Line<'static>> {
    let accent = category_color(msg.category, palette);

    let mut row: Vec<Span<'static>> = vec![Span::raw(LEFT_PADDING)];
    row.push(Span::styled(
        format!("{} ", tool_icon(&msg.tool_name)),
        text_style(accent),
    ));
    row.push(Span::styled(msg.label().to_string(), label_style(palette.tool)));

    // Exactly one outcome glyph: running wins over error, error over success.
    if msg.is_running {
        let frame = dots.map(DotsAnimation::frame).unwrap_or(DOTS_FRAMES[0]);
        row.push(Span::raw(" "));
        row.push(Span::styled(format!("🔄 {}", frame), text_style(palette.info)));
    } else if msg.has_error {
        row.push(Span::raw(" "));
        row.push(Span::styled("❌".to_string(), danger_style(palette.danger)));
    } else if msg.has_result {
        row.push(Span::raw(" "));
        row.push(Span::styled("✅".to_string(), success_style(palette.success)));
    }

    if let Some(desc) = &msg.description {
        row.push(Span::raw(" "));
        row.push(Span::styled(
            format!("({})", desc),
            text_muted_style(palette.tool_description),
        ));
    }

    let mut lines = vec![Line::from(row)];

    // Result row: only once settled. A running re-run hides the stale result.
    if msg.has_result && !msg.is_running {
        let (text, style) = if msg.has_error {
            (RESULT_FAILED, danger_style(palette.danger))
        } else {
            (RESULT_COMPLETED, text_style(palette.tool_result))
        };
        lines.push(Line::from(vec![
            Span::raw(RESULT_INDENT),
            Span::styled("↳ ".to_string(), text_style(palette.tool_result)),
            Span::styled(text.to_string(), style),
        ]));
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line_text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    fn render(msg: &ToolPairIndicator) -> Vec<String> {
        let palette = BeaconPalette::beacon_dark();
        pair_lines(msg, &palette, None).iter().map(line_text).collect()
    }

    #[test]
    fn running_shows_dots_and_no_result_row() {
        let lines = render(&ToolPairIndicator::running("command"));
        assert_eq!(lines.len(), 1);
        assert!(lines[0].contains("🔄"));
        assert!(lines[0].contains('.'));
    }

    #[test]
    fn success_shows_check_and_result_row() {
        let lines = render(&ToolPairIndicator::succeeded("read"));
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("✅"));
        assert!(lines[1].contains('↳'));
        assert!(lines[1].contains(RESULT_COMPLETED));
    }

    #[test]
    fn error_shows_cross_and_failure_row() {
        let lines = render(&ToolPairIndicator::failed("command"));
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("❌"));
        assert!(lines[1].contains(RESULT_FAILED));
    }

    #[test]
    fn running_wins_over_error_and_result() {
        // All three flags set: row 1 shows the running glyph, row 2 is absent.
        let msg = ToolPairIndicator {
            has_result: true,
            has_error: true,
            is_running: true,
            ..ToolPairIndicator::new("command")
        };
        let lines = render(&msg);
        assert_eq!(lines.len(), 1);
        assert!(lines[0].contains("🔄"));
        assert!(!lines[0].contains("❌"));
    }

    #[test]
    fn error_wins_over_success() {
        let msg = ToolPairIndicator {
            has_result: true,
            has_error: true,
            ..ToolPairIndicator::new("write")
        };
        let lines = render(&msg);
        assert!(lines[0].contains("❌"));
        assert!(!lines[0].contains("✅"));
        assert!(lines[1].contains(RESULT_FAILED));
    }

    #[test]
    fn error_without_result_has_no_result_row() {
        // Inconsistent producer flags are rendered as given, not rejected.
        let msg = ToolPairIndicator {
            has_error: true,
            ..ToolPairIndicator::new("grep")
        };
        let lines = render(&msg);
        assert_eq!(lines.len(), 1);
        assert!(lines[0].contains("❌"));
    }

    #[test]
    fn neutral_pair_has_no_glyph() {
        let lines = render(&ToolPairIndicator::new("glob"));
        assert_eq!(lines.len(), 1);
        for glyph in ["🔄", "✅", "❌"] {
            assert!(!lines[0].contains(glyph));
        }
    }

    #[test]
    fn description_renders_after_glyph() {
        let msg = ToolPairIndicator::succeeded("read").with_description("Cargo.toml");
        let lines = render(&msg);
        assert!(lines[0].contains("(Cargo.toml)"));
        let glyph_pos = lines[0].find("✅").unwrap();
        let desc_pos = lines[0].find("(Cargo.toml)").unwrap();
        assert!(glyph_pos < desc_pos);
    }

    #[test]
    fn result_row_is_indented() {
        let lines = render(&ToolPairIndicator::succeeded("read"));
        assert!(lines[1].starts_with(RESULT_INDENT));
    }

    #[test]
    fn dots_frame_follows_animation_phase() {
        let palette = BeaconPalette::beacon_dark();
        let mut dots = DotsAnimation::new();
        dots.advance();
        dots.advance(); // "..."
        let msg = ToolPairIndicator::running("fetch");
        let lines = pair_lines(&msg, &palette, Some(&dots));
        assert!(line_text(&lines[0]).contains("🔄 ..."));
    }
}
