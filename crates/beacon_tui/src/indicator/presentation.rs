//! Presentation tables: tool identity/category → icon and accent color,
//! execution status → glyph and color.
//!
//! Every lookup is total — unknown tool names, absent categories, and
//! absent statuses all map to defined defaults, never to an error.

use serde::{Deserialize, Serialize};

use crate::theme::{BeaconPalette, Rgb};

/// Cosmetic classification of a tool. Controls the icon accent color only;
/// unrelated to execution outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToolCategory {
    Read,
    Write,
    Command,
    Network,
}

/// Execution state of a tool call. Drives glyph, color, and animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExecutionStatus {
    Pending,
    Running,
    Completed,
    Error,
}

/// Accent blue for network tools. Not a palette role; fixed across themes.
pub const NETWORK_BLUE: Rgb = Rgb(74, 144, 226);

/// Icon for a tool name. Unknown names (including empty) get the generic 🔧.
/// `bash`/`ls` are accepted as producer spellings of `command`/`list`.
pub fn tool_icon(tool_name: &str) -> &'static str {
    match tool_name {
        "read" => "📖",
        "write" => "✏️",
        "edit" => "📝",
        "command" | "bash" => "💻",
        "fetch" => "🌐",
        "glob" => "🔍",
        "grep" => "🔎",
        "list" | "ls" => "📁",
        "todo" => "✅",
        _ => "🔧",
    }
}

/// Accent color for a tool category. Command reuses the danger hue as an
/// accent only; it does not mark an error state.
pub fn category_color(category: Option<ToolCategory>, palette: &BeaconPalette) -> Rgb {
    match category {
        Some(ToolCategory::Read) => palette.success,
        Some(ToolCategory::Write) => palette.warning,
        Some(ToolCategory::Command) => palette.danger,
        Some(ToolCategory::Network) => NETWORK_BLUE,
        None => palette.tool,
    }
}

/// Status glyph. Absent status renders nothing.
pub fn status_glyph(status: Option<ExecutionStatus>) -> &'static str {
    match status {
        Some(ExecutionStatus::Pending) => "⏳",
        Some(ExecutionStatus::Running) => "🔄",
        Some(ExecutionStatus::Completed) => "✅",
        Some(ExecutionStatus::Error) => "❌",
        None => "",
    }
}

/// Status color: pending→warning, running→info, completed→success,
/// error→danger, absent→tool accent.
pub fn status_color(status: Option<ExecutionStatus>, palette: &BeaconPalette) -> Rgb {
    match status {
        Some(ExecutionStatus::Pending) => palette.warning,
        Some(ExecutionStatus::Running) => palette.info,
        Some(ExecutionStatus::Completed) => palette.success,
        Some(ExecutionStatus::Error) => palette.danger,
        None => palette.tool,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_tool_icons() {
        assert_eq!(tool_icon("read"), "📖");
        assert_eq!(tool_icon("fetch"), "🌐");
        assert_eq!(tool_icon("todo"), "✅");
    }

    #[test]
    fn unknown_tool_gets_generic_icon() {
        assert_eq!(tool_icon("unknownTool"), "🔧");
        assert_eq!(tool_icon(""), "🔧");
        assert_eq!(tool_icon("Read"), "🔧"); // lookup is case-sensitive
    }

    #[test]
    fn producer_spellings_alias() {
        assert_eq!(tool_icon("bash"), tool_icon("command"));
        assert_eq!(tool_icon("ls"), tool_icon("list"));
    }

    #[test]
    fn category_colors_cover_all_inputs() {
        let palette = BeaconPalette::beacon_dark();
        assert_eq!(category_color(Some(ToolCategory::Read), &palette), palette.success);
        assert_eq!(category_color(Some(ToolCategory::Write), &palette), palette.warning);
        assert_eq!(category_color(Some(ToolCategory::Command), &palette), palette.danger);
        assert_eq!(category_color(Some(ToolCategory::Network), &palette), NETWORK_BLUE);
        assert_eq!(category_color(None, &palette), palette.tool);
    }

    #[test]
    fn network_blue_is_fixed_across_themes() {
        let dark = BeaconPalette::beacon_dark();
        let light = BeaconPalette::beacon_light();
        assert_eq!(
            category_color(Some(ToolCategory::Network), &dark),
            category_color(Some(ToolCategory::Network), &light)
        );
    }

    #[test]
    fn status_glyphs_total() {
        assert_eq!(status_glyph(Some(ExecutionStatus::Pending)), "⏳");
        assert_eq!(status_glyph(Some(ExecutionStatus::Running)), "🔄");
        assert_eq!(status_glyph(Some(ExecutionStatus::Completed)), "✅");
        assert_eq!(status_glyph(Some(ExecutionStatus::Error)), "❌");
        assert_eq!(status_glyph(None), "");
    }

    #[test]
    fn absent_status_uses_tool_accent() {
        let palette = BeaconPalette::beacon_dark();
        assert_eq!(status_color(None, &palette), palette.tool);
    }

    #[test]
    fn enums_serialize_lowercase() {
        assert_eq!(
            serde_json::to_string(&ToolCategory::Network).unwrap(),
            "\"network\""
        );
        assert_eq!(
            serde_json::from_str::<ExecutionStatus>("\"running\"").unwrap(),
            ExecutionStatus::Running
        );
    }
}
