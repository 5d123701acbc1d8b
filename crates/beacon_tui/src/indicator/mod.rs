//! Tool-activity indicators. Uses crate::theme for colors.
//!
//! - **[presentation]** — Icon, accent-color, and status-glyph tables (total lookups).
//! - **[single]** — One-row indicator with status glyph and running border.
//! - **[pair]** — Invocation row plus optional result row.

pub mod pair;
pub mod presentation;
pub mod single;

pub use pair::{RESULT_COMPLETED, RESULT_FAILED, ToolPairIndicator, pair_lines};
pub use presentation::{
    ExecutionStatus, NETWORK_BLUE, ToolCategory, category_color, status_color, status_glyph,
    tool_icon,
};
pub use single::{ToolIndicator, indicator_lines};
