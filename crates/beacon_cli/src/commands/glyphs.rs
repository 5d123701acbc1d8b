//! `beacon glyphs` — print the presentation tables for inspection.
//!
//! Shows the icon map, the category accent colors, and the status
//! glyph/color map exactly as the indicators resolve them.

use anyhow::Result;
use beacon_observability::{ObservabilityConfig, init};
use beacon_tui::indicator::{
    ExecutionStatus, ToolCategory, category_color, status_color, status_glyph, tool_icon,
};
use beacon_tui::theme::{BeaconPalette, Rgb};
use comfy_table::{ContentArrangement, Table, presets::UTF8_FULL};
use console::style;

/// Tool names with a dedicated icon, in display order.
const KNOWN_TOOLS: [&str; 9] = [
    "read", "write", "edit", "command", "fetch", "glob", "grep", "list", "todo",
];

fn hex(rgb: Rgb) -> String {
    let (r, g, b) = rgb.tuple();
    format!("#{:02X}{:02X}{:02X}", r, g, b)
}

fn table() -> Table {
    let mut t = Table::new();
    t.load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    t
}

pub fn handle(verbose: bool) -> Result<()> {
    let mut obs_config = ObservabilityConfig::from_env();
    if obs_config.log_level.is_none() && verbose {
        obs_config = obs_config.with_log_level("debug");
    }
    if let Err(e) = init(obs_config) {
        eprintln!("observability init failed (continuing): {}", e);
    }

    let palette = BeaconPalette::beacon_dark();

    println!(
        "{}",
        style(format!("{} — presentation tables", beacon_constant::DISPLAY_NAME))
            .bold()
            .cyan()
    );

    println!("\n{}", style("Tool icons").bold());
    let mut icons = table();
    icons.set_header(vec!["Tool", "Icon"]);
    for name in KNOWN_TOOLS {
        icons.add_row(vec![name, tool_icon(name)]);
    }
    icons.add_row(vec!["(any other)", tool_icon("unknown")]);
    println!("{icons}");

    println!("\n{}", style("Category accents (dark palette)").bold());
    let mut accents = table();
    accents.set_header(vec!["Category", "Accent"]);
    let categories = [
        ("read", Some(ToolCategory::Read)),
        ("write", Some(ToolCategory::Write)),
        ("command", Some(ToolCategory::Command)),
        ("network", Some(ToolCategory::Network)),
        ("(none)", None),
    ];
    for (label, category) in categories {
        accents.add_row(vec![
            label.to_string(),
            hex(category_color(category, &palette)),
        ]);
    }
    println!("{accents}");

    println!("\n{}", style("Status glyphs (dark palette)").bold());
    let mut statuses = table();
    statuses.set_header(vec!["Status", "Glyph", "Color"]);
    let status_rows = [
        ("pending", Some(ExecutionStatus::Pending)),
        ("running", Some(ExecutionStatus::Running)),
        ("completed", Some(ExecutionStatus::Completed)),
        ("error", Some(ExecutionStatus::Error)),
        ("(none)", None),
    ];
    for (label, status) in status_rows {
        statuses.add_row(vec![
            label.to_string(),
            status_glyph(status).to_string(),
            hex(status_color(status, &palette)),
        ]);
    }
    println!("{statuses}");

    tracing::debug!("printed presentation tables");
    Ok(())
}
