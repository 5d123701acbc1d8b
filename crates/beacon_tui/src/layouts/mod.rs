//! Layout components built from [crate::utils] and [crate::theme].
//!
//! - **[split]** — Split the screen into header, body, footer.
//! - **[style]** — Map palette [Rgb](crate::theme::Rgb) to ratatui styles.
//! - **[head]** — Header strip layout and styled header line.
//! - **[shortcut]** — Shortcut hint line (footer).

mod head;
mod shortcut;
mod split;
mod style;

pub use head::{HEADER_STATUS_IDLE, HeadLayout, block_for_head, header_line, render_header};
pub use shortcut::{shortcut_inner_rect, shortcut_line};
pub use split::{FOOTER_HEIGHT, HEADER_HEIGHT, MainSplits, main_splits, main_splits_with_padding};
pub use style::{
    background_style, border_style, danger_style, info_style, label_style, rgb_to_color,
    success_style, text_muted_style, text_style, warning_style,
};
