//! Feed state: the items on screen, scroll position, and the animation slot.
//!
//! Everything here is rebuilt into lines on each draw; the only value that
//! survives across draws beyond the item list itself is the dot-animation
//! phase, and that only while something is running.

use crate::animation::DotsAnimation;
use crate::indicator::{ExecutionStatus, ToolIndicator, ToolPairIndicator};
use crate::theme::{Appearance, BeaconPalette};

/// One entry in the indicator feed.
#[derive(Debug, Clone)]
pub enum FeedItem {
    /// Single-row tool indicator. `id` matches status-update events.
    Single {
        id: Option<String>,
        indicator: ToolIndicator,
    },
    /// Invocation/result pair. `id` matches result events.
    Pair {
        id: Option<String>,
        indicator: ToolPairIndicator,
    },
    /// Labeled separator line.
    Separator(String),
}

/// State for the indicator feed screen.
pub struct FeedState {
    /// Feed items, oldest first.
    pub items: Vec<FeedItem>,
    pub palette: BeaconPalette,
    /// Lines scrolled up from the bottom (0 = following the tail).
    pub scroll: usize,
    /// Keep the view pinned to the newest item while events arrive.
    pub auto_scroll: bool,
    /// Transient status text shown in the footer.
    pub status: String,
    /// When true, next draw should run; cleared after draw.
    pub needs_redraw: bool,
    /// Last content height from previous draw (for scroll clamp).
    pub last_content_height: usize,
    /// Last viewport height from previous draw (for scroll clamp).
    pub last_viewport_height: usize,
    /// Dot animation, allocated only while at least one item is running.
    pub dots: Option<DotsAnimation>,
    /// The producer finished its sequence.
    pub finished: bool,
}

impl Default for FeedState {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            palette: BeaconPalette::beacon_dark(),
            scroll: 0,
            auto_scroll: true,
            status: String::new(),
            needs_redraw: true,
            last_content_height: 0,
            last_viewport_height: 0,
            dots: None,
            finished: false,
        }
    }
}

impl FeedState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_appearance(appearance: Appearance) -> Self {
        Self {
            palette: BeaconPalette::for_appearance(appearance),
            ..Self::default()
        }
    }

    /// Push a single indicator.
    pub fn push_single(&mut self, id: Option<String>, indicator: ToolIndicator) {
        self.items.push(FeedItem::Single { id, indicator });
        self.after_push();
    }

    /// Push a paired indicator.
    pub fn push_pair(&mut self, id: Option<String>, indicator: ToolPairIndicator) {
        self.items.push(FeedItem::Pair { id, indicator });
        self.after_push();
    }

    /// Push a labeled separator.
    pub fn push_separator(&mut self, label: String) {
        self.items.push(FeedItem::Separator(label));
        self.after_push();
    }

    fn after_push(&mut self) {
        self.needs_redraw = true;
        if self.auto_scroll {
            self.scroll = 0;
        }
    }

    /// Set the status of the single indicator with the given id. Returns false when no match.
    pub fn update_single_status(&mut self, id: &str, status: ExecutionStatus) -> bool {
        for item in self.items.iter_mut().rev() {
            if let FeedItem::Single {
                id: Some(item_id),
                indicator,
            } = item
                && item_id.as_str() == id
            {
                indicator.status = Some(status);
                self.needs_redraw = true;
                return true;
            }
        }
        false
    }

    /// Settle the paired indicator with the given id. Returns false when no match.
    pub fn finish_pair(&mut self, id: &str, success: bool) -> bool {
        for item in self.items.iter_mut().rev() {
            if let FeedItem::Pair {
                id: Some(item_id),
                indicator,
            } = item
                && item_id.as_str() == id
            {
                indicator.is_running = false;
                indicator.has_result = true;
                indicator.has_error = !success;
                self.needs_redraw = true;
                return true;
            }
        }
        false
    }

    /// True while any item is in a running state.
    pub fn any_running(&self) -> bool {
        self.items.iter().any(|item| match item {
            FeedItem::Single { indicator, .. } => indicator.is_running(),
            FeedItem::Pair { indicator, .. } => indicator.is_running,
            FeedItem::Separator(_) => false,
        })
    }

    /// True when any item settled with an error.
    pub fn any_error(&self) -> bool {
        self.items.iter().any(|item| match item {
            FeedItem::Single { indicator, .. } => {
                indicator.status == Some(ExecutionStatus::Error)
            }
            FeedItem::Pair { indicator, .. } => indicator.has_error && !indicator.is_running,
            FeedItem::Separator(_) => false,
        })
    }

    /// Keep the animation slot in step with the feed: allocate and tick it
    /// while something runs, drop it otherwise. Call once per frame before
    /// building lines.
    pub fn sync_animation(&mut self) {
        if self.any_running() {
            self.dots.get_or_insert_with(DotsAnimation::new).tick();
        } else {
            self.dots = None;
        }
    }

    pub fn scroll_up(&mut self, lines: usize) {
        let max = self
            .last_content_height
            .saturating_sub(self.last_viewport_height);
        self.scroll = (self.scroll + lines).min(max);
        self.auto_scroll = self.scroll == 0;
        self.needs_redraw = true;
    }

    pub fn scroll_down(&mut self, lines: usize) {
        self.scroll = self.scroll.saturating_sub(lines);
        self.auto_scroll = self.scroll == 0;
        self.needs_redraw = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn running_single(id: &str) -> (Option<String>, ToolIndicator) {
        (
            Some(id.to_string()),
            ToolIndicator::new("read").with_status(ExecutionStatus::Running),
        )
    }

    #[test]
    fn push_marks_redraw() {
        let mut state = FeedState::new();
        state.needs_redraw = false;
        let (id, ind) = running_single("t1");
        state.push_single(id, ind);
        assert!(state.needs_redraw);
    }

    #[test]
    fn any_running_reflects_items() {
        let mut state = FeedState::new();
        assert!(!state.any_running());
        let (id, ind) = running_single("t1");
        state.push_single(id, ind);
        assert!(state.any_running());
        state.update_single_status("t1", ExecutionStatus::Completed);
        assert!(!state.any_running());
    }

    #[test]
    fn sync_allocates_animation_only_while_running() {
        let mut state = FeedState::new();
        state.sync_animation();
        assert!(state.dots.is_none());

        let (id, ind) = running_single("t1");
        state.push_single(id, ind);
        state.sync_animation();
        assert!(state.dots.is_some());
    }

    #[test]
    fn sync_releases_animation_when_settled() {
        // The leak case: a settled feed must not keep its timer alive.
        let mut state = FeedState::new();
        let (id, ind) = running_single("t1");
        state.push_single(id, ind);
        state.sync_animation();
        assert!(state.dots.is_some());

        state.update_single_status("t1", ExecutionStatus::Completed);
        state.sync_animation();
        assert!(state.dots.is_none());
    }

    #[test]
    fn remount_restarts_phase() {
        let mut state = FeedState::new();
        let (id, ind) = running_single("t1");
        state.push_single(id, ind);
        state.sync_animation();
        if let Some(d) = state.dots.as_mut() {
            d.advance();
            d.advance();
        }
        assert_eq!(state.dots.as_ref().map(|d| d.frame()), Some("..."));

        // Settle, then run again: a fresh animation starts at ".".
        state.update_single_status("t1", ExecutionStatus::Completed);
        state.sync_animation();
        let (id, ind) = running_single("t2");
        state.push_single(id, ind);
        state.sync_animation();
        assert_eq!(state.dots.as_ref().map(|d| d.frame()), Some("."));
    }

    #[test]
    fn update_unknown_id_returns_false() {
        let mut state = FeedState::new();
        assert!(!state.update_single_status("nope", ExecutionStatus::Error));
        assert!(!state.finish_pair("nope", true));
    }

    #[test]
    fn finish_pair_sets_flags() {
        let mut state = FeedState::new();
        state.push_pair(Some("p1".into()), ToolPairIndicator::running("command"));
        assert!(state.finish_pair("p1", true));
        let FeedItem::Pair { indicator, .. } = &state.items[0] else {
            panic!("expected pair");
        };
        assert!(indicator.has_result && !indicator.has_error && !indicator.is_running);
    }

    #[test]
    fn scroll_clamps_to_content() {
        let mut state = FeedState::new();
        state.last_content_height = 30;
        state.last_viewport_height = 10;
        state.scroll_up(100);
        assert_eq!(state.scroll, 20);
        state.scroll_down(5);
        assert_eq!(state.scroll, 15);
        assert!(!state.auto_scroll);
        state.scroll_down(100);
        assert_eq!(state.scroll, 0);
        assert!(state.auto_scroll);
    }
}
