//! beacon-tui — tool-activity indicator feed for beacon.
//!
//! Theming in `theme`; layout in `layouts`; indicators in `indicator`;
//! state and view in [state] and [view]. Run with [run_feed].

pub mod animation;
pub mod events;
pub mod indicator;
pub mod layouts;
pub mod run;
pub mod state;
pub mod theme;
pub mod utils;
pub mod view;

pub use events::{IndicatorEvent, apply_event};
pub use run::run_feed;
pub use state::{FeedItem, FeedState};
pub use view::draw as draw_view;
