//! Map producer events onto [FeedState] updates.
//!
//! The tool orchestrator (out of process or a scripted demo) describes
//! what happened; the feed only renders it. Events are serde types so
//! they can cross a process boundary as JSON.

use serde::{Deserialize, Serialize};

use crate::indicator::{ExecutionStatus, ToolCategory, ToolIndicator, ToolPairIndicator};
use crate::state::FeedState;

/// One update from the tool orchestrator.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum IndicatorEvent {
    /// A tool call started; shows a single indicator.
    ToolStarted {
        id: String,
        tool_name: String,
        #[serde(default)]
        display_name: Option<String>,
        #[serde(default)]
        description: Option<String>,
        #[serde(default)]
        category: Option<ToolCategory>,
        #[serde(default)]
        status: Option<ExecutionStatus>,
        #[serde(default)]
        animated: bool,
    },
    /// Status change for an already-shown tool call.
    ToolStatus { id: String, status: ExecutionStatus },
    /// A two-phase tool call started; shows a paired indicator in its running phase.
    PairStarted {
        id: String,
        tool_name: String,
        #[serde(default)]
        display_name: Option<String>,
        #[serde(default)]
        description: Option<String>,
        #[serde(default)]
        category: Option<ToolCategory>,
    },
    /// The result for a paired call arrived.
    PairFinished { id: String, success: bool },
    /// Section separator in the feed.
    Separator { label: String },
    /// Transient status line text.
    Status { message: String },
    /// The producer is done; the feed stays up for scrolling until quit.
    Finished,
}

/// Apply one event to feed state (push or update items).
pub fn apply_event(state: &mut FeedState, event: IndicatorEvent) {
    state.needs_redraw = true;
    match event {
        IndicatorEvent::ToolStarted {
            id,
            tool_name,
            display_name,
            description,
            category,
            status,
            animated,
        } => {
            let indicator = ToolIndicator {
                tool_name,
                display_name,
                description,
                status,
                category,
                animated,
            };
            state.push_single(Some(id), indicator);
        }
        IndicatorEvent::ToolStatus { id, status } => {
            if !state.update_single_status(&id, status) {
                state.status = format!("No tool call with id {}", id);
            }
        }
        IndicatorEvent::PairStarted {
            id,
            tool_name,
            display_name,
            description,
            category,
        } => {
            let mut indicator = ToolPairIndicator::running(tool_name);
            indicator.display_name = display_name;
            indicator.description = description;
            indicator.category = category;
            state.push_pair(Some(id), indicator);
        }
        IndicatorEvent::PairFinished { id, success } => {
            if !state.finish_pair(&id, success) {
                state.status = format!("No tool call with id {}", id);
            }
        }
        IndicatorEvent::Separator { label } => {
            state.push_separator(label);
        }
        IndicatorEvent::Status { message } => {
            state.status = message;
        }
        IndicatorEvent::Finished => {
            state.finished = true;
            state.status = "Sequence complete · q to quit".to_string();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::FeedItem;

    fn started(id: &str, name: &str) -> IndicatorEvent {
        IndicatorEvent::ToolStarted {
            id: id.into(),
            tool_name: name.into(),
            display_name: None,
            description: None,
            category: None,
            status: Some(ExecutionStatus::Running),
            animated: true,
        }
    }

    #[test]
    fn tool_started_pushes_single() {
        let mut state = FeedState::new();
        apply_event(&mut state, started("t1", "read"));
        assert_eq!(state.items.len(), 1);
        assert!(matches!(&state.items[0], FeedItem::Single { indicator, .. }
            if indicator.tool_name == "read"));
    }

    #[test]
    fn tool_status_updates_by_id() {
        let mut state = FeedState::new();
        apply_event(&mut state, started("t1", "read"));
        apply_event(
            &mut state,
            IndicatorEvent::ToolStatus {
                id: "t1".into(),
                status: ExecutionStatus::Completed,
            },
        );
        let FeedItem::Single { indicator, .. } = &state.items[0] else {
            panic!("expected single indicator");
        };
        assert_eq!(indicator.status, Some(ExecutionStatus::Completed));
    }

    #[test]
    fn unknown_id_sets_status_message() {
        let mut state = FeedState::new();
        apply_event(
            &mut state,
            IndicatorEvent::ToolStatus {
                id: "missing".into(),
                status: ExecutionStatus::Error,
            },
        );
        assert!(state.status.contains("missing"));
    }

    #[test]
    fn pair_lifecycle() {
        let mut state = FeedState::new();
        apply_event(
            &mut state,
            IndicatorEvent::PairStarted {
                id: "p1".into(),
                tool_name: "command".into(),
                display_name: None,
                description: Some("cargo test".into()),
                category: Some(ToolCategory::Command),
            },
        );
        assert!(state.any_running());

        apply_event(
            &mut state,
            IndicatorEvent::PairFinished {
                id: "p1".into(),
                success: false,
            },
        );
        let FeedItem::Pair { indicator, .. } = &state.items[0] else {
            panic!("expected pair indicator");
        };
        assert!(!indicator.is_running);
        assert!(indicator.has_result);
        assert!(indicator.has_error);
        assert!(!state.any_running());
    }

    #[test]
    fn events_round_trip_as_json() {
        let ev = started("t9", "fetch");
        let json = serde_json::to_string(&ev).unwrap();
        assert!(json.contains("\"tool_started\""));
        let back: IndicatorEvent = serde_json::from_str(&json).unwrap();
        assert!(matches!(back, IndicatorEvent::ToolStarted { ref id, .. } if id == "t9"));
    }

    #[test]
    fn finished_marks_feed_done() {
        let mut state = FeedState::new();
        apply_event(&mut state, IndicatorEvent::Finished);
        assert!(state.finished);
    }
}
