//! `beacon demo` — run the indicator feed over a scripted tool sequence.
//!
//! A spawned task plays the script into the event channel; quitting the
//! feed cancels it via the token so no producer outlives the screen.

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use beacon_observability::{ObservabilityConfig, init};
use beacon_tui::events::IndicatorEvent;
use beacon_tui::indicator::{ExecutionStatus, ToolCategory};
use beacon_tui::run_feed;
use beacon_tui::theme::Appearance;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

/// Pause unit between scripted steps.
const STEP: Duration = Duration::from_millis(1400);

/// Pause unit with --fast.
const STEP_FAST: Duration = Duration::from_millis(350);

pub async fn handle(appearance: Appearance, fast: bool, verbose: bool) -> Result<()> {
    // Channel for runtime logs → TUI footer status.
    let (log_tx, log_rx) = mpsc::channel::<String>(512);
    let log_sink: Arc<dyn Fn(String) + Send + Sync> = Arc::new(move |line| {
        let _ = log_tx.try_send(line);
    });

    // Init tracing without console; the TUI owns the terminal.
    let mut obs_config = ObservabilityConfig::from_env()
        .with_console(false)
        .with_log_sink(log_sink);
    if obs_config.log_level.is_none() {
        obs_config = obs_config.with_log_level(if verbose { "debug" } else { "info" });
    }
    if let Err(e) = init(obs_config) {
        eprintln!("observability init failed (continuing): {}", e);
    }

    let (event_tx, event_rx) = mpsc::channel(256);
    let cancel = CancellationToken::new();
    let script_cancel = cancel.clone();
    let step = if fast { STEP_FAST } else { STEP };
    let script = tokio::spawn(async move {
        tokio::select! {
            _ = script_cancel.cancelled() => {}
            _ = play_script(event_tx, step) => {}
        }
    });

    tracing::info!(fast, "demo sequence started");
    let result = run_feed(appearance, event_rx, Some(log_rx));

    // Quitting the feed must also stop the producer, on every exit path.
    cancel.cancel();
    let _ = script.await;
    result
}

/// The scripted tool sequence: read, search, build, test (fails), fetch
/// (fails), and an unregistered tool for the fallback icon.
fn script_steps() -> Vec<(u32, IndicatorEvent)> {
    vec![
        (
            0,
            IndicatorEvent::Separator {
                label: "Reading project".to_string(),
            },
        ),
        (
            0,
            IndicatorEvent::ToolStarted {
                id: "t1".to_string(),
                tool_name: "read".to_string(),
                display_name: None,
                description: Some("src/main.rs".to_string()),
                category: Some(ToolCategory::Read),
                status: Some(ExecutionStatus::Running),
                animated: true,
            },
        ),
        (
            2,
            IndicatorEvent::ToolStatus {
                id: "t1".to_string(),
                status: ExecutionStatus::Completed,
            },
        ),
        (
            1,
            IndicatorEvent::ToolStarted {
                id: "t2".to_string(),
                tool_name: "grep".to_string(),
                display_name: None,
                description: Some("IndicatorEvent".to_string()),
                category: Some(ToolCategory::Read),
                status: Some(ExecutionStatus::Pending),
                animated: false,
            },
        ),
        (
            1,
            IndicatorEvent::ToolStatus {
                id: "t2".to_string(),
                status: ExecutionStatus::Running,
            },
        ),
        (
            2,
            IndicatorEvent::ToolStatus {
                id: "t2".to_string(),
                status: ExecutionStatus::Completed,
            },
        ),
        (
            1,
            IndicatorEvent::Separator {
                label: "Build & test".to_string(),
            },
        ),
        (
            0,
            IndicatorEvent::PairStarted {
                id: "p1".to_string(),
                tool_name: "command".to_string(),
                display_name: None,
                description: Some("cargo build --workspace".to_string()),
                category: Some(ToolCategory::Command),
            },
        ),
        (
            3,
            IndicatorEvent::PairFinished {
                id: "p1".to_string(),
                success: true,
            },
        ),
        (
            1,
            IndicatorEvent::PairStarted {
                id: "p2".to_string(),
                tool_name: "command".to_string(),
                display_name: None,
                description: Some("cargo test --workspace".to_string()),
                category: Some(ToolCategory::Command),
            },
        ),
        (
            3,
            IndicatorEvent::PairFinished {
                id: "p2".to_string(),
                success: false,
            },
        ),
        (
            1,
            IndicatorEvent::Separator {
                label: "Fetching docs".to_string(),
            },
        ),
        (
            0,
            IndicatorEvent::ToolStarted {
                id: "t3".to_string(),
                tool_name: "fetch".to_string(),
                display_name: Some("Fetch URL".to_string()),
                description: Some("https://docs.rs/ratatui".to_string()),
                category: Some(ToolCategory::Network),
                status: Some(ExecutionStatus::Running),
                animated: true,
            },
        ),
        (
            3,
            IndicatorEvent::ToolStatus {
                id: "t3".to_string(),
                status: ExecutionStatus::Error,
            },
        ),
        (
            1,
            IndicatorEvent::ToolStarted {
                id: "t4".to_string(),
                tool_name: "triage".to_string(),
                display_name: None,
                description: Some("unregistered tool".to_string()),
                category: None,
                status: None,
                animated: false,
            },
        ),
        (1, IndicatorEvent::Finished),
    ]
}

async fn play_script(tx: mpsc::Sender<IndicatorEvent>, step: Duration) {
    for (pause, ev) in script_steps() {
        tokio::time::sleep(step * pause).await;
        tracing::debug!(event = ?ev, "demo event");
        if tx.send(ev).await.is_err() {
            // Feed is gone (user quit); stop producing.
            return;
        }
    }
    tracing::info!("demo sequence finished");
}
