//! Feed run loop: terminal setup, event handling, draw.
//!
//! Key events are read in a dedicated thread so the main loop never blocks
//! on terminal input; producer events arrive on a tokio channel and are
//! drained cooperatively each iteration. While any indicator runs the loop
//! keeps redrawing so the dot animation advances; once the feed settles it
//! only redraws on state changes.

use std::io;
use std::sync::mpsc;
use std::time::Duration;

use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
    MouseEventKind,
};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tokio::sync::mpsc as tokio_mpsc;

use crate::events::{IndicatorEvent, apply_event};
use crate::state::FeedState;
use crate::theme::Appearance;
use crate::view;

/// Poll/sleep interval when nothing happened this iteration.
const IDLE_SLEEP: Duration = Duration::from_millis(50);

/// Run the indicator feed: alternate screen, raw mode, event loop.
/// Producer events arrive on `event_rx`; optional `log_rx` lines (tracing
/// output) are shown in the footer status area.
pub fn run_feed(
    appearance: Appearance,
    mut event_rx: tokio_mpsc::Receiver<IndicatorEvent>,
    log_rx: Option<tokio_mpsc::Receiver<String>>,
) -> anyhow::Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut state = FeedState::with_appearance(appearance);
    let result = run_loop(&mut terminal, &mut state, &mut event_rx, log_rx);

    execute!(terminal.backend_mut(), DisableMouseCapture, LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    disable_raw_mode()?;

    result
}

fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    state: &mut FeedState,
    event_rx: &mut tokio_mpsc::Receiver<IndicatorEvent>,
    mut log_rx: Option<tokio_mpsc::Receiver<String>>,
) -> anyhow::Result<()> {
    let (key_tx, key_rx) = mpsc::channel();
    let _reader = std::thread::spawn(move || {
        loop {
            if event::poll(Duration::from_millis(50)).unwrap_or(false)
                && let Ok(ev) = event::read()
            {
                let _ = key_tx.send(ev);
            }
        }
    });

    loop {
        // Drain runtime log lines into the footer status (last line wins).
        if let Some(ref mut rx) = log_rx {
            while let Ok(line) = rx.try_recv() {
                if let Some(last) = line.lines().last() {
                    state.status = last.to_string();
                    state.needs_redraw = true;
                }
            }
        }
        // Drain producer events.
        while let Ok(ev) = event_rx.try_recv() {
            apply_event(state, ev);
        }
        if state.auto_scroll {
            state.scroll = 0;
        }

        // Redraw on state changes, and continuously while anything runs so
        // the dot animation advances.
        let should_draw = state.needs_redraw || state.any_running();
        if should_draw {
            terminal.draw(|f| view::draw(f, state, f.area()))?;
            state.needs_redraw = false;
        }

        if let Ok(ev) = key_rx.try_recv() {
            match ev {
                Event::Key(e) => {
                    if e.kind != KeyEventKind::Press {
                        continue;
                    }
                    match e.code {
                        KeyCode::Char('c') if e.modifiers.contains(KeyModifiers::CONTROL) => break,
                        KeyCode::Char('q') => break,
                        KeyCode::Up => state.scroll_up(1),
                        KeyCode::Down => state.scroll_down(1),
                        KeyCode::PageUp => state.scroll_up(5),
                        KeyCode::PageDown => state.scroll_down(5),
                        _ => {}
                    }
                }
                Event::Resize(_, _) => {
                    state.needs_redraw = true;
                }
                Event::Mouse(me) => match me.kind {
                    MouseEventKind::ScrollUp => state.scroll_up(3),
                    MouseEventKind::ScrollDown => state.scroll_down(3),
                    _ => {}
                },
                _ => {}
            }
        } else {
            std::thread::sleep(IDLE_SLEEP);
        }
    }

    Ok(())
}
