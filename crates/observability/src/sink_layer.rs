//! Tracing layer that forwards formatted log lines to a sink (e.g. the TUI footer).

use std::fmt::Write;

use tracing::field::Visit;
use tracing_subscriber::layer::{Context, Layer};

use crate::config::LogSink;

/// Builds a single line from an event: "[LEVEL] target: message key=value ..."
struct LineVisitor {
    buf: String,
}

impl LineVisitor {
    fn new() -> Self {
        Self {
            buf: String::with_capacity(256),
        }
    }

    fn finish(self) -> String {
        self.buf
    }
}

impl Visit for LineVisitor {
    fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
        if field.name() == "message" {
            if !self.buf.is_empty() {
                self.buf.push(' ');
            }
            self.buf.push_str(value);
        } else {
            if !self.buf.is_empty() {
                self.buf.push(' ');
            }
            write!(self.buf, "{}={:?}", field.name(), value).ok();
        }
    }

    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
        let name = field.name();
        if name == "message" {
            if !self.buf.is_empty() {
                self.buf.push(' ');
            }
            write!(self.buf, "{:?}", value).ok();
        } else {
            if !self.buf.is_empty() {
                self.buf.push(' ');
            }
            write!(self.buf, "{}={:?}", name, value).ok();
        }
    }
}

/// Layer that sends each formatted event to the given sink when present. The sink must not block.
pub(crate) fn sink_layer(sink: Option<LogSink>) -> SinkLayer {
    SinkLayer { sink }
}

#[derive(Clone)]
pub(crate) struct SinkLayer {
    sink: Option<LogSink>,
}

impl<S> Layer<S> for SinkLayer
where
    S: tracing::Subscriber + for<'a> tracing_subscriber::registry::LookupSpan<'a>,
{
    fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
        let level = *event.metadata().level();
        let target = event.metadata().target();
        let mut visitor = LineVisitor::new();
        event.record(&mut visitor);
        let rest = visitor.finish();
        let line = if rest.is_empty() {
            format!("[{}] {}", level, target)
        } else {
            format!("[{}] {}: {}", level, target, rest)
        };
        // Runaway events (huge debug payloads) are truncated, not dropped.
        const MAX_LEN: usize = 32_000;
        let line = if line.len() > MAX_LEN {
            let trunc: String = line.chars().take(MAX_LEN).collect();
            format!("{}… ({} chars)", trunc, line.len())
        } else {
            line
        };
        if let Some(ref sink) = self.sink {
            sink(line);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};
    use tracing_subscriber::layer::SubscriberExt;

    #[test]
    fn sink_receives_formatted_line() {
        let captured: Arc<Mutex<Vec<String>>> = Arc::new(Mutex::new(Vec::new()));
        let captured_in_sink = Arc::clone(&captured);
        let sink: LogSink = Arc::new(move |line| {
            captured_in_sink.lock().unwrap().push(line);
        });

        let subscriber =
            tracing_subscriber::registry::Registry::default().with(sink_layer(Some(sink)));
        tracing::subscriber::with_default(subscriber, || {
            tracing::info!(tool = "fetch", "tool started");
        });

        let lines = captured.lock().unwrap();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].contains("[INFO]"));
        assert!(lines[0].contains("tool started"));
        assert!(lines[0].contains("tool=\"fetch\""));
    }

    #[test]
    fn no_sink_is_a_no_op() {
        let subscriber =
            tracing_subscriber::registry::Registry::default().with(sink_layer(None));
        tracing::subscriber::with_default(subscriber, || {
            tracing::warn!("nothing to catch this");
        });
    }
}
