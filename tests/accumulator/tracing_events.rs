#![cfg(feature = "tracing")]

use crate::common::RecordingHost;
use decode_rail::{ErrorAccumulator, ScopedErrorAccumulator};
use std::fmt;
use std::sync::{Arc, Mutex};
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};
use tracing_subscriber::Registry;

/// An event as seen by [`EventLog`], with every field rendered to text.
#[derive(Debug)]
struct CapturedEvent {
    level: Level,
    fields: Vec<(String, String)>,
}

impl CapturedEvent {
    fn field(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(field, _)| field == name)
            .map(|(_, value)| value.as_str())
    }

    fn message(&self) -> Option<&str> {
        self.field("message")
    }
}

struct FieldCollector(Vec<(String, String)>);

impl Visit for FieldCollector {
    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        self.0.push((field.name().to_string(), format!("{value:?}")));
    }
}

/// Layer that keeps every event emitted while it is installed.
#[derive(Clone, Default)]
struct EventLog(Arc<Mutex<Vec<CapturedEvent>>>);

impl EventLog {
    fn take(&self) -> Vec<CapturedEvent> {
        std::mem::take(&mut *self.0.lock().unwrap())
    }
}

impl<S: Subscriber> Layer<S> for EventLog {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut fields = FieldCollector(Vec::new());
        event.record(&mut fields);
        self.0.lock().unwrap().push(CapturedEvent {
            level: *event.metadata().level(),
            fields: fields.0,
        });
    }
}

fn capture(f: impl FnOnce()) -> Vec<CapturedEvent> {
    let log = EventLog::default();
    let subscriber = Registry::default().with(log.clone());
    tracing::subscriber::with_default(subscriber, f);
    log.take()
}

#[test]
fn overwrite_logs_a_warning_with_both_errors() {
    let mut host = RecordingHost::new();
    let events = capture(|| {
        let mut errors = ErrorAccumulator::new(&mut host, "Module()");
        errors.type_error(format_args!("first"));
        errors.range_error(format_args!("second"));
    });

    let warnings: Vec<_> = events.iter().filter(|e| e.level == Level::WARN).collect();
    assert_eq!(warnings.len(), 1);

    let warning = warnings[0];
    assert_eq!(warning.message(), Some("pending boundary error overwritten"));
    assert_eq!(warning.field("context"), Some("Module()"));
    assert_eq!(warning.field("previous_kind"), Some("TypeError"));
    assert_eq!(warning.field("previous"), Some("Module(): first"));
    assert_eq!(warning.field("kind"), Some("RangeError"));
}

#[test]
fn single_setter_logs_no_warning() {
    let mut host = RecordingHost::new();
    let events = capture(|| {
        let mut errors = ErrorAccumulator::new(&mut host, "Module()");
        errors.compile_error(format_args!("only"));
    });

    assert!(events.iter().all(|e| e.level != Level::WARN));
}

#[test]
fn reset_then_set_logs_no_warning() {
    let mut host = RecordingHost::new();
    let events = capture(|| {
        let mut errors = ErrorAccumulator::new(&mut host, "");
        errors.compile_error(format_args!("handled"));
        errors.reset();
        errors.link_error(format_args!("fresh"));
    });

    assert!(events.iter().all(|e| e.level != Level::WARN));
}

#[test]
fn scoped_flush_logs_schedule_at_debug() {
    let mut host = RecordingHost::new();
    let events = capture(|| {
        let mut errors = ScopedErrorAccumulator::new(&mut host, "compile()");
        errors.compile_error(format_args!("bad section"));
    });

    let scheduled = events
        .iter()
        .find(|e| e.message() == Some("scheduling boundary error"))
        .unwrap();
    assert_eq!(scheduled.level, Level::DEBUG);
    assert_eq!(scheduled.field("error"), Some("compile(): bad section"));
    assert!(events.iter().any(|e| e.message() == Some("reifying boundary error")));
    assert_eq!(host.scheduled.len(), 1);
}
