//! In-memory capture of facility events for tests.
//!
//! Events are reduced to their recorded fields as text and looked up by
//! operation and event name, the two keys every facility macro sets.
//! Capture is scoped to a closure on the current thread, so tests running
//! in parallel never see each other's events.

use diffcheck_core_types::schema::{FIELD_EVENT, FIELD_OP};
use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, Mutex};
use tracing::field::{Field, Visit};
use tracing::Subscriber;
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::Layer;

type Buffer = Arc<Mutex<Vec<CapturedEvent>>>;

/// The fields of one event, rendered as text
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CapturedEvent {
    fields: HashMap<String, String>,
}

impl CapturedEvent {
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    pub fn op(&self) -> Option<&str> {
        self.field(FIELD_OP)
    }

    pub fn event(&self) -> Option<&str> {
        self.field(FIELD_EVENT)
    }

    fn is(&self, op: &str, event: &str) -> bool {
        self.op() == Some(op) && self.event() == Some(event)
    }
}

// Integers and bools reach `record_debug`, whose output is their plain text.
impl Visit for CapturedEvent {
    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        self.fields
            .insert(field.name().to_string(), format!("{:?}", value));
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        self.fields
            .insert(field.name().to_string(), value.to_string());
    }
}

/// Layer appending every event to the buffer of a [`TestCapture`]
pub struct CaptureLayer {
    buffer: Buffer,
}

impl<S: Subscriber> Layer<S> for CaptureLayer {
    fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
        let mut captured = CapturedEvent::default();
        event.record(&mut captured);
        if let Ok(mut events) = self.buffer.lock() {
            events.push(captured);
        }
    }
}

/// Handle on the events recorded by its layers
#[derive(Clone, Default)]
pub struct TestCapture {
    buffer: Buffer,
}

impl TestCapture {
    pub fn layer(&self) -> CaptureLayer {
        CaptureLayer {
            buffer: Arc::clone(&self.buffer),
        }
    }

    /// All events, in emission order
    pub fn events(&self) -> Vec<CapturedEvent> {
        self.buffer
            .lock()
            .map(|events| events.clone())
            .unwrap_or_default()
    }

    /// Events emitted by `op` under the event name `event`, in emission order
    pub fn find(&self, op: &str, event: &str) -> Vec<CapturedEvent> {
        self.events()
            .into_iter()
            .filter(|e| e.is(op, event))
            .collect()
    }

    /// The first event emitted by `op` under the event name `event`
    ///
    /// # Panics
    ///
    /// Panics when no such event was captured
    pub fn expect_event(&self, op: &str, event: &str) -> CapturedEvent {
        let events = self.events();
        let count = events.len();
        events
            .into_iter()
            .find(|e| e.is(op, event))
            .unwrap_or_else(|| {
                panic!("no event op={} event={} among {} captured", op, event, count)
            })
    }
}

/// Run `f` with a capture layer as the current thread's subscriber.
///
/// # Example
///
/// ```
/// use diffcheck_core::log_op_start;
/// use diffcheck_core::logging_facility::capture_scoped;
///
/// let ((), capture) = capture_scoped(|| {
///     log_op_start!("my_operation");
/// });
/// capture.expect_event("my_operation", "start");
/// ```
pub fn capture_scoped<R>(f: impl FnOnce() -> R) -> (R, TestCapture) {
    let capture = TestCapture::default();
    let subscriber = tracing_subscriber::registry().with(capture.layer());
    let result = tracing::subscriber::with_default(subscriber, f);
    (result, capture)
}
