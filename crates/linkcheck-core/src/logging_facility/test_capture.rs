//! In-memory capture of log events for test assertions

use std::collections::BTreeMap;
use std::fmt;
use std::sync::{Arc, Mutex, OnceLock};

use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::Layer;

use crate::schema::{FIELD_EVENT, FIELD_OP};

/// One log event, every field rendered as text
#[derive(Clone, Debug)]
pub struct CapturedEvent {
    pub level: Level,
    pub target: String,
    fields: BTreeMap<String, String>,
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

    /// True for the boundary event `event` of operation `op`
    pub fn is(&self, op: &str, event: &str) -> bool {
        self.op() == Some(op) && self.event() == Some(event)
    }
}

// Strings are recorded raw; everything else through Debug (which is the
// Display form for `%` fields)
struct FieldRecorder<'a>(&'a mut BTreeMap<String, String>);

impl Visit for FieldRecorder<'_> {
    fn record_str(&mut self, field: &Field, value: &str) {
        self.0.insert(field.name().to_string(), value.to_string());
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        self.0.insert(field.name().to_string(), format!("{:?}", value));
    }
}

type EventLog = Arc<Mutex<Vec<CapturedEvent>>>;

struct CaptureLayer(EventLog);

impl<S: Subscriber> Layer<S> for CaptureLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut fields = BTreeMap::new();
        event.record(&mut FieldRecorder(&mut fields));
        let captured = CapturedEvent {
            level: *event.metadata().level(),
            target: event.metadata().target().to_string(),
            fields,
        };
        if let Ok(mut log) = self.0.lock() {
            log.push(captured);
        }
    }
}

/// Handle on everything logged since the capture was installed
#[derive(Clone)]
pub struct TestCapture(EventLog);

impl TestCapture {
    pub fn events(&self) -> Vec<CapturedEvent> {
        self.0.lock().map(|log| log.clone()).unwrap_or_default()
    }

    /// Events for one operation, in emission order
    pub fn for_op(&self, op: &str) -> Vec<CapturedEvent> {
        self.events()
            .into_iter()
            .filter(|e| e.op() == Some(op))
            .collect()
    }

    pub fn count(&self, predicate: impl Fn(&CapturedEvent) -> bool) -> usize {
        self.events().iter().filter(|e| predicate(e)).count()
    }

    /// # Panics
    ///
    /// Panics if `op` never logged `event`
    pub fn assert_logged(&self, op: &str, event: &str) {
        let seen = self.count(|e| e.is(op, event));
        assert!(seen > 0, "no {} event logged for op {}", event, op);
    }
}

static CAPTURE: OnceLock<TestCapture> = OnceLock::new();

/// Install the capture layer as the global subscriber (once per process)
///
/// Tests in one binary share the capture, so filter by a unique `op` or
/// field value rather than asserting on total counts.
///
/// ```
/// use linkcheck_core::logging_facility::test_capture::init_test_capture;
/// use linkcheck_core::log_op_start;
///
/// let capture = init_test_capture();
/// log_op_start!("doc_capture_op");
/// capture.assert_logged("doc_capture_op", "start");
/// ```
pub fn init_test_capture() -> TestCapture {
    CAPTURE
        .get_or_init(|| {
            let log = EventLog::default();
            let _ = tracing_subscriber::registry()
                .with(CaptureLayer(log.clone()))
                .try_init();
            TestCapture(log)
        })
        .clone()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capture_records_custom_fields() {
        let capture = init_test_capture();
        tracing::info!(op = "capture_unit_op", event = "start", sheet_count = 3u64);

        let events = capture.for_op("capture_unit_op");
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].field("sheet_count"), Some("3"));
        assert_eq!(events[0].event(), Some("start"));
    }

    #[test]
    fn test_display_fields_are_unquoted() {
        let capture = init_test_capture();
        let name = String::from("Links");
        tracing::info!(op = "capture_display_op", sheet = %name);

        let events = capture.for_op("capture_display_op");
        assert_eq!(events[0].field("sheet"), Some("Links"));
    }
}
