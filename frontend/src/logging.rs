//! `tracing` events, including those emitted by the shared crate, routed
//! to the browser console.

use std::fmt::{self, Write as _};

use tracing::{
    field::{Field, Visit},
    Event, Level, Subscriber,
};
use tracing_subscriber::{
    filter::LevelFilter,
    layer::{Context, SubscriberExt},
    registry,
    util::SubscriberInitExt,
    Layer,
};
use wasm_bindgen::JsValue;

#[derive(Default)]
struct EventLine {
    message: String,
    fields: String,
}

impl Visit for EventLine {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message.push_str(value);
        } else {
            let _ = write!(self.fields, " {}={}", field.name(), value);
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            let _ = write!(self.message, "{:?}", value);
        } else {
            let _ = write!(self.fields, " {}={:?}", field.name(), value);
        }
    }
}

/// `target: message key=value ...`
fn format_event(event: &Event<'_>) -> String {
    let mut line = EventLine::default();
    event.record(&mut line);
    format!("{}: {}{}", event.metadata().target(), line.message, line.fields)
}

/// Layer handing every event, formatted as one line, to `sink`.
pub struct ConsoleLayer<F> {
    sink: F,
}

impl<F> ConsoleLayer<F>
where
    F: Fn(&Level, &str) + Send + Sync + 'static,
{
    pub fn new(sink: F) -> Self {
        Self {
            sink,
        }
    }
}

impl<S, F> Layer<S> for ConsoleLayer<F>
where
    S: Subscriber,
    F: Fn(&Level, &str) + Send + Sync + 'static,
{
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        (self.sink)(event.metadata().level(), &format_event(event));
    }
}

fn write_to_console(level: &Level, line: &str) {
    let line = JsValue::from_str(line);
    match *level {
        Level::ERROR => web_sys::console::error_1(&line),
        Level::WARN => web_sys::console::warn_1(&line),
        Level::INFO => web_sys::console::info_1(&line),
        _ => web_sys::console::debug_1(&line),
    }
}

/// Install the console subscriber. Debug builds log at `DEBUG`, release
/// builds at `INFO`.
pub fn init() {
    let level = if cfg!(debug_assertions) { LevelFilter::DEBUG } else { LevelFilter::INFO };
    if let Err(e) = registry()
        .with(level)
        .with(ConsoleLayer::new(write_to_console))
        .try_init()
    {
        web_sys::console::error_1(&format!("Failed to install logger: {}", e).into());
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use dogcatdang_shared::{LikeRequest, QueryCache, QueryKey};
    use tracing::Level;
    use tracing_subscriber::{layer::SubscriberExt, registry};

    use super::ConsoleLayer;

    fn capture(run: impl FnOnce()) -> Vec<String> {
        let lines = Arc::new(Mutex::new(Vec::new()));
        let sink = {
            let lines = Arc::clone(&lines);
            move |level: &Level, line: &str| {
                lines.lock().expect("lines lock").push(format!("{} {}", level, line));
            }
        };
        tracing::subscriber::with_default(registry().with(ConsoleLayer::new(sink)), run);
        let captured = lines.lock().expect("lines lock").clone();
        captured
    }

    #[test]
    fn events_carry_level_target_and_fields() {
        let lines = capture(|| {
            tracing::warn!(animal_id = 7, reason = "offline", "like not saved");
        });
        assert_eq!(
            lines,
            vec!["WARN dogcatdang_frontend::logging::tests: like not saved animal_id=7 reason=offline"]
        );
    }

    #[test]
    fn shared_crate_events_reach_the_sink() {
        let lines = capture(|| {
            QueryCache::new().invalidate(QueryKey::ArticleList);
            let mut request = LikeRequest::default();
            request.begin(false);
            request.begin(true);
        });
        assert_eq!(lines.len(), 2, "{lines:?}");
        assert_eq!(
            lines[0],
            "DEBUG dogcatdang_shared::query_cache: query invalidated key=ArticleList generation=1"
        );
        assert!(lines[1].starts_with("DEBUG dogcatdang_shared::like_state: like request in flight"));
    }
}
