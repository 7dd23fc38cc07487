#![forbid(unsafe_code)]

//! Tracing integration tests.
//!
//! Spans enabled:
//!   cargo test -p cellgrid-layout --features tracing --test tracing_tests
//!
//! Zero-overhead verification (no feature):
//!   cargo test -p cellgrid-layout --test tracing_tests -- zero_overhead

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use cellgrid_layout::{GridLayout, GridView, Rect, Size};

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::registry::LookupSpan;

// ============================================================================
// Test Infrastructure
// ============================================================================

/// A captured span with its fields and parent.
#[derive(Debug, Clone)]
#[allow(dead_code)]
struct CapturedSpan {
    name: String,
    fields: HashMap<String, String>,
    parent_name: Option<String>,
}

/// A tracing Layer that records every new span.
struct SpanCapture {
    spans: Arc<Mutex<Vec<CapturedSpan>>>,
}

/// Visitor that extracts span fields.
struct FieldVisitor(Vec<(String, String)>);

impl tracing::field::Visit for FieldVisitor {
    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
        self.0.push((field.name().to_string(), format!("{value:?}")));
    }

    fn record_f64(&mut self, field: &tracing::field::Field, value: f64) {
        self.0.push((field.name().to_string(), value.to_string()));
    }

    fn record_u64(&mut self, field: &tracing::field::Field, value: u64) {
        self.0.push((field.name().to_string(), value.to_string()));
    }
}

impl<S> tracing_subscriber::Layer<S> for SpanCapture
where
    S: tracing::Subscriber + for<'a> LookupSpan<'a>,
{
    fn on_new_span(
        &self,
        attrs: &tracing::span::Attributes<'_>,
        _id: &tracing::span::Id,
        ctx: tracing_subscriber::layer::Context<'_, S>,
    ) {
        let mut visitor = FieldVisitor(Vec::new());
        attrs.record(&mut visitor);

        let parent_name = ctx
            .current_span()
            .id()
            .and_then(|id| ctx.span(id))
            .map(|span_ref| span_ref.name().to_string());

        self.spans.lock().unwrap().push(CapturedSpan {
            name: attrs.metadata().name().to_string(),
            fields: visitor.0.into_iter().collect(),
            parent_name,
        });
    }
}

fn with_captured_spans<F>(f: F) -> Vec<CapturedSpan>
where
    F: FnOnce(),
{
    let spans = Arc::new(Mutex::new(Vec::new()));
    let layer = SpanCapture {
        spans: Arc::clone(&spans),
    };
    let subscriber = tracing_subscriber::registry().with(layer);
    tracing::subscriber::with_default(subscriber, f);
    let captured = spans.lock().unwrap().clone();
    captured
}

struct Fixed(f32);

impl GridView for Fixed {
    fn preferred_size(&self, width: f32) -> Size {
        Size::new(width, self.0)
    }

    fn set_frame(&mut self, _frame: Rect) {}
}

fn sample_grid() -> GridLayout<Fixed> {
    let mut grid = GridLayout::new();
    grid.add_column_set(0)
        .unwrap()
        .add_column(1.0)
        .add_column(1.0);
    let mut row = grid.start_row(0.0, 0).unwrap();
    row.add_view(Fixed(10.0)).unwrap();
    row.add_view(Fixed(12.0)).unwrap();
    grid.add_padding_row(4.0);
    grid
}

// ============================================================================
// Tests
// ============================================================================

#[test]
#[cfg(feature = "tracing")]
fn layout_emits_nested_spans() {
    let spans = with_captured_spans(|| {
        let mut grid = sample_grid();
        grid.layout(Rect::from_size(120.0, 40.0));
    });

    let layout = spans
        .iter()
        .find(|s| s.name == "grid_layout")
        .expect("grid_layout span");
    assert_eq!(layout.fields.get("rows").map(String::as_str), Some("2"));
    assert_eq!(layout.fields.get("views").map(String::as_str), Some("2"));

    let pass = spans
        .iter()
        .find(|s| s.name == "grid_size_pass")
        .expect("grid_size_pass span");
    assert_eq!(pass.parent_name.as_deref(), Some("grid_layout"));
    assert_eq!(pass.fields.get("pass").map(String::as_str), Some("1"));
}

#[test]
#[cfg(feature = "tracing")]
fn measuring_emits_only_the_size_pass() {
    let spans = with_captured_spans(|| {
        let mut grid = sample_grid();
        let _ = grid.preferred_height_for_width(80.0);
    });

    assert!(spans.iter().any(|s| s.name == "grid_size_pass"));
    assert!(!spans.iter().any(|s| s.name == "grid_layout"));
}

#[test]
fn zero_overhead_without_feature() {
    let spans = with_captured_spans(|| {
        let mut grid = sample_grid();
        grid.layout(Rect::from_size(120.0, 40.0));
    });

    if cfg!(feature = "tracing") {
        assert!(!spans.is_empty());
    } else {
        assert!(spans.is_empty());
    }
}
