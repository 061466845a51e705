//! Metrics module - fire-and-forget event sinks

pub mod tracing_sink;

pub use tracing_sink::TracingMetricsSink;
