//! Observability setup for pairgate: structured logging and optional
//! OpenTelemetry span export.

pub mod tracing_setup;
