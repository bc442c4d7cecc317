//! OpenTelemetry-based observability with file-based span export.
//!
//! ```text
//! tracing macros → tracing-opentelemetry → OpenTelemetry SDK → JsonLinesExporter → file
//! ```
//!
//! - One JSON object per finished span (see [`record::SpanRecord`])
//! - Output at `<data dir>/sidepanes-otlp.json`, rotated at 10 MB, 3 backups
//! - Level from `RUST_LOG`, then `trace_level`, then `info`
//!
//! The core only emits `tracing` events and spans; whether they go anywhere is
//! decided by the host calling [`init_tracing`] (or [`initialize`](crate::initialize)
//! with a `trace_level`).
//!
//! # Modules
//!
//! - `init`: Subscriber setup
//! - `tracer`: Tracer provider and span exporter
//! - [`record`]: Span-to-JSON conversion
//! - `file_writer`: Size-rotated line writer

mod file_writer;
mod init;
pub mod record;
mod tracer;

pub use init::{init_tracing, SERVICE_NAME};
