//! OpenTelemetry tracer provider exporting spans to a local file.

use super::file_writer::FileWriter;
use super::record::SpanRecord;
use futures_util::future::BoxFuture;
use opentelemetry::trace::TraceError;
use opentelemetry::Value;
use opentelemetry_sdk::export::trace::{ExportResult, SpanData, SpanExporter};
use opentelemetry_sdk::resource::Resource;
use opentelemetry_sdk::trace::TracerProvider;
use std::path::PathBuf;

/// Span exporter writing one [`SpanRecord`] JSON line per span.
struct JsonLinesExporter {
    writer: FileWriter,
    service: String,
    is_shutdown: bool,
}

impl JsonLinesExporter {
    fn new(file_path: PathBuf, resource: &Resource) -> Self {
        let mut exporter = Self {
            writer: FileWriter::new(file_path),
            service: String::new(),
            is_shutdown: false,
        };
        exporter.set_resource(resource);
        exporter
    }

    fn write_batch(&self, batch: &[SpanData]) -> Result<(), TraceError> {
        for span in batch {
            let record = SpanRecord::from_span(&self.service, span);
            let line = serde_json::to_string(&record)
                .map_err(|e| TraceError::from(e.to_string()))?;
            self.writer
                .write_line(&line)
                .map_err(|e| TraceError::from(e.to_string()))?;
        }
        Ok(())
    }
}

impl SpanExporter for JsonLinesExporter {
    fn export(&mut self, batch: Vec<SpanData>) -> BoxFuture<'static, ExportResult> {
        let result = if self.is_shutdown {
            Err(TraceError::from("exporter is shut down"))
        } else {
            self.write_batch(&batch)
        };
        Box::pin(std::future::ready(result))
    }

    fn shutdown(&mut self) {
        self.is_shutdown = true;
    }

    fn set_resource(&mut self, resource: &Resource) {
        self.service = resource
            .get(opentelemetry::Key::from_static_str("service.name"))
            .map_or_else(|| "unknown".to_string(), |value: Value| value.to_string());
    }
}

impl std::fmt::Debug for JsonLinesExporter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JsonLinesExporter")
            .field("writer", &self.writer)
            .field("service", &self.service)
            .field("is_shutdown", &self.is_shutdown)
            .finish()
    }
}

/// Builds a tracer provider that exports every finished span immediately to
/// `file_path`.
pub fn create_tracer_provider(file_path: PathBuf, resource: Resource) -> TracerProvider {
    let exporter = JsonLinesExporter::new(file_path, &resource);

    TracerProvider::builder()
        .with_config(opentelemetry_sdk::trace::Config::default().with_resource(resource))
        .with_simple_exporter(exporter)
        .build()
}
