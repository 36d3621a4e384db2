//! Span exporter that appends OTLP JSON lines to a rotating local file.

use super::otlp;
use super::rotation::RotatingFile;
use futures_util::future::{self, BoxFuture};
use opentelemetry::trace::TraceError;
use opentelemetry_sdk::export::trace::{ExportResult, SpanData, SpanExporter};
use opentelemetry_sdk::resource::Resource;
use opentelemetry_sdk::trace::TracerProvider;
use std::path::PathBuf;

/// Writes each exported batch as one line of the trace file.
#[derive(Debug)]
struct JsonFileExporter {
    file: RotatingFile,
    resource: Resource,
    scope: &'static str,
    stopped: bool,
}

impl SpanExporter for JsonFileExporter {
    fn export(&mut self, batch: Vec<SpanData>) -> BoxFuture<'static, ExportResult> {
        if self.stopped {
            return Box::pin(future::ready(Err(TraceError::from("trace exporter stopped"))));
        }

        let line = otlp::batch_document(&self.resource, self.scope, &batch).to_string();
        let result = self
            .file
            .append_line(&line)
            .map_err(|e| TraceError::from(e.to_string()));
        Box::pin(future::ready(result))
    }

    fn shutdown(&mut self) {
        self.stopped = true;
    }

    fn set_resource(&mut self, resource: &Resource) {
        self.resource = resource.clone();
    }
}

/// Builds a provider that exports every span synchronously to `path`.
///
/// Export is unbatched: the catalog runs on a single thread and spans are few.
pub fn file_provider(path: PathBuf, resource: Resource, scope: &'static str) -> TracerProvider {
    let exporter = JsonFileExporter {
        file: RotatingFile::new(path),
        resource: resource.clone(),
        scope,
        stopped: false,
    };

    TracerProvider::builder()
        .with_config(opentelemetry_sdk::trace::Config::default().with_resource(resource))
        .with_simple_exporter(exporter)
        .build()
}
