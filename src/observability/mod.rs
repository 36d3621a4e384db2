//! Tracing with OTLP JSON export to a local file.
//!
//! ```text
//! tracing macros → tracing-opentelemetry → SDK provider → JsonFileExporter → dinescope-otlp.json
//! ```
//!
//! Each exported batch is one JSON line. The file rotates at 10 MiB and keeps
//! three timestamped backups.
//!
//! # Modules
//!
//! - [`init`]: Subscriber setup from [`Config`](crate::Config)
//! - `exporter`: `SpanExporter` implementation over the rotating file
//! - `otlp`: span to OTLP JSON conversion
//! - `rotation`: size-based file rotation

mod exporter;
pub mod init;
mod otlp;
mod rotation;

pub use init::{init_tracing, SERVICE_NAME, TRACE_FILE};
