//! Tracing setup and span export.
//!
//! `tracing` spans from the whole crate are bridged into OpenTelemetry and
//! written as JSON lines to `<data_dir>/gamedeck-spans.jsonl`, with one
//! timestamped backup kept on rotation.
//!
//! Trace verbosity comes from the `trace_level` plugin option (an `EnvFilter`
//! directive such as `debug` or `gamedeck::app=trace`).

mod exporter;
mod init;
mod rotating_writer;
mod span_record;

pub use init::{init_tracing, SPAN_FILE_NAME};
