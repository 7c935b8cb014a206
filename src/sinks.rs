//! Concrete destinations for finished submissions.

use std::io::{self, Write};

use activity_config::SinkKind;
use activity_core::{SinkError, SubmissionAck, SubmissionSink};
use activity_domain::SubmissionRecord;
use serde::Serialize;
use tracing::info;

/// Emits each record as a structured `info` event.
#[derive(Debug, Default)]
pub struct LogSink;

impl SubmissionSink for LogSink {
    fn submit(&mut self, record: &SubmissionRecord) -> Result<SubmissionAck, SinkError> {
        let payload =
            serde_json::to_string(record).map_err(|err| SinkError::Serialization(err.to_string()))?;
        let ack = SubmissionAck::new();
        info!(submission = %ack.id, record = %payload, "activity submission received");
        Ok(ack)
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Envelope<'a> {
    id: String,
    received_at: String,
    record: &'a SubmissionRecord,
}

/// Writes each record as pretty JSON wrapped with its receipt.
pub struct JsonWriterSink<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriterSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> SubmissionSink for JsonWriterSink<W> {
    fn submit(&mut self, record: &SubmissionRecord) -> Result<SubmissionAck, SinkError> {
        let ack = SubmissionAck::new();
        let envelope = Envelope {
            id: ack.id.to_string(),
            received_at: ack.received_at.to_rfc3339(),
            record,
        };
        let json = serde_json::to_string_pretty(&envelope)
            .map_err(|err| SinkError::Serialization(err.to_string()))?;
        writeln!(self.writer, "{json}")?;
        self.writer.flush()?;
        Ok(ack)
    }
}

pub fn build_sink(kind: SinkKind) -> Box<dyn SubmissionSink> {
    match kind {
        SinkKind::Log => Box::new(LogSink),
        SinkKind::Stdout => Box::new(JsonWriterSink::new(io::stdout())),
    }
}
