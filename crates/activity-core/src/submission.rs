use std::io;

use chrono::{DateTime, Utc};
use serde::Serialize;
use thiserror::Error;
use uuid::Uuid;

use activity_domain::SubmissionRecord;

/// Receipt returned by a sink that accepted a record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubmissionAck {
    pub id: Uuid,
    pub received_at: DateTime<Utc>,
}

impl SubmissionAck {
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            received_at: Utc::now(),
        }
    }

    /// First eight hex digits of the id, for compact display.
    pub fn short_id(&self) -> String {
        let mut short = self.id.simple().to_string();
        short.truncate(8);
        short
    }
}

impl Default for SubmissionAck {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Error)]
pub enum SinkError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("Serialization error: {0}")]
    Serialization(String),
    #[error("Rejected: {0}")]
    Rejected(String),
}

/// Destination for completed submissions.
pub trait SubmissionSink {
    fn submit(&mut self, record: &SubmissionRecord) -> Result<SubmissionAck, SinkError>;
}

impl<S: SubmissionSink + ?Sized> SubmissionSink for Box<S> {
    fn submit(&mut self, record: &SubmissionRecord) -> Result<SubmissionAck, SinkError> {
        (**self).submit(record)
    }
}

/// Keeps accepted records in memory. Can be primed to refuse everything.
#[derive(Debug, Default)]
pub struct MemorySink {
    records: Vec<SubmissionRecord>,
    reject_with: Option<String>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rejecting(reason: impl Into<String>) -> Self {
        Self {
            records: Vec::new(),
            reject_with: Some(reason.into()),
        }
    }

    pub fn records(&self) -> &[SubmissionRecord] {
        &self.records
    }
}

impl SubmissionSink for MemorySink {
    fn submit(&mut self, record: &SubmissionRecord) -> Result<SubmissionAck, SinkError> {
        if let Some(reason) = &self.reject_with {
            return Err(SinkError::Rejected(reason.clone()));
        }
        self.records.push(record.clone());
        Ok(SubmissionAck::new())
    }
}
