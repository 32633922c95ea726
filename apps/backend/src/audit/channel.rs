//! Message-passing audit sink.
//!
//! `ChannelAuditSink::record` only enqueues; a spawned writer task drains the
//! queue into a downstream sink. A full or closed queue is reported to the
//! caller, which is expected to log and move on.

use std::sync::Arc;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::warn;

use super::{AuditError, AuditRecord, AuditSink};

#[derive(Debug, Clone)]
pub struct ChannelAuditSink {
    tx: mpsc::Sender<AuditRecord>,
}

impl AuditSink for ChannelAuditSink {
    fn record(&self, record: AuditRecord) -> Result<(), AuditError> {
        self.tx.try_send(record).map_err(|e| match e {
            mpsc::error::TrySendError::Full(_) => AuditError::Full,
            mpsc::error::TrySendError::Closed(_) => AuditError::Closed,
        })
    }
}

/// Spawn the writer task and return the sending half.
///
/// Must be called inside a tokio runtime. The task ends once every
/// `ChannelAuditSink` clone has been dropped and the queue is drained.
pub fn spawn_audit_writer(
    capacity: usize,
    downstream: Arc<dyn AuditSink>,
) -> (ChannelAuditSink, JoinHandle<()>) {
    let (tx, mut rx) = mpsc::channel::<AuditRecord>(capacity.max(1));

    let handle = tokio::spawn(async move {
        while let Some(record) = rx.recv().await {
            let session_id = record.session_id;
            if let Err(e) = downstream.record(record) {
                warn!(%session_id, error = %e, "audit writer dropped record");
            }
        }
    });

    (ChannelAuditSink { tx }, handle)
}
