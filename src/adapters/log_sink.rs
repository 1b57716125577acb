//! Log-based event sink adapter.
//!
//! Implements [`EventSink`] by writing session events through the `log`
//! facade.  With the binary's `env_logger` setup that means stderr, so
//! event lines never mix with the console conversation on stdout.

use log::{info, warn};

use crate::app::events::{CareKind, SessionEvent};
use crate::app::ports::EventSink;

/// Adapter that logs every [`SessionEvent`].
#[derive(Debug, Default)]
pub struct LogEventSink;

impl LogEventSink {
    pub fn new() -> Self {
        Self
    }
}

impl EventSink for LogEventSink {
    fn emit(&mut self, event: &SessionEvent) {
        match event {
            SessionEvent::Started => info!("START | session accepting input"),
            SessionEvent::Listed { shown, total } => {
                info!("LIST | shown={} total={}", shown, total);
            }
            SessionEvent::DogAdded { id, name } => info!("ADD | id={} name={:?}", id, name),
            SessionEvent::FormAborted { form, step } => {
                info!("ABORT | form={} step={}", form, step);
            }
            SessionEvent::CareRecorded { id, kind } => {
                let kind = match kind {
                    CareKind::Walk => "walk",
                    CareKind::Feeding => "feeding",
                };
                info!("CARE | id={} kind={}", id, kind);
            }
            SessionEvent::Unrecognized(token) => info!("REBUKE | token={:?}", token),
            SessionEvent::StoreFailed(err) => warn!("STORE | failed: {}", err),
            SessionEvent::StateChanged { from, to } => info!("STATE | {:?} -> {:?}", from, to),
        }
    }
}
