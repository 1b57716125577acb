//! Outbound session events.
//!
//! The [`Session`](super::service::Session) emits these through the
//! [`EventSink`](super::ports::EventSink) port.  Adapters on the other
//! side decide what to do with them; the shipped one logs them.

use crate::fsm::SessionState;
use crate::record::RecordId;

/// Which care action a [`SessionEvent::CareRecorded`] refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CareKind {
    Walk,
    Feeding,
}

/// Structured events emitted by the session core.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionEvent {
    /// Banner and menu printed; the session is accepting input.
    Started,

    /// A listing was rendered with this many records.
    Listed { shown: usize, total: usize },

    /// The add-dog form created a record.
    DogAdded { id: RecordId, name: String },

    /// A form was abandoned with the `"menu"` sentinel.
    FormAborted { form: &'static str, step: &'static str },

    /// A walk or feeding was stamped.
    CareRecorded { id: RecordId, kind: CareKind },

    /// A token matched no menu entry.
    Unrecognized(String),

    /// The store failed; the session carried on.
    StoreFailed(String),

    /// The session FSM moved between states.
    StateChanged { from: SessionState, to: SessionState },
}
