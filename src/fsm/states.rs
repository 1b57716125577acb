//! Concrete state handlers and table builder.
//!
//! ```text
//!  RUNNING ──[Continue | ShowMenu]──▶ RUNNING
//!     │
//!  [Terminate]
//!     ▼
//!  TERMINATED (absorbing)
//! ```

use super::{Outcome, SessionState, StateDescriptor};

/// Build the state table.  Called once per session.
pub fn build_state_table() -> [StateDescriptor; SessionState::COUNT] {
    [
        // Index 0 — Running
        StateDescriptor {
            id: SessionState::Running,
            name: "Running",
            on_outcome: running_outcome,
        },
        // Index 1 — Terminated
        StateDescriptor {
            id: SessionState::Terminated,
            name: "Terminated",
            on_outcome: terminated_outcome,
        },
    ]
}

fn running_outcome(outcome: Outcome) -> Option<SessionState> {
    match outcome {
        Outcome::Terminate => Some(SessionState::Terminated),
        Outcome::Continue | Outcome::ShowMenu => None,
    }
}

fn terminated_outcome(_outcome: Outcome) -> Option<SessionState> {
    None
}
