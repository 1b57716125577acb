//! Session state machine.
//!
//! Two states, driven by the [`Outcome`] that each dispatched command
//! returns:
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │  StateTable                                              │
//! │  ┌────────────┬──────────────────────────────────────┐   │
//! │  │ StateId    │ on_outcome                           │   │
//! │  ├────────────┼──────────────────────────────────────┤   │
//! │  │ Running    │ fn(Outcome) -> Option<SessionState>  │   │
//! │  │ Terminated │ fn(Outcome) -> Option<SessionState>  │   │
//! │  └────────────┴──────────────────────────────────────┘   │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! `Terminate` is the only outcome that leaves `Running`.  It may be
//! produced by the top-level prompt or from deep inside a form; either way
//! it travels back up the call chain as a value instead of ending the
//! process.

pub mod states;

use log::info;

// ---------------------------------------------------------------------------
// State identity
// ---------------------------------------------------------------------------

/// Enumeration of all session states.
/// Must stay in sync with the table built in [`states::build_state_table`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum SessionState {
    Running = 0,
    Terminated = 1,
}

impl SessionState {
    pub const COUNT: usize = 2;

    /// Convert a table index back to a state.  Out-of-range indices map to
    /// `Terminated` in release builds.
    pub fn from_index(idx: usize) -> Self {
        match idx {
            0 => Self::Running,
            1 => Self::Terminated,
            _ => {
                debug_assert!(false, "invalid state index: {idx}");
                Self::Terminated
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Dispatch outcome
// ---------------------------------------------------------------------------

/// What a handler asks the dispatcher to do next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Keep reading commands.
    Continue,
    /// Reprint the menu, then keep reading.
    ShowMenu,
    /// The `"exit"` sentinel (or end of input) was seen; stop.
    Terminate,
}

/// Per-state handler: returns `Some(next)` to transition.
pub type OutcomeFn = fn(Outcome) -> Option<SessionState>;

/// One row in the state table.
pub struct StateDescriptor {
    pub id: SessionState,
    pub name: &'static str,
    pub on_outcome: OutcomeFn,
}

// ---------------------------------------------------------------------------
// FSM engine
// ---------------------------------------------------------------------------

pub struct Fsm {
    table: [StateDescriptor; SessionState::COUNT],
    current: usize,
    /// Outcomes applied since start.
    steps: u64,
}

impl Fsm {
    pub fn new(table: [StateDescriptor; SessionState::COUNT], initial: SessionState) -> Self {
        Self {
            table,
            current: initial as usize,
            steps: 0,
        }
    }

    /// Feed one outcome through the current state's handler.
    /// Returns the state after the step.
    pub fn apply(&mut self, outcome: Outcome) -> SessionState {
        self.steps += 1;
        if let Some(next) = (self.table[self.current].on_outcome)(outcome) {
            self.transition(next);
        }
        self.current_state()
    }

    pub fn current_state(&self) -> SessionState {
        SessionState::from_index(self.current)
    }

    pub fn is_running(&self) -> bool {
        self.current_state() == SessionState::Running
    }

    pub fn steps(&self) -> u64 {
        self.steps
    }

    fn transition(&mut self, next: SessionState) {
        let next_idx = next as usize;
        if next_idx == self.current {
            return;
        }
        info!(
            "FSM transition: {} -> {}",
            self.table[self.current].name, self.table[next_idx].name
        );
        self.current = next_idx;
    }
}

impl Default for Fsm {
    fn default() -> Self {
        Self::new(states::build_state_table(), SessionState::Running)
    }
}
