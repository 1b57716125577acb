//! Application core — session logic, zero direct I/O.
//!
//! This module contains the rules of the Dog Walker CLI: the dispatcher,
//! the escape-aware prompt and the multi-step forms.  All interaction with
//! the terminal, the clock and persistence happens through **port traits**
//! defined in [`ports`], keeping this layer testable with scripted mocks.

pub mod commands;
pub mod events;
pub mod form;
pub mod ports;
pub mod prompt;
pub mod service;
