//! Dog Walker library.
//!
//! Exposes the session core, the status engine and the shipped adapters
//! for the binary and for integration testing.

#![deny(unused_must_use)]

pub mod adapters;
pub mod app;
pub mod config;
pub mod error;
pub mod fsm;
pub mod record;
pub mod render;
pub mod seed;
pub mod status;
