//! Integration test driver for `tests/integration/` submodules.
//!
//! Each `mod` below exercises the session core end to end against the
//! mock adapters in `mock_io`.  No terminal or filesystem is touched.

mod care_flow_tests;
mod session_tests;
