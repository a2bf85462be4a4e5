//! Test support utilities for the Plump workspace.
//!
//! Currently this is only the unified logging initialization shared by the
//! engine's integration tests.

pub mod logging;
