//! Deterministic adapters for tests and reproducible runs.

pub mod clock;

pub use clock::{FixedClock, ScriptedClock};
