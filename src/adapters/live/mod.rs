//! Live adapters for real external interactions.

pub mod clock;

pub use clock::SystemClock;
