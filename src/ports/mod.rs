//! Port traits defining external boundaries.
//!
//! Each trait represents a boundary between the date core and something
//! outside it (the system clock, request collaborators). Implementations live
//! in `src/adapters/` or in other crates.

pub mod clock;
pub mod request;

pub use clock::Clock;
pub use request::{RequestDescriptor, DEFAULT_TIMEOUT};
