//! Collaborators the catalog depends on but does not own: id generation and the clock.

pub mod clock;
pub mod ids;

pub use clock::{Clock, SystemClock};
pub use ids::{IdGenerator, RandomIdGenerator};
