//! Parses ASCII-art floor plans, one line at a time, into rooms with an
//! optional title and furniture counts.
//!
//! ```text
//! +------+
//! | W    |-----+
//! +------+ P   |
//! | (room)     |
//! +------------+
//! ```

pub mod alphabet;
pub mod error;
pub mod plan;
pub mod report;
pub mod room;
pub mod segment;

pub use alphabet::{Alphabet, CharClass};
pub use error::{AlphabetError, ContentError, PlanError, Result};
pub use plan::{FloorPlan, OpenRoom, OpenRoomId};
pub use room::Room;
pub use segment::Segment;
