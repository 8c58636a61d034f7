//! Track data model
//!
//! Validated track entries, the id generator they draw from, and a
//! library container for many entries.

mod ids;
mod library;
mod tags;
mod track;

pub use ids::{IdGenerator, TrackId};
pub use library::Library;
pub use tags::Tags;
pub use track::{TrackEntry, MAX_RATING, MIN_RATING};
