//! Tracklist - validated music track entries
//!
//! This library models music tracks with validated metadata, keyword
//! search and a display ordering, and lists XML track catalogs.

pub mod catalog;
pub mod error;
pub mod listing;
pub mod model;

mod testing;

pub use error::TrackError;
pub use listing::config::ListingConfig;
pub use listing::pipeline::ListingPipeline;
pub use model::{IdGenerator, Library, TrackEntry, TrackId};
