//! Catalog listing: filter, sort and print track entries

pub mod config;
pub mod pipeline;

pub use config::ListingConfig;
pub use pipeline::ListingPipeline;
