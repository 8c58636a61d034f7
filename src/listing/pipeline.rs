//! Catalog listing pipeline

use super::config::ListingConfig;
use crate::catalog::parse_catalog;
use crate::model::{IdGenerator, Library, TrackEntry};
use anyhow::{Context, Result};
use std::io::Write;

/// Reads a catalog, filters and sorts it, and writes one line per track
pub struct ListingPipeline {
    config: ListingConfig,
}

impl ListingPipeline {
    pub fn new(config: ListingConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ListingConfig {
        &self.config
    }

    /// Load the configured catalog and list it to `out`
    pub fn run<W: Write>(&self, ids: &IdGenerator, out: W) -> Result<usize> {
        let library = parse_catalog(&self.config.catalog_path, ids)?;
        self.render(&library, out)
    }

    /// Tracks passing every configured filter, in display order
    pub fn select<'a>(&self, library: &'a Library) -> Vec<&'a TrackEntry> {
        let mut selected: Vec<&TrackEntry> = library
            .tracks()
            .filter(|t| {
                self.config
                    .keyword
                    .as_deref()
                    .map_or(true, |kw| t.matches_keyword(kw))
            })
            .filter(|t| {
                self.config
                    .tag
                    .as_deref()
                    .map_or(true, |tag| t.tags().contains(tag))
            })
            .filter(|t| self.config.min_rating.map_or(true, |min| t.rating() >= min))
            .collect();

        selected.sort();

        if let Some(limit) = self.config.limit {
            selected.truncate(limit);
        }

        log::debug!(
            "Selected {} of {} tracks",
            selected.len(),
            library.track_count()
        );
        selected
    }

    /// Write the selected tracks to `out`, returning how many were written
    pub fn render<W: Write>(&self, library: &Library, mut out: W) -> Result<usize> {
        let selected = self.select(library);

        for track in &selected {
            writeln!(out, "{}", track).context("Failed to write track listing")?;
        }
        out.flush().context("Failed to write track listing")?;

        Ok(selected.len())
    }
}
