//! Listing configuration

use std::path::PathBuf;

/// Configuration for listing a catalog
#[derive(Debug, Clone)]
pub struct ListingConfig {
    /// Catalog file to read
    pub catalog_path: PathBuf,

    /// Only list tracks matching this keyword (title, artist or tag)
    pub keyword: Option<String>,

    /// Only list tracks carrying this tag
    pub tag: Option<String>,

    /// Only list tracks rated at least this many stars
    pub min_rating: Option<u8>,

    /// Stop after this many tracks
    pub limit: Option<usize>,
}

impl ListingConfig {
    /// Create a configuration listing every track of a catalog
    pub fn new(catalog_path: PathBuf) -> Self {
        Self {
            catalog_path,
            keyword: None,
            tag: None,
            min_rating: None,
            limit: None,
        }
    }

    /// Filter by keyword
    pub fn with_keyword(mut self, keyword: String) -> Self {
        self.keyword = Some(keyword);
        self
    }

    /// Filter by tag
    pub fn with_tag(mut self, tag: String) -> Self {
        self.tag = Some(tag);
        self
    }

    /// Set minimum rating
    pub fn with_min_rating(mut self, rating: u8) -> Self {
        self.min_rating = Some(rating);
        self
    }

    /// Limit the number of listed tracks
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }
}
