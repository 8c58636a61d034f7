//! Raw catalog records, before validation

use crate::model::{IdGenerator, TrackEntry};
use anyhow::{Context, Result};

/// A `<track>` element as read from the catalog, every field still unchecked
#[derive(Debug, Clone, Default)]
pub struct CatalogRecord {
    pub title: Option<String>,
    pub artist: Option<String>,
    pub duration: Option<String>, // seconds
    pub rating: Option<String>,
    pub tags: Vec<String>,
}

impl CatalogRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store the text of a child element
    pub fn set_field(&mut self, element: &str, text: String) {
        match element {
            "title" => self.title = Some(text),
            "artist" => self.artist = Some(text),
            "duration" => self.duration = Some(text),
            "rating" => self.rating = Some(text),
            "tag" => self.tags.push(text),
            other => log::debug!("Ignoring unknown catalog element <{}>", other),
        }
    }

    /// Validate the record and build an entry from it
    ///
    /// Tags that are rejected (empty or repeated) are dropped; the entry is kept.
    pub fn into_entry(self, ids: &IdGenerator) -> Result<TrackEntry> {
        let title = self.title.context("missing <title>")?;
        let artist = self.artist.context("missing <artist>")?;
        let duration = parse_number(self.duration.as_deref(), "duration")?;
        let rating = parse_number(self.rating.as_deref(), "rating")?;

        let mut entry = TrackEntry::new(ids, &title, &artist, duration, rating)?;

        for tag in &self.tags {
            if let Err(e) = entry.add_tag(tag) {
                log::debug!("Dropped tag {:?} on track #{}: {}", tag, entry.id(), e);
            }
        }

        Ok(entry)
    }
}

fn parse_number(text: Option<&str>, field: &str) -> Result<i64> {
    let text = text.with_context(|| format!("missing <{}>", field))?;
    text.trim()
        .parse::<i64>()
        .with_context(|| format!("<{}> is not a whole number: {:?}", field, text))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TrackError;

    fn record(title: &str, duration: &str, rating: &str) -> CatalogRecord {
        let mut r = CatalogRecord::new();
        r.set_field("title", title.to_string());
        r.set_field("artist", "Artist".to_string());
        r.set_field("duration", duration.to_string());
        r.set_field("rating", rating.to_string());
        r
    }

    #[test]
    fn test_valid_record_becomes_entry() {
        let ids = IdGenerator::new();
        let mut r = record("Song", " 200 ", "4");
        r.set_field("tag", "Rock".to_string());
        r.set_field("tag", "ROCK".to_string());
        r.set_field("tag", "Live".to_string());

        let entry = r.into_entry(&ids).unwrap();
        assert_eq!(entry.title(), "Song");
        assert_eq!(entry.duration_secs(), 200);
        assert_eq!(entry.rating(), 4);
        assert_eq!(entry.tags().as_slice(), ["Rock", "Live"]);
    }

    #[test]
    fn test_missing_and_malformed_fields() {
        let ids = IdGenerator::new();

        let mut r = CatalogRecord::new();
        r.set_field("title", "Song".to_string());
        assert!(r.into_entry(&ids).is_err());

        assert!(record("Song", "3:20", "4").into_entry(&ids).is_err());
        assert_eq!(ids.peek().get(), 1);
    }

    #[test]
    fn test_validation_error_is_kept() {
        let ids = IdGenerator::new();
        let err = record("Song", "200", "7").into_entry(&ids).unwrap_err();

        assert_eq!(
            err.downcast_ref::<TrackError>(),
            Some(&TrackError::RatingOutOfRange(7))
        );
    }
}
