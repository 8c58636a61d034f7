use crate::error::{Result, TrackError};
use serde::Serialize;
use std::fmt;

/// Ordered list of tags, unique ignoring case
///
/// Tags are stored trimmed and with the case they were first added with.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Tags(Vec<String>);

impl Tags {
    /// Create an empty tag list
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Append a tag unless it is empty or already present
    pub fn insert(&mut self, tag: &str) -> Result<()> {
        let tag = tag.trim();
        if tag.is_empty() {
            return Err(TrackError::EmptyTag);
        }
        if self.position(tag).is_some() {
            return Err(TrackError::DuplicateTag(tag.to_string()));
        }

        self.0.push(tag.to_string());
        Ok(())
    }

    /// Remove the tag matching `tag` ignoring case, keeping the order of the rest
    pub fn remove(&mut self, tag: &str) -> Result<()> {
        let tag = tag.trim();
        if tag.is_empty() {
            return Err(TrackError::EmptyTag);
        }

        match self.position(tag) {
            Some(index) => {
                self.0.remove(index);
                Ok(())
            }
            None => Err(TrackError::TagNotFound(tag.to_string())),
        }
    }

    /// Check whether a tag is present, ignoring case and surrounding whitespace
    pub fn contains(&self, tag: &str) -> bool {
        let tag = tag.trim();
        !tag.is_empty() && self.position(tag).is_some()
    }

    /// Check whether any tag contains `needle`, which must already be lowercase
    pub fn any_contains(&self, needle: &str) -> bool {
        self.0.iter().any(|t| t.to_lowercase().contains(needle))
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn position(&self, trimmed: &str) -> Option<usize> {
        let wanted = trimmed.to_lowercase();
        self.0.iter().position(|t| t.to_lowercase() == wanted)
    }
}

impl fmt::Display for Tags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_trims_and_keeps_case() {
        let mut tags = Tags::new();
        tags.insert("  Rock ").unwrap();
        tags.insert("Live").unwrap();

        assert_eq!(tags.as_slice(), ["Rock", "Live"]);
    }

    #[test]
    fn test_insert_rejects_duplicates_ignoring_case() {
        let mut tags = Tags::new();
        tags.insert("Rock").unwrap();

        assert_eq!(
            tags.insert("rock"),
            Err(TrackError::DuplicateTag("rock".to_string()))
        );
        assert_eq!(tags.insert("   "), Err(TrackError::EmptyTag));
        assert_eq!(tags.len(), 1);
    }

    #[test]
    fn test_remove_preserves_order() {
        let mut tags = Tags::new();
        for t in ["a", "B", "c", "d"] {
            tags.insert(t).unwrap();
        }

        tags.remove("b").unwrap();
        assert_eq!(tags.as_slice(), ["a", "c", "d"]);

        assert_eq!(
            tags.remove("zzz"),
            Err(TrackError::TagNotFound("zzz".to_string()))
        );
        assert_eq!(tags.remove(""), Err(TrackError::EmptyTag));
        assert_eq!(tags.as_slice(), ["a", "c", "d"]);
    }

    #[test]
    fn test_contains_and_display() {
        let mut tags = Tags::new();
        assert_eq!(tags.to_string(), "");

        tags.insert("Jazz").unwrap();
        tags.insert("Bebop").unwrap();

        assert!(tags.contains(" jazz "));
        assert!(!tags.contains(""));
        assert!(tags.any_contains("bop"));
        assert!(!tags.any_contains("rock"));
        assert_eq!(tags.to_string(), "Jazz, Bebop");
    }
}
