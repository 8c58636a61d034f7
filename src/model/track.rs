use super::ids::{IdGenerator, TrackId};
use super::tags::Tags;
use crate::error::{Result, TrackError};
use serde::Serialize;
use std::cmp::Ordering;
use std::fmt;

/// Lowest accepted rating
pub const MIN_RATING: u8 = 1;

/// Highest accepted rating
pub const MAX_RATING: u8 = 5;

/// A single track with validated metadata
///
/// Values of this type only exist if construction succeeded, and every setter
/// re-checks its field, so the invariants below always hold:
/// - `title` and `artist` are trimmed and non-empty
/// - `duration_secs` is positive
/// - `rating` is within 1..=5
/// - tags are unique ignoring case
///
/// Comparison (`Ord` and `==`) only looks at rating, title and id.
#[derive(Debug, Clone, Serialize)]
pub struct TrackEntry {
    /// Assigned on construction, never changes
    id: TrackId,

    /// Track title
    title: String,

    /// Artist name
    artist: String,

    /// Track duration in seconds
    duration_secs: u32,

    /// Rating in stars
    rating: u8,

    /// Free-form tags, in insertion order
    tags: Tags,
}

impl TrackEntry {
    /// Create a new entry, taking an id from `ids` only if every field is valid
    ///
    /// Fields are checked in order: title, artist, duration, rating. The first
    /// failing check is reported.
    pub fn new(
        ids: &IdGenerator,
        title: &str,
        artist: &str,
        duration_secs: i64,
        rating: i64,
    ) -> Result<Self> {
        let title = non_empty(title, TrackError::EmptyTitle).or_else(reject)?;
        let artist = non_empty(artist, TrackError::EmptyArtist).or_else(reject)?;
        let duration_secs = check_duration(duration_secs).or_else(reject)?;
        let rating = check_rating(rating).or_else(reject)?;

        let id = ids.next_id().or_else(reject)?;
        log::debug!("Created track #{}: {} - {}", id, artist, title);

        Ok(Self {
            id,
            title,
            artist,
            duration_secs,
            rating,
            tags: Tags::new(),
        })
    }

    pub fn id(&self) -> TrackId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn artist(&self) -> &str {
        &self.artist
    }

    pub fn duration_secs(&self) -> u32 {
        self.duration_secs
    }

    pub fn rating(&self) -> u8 {
        self.rating
    }

    pub fn tags(&self) -> &Tags {
        &self.tags
    }

    /// Replace the title; empty input leaves the entry unchanged
    pub fn set_title(&mut self, title: &str) -> Result<()> {
        self.title = non_empty(title, TrackError::EmptyTitle).or_else(reject)?;
        Ok(())
    }

    /// Replace the artist; empty input leaves the entry unchanged
    pub fn set_artist(&mut self, artist: &str) -> Result<()> {
        self.artist = non_empty(artist, TrackError::EmptyArtist).or_else(reject)?;
        Ok(())
    }

    pub fn set_duration(&mut self, secs: i64) -> Result<()> {
        self.duration_secs = check_duration(secs).or_else(reject)?;
        Ok(())
    }

    pub fn set_rating(&mut self, rating: i64) -> Result<()> {
        self.rating = check_rating(rating).or_else(reject)?;
        Ok(())
    }

    /// Append a tag; fails on empty input or a tag already present in any case
    pub fn add_tag(&mut self, tag: &str) -> Result<()> {
        self.tags.insert(tag).or_else(reject)
    }

    /// Remove the first tag equal to `tag` ignoring case
    pub fn remove_tag(&mut self, tag: &str) -> Result<()> {
        self.tags.remove(tag).or_else(reject)
    }

    /// Case-insensitive substring search over title, artist and tags
    ///
    /// An empty (or whitespace-only) keyword never matches.
    pub fn matches_keyword(&self, keyword: &str) -> bool {
        let keyword = keyword.trim();
        if keyword.is_empty() {
            return false;
        }

        let needle = keyword.to_lowercase();
        self.title.to_lowercase().contains(&needle)
            || self.artist.to_lowercase().contains(&needle)
            || self.tags.any_contains(&needle)
    }
}

/// Log a rejected input and pass the error on
fn reject<T>(err: TrackError) -> Result<T> {
    log::warn!("Ignoring invalid track input: {}", err);
    Err(err)
}

fn non_empty(text: &str, err: TrackError) -> Result<String> {
    let text = text.trim();
    if text.is_empty() {
        Err(err)
    } else {
        Ok(text.to_string())
    }
}

fn check_duration(secs: i64) -> Result<u32> {
    u32::try_from(secs)
        .ok()
        .filter(|s| *s > 0)
        .ok_or(TrackError::InvalidDuration(secs))
}

fn check_rating(rating: i64) -> Result<u8> {
    u8::try_from(rating)
        .ok()
        .filter(|r| (MIN_RATING..=MAX_RATING).contains(r))
        .ok_or(TrackError::RatingOutOfRange(rating))
}

/// `[#id] artist - title (secs) ***` plus `  [tags: a, b]` when tagged
impl fmt::Display for TrackEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[#{}] {} - {} ({}s) {}",
            self.id,
            self.artist,
            self.title,
            self.duration_secs,
            "*".repeat(usize::from(self.rating))
        )?;

        if !self.tags.is_empty() {
            write!(f, "  [tags: {}]", self.tags)?;
        }

        Ok(())
    }
}

/// Display order: highest rating first, then title, then id
impl Ord for TrackEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .rating
            .cmp(&self.rating)
            .then_with(|| self.title.cmp(&other.title))
            .then_with(|| self.id.cmp(&other.id))
    }
}

impl PartialOrd for TrackEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Equality follows the display order: rating, title and id.
///
/// Artist, duration and tags are not compared, so an edited clone still equals
/// its original as long as those three fields agree.
impl PartialEq for TrackEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for TrackEntry {}
