use super::{TrackEntry, TrackId};

/// Collection of track entries, kept in insertion order
#[derive(Debug, Clone, Default)]
pub struct Library {
    tracks: Vec<TrackEntry>,
}

impl Library {
    /// Create a new empty library
    pub fn new() -> Self {
        Self { tracks: Vec::new() }
    }

    /// Add a track to the library
    pub fn add_track(&mut self, track: TrackEntry) {
        self.tracks.push(track);
    }

    /// Get a track by ID
    pub fn get_track(&self, id: TrackId) -> Option<&TrackEntry> {
        self.tracks.iter().find(|t| t.id() == id)
    }

    /// Get a track by ID for editing
    pub fn get_track_mut(&mut self, id: TrackId) -> Option<&mut TrackEntry> {
        self.tracks.iter_mut().find(|t| t.id() == id)
    }

    /// Remove a track, returning it if it was present
    pub fn remove_track(&mut self, id: TrackId) -> Option<TrackEntry> {
        let index = self.tracks.iter().position(|t| t.id() == id)?;
        Some(self.tracks.remove(index))
    }

    /// Get all tracks
    pub fn tracks(&self) -> impl Iterator<Item = &TrackEntry> {
        self.tracks.iter()
    }

    /// Total number of tracks
    pub fn track_count(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    /// Tracks matching a keyword, in insertion order
    pub fn search(&self, keyword: &str) -> Vec<&TrackEntry> {
        self.tracks
            .iter()
            .filter(|t| t.matches_keyword(keyword))
            .collect()
    }

    /// Tracks carrying a tag (ignoring case), in insertion order
    pub fn with_tag(&self, tag: &str) -> Vec<&TrackEntry> {
        self.tracks.iter().filter(|t| t.tags().contains(tag)).collect()
    }

    /// All tracks in display order
    pub fn sorted(&self) -> Vec<&TrackEntry> {
        let mut sorted: Vec<&TrackEntry> = self.tracks.iter().collect();
        sorted.sort();
        sorted
    }
}
