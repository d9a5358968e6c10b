//! Stop identifier and stop types.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A canonical stop identifier.
///
/// Identifiers are normalized at construction: surrounding whitespace is
/// trimmed and the text is lower-cased. Two `StopId`s constructed from
/// "Kaneshie" and " kaneshie " are therefore equal. No further normalization
/// (accent folding, fuzzy matching) is performed; resolving arbitrary user
/// text to an id is the caller's job, not this type's.
///
/// # Examples
///
/// ```
/// use trotro_server::domain::StopId;
///
/// let a = StopId::new("Kaneshie");
/// let b = StopId::new("  kaneshie ");
/// assert_eq!(a, b);
/// assert_eq!(a.as_str(), "kaneshie");
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String")]
#[serde(into = "String")]
pub struct StopId(String);

impl StopId {
    /// Create a stop id from raw text, normalizing it.
    pub fn new(raw: &str) -> Self {
        StopId(raw.trim().to_lowercase())
    }

    /// Returns the normalized id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// An empty id. Empty ids are never registered by seeding, so looking
    /// one up simply finds no stop.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<String> for StopId {
    fn from(raw: String) -> Self {
        StopId::new(&raw)
    }
}

impl From<StopId> for String {
    fn from(id: StopId) -> Self {
        id.0
    }
}

impl From<&str> for StopId {
    fn from(raw: &str) -> Self {
        StopId::new(raw)
    }
}

impl fmt::Debug for StopId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StopId({})", self.0)
    }
}

impl fmt::Display for StopId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A named location node in the transit graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stop {
    /// Canonical identifier, unique within a graph.
    pub id: StopId,

    /// Human-readable display name.
    pub name: String,

    /// Geographic coordinate pair `[lat, lng]`.
    pub coords: (f64, f64),
}

impl Stop {
    /// Create a stop with the given id, name and coordinates.
    pub fn new(id: impl Into<StopId>, name: impl Into<String>, coords: (f64, f64)) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            coords,
        }
    }

    /// Create a stop for an identifier we know nothing else about.
    ///
    /// Used when a contributed record references an unknown stop: the raw
    /// (trimmed) text doubles as the display name and the coordinate is a
    /// placeholder.
    pub fn placeholder(raw_name: &str) -> Self {
        Self {
            id: StopId::new(raw_name),
            name: raw_name.trim().to_string(),
            coords: (0.0, 0.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_case_and_whitespace() {
        assert_eq!(StopId::new("Kaneshie").as_str(), "kaneshie");
        assert_eq!(StopId::new("  LAPAZ  ").as_str(), "lapaz");
        assert_eq!(StopId::new("circle").as_str(), "circle");
    }

    #[test]
    fn equality_after_normalization() {
        assert_eq!(StopId::new("Madina"), StopId::new(" madina"));
        assert_ne!(StopId::new("madina"), StopId::new("osu"));
    }

    #[test]
    fn empty_input_gives_empty_id() {
        assert!(StopId::new("").is_empty());
        assert!(StopId::new("   ").is_empty());
        assert!(!StopId::new("37").is_empty());
    }

    #[test]
    fn display_and_debug() {
        let id = StopId::new("Tema");
        assert_eq!(format!("{}", id), "tema");
        assert_eq!(format!("{:?}", id), "StopId(tema)");
    }

    #[test]
    fn hash_consistent_with_eq() {
        use std::collections::HashSet;
        let mut set = HashSet::new();
        set.insert(StopId::new("Circle"));
        assert!(set.contains(&StopId::new("circle")));
        assert!(!set.contains(&StopId::new("accra")));
    }

    #[test]
    fn serde_roundtrip_normalizes() {
        let id: StopId = serde_json::from_str("\" Kaneshie \"").unwrap();
        assert_eq!(id.as_str(), "kaneshie");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"kaneshie\"");
    }

    #[test]
    fn placeholder_stop() {
        let stop = Stop::placeholder("  Kaneshie ");
        assert_eq!(stop.id, StopId::new("kaneshie"));
        assert_eq!(stop.name, "Kaneshie");
        assert_eq!(stop.coords, (0.0, 0.0));
    }
}
