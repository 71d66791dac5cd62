//! Landmark types: identified fixed points in the environment.

use serde::{Deserialize, Serialize};

use super::pose::Point2D;

/// A fixed, identifiable point of interest in the environment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Landmark {
    /// Opaque identifier (the measurement "signature")
    pub id: String,
    /// Fixed world position in meters
    pub position: Point2D,
}

impl Landmark {
    /// Create a new landmark.
    pub fn new(id: impl Into<String>, x: f32, y: f32) -> Self {
        Self {
            id: id.into(),
            position: Point2D::new(x, y),
        }
    }
}

/// Insertion-ordered landmark collection.
///
/// Loaded once at startup and shared read-only with the sensor model.
/// Iteration order is the insertion order, which is observable: the sensor
/// model's stable sort falls back to it when two landmarks are equidistant.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LandmarkMap {
    landmarks: Vec<Landmark>,
}

impl LandmarkMap {
    /// Create an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a landmark, preserving insertion order.
    ///
    /// Inserting an id that already exists replaces that landmark in place
    /// without changing its position in the iteration order.
    pub fn insert(&mut self, landmark: Landmark) {
        if let Some(existing) = self.landmarks.iter_mut().find(|l| l.id == landmark.id) {
            *existing = landmark;
        } else {
            self.landmarks.push(landmark);
        }
    }

    /// Look up a landmark by id.
    pub fn get(&self, id: &str) -> Option<&Landmark> {
        self.landmarks.iter().find(|l| l.id == id)
    }

    /// Number of landmarks.
    pub fn len(&self) -> usize {
        self.landmarks.len()
    }

    /// True if the map holds no landmarks.
    pub fn is_empty(&self) -> bool {
        self.landmarks.is_empty()
    }

    /// Iterate in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Landmark> {
        self.landmarks.iter()
    }

    /// True if every landmark position is finite.
    pub fn is_finite(&self) -> bool {
        self.landmarks.iter().all(|l| l.position.is_finite())
    }
}

impl FromIterator<Landmark> for LandmarkMap {
    fn from_iter<I: IntoIterator<Item = Landmark>>(iter: I) -> Self {
        let mut map = LandmarkMap::new();
        for landmark in iter {
            map.insert(landmark);
        }
        map
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insertion_order_preserved() {
        let map: LandmarkMap = [
            Landmark::new("c", 3.0, 1.0),
            Landmark::new("a", 1.0, 1.0),
            Landmark::new("b", 2.0, 1.0),
        ]
        .into_iter()
        .collect();

        let ids: Vec<&str> = map.iter().map(|l| l.id.as_str()).collect();
        assert_eq!(ids, vec!["c", "a", "b"]);
    }

    #[test]
    fn test_insert_replaces_in_place() {
        let mut map = LandmarkMap::new();
        map.insert(Landmark::new("a", 1.0, 1.0));
        map.insert(Landmark::new("b", 2.0, 2.0));
        map.insert(Landmark::new("a", 5.0, 5.0));

        assert_eq!(map.len(), 2);
        assert_eq!(map.get("a").unwrap().position, Point2D::new(5.0, 5.0));
        // Replacement keeps the original slot
        let ids: Vec<&str> = map.iter().map(|l| l.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b"]);
    }

    #[test]
    fn test_get_missing() {
        let map = LandmarkMap::new();
        assert!(map.get("nope").is_none());
        assert!(map.is_empty());
    }

    #[test]
    fn test_is_finite() {
        let mut map = LandmarkMap::new();
        map.insert(Landmark::new("a", 1.0, 1.0));
        assert!(map.is_finite());
        map.insert(Landmark::new("bad", f32::NAN, 0.0));
        assert!(!map.is_finite());
    }
}
