use serde::{Deserialize, Serialize};

/// One named network and its estimated distance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PositionEntry {
    pub ssid: String,
    pub distance: f32,
}

/// Name-to-distance mapping rebuilt from scratch every merge cycle.
///
/// Insertion order is preserved deliberately: the radar layout assigns angles
/// by ordinal position, so the order entries were merged in is observable.
/// The first source to claim a name keeps it; later inserts under the same
/// name are ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PositionMap {
    entries: Vec<PositionEntry>,
}

impl PositionMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts unless the name is already present. Returns whether the entry
    /// was added.
    pub fn insert_first(&mut self, ssid: &str, distance: f32) -> bool {
        if self.contains(ssid) {
            return false;
        }
        self.entries.push(PositionEntry {
            ssid: ssid.to_string(),
            distance,
        });
        true
    }

    pub fn contains(&self, ssid: &str) -> bool {
        self.entries.iter().any(|entry| entry.ssid == ssid)
    }

    pub fn distance_of(&self, ssid: &str) -> Option<f32> {
        self.entries
            .iter()
            .find(|entry| entry.ssid == ssid)
            .map(|entry| entry.distance)
    }

    pub fn iter(&self) -> impl Iterator<Item = &PositionEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn max_distance(&self) -> Option<f32> {
        self.entries
            .iter()
            .map(|entry| entry.distance)
            .fold(None, |acc, d| Some(acc.map_or(d, |m: f32| m.max(d))))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_insert_wins() {
        let mut map = PositionMap::new();
        assert!(map.insert_first("Home", 5.0));
        assert!(!map.insert_first("Home", 9.0));
        assert_eq!(map.distance_of("Home"), Some(5.0));
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn iteration_follows_insertion_order() {
        let mut map = PositionMap::new();
        map.insert_first("c", 1.0);
        map.insert_first("a", 2.0);
        map.insert_first("b", 3.0);
        let names: Vec<_> = map.iter().map(|e| e.ssid.as_str()).collect();
        assert_eq!(names, vec!["c", "a", "b"]);
    }

    #[test]
    fn max_distance_handles_empty_map() {
        let mut map = PositionMap::new();
        assert_eq!(map.max_distance(), None);
        map.insert_first("near", 2.0);
        map.insert_first("far", 8.5);
        assert_eq!(map.max_distance(), Some(8.5));
    }
}
