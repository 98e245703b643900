use crate::merge::PositionMap;
use crate::prelude::RadarConfig;
use crate::radar::Direction;
use serde::{Deserialize, Serialize};

/// Drawing data for one network on the radar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RadarPoint {
    pub ssid: String,
    pub distance: f32,
    pub angle_deg: f32,
    pub radius: f32,
    pub x: f32,
    pub y: f32,
    pub direction: Direction,
}

/// One laid-out presentation frame. Transient; rebuilt every merge cycle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RadarFrame {
    pub extent: f32,
    pub center_x: f32,
    pub center_y: f32,
    pub entries: Vec<RadarPoint>,
}

impl RadarFrame {
    /// A frame with no entries at the default extent. The presenter renders
    /// it as a bare scope: circle and sweep, nothing plotted.
    pub fn empty(config: &RadarConfig) -> Self {
        let center = config.default_extent / 2.0;
        Self {
            extent: config.default_extent,
            center_x: center,
            center_y: center,
            entries: Vec::new(),
        }
    }
}

/// Lays out one frame from a merged position map.
///
/// Angles carry no bearing information: entry i of N is placed at
/// `360 * i / N` degrees, spread evenly by ordinal position alone. The
/// extent grows to twice the scaled maximum distance whenever the farthest
/// point would otherwise land outside the default radius; an empty map falls
/// back to the default extent.
pub fn layout(positions: &PositionMap, config: &RadarConfig) -> RadarFrame {
    let mut extent = config.default_extent;
    if let Some(max_distance) = positions.max_distance() {
        let scaled = max_distance * config.distance_scale;
        if scaled > extent / 2.0 {
            extent = scaled * 2.0;
        }
    }

    let center = extent / 2.0;
    let total = positions.len();
    let entries = positions
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            let angle_deg = (index as f32 / total as f32) * 360.0;
            let radius = entry.distance * config.distance_scale;
            let radian = angle_deg.to_radians();
            RadarPoint {
                ssid: entry.ssid.clone(),
                distance: entry.distance,
                angle_deg,
                radius,
                x: center + radius * radian.cos(),
                y: center + radius * radian.sin(),
                direction: Direction::from_angle(angle_deg),
            }
        })
        .collect();

    RadarFrame {
        extent,
        center_x: center,
        center_y: center,
        entries,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map_of(entries: &[(&str, f32)]) -> PositionMap {
        let mut map = PositionMap::new();
        for (ssid, distance) in entries {
            map.insert_first(ssid, *distance);
        }
        map
    }

    #[test]
    fn entries_are_spread_evenly_by_ordinal() {
        let config = RadarConfig::default();
        let map = map_of(&[("a", 1.0), ("b", 1.0), ("c", 1.0), ("d", 1.0)]);
        let frame = layout(&map, &config);

        let angles: Vec<_> = frame.entries.iter().map(|e| e.angle_deg).collect();
        assert_eq!(angles, vec![0.0, 90.0, 180.0, 270.0]);
    }

    #[test]
    fn single_entry_sits_at_zero_degrees() {
        let config = RadarConfig::default();
        let frame = layout(&map_of(&[("only", 4.0)]), &config);
        assert_eq!(frame.entries.len(), 1);
        assert_eq!(frame.entries[0].angle_deg, 0.0);
        assert_eq!(frame.entries[0].direction, Direction::N);
    }

    #[test]
    fn empty_map_yields_default_extent_and_no_entries() {
        let config = RadarConfig::default();
        let frame = layout(&PositionMap::new(), &config);
        assert_eq!(frame.extent, config.default_extent);
        assert_eq!(frame.center_x, config.default_extent / 2.0);
        assert!(frame.entries.is_empty());
    }

    #[test]
    fn extent_grows_to_fit_the_farthest_point() {
        let config = RadarConfig::default();
        // 16 * 30 = 480 > 950 / 2, so the radar doubles the scaled maximum
        let frame = layout(&map_of(&[("near", 2.0), ("far", 16.0)]), &config);
        assert_eq!(frame.extent, 960.0);
        assert_eq!(frame.center_x, 480.0);

        // 10 * 30 = 300 fits inside the default radius
        let frame = layout(&map_of(&[("near", 10.0)]), &config);
        assert_eq!(frame.extent, config.default_extent);
    }

    #[test]
    fn radius_scales_distance_by_thirty() {
        let config = RadarConfig::default();
        let frame = layout(&map_of(&[("A", 5.0)]), &config);
        let entry = &frame.entries[0];
        assert_eq!(entry.radius, 150.0);
        assert_eq!(entry.x, frame.center_x + 150.0);
        assert!((entry.y - frame.center_y).abs() < 1e-3);
    }
}
