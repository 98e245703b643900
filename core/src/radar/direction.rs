use serde::{Deserialize, Serialize};
use std::fmt;

/// Eight-way compass label derived from a display angle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    N,
    NE,
    E,
    SE,
    S,
    SW,
    W,
    NW,
}

impl Direction {
    pub const ALL: [Direction; 8] = [
        Direction::N,
        Direction::NE,
        Direction::E,
        Direction::SE,
        Direction::S,
        Direction::SW,
        Direction::W,
        Direction::NW,
    ];

    /// Buckets an angle into 45-degree sectors centered on the compass
    /// points. North owns the wrap-around sector [337.5, 360) and [0, 22.5).
    pub fn from_angle(angle_deg: f32) -> Self {
        let angle = angle_deg.rem_euclid(360.0);
        let sector = ((angle + 22.5) / 45.0) as usize % 8;
        Self::ALL[sector]
    }

    pub fn label(&self) -> &'static str {
        match self {
            Direction::N => "N",
            Direction::NE => "NE",
            Direction::E => "E",
            Direction::SE => "SE",
            Direction::S => "S",
            Direction::SW => "SW",
            Direction::W => "W",
            Direction::NW => "NW",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cardinal_angles_map_to_their_directions() {
        assert_eq!(Direction::from_angle(0.0), Direction::N);
        assert_eq!(Direction::from_angle(90.0), Direction::E);
        assert_eq!(Direction::from_angle(180.0), Direction::S);
        assert_eq!(Direction::from_angle(270.0), Direction::W);
    }

    #[test]
    fn sector_boundaries_round_toward_the_next_direction() {
        assert_eq!(Direction::from_angle(22.4), Direction::N);
        assert_eq!(Direction::from_angle(22.5), Direction::NE);
        assert_eq!(Direction::from_angle(44.0), Direction::NE);
        assert_eq!(Direction::from_angle(67.5), Direction::E);
        assert_eq!(Direction::from_angle(337.5), Direction::N);
    }

    #[test]
    fn north_owns_the_wrap_around_sector() {
        assert_eq!(Direction::from_angle(359.0), Direction::N);
        assert_eq!(Direction::from_angle(360.0), Direction::N);
        assert_eq!(Direction::from_angle(-10.0), Direction::N);
    }
}
