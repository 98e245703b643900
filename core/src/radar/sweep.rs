use crate::radar::RadarFrame;

/// State of the rotating sweep indicator.
///
/// Advanced by the presentation loop's own timer, independent of merge
/// cycles; it reads the current frame only to size the line.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sweep {
    angle_deg: f32,
}

impl Sweep {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn angle_deg(&self) -> f32 {
        self.angle_deg
    }

    /// Advances by one tick, wrapping at a full turn.
    pub fn advance(&mut self, step_deg: f32) {
        self.angle_deg = (self.angle_deg + step_deg).rem_euclid(360.0);
    }

    /// End point of the sweep line for the given frame.
    pub fn tip(&self, frame: &RadarFrame) -> (f32, f32) {
        let radian = self.angle_deg.to_radians();
        let reach = frame.extent / 2.0;
        (
            frame.center_x + reach * radian.cos(),
            frame.center_y + reach * radian.sin(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prelude::RadarConfig;

    #[test]
    fn advance_wraps_at_full_turn() {
        let mut sweep = Sweep::new();
        for _ in 0..179 {
            sweep.advance(2.0);
        }
        assert_eq!(sweep.angle_deg(), 358.0);
        sweep.advance(2.0);
        assert_eq!(sweep.angle_deg(), 0.0);
    }

    #[test]
    fn tip_reaches_the_radar_edge() {
        let frame = RadarFrame::empty(&RadarConfig::default());
        let sweep = Sweep::new();
        let (x, y) = sweep.tip(&frame);
        assert_eq!(x, frame.center_x + frame.extent / 2.0);
        assert!((y - frame.center_y).abs() < 1e-3);
    }
}
