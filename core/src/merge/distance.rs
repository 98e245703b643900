/// Mock signal-to-distance conversion.
///
/// This is a placeholder, not a propagation model: it maps the reported
/// signal value linearly into distance units and clamps to [1, 10]. It is
/// monotonic in the input, which is all the radar layout relies on. Keep the
/// formula as-is; downstream tests depend on its exact output.
pub fn estimate_distance(signal: i32) -> f32 {
    ((100.0 + signal as f32) / 10.0).clamp(1.0, 10.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_dbm_values_map_linearly() {
        assert_eq!(estimate_distance(-40), 6.0);
        assert_eq!(estimate_distance(-50), 5.0);
        assert_eq!(estimate_distance(-70), 3.0);
    }

    #[test]
    fn output_is_clamped_to_unit_range() {
        assert_eq!(estimate_distance(-120), 1.0);
        assert_eq!(estimate_distance(-1000), 1.0);
        assert_eq!(estimate_distance(50), 10.0);
        assert_eq!(estimate_distance(i32::MAX / 2), 10.0);
    }

    #[test]
    fn estimate_is_monotonic() {
        let mut last = estimate_distance(-130);
        for signal in (-129..=10).step_by(7) {
            let next = estimate_distance(signal);
            assert!(next >= last);
            last = next;
        }
    }
}
