//! Roll engine: the single mutation path for die values.
//!
//! [`RollEngine`] owns the ordered four-slot value sequence. Nothing else in
//! the crate writes to it; the painter and the announcer only read.

use crate::die::DieValue;
use crate::rng::RngSource;

/// Number of dice in play, fixed for the life of the engine.
pub const DICE_COUNT: usize = 4;

/// Owns the four die values and the roll algorithm.
pub struct RollEngine {
    values: [DieValue; DICE_COUNT],
}

impl RollEngine {
    /// Creates an engine with all faces at zero.
    pub fn new() -> Self {
        Self {
            values: [DieValue::Zero; DICE_COUNT],
        }
    }

    /// Re-draws every slot independently from the random source.
    ///
    /// Does not paint and does not announce; display updates are the
    /// session controller's call.
    pub fn roll(&mut self, rng: &mut dyn RngSource) {
        for value in &mut self.values {
            *value = DieValue::from_unit(rng.next_unit());
        }
    }

    /// Current values in slot order.
    pub fn values(&self) -> &[DieValue; DICE_COUNT] {
        &self.values
    }

    /// Signed total of the current roll.
    pub fn sum(&self) -> i32 {
        self.values.iter().map(|value| value.score()).sum()
    }
}

impl Default for RollEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::PcgRng;

    struct ScriptedRng {
        samples: Vec<f64>,
        next: usize,
    }

    impl ScriptedRng {
        fn new(samples: &[f64]) -> Self {
            Self {
                samples: samples.to_vec(),
                next: 0,
            }
        }
    }

    impl RngSource for ScriptedRng {
        fn next_unit(&mut self) -> f64 {
            let sample = self.samples[self.next % self.samples.len()];
            self.next += 1;
            sample
        }
    }

    #[test]
    fn roll_maps_fixed_samples_to_expected_faces() {
        let mut engine = RollEngine::new();
        let mut rng = ScriptedRng::new(&[0.1, 0.5, 0.9, 0.0]);
        engine.roll(&mut rng);
        assert_eq!(
            engine.values(),
            &[DieValue::Zero, DieValue::Plus, DieValue::Minus, DieValue::Zero]
        );
        assert_eq!(engine.sum(), 0);
    }

    #[test]
    fn every_rolled_face_is_a_valid_value() {
        let mut engine = RollEngine::new();
        let mut rng = PcgRng::seeded(7);
        for _ in 0..100 {
            engine.roll(&mut rng);
            assert_eq!(engine.values().len(), DICE_COUNT);
            for value in engine.values() {
                assert!(matches!(
                    *value,
                    DieValue::Minus | DieValue::Zero | DieValue::Plus
                ));
            }
        }
    }

    #[test]
    fn sum_is_stable_between_rolls() {
        let mut engine = RollEngine::new();
        let mut rng = PcgRng::seeded(99);
        engine.roll(&mut rng);
        let first = engine.sum();
        assert_eq!(engine.sum(), first);
        assert_eq!(engine.sum(), first);
    }

    #[test]
    fn fresh_engine_sums_to_zero() {
        assert_eq!(RollEngine::new().sum(), 0);
    }
}
