use serde::{Deserialize, Serialize};

use crate::core::capabilities::Animatable;

/// Scalar that can be driven from its current value toward a target.
///
/// While a data animation runs, `value = origin + diff * progress`.
/// [`AnimatedValue::finish`] snaps to `origin + diff` and clears the delta, so
/// finishing twice is a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct AnimatedValue {
    value: f32,
    origin: f32,
    diff: f32,
}

impl AnimatedValue {
    #[must_use]
    pub fn new(value: f32) -> Self {
        Self {
            value,
            origin: value,
            diff: 0.0,
        }
    }

    #[must_use]
    pub fn value(self) -> f32 {
        self.value
    }

    #[must_use]
    pub fn origin(self) -> f32 {
        self.origin
    }

    /// Remaining delta toward the target; zero when no target is pending.
    #[must_use]
    pub fn diff(self) -> f32 {
        self.diff
    }

    #[must_use]
    pub fn target(self) -> f32 {
        self.origin + self.diff
    }

    /// Sets the value immediately and drops any pending target.
    pub fn set_value(&mut self, value: f32) {
        *self = Self::new(value);
    }

    /// Freezes the current value as origin and aims at `target`.
    pub fn set_target(&mut self, target: f32) {
        let current = self.value;
        self.set_value(current);
        self.diff = target - current;
    }
}

impl Animatable for AnimatedValue {
    fn update(&mut self, progress: f32) {
        self.value = self.origin + self.diff * progress;
    }

    fn finish(&mut self) {
        let target = self.origin + self.diff;
        self.set_value(target);
    }
}

/// Broadcasts `progress` to every value of a series.
pub(crate) fn update_all<T: Animatable + Send>(values: &mut [T], progress: f32) {
    #[cfg(feature = "parallel-animation")]
    {
        use rayon::prelude::*;
        values.par_iter_mut().for_each(|value| value.update(progress));
    }

    #[cfg(not(feature = "parallel-animation"))]
    {
        for value in values {
            value.update(progress);
        }
    }
}

pub(crate) fn finish_all<T: Animatable + Send>(values: &mut [T]) {
    #[cfg(feature = "parallel-animation")]
    {
        use rayon::prelude::*;
        values.par_iter_mut().for_each(|value| value.finish());
    }

    #[cfg(not(feature = "parallel-animation"))]
    {
        for value in values {
            value.finish();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::AnimatedValue;
    use crate::core::Animatable;

    #[test]
    fn update_interpolates_from_origin() {
        let mut value = AnimatedValue::new(10.0);
        value.set_target(30.0);
        value.update(0.25);
        assert_eq!(value.value(), 15.0);
        assert_eq!(value.origin(), 10.0);
        assert_eq!(value.target(), 30.0);
    }

    #[test]
    fn retargeting_mid_flight_starts_from_current_value() {
        let mut value = AnimatedValue::new(0.0);
        value.set_target(10.0);
        value.update(0.5);
        value.set_target(-5.0);
        assert_eq!(value.origin(), 5.0);
        assert_eq!(value.diff(), -10.0);
    }

    #[test]
    fn finish_is_idempotent() {
        let mut value = AnimatedValue::new(1.0);
        value.set_target(4.0);
        value.update(0.5);
        value.finish();
        assert_eq!(value.value(), 4.0);
        assert_eq!(value.diff(), 0.0);
        value.finish();
        assert_eq!(value.value(), 4.0);
    }
}
