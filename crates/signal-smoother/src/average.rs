//! Rolling-Average Implementation

use crate::SmootherError;

/// Default window capacity
pub const DEFAULT_WINDOW: usize = 5;

/// Fixed-capacity rolling average over a scalar signal.
///
/// Keeps a running sum alongside the circular sample window so each
/// `add` is O(1). While the window is only partially filled the mean is
/// taken over the samples seen so far, never over zero padding.
pub struct RollingAverage {
    /// Circular sample storage
    window: Vec<f32>,
    /// Next write position
    position: usize,
    /// Samples currently held, saturates at capacity
    len: usize,
    /// Running sum of held samples
    sum: f32,
}

impl RollingAverage {
    /// Create a new smoother with the given window capacity
    pub fn new(capacity: usize) -> Result<Self, SmootherError> {
        if capacity == 0 {
            return Err(SmootherError::WindowTooSmall(capacity));
        }
        Ok(Self {
            window: vec![0.0; capacity],
            position: 0,
            len: 0,
            sum: 0.0,
        })
    }

    /// Add a sample and get the current mean
    pub fn add(&mut self, value: f32) -> f32 {
        if self.len == self.window.len() {
            self.sum -= self.window[self.position];
        } else {
            self.len += 1;
        }
        self.window[self.position] = value;
        self.sum += value;
        self.position = (self.position + 1) % self.window.len();
        self.sum / self.len as f32
    }

    /// Number of samples currently in the window
    pub fn len(&self) -> usize {
        self.len
    }

    /// Check if the window holds no samples
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Window capacity
    pub fn capacity(&self) -> usize {
        self.window.len()
    }

    /// Discard all held samples
    pub fn reset(&mut self) {
        self.window.fill(0.0);
        self.position = 0;
        self.len = 0;
        self.sum = 0.0;
    }
}

impl Default for RollingAverage {
    fn default() -> Self {
        Self {
            window: vec![0.0; DEFAULT_WINDOW],
            position: 0,
            len: 0,
            sum: 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_fill_averages_seen_samples() {
        let mut smoother = RollingAverage::new(5).unwrap();
        assert!((smoother.add(0.2) - 0.2).abs() < 1e-6);
        assert!((smoother.add(0.4) - 0.3).abs() < 1e-6);
        assert_eq!(smoother.len(), 2);
    }

    #[test]
    fn test_full_window_drops_oldest() {
        let mut smoother = RollingAverage::new(3).unwrap();
        smoother.add(1.0);
        smoother.add(2.0);
        assert!((smoother.add(3.0) - 2.0).abs() < 1e-6);
        // 1.0 falls out of the window
        assert!((smoother.add(4.0) - 3.0).abs() < 1e-6);
        assert_eq!(smoother.len(), 3);
    }

    #[test]
    fn test_constant_input_is_identity() {
        let mut smoother = RollingAverage::new(4).unwrap();
        for _ in 0..4 {
            assert!((smoother.add(0.27) - 0.27).abs() < 1e-6);
        }
    }

    #[test]
    fn test_reset_clears_history() {
        let mut smoother = RollingAverage::new(3).unwrap();
        smoother.add(0.9);
        smoother.add(0.8);
        smoother.reset();
        assert!(smoother.is_empty());
        // First sample after reset carries full weight
        assert!((smoother.add(0.1) - 0.1).abs() < 1e-6);
    }

    #[test]
    fn test_zero_capacity_rejected() {
        assert!(matches!(
            RollingAverage::new(0),
            Err(SmootherError::WindowTooSmall(0))
        ));
    }

    #[test]
    fn test_default_capacity() {
        let smoother = RollingAverage::default();
        assert_eq!(smoother.capacity(), DEFAULT_WINDOW);
        assert!(smoother.is_empty());
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn mean_matches_naive_window_mean(
                capacity in 1usize..8,
                samples in proptest::collection::vec(0.0f32..1.0, 1..50),
            ) {
                let mut smoother = RollingAverage::new(capacity).unwrap();
                let mut last_mean = 0.0;
                for &s in &samples {
                    last_mean = smoother.add(s);
                }
                let tail_start = samples.len().saturating_sub(capacity);
                let tail = &samples[tail_start..];
                let naive: f32 = tail.iter().sum::<f32>() / tail.len() as f32;
                prop_assert!((last_mean - naive).abs() < 1e-4);
            }

            #[test]
            fn mean_bounded_by_window_extremes(
                capacity in 1usize..8,
                samples in proptest::collection::vec(0.0f32..1.0, 1..50),
            ) {
                let mut smoother = RollingAverage::new(capacity).unwrap();
                let mut last_mean = 0.0;
                for &s in &samples {
                    last_mean = smoother.add(s);
                }
                let tail_start = samples.len().saturating_sub(capacity);
                let tail = &samples[tail_start..];
                let lo = tail.iter().cloned().fold(f32::INFINITY, f32::min);
                let hi = tail.iter().cloned().fold(f32::NEG_INFINITY, f32::max);
                prop_assert!(last_mean >= lo - 1e-5);
                prop_assert!(last_mean <= hi + 1e-5);
            }
        }
    }
}
