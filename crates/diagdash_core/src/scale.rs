//! Fixed axis domains and linear value scaling

/// Left axis: accuracy percentage.
pub const ACCURACY_AXIS: AxisDomain = AxisDomain::new(80.0, 100.0);

/// Right axis: dataset sample count.
pub const SAMPLES_AXIS: AxisDomain = AxisDomain::new(0.0, 1600.0);

/// Number of grid intervals drawn on each axis
pub const TICK_INTERVALS: usize = 5;

/// A closed numeric interval mapped onto a vertical axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisDomain {
    pub min: f64,
    pub max: f64,
}

impl AxisDomain {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    /// Relative position of `value` on the axis, clamped to [0, 1].
    ///
    /// Non-finite values and degenerate domains map to 0.
    pub fn fraction(&self, value: f64) -> f64 {
        let span = self.span();
        if !value.is_finite() || span <= 0.0 {
            return 0.0;
        }
        ((value - self.min) / span).clamp(0.0, 1.0)
    }

    /// Bar height in eighths of a cell for a plot `rows` cells tall.
    pub fn eighths(&self, value: f64, rows: usize) -> usize {
        (self.fraction(value) * (rows * 8) as f64).round() as usize
    }

    /// Evenly spaced tick values from `min` to `max` inclusive.
    pub fn ticks(&self, intervals: usize) -> Vec<f64> {
        if intervals == 0 {
            return vec![self.min, self.max];
        }
        let step = self.span() / intervals as f64;
        (0..=intervals)
            .map(|i| self.min + step * i as f64)
            .collect()
    }
}
