//! Chart Scale Math
//!
//! Pure axis and layout calculations, kept free of browser types so they
//! can be unit tested natively.

/// Value bounds for the y-axis.
///
/// The axis never forces a zero baseline, so small fluctuations in a
/// series that hovers around 100 mg/dL stay visible.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ValueBounds {
    pub min: f64,
    pub max: f64,
}

impl ValueBounds {
    /// Compute bounds over every value of every series, padded by 10%
    /// of the observed range. Degenerate ranges are widened so the
    /// chart never divides by zero.
    pub fn from_series<'a, I>(series: I) -> Self
    where
        I: IntoIterator<Item = &'a [f64]>,
    {
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;

        for values in series {
            for &value in values {
                min = min.min(value);
                max = max.max(value);
            }
        }

        if !min.is_finite() || !max.is_finite() {
            // No data at all
            return Self { min: 0.0, max: 1.0 };
        }

        let range = max - min;
        let padding = if range > 0.0 { range * 0.1 } else { 1.0 };
        min -= padding;
        max += padding;

        if min == max {
            min -= 1.0;
            max += 1.0;
        }

        Self { min, max }
    }

    pub fn range(&self) -> f64 {
        self.max - self.min
    }

    /// Pixel y for a value inside a chart area starting at `top` with
    /// the given `height` (canvas y grows downward).
    pub fn y_position(&self, value: f64, top: f64, height: f64) -> f64 {
        top + ((self.max - value) / self.range()) * height
    }

    /// The axis value at grid line `index` of `count`, top line first.
    pub fn tick_value(&self, index: usize, count: usize) -> f64 {
        self.max - (index as f64 / count as f64) * self.range()
    }
}

/// Pixel x for point `index` of `count` equally spaced points inside a
/// chart area starting at `left` with the given `width`.
pub fn x_position(index: usize, count: usize, left: f64, width: f64) -> f64 {
    if count <= 1 {
        return left;
    }
    left + (index as f64 / (count - 1) as f64) * width
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_pad_by_ten_percent() {
        let actual = [100.0, 110.0, 120.0];
        let bounds = ValueBounds::from_series([&actual[..]]);
        assert_eq!(bounds.min, 98.0);
        assert_eq!(bounds.max, 122.0);
    }

    #[test]
    fn bounds_span_all_series() {
        let actual = [100.0, 110.0];
        let predicted = [90.0, 130.0];
        let bounds = ValueBounds::from_series([&actual[..], &predicted[..]]);
        assert_eq!(bounds.min, 86.0);
        assert_eq!(bounds.max, 134.0);
    }

    #[test]
    fn flat_series_is_widened() {
        let flat = [100.0, 100.0, 100.0];
        let bounds = ValueBounds::from_series([&flat[..]]);
        assert_eq!(bounds.min, 99.0);
        assert_eq!(bounds.max, 101.0);
    }

    #[test]
    fn empty_series_gets_unit_bounds() {
        let bounds = ValueBounds::from_series(std::iter::empty::<&[f64]>());
        assert_eq!(bounds, ValueBounds { min: 0.0, max: 1.0 });
    }

    #[test]
    fn zero_is_not_forced_into_the_axis() {
        let high = [200.0, 210.0];
        let bounds = ValueBounds::from_series([&high[..]]);
        assert!(bounds.min > 0.0);
    }

    #[test]
    fn y_position_maps_extremes() {
        let bounds = ValueBounds { min: 100.0, max: 200.0 };
        assert_eq!(bounds.y_position(200.0, 20.0, 300.0), 20.0);
        assert_eq!(bounds.y_position(100.0, 20.0, 300.0), 320.0);
        assert_eq!(bounds.y_position(150.0, 20.0, 300.0), 170.0);
    }

    #[test]
    fn x_positions_span_chart_width() {
        assert_eq!(x_position(0, 10, 60.0, 720.0), 60.0);
        assert_eq!(x_position(9, 10, 60.0, 720.0), 780.0);
        assert_eq!(x_position(1, 10, 60.0, 720.0), 140.0);
    }

    #[test]
    fn single_point_sits_at_left_edge() {
        assert_eq!(x_position(0, 1, 60.0, 720.0), 60.0);
    }

    #[test]
    fn tick_values_descend_from_max() {
        let bounds = ValueBounds { min: 0.0, max: 100.0 };
        assert_eq!(bounds.tick_value(0, 5), 100.0);
        assert_eq!(bounds.tick_value(5, 5), 0.0);
        assert_eq!(bounds.tick_value(1, 5), 80.0);
    }
}
