//! Profile curves: the empirical CDF of one solver's ratios.

use serde::{Deserialize, Serialize};

/// One breakpoint of a profile curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurvePoint {
    /// Performance ratio τ
    pub ratio: f64,
    /// Fraction of problems solved within τ
    pub fraction: f64,
}

/// Right-continuous step function of one solver.
///
/// Starts at `(0, 0)`; breakpoint `k` sits at the k-th smallest ratio with
/// fraction `k / num_problems`. Tied ratios stay as repeated breakpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileCurve {
    solver: String,
    failures: usize,
    points: Vec<CurvePoint>,
}

impl ProfileCurve {
    /// Build the curve of `solver` from its column of the ratio matrix.
    ///
    /// # Examples
    ///
    /// ```
    /// use perfprof::profile::ProfileCurve;
    ///
    /// let curve = ProfileCurve::from_ratios("b", 1, &[2.0, 2.02, 1.0]);
    /// let xs: Vec<f64> = curve.points().iter().map(|p| p.ratio).collect();
    /// assert_eq!(xs, vec![0.0, 1.0, 2.0, 2.02]);
    /// assert_eq!(curve.points().last().map(|p| p.fraction), Some(1.0));
    /// ```
    #[must_use]
    pub fn from_ratios(solver: impl Into<String>, failures: usize, ratios: &[f64]) -> Self {
        let mut sorted = ratios.to_vec();
        sorted.sort_by(f64::total_cmp);

        let n = sorted.len() as f64;
        let points = std::iter::once(CurvePoint {
            ratio: 0.0,
            fraction: 0.0,
        })
        .chain(sorted.into_iter().enumerate().map(|(k, ratio)| CurvePoint {
            ratio,
            fraction: (k + 1) as f64 / n,
        }))
        .collect();

        Self {
            solver: solver.into(),
            failures,
            points,
        }
    }

    /// Solver label
    #[must_use]
    pub fn solver(&self) -> &str {
        &self.solver
    }

    /// Problems this solver failed on
    #[must_use]
    pub fn failures(&self) -> usize {
        self.failures
    }

    /// Breakpoints, origin first
    #[must_use]
    pub fn points(&self) -> &[CurvePoint] {
        &self.points
    }

    /// Number of problems behind the curve
    #[must_use]
    pub fn num_problems(&self) -> usize {
        self.points.len() - 1
    }

    /// Ratio at which the curve reaches 1.0
    #[must_use]
    pub fn max_ratio(&self) -> f64 {
        self.points.last().map_or(0.0, |p| p.ratio)
    }

    /// Step-function value at `tau`: fraction of problems with ratio ≤ `tau`.
    #[must_use]
    pub fn fraction_at(&self, tau: f64) -> f64 {
        let n = self.num_problems();
        if n == 0 {
            return 0.0;
        }
        let solved = self.points[1..].partition_point(|p| p.ratio <= tau);
        solved as f64 / n as f64
    }

    /// Vertices of the "post" step polyline.
    ///
    /// Each breakpoint is reached horizontally at the previous fraction and
    /// then vertically. When `x_end` lies past the last breakpoint the line is
    /// extended flat to it.
    #[must_use]
    pub fn step_polyline(&self, x_end: f64) -> Vec<(f64, f64)> {
        let mut vertices = Vec::with_capacity(self.points.len() * 2 + 1);
        let mut prev = self.points[0];
        vertices.push((prev.ratio, prev.fraction));

        for p in &self.points[1..] {
            vertices.push((p.ratio, prev.fraction));
            vertices.push((p.ratio, p.fraction));
            prev = *p;
        }

        if x_end > prev.ratio {
            vertices.push((x_end, prev.fraction));
        }
        vertices
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(curve: &ProfileCurve) -> Vec<(f64, f64)> {
        curve.points().iter().map(|p| (p.ratio, p.fraction)).collect()
    }

    #[test]
    fn test_ties_are_kept_as_repeated_breakpoints() {
        let curve = ProfileCurve::from_ratios("a", 0, &[1.0, 1.0, 1.0]);
        assert_eq!(
            pairs(&curve),
            vec![(0.0, 0.0), (1.0, 1.0 / 3.0), (1.0, 2.0 / 3.0), (1.0, 1.0)]
        );
    }

    #[test]
    fn test_unsorted_column_is_sorted() {
        let curve = ProfileCurve::from_ratios("b", 1, &[2.0, 2.02, 1.0]);
        assert_eq!(
            pairs(&curve),
            vec![(0.0, 0.0), (1.0, 1.0 / 3.0), (2.0, 2.0 / 3.0), (2.02, 1.0)]
        );
        assert_eq!(curve.failures(), 1);
        assert_eq!(curve.solver(), "b");
        assert_eq!(curve.num_problems(), 3);
        assert!((curve.max_ratio() - 2.02).abs() < f64::EPSILON);
    }

    #[test]
    fn test_fraction_at_is_right_continuous() {
        let curve = ProfileCurve::from_ratios("b", 0, &[1.0, 2.0, 4.0, 4.0]);
        assert_eq!(curve.fraction_at(0.5), 0.0);
        assert_eq!(curve.fraction_at(1.0), 0.25);
        assert_eq!(curve.fraction_at(1.999), 0.25);
        assert_eq!(curve.fraction_at(2.0), 0.5);
        assert_eq!(curve.fraction_at(4.0), 1.0);
        assert_eq!(curve.fraction_at(100.0), 1.0);
    }

    #[test]
    fn test_log_scale_winners_count_at_zero() {
        let curve = ProfileCurve::from_ratios("a", 0, &[0.0, 0.0, 1.5]);
        assert!((curve.fraction_at(0.0) - 2.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_step_polyline_shape() {
        let curve = ProfileCurve::from_ratios("a", 0, &[2.0, 1.0]);
        assert_eq!(
            curve.step_polyline(3.0),
            vec![
                (0.0, 0.0),
                (1.0, 0.0),
                (1.0, 0.5),
                (2.0, 0.5),
                (2.0, 1.0),
                (3.0, 1.0),
            ]
        );
        // no flat extension when the axis ends before the last breakpoint
        assert_eq!(curve.step_polyline(1.5).last(), Some(&(2.0, 1.0)));
    }

    #[test]
    fn test_empty_column_yields_origin_only() {
        let curve = ProfileCurve::from_ratios("a", 0, &[]);
        assert_eq!(pairs(&curve), vec![(0.0, 0.0)]);
        assert_eq!(curve.fraction_at(1.0), 0.0);
    }
}
