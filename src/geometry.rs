//! Contour refinement
//!
//! CONTUR prints the wall contour as sparse knots of position, radius and
//! slope. Between each pair of adjacent knots the unique cubic matching both
//! values and both slopes is sampled at evenly spaced positions, giving a
//! dense curve suitable for plotting or machining.

use crate::error::{ConturError, Result};
use crate::models::CurvePoint;
use crate::parser::table::Table;
use nalgebra::{Matrix4, Vector4};
use tracing::debug;

/// A contour knot: position, perpendicular offset and slope
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Knot {
    pub x: f64,
    pub y: f64,
    pub slope: f64,
}

/// Piecewise cubic contour through slope-constrained knots
#[derive(Debug, Clone)]
pub struct GeometryRefiner {
    knots: Vec<Knot>,
}

impl GeometryRefiner {
    /// Create a refiner; knots are sorted by position
    pub fn new(mut knots: Vec<Knot>) -> Self {
        knots.sort_by(|a, b| a.x.total_cmp(&b.x));
        Self { knots }
    }

    /// Knots from rows whose first three values are position, offset and slope
    pub fn from_rows(rows: &[Vec<f64>]) -> Result<Self> {
        let knots = rows
            .iter()
            .map(|row| match row.as_slice() {
                [x, y, slope, ..] => Ok(Knot {
                    x: *x,
                    y: *y,
                    slope: *slope,
                }),
                _ => Err(ConturError::malformed_table(format!(
                    "coordinate row needs position, offset and slope, got {} values",
                    row.len()
                ))),
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self::new(knots))
    }

    pub fn from_table(table: &Table) -> Result<Self> {
        Self::from_rows(table.rows())
    }

    pub fn knots(&self) -> &[Knot] {
        &self.knots
    }

    /// Sample every segment at `points` evenly spaced positions
    ///
    /// Segment endpoints appear twice where segments meet; the first and
    /// last sample of each segment reproduce its knots.
    pub fn refine(&self, points: usize) -> Result<Vec<CurvePoint>> {
        if points < 2 {
            return Err(ConturError::InvalidPointCount { count: points });
        }

        let mut curve = Vec::with_capacity(self.knots.len().saturating_sub(1) * points);
        for (index, pair) in self.knots.windows(2).enumerate() {
            let cubic = HermiteCubic::fit(&pair[0], &pair[1])
                .ok_or(ConturError::SingularSegment { index })?;
            curve.extend(cubic.sample(points));
        }

        debug!(
            "Refined {} knots into {} samples",
            self.knots.len(),
            curve.len()
        );
        Ok(curve)
    }
}

/// Cubic `a t^3 + b t^2 + c t + d` in the local coordinate `t = x - x0`
#[derive(Debug, Clone)]
struct HermiteCubic {
    x0: f64,
    x1: f64,
    coefficients: Vector4<f64>,
}

impl HermiteCubic {
    /// Solve for the cubic matching value and slope at both knots
    fn fit(start: &Knot, end: &Knot) -> Option<Self> {
        let h = end.x - start.x;
        if h == 0.0 || !h.is_finite() {
            return None;
        }

        #[rustfmt::skip]
        let matrix = Matrix4::new(
            0.0,             0.0,       0.0, 1.0,
            0.0,             0.0,       1.0, 0.0,
            h.powi(3),       h.powi(2), h,   1.0,
            3.0 * h.powi(2), 2.0 * h,   1.0, 0.0,
        );
        let rhs = Vector4::new(start.y, start.slope, end.y, end.slope);

        Some(Self {
            x0: start.x,
            x1: end.x,
            coefficients: matrix.lu().solve(&rhs)?,
        })
    }

    fn eval(&self, t: f64) -> f64 {
        self.coefficients
            .iter()
            .fold(0.0, |acc, coefficient| acc * t + coefficient)
    }

    fn sample(&self, points: usize) -> impl Iterator<Item = CurvePoint> + '_ {
        let h = self.x1 - self.x0;
        let last = points - 1;
        (0..points).map(move |i| {
            if i == last {
                return CurvePoint::new(self.x1, self.eval(h));
            }
            let t = h * i as f64 / last as f64;
            CurvePoint::new(self.x0 + t, self.eval(t))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn knot(x: f64, y: f64, slope: f64) -> Knot {
        Knot { x, y, slope }
    }

    #[test]
    fn test_cubic_reproduces_exact_cubic() {
        // y = x^3 - x, y' = 3x^2 - 1
        let f = |x: f64| x.powi(3) - x;
        let df = |x: f64| 3.0 * x * x - 1.0;
        let cubic = HermiteCubic::fit(&knot(1.0, f(1.0), df(1.0)), &knot(3.0, f(3.0), df(3.0)))
            .unwrap();

        for point in cubic.sample(9) {
            assert!((point.y - f(point.x)).abs() < 1e-9);
        }
    }

    #[test]
    fn test_coincident_knots_are_singular() {
        assert!(HermiteCubic::fit(&knot(1.0, 0.0, 0.0), &knot(1.0, 1.0, 0.0)).is_none());

        let refiner = GeometryRefiner::new(vec![knot(1.0, 0.0, 0.0), knot(1.0, 1.0, 0.0)]);
        assert!(matches!(
            refiner.refine(3),
            Err(ConturError::SingularSegment { index: 0 })
        ));
    }

    #[test]
    fn test_unordered_knots_are_sorted_before_fitting() {
        let refiner = GeometryRefiner::new(vec![
            knot(2.0, 3.0, 1.0),
            knot(0.0, 1.0, 1.0),
            knot(1.0, 2.0, 1.0),
        ]);
        let xs: Vec<f64> = refiner.knots().iter().map(|k| k.x).collect();
        assert_eq!(xs, vec![0.0, 1.0, 2.0]);

        let curve = refiner.refine(3).unwrap();
        assert_eq!(curve.len(), 6);
        assert_eq!(curve[0].x, 0.0);
        assert!((curve[0].y - 1.0).abs() < 1e-12);
        assert!(curve.windows(2).all(|pair| pair[0].x <= pair[1].x));
        assert_eq!(curve[5].x, 2.0);
        assert!((curve[5].y - 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_from_rows_needs_three_values() {
        let result = GeometryRefiner::from_rows(&[vec![0.0, 1.0]]);
        assert!(matches!(result, Err(ConturError::MalformedTable { .. })));
    }
}
