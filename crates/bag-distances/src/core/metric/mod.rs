//! Point-to-point distances, with optional range normalization.

use distances::number::Float;
use serde::{Deserialize, Serialize};

use super::{bag::Point, DistanceError};

mod stats;

pub use stats::RangeStats;

/// The Euclidean distance between two [`Point`]s, with optional
/// per-dimension range normalization.
///
/// In the unnormalized mode, `distance` is plain Euclidean distance and
/// needs no statistics. In the normalized mode, each per-dimension
/// difference is divided by the range observed in the owned
/// [`RangeStats`] before being squared, so `distance` requires the
/// statistics to have been seeded first. A dimension whose observed
/// range is zero contributes its raw, unscaled difference; see
/// [`RangeStats`] for how the statistics evolve.
///
/// `distance` is a pure function of the two points and the current
/// statistics: it never mutates the statistics.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PointMetric<F: Float> {
    /// Whether distances are normalized by the per-dimension ranges.
    normalized: bool,
    /// The owned running statistics, absent until `initialize`.
    stats: Option<RangeStats<F>>,
}

impl<F: Float> PointMetric<F> {
    /// Creates a new `PointMetric`, normalized or not. No statistics are
    /// held until [`initialize`](Self::initialize) is called.
    #[must_use]
    pub const fn new(normalized: bool) -> Self {
        Self { normalized, stats: None }
    }

    /// Whether this metric normalizes differences by per-dimension ranges.
    #[must_use]
    pub const fn is_normalized(&self) -> bool {
        self.normalized
    }

    /// Whether [`initialize`](Self::initialize) has succeeded at least
    /// once.
    #[must_use]
    pub const fn has_statistics(&self) -> bool {
        self.stats.is_some()
    }

    /// The owned running statistics, if seeded.
    #[must_use]
    pub const fn stats(&self) -> Option<&RangeStats<F>> {
        self.stats.as_ref()
    }

    /// Resets the statistics from a non-empty collection of points.
    ///
    /// On failure the previously held statistics, if any, are kept.
    ///
    /// # Errors
    ///
    /// * [`DistanceError::EmptyInput`] if `points` yields no points.
    /// * [`DistanceError::DimensionMismatch`] if the points do not all
    ///   share one dimensionality.
    pub fn initialize<'a, I: IntoIterator<Item = &'a Point<F>>>(&mut self, points: I) -> Result<(), DistanceError>
    where
        F: 'a,
    {
        self.stats = Some(RangeStats::from_points(points)?);
        Ok(())
    }

    /// Folds a new point into the running statistics.
    ///
    /// # Errors
    ///
    /// * [`DistanceError::NotInitialized`] if `initialize` has not
    ///   succeeded yet.
    /// * [`DistanceError::DimensionMismatch`] if the point's
    ///   dimensionality differs from the statistics'.
    pub fn fold(&mut self, point: &Point<F>) -> Result<(), DistanceError> {
        self.stats
            .as_mut()
            .ok_or(DistanceError::NotInitialized)
            .and_then(|stats| stats.fold(point))
    }

    /// The distance between two points under the current statistics.
    ///
    /// # Errors
    ///
    /// * [`DistanceError::DimensionMismatch`] if the points disagree on
    ///   dimensionality, or disagree with the statistics of a normalized
    ///   metric.
    /// * [`DistanceError::NotInitialized`] if the metric is normalized
    ///   and no statistics have been seeded.
    pub fn distance(&self, u: &Point<F>, v: &Point<F>) -> Result<F, DistanceError> {
        self.validate(u.dimensionality(), v.dimensionality())?;
        Ok(self.raw_distance(u, v))
    }

    /// Checks that two operand dimensionalities agree with each other
    /// and, for a normalized metric, with the statistics.
    pub(crate) fn validate(&self, expected: usize, found: usize) -> Result<(), DistanceError> {
        if expected != found {
            return Err(DistanceError::DimensionMismatch { expected, found });
        }
        if self.normalized {
            match &self.stats {
                None => return Err(DistanceError::NotInitialized),
                Some(stats) if stats.dimensionality() != expected => {
                    return Err(DistanceError::DimensionMismatch {
                        expected: stats.dimensionality(),
                        found: expected,
                    });
                }
                Some(_) => {}
            }
        }
        Ok(())
    }

    /// The distance kernel, assuming operands already validated.
    pub(crate) fn raw_distance(&self, u: &Point<F>, v: &Point<F>) -> F {
        match &self.stats {
            Some(stats) if self.normalized => {
                let sq_sum = u
                    .values()
                    .iter()
                    .zip(v.values())
                    .enumerate()
                    .fold(F::ZERO, |acc, (i, (&x, &y))| {
                        let diff = x.abs_diff(y);
                        let range = stats.range(i);
                        let diff = if range > F::ZERO { diff / range } else { diff };
                        diff.mul_add(diff, acc)
                    });
                sq_sum.sqrt()
            }
            _ => distances::vectors::euclidean(u.values(), v.values()),
        }
    }
}

impl<F: Float> Default for PointMetric<F> {
    fn default() -> Self {
        Self::new(false)
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::{DistanceError, Point, PointMetric};

    #[test]
    fn euclidean() -> Result<(), DistanceError> {
        let metric = PointMetric::default();
        let u = Point::new(vec![0.0_f64, 0.0]);
        let v = Point::new(vec![3.0, 4.0]);
        assert_approx_eq!(f64, metric.distance(&u, &v)?, 5.0);
        assert_approx_eq!(f64, metric.distance(&v, &u)?, 5.0);
        assert_approx_eq!(f64, metric.distance(&u, &u)?, 0.0);
        Ok(())
    }

    #[test]
    fn normalized_needs_statistics() {
        let metric = PointMetric::<f64>::new(true);
        let u = Point::new(vec![0.0, 0.0]);
        let v = Point::new(vec![3.0, 4.0]);
        assert_eq!(metric.distance(&u, &v), Err(DistanceError::NotInitialized));
    }

    #[test]
    fn normalized_distance() -> Result<(), DistanceError> {
        let points = [
            Point::new(vec![0.0_f64, 0.0]),
            Point::new(vec![4.0, 2.0]),
        ];
        let mut metric = PointMetric::new(true);
        metric.initialize(&points)?;

        // Ranges are 4 and 2, so the normalized differences are 1 each.
        let d = metric.distance(&points[0], &points[1])?;
        assert_approx_eq!(f64, d, 2.0_f64.sqrt());
        Ok(())
    }

    #[test]
    fn zero_range_falls_back_to_raw_difference() -> Result<(), DistanceError> {
        // Dimension 1 never varies across the seeded points.
        let seed = [
            Point::new(vec![0.0_f64, 7.0]),
            Point::new(vec![2.0, 7.0]),
        ];
        let mut metric = PointMetric::new(true);
        metric.initialize(&seed)?;

        let u = Point::new(vec![0.0, 7.0]);
        let v = Point::new(vec![1.0, 10.0]);
        // Dimension 0 is scaled by its range of 2; dimension 1 is not scaled.
        let d = metric.distance(&u, &v)?;
        assert_approx_eq!(f64, d, (0.25_f64 + 9.0).sqrt());
        Ok(())
    }

    #[test]
    fn fold_before_initialize_is_rejected() {
        let mut metric = PointMetric::<f32>::new(false);
        assert_eq!(
            metric.fold(&Point::new(vec![1.0])),
            Err(DistanceError::NotInitialized)
        );
    }

    #[test]
    fn distance_does_not_mutate_statistics() -> Result<(), DistanceError> {
        let seed = [Point::new(vec![0.0_f64]), Point::new(vec![1.0])];
        let mut metric = PointMetric::new(true);
        metric.initialize(&seed)?;
        let before = metric.stats().cloned();

        let far = Point::new(vec![100.0]);
        metric.distance(&seed[0], &far)?;
        assert_eq!(metric.stats().cloned(), before);
        Ok(())
    }
}
