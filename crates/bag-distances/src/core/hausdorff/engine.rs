//! The distance-engine lifecycle around a point metric.

use distances::number::Float;
use mt_logger::{mt_log, Level};
use serde::{Deserialize, Serialize};

use crate::utils;

use super::super::{
    bag::{Bag, BagDataset, Point},
    metric::{PointMetric, RangeStats},
    DistanceError,
};
use super::Hausdorff;

/// A bag-to-bag distance: a [`Hausdorff`] reduction over an owned
/// [`PointMetric`].
///
/// The engine is uninitialized until [`set_instances`](Self::set_instances)
/// succeeds; from then on, [`update`](Self::update) extends the
/// statistics monotonically and [`distance`](Self::distance) reflects the
/// statistics as of call time. An unnormalized engine may compute
/// distances without ever being initialized.
///
/// `distance` is read-only, so concurrent distance computations are safe
/// as long as no `set_instances`/`update` call is in flight; the engine
/// has no built-in synchronization, and ensemble callers should clone
/// the engine per thread rather than share one.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BagMetric<F: Float> {
    /// The point-to-point metric and its statistics.
    point_metric: PointMetric<F>,
    /// The reduction applied to the pairwise point distances.
    reduction: Hausdorff,
}

impl<F: Float> BagMetric<F> {
    /// Creates a new `BagMetric` from a reduction rule and a point
    /// metric.
    #[must_use]
    pub const fn new(reduction: Hausdorff, point_metric: PointMetric<F>) -> Self {
        Self { point_metric, reduction }
    }

    /// A [`Hausdorff::Minimal`] reduction over an unnormalized Euclidean
    /// point metric.
    #[must_use]
    pub const fn minimal() -> Self {
        Self::new(Hausdorff::Minimal, PointMetric::new(false))
    }

    /// A [`Hausdorff::Maximal`] reduction over an unnormalized Euclidean
    /// point metric.
    #[must_use]
    pub const fn maximal() -> Self {
        Self::new(Hausdorff::Maximal, PointMetric::new(false))
    }

    /// A [`Hausdorff::Average`] reduction over an unnormalized Euclidean
    /// point metric.
    #[must_use]
    pub const fn average() -> Self {
        Self::new(Hausdorff::Average, PointMetric::new(false))
    }

    /// The reduction applied to the pairwise point distances.
    #[must_use]
    pub const fn reduction(&self) -> Hausdorff {
        self.reduction
    }

    /// The owned point metric.
    #[must_use]
    pub const fn point_metric(&self) -> &PointMetric<F> {
        &self.point_metric
    }

    /// Mutable access to the owned point metric.
    pub fn point_metric_mut(&mut self) -> &mut PointMetric<F> {
        &mut self.point_metric
    }

    /// Whether [`set_instances`](Self::set_instances) has succeeded at
    /// least once.
    #[must_use]
    pub const fn has_instances(&self) -> bool {
        self.point_metric.has_statistics()
    }

    /// Seeds the point metric's statistics from all points of all bags
    /// of `data`.
    ///
    /// Repeated calls re-seed from scratch. On failure the engine keeps
    /// whatever statistics it held before.
    ///
    /// # Errors
    ///
    /// * [`DistanceError::EmptyDataset`] if `data` contains no bags.
    /// * [`DistanceError::EmptyInput`] if the bags of `data` contain no
    ///   points between them.
    pub fn set_instances(&mut self, data: &BagDataset<F>) -> Result<(), DistanceError> {
        if data.is_empty() {
            return Err(DistanceError::EmptyDataset);
        }
        self.point_metric.initialize(data.points())?;
        mt_log!(
            Level::Debug,
            "Seeded range statistics from {} bags ({} points).",
            data.cardinality(),
            data.point_count()
        );
        Ok(())
    }

    /// Folds every point of `bag` into the running statistics.
    ///
    /// Safe to call repeatedly and interleaved with
    /// [`distance`](Self::distance); distances reflect the statistics as
    /// of call time. Folding an empty bag is a no-op.
    ///
    /// # Errors
    ///
    /// * [`DistanceError::NotInitialized`] if `set_instances` has not
    ///   succeeded yet.
    /// * [`DistanceError::DimensionMismatch`] if the bag's
    ///   dimensionality differs from the statistics'. The check happens
    ///   before any point is folded, so a failed update observes
    ///   nothing.
    pub fn update(&mut self, bag: &Bag<F>) -> Result<(), DistanceError> {
        let expected = self
            .point_metric
            .stats()
            .map(RangeStats::dimensionality)
            .ok_or(DistanceError::NotInitialized)?;
        if let Some(found) = bag.dimensionality() {
            if found != expected {
                return Err(DistanceError::DimensionMismatch { expected, found });
            }
        }
        for point in bag {
            self.point_metric.fold(point)?;
        }
        Ok(())
    }

    /// The distance between two bags under the current statistics.
    ///
    /// All `n · m` pairwise point distances are reduced according to
    /// [`reduction`](Self::reduction); ties in a minimum or maximum are
    /// broken by first-encountered order, which cannot affect the
    /// reduction value. The computation is deterministic and `O(n·m·d)`.
    ///
    /// # Errors
    ///
    /// * [`DistanceError::EmptyBag`] if either bag contains no points.
    /// * [`DistanceError::DimensionMismatch`] if the bags disagree on
    ///   dimensionality, or disagree with the statistics of a normalized
    ///   point metric.
    /// * [`DistanceError::NotInitialized`] if the point metric is
    ///   normalized and the engine has no statistics.
    pub fn distance(&self, a: &Bag<F>, b: &Bag<F>) -> Result<F, DistanceError> {
        let Some(expected) = a.dimensionality() else {
            return Err(DistanceError::EmptyBag);
        };
        let Some(found) = b.dimensionality() else {
            return Err(DistanceError::EmptyBag);
        };
        self.point_metric.validate(expected, found)?;

        Ok(match self.reduction {
            Hausdorff::Minimal => Self::reduce(utils::arg_min, &self.minima(a, b)),
            Hausdorff::Maximal => Self::reduce(utils::arg_max, &self.minima(a, b)),
            Hausdorff::Average => {
                let sum_a = self.minima(a, b).into_iter().sum::<F>();
                let sum_b = self.minima(b, a).into_iter().sum::<F>();
                (sum_a + sum_b) / F::from(a.cardinality() + b.cardinality())
            }
        })
    }

    /// For each point of `a`, its minimum distance to the points of `b`.
    ///
    /// Operands are assumed validated: both bags non-empty and of the
    /// statistics' dimensionality.
    fn minima(&self, a: &Bag<F>, b: &Bag<F>) -> Vec<F> {
        a.iter()
            .map(|u| self.min_to(u, b))
            .collect()
    }

    /// The minimum point-metric distance from `u` to any point of `bag`.
    fn min_to(&self, u: &Point<F>, bag: &Bag<F>) -> F {
        let distances = bag
            .iter()
            .map(|v| self.point_metric.raw_distance(u, v))
            .collect::<Vec<_>>();
        Self::reduce(utils::arg_min, &distances)
    }

    /// Applies `select` (`arg_min` or `arg_max`) to a non-empty slice of
    /// distances and returns the selected value.
    fn reduce(select: impl Fn(&[F]) -> Option<(usize, F)>, distances: &[F]) -> F {
        select(distances).map_or_else(|| unreachable!("bags are validated non-empty"), |(_, d)| d)
    }
}

#[cfg(test)]
mod tests {
    use super::{Bag, BagMetric, DistanceError};

    #[test]
    fn empty_bags_are_rejected() -> Result<(), DistanceError> {
        let full = Bag::from_rows(vec![vec![0.0_f64, 0.0]], vec![true])?;
        let empty = Bag::from_rows(Vec::new(), vec![true])?;

        let metric = BagMetric::minimal();
        assert_eq!(metric.distance(&full, &empty), Err(DistanceError::EmptyBag));
        assert_eq!(metric.distance(&empty, &full), Err(DistanceError::EmptyBag));
        Ok(())
    }

    #[test]
    fn mismatched_bags_are_rejected() -> Result<(), DistanceError> {
        let a = Bag::from_rows(vec![vec![0.0_f64, 0.0]], vec![true])?;
        let b = Bag::from_rows(vec![vec![0.0_f64, 0.0, 0.0]], vec![true])?;

        let metric = BagMetric::average();
        assert_eq!(
            metric.distance(&a, &b),
            Err(DistanceError::DimensionMismatch { expected: 2, found: 3 })
        );
        Ok(())
    }
}
