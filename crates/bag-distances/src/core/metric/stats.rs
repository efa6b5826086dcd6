//! Per-dimension running range statistics.

use distances::number::Float;
use serde::{Deserialize, Serialize};

use super::{DistanceError, Point};

/// Per-dimension running minima and maxima over all points seen so far.
///
/// The statistics are seeded once from a non-empty collection of points
/// and extended monotonically afterwards: a [`fold`](Self::fold) can only
/// decrease a minimum or increase a maximum, and nothing is ever
/// recomputed from scratch. Distances computed before a fold are not
/// retroactively corrected.
///
/// A `RangeStats` is owned by exactly one [`PointMetric`](super::PointMetric)
/// and is mutable shared state with no built-in synchronization: folding
/// while another thread reads is a data race, and the locking discipline
/// is the embedding application's responsibility.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RangeStats<F: Float> {
    /// The running minimum of each dimension.
    mins: Vec<F>,
    /// The running maximum of each dimension.
    maxs: Vec<F>,
}

impl<F: Float> RangeStats<F> {
    /// Seeds statistics from a non-empty collection of points.
    ///
    /// The candidate statistics are built up in full before being
    /// returned, so a failure part-way through observes nothing.
    ///
    /// # Errors
    ///
    /// * [`DistanceError::EmptyInput`] if `points` yields no points.
    /// * [`DistanceError::DimensionMismatch`] if the points do not all
    ///   share one dimensionality.
    pub fn from_points<'a, I: IntoIterator<Item = &'a Point<F>>>(points: I) -> Result<Self, DistanceError>
    where
        F: 'a,
    {
        let mut points = points.into_iter();
        let first = points.next().ok_or(DistanceError::EmptyInput)?;
        let mut stats = Self {
            mins: first.values().to_vec(),
            maxs: first.values().to_vec(),
        };
        for point in points {
            stats.fold(point)?;
        }
        Ok(stats)
    }

    /// Folds a new point into the running statistics.
    ///
    /// O(d); each minimum can only decrease and each maximum can only
    /// increase. The dimensionality check happens before any element is
    /// touched, so a failed fold leaves the statistics unchanged.
    ///
    /// # Errors
    ///
    /// * [`DistanceError::DimensionMismatch`] if the point's
    ///   dimensionality differs from the statistics'.
    pub fn fold(&mut self, point: &Point<F>) -> Result<(), DistanceError> {
        if point.dimensionality() != self.dimensionality() {
            return Err(DistanceError::DimensionMismatch {
                expected: self.dimensionality(),
                found: point.dimensionality(),
            });
        }
        let dims = self.mins.iter_mut().zip(self.maxs.iter_mut());
        for ((min, max), &v) in dims.zip(point.values()) {
            if v < *min {
                *min = v;
            }
            if v > *max {
                *max = v;
            }
        }
        Ok(())
    }

    /// The number of dimensions covered by the statistics.
    #[must_use]
    pub fn dimensionality(&self) -> usize {
        self.mins.len()
    }

    /// The running minimum of dimension `i`.
    ///
    /// Panics if `i` is out of bounds.
    #[must_use]
    pub fn min(&self, i: usize) -> F {
        self.mins[i]
    }

    /// The running maximum of dimension `i`.
    ///
    /// Panics if `i` is out of bounds.
    #[must_use]
    pub fn max(&self, i: usize) -> F {
        self.maxs[i]
    }

    /// The observed range of dimension `i`, i.e. `max - min`.
    ///
    /// Panics if `i` is out of bounds.
    #[must_use]
    pub fn range(&self, i: usize) -> F {
        self.maxs[i] - self.mins[i]
    }

    /// The running minima, one per dimension.
    #[must_use]
    pub fn mins(&self) -> &[F] {
        &self.mins
    }

    /// The running maxima, one per dimension.
    #[must_use]
    pub fn maxs(&self) -> &[F] {
        &self.maxs
    }
}
