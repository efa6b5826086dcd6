//! A `Point` is one feature vector inside a `Bag`.

use distances::number::Float;
use serde::{Deserialize, Serialize};

/// A `Point` is an ordered sequence of real-valued attributes.
///
/// Points are the rows of a [`Bag`](crate::Bag). The dimensionality of a
/// point is fixed at creation; dimensional consistency across points is
/// enforced wherever points meet, i.e. by [`Bag`](crate::Bag),
/// [`RangeStats`](crate::RangeStats) and
/// [`PointMetric`](crate::PointMetric).
///
/// A point is read-only during distance computation, but callers
/// performing in-place rescaling may mutate its values through
/// [`values_mut`](Self::values_mut).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Point<F: Float> {
    /// The attribute values of the point.
    values: Vec<F>,
}

impl<F: Float> Point<F> {
    /// Creates a new `Point` from its attribute values.
    #[must_use]
    pub const fn new(values: Vec<F>) -> Self {
        Self { values }
    }

    /// The number of attributes of the point.
    #[must_use]
    pub fn dimensionality(&self) -> usize {
        self.values.len()
    }

    /// The attribute values of the point.
    #[must_use]
    pub fn values(&self) -> &[F] {
        &self.values
    }

    /// Mutable access to the attribute values, for callers rescaling
    /// points in place.
    pub fn values_mut(&mut self) -> &mut [F] {
        &mut self.values
    }
}

impl<F: Float> From<Vec<F>> for Point<F> {
    fn from(values: Vec<F>) -> Self {
        Self::new(values)
    }
}

impl<F: Float> AsRef<[F]> for Point<F> {
    fn as_ref(&self) -> &[F] {
        &self.values
    }
}
