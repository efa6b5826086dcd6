//! Bags of points, and datasets of bags.

use distances::number::Float;
use serde::{Deserialize, Serialize};

use super::DistanceError;

mod dataset;
mod point;

pub use dataset::BagDataset;
pub use point::Point;

/// A `Bag` is a labeled example represented as an ordered collection of
/// [`Point`]s.
///
/// All points in a bag share one dimensionality `d`; this is checked at
/// construction. A bag may be empty (`n = 0`), e.g. while a caller is
/// still assembling it, but empty bags are rejected by distance
/// computations because no finite reduction over their points exists.
///
/// The label vector is multi-hot: `labels[l]` is `true` when label `l`
/// is relevant to this bag. Its length is the label count `L` of the
/// dataset the bag belongs to, which
/// [`BagDataset::new`](crate::BagDataset::new) checks against the label
/// names of the schema.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Bag<F: Float> {
    /// The points in the bag.
    points: Vec<Point<F>>,
    /// The multi-hot label vector of the bag.
    labels: Vec<bool>,
}

impl<F: Float> Bag<F> {
    /// Creates a new `Bag` from points and a multi-hot label vector.
    ///
    /// # Errors
    ///
    /// * [`DistanceError::DimensionMismatch`] if the points do not all
    ///   share one dimensionality.
    pub fn new(points: Vec<Point<F>>, labels: Vec<bool>) -> Result<Self, DistanceError> {
        if let Some(first) = points.first() {
            let expected = first.dimensionality();
            for point in &points {
                let found = point.dimensionality();
                if found != expected {
                    return Err(DistanceError::DimensionMismatch { expected, found });
                }
            }
        }
        Ok(Self { points, labels })
    }

    /// Creates a new `Bag` from raw attribute rows.
    ///
    /// # Errors
    ///
    /// * [`DistanceError::DimensionMismatch`] if the rows do not all
    ///   share one length.
    pub fn from_rows(rows: Vec<Vec<F>>, labels: Vec<bool>) -> Result<Self, DistanceError> {
        Self::new(rows.into_iter().map(Point::new).collect(), labels)
    }

    /// The number of points in the bag.
    #[must_use]
    pub fn cardinality(&self) -> usize {
        self.points.len()
    }

    /// Whether the bag contains no points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The dimensionality shared by the points of the bag, or `None` if
    /// the bag is empty.
    #[must_use]
    pub fn dimensionality(&self) -> Option<usize> {
        self.points.first().map(Point::dimensionality)
    }

    /// The points in the bag.
    #[must_use]
    pub fn points(&self) -> &[Point<F>] {
        &self.points
    }

    /// Mutable access to the points, for callers rescaling a bag in
    /// place. The dimensionality of each point must be preserved.
    pub fn points_mut(&mut self) -> &mut [Point<F>] {
        &mut self.points
    }

    /// Returns a reference to an indexed point of the bag.
    ///
    /// Panics if the index is out of bounds.
    #[must_use]
    pub fn get(&self, index: usize) -> &Point<F> {
        &self.points[index]
    }

    /// Iterates over the points of the bag.
    pub fn iter(&self) -> core::slice::Iter<'_, Point<F>> {
        self.points.iter()
    }

    /// The multi-hot label vector of the bag.
    #[must_use]
    pub fn labels(&self) -> &[bool] {
        &self.labels
    }

    /// The number of labels carried by the bag.
    #[must_use]
    pub fn label_count(&self) -> usize {
        self.labels.len()
    }
}

impl<'a, F: Float> IntoIterator for &'a Bag<F> {
    type Item = &'a Point<F>;
    type IntoIter = core::slice::Iter<'a, Point<F>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
