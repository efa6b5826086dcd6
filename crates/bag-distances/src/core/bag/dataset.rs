//! A `BagDataset` is an ordered collection of `Bag`s sharing a schema.

use distances::number::Float;
use serde::{Deserialize, Serialize};

use super::{Bag, DistanceError, Point};

/// An ordered collection of [`Bag`]s sharing one schema: point
/// dimensionality `d`, label count `L`, and label names.
///
/// The schema is validated at construction. A dataset may be empty, e.g.
/// a partition fold that received no bags, but empty datasets are
/// rejected by [`set_instances`](crate::BagMetric::set_instances).
///
/// The distance engine never mutates a dataset; it only reads it to seed
/// its statistics.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BagDataset<F: Float> {
    /// The bags in the dataset.
    bags: Vec<Bag<F>>,
    /// The dimensionality shared by all points, or `None` while no
    /// non-empty bag has been seen.
    dimensionality: Option<usize>,
    /// The names of the labels, in label-vector order.
    label_names: Vec<String>,
    /// The name of the dataset.
    name: String,
}

impl<F: Float> BagDataset<F> {
    /// Creates a new `BagDataset` from bags and the names of the labels.
    ///
    /// # Errors
    ///
    /// * [`DistanceError::DimensionMismatch`] if the bags do not all
    ///   share one point dimensionality.
    /// * [`DistanceError::LabelArityMismatch`] if any bag's label vector
    ///   length differs from the number of label names.
    pub fn new(bags: Vec<Bag<F>>, label_names: Vec<String>) -> Result<Self, DistanceError> {
        let mut dimensionality = None;
        for bag in &bags {
            if bag.label_count() != label_names.len() {
                return Err(DistanceError::LabelArityMismatch {
                    expected: label_names.len(),
                    found: bag.label_count(),
                });
            }
            match (dimensionality, bag.dimensionality()) {
                (None, found) => dimensionality = found,
                (Some(expected), Some(found)) if expected != found => {
                    return Err(DistanceError::DimensionMismatch { expected, found });
                }
                _ => {}
            }
        }
        Ok(Self {
            bags,
            dimensionality,
            label_names,
            name: "Unknown BagDataset".to_string(),
        })
    }

    /// The name of the dataset.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Changes the name of the dataset.
    #[must_use]
    pub fn with_name(mut self, name: &str) -> Self {
        self.name = name.to_string();
        self
    }

    /// The number of bags in the dataset.
    #[must_use]
    pub fn cardinality(&self) -> usize {
        self.bags.len()
    }

    /// Whether the dataset contains no bags.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bags.is_empty()
    }

    /// The point dimensionality of the schema, or `None` while the
    /// dataset holds no points.
    #[must_use]
    pub const fn dimensionality(&self) -> Option<usize> {
        self.dimensionality
    }

    /// The bags in the dataset.
    #[must_use]
    pub fn bags(&self) -> &[Bag<F>] {
        &self.bags
    }

    /// Returns a reference to an indexed bag of the dataset.
    ///
    /// Panics if the index is out of bounds.
    #[must_use]
    pub fn get(&self, index: usize) -> &Bag<F> {
        &self.bags[index]
    }

    /// Iterates over the bags of the dataset.
    pub fn iter(&self) -> core::slice::Iter<'_, Bag<F>> {
        self.bags.iter()
    }

    /// Iterates over all points of all bags, in dataset order.
    ///
    /// This is the flattened view that seeds the range statistics of a
    /// [`PointMetric`](crate::PointMetric).
    pub fn points(&self) -> impl Iterator<Item = &Point<F>> {
        self.bags.iter().flat_map(Bag::iter)
    }

    /// The total number of points across all bags.
    #[must_use]
    pub fn point_count(&self) -> usize {
        self.bags.iter().map(Bag::cardinality).sum()
    }

    /// The names of the labels, in label-vector order.
    #[must_use]
    pub fn label_names(&self) -> &[String] {
        &self.label_names
    }

    /// The number of labels in the schema.
    #[must_use]
    pub fn label_count(&self) -> usize {
        self.label_names.len()
    }
}

impl<'a, F: Float> IntoIterator for &'a BagDataset<F> {
    type Item = &'a Bag<F>;
    type IntoIter = core::slice::Iter<'a, Bag<F>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
