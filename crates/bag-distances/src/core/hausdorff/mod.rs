//! The Hausdorff family of set-to-set distances over bags.
//!
//! All three variants share one contract: compute the pairwise point
//! distances between two bags and reduce them to a scalar. The variant
//! set is fixed, so the reduction rule is a closed enum dispatched over
//! one shared min-to-bag kernel rather than an open trait hierarchy.

use serde::{Deserialize, Serialize};

mod engine;

pub use engine::BagMetric;

/// The reduction rule applied to the pairwise point distances between
/// two bags.
///
/// # Example
///
/// ```
/// use bag_distances::Hausdorff;
///
/// assert!(Hausdorff::Average.is_symmetric());
/// assert!(!Hausdorff::Maximal.is_symmetric());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Hausdorff {
    /// The global minimum over all pairwise distances.
    Minimal,
    /// For each point of the first bag, its minimum distance to the
    /// second bag; the result is the maximum of these per-point minima.
    ///
    /// This is the *directed* reduction from the first argument to the
    /// second, not the textbook symmetric Hausdorff distance
    /// `max(directed(a, b), directed(b, a))`. Callers must be consistent
    /// about argument order.
    Maximal,
    /// The per-point minima of both directions, summed and divided by
    /// the total number of points `n + m`.
    Average,
}

impl Hausdorff {
    /// The name of the reduction.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Minimal => "minimal-hausdorff",
            Self::Maximal => "maximal-hausdorff",
            Self::Average => "average-hausdorff",
        }
    }

    /// Whether the reduction is symmetric in its two bags.
    ///
    /// [`Maximal`](Self::Maximal) is directed and therefore not
    /// symmetric.
    #[must_use]
    pub const fn is_symmetric(&self) -> bool {
        !matches!(self, Self::Maximal)
    }
}
