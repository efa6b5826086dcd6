//! Errors reported by the distance engine.

/// Errors that can occur in the bag-distance subsystem.
///
/// Every operation either fully succeeds or fails with one of these
/// variants without mutating any statistics.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum DistanceError {
    /// Zero points were provided to seed the range statistics.
    #[error("cannot initialize range statistics from zero points")]
    EmptyInput,

    /// A bag with zero points was passed to a distance computation, so no
    /// finite minimum or maximum over its points exists.
    #[error("cannot compute a set distance over an empty bag")]
    EmptyBag,

    /// A dataset with zero bags was passed to
    /// [`set_instances`](crate::BagMetric::set_instances).
    #[error("cannot seed range statistics from an empty dataset")]
    EmptyDataset,

    /// A statistics-dependent operation was called before the statistics
    /// were initialized.
    #[error("range statistics have not been initialized")]
    NotInitialized,

    /// Two points, bags, or statistics disagree on dimensionality.
    #[error("dimensionality mismatch: expected {expected}, found {found}")]
    DimensionMismatch {
        /// The dimensionality established by the first operand or schema.
        expected: usize,
        /// The dimensionality of the offending operand.
        found: usize,
    },

    /// A bag's label vector length disagrees with the dataset schema.
    #[error("label arity mismatch: expected {expected}, found {found}")]
    LabelArityMismatch {
        /// The number of labels named by the dataset schema.
        expected: usize,
        /// The length of the offending label vector.
        found: usize,
    },
}
