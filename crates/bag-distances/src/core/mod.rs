//! The core data model and distance engine for MIML bags.

pub mod bag;
mod error;
pub mod hausdorff;
pub mod metric;

pub use bag::{Bag, BagDataset, Point};
pub use error::DistanceError;
pub use hausdorff::{BagMetric, Hausdorff};
pub use metric::{PointMetric, RangeStats};
