//! Data generation utilities for testing.

use bag_distances::{Bag, BagDataset, DistanceError, Point};
use rand::prelude::*;
use rand::rngs::StdRng;

/// The label names used by the generated datasets.
pub fn label_names() -> Vec<String> {
    vec!["mountains".to_string(), "sea".to_string()]
}

/// A randomized bag of `car` points in `dim` dimensions, drawn uniformly
/// from the `[min, max]` hypercube.
pub fn random_bag(
    rng: &mut StdRng,
    car: usize,
    dim: usize,
    min: f64,
    max: f64,
    labels: Vec<bool>,
) -> Result<Bag<f64>, DistanceError> {
    let points = (0..car)
        .map(|_| Point::new((0..dim).map(|_| rng.gen_range(min..max)).collect()))
        .collect();
    Bag::new(points, labels)
}

/// A randomized dataset of `car` non-empty bags of up to `max_points`
/// points each, deterministic in `seed`.
pub fn random_dataset(
    seed: u64,
    car: usize,
    dim: usize,
    max_points: usize,
) -> Result<BagDataset<f64>, DistanceError> {
    let mut rng = StdRng::seed_from_u64(seed);
    let bags = (0..car)
        .map(|_| {
            let n = rng.gen_range(1..=max_points);
            let labels = vec![rng.gen_bool(0.5), rng.gen_bool(0.5)];
            random_bag(&mut rng, n, dim, -1.0, 1.0, labels)
        })
        .collect::<Result<Vec<_>, _>>()?;
    BagDataset::new(bags, label_names())
}

/// The two-bag fixture of the reduction examples: `a` holds the points
/// `(0, 0)` and `(1, 1)`, `b` holds only the origin.
pub fn corner_bags() -> Result<(Bag<f64>, Bag<f64>), DistanceError> {
    let a = Bag::from_rows(vec![vec![0.0, 0.0], vec![1.0, 1.0]], vec![true, false])?;
    let b = Bag::from_rows(vec![vec![0.0, 0.0]], vec![false, true])?;
    Ok((a, b))
}

/// A 3-point bag and a 4-point bag of known coordinates, as a dataset
/// whose per-dimension ranges are 5 and 4.
pub fn known_dataset() -> Result<BagDataset<f64>, DistanceError> {
    let a = Bag::from_rows(
        vec![vec![0.0, 0.0], vec![2.0, 1.0], vec![4.0, 3.0]],
        vec![true, false],
    )?;
    let b = Bag::from_rows(
        vec![vec![1.0, 2.0], vec![3.0, 0.0], vec![5.0, 4.0], vec![2.0, 2.0]],
        vec![false, true],
    )?;
    BagDataset::new(vec![a, b], label_names())
}
