//! Tests for the Hausdorff reductions.

use bag_distances::{BagMetric, DistanceError, Hausdorff, PointMetric};

use float_cmp::assert_approx_eq;
use test_case::test_case;

mod common;

#[test]
fn corner_scenario() -> Result<(), DistanceError> {
    let (a, b) = common::data_gen::corner_bags()?;
    let sqrt_2 = core::f64::consts::SQRT_2;

    assert_approx_eq!(f64, BagMetric::minimal().distance(&a, &b)?, 0.0);
    assert_approx_eq!(f64, BagMetric::maximal().distance(&a, &b)?, sqrt_2);
    assert_approx_eq!(f64, BagMetric::average().distance(&a, &b)?, sqrt_2 / 3.0);
    Ok(())
}

#[test]
fn maximal_is_directed() -> Result<(), DistanceError> {
    let (a, b) = common::data_gen::corner_bags()?;
    let metric = BagMetric::maximal();

    // The reduction runs from the first argument to the second only, so
    // reversing the arguments changes the answer.
    assert_approx_eq!(f64, metric.distance(&a, &b)?, core::f64::consts::SQRT_2);
    assert_approx_eq!(f64, metric.distance(&b, &a)?, 0.0);
    Ok(())
}

#[test_case(42, 10, 2, 5 ; "10 bags in 2d")]
#[test_case(43, 20, 8, 7 ; "20 bags in 8d")]
#[test_case(44, 5, 16, 3 ; "5 bags in 16d")]
fn symmetric_reductions(seed: u64, car: usize, dim: usize, max_points: usize) -> Result<(), DistanceError> {
    let data = common::data_gen::random_dataset(seed, car, dim, max_points)?;

    for reduction in [Hausdorff::Minimal, Hausdorff::Average] {
        let metric = BagMetric::new(reduction, PointMetric::default());
        for a in &data {
            for b in &data {
                assert_approx_eq!(f64, metric.distance(a, b)?, metric.distance(b, a)?);
            }
        }
    }
    Ok(())
}

#[test_case(7, 10, 4, 5 ; "10 bags in 4d")]
#[test_case(8, 15, 2, 8 ; "15 bags in 2d")]
fn minimal_is_a_lower_bound_for_average(
    seed: u64,
    car: usize,
    dim: usize,
    max_points: usize,
) -> Result<(), DistanceError> {
    let data = common::data_gen::random_dataset(seed, car, dim, max_points)?;
    let minimal = BagMetric::minimal();
    let average = BagMetric::average();

    for a in &data {
        for b in &data {
            // The global minimum bounds every per-point minimum from
            // below, so it also bounds their average.
            assert!(minimal.distance(a, b)? <= average.distance(a, b)?);
        }
    }
    Ok(())
}

#[test]
fn minimal_self_distance_is_zero() -> Result<(), DistanceError> {
    let data = common::data_gen::random_dataset(99, 10, 3, 6)?;
    let metric = BagMetric::minimal();
    for a in &data {
        assert_approx_eq!(f64, metric.distance(a, a)?, 0.0);
    }
    Ok(())
}

#[test]
fn repeated_evaluation_is_bit_identical() -> Result<(), DistanceError> {
    let data = common::data_gen::random_dataset(3, 6, 4, 5)?;

    for reduction in [Hausdorff::Minimal, Hausdorff::Maximal, Hausdorff::Average] {
        let mut metric = BagMetric::new(reduction, PointMetric::new(true));
        metric.set_instances(&data)?;
        for a in &data {
            for b in &data {
                let first = metric.distance(a, b)?;
                let second = metric.distance(a, b)?;
                assert_eq!(first.to_bits(), second.to_bits());
            }
        }
    }
    Ok(())
}
