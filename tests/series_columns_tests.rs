use horizon_rs::api::Accessors;
use horizon_rs::core::{BandSign, DataPoint, Series, SeriesColumns};

fn columns(samples: &[(f64, f64)]) -> SeriesColumns {
    Accessors::<(f64, f64)>::default().extract(samples)
}

#[test]
fn values_split_by_sign() {
    let columns = columns(&[(0.0, 5.0), (1.0, -3.0), (2.0, 0.0)]);

    assert_eq!(columns.values(BandSign::Positive), &[5.0, 0.0, 0.0]);
    assert_eq!(columns.values(BandSign::Negative), &[0.0, 3.0, 0.0]);
    assert_eq!(columns.defined, vec![true, true, true]);
}

#[test]
fn nan_values_become_gaps() {
    let columns = columns(&[
        (0.0, 1.0),
        (1.0, f64::NAN),
        (2.0, f64::NAN),
        (3.0, 2.0),
        (4.0, 3.0),
        (5.0, f64::NAN),
    ]);

    assert_eq!(columns.defined_runs(), vec![0..1, 3..5]);
}

#[test]
fn custom_predicate_cannot_admit_non_finite_values() {
    let samples = [(0.0, 1.0), (1.0, 2.0), (2.0, f64::NAN), (3.0, 4.0)];
    let accessors = Accessors::new(|p: &(f64, f64)| p.0, |p: &(f64, f64)| p.1)
        .with_defined(|_, index| index != 1);
    assert!(accessors.has_defined());
    assert!(!Accessors::<(f64, f64)>::default().has_defined());

    let columns = accessors.extract(&samples);
    assert_eq!(columns.defined, vec![true, false, false, true]);
    assert_eq!(columns.defined_runs(), vec![0..1, 3..4]);
}

#[test]
fn magnitude_max_takes_the_larger_side() {
    assert_eq!(columns(&[(0.0, 5.0), (1.0, -3.0), (2.0, 8.0)]).magnitude_max(), 8.0);
    assert_eq!(columns(&[(0.0, 2.0), (1.0, -9.0)]).magnitude_max(), 9.0);
    assert!(columns(&[(0.0, f64::NAN)]).magnitude_max().is_nan());
}

#[test]
fn x_extent_ignores_non_finite_keys() {
    let columns = columns(&[(f64::NAN, 1.0), (4.0, 1.0), (-2.0, 1.0)]);
    assert_eq!(columns.x_extent(), Some((-2.0, 4.0)));
    assert_eq!(self::columns(&[]).x_extent(), None);
}

#[test]
fn struct_samples_use_their_own_accessors() {
    let samples = vec![DataPoint::new(10.0, -1.5), DataPoint::new(20.0, 2.5)];
    let columns = Accessors::<DataPoint>::default().extract(&samples);

    assert_eq!(columns.x, vec![10.0, 20.0]);
    assert_eq!(columns.negative, vec![1.5, 0.0]);
}

#[test]
fn empty_data_counts_as_missing() {
    let empty: Series<(f64, f64)> = Series::new("empty", Vec::new());
    let missing: Series<(f64, f64)> = Series::without_data("missing");

    assert!(empty.samples().is_none());
    assert!(missing.samples().is_none());
}
