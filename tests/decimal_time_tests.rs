use chrono::{TimeZone, Utc};
use rust_decimal::Decimal;

use horizon_rs::api::{Accessors, ChartNamespace, render_with};
use horizon_rs::core::primitives::{datetime_to_unix_seconds, unix_seconds_to_datetime};
use horizon_rs::core::{DataPoint, Series};
use horizon_rs::HorizonConfig;

#[test]
fn data_point_from_decimal_time_is_supported() {
    let time = Utc
        .timestamp_opt(1_700_000_000, 0)
        .single()
        .expect("valid ts");
    let point = DataPoint::from_decimal_time(time, Decimal::new(-12345, 2)).expect("point");

    assert!((point.x - 1_700_000_000.0).abs() <= 1e-6);
    assert!((point.y + 123.45).abs() <= 1e-9);
}

#[test]
fn unix_seconds_round_trip_through_chrono() {
    let time = Utc
        .timestamp_millis_opt(1_700_000_000_250)
        .single()
        .expect("valid ts");
    let seconds = datetime_to_unix_seconds(time);

    assert_eq!(seconds, 1_700_000_000.25);
    assert_eq!(unix_seconds_to_datetime(seconds), Some(time));
    assert_eq!(unix_seconds_to_datetime(f64::NAN), None);
    assert_eq!(unix_seconds_to_datetime(f64::MAX), None);
}

#[test]
fn decimal_series_render_on_a_time_axis() {
    let day = |d: u32| Utc.with_ymd_and_hms(2024, 3, d, 0, 0, 0).single().expect("date");
    let series = vec![Series::new(
        "sales",
        vec![
            DataPoint::from_decimal_time(day(1), Decimal::new(150, 1)).expect("point"),
            DataPoint::from_decimal_time(day(8), Decimal::new(-75, 1)).expect("point"),
            DataPoint::from_decimal_time(day(15), Decimal::new(30, 0)).expect("point"),
        ],
    )];

    let chart = render_with(
        &series,
        &HorizonConfig::default(),
        &Accessors::default(),
        ChartNamespace::new("sales"),
    )
    .expect("render");

    let (start, end) = chart.x_scale().domain();
    assert_eq!(start, datetime_to_unix_seconds(day(1)));
    assert_eq!(end, datetime_to_unix_seconds(day(15)));

    let hover = chart.values_at(320.0);
    assert_eq!(hover[0].index, 1);
    assert_eq!(hover[0].value, -7.5);
}
