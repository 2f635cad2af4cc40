use horizon_rs::ChartError;
use horizon_rs::core::{BandLayout, BandSign};
use horizon_rs::render::{Color, ColorScheme, SchemeName};

#[test]
fn single_band_uses_darkest_of_three() {
    let palette = ColorScheme::default()
        .resolve(BandLayout::new(1, 25.0))
        .expect("palette");

    let green = SchemeName::Greens.ramp(3).expect("greens");
    assert_eq!(palette.band_color(BandSign::Positive, 0), Some(green[2]));
    assert_eq!(palette.band_color(BandSign::Positive, 0).map(Color::to_hex).as_deref(), Some("#31a354"));
    assert_eq!(palette.band_color(BandSign::Positive, 1), None);
}

#[test]
fn four_bands_walk_the_whole_ramp() {
    let palette = ColorScheme::default()
        .resolve(BandLayout::new(4, 25.0))
        .expect("palette");

    let blues = SchemeName::Blues.ramp(4).expect("blues");
    for band in 0..4 {
        assert_eq!(palette.band_color(BandSign::Negative, band), Some(blues[band]));
    }
    assert_eq!(
        palette.band_color(BandSign::Positive, 3).map(Color::to_hex).as_deref(),
        Some("#238b45")
    );
}

#[test]
fn default_three_bands_pick_each_color_once() {
    let layout = BandLayout::new(3, 25.0);
    assert_eq!(layout.required_ramp_len(), 3);
    assert_eq!(
        (0..3).map(|band| layout.color_index(band)).collect::<Vec<_>>(),
        vec![0, 1, 2]
    );
    assert_eq!(layout.offset(2), 50.0);
}

#[test]
fn short_custom_ramp_is_rejected() {
    let scheme = ColorScheme::Custom {
        positive: vec![Color::BLACK, Color::WHITE],
        negative: vec![Color::BLACK, Color::WHITE, Color::BLACK],
    };

    let result = scheme.resolve(BandLayout::new(2, 25.0));
    assert!(matches!(
        result,
        Err(ChartError::ColorRampTooShort {
            sign: BandSign::Positive,
            required: 3,
            actual: 2,
        })
    ));
}

#[test]
fn named_schemes_stop_at_nine_colors() {
    assert!(SchemeName::Purples.ramp(9).is_some());
    assert!(SchemeName::Purples.ramp(10).is_none());
    assert!(SchemeName::Purples.ramp(2).is_none());

    let result = ColorScheme::default().resolve(BandLayout::new(10, 25.0));
    assert!(matches!(result, Err(ChartError::InvalidConfig(_))));
}

#[test]
fn every_named_ramp_has_the_requested_length() {
    for scheme in [
        SchemeName::Greens,
        SchemeName::Blues,
        SchemeName::Reds,
        SchemeName::Oranges,
        SchemeName::Purples,
        SchemeName::Greys,
    ] {
        for len in 3..=9 {
            let ramp = scheme.ramp(len).expect("ramp");
            assert_eq!(ramp.len(), len, "{scheme:?} with {len} colors");
        }
    }
}

#[test]
fn hex_colors_round_trip() {
    let color = Color::from_hex("#31a354").expect("hex");
    assert_eq!(color.to_hex(), "#31a354");
    assert!(Color::from_hex("#31a35").is_err());
    assert!(Color::from_hex("zzzzzz").is_err());
}
