use serde::{Deserialize, Serialize};

use crate::core::{BandLayout, BandSign};
use crate::error::{ChartError, ChartResult};
use crate::render::Color;

/// Built-in sequential ColorBrewer ramps, light to dark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SchemeName {
    Greens,
    Blues,
    Reds,
    Oranges,
    Purples,
    Greys,
}

pub const SCHEME_MIN_COLORS: usize = 3;
pub const SCHEME_MAX_COLORS: usize = 9;

// Indexed by `len - SCHEME_MIN_COLORS`.
const GREENS: [&[u32]; 7] = [
    &[0xe5f5e0, 0xa1d99b, 0x31a354],
    &[0xedf8e9, 0xbae4b3, 0x74c476, 0x238b45],
    &[0xedf8e9, 0xbae4b3, 0x74c476, 0x31a354, 0x006d2c],
    &[0xedf8e9, 0xc7e9c0, 0xa1d99b, 0x74c476, 0x31a354, 0x006d2c],
    &[0xedf8e9, 0xc7e9c0, 0xa1d99b, 0x74c476, 0x41ab5d, 0x238b45, 0x005a32],
    &[0xf7fcf5, 0xe5f5e0, 0xc7e9c0, 0xa1d99b, 0x74c476, 0x41ab5d, 0x238b45, 0x005a32],
    &[0xf7fcf5, 0xe5f5e0, 0xc7e9c0, 0xa1d99b, 0x74c476, 0x41ab5d, 0x238b45, 0x006d2c, 0x00441b],
];

const BLUES: [&[u32]; 7] = [
    &[0xdeebf7, 0x9ecae1, 0x3182bd],
    &[0xeff3ff, 0xbdd7e7, 0x6baed6, 0x2171b5],
    &[0xeff3ff, 0xbdd7e7, 0x6baed6, 0x3182bd, 0x08519c],
    &[0xeff3ff, 0xc6dbef, 0x9ecae1, 0x6baed6, 0x3182bd, 0x08519c],
    &[0xeff3ff, 0xc6dbef, 0x9ecae1, 0x6baed6, 0x4292c6, 0x2171b5, 0x084594],
    &[0xf7fbff, 0xdeebf7, 0xc6dbef, 0x9ecae1, 0x6baed6, 0x4292c6, 0x2171b5, 0x084594],
    &[0xf7fbff, 0xdeebf7, 0xc6dbef, 0x9ecae1, 0x6baed6, 0x4292c6, 0x2171b5, 0x08519c, 0x08306b],
];

const REDS: [&[u32]; 7] = [
    &[0xfee0d2, 0xfc9272, 0xde2d26],
    &[0xfee5d9, 0xfcae91, 0xfb6a4a, 0xcb181d],
    &[0xfee5d9, 0xfcae91, 0xfb6a4a, 0xde2d26, 0xa50f15],
    &[0xfee5d9, 0xfcbba1, 0xfc9272, 0xfb6a4a, 0xde2d26, 0xa50f15],
    &[0xfee5d9, 0xfcbba1, 0xfc9272, 0xfb6a4a, 0xef3b2c, 0xcb181d, 0x99000d],
    &[0xfff5f0, 0xfee0d2, 0xfcbba1, 0xfc9272, 0xfb6a4a, 0xef3b2c, 0xcb181d, 0x99000d],
    &[0xfff5f0, 0xfee0d2, 0xfcbba1, 0xfc9272, 0xfb6a4a, 0xef3b2c, 0xcb181d, 0xa50f15, 0x67000d],
];

const ORANGES: [&[u32]; 7] = [
    &[0xfee6ce, 0xfdae6b, 0xe6550d],
    &[0xfeedde, 0xfdbe85, 0xfd8d3c, 0xd94701],
    &[0xfeedde, 0xfdbe85, 0xfd8d3c, 0xe6550d, 0xa63603],
    &[0xfeedde, 0xfdd0a2, 0xfdae6b, 0xfd8d3c, 0xe6550d, 0xa63603],
    &[0xfeedde, 0xfdd0a2, 0xfdae6b, 0xfd8d3c, 0xf16913, 0xd94801, 0x8c2d04],
    &[0xfff5eb, 0xfee6ce, 0xfdd0a2, 0xfdae6b, 0xfd8d3c, 0xf16913, 0xd94801, 0x8c2d04],
    &[0xfff5eb, 0xfee6ce, 0xfdd0a2, 0xfdae6b, 0xfd8d3c, 0xf16913, 0xd94801, 0xa63603, 0x7f2704],
];

const PURPLES: [&[u32]; 7] = [
    &[0xefedf5, 0xbcbddc, 0x756bb1],
    &[0xf2f0f7, 0xcbc9e2, 0x9e9ac8, 0x6a51a3],
    &[0xf2f0f7, 0xcbc9e2, 0x9e9ac8, 0x756bb1, 0x54278f],
    &[0xf2f0f7, 0xdadaeb, 0xbcbddc, 0x9e9ac8, 0x756bb1, 0x54278f],
    &[0xf2f0f7, 0xdadaeb, 0xbcbddc, 0x9e9ac8, 0x807dba, 0x6a51a3, 0x4a1486],
    &[0xfcfbfd, 0xefedf5, 0xdadaeb, 0xbcbddc, 0x9e9ac8, 0x807dba, 0x6a51a3, 0x4a1486],
    &[0xfcfbfd, 0xefedf5, 0xdadaeb, 0xbcbddc, 0x9e9ac8, 0x807dba, 0x6a51a3, 0x54278f, 0x3f007d],
];

const GREYS: [&[u32]; 7] = [
    &[0xf0f0f0, 0xbdbdbd, 0x636363],
    &[0xf7f7f7, 0xcccccc, 0x969696, 0x525252],
    &[0xf7f7f7, 0xcccccc, 0x969696, 0x636363, 0x252525],
    &[0xf7f7f7, 0xd9d9d9, 0xbdbdbd, 0x969696, 0x636363, 0x252525],
    &[0xf7f7f7, 0xd9d9d9, 0xbdbdbd, 0x969696, 0x737373, 0x525252, 0x252525],
    &[0xffffff, 0xf0f0f0, 0xd9d9d9, 0xbdbdbd, 0x969696, 0x737373, 0x525252, 0x252525],
    &[0xffffff, 0xf0f0f0, 0xd9d9d9, 0xbdbdbd, 0x969696, 0x737373, 0x525252, 0x252525, 0x000000],
];

impl SchemeName {
    /// Returns the `len`-color variant, if the scheme has one.
    #[must_use]
    pub fn ramp(self, len: usize) -> Option<Vec<Color>> {
        if !(SCHEME_MIN_COLORS..=SCHEME_MAX_COLORS).contains(&len) {
            return None;
        }
        let table = match self {
            Self::Greens => &GREENS,
            Self::Blues => &BLUES,
            Self::Reds => &REDS,
            Self::Oranges => &ORANGES,
            Self::Purples => &PURPLES,
            Self::Greys => &GREYS,
        };
        Some(
            table[len - SCHEME_MIN_COLORS]
                .iter()
                .map(|&packed| Color::from_rgb_u32(packed))
                .collect(),
        )
    }
}

/// Positive/negative color ramps as configured by the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ColorScheme {
    /// Built-in ramps sized to `max(3, bands)` colors.
    Named {
        positive: SchemeName,
        negative: SchemeName,
    },
    /// Explicit ramps, light to dark.
    Custom {
        positive: Vec<Color>,
        negative: Vec<Color>,
    },
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self::Named {
            positive: SchemeName::Greens,
            negative: SchemeName::Blues,
        }
    }
}

impl ColorScheme {
    /// Resolves the ramps for a band layout, failing when a ramp cannot
    /// cover every band.
    pub fn resolve(&self, layout: BandLayout) -> ChartResult<BandPalette> {
        let required = layout.required_ramp_len();
        let (positive, negative) = match self {
            Self::Named { positive, negative } => {
                let named = |name: SchemeName| {
                    name.ramp(required).ok_or_else(|| {
                        ChartError::InvalidConfig(format!(
                            "scheme {name:?} has no ramp with {required} colors (supported: {SCHEME_MIN_COLORS}..={SCHEME_MAX_COLORS})"
                        ))
                    })
                };
                (named(*positive)?, named(*negative)?)
            }
            Self::Custom { positive, negative } => (positive.clone(), negative.clone()),
        };

        for (sign, ramp) in [(BandSign::Positive, &positive), (BandSign::Negative, &negative)] {
            if ramp.len() < required {
                return Err(ChartError::ColorRampTooShort {
                    sign,
                    required,
                    actual: ramp.len(),
                });
            }
            for color in ramp {
                color.validate()?;
            }
        }

        Ok(BandPalette {
            layout,
            positive,
            negative,
        })
    }
}

/// Validated ramps bound to a band layout.
#[derive(Debug, Clone, PartialEq)]
pub struct BandPalette {
    layout: BandLayout,
    positive: Vec<Color>,
    negative: Vec<Color>,
}

impl BandPalette {
    #[must_use]
    pub fn ramp(&self, sign: BandSign) -> &[Color] {
        match sign {
            BandSign::Positive => &self.positive,
            BandSign::Negative => &self.negative,
        }
    }

    /// Fill for band `band` of `sign`, or `None` past the configured band count.
    #[must_use]
    pub fn band_color(&self, sign: BandSign, band: usize) -> Option<Color> {
        if band >= self.layout.bands {
            return None;
        }
        self.ramp(sign).get(self.layout.color_index(band)).copied()
    }
}
