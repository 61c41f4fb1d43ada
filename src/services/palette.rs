//! Palette construction for the 9-bucket color scale
//!
//! Named schemes are fixed 9-step ColorBrewer variants; the custom schemes
//! interpolate between the stop colors configured in settings.

use crate::types::{ColorScheme, FormatSettings, Rgb};

/// Number of discrete color bands the scale always produces.
pub const BUCKETS: usize = 9;

const YL_GN_BU: [Rgb; BUCKETS] = [
    Rgb::new(0xff, 0xff, 0xd9),
    Rgb::new(0xed, 0xf8, 0xb1),
    Rgb::new(0xc7, 0xe9, 0xb4),
    Rgb::new(0x7f, 0xcd, 0xbb),
    Rgb::new(0x41, 0xb6, 0xc4),
    Rgb::new(0x1d, 0x91, 0xc0),
    Rgb::new(0x22, 0x5e, 0xa8),
    Rgb::new(0x25, 0x34, 0x94),
    Rgb::new(0x08, 0x1d, 0x58),
];

const YL_OR_RD: [Rgb; BUCKETS] = [
    Rgb::new(0xff, 0xff, 0xcc),
    Rgb::new(0xff, 0xed, 0xa0),
    Rgb::new(0xfe, 0xd9, 0x76),
    Rgb::new(0xfe, 0xb2, 0x4c),
    Rgb::new(0xfd, 0x8d, 0x3c),
    Rgb::new(0xfc, 0x4e, 0x2a),
    Rgb::new(0xe3, 0x1a, 0x1c),
    Rgb::new(0xbd, 0x00, 0x26),
    Rgb::new(0x80, 0x00, 0x26),
];

const GN_BU: [Rgb; BUCKETS] = [
    Rgb::new(0xf7, 0xfc, 0xf0),
    Rgb::new(0xe0, 0xf3, 0xdb),
    Rgb::new(0xcc, 0xeb, 0xc5),
    Rgb::new(0xa8, 0xdd, 0xb5),
    Rgb::new(0x7b, 0xcc, 0xc4),
    Rgb::new(0x4e, 0xb3, 0xd3),
    Rgb::new(0x2b, 0x8c, 0xbe),
    Rgb::new(0x08, 0x68, 0xac),
    Rgb::new(0x08, 0x40, 0x81),
];

const BLUES: [Rgb; BUCKETS] = [
    Rgb::new(0xf7, 0xfb, 0xff),
    Rgb::new(0xde, 0xeb, 0xf7),
    Rgb::new(0xc6, 0xdb, 0xef),
    Rgb::new(0x9e, 0xca, 0xe1),
    Rgb::new(0x6b, 0xae, 0xd6),
    Rgb::new(0x42, 0x92, 0xc6),
    Rgb::new(0x21, 0x71, 0xb5),
    Rgb::new(0x08, 0x51, 0x9c),
    Rgb::new(0x08, 0x30, 0x6b),
];

const GREENS: [Rgb; BUCKETS] = [
    Rgb::new(0xf7, 0xfc, 0xf5),
    Rgb::new(0xe5, 0xf5, 0xe0),
    Rgb::new(0xc7, 0xe9, 0xc0),
    Rgb::new(0xa1, 0xd9, 0x9b),
    Rgb::new(0x74, 0xc4, 0x76),
    Rgb::new(0x41, 0xab, 0x5d),
    Rgb::new(0x23, 0x8b, 0x45),
    Rgb::new(0x00, 0x6d, 0x2c),
    Rgb::new(0x00, 0x44, 0x1b),
];

const REDS: [Rgb; BUCKETS] = [
    Rgb::new(0xff, 0xf5, 0xf0),
    Rgb::new(0xfe, 0xe0, 0xd2),
    Rgb::new(0xfc, 0xbb, 0xa1),
    Rgb::new(0xfc, 0x92, 0x72),
    Rgb::new(0xfb, 0x6a, 0x4a),
    Rgb::new(0xef, 0x3b, 0x2c),
    Rgb::new(0xcb, 0x18, 0x1d),
    Rgb::new(0xa5, 0x0f, 0x15),
    Rgb::new(0x67, 0x00, 0x0d),
];

const RD_YL_GN: [Rgb; BUCKETS] = [
    Rgb::new(0xd7, 0x30, 0x27),
    Rgb::new(0xf4, 0x6d, 0x43),
    Rgb::new(0xfd, 0xae, 0x61),
    Rgb::new(0xfe, 0xe0, 0x8b),
    Rgb::new(0xff, 0xff, 0xbf),
    Rgb::new(0xd9, 0xef, 0x8b),
    Rgb::new(0xa6, 0xd9, 0x6a),
    Rgb::new(0x66, 0xbd, 0x63),
    Rgb::new(0x1a, 0x98, 0x50),
];

const SPECTRAL: [Rgb; BUCKETS] = [
    Rgb::new(0xd5, 0x3e, 0x4f),
    Rgb::new(0xf4, 0x6d, 0x43),
    Rgb::new(0xfd, 0xae, 0x61),
    Rgb::new(0xfe, 0xe0, 0x8b),
    Rgb::new(0xff, 0xff, 0xbf),
    Rgb::new(0xe6, 0xf5, 0x98),
    Rgb::new(0xab, 0xdd, 0xa4),
    Rgb::new(0x66, 0xc2, 0xa5),
    Rgb::new(0x32, 0x88, 0xbd),
];

/// Ordered palette for the configured scheme, index 0 = lowest bucket.
pub fn scheme_colors(settings: &FormatSettings) -> Vec<Rgb> {
    match settings.color_scheme {
        ColorScheme::YlGnBu => YL_GN_BU.to_vec(),
        ColorScheme::YlOrRd => YL_OR_RD.to_vec(),
        ColorScheme::GnBu => GN_BU.to_vec(),
        ColorScheme::Blues => BLUES.to_vec(),
        ColorScheme::Greens => GREENS.to_vec(),
        ColorScheme::Reds => REDS.to_vec(),
        ColorScheme::RdYlGn => RD_YL_GN.to_vec(),
        ColorScheme::Spectral => SPECTRAL.to_vec(),
        ColorScheme::Custom2 => {
            interpolated_two(settings.lowest_color, settings.highest_color, BUCKETS)
        }
        ColorScheme::Custom3 => interpolated_three(
            settings.lowest_color,
            settings.mid_color,
            settings.highest_color,
            BUCKETS,
        ),
    }
}

/// Linear low-to-high ramp with inclusive endpoints.
pub fn interpolated_two(low: Rgb, high: Rgb, steps: usize) -> Vec<Rgb> {
    if steps <= 1 {
        return vec![low];
    }
    (0..steps)
        .map(|i| low.lerp(high, i as f64 / (steps - 1) as f64))
        .collect()
}

/// Two-segment ramp: low-to-mid, then mid-to-high, with the mid stop
/// landing exactly on the center step.
pub fn interpolated_three(low: Rgb, mid: Rgb, high: Rgb, steps: usize) -> Vec<Rgb> {
    if steps <= 1 {
        return vec![low];
    }
    let pivot = (steps - 1) / 2;
    (0..steps)
        .map(|i| {
            if i <= pivot {
                let t = if pivot == 0 {
                    0.0
                } else {
                    i as f64 / pivot as f64
                };
                low.lerp(mid, t)
            } else {
                mid.lerp(high, (i - pivot) as f64 / (steps - 1 - pivot) as f64)
            }
        })
        .collect()
}
