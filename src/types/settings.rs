//! Visual formatting settings
//!
//! The host delivers settings as an untyped property bag (a JSON object
//! with a `formatting` member). That bag is converted exactly once, here,
//! into a typed record; nothing downstream probes dynamic keys. Missing,
//! unrecognized, or malformed entries fall back to the documented defaults.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::types::Rgb;

/// Corner-rounding preset for cell rectangles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TileShape {
    Square,
    #[default]
    Rounded1,
    Rounded2,
    Round,
}

impl TileShape {
    /// Fraction of the grid size used as the tile corner radius.
    pub fn bevel(self) -> f64 {
        match self {
            Self::Square => 0.0,
            Self::Rounded1 => 0.1,
            Self::Rounded2 => 0.25,
            Self::Round => 0.5,
        }
    }

    /// Parse the wire name; anything unrecognized keeps the default shape.
    pub fn parse(s: &str) -> Self {
        match s {
            "square" => Self::Square,
            "rounded1" => Self::Rounded1,
            "rounded2" => Self::Rounded2,
            "round" => Self::Round,
            _ => Self::default(),
        }
    }
}

/// Color scheme selector: a named sequential/divergent palette, or a
/// custom 2-/3-stop gradient built from the settings colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ColorScheme {
    #[default]
    YlGnBu,
    YlOrRd,
    GnBu,
    Blues,
    Greens,
    Reds,
    RdYlGn,
    Spectral,
    Custom2,
    Custom3,
}

impl ColorScheme {
    /// Parse the wire name; anything unrecognized keeps the default scheme.
    pub fn parse(s: &str) -> Self {
        match s {
            "YlGnBu" => Self::YlGnBu,
            "YlOrRd" => Self::YlOrRd,
            "GnBu" => Self::GnBu,
            "Blues" => Self::Blues,
            "Greens" => Self::Greens,
            "Reds" => Self::Reds,
            "RdYlGn" => Self::RdYlGn,
            "Spectral" => Self::Spectral,
            "Custom2" => Self::Custom2,
            "Custom3" => Self::Custom3,
            _ => Self::default(),
        }
    }
}

/// Parsed, defaulted formatting settings. Read-only to the render core.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FormatSettings {
    /// Show the bank-holiday row beneath Sunday.
    pub bank_holiday: bool,
    /// Axis/legend font size in points.
    pub axis_font_size: f64,
    pub units_label: String,
    pub tile_shape: TileShape,
    pub color_scheme: ColorScheme,
    pub lowest_color: Rgb,
    pub mid_color: Rgb,
    pub highest_color: Rgb,
    pub background: bool,
    pub background_color: Rgb,
    /// Background panel opacity in percent (0-100).
    pub background_opacity: f64,
    /// Fill opacity of the scene root.
    pub transparent: f64,
    /// Fill opacity of unselected cells while a selection is active.
    pub dimmed: f64,
    /// Fill opacity of selected cells (and of everything when no selection
    /// is active).
    pub solid: f64,
}

impl Default for FormatSettings {
    fn default() -> Self {
        Self {
            bank_holiday: true,
            axis_font_size: 9.0,
            units_label: "Units".into(),
            tile_shape: TileShape::default(),
            color_scheme: ColorScheme::default(),
            lowest_color: Rgb::new(0xff, 0xff, 0xd9),
            mid_color: Rgb::new(0xff, 0xff, 0xd9),
            highest_color: Rgb::new(0x00, 0x5e, 0xb8),
            background: false,
            background_color: Rgb::new(0xff, 0xff, 0xff),
            background_opacity: 100.0,
            transparent: 0.0,
            dimmed: 0.5,
            solid: 1.0,
        }
    }
}

impl FormatSettings {
    /// Parse the host property bag.
    ///
    /// The bag is `{ "formatting": { ... } }`; colors arrive wrapped as
    /// `{"solid":{"color":"#rrggbb"}}` under the British-spelled keys
    /// `lowestColour`/`midColour`/`highestColour` (`backgroundColor` is
    /// the exception). `percentile` carries the background opacity.
    pub fn from_value(root: &Value) -> Self {
        let mut settings = Self::default();
        let Some(formatting) = root.get("formatting") else {
            return settings;
        };

        if let Some(v) = formatting.get("bankHoliday").and_then(Value::as_bool) {
            settings.bank_holiday = v;
        }
        if let Some(v) = formatting.get("fontSize").and_then(Value::as_f64) {
            settings.axis_font_size = v;
        }
        if let Some(v) = formatting.get("unitsLabel").and_then(Value::as_str) {
            settings.units_label = v.to_string();
        }
        if let Some(v) = formatting.get("tileShape").and_then(Value::as_str) {
            settings.tile_shape = TileShape::parse(v);
        }
        if let Some(v) = formatting.get("colorScheme").and_then(Value::as_str) {
            settings.color_scheme = ColorScheme::parse(v);
        }
        if let Some(v) = solid_color(formatting, "lowestColour") {
            settings.lowest_color = v;
        }
        if let Some(v) = solid_color(formatting, "midColour") {
            settings.mid_color = v;
        }
        if let Some(v) = solid_color(formatting, "highestColour") {
            settings.highest_color = v;
        }
        if let Some(v) = formatting.get("background").and_then(Value::as_bool) {
            settings.background = v;
        }
        if let Some(v) = solid_color(formatting, "backgroundColor") {
            settings.background_color = v;
        }
        if let Some(v) = formatting.get("percentile").and_then(Value::as_f64) {
            settings.background_opacity = v.clamp(0.0, 100.0);
        }

        settings
    }
}

/// Unwrap a `{"solid":{"color":"#rrggbb"}}` property. Malformed values are
/// treated the same as missing ones.
fn solid_color(formatting: &Value, key: &str) -> Option<Rgb> {
    formatting
        .get(key)?
        .get("solid")?
        .get("color")?
        .as_str()
        .and_then(|s| Rgb::from_hex(s).ok())
}
