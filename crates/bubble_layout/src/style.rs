//! Bubble style configuration
//!
//! A [`BubbleStyle`] holds the initial value of every bubble parameter. It is
//! read from a flat TOML table whose keys follow the styleable attributes of
//! the widget:
//!
//! ```toml
//! look_at = "left"          # or 1..=4 (left, top, right, bottom)
//! look_position = "24dp"
//! look_width = 40           # bare numbers are pixels
//! look_length = "12dp"
//! bubble_radius = "8dp"
//! bubble_padding = "6dp"
//! shadow_radius = 6
//! shadow_x = 0
//! shadow_y = "2dp"
//! shadow_color = "#40000000"
//! bubble_color = "white"
//! ```
//!
//! Dimensions are a number of pixels or a string with a `px`, `dp` or `dip`
//! suffix, truncated to whole pixels. Missing keys keep their defaults.

use std::fmt;

use bubble_core::Color;
use serde::Deserialize;

use crate::error::{Result, StyleError};
use crate::outline::{BubbleGeometry, BubbleShadow, PointerEdge};

/// Default bubble padding in density-independent pixels
pub const DEFAULT_PADDING_DP: f32 = 8.0;

/// Convert density-independent pixels to whole pixels, rounding half up
pub fn dp_to_px(dp: f32, density: f32) -> u32 {
    (dp * density + 0.5) as u32
}

/// Initial bubble parameters
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BubbleStyle {
    pub pointer_edge: PointerEdge,
    pub pointer_offset: i32,
    pub pointer_width: u32,
    pub pointer_length: u32,
    pub corner_radius: u32,
    pub padding: u32,
    pub shadow: BubbleShadow,
    pub fill_color: Color,
}

impl Default for BubbleStyle {
    /// Defaults at density 1.0
    fn default() -> Self {
        Self::defaults(1.0)
    }
}

impl BubbleStyle {
    fn defaults(density: f32) -> Self {
        let geometry = BubbleGeometry::default();
        Self {
            pointer_edge: geometry.pointer_edge,
            pointer_offset: geometry.pointer_offset,
            pointer_width: geometry.pointer_width,
            pointer_length: geometry.pointer_length,
            corner_radius: geometry.corner_radius,
            padding: dp_to_px(DEFAULT_PADDING_DP, density),
            shadow: geometry.shadow,
            fill_color: Color::WHITE,
        }
    }

    /// Defaults for a display with the given density (pixels per dp)
    pub fn for_density(density: f32) -> Result<Self> {
        check_density(density)?;
        Ok(Self::defaults(density))
    }

    /// Parse a style table, resolving `dp` values with `density`
    pub fn from_toml_str(src: &str, density: f32) -> Result<Self> {
        check_density(density)?;
        let raw: RawStyle = toml::from_str(src)?;
        let style = raw.resolve(density)?;
        tracing::debug!(?style, density, "loaded bubble style");
        Ok(style)
    }

    /// Geometry for a container of the given size
    pub fn geometry(&self, container_width: u32, container_height: u32) -> BubbleGeometry {
        BubbleGeometry {
            container_width,
            container_height,
            padding: self.padding,
            pointer_edge: self.pointer_edge,
            pointer_offset: self.pointer_offset,
            pointer_width: self.pointer_width,
            pointer_length: self.pointer_length,
            corner_radius: self.corner_radius,
            shadow: self.shadow,
        }
    }
}

fn check_density(density: f32) -> Result<()> {
    if density.is_finite() && density > 0.0 {
        Ok(())
    } else {
        Err(StyleError::InvalidDensity(density))
    }
}

/// Parse `#RRGGBB`, `#AARRGGBB` or a color name
pub fn parse_color(value: &str) -> Option<Color> {
    let value = value.trim();
    if let Some(hex) = value.strip_prefix('#') {
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }
        return match hex.len() {
            6 => u32::from_str_radix(hex, 16).ok().map(Color::from_hex),
            8 => u32::from_str_radix(hex, 16).ok().map(Color::from_argb),
            _ => None,
        };
    }

    let color = match value.to_ascii_lowercase().as_str() {
        "white" => Color::WHITE,
        "black" => Color::BLACK,
        "gray" | "grey" => Color::GRAY,
        "lightgray" | "lightgrey" => Color::from_hex(0xCCCCCC),
        "darkgray" | "darkgrey" => Color::from_hex(0x444444),
        "red" => Color::RED,
        "green" => Color::GREEN,
        "blue" => Color::BLUE,
        "yellow" => Color::from_hex(0xFFFF00),
        "cyan" => Color::from_hex(0x00FFFF),
        "magenta" => Color::from_hex(0xFF00FF),
        "transparent" => Color::TRANSPARENT,
        _ => return None,
    };
    Some(color)
}

// ─────────────────────────────────────────────────────────────────────────────
// TOML representation
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
struct RawStyle {
    look_at: Option<RawEdge>,
    look_position: Option<RawDimension>,
    look_width: Option<RawDimension>,
    look_length: Option<RawDimension>,
    shadow_radius: Option<RawDimension>,
    shadow_x: Option<RawDimension>,
    shadow_y: Option<RawDimension>,
    bubble_radius: Option<RawDimension>,
    bubble_padding: Option<RawDimension>,
    shadow_color: Option<RawColor>,
    bubble_color: Option<RawColor>,
}

impl RawStyle {
    fn resolve(self, density: f32) -> Result<BubbleStyle> {
        let mut style = BubbleStyle::defaults(density);

        if let Some(edge) = self.look_at {
            style.pointer_edge = edge.resolve()?;
        }
        if let Some(dim) = self.look_position {
            style.pointer_offset = dim.signed("look_position", density)?;
        }
        if let Some(dim) = self.look_width {
            style.pointer_width = dim.unsigned("look_width", density)?;
        }
        if let Some(dim) = self.look_length {
            style.pointer_length = dim.unsigned("look_length", density)?;
        }
        if let Some(dim) = self.shadow_radius {
            style.shadow.radius = dim.unsigned("shadow_radius", density)?;
        }
        if let Some(dim) = self.shadow_x {
            style.shadow.offset_x = dim.signed("shadow_x", density)?;
        }
        if let Some(dim) = self.shadow_y {
            style.shadow.offset_y = dim.signed("shadow_y", density)?;
        }
        if let Some(dim) = self.bubble_radius {
            style.corner_radius = dim.unsigned("bubble_radius", density)?;
        }
        if let Some(dim) = self.bubble_padding {
            style.padding = dim.unsigned("bubble_padding", density)?;
        }
        if let Some(color) = self.shadow_color {
            style.shadow.color = color.resolve("shadow_color")?;
        }
        if let Some(color) = self.bubble_color {
            style.fill_color = color.resolve("bubble_color")?;
        }

        Ok(style)
    }
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawEdge {
    Code(i64),
    Name(String),
}

impl RawEdge {
    fn resolve(self) -> Result<PointerEdge> {
        match self {
            RawEdge::Code(code) => Ok(PointerEdge::from_code(code).unwrap_or_else(|| {
                tracing::warn!(code, "unknown look_at code, pointing bottom");
                PointerEdge::Bottom
            })),
            RawEdge::Name(name) => {
                PointerEdge::from_name(&name).ok_or(StyleError::InvalidEdge(name))
            }
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawDimension {
    Number(f64),
    Text(String),
}

impl RawDimension {
    /// Whole pixels, truncated toward zero
    fn px(&self, key: &'static str, density: f32) -> Result<i64> {
        let value = match self {
            RawDimension::Number(px) => Some(*px),
            RawDimension::Text(text) => parse_dimension(text, f64::from(density)),
        };
        match value {
            Some(px) if px.is_finite() => Ok(px.trunc() as i64),
            _ => Err(self.invalid(key)),
        }
    }

    fn signed(&self, key: &'static str, density: f32) -> Result<i32> {
        i32::try_from(self.px(key, density)?).map_err(|_| self.invalid(key))
    }

    fn unsigned(&self, key: &'static str, density: f32) -> Result<u32> {
        u32::try_from(self.px(key, density)?).map_err(|_| self.invalid(key))
    }

    fn invalid(&self, key: &'static str) -> StyleError {
        StyleError::InvalidDimension {
            key,
            value: self.to_string(),
        }
    }
}

impl fmt::Display for RawDimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RawDimension::Number(px) => write!(f, "{px}"),
            RawDimension::Text(text) => write!(f, "{text:?}"),
        }
    }
}

fn parse_dimension(text: &str, density: f64) -> Option<f64> {
    let text = text.trim();
    let (number, scale) = if let Some(n) = text.strip_suffix("dip") {
        (n, density)
    } else if let Some(n) = text.strip_suffix("dp") {
        (n, density)
    } else if let Some(n) = text.strip_suffix("px") {
        (n, 1.0)
    } else {
        (text, 1.0)
    };
    number.trim().parse::<f64>().ok().map(|n| n * scale)
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawColor {
    Argb(i64),
    Text(String),
}

impl RawColor {
    fn resolve(self, key: &'static str) -> Result<Color> {
        match self {
            RawColor::Argb(argb) => argb_from_int(argb).ok_or_else(|| StyleError::InvalidColor {
                key,
                value: argb.to_string(),
            }),
            RawColor::Text(text) => parse_color(&text).ok_or(StyleError::InvalidColor {
                key,
                value: text,
            }),
        }
    }
}

/// Packed ARGB, accepting the signed form used by 32-bit color ints
pub(crate) fn argb_from_int(argb: i64) -> Option<Color> {
    u32::try_from(argb)
        .ok()
        .or_else(|| i32::try_from(argb).ok().map(|signed| signed as u32))
        .map(Color::from_argb)
}
