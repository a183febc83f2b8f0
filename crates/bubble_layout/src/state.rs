//! Saved bubble state
//!
//! A flat record of every scalar bubble parameter, used to carry a bubble
//! across host recreation. The outline itself is never saved; it is
//! recomputed on restore.
//!
//! Decoding is lenient: [`BubbleState::from_value`] reads each field on its
//! own, and a missing or mistyped field falls back to its default instead of
//! failing the whole restore.

use bubble_core::Color;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::StateResult;
use crate::outline::{BubbleBody, BubbleGeometry, BubbleShadow, PointerEdge};
use crate::style::{argb_from_int, BubbleStyle};

/// Every scalar bubble parameter, plus the last body bounds
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct BubbleState {
    pub pointer_edge: PointerEdge,
    pub pointer_offset: i32,
    pub pointer_width: u32,
    pub pointer_length: u32,
    pub corner_radius: u32,
    pub padding: u32,
    pub shadow_color: Color,
    pub shadow_radius: u32,
    pub shadow_x: i32,
    pub shadow_y: i32,
    pub fill_color: Color,
    pub width: u32,
    pub height: u32,
    pub left: i64,
    pub top: i64,
    pub right: i64,
    pub bottom: i64,
}

impl Default for BubbleState {
    fn default() -> Self {
        let style = BubbleStyle::default();
        Self::capture(&style.geometry(0, 0), style.fill_color)
    }
}

impl BubbleState {
    /// Snapshot `geometry` and `fill_color`
    pub fn capture(geometry: &BubbleGeometry, fill_color: Color) -> Self {
        let BubbleBody {
            left,
            top,
            right,
            bottom,
        } = geometry.body();

        Self {
            pointer_edge: geometry.pointer_edge,
            pointer_offset: geometry.pointer_offset,
            pointer_width: geometry.pointer_width,
            pointer_length: geometry.pointer_length,
            corner_radius: geometry.corner_radius,
            padding: geometry.padding,
            shadow_color: geometry.shadow.color,
            shadow_radius: geometry.shadow.radius,
            shadow_x: geometry.shadow.offset_x,
            shadow_y: geometry.shadow.offset_y,
            fill_color,
            width: geometry.container_width,
            height: geometry.container_height,
            left,
            top,
            right,
            bottom,
        }
    }

    /// The geometry this state describes
    pub fn geometry(&self) -> BubbleGeometry {
        BubbleGeometry {
            container_width: self.width,
            container_height: self.height,
            padding: self.padding,
            pointer_edge: self.pointer_edge,
            pointer_offset: self.pointer_offset,
            pointer_width: self.pointer_width,
            pointer_length: self.pointer_length,
            corner_radius: self.corner_radius,
            shadow: BubbleShadow {
                color: self.shadow_color,
                offset_x: self.shadow_x,
                offset_y: self.shadow_y,
                radius: self.shadow_radius,
            },
        }
    }

    pub fn to_json(&self) -> StateResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Decode saved JSON; only text that is not JSON at all is an error
    pub fn from_json(src: &str) -> StateResult<Self> {
        let value: Value = serde_json::from_str(src)?;
        Ok(Self::from_value(&value))
    }

    /// Read each field independently, defaulting the ones that are missing or mistyped
    pub fn from_value(value: &Value) -> Self {
        let defaults = Self::default();
        let Some(map) = value.as_object() else {
            tracing::warn!("saved bubble state is not an object, using defaults");
            return defaults;
        };

        Self {
            pointer_edge: field(map, "pointer_edge", defaults.pointer_edge),
            pointer_offset: field(map, "pointer_offset", defaults.pointer_offset),
            pointer_width: field(map, "pointer_width", defaults.pointer_width),
            pointer_length: field(map, "pointer_length", defaults.pointer_length),
            corner_radius: field(map, "corner_radius", defaults.corner_radius),
            padding: field(map, "padding", defaults.padding),
            shadow_color: color_field(map, "shadow_color", defaults.shadow_color),
            shadow_radius: field(map, "shadow_radius", defaults.shadow_radius),
            shadow_x: field(map, "shadow_x", defaults.shadow_x),
            shadow_y: field(map, "shadow_y", defaults.shadow_y),
            fill_color: color_field(map, "fill_color", defaults.fill_color),
            width: field(map, "width", defaults.width),
            height: field(map, "height", defaults.height),
            left: field(map, "left", defaults.left),
            top: field(map, "top", defaults.top),
            right: field(map, "right", defaults.right),
            bottom: field(map, "bottom", defaults.bottom),
        }
    }
}

fn field<T: DeserializeOwned>(map: &Map<String, Value>, key: &'static str, default: T) -> T {
    let Some(value) = map.get(key) else {
        tracing::warn!(key, "saved bubble state is missing a field, using default");
        return default;
    };
    match T::deserialize(value) {
        Ok(parsed) => parsed,
        Err(err) => {
            tracing::warn!(key, %err, "saved bubble state has a mistyped field, using default");
            default
        }
    }
}

/// Colors may also be saved as packed ARGB integers
fn color_field(map: &Map<String, Value>, key: &'static str, default: Color) -> Color {
    match map.get(key).and_then(Value::as_i64).and_then(argb_from_int) {
        Some(color) => color,
        None => field(map, key, default),
    }
}
