//! Bubble layout widget
//!
//! [`BubbleLayout`] is the host-facing side of the bubble: it owns the
//! current [`BubbleGeometry`] and fill color, and keeps the computed
//! [`BubbleOutline`] in step with them. Every change replaces the geometry
//! and recomputes the outline before returning, so a reader never sees an
//! outline from a previous generation.
//!
//! # Example
//!
//! ```rust
//! use bubble_layout::{BubbleLayout, BubbleStyle, PointerEdge};
//! use bubble_core::{RecordingContext, Size};
//!
//! let mut bubble = BubbleLayout::new(&BubbleStyle::default());
//! bubble.on_size_changed(200, 120);
//! bubble.set_pointer_edge(PointerEdge::Top);
//!
//! let mut ctx = RecordingContext::new(Size::new(200.0, 120.0));
//! bubble.draw(&mut ctx);
//! assert_eq!(ctx.commands().len(), 2);
//! ```

use bubble_core::{Color, DrawContext};
use bubble_paint::{Paint, PaintExt};

use crate::outline::{compute, BubbleGeometry, BubbleOutline, BubbleShadow, PointerEdge};
use crate::state::BubbleState;
use crate::style::BubbleStyle;

/// Space children should keep clear of, in pixels
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ContentInsets {
    pub left: u32,
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
}

/// A container that paints itself as a speech bubble
#[derive(Clone, Debug)]
pub struct BubbleLayout {
    geometry: BubbleGeometry,
    fill_color: Color,
    outline: BubbleOutline,
}

impl BubbleLayout {
    /// A bubble with no size yet; call [`on_size_changed`](Self::on_size_changed)
    /// once the container is measured
    pub fn new(style: &BubbleStyle) -> Self {
        let geometry = style.geometry(0, 0);
        Self {
            geometry,
            fill_color: style.fill_color,
            outline: compute(&geometry),
        }
    }

    pub fn geometry(&self) -> &BubbleGeometry {
        &self.geometry
    }

    pub fn outline(&self) -> &BubbleOutline {
        &self.outline
    }

    pub fn fill_color(&self) -> Color {
        self.fill_color
    }

    pub fn container_size(&self) -> (u32, u32) {
        (
            self.geometry.container_width,
            self.geometry.container_height,
        )
    }

    /// Replace the whole geometry at once
    pub fn set_geometry(&mut self, geometry: BubbleGeometry) {
        self.geometry = geometry;
        self.recompute();
    }

    pub fn on_size_changed(&mut self, width: u32, height: u32) {
        tracing::debug!(
            from_width = self.geometry.container_width,
            from_height = self.geometry.container_height,
            width,
            height,
            "bubble size changed"
        );
        self.set_geometry(self.geometry.with_container(width, height));
    }

    /// Recompute the outline from the current parameters
    pub fn invalidate(&mut self) {
        self.recompute();
    }

    pub fn set_pointer_edge(&mut self, edge: PointerEdge) {
        self.set_geometry(self.geometry.with_edge(edge));
    }

    pub fn set_pointer_offset(&mut self, offset: i32) {
        self.set_geometry(self.geometry.with_offset(offset));
    }

    pub fn set_pointer_width(&mut self, width: u32) {
        self.set_geometry(self.geometry.with_pointer_width(width));
    }

    pub fn set_pointer_length(&mut self, length: u32) {
        self.set_geometry(self.geometry.with_pointer_length(length));
    }

    pub fn set_padding(&mut self, padding: u32) {
        self.set_geometry(self.geometry.with_padding(padding));
    }

    pub fn set_corner_radius(&mut self, radius: u32) {
        self.set_geometry(self.geometry.with_corner_radius(radius));
    }

    pub fn set_shadow(&mut self, color: Color, offset_x: i32, offset_y: i32, radius: u32) {
        self.set_geometry(self.geometry.with_shadow(BubbleShadow {
            color,
            offset_x,
            offset_y,
            radius,
        }));
    }

    pub fn set_shadow_color(&mut self, color: Color) {
        let shadow = BubbleShadow {
            color,
            ..self.geometry.shadow
        };
        self.set_geometry(self.geometry.with_shadow(shadow));
    }

    pub fn set_shadow_radius(&mut self, radius: u32) {
        let shadow = BubbleShadow {
            radius,
            ..self.geometry.shadow
        };
        self.set_geometry(self.geometry.with_shadow(shadow));
    }

    pub fn set_shadow_offset(&mut self, offset_x: i32, offset_y: i32) {
        let shadow = BubbleShadow {
            offset_x,
            offset_y,
            ..self.geometry.shadow
        };
        self.set_geometry(self.geometry.with_shadow(shadow));
    }

    pub fn set_fill_color(&mut self, color: Color) {
        self.fill_color = color;
        self.recompute();
    }

    /// Insets for child content: twice the padding on every side, plus the
    /// pointer length on the pointer edge
    ///
    /// The legacy widget only ever added the pointer length to the bottom
    /// inset, whatever the pointer edge. Here it follows the pointer, so a
    /// `Left` pointer widens the left inset and the bottom keeps plain padding.
    pub fn content_insets(&self) -> ContentInsets {
        let inset = self.geometry.padding.saturating_mul(2);
        let pointer = |edge: PointerEdge| {
            if self.geometry.pointer_edge == edge {
                inset.saturating_add(self.geometry.pointer_length)
            } else {
                inset
            }
        };

        ContentInsets {
            left: pointer(PointerEdge::Left),
            top: pointer(PointerEdge::Top),
            right: pointer(PointerEdge::Right),
            bottom: pointer(PointerEdge::Bottom),
        }
    }

    /// Fill color, shadow and corner rounding for the outline
    pub fn paint(&self) -> Paint {
        Paint::fill(self.fill_color)
            .with_shadow(self.geometry.shadow.to_shadow())
            .with_corner_radius(self.outline.corner_radius() as f32)
    }

    /// Paint the bubble: shadow, then the rounded fill
    pub fn draw(&self, ctx: &mut dyn DrawContext) {
        ctx.draw_path(&self.outline.to_path(), &self.paint());
    }

    pub fn save_state(&self) -> BubbleState {
        BubbleState::capture(&self.geometry, self.fill_color)
    }

    /// Restore saved parameters and recompute the outline
    ///
    /// The saved body bounds are informational; the body is derived again
    /// from the restored parameters.
    pub fn restore_state(&mut self, state: &BubbleState) {
        tracing::debug!(
            width = state.width,
            height = state.height,
            edge = %state.pointer_edge,
            "restoring bubble state"
        );
        self.fill_color = state.fill_color;
        self.set_geometry(state.geometry());
    }

    fn recompute(&mut self) {
        self.outline = compute(&self.geometry);
        tracing::trace!(
            geometry = ?self.geometry,
            offset = self.outline.offset(),
            "bubble outline recomputed"
        );
        if self.outline.is_degenerate() && self.geometry.container_width > 0 {
            tracing::warn!(
                body = ?self.outline.body(),
                pointer_width = self.geometry.pointer_width,
                "bubble geometry does not fit its container"
            );
        }
    }
}

impl Default for BubbleLayout {
    fn default() -> Self {
        Self::new(&BubbleStyle::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bubble_core::{Brush, DrawCommand, Point, RecordingContext, Size};

    fn sized() -> BubbleLayout {
        let mut bubble = BubbleLayout::default();
        bubble.on_size_changed(200, 120);
        bubble
    }

    #[test]
    fn test_size_change_recomputes() {
        let bubble = sized();
        assert_eq!(bubble.container_size(), (200, 120));
        assert_eq!(bubble.outline().tip(), Point::new(33.0, 112.0));
    }

    #[test]
    fn test_setters_recompute() {
        let mut bubble = sized();

        bubble.set_pointer_edge(PointerEdge::Top);
        assert_eq!(bubble.outline().edge(), PointerEdge::Top);
        assert_eq!(bubble.outline().body().top, 58);

        bubble.set_pointer_offset(100);
        assert_eq!(bubble.outline().offset(), 100);

        bubble.set_pointer_width(20);
        assert_eq!(bubble.outline().tip().x, 110.0);

        bubble.set_pointer_length(10);
        assert_eq!(bubble.outline().tip().y, 8.0);

        bubble.set_padding(0);
        assert_eq!(bubble.outline().body().left, 0);

        bubble.set_corner_radius(4);
        assert_eq!(bubble.outline().corner_radius(), 4);

        assert_eq!(*bubble.outline(), compute(bubble.geometry()));
    }

    #[test]
    fn test_shadow_setters_keep_outline() {
        let mut bubble = sized();
        let before = *bubble.outline().vertices();

        bubble.set_shadow(Color::RED, 5, 6, 7);
        bubble.set_shadow_color(Color::BLUE);
        bubble.set_shadow_radius(12);
        bubble.set_shadow_offset(-1, 2);

        assert_eq!(
            bubble.geometry().shadow,
            BubbleShadow {
                color: Color::BLUE,
                offset_x: -1,
                offset_y: 2,
                radius: 12,
            }
        );
        assert_eq!(*bubble.outline().vertices(), before);
    }

    #[test]
    fn test_content_insets() {
        let mut bubble = sized();
        assert_eq!(
            bubble.content_insets(),
            ContentInsets {
                left: 16,
                top: 16,
                right: 16,
                bottom: 66,
            }
        );

        // The pointer inset moves with the pointer instead of staying on the bottom
        bubble.set_pointer_edge(PointerEdge::Left);
        let insets = bubble.content_insets();
        assert_eq!((insets.left, insets.bottom), (66, 16));

        bubble.set_pointer_edge(PointerEdge::Top);
        let insets = bubble.content_insets();
        assert_eq!((insets.top, insets.bottom), (66, 16));

        bubble.set_pointer_edge(PointerEdge::Right);
        let insets = bubble.content_insets();
        assert_eq!((insets.right, insets.bottom), (66, 16));
    }

    #[test]
    fn test_draw_records_shadow_then_fill() {
        let mut bubble = sized();
        bubble.set_fill_color(Color::GREEN);

        let mut ctx = RecordingContext::new(Size::new(200.0, 120.0));
        bubble.draw(&mut ctx);

        let commands = ctx.commands();
        assert_eq!(commands.len(), 2);
        assert!(matches!(
            &commands[0],
            DrawCommand::DrawPathShadow { shadow, .. } if shadow.blur == 10.0
        ));
        assert!(matches!(
            &commands[1],
            DrawCommand::FillPath { brush: Brush::Solid(color), .. } if *color == Color::GREEN
        ));
    }

    #[test]
    fn test_paint_follows_parameters() {
        let mut bubble = sized();
        bubble.set_corner_radius(0);
        assert!(bubble.paint().path_effect.is_none());

        bubble.set_shadow_color(Color::TRANSPARENT);
        let mut ctx = RecordingContext::new(Size::new(200.0, 120.0));
        bubble.draw(&mut ctx);
        assert_eq!(ctx.commands().len(), 1);
    }

    #[test]
    fn test_rounding_stays_inside_outline() {
        for edge in PointerEdge::ALL {
            let mut bubble = sized();
            bubble.set_pointer_edge(edge);

            let sharp = bubble.outline().to_path();
            let rounded = bubble.paint().effected_path(&sharp);
            assert_ne!(rounded, sharp);
            assert!(sharp.bounds().contains_rect(&rounded.bounds()), "{edge}");
        }
    }

    #[test]
    fn test_save_restore_round_trip() {
        let mut bubble = sized();
        bubble.set_pointer_edge(PointerEdge::Right);
        bubble.set_pointer_offset(-5);
        bubble.set_pointer_width(31);
        bubble.set_shadow(Color::rgba(0.2, 0.2, 0.2, 0.6), -3, 4, 9);
        bubble.set_fill_color(Color::from_hex(0xFFEEDD));
        let saved = bubble.save_state();

        let mut restored = BubbleLayout::default();
        restored.restore_state(&saved);

        assert_eq!(restored.save_state(), saved);
        assert_eq!(restored.geometry(), bubble.geometry());
        assert_eq!(restored.outline(), bubble.outline());
        assert_eq!(restored.fill_color(), bubble.fill_color());
    }

    #[test]
    fn test_restore_from_json() {
        let bubble = sized();
        let json = bubble.save_state().to_json().unwrap();

        let mut restored = BubbleLayout::default();
        restored.restore_state(&BubbleState::from_json(&json).unwrap());
        assert_eq!(restored.outline(), bubble.outline());
    }

    #[test]
    fn test_invalidate_is_stable() {
        let mut bubble = sized();
        let before = *bubble.outline();
        bubble.invalidate();
        assert_eq!(*bubble.outline(), before);
    }
}
