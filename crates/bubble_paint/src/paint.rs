//! Paint - how a path is filled
//!
//! A `Paint` bundles the fill brush with paint-level effects: an optional drop
//! shadow and an optional corner-rounding path effect. Painting a path
//! applies the effect first, so the shadow and the fill share the rounded
//! outline.

use bubble_core::{Brush, Color, DrawContext, Path, Shadow};

use crate::effect::CornerPathEffect;

/// Fill style with optional shadow and corner effect
#[derive(Clone, Debug, PartialEq)]
pub struct Paint {
    pub brush: Brush,
    pub shadow: Option<Shadow>,
    pub path_effect: Option<CornerPathEffect>,
}

impl Paint {
    /// Plain fill with no shadow and sharp corners
    pub fn fill(brush: impl Into<Brush>) -> Self {
        Self {
            brush: brush.into(),
            shadow: None,
            path_effect: None,
        }
    }

    pub fn with_shadow(mut self, shadow: Shadow) -> Self {
        self.shadow = Some(shadow);
        self
    }

    /// Round every corner by `radius`; zero or less removes the effect
    pub fn with_corner_radius(mut self, radius: f32) -> Self {
        self.path_effect = (radius > 0.0).then(|| CornerPathEffect::new(radius));
        self
    }

    /// The path as it will be painted, after the path effect
    pub fn effected_path(&self, path: &Path) -> Path {
        match &self.path_effect {
            Some(effect) => effect.apply(path),
            None => path.clone(),
        }
    }
}

impl Default for Paint {
    fn default() -> Self {
        Self::fill(Color::BLACK)
    }
}

/// Paint-aware drawing for any DrawContext
pub trait PaintExt: DrawContext {
    /// Draw `path` with `paint`: path effect, then shadow, then fill
    fn draw_path(&mut self, path: &Path, paint: &Paint) {
        let path = paint.effected_path(path);
        if let Some(shadow) = paint.shadow.filter(Shadow::is_visible) {
            self.draw_path_shadow(&path, shadow);
        }
        self.fill_path(&path, paint.brush.clone());
    }
}

impl<T: DrawContext + ?Sized> PaintExt for T {}

#[cfg(test)]
mod tests {
    use super::*;
    use bubble_core::{DrawCommand, Point, RecordingContext, Size};

    fn bubble_shadow() -> Shadow {
        Shadow::new(3.0, 3.0, 10.0, Color::GRAY)
    }

    fn triangle() -> Path {
        Path::polygon(&[
            Point::new(0.0, 0.0),
            Point::new(100.0, 0.0),
            Point::new(50.0, 80.0),
        ])
    }

    #[test]
    fn test_corner_radius_toggles_effect() {
        let paint = Paint::fill(Color::WHITE).with_corner_radius(20.0);
        assert_eq!(paint.path_effect, Some(CornerPathEffect::new(20.0)));

        let paint = paint.with_corner_radius(0.0);
        assert!(paint.path_effect.is_none());
        assert_eq!(paint.effected_path(&triangle()), triangle());
    }

    #[test]
    fn test_draw_path_shadow_then_fill() {
        let mut ctx = RecordingContext::new(Size::new(200.0, 200.0));
        let paint = Paint::fill(Color::WHITE)
            .with_shadow(bubble_shadow())
            .with_corner_radius(10.0);

        ctx.draw_path(&triangle(), &paint);

        let commands = ctx.commands();
        assert_eq!(commands.len(), 2);
        let DrawCommand::DrawPathShadow { path: shadow_path, shadow } = &commands[0] else {
            panic!("expected shadow first, got {:?}", commands[0]);
        };
        let DrawCommand::FillPath { path: fill_path, brush } = &commands[1] else {
            panic!("expected fill second, got {:?}", commands[1]);
        };
        assert_eq!(shadow_path, fill_path);
        assert_eq!(*shadow, bubble_shadow());
        assert_eq!(*brush, Brush::Solid(Color::WHITE));
        assert_ne!(*fill_path, triangle());
    }

    #[test]
    fn test_invisible_shadow_is_skipped() {
        let mut ctx = RecordingContext::new(Size::new(200.0, 200.0));
        let paint = Paint::fill(Color::WHITE)
            .with_shadow(bubble_shadow().with_color(Color::TRANSPARENT));

        ctx.draw_path(&triangle(), &paint);

        assert_eq!(ctx.commands().len(), 1);
    }
}
