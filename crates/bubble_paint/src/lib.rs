//! Bubble Paint API
//!
//! Paint-level state layered over the `DrawContext` back end: a fill brush,
//! an optional drop shadow and an optional corner-rounding path effect. The
//! effect rounds every vertex of a polygon at draw time, so geometry code can
//! keep producing sharp-cornered outlines.
//!
//! # Example
//!
//! ```rust
//! use bubble_core::RecordingContext;
//! use bubble_paint::{Color, Paint, PaintExt, Path, Point, Shadow, Size};
//!
//! let mut ctx = RecordingContext::new(Size::new(200.0, 120.0));
//! let paint = Paint::fill(Color::WHITE)
//!     .with_shadow(Shadow::new(3.0, 3.0, 10.0, Color::GRAY))
//!     .with_corner_radius(20.0);
//!
//! let triangle = Path::polygon(&[
//!     Point::new(8.0, 8.0),
//!     Point::new(192.0, 8.0),
//!     Point::new(100.0, 100.0),
//! ]);
//! ctx.draw_path(&triangle, &paint);
//! assert_eq!(ctx.commands().len(), 2);
//! ```

pub mod effect;
pub mod paint;

// ─────────────────────────────────────────────────────────────────────────────
// Core type re-exports from bubble_core (unified type system)
// ─────────────────────────────────────────────────────────────────────────────

pub use bubble_core::{
    // Brushes and fills
    Brush,
    // Colors
    Color,
    // Draw context trait
    DrawCommand,
    DrawContext,
    // Paths
    Path,
    PathCommand,
    // Geometry
    Point,
    Rect,
    // Shadows
    Shadow,
    Size,
};

// ─────────────────────────────────────────────────────────────────────────────
// bubble_paint specific exports
// ─────────────────────────────────────────────────────────────────────────────

pub use effect::CornerPathEffect;
pub use paint::{Paint, PaintExt};
