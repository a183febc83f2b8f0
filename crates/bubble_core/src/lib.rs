//! Bubble Core
//!
//! Foundational types shared by the bubble crates:
//!
//! - **Geometry**: `Point`, `Size`, `Rect` and `Affine2D` in pixel space
//! - **Visuals**: `Color`, `Brush` and `Shadow`
//! - **Paths**: `Path` built from move/line/curve/close commands
//! - **Draw Context**: the `DrawContext` rendering trait and a
//!   `RecordingContext` that records commands for deferred execution
//!
//! # Example
//!
//! ```rust
//! use bubble_core::{Color, DrawContext, Path, Point, RecordingContext, Size};
//!
//! let mut ctx = RecordingContext::new(Size::new(200.0, 120.0));
//! let triangle = Path::polygon(&[
//!     Point::new(0.0, 0.0),
//!     Point::new(50.0, 0.0),
//!     Point::new(25.0, 40.0),
//! ]);
//! ctx.fill_path(&triangle, Color::WHITE.into());
//! assert_eq!(ctx.commands().len(), 1);
//! ```

pub mod draw;
pub mod primitives;

pub use draw::{DrawCommand, DrawContext, Path, PathCommand, RecordingContext};
pub use primitives::{Affine2D, Brush, Color, Point, Rect, Shadow, Size};
