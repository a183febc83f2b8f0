//! Canvas integration
//!
//! Exposes a bubble as a canvas render callback: the host hands the callback
//! a `DrawContext` and the bounds it laid the canvas out at, and the bubble
//! resizes itself to those bounds before painting.
//!
//! # Example
//!
//! ```rust
//! use std::cell::RefCell;
//! use std::rc::Rc;
//!
//! use bubble_core::{RecordingContext, Size};
//! use bubble_layout::{bubble_canvas, BubbleLayout, CanvasBounds};
//!
//! let bubble = Rc::new(RefCell::new(BubbleLayout::default()));
//! let render = bubble_canvas(bubble.clone());
//!
//! let mut ctx = RecordingContext::new(Size::new(240.0, 160.0));
//! render(&mut ctx, CanvasBounds { width: 240.0, height: 160.0 });
//! assert_eq!(bubble.borrow().container_size(), (240, 160));
//! ```

use std::cell::RefCell;
use std::rc::Rc;

use bubble_core::DrawContext;

use crate::bubble::BubbleLayout;

/// Bounds passed to canvas render callback
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CanvasBounds {
    /// Width of the canvas element
    pub width: f32,
    /// Height of the canvas element
    pub height: f32,
}

impl CanvasBounds {
    /// Whole-pixel size, rounded down; negative or NaN extents become zero
    pub fn to_pixels(self) -> (u32, u32) {
        (self.width.max(0.0) as u32, self.height.max(0.0) as u32)
    }
}

/// Canvas render function type - uses Rc for single-threaded UI
pub type CanvasRenderFn = Rc<dyn Fn(&mut dyn DrawContext, CanvasBounds)>;

/// Render callback that keeps `bubble` sized to the canvas and paints it
///
/// The resize and the draw happen under one borrow, so the outline painted
/// always matches the bounds of this frame.
pub fn bubble_canvas(bubble: Rc<RefCell<BubbleLayout>>) -> CanvasRenderFn {
    Rc::new(move |ctx: &mut dyn DrawContext, bounds: CanvasBounds| {
        let Ok(mut bubble) = bubble.try_borrow_mut() else {
            tracing::warn!("bubble is borrowed elsewhere, skipping canvas frame");
            return;
        };

        let (width, height) = bounds.to_pixels();
        if bubble.container_size() != (width, height) {
            bubble.on_size_changed(width, height);
        }
        bubble.draw(ctx);
    })
}
