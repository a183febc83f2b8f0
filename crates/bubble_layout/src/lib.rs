//! Bubble Layout
//!
//! A container widget that paints itself as a speech bubble: a rounded
//! rectangle with one triangular pointer on one of its four edges, plus a
//! drop shadow.
//!
//! - [`outline`]: the pure geometry, [`compute`] turns a [`BubbleGeometry`]
//!   into a seven-vertex [`BubbleOutline`]
//! - [`bubble`]: the [`BubbleLayout`] host adapter that keeps the outline in
//!   step with size changes and setters
//! - [`style`]: initial parameters from TOML, with `dp` resolution
//! - [`state`]: lenient save/restore of every scalar parameter
//! - [`canvas`]: a canvas render callback for hosts that lay out canvases
//!
//! # Example
//!
//! ```rust
//! use bubble_layout::{compute, BubbleGeometry, PointerEdge};
//!
//! let geometry = BubbleGeometry::new(200, 120)
//!     .with_edge(PointerEdge::Bottom)
//!     .with_padding(8);
//! let outline = compute(&geometry);
//!
//! assert_eq!(outline.vertices().len(), 7);
//! assert_eq!((outline.tip().x, outline.tip().y), (33.0, 112.0));
//! ```

pub mod bubble;
pub mod canvas;
pub mod error;
pub mod outline;
pub mod state;
pub mod style;

pub use bubble::{BubbleLayout, ContentInsets};
pub use canvas::{bubble_canvas, CanvasBounds, CanvasRenderFn};
pub use error::{Result, StateError, StateResult, StyleError};
pub use outline::{compute, BubbleBody, BubbleGeometry, BubbleOutline, BubbleShadow, PointerEdge};
pub use state::BubbleState;
pub use style::{dp_to_px, parse_color, BubbleStyle, DEFAULT_PADDING_DP};
