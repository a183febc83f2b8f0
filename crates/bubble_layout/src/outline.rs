//! Bubble outline construction
//!
//! Turns a [`BubbleGeometry`] into the seven-vertex contour of a speech
//! bubble: a rectangular body with one triangular pointer spliced into the
//! edge it points from.
//!
//! ```text
//!   (l,t) ┌──────────────────┐ (r,t)
//!         │                  │
//!         │       body       │
//!         │                  │
//!   (l,b) └───┐  ┌───────────┘ (r,b)
//!          off ╲╱ off + w
//!              tip
//! ```
//!
//! Corners are left sharp. Rounding is a paint-level effect applied by the
//! rendering back end with [`BubbleOutline::corner_radius`].
//!
//! Every input is accepted. Geometry that does not fit (a pointer wider than
//! the body, a pointer longer than the container) produces an overlapping or
//! inverted contour instead of an error.

use std::fmt;

use bubble_core::{Color, Path, Point, Rect, Shadow};
use serde::{Deserialize, Serialize};

/// Side of the body the pointer protrudes from
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PointerEdge {
    Left,
    Top,
    Right,
    #[default]
    Bottom,
}

impl PointerEdge {
    pub const ALL: [PointerEdge; 4] = [
        PointerEdge::Left,
        PointerEdge::Top,
        PointerEdge::Right,
        PointerEdge::Bottom,
    ];

    /// Integer code used by styling attributes (1 left, 2 top, 3 right, 4 bottom)
    pub fn code(self) -> i64 {
        match self {
            PointerEdge::Left => 1,
            PointerEdge::Top => 2,
            PointerEdge::Right => 3,
            PointerEdge::Bottom => 4,
        }
    }

    pub fn from_code(code: i64) -> Option<Self> {
        Self::ALL.into_iter().find(|edge| edge.code() == code)
    }

    /// Parse `left`, `top`, `right` or `bottom`, ignoring case
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|edge| edge.name().eq_ignore_ascii_case(name.trim()))
    }

    pub fn name(self) -> &'static str {
        match self {
            PointerEdge::Left => "left",
            PointerEdge::Top => "top",
            PointerEdge::Right => "right",
            PointerEdge::Bottom => "bottom",
        }
    }

    /// Whether the edge runs vertically, so the pointer offset is a y coordinate
    pub fn is_vertical(self) -> bool {
        matches!(self, PointerEdge::Left | PointerEdge::Right)
    }
}

impl fmt::Display for PointerEdge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Drop shadow parameters, carried through to the paint untouched
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct BubbleShadow {
    pub color: Color,
    pub offset_x: i32,
    pub offset_y: i32,
    /// Blur radius in pixels
    pub radius: u32,
}

impl BubbleShadow {
    pub fn to_shadow(&self) -> Shadow {
        Shadow::new(
            self.offset_x as f32,
            self.offset_y as f32,
            self.radius as f32,
            self.color,
        )
    }
}

impl Default for BubbleShadow {
    fn default() -> Self {
        Self {
            color: Color::GRAY,
            offset_x: 3,
            offset_y: 3,
            radius: 10,
        }
    }
}

/// Everything the outline depends on, in whole pixels
///
/// Values are replaced, never edited in place: the `with_*` methods return a
/// new geometry.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BubbleGeometry {
    pub container_width: u32,
    pub container_height: u32,
    /// Margin between the container edge and the body on every side
    pub padding: u32,
    pub pointer_edge: PointerEdge,
    /// Requested start of the pointer base along the edge (y for left/right,
    /// x for top/bottom); clamped by [`compute`]
    pub pointer_offset: i32,
    pub pointer_width: u32,
    pub pointer_length: u32,
    pub corner_radius: u32,
    pub shadow: BubbleShadow,
}

impl Default for BubbleGeometry {
    fn default() -> Self {
        Self {
            container_width: 0,
            container_height: 0,
            padding: 8,
            pointer_edge: PointerEdge::Bottom,
            pointer_offset: 0,
            pointer_width: 50,
            pointer_length: 50,
            corner_radius: 20,
            shadow: BubbleShadow::default(),
        }
    }
}

impl BubbleGeometry {
    /// Default parameters for a container of the given size
    pub fn new(container_width: u32, container_height: u32) -> Self {
        Self {
            container_width,
            container_height,
            ..Self::default()
        }
    }

    pub fn with_container(self, container_width: u32, container_height: u32) -> Self {
        Self {
            container_width,
            container_height,
            ..self
        }
    }

    pub fn with_padding(self, padding: u32) -> Self {
        Self { padding, ..self }
    }

    pub fn with_edge(self, pointer_edge: PointerEdge) -> Self {
        Self {
            pointer_edge,
            ..self
        }
    }

    pub fn with_offset(self, pointer_offset: i32) -> Self {
        Self {
            pointer_offset,
            ..self
        }
    }

    pub fn with_pointer_width(self, pointer_width: u32) -> Self {
        Self {
            pointer_width,
            ..self
        }
    }

    pub fn with_pointer_length(self, pointer_length: u32) -> Self {
        Self {
            pointer_length,
            ..self
        }
    }

    pub fn with_corner_radius(self, corner_radius: u32) -> Self {
        Self {
            corner_radius,
            ..self
        }
    }

    pub fn with_shadow(self, shadow: BubbleShadow) -> Self {
        Self { shadow, ..self }
    }

    /// The body rectangle: the container inset by `padding`, and by
    /// `pointer_length` on the pointer edge
    pub fn body(&self) -> BubbleBody {
        let padding = i64::from(self.padding);
        let length = i64::from(self.pointer_length);
        let reserve = |edge: PointerEdge| {
            if self.pointer_edge == edge {
                length
            } else {
                0
            }
        };

        BubbleBody {
            left: padding + reserve(PointerEdge::Left),
            top: padding + reserve(PointerEdge::Top),
            right: i64::from(self.container_width) - padding - reserve(PointerEdge::Right),
            bottom: i64::from(self.container_height) - padding - reserve(PointerEdge::Bottom),
        }
    }
}

/// Body rectangle in pixel edges; may be inverted for oversized padding
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BubbleBody {
    pub left: i64,
    pub top: i64,
    pub right: i64,
    pub bottom: i64,
}

impl BubbleBody {
    pub fn width(&self) -> i64 {
        self.right - self.left
    }

    pub fn height(&self) -> i64 {
        self.bottom - self.top
    }

    /// Right edge left of the left edge, or bottom above top
    pub fn is_inverted(&self) -> bool {
        self.right < self.left || self.bottom < self.top
    }

    pub fn to_rect(&self) -> Rect {
        Rect::from_ltrb(
            self.left as f32,
            self.top as f32,
            self.right as f32,
            self.bottom as f32,
        )
    }
}

/// The computed bubble contour
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BubbleOutline {
    vertices: [Point; 7],
    body: BubbleBody,
    edge: PointerEdge,
    offset: i64,
    pointer_width: u32,
    corner_radius: u32,
}

impl BubbleOutline {
    /// The seven vertices in drawing order; the contour closes back to the first
    pub fn vertices(&self) -> &[Point; 7] {
        &self.vertices
    }

    pub fn body(&self) -> BubbleBody {
        self.body
    }

    pub fn edge(&self) -> PointerEdge {
        self.edge
    }

    /// Pointer base start after clamping
    pub fn offset(&self) -> i64 {
        self.offset
    }

    pub fn tip(&self) -> Point {
        self.vertices[1]
    }

    /// Where the pointer base meets the body, in drawing order
    pub fn pointer_base(&self) -> (Point, Point) {
        (self.vertices[0], self.vertices[2])
    }

    pub fn corner_radius(&self) -> u32 {
        self.corner_radius
    }

    /// Inverted body, or a pointer wider than the edge it sits on
    pub fn is_degenerate(&self) -> bool {
        let span = if self.edge.is_vertical() {
            self.body.height()
        } else {
            self.body.width()
        };
        self.body.is_inverted() || i64::from(self.pointer_width) > span
    }

    /// Move, six lines, close
    pub fn to_path(&self) -> Path {
        Path::polygon(&self.vertices)
    }
}

/// Build the outline for `geometry`
///
/// Pure and allocation-free. The pointer offset is clamped upper bound first
/// (`far - pointer_width`), then floored at `padding`, so the floor wins when
/// the body is narrower than the pointer.
pub fn compute(geometry: &BubbleGeometry) -> BubbleOutline {
    let body = geometry.body();
    let edge = geometry.pointer_edge;
    let padding = i64::from(geometry.padding);
    let width = i64::from(geometry.pointer_width);
    let length = i64::from(geometry.pointer_length);

    let far = if edge.is_vertical() {
        body.bottom
    } else {
        body.right
    };
    let mut offset = i64::from(geometry.pointer_offset);
    if offset > far - width {
        offset = far - width;
    }
    if offset < padding {
        offset = padding;
    }

    // Edge-local frame: u runs along the pointer edge, v across it
    let (near, far_v, out) = match edge {
        PointerEdge::Left => (body.left, body.right, -1),
        PointerEdge::Top => (body.top, body.bottom, -1),
        PointerEdge::Right => (body.right, body.left, 1),
        PointerEdge::Bottom => (body.bottom, body.top, 1),
    };
    let (u_min, u_max) = if edge.is_vertical() {
        (body.top, body.bottom)
    } else {
        (body.left, body.right)
    };
    // Each flank advances by half the width, rounded down
    let half = width / 2;

    let local = [
        (offset, near),
        (offset + half, near + out * length),
        (offset + 2 * half, near),
        (u_max, near),
        (u_max, far_v),
        (u_min, far_v),
        (u_min, near),
    ];
    let vertices = local.map(|(u, v)| {
        let (x, y) = if edge.is_vertical() { (v, u) } else { (u, v) };
        Point::new(x as f32, y as f32)
    });

    BubbleOutline {
        vertices,
        body,
        edge,
        offset,
        pointer_width: geometry.pointer_width,
        corner_radius: geometry.corner_radius,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bubble_core::PathCommand;

    fn scenario() -> BubbleGeometry {
        BubbleGeometry::new(200, 120)
            .with_padding(8)
            .with_edge(PointerEdge::Bottom)
            .with_pointer_width(50)
            .with_pointer_length(50)
            .with_offset(0)
    }

    fn p(x: f32, y: f32) -> Point {
        Point::new(x, y)
    }

    #[test]
    fn test_bottom_scenario() {
        let outline = compute(&scenario());

        assert_eq!(
            outline.body(),
            BubbleBody {
                left: 8,
                top: 8,
                right: 192,
                bottom: 62
            }
        );
        assert_eq!(outline.offset(), 8);
        assert_eq!(outline.tip(), p(33.0, 112.0));
        assert_eq!(
            *outline.vertices(),
            [
                p(8.0, 62.0),
                p(33.0, 112.0),
                p(58.0, 62.0),
                p(192.0, 62.0),
                p(192.0, 8.0),
                p(8.0, 8.0),
                p(8.0, 62.0),
            ]
        );
        assert_eq!(outline.corner_radius(), 20);
    }

    #[test]
    fn test_vertex_order_per_edge() {
        let base = BubbleGeometry::new(300, 200)
            .with_padding(10)
            .with_pointer_width(40)
            .with_pointer_length(20)
            .with_offset(60);

        // LEFT: l = 30, t = 10, r = 290, b = 190
        let left = compute(&base.with_edge(PointerEdge::Left));
        assert_eq!(
            *left.vertices(),
            [
                p(30.0, 60.0),
                p(10.0, 80.0),
                p(30.0, 100.0),
                p(30.0, 190.0),
                p(290.0, 190.0),
                p(290.0, 10.0),
                p(30.0, 10.0),
            ]
        );

        // TOP: l = 10, t = 30, r = 290, b = 190
        let top = compute(&base.with_edge(PointerEdge::Top));
        assert_eq!(
            *top.vertices(),
            [
                p(60.0, 30.0),
                p(80.0, 10.0),
                p(100.0, 30.0),
                p(290.0, 30.0),
                p(290.0, 190.0),
                p(10.0, 190.0),
                p(10.0, 30.0),
            ]
        );

        // RIGHT: l = 10, t = 10, r = 270, b = 190
        let right = compute(&base.with_edge(PointerEdge::Right));
        assert_eq!(
            *right.vertices(),
            [
                p(270.0, 60.0),
                p(290.0, 80.0),
                p(270.0, 100.0),
                p(270.0, 190.0),
                p(10.0, 190.0),
                p(10.0, 10.0),
                p(270.0, 10.0),
            ]
        );
    }

    #[test]
    fn test_seven_vertices_closed_path() {
        for edge in PointerEdge::ALL {
            let path = compute(&scenario().with_edge(edge)).to_path();
            let cmds = path.commands();
            assert_eq!(cmds.len(), 8);
            assert!(matches!(cmds[0], PathCommand::MoveTo(_)));
            assert!(cmds[1..7]
                .iter()
                .all(|c| matches!(c, PathCommand::LineTo(_))));
            assert_eq!(cmds[7], PathCommand::Close);
        }
    }

    #[test]
    fn test_clamp_floor_wins_over_upper_bound() {
        // Body spans 8..48 horizontally: 40px, narrower than the pointer
        let geometry = BubbleGeometry::new(56, 120)
            .with_padding(8)
            .with_pointer_width(50)
            .with_offset(100);
        let outline = compute(&geometry);
        assert_eq!(outline.body().width(), 40);
        assert_eq!(outline.offset(), 8);
        assert!(outline.is_degenerate());
    }

    #[test]
    fn test_clamp_upper_bound() {
        let outline = compute(&scenario().with_offset(500));
        assert_eq!(outline.offset(), 192 - 50);
        let (_, base_end) = outline.pointer_base();
        assert_eq!(base_end.x, 192.0);

        let outline = compute(&scenario().with_offset(-40));
        assert_eq!(outline.offset(), 8);

        let outline = compute(&scenario().with_offset(70));
        assert_eq!(outline.offset(), 70);
    }

    #[test]
    fn test_odd_width_rounds_each_flank() {
        let outline = compute(&scenario().with_offset(20).with_pointer_width(51));
        let (start, end) = outline.pointer_base();
        assert_eq!(outline.tip().x, start.x + 25.0);
        assert_eq!(end.x, start.x + 50.0);
    }

    #[test]
    fn test_body_within_container() {
        for edge in PointerEdge::ALL {
            for (w, h) in [(1, 1), (2, 7), (40, 40), (200, 120), (17, 301)] {
                for padding in 0..=w.min(h) / 2 {
                    let geometry = BubbleGeometry::new(w, h)
                        .with_edge(edge)
                        .with_padding(padding)
                        .with_pointer_length(0);
                    let body = geometry.body();
                    assert!(body.left >= 0 && body.top >= 0);
                    assert!(body.right <= i64::from(w) && body.bottom <= i64::from(h));
                    assert!(!body.is_inverted(), "{edge} {w}x{h} padding {padding}");
                }
            }
        }
    }

    #[test]
    fn test_tip_outside_body() {
        for edge in PointerEdge::ALL {
            let outline = compute(&BubbleGeometry::new(240, 240).with_edge(edge).with_offset(60));
            let body = outline.body().to_rect();
            let tip = outline.tip();
            assert!(!body.contains(tip), "{edge}: tip {tip:?} inside {body:?}");
            assert!(Rect::new(0.0, 0.0, 240.0, 240.0).contains(tip));
            assert!(!outline.is_degenerate());
        }
    }

    #[test]
    fn test_left_is_transpose_of_top() {
        let top = BubbleGeometry::new(200, 120)
            .with_edge(PointerEdge::Top)
            .with_offset(30);
        let left = top.with_container(120, 200).with_edge(PointerEdge::Left);

        let transposed = compute(&top).vertices().map(Point::transpose);
        assert_eq!(*compute(&left).vertices(), transposed);
    }

    #[test]
    fn test_bottom_mirrors_top() {
        let top = BubbleGeometry::new(200, 120)
            .with_edge(PointerEdge::Top)
            .with_offset(30);
        let bottom = top.with_edge(PointerEdge::Bottom);

        let mirrored = compute(&top).vertices().map(|v| p(v.x, 120.0 - v.y));
        assert_eq!(*compute(&bottom).vertices(), mirrored);
    }

    #[test]
    fn test_right_mirrors_left() {
        let left = BubbleGeometry::new(200, 160)
            .with_edge(PointerEdge::Left)
            .with_offset(30);
        let right = left.with_edge(PointerEdge::Right);

        let mirrored = compute(&left).vertices().map(|v| p(200.0 - v.x, v.y));
        assert_eq!(*compute(&right).vertices(), mirrored);
    }

    #[test]
    fn test_shadow_does_not_move_vertices() {
        let plain = compute(&scenario());
        let shadowed = compute(&scenario().with_shadow(BubbleShadow {
            color: Color::RED,
            offset_x: -12,
            offset_y: 40,
            radius: 99,
        }));
        assert_eq!(plain.vertices(), shadowed.vertices());
    }

    #[test]
    fn test_compute_is_idempotent() {
        let geometry = scenario().with_edge(PointerEdge::Right).with_offset(17);
        let bits =
            |outline: BubbleOutline| outline.vertices().map(|v| (v.x.to_bits(), v.y.to_bits()));
        assert_eq!(bits(compute(&geometry)), bits(compute(&geometry)));
    }

    #[test]
    fn test_pathological_input_degenerates() {
        let geometry = BubbleGeometry::new(10, 10)
            .with_padding(u32::MAX)
            .with_pointer_width(u32::MAX)
            .with_pointer_length(u32::MAX)
            .with_offset(i32::MIN);
        let outline = compute(&geometry);
        assert_eq!(outline.vertices().len(), 7);
        assert!(outline.body().is_inverted());
        assert!(outline.is_degenerate());
    }

    #[test]
    fn test_edge_codes_and_names() {
        for edge in PointerEdge::ALL {
            assert_eq!(PointerEdge::from_code(edge.code()), Some(edge));
            assert_eq!(PointerEdge::from_name(&edge.to_string().to_uppercase()), Some(edge));
        }
        assert_eq!(PointerEdge::from_code(0), None);
        assert_eq!(PointerEdge::from_name("middle"), None);
        assert_eq!(PointerEdge::default(), PointerEdge::Bottom);
    }
}
