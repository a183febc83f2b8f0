//! Corner path effect
//!
//! Rounds the sharp corners of polygonal contours at paint time, leaving the
//! source path untouched. Every straight segment is shortened by `radius` at
//! both ends (or by half its length when it is shorter than `2 * radius`),
//! and each source vertex becomes the control point of a quadratic curve
//! joining the shortened neighbours.
//!
//! ```text
//!   before            after
//!   ┌──────           ╭──────
//!   │                 │
//! ```
//!
//! Only subpaths made of a move followed by straight lines are rounded.
//! Subpaths that already contain curves are copied through unchanged.

use smallvec::SmallVec;

use bubble_core::{Path, PathCommand, Point};

/// Uniform corner rounding applied to every vertex of a polygon
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CornerPathEffect {
    radius: f32,
}

impl CornerPathEffect {
    pub fn new(radius: f32) -> Self {
        Self { radius }
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Produce the rounded version of `path`
    ///
    /// A radius that is zero, negative or NaN returns the path unchanged.
    pub fn apply(&self, path: &Path) -> Path {
        if !(self.radius > 0.0) {
            return path.clone();
        }

        let mut rounded = Path::new();
        for subpath in split_subpaths(path.commands()) {
            rounded = match polygon_of(subpath) {
                Some((points, closed)) => self.round_polygon(rounded, &points, closed),
                None => {
                    tracing::trace!(
                        commands = subpath.len(),
                        "corner effect: subpath is not a polygon, copied unchanged"
                    );
                    copy_commands(rounded, subpath)
                }
            };
        }
        rounded
    }

    fn round_polygon(&self, path: Path, points: &[Point], closed: bool) -> Path {
        if points.len() < 2 {
            return copy_points(path, points, closed);
        }

        let segments = if closed {
            points.len()
        } else {
            points.len() - 1
        };
        let steps: SmallVec<[Step; 8]> = (0..segments)
            .map(|i| Step::between(points[i], points[(i + 1) % points.len()], self.radius))
            .collect();

        let first = points[0];
        let mut path = if closed {
            path.move_to(first.x + steps[0].dx, first.y + steps[0].dy)
        } else {
            path.move_to(first.x, first.y)
        };

        for (i, step) in steps.iter().enumerate() {
            let start = points[i];
            let end = points[(i + 1) % points.len()];
            // An open contour ends with a plain line to its last vertex
            let trailing = !closed && i + 1 == segments;

            if i > 0 {
                path = path.quad_to(start.x, start.y, start.x + step.dx, start.y + step.dy);
            } else if !closed && !step.draw_segment {
                path = path.line_to(start.x + step.dx, start.y + step.dy);
            }

            if step.draw_segment && !trailing {
                path = path.line_to(end.x - step.dx, end.y - step.dy);
            }
        }

        if closed {
            path.quad_to(first.x, first.y, first.x + steps[0].dx, first.y + steps[0].dy)
                .close()
        } else {
            let last = points[points.len() - 1];
            path.line_to(last.x, last.y)
        }
    }
}

/// How far to pull back from each end of a segment
#[derive(Clone, Copy, Debug)]
struct Step {
    dx: f32,
    dy: f32,
    /// False when the two corner curves meet in the middle of the segment
    draw_segment: bool,
}

impl Step {
    fn between(a: Point, b: Point, radius: f32) -> Self {
        let dist = a.distance(b);
        let (dx, dy) = (b.x - a.x, b.y - a.y);
        if dist <= radius * 2.0 {
            Self {
                dx: dx * 0.5,
                dy: dy * 0.5,
                draw_segment: false,
            }
        } else {
            let scale = radius / dist;
            Self {
                dx: dx * scale,
                dy: dy * scale,
                draw_segment: true,
            }
        }
    }
}

/// Split commands into runs that each start at a MoveTo
fn split_subpaths(commands: &[PathCommand]) -> impl Iterator<Item = &[PathCommand]> {
    let mut rest = commands;
    std::iter::from_fn(move || {
        if rest.is_empty() {
            return None;
        }
        let end = rest
            .iter()
            .skip(1)
            .position(|cmd| matches!(cmd, PathCommand::MoveTo(_)))
            .map(|pos| pos + 1)
            .unwrap_or(rest.len());
        let (subpath, tail) = rest.split_at(end);
        rest = tail;
        Some(subpath)
    })
}

/// Extract the vertices of a `MoveTo, LineTo*, Close?` subpath
fn polygon_of(subpath: &[PathCommand]) -> Option<(SmallVec<[Point; 8]>, bool)> {
    let (PathCommand::MoveTo(start), rest) = subpath.split_first()? else {
        return None;
    };

    let (lines, closed) = match rest.split_last() {
        Some((PathCommand::Close, lines)) => (lines, true),
        _ => (rest, false),
    };

    let mut points: SmallVec<[Point; 8]> = SmallVec::new();
    points.push(*start);
    for cmd in lines {
        match cmd {
            PathCommand::LineTo(p) => points.push(*p),
            _ => return None,
        }
    }
    Some((points, closed))
}

fn copy_points(mut path: Path, points: &[Point], closed: bool) -> Path {
    if let Some((first, rest)) = points.split_first() {
        path = path.move_to(first.x, first.y);
        for p in rest {
            path = path.line_to(p.x, p.y);
        }
        if closed {
            path = path.close();
        }
    }
    path
}

fn copy_commands(mut path: Path, commands: &[PathCommand]) -> Path {
    for cmd in commands {
        path = match *cmd {
            PathCommand::MoveTo(p) => path.move_to(p.x, p.y),
            PathCommand::LineTo(p) => path.line_to(p.x, p.y),
            PathCommand::QuadTo { control, end } => {
                path.quad_to(control.x, control.y, end.x, end.y)
            }
            PathCommand::CubicTo {
                control1,
                control2,
                end,
            } => path.cubic_to(control1.x, control1.y, control2.x, control2.y, end.x, end.y),
            PathCommand::Close => path.close(),
        };
    }
    path
}
