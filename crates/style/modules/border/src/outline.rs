//! Vector outlines for canvas-style backends that stroke paths instead of
//! consuming triangles.
//!
//! A border whose four edges share width and fill becomes one closed path,
//! with an arc at each rounded corner. That path can also carry an opaque
//! interior so a backend paints background and border in a single fill and
//! stroke. Anything else becomes one open segment per visible edge and
//! ignores the radii.

use core::f32::consts::{FRAC_PI_2, PI};

use style_face_buffer::Point;
use style_fill::Colour;
use style_geometry::Rect;

use crate::{Border, BorderEdge, Corner};

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PathCommand {
    MoveTo(Point),
    LineTo(Point),
    /// Clockwise arc in screen space, angles in radians.
    Arc {
        center: Point,
        radius: f32,
        start_angle: f32,
        end_angle: f32,
    },
    Close,
}

/// A path stroked with one width and colour, optionally filled first.
#[derive(Clone, Debug, PartialEq)]
pub struct StrokedPath {
    pub commands: Vec<PathCommand>,
    pub width: f32,
    pub colour: Colour,
    /// Interior colour; only closed paths carry one.
    pub fill: Option<Colour>,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub enum BorderOutline {
    /// Nothing visible.
    #[default]
    None,
    /// All edges equal: one closed path.
    Uniform(StrokedPath),
    /// One segment per visible edge, in left, top, right, bottom order.
    PerEdge(Vec<StrokedPath>),
}

impl BorderOutline {
    /// Total number of stroked paths.
    pub fn path_count(&self) -> usize {
        match self {
            Self::None => 0,
            Self::Uniform(_) => 1,
            Self::PerEdge(paths) => paths.len(),
        }
    }

    /// Fill the interior of a closed outline with `interior`. Per-edge
    /// segments enclose nothing and come back unchanged.
    #[must_use]
    pub fn filled(self, interior: Colour) -> Self {
        match self {
            Self::Uniform(path) => Self::Uniform(StrokedPath {
                fill: Some(interior),
                ..path
            }),
            other @ (Self::None | Self::PerEdge(_)) => other,
        }
    }

    /// Interior colour of a closed outline.
    pub const fn fill(&self) -> Option<Colour> {
        match self {
            Self::Uniform(path) => path.fill,
            Self::None | Self::PerEdge(_) => None,
        }
    }
}

impl Border {
    /// Stroke paths centred on each edge's band inside `rect`.
    pub fn outline(&self, rect: &Rect) -> BorderOutline {
        if self.is_uniform() {
            return uniform_outline(self, rect);
        }
        let segments: Vec<StrokedPath> = self
            .edges()
            .iter()
            .zip(edge_segments(self, rect))
            .filter_map(|(edge, (from, to))| {
                stroke(edge, vec![PathCommand::MoveTo(from), PathCommand::LineTo(to)])
            })
            .collect();
        if segments.is_empty() {
            BorderOutline::None
        } else {
            BorderOutline::PerEdge(segments)
        }
    }
}

fn stroke(edge: &BorderEdge, commands: Vec<PathCommand>) -> Option<StrokedPath> {
    if !edge.is_visible() {
        return None;
    }
    Some(StrokedPath {
        commands,
        width: edge.width() as f32,
        colour: edge.fill().colour()?,
        fill: None,
    })
}

/// Centre lines of the four bands, left, top, right, bottom.
fn edge_segments(border: &Border, rect: &Rect) -> [(Point, Point); 4] {
    let half = |edge: BorderEdge| edge.width() as f32 / 2.0;
    let (left, top) = (rect.left() as f32, rect.top() as f32);
    let (right, bottom) = (rect.right() as f32, rect.bottom() as f32);
    let left_x = left + half(border.left());
    let top_y = top + half(border.top());
    let right_x = right - half(border.right());
    let bottom_y = bottom - half(border.bottom());
    [
        ([left_x, top], [left_x, bottom]),
        ([left, top_y], [right, top_y]),
        ([right_x, top], [right_x, bottom]),
        ([left, bottom_y], [right, bottom_y]),
    ]
}

fn uniform_outline(border: &Border, rect: &Rect) -> BorderOutline {
    let edge = border.left();
    let inset = edge.width() as f32 / 2.0;
    let left = rect.left() as f32 + inset;
    let top = rect.top() as f32 + inset;
    let right = rect.right() as f32 - inset;
    let bottom = rect.bottom() as f32 - inset;
    let limit = ((right - left) / 2.0).min((bottom - top) / 2.0).max(0.0);
    let radius = |corner: Corner| (border.radius(corner) as f32).min(limit);
    let (top_left, top_right) = (radius(Corner::TopLeft), radius(Corner::TopRight));
    let (bottom_right, bottom_left) = (radius(Corner::BottomRight), radius(Corner::BottomLeft));

    let mut commands = Vec::with_capacity(10);
    commands.push(PathCommand::MoveTo([left + top_left, top]));
    commands.push(PathCommand::LineTo([right - top_right, top]));
    push_arc(&mut commands, [right - top_right, top + top_right], top_right, -FRAC_PI_2);
    commands.push(PathCommand::LineTo([right, bottom - bottom_right]));
    push_arc(&mut commands, [right - bottom_right, bottom - bottom_right], bottom_right, 0.0);
    commands.push(PathCommand::LineTo([left + bottom_left, bottom]));
    push_arc(&mut commands, [left + bottom_left, bottom - bottom_left], bottom_left, FRAC_PI_2);
    commands.push(PathCommand::LineTo([left, top + top_left]));
    push_arc(&mut commands, [left + top_left, top + top_left], top_left, PI);
    commands.push(PathCommand::Close);

    stroke(&edge, commands).map_or(BorderOutline::None, BorderOutline::Uniform)
}

/// Quarter turn starting at `start_angle`; square corners add nothing.
fn push_arc(commands: &mut Vec<PathCommand>, center: Point, radius: f32, start_angle: f32) {
    if radius > 0.0 {
        commands.push(PathCommand::Arc {
            center,
            radius,
            start_angle,
            end_angle: start_angle + FRAC_PI_2,
        });
    }
}
