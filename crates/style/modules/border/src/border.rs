use log::trace;
use style_face_buffer::FaceBuffer;
use style_fill::{PlainFill, Tessellate};
use style_geometry::{Edges, Rect};

use crate::{BorderEdge, BorderError, Corner, CornerRadii};

/// Edges are stored left, top, right, bottom.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Border {
    left: BorderEdge,
    top: BorderEdge,
    right: BorderEdge,
    bottom: BorderEdge,
    radii: CornerRadii,
}

impl Border {
    /// Same edge on all four sides, square corners.
    pub const fn uniform(edge: BorderEdge) -> Self {
        Self {
            left: edge,
            top: edge,
            right: edge,
            bottom: edge,
            radii: CornerRadii::ZERO,
        }
    }

    pub const fn new(
        left: BorderEdge,
        top: BorderEdge,
        right: BorderEdge,
        bottom: BorderEdge,
    ) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
            radii: CornerRadii::ZERO,
        }
    }

    #[inline]
    pub const fn left(&self) -> BorderEdge {
        self.left
    }

    #[inline]
    pub const fn top(&self) -> BorderEdge {
        self.top
    }

    #[inline]
    pub const fn right(&self) -> BorderEdge {
        self.right
    }

    #[inline]
    pub const fn bottom(&self) -> BorderEdge {
        self.bottom
    }

    #[inline]
    pub fn left_mut(&mut self) -> &mut BorderEdge {
        &mut self.left
    }

    #[inline]
    pub fn top_mut(&mut self) -> &mut BorderEdge {
        &mut self.top
    }

    #[inline]
    pub fn right_mut(&mut self) -> &mut BorderEdge {
        &mut self.right
    }

    #[inline]
    pub fn bottom_mut(&mut self) -> &mut BorderEdge {
        &mut self.bottom
    }

    /// Edges in left, top, right, bottom order.
    #[inline]
    pub const fn edges(&self) -> [BorderEdge; 4] {
        [self.left, self.top, self.right, self.bottom]
    }

    #[inline]
    pub const fn radii(&self) -> CornerRadii {
        self.radii
    }

    #[inline]
    pub const fn radius(&self, corner: Corner) -> i32 {
        self.radii.get(corner)
    }

    /// # Errors
    /// Returns `BorderError::NegativeRadius`; the border is left unchanged.
    pub fn set_radius(&mut self, corner: Corner, value: i32) -> Result<(), BorderError> {
        self.radii.set(corner, value)
    }

    pub fn set_radii(&mut self, radii: CornerRadii) {
        self.radii = radii;
    }

    /// Copy every edge and radius from `other`.
    pub fn assign(&mut self, other: &Self) {
        *self = *other;
    }

    /// Broadcast one edge to all four sides and square the corners.
    pub fn assign_edge(&mut self, edge: BorderEdge) {
        *self = Self::uniform(edge);
    }

    /// Edge widths as an [`Edges`] box.
    pub fn widths(&self) -> Edges {
        // Every stored width already passed the non-negative check.
        Edges::new(
            self.left.width(),
            self.top.width(),
            self.right.width(),
            self.bottom.width(),
        )
        .unwrap_or_default()
    }

    /// All four edges share width and fill.
    pub fn is_uniform(&self) -> bool {
        self.left == self.top && self.top == self.right && self.right == self.bottom
    }

    /// Paint the border frame of `rect` and return the widths that were cut.
    ///
    /// Strips are painted with their own edge's fill. Each corner takes the
    /// fill of the edge cut just before it, so top-left follows the left edge,
    /// top-right the top, bottom-right the right and bottom-left the bottom.
    /// Absent regions paint nothing but still pass their fill along.
    pub fn geometry_for_rect(&self, rect: &Rect, buffer: &mut FaceBuffer) -> Edges {
        let widths = self.widths();
        if widths.is_zero() {
            return widths;
        }
        let regions = rect.cut(&widths);
        let fills = self.edges().map(|edge| edge.fill());
        let mut carried = PlainFill::Transparent;
        for (index, region) in regions.iter().enumerate() {
            if index % 2 == 0 {
                carried = fills[index / 2];
            }
            if let Some(area) = region {
                carried.geometry_for_rect(area, buffer);
            }
        }
        trace!(target: "style_border", "painted border {widths:?} around {rect:?}");
        widths
    }
}

impl From<BorderEdge> for Border {
    #[inline]
    fn from(edge: BorderEdge) -> Self {
        Self::uniform(edge)
    }
}

impl Tessellate for Border {
    fn geometry_for_rect(&self, rect: &Rect, buffer: &mut FaceBuffer) {
        Self::geometry_for_rect(self, rect, buffer);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use style_fill::Colour;

    fn colour_of(buffer: &FaceBuffer, vertex: usize) -> Option<[f32; 4]> {
        buffer
            .batch(None)
            .and_then(|batch| batch.colours().get(vertex).copied())
    }

    #[test]
    fn corners_inherit_the_preceding_edge() -> Result<(), Box<dyn std::error::Error>> {
        let red = Colour::rgb(1.0, 0.0, 0.0)?;
        let green = Colour::rgb(0.0, 1.0, 0.0)?;
        let blue = Colour::rgb(0.0, 0.0, 1.0)?;
        let white = Colour::WHITE;
        let border = Border::new(
            BorderEdge::new(2, red)?,
            BorderEdge::new(2, green)?,
            BorderEdge::new(2, blue)?,
            BorderEdge::new(2, white)?,
        );
        let mut buffer = FaceBuffer::new();
        let widths = border.geometry_for_rect(&Rect::new(0, 0, 10, 10)?, &mut buffer);
        assert_eq!(widths, Edges::uniform(2)?);
        assert_eq!(buffer.triangle_count(), 16);
        // quads come out in cut order, six vertices each
        let expected = [red, red, green, green, blue, blue, white, white];
        for (quad, colour) in expected.iter().enumerate() {
            assert_eq!(colour_of(&buffer, quad * 6), Some(colour.to_rgba()));
        }
        Ok(())
    }

    #[test]
    fn missing_edge_still_hands_its_fill_to_the_corner() -> Result<(), Box<dyn std::error::Error>> {
        let red = Colour::rgb(1.0, 0.0, 0.0)?;
        let border = Border::new(
            BorderEdge::NONE,
            BorderEdge::new(3, red)?,
            BorderEdge::NONE,
            BorderEdge::NONE,
        );
        let mut buffer = FaceBuffer::new();
        border.geometry_for_rect(&Rect::new(0, 0, 10, 10)?, &mut buffer);
        // only the top strip exists; corners need both neighbouring widths
        assert_eq!(buffer.triangle_count(), 2);
        Ok(())
    }

    #[test]
    fn transparent_edges_cut_but_paint_nothing() -> Result<(), Box<dyn std::error::Error>> {
        let border = Border::uniform(BorderEdge::new(4, PlainFill::Transparent)?);
        let mut buffer = FaceBuffer::new();
        let widths = border.geometry_for_rect(&Rect::new(0, 0, 20, 20)?, &mut buffer);
        assert_eq!(widths.left(), 4);
        assert!(buffer.is_empty());
        Ok(())
    }

    #[test]
    fn assign_edge_broadcasts_and_squares_corners() -> Result<(), BorderError> {
        let mut border = Border::default();
        border.set_radius(Corner::TopRight, 6)?;
        border.assign_edge(BorderEdge::new(1, Colour::BLACK)?);
        assert!(border.is_uniform());
        assert!(border.radii().is_zero());
        Ok(())
    }

    #[test]
    fn negative_radius_is_rejected() {
        let mut border = Border::default();
        assert_eq!(
            border.set_radius(Corner::BottomLeft, -1),
            Err(BorderError::NegativeRadius {
                corner: Corner::BottomLeft,
                value: -1
            })
        );
        assert_eq!(border.radius(Corner::BottomLeft), 0);
    }

    #[test]
    fn edges_reject_gradients() {
        let mut edge = BorderEdge::default();
        let gradient = style_fill::Fill::Gradient(style_fill::Gradient::default());
        assert!(matches!(edge.set_fill(gradient), Err(BorderError::Fill(_))));
        assert_eq!(edge.fill(), PlainFill::Transparent);
    }
}
