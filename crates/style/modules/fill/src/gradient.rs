//! Two-direction linear gradients.

use style_face_buffer::{FaceBuffer, Rgba, rect_corners};
use style_geometry::Rect;

use crate::{Colour, FillError, Tessellate};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum GradientDirection {
    /// Steps run from the left edge (0) to the right edge (1).
    #[default]
    Horizontal,
    /// Steps run from the top edge (0) to the bottom edge (1).
    Vertical,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GradientStep {
    pub position: f32,
    pub colour: Colour,
}

/// Linear gradient whose steps are kept sorted by position. Steps that share
/// a position keep their insertion order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Gradient {
    direction: GradientDirection,
    steps: Vec<GradientStep>,
}

impl Gradient {
    /// # Errors
    /// Returns `FillError::StepPosition` if any position is outside `[0, 1]`.
    pub fn new<I>(direction: GradientDirection, steps: I) -> Result<Self, FillError>
    where
        I: IntoIterator<Item = (f32, Colour)>,
    {
        let mut gradient = Self {
            direction,
            steps: Vec::new(),
        };
        for (position, colour) in steps {
            gradient.add_step(position, colour)?;
        }
        Ok(gradient)
    }

    /// Insert a step after every existing step at the same or a lower position.
    ///
    /// # Errors
    /// Returns `FillError::StepPosition` if `position` is outside `[0, 1]`.
    pub fn add_step(&mut self, position: f32, colour: Colour) -> Result<(), FillError> {
        if !(0.0..=1.0).contains(&position) {
            return Err(FillError::StepPosition(position));
        }
        let index = self.steps.partition_point(|step| step.position <= position);
        self.steps.insert(index, GradientStep { position, colour });
        Ok(())
    }

    #[inline]
    pub const fn direction(&self) -> GradientDirection {
        self.direction
    }

    #[inline]
    pub fn steps(&self) -> &[GradientStep] {
        &self.steps
    }

    /// Colour at `offset` along the gradient axis, for renderers that
    /// evaluate gradients per pixel. `None` when there are no steps or
    /// `offset` is NaN.
    pub fn colour_at(&self, offset: f32) -> Option<Colour> {
        if offset.is_nan() {
            return None;
        }
        let first = self.steps.first()?;
        let last = self.steps.last()?;
        if offset <= first.position {
            return Some(first.colour);
        }
        if offset >= last.position {
            return Some(last.colour);
        }
        let next_index = self.steps.partition_point(|step| step.position <= offset);
        let (before, after) = (
            self.steps.get(next_index.checked_sub(1)?)?,
            self.steps.get(next_index)?,
        );
        let span = after.position - before.position;
        if span <= 0.0 {
            return Some(after.colour);
        }
        Some(before.colour.mix(&after.colour, (offset - before.position) / span))
    }

    /// Stops covering the whole `[0, 1]` axis: the first and last colours are
    /// extended to the edges.
    fn padded_stops(&self) -> Vec<(f32, Rgba)> {
        let mut stops = Vec::with_capacity(self.steps.len() + 2);
        if let Some(first) = self.steps.first()
            && first.position > 0.0
        {
            stops.push((0.0, first.colour.to_rgba()));
        }
        stops.extend(
            self.steps
                .iter()
                .map(|step| (step.position, step.colour.to_rgba())),
        );
        if let Some(last) = self.steps.last()
            && last.position < 1.0
        {
            stops.push((1.0, last.colour.to_rgba()));
        }
        stops
    }
}

impl Tessellate for Gradient {
    /// One quad per band between consecutive stops, coloured per vertex so
    /// the rasteriser interpolates the band.
    fn geometry_for_rect(&self, rect: &Rect, buffer: &mut FaceBuffer) {
        if rect.is_empty() {
            return;
        }
        let (left, top) = (rect.left() as f32, rect.top() as f32);
        let (width, height) = (rect.width() as f32, rect.height() as f32);
        for band in self.padded_stops().windows(2) {
            let [(start, from), (end, to)] = [band[0], band[1]];
            if end <= start {
                continue;
            }
            match self.direction {
                GradientDirection::Horizontal => {
                    let corners = rect_corners(
                        left + start * width,
                        top,
                        left + end * width,
                        top + height,
                    );
                    buffer.add_quad(corners, Some([from, from, to, to]), None);
                }
                GradientDirection::Vertical => {
                    let corners = rect_corners(
                        left,
                        top + start * height,
                        left + width,
                        top + end * height,
                    );
                    buffer.add_quad(corners, Some([from, to, to, from]), None);
                }
            }
        }
    }
}
