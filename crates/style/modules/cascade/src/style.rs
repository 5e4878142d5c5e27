//! The computed style of one widget.

use style_border::{Border, BorderOutline};
use style_face_buffer::FaceBuffer;
use style_fill::{Colour, Fill, FillError, RepeatMode, Tessellate};
use style_geometry::{Edges, Rect};

use crate::declaration::{check_flex, check_size, check_spacing};
use crate::{CascadeError, Declaration, Property, PropertyValue, Rule, Side};

/// Result of folding rules into defaults. Equality is structural.
#[derive(Clone, Debug, PartialEq)]
pub struct Style {
    background: Fill,
    /// Kept apart from the fill so the repeat survives a later image.
    background_repeat: (RepeatMode, RepeatMode),
    padding: Edges,
    margin: Edges,
    border: Border,
    box_spacing_x: i32,
    box_spacing_y: i32,
    flex: i32,
    text_colour: Colour,
    width: Option<f32>,
    height: Option<f32>,
    shear: (f32, f32),
}

impl Default for Style {
    fn default() -> Self {
        Self {
            background: Fill::Transparent,
            background_repeat: (RepeatMode::Stretch, RepeatMode::Stretch),
            padding: Edges::ZERO,
            margin: Edges::ZERO,
            border: Border::default(),
            box_spacing_x: 0,
            box_spacing_y: 0,
            flex: 1,
            text_colour: Colour::BLACK,
            width: None,
            height: None,
            shear: (0.0, 0.0),
        }
    }
}

fn set_side(edges: &mut Edges, side: Side, value: i32) -> Result<(), CascadeError> {
    match side {
        Side::Left => edges.set_left(value)?,
        Side::Top => edges.set_top(value)?,
        Side::Right => edges.set_right(value)?,
        Side::Bottom => edges.set_bottom(value)?,
    }
    Ok(())
}

impl Style {
    /// Defaults plus whatever the parent passes down. Only the text colour
    /// inherits.
    pub fn inherited_from(parent: &Self) -> Self {
        Self {
            text_colour: parent.text_colour,
            ..Self::default()
        }
    }

    /// Apply `rules` in order on top of `self`, then check the resolved
    /// background against its repeat mode.
    ///
    /// # Errors
    /// Stops at the first declaration that cannot be applied. Fails with
    /// `FillError::GradientRepeat` when the final background is a gradient
    /// and the final repeat mode tiles either axis.
    pub fn cascade<'rule, I>(mut self, rules: I) -> Result<Self, CascadeError>
    where
        I: IntoIterator<Item = &'rule Rule>,
    {
        for rule in rules {
            self.apply_rule(rule)?;
        }
        self.check_background()?;
        Ok(self)
    }

    /// # Errors
    /// Returns `FillError::GradientRepeat` for a gradient asked to tile.
    pub fn check_background(&self) -> Result<(), CascadeError> {
        let (horizontal, vertical) = self.background_repeat;
        let tiles = horizontal == RepeatMode::Repeat || vertical == RepeatMode::Repeat;
        if tiles && matches!(self.background, Fill::Gradient(_)) {
            return Err(FillError::GradientRepeat.into());
        }
        Ok(())
    }

    fn sync_image_repeat(&mut self) {
        if let Fill::Image(image) = &mut self.background {
            image.set_repeat_x(self.background_repeat.0);
            image.set_repeat_y(self.background_repeat.1);
        }
    }

    /// # Errors
    /// See [`Style::apply`].
    pub fn apply_rule(&mut self, rule: &Rule) -> Result<(), CascadeError> {
        rule.declarations()
            .iter()
            .try_for_each(|declaration| self.apply(declaration))
    }

    /// Overwrite the single property named by `declaration`, leaving sibling
    /// properties (other sides, other corners) untouched.
    ///
    /// The repeat mode is its own property: an image background picks it up
    /// whichever of the two was declared last.
    ///
    /// # Errors
    /// Returns `CascadeError` when a value is out of range for its slot.
    pub fn apply(&mut self, declaration: &Declaration) -> Result<(), CascadeError> {
        match declaration.value() {
            PropertyValue::Background(fill) => {
                self.background = fill.clone();
                self.sync_image_repeat();
            }
            PropertyValue::BackgroundRepeat(horizontal, vertical) => {
                self.background_repeat = (*horizontal, *vertical);
                self.sync_image_repeat();
            }
            PropertyValue::Border(edge) => self.border.assign_edge(*edge),
            PropertyValue::BorderSide(side, edge) => {
                let slot = match side {
                    Side::Left => self.border.left_mut(),
                    Side::Top => self.border.top_mut(),
                    Side::Right => self.border.right_mut(),
                    Side::Bottom => self.border.bottom_mut(),
                };
                *slot = *edge;
            }
            PropertyValue::BorderRadius(radii) => self.border.set_radii(*radii),
            PropertyValue::CornerRadius(corner, radius) => {
                self.border.set_radius(*corner, *radius)?;
            }
            PropertyValue::Padding(edges) => self.padding = *edges,
            PropertyValue::PaddingSide(side, value) => set_side(&mut self.padding, *side, *value)?,
            PropertyValue::Margin(edges) => self.margin = *edges,
            PropertyValue::MarginSide(side, value) => set_side(&mut self.margin, *side, *value)?,
            PropertyValue::TextColour(colour) => self.text_colour = *colour,
            PropertyValue::Width(width) => self.set_width(*width)?,
            PropertyValue::Height(height) => self.set_height(*height)?,
            PropertyValue::Flex(flex) => self.set_flex(*flex)?,
            PropertyValue::BoxSpacing(horizontal, vertical) => {
                self.set_box_spacing_x(*horizontal)?;
                self.set_box_spacing_y(*vertical)?;
            }
            PropertyValue::BoxSpacingX(spacing) => self.set_box_spacing_x(*spacing)?,
            PropertyValue::BoxSpacingY(spacing) => self.set_box_spacing_y(*spacing)?,
            PropertyValue::Shear(left, right) => self.shear = (*left, *right),
            PropertyValue::ShearLeft(left) => self.shear.0 = *left,
            PropertyValue::ShearRight(right) => self.shear.1 = *right,
        }
        Ok(())
    }

    /// Paint border then background into `buffer` and return the content
    /// rectangle inside border and padding.
    ///
    /// The background covers the area inside the border. Returns `None` once
    /// the border or padding leave no room.
    pub fn geometry_for_rect(&self, rect: &Rect, buffer: &mut FaceBuffer) -> Option<Rect> {
        let widths = self.border.geometry_for_rect(rect, buffer);
        let inside_border = rect.shrunk(&widths)?;
        self.background.geometry_for_rect(&inside_border, buffer);
        inside_border.shrunk(&self.padding)
    }

    /// Vector outline of the border for canvas backends. A uniform border
    /// over an opaque colour background comes back as one closed path that
    /// carries the background as its fill, so it paints in one fill and one
    /// stroke. Other combinations leave the background to
    /// [`Style::geometry_for_rect`].
    pub fn outline(&self, rect: &Rect) -> BorderOutline {
        let outline = self.border.outline(rect);
        match self.background {
            Fill::Colour(colour) if colour.alpha() >= 1.0 => outline.filled(colour),
            Fill::Transparent | Fill::Colour(_) | Fill::Gradient(_) | Fill::Image(_) => outline,
        }
    }

    #[inline]
    pub const fn background(&self) -> &Fill {
        &self.background
    }

    #[inline]
    pub const fn background_repeat(&self) -> (RepeatMode, RepeatMode) {
        self.background_repeat
    }

    #[inline]
    pub const fn padding(&self) -> Edges {
        self.padding
    }

    #[inline]
    pub const fn margin(&self) -> Edges {
        self.margin
    }

    #[inline]
    pub const fn border(&self) -> &Border {
        &self.border
    }

    #[inline]
    pub const fn box_spacing_x(&self) -> i32 {
        self.box_spacing_x
    }

    #[inline]
    pub const fn box_spacing_y(&self) -> i32 {
        self.box_spacing_y
    }

    #[inline]
    pub const fn flex(&self) -> i32 {
        self.flex
    }

    #[inline]
    pub const fn text_colour(&self) -> Colour {
        self.text_colour
    }

    #[inline]
    pub const fn width(&self) -> Option<f32> {
        self.width
    }

    #[inline]
    pub const fn height(&self) -> Option<f32> {
        self.height
    }

    #[inline]
    pub const fn shear(&self) -> (f32, f32) {
        self.shear
    }

    pub fn set_background(&mut self, background: impl Into<Fill>) {
        self.background = background.into();
        self.sync_image_repeat();
    }

    pub fn set_background_repeat(&mut self, horizontal: RepeatMode, vertical: RepeatMode) {
        self.background_repeat = (horizontal, vertical);
        self.sync_image_repeat();
    }

    pub fn set_padding(&mut self, padding: Edges) {
        self.padding = padding;
    }

    pub fn set_margin(&mut self, margin: Edges) {
        self.margin = margin;
    }

    pub fn set_border(&mut self, border: &Border) {
        self.border.assign(border);
    }

    pub fn set_text_colour(&mut self, colour: Colour) {
        self.text_colour = colour;
    }

    pub fn set_shear(&mut self, left: f32, right: f32) {
        self.shear = (left, right);
    }

    /// # Errors
    /// Returns `CascadeError::OutOfRange` below 1.
    pub fn set_flex(&mut self, flex: i32) -> Result<(), CascadeError> {
        check_flex(flex)?;
        self.flex = flex;
        Ok(())
    }

    /// # Errors
    /// Returns `CascadeError::OutOfRange` when negative.
    pub fn set_box_spacing_x(&mut self, spacing: i32) -> Result<(), CascadeError> {
        check_spacing(Property::BoxSpacingX, spacing)?;
        self.box_spacing_x = spacing;
        Ok(())
    }

    /// # Errors
    /// Returns `CascadeError::OutOfRange` when negative.
    pub fn set_box_spacing_y(&mut self, spacing: i32) -> Result<(), CascadeError> {
        check_spacing(Property::BoxSpacingY, spacing)?;
        self.box_spacing_y = spacing;
        Ok(())
    }

    /// `None` leaves the width to layout.
    ///
    /// # Errors
    /// Returns `CascadeError::OutOfRange` unless positive and finite.
    pub fn set_width(&mut self, width: Option<f32>) -> Result<(), CascadeError> {
        check_size(Property::Width, width)?;
        self.width = width;
        Ok(())
    }

    /// # Errors
    /// Returns `CascadeError::OutOfRange` unless positive and finite.
    pub fn set_height(&mut self, height: Option<f32>) -> Result<(), CascadeError> {
        check_size(Property::Height, height)?;
        self.height = height;
        Ok(())
    }
}
