//! Parsed `(property, value)` pairs.

use cssparser::{ParseErrorKind, Parser, ParserInput};
use log::trace;
use style_border::{BorderEdge, Corner, CornerRadii};
use style_fill::{Colour, Fill, RepeatMode, ResourceProvider};
use style_geometry::Edges;

use crate::values::{self, ValueError, ValueResult};
use crate::{CascadeError, Property, Side};

/// A resolved property value, one variant per kind of assignment.
#[derive(Clone, Debug, PartialEq)]
pub enum PropertyValue {
    Background(Fill),
    BackgroundRepeat(RepeatMode, RepeatMode),
    /// Broadcast to every side; squares the corners.
    Border(BorderEdge),
    BorderSide(Side, BorderEdge),
    BorderRadius(CornerRadii),
    CornerRadius(Corner, i32),
    Padding(Edges),
    PaddingSide(Side, i32),
    Margin(Edges),
    MarginSide(Side, i32),
    TextColour(Colour),
    Width(Option<f32>),
    Height(Option<f32>),
    Flex(i32),
    BoxSpacing(i32, i32),
    BoxSpacingX(i32),
    BoxSpacingY(i32),
    Shear(f32, f32),
    ShearLeft(f32),
    ShearRight(f32),
}

#[derive(Clone, Debug, PartialEq)]
pub struct Declaration {
    property: Property,
    value: PropertyValue,
}

impl Declaration {
    /// Parse `text` as a value of `property`. Image URLs are resolved
    /// through `resources` immediately.
    ///
    /// # Errors
    /// Returns `CascadeError::InvalidValue` for malformed text, a range error
    /// for values outside the property's domain, or the resource error of an
    /// image that cannot be loaded.
    pub fn parse(
        property: Property,
        text: &str,
        resources: &mut dyn ResourceProvider,
    ) -> Result<Self, CascadeError> {
        let mut input = ParserInput::new(text);
        let mut parser = Parser::new(&mut input);
        let value = parser
            .parse_entirely(|input| parse_value(property, input, resources))
            .map_err(|error| match error.kind {
                ParseErrorKind::Custom(ValueError::Fill(inner)) => CascadeError::Fill(inner),
                ParseErrorKind::Custom(ValueError::Geometry(inner)) => {
                    CascadeError::Geometry(inner)
                }
                ParseErrorKind::Custom(ValueError::Border(inner)) => CascadeError::Border(inner),
                ParseErrorKind::Custom(ValueError::Invalid(reason)) => CascadeError::InvalidValue {
                    property: property.name(),
                    value: text.to_owned(),
                    reason: reason.to_owned(),
                },
                ParseErrorKind::Basic(kind) => CascadeError::InvalidValue {
                    property: property.name(),
                    value: text.to_owned(),
                    reason: format!("{kind:?}"),
                },
            })?;
        let declaration = Self::new(property, value)?;
        trace!(target: "style_cascade", "{property}: {text} -> {:?}", declaration.value);
        Ok(declaration)
    }

    /// Look the property up by name, then parse `text` for it.
    ///
    /// # Errors
    /// Returns `CascadeError::UnknownProperty` for names outside the table,
    /// otherwise as [`Declaration::parse`].
    pub fn from_pair(
        name: &str,
        text: &str,
        resources: &mut dyn ResourceProvider,
    ) -> Result<Self, CascadeError> {
        Self::parse(Property::from_name(name)?, text, resources)
    }

    /// Pair an already-built value with its property after range checks.
    ///
    /// # Errors
    /// Returns `CascadeError::OutOfRange` for flex below 1, negative box
    /// spacing, or non-positive widths and heights.
    pub fn new(property: Property, value: PropertyValue) -> Result<Self, CascadeError> {
        match value {
            PropertyValue::Flex(flex) => check_flex(flex)?,
            PropertyValue::BoxSpacing(horizontal, vertical) => {
                check_spacing(property, horizontal)?;
                check_spacing(property, vertical)?;
            }
            PropertyValue::BoxSpacingX(spacing) | PropertyValue::BoxSpacingY(spacing) => {
                check_spacing(property, spacing)?;
            }
            PropertyValue::Width(size) | PropertyValue::Height(size) => {
                check_size(property, size)?;
            }
            _ => {}
        }
        Ok(Self { property, value })
    }

    #[inline]
    pub const fn property(&self) -> Property {
        self.property
    }

    #[inline]
    pub const fn value(&self) -> &PropertyValue {
        &self.value
    }
}

pub(crate) fn check_flex(flex: i32) -> Result<(), CascadeError> {
    if flex < 1 {
        return Err(CascadeError::OutOfRange {
            property: Property::Flex.name(),
            requirement: ">= 1",
            value: flex as f32,
        });
    }
    Ok(())
}

pub(crate) fn check_spacing(property: Property, spacing: i32) -> Result<(), CascadeError> {
    if spacing < 0 {
        return Err(CascadeError::OutOfRange {
            property: property.name(),
            requirement: ">= 0",
            value: spacing as f32,
        });
    }
    Ok(())
}

pub(crate) fn check_size(property: Property, size: Option<f32>) -> Result<(), CascadeError> {
    match size {
        Some(value) if !(value > 0.0 && value.is_finite()) => Err(CascadeError::OutOfRange {
            property: property.name(),
            requirement: "positive",
            value,
        }),
        _ => Ok(()),
    }
}

fn parse_value<'i>(
    property: Property,
    input: &mut Parser<'i, '_>,
    resources: &mut dyn ResourceProvider,
) -> ValueResult<'i, PropertyValue> {
    Ok(match property {
        Property::Background => PropertyValue::Background(values::fill(input, resources)?),
        Property::BackgroundImage => PropertyValue::Background(values::image(input, resources)?),
        Property::BackgroundColor => PropertyValue::Background(
            if values::keyword(input, "transparent") {
                Fill::Transparent
            } else {
                Fill::Colour(values::colour(input)?)
            },
        ),
        Property::BackgroundRepeat => {
            let (horizontal, vertical) = values::repeat(input)?;
            PropertyValue::BackgroundRepeat(horizontal, vertical)
        }
        Property::Border => PropertyValue::Border(values::border_edge(input)?),
        Property::BorderLeft
        | Property::BorderTop
        | Property::BorderRight
        | Property::BorderBottom => {
            let side = property.side().unwrap_or(Side::Left);
            PropertyValue::BorderSide(side, values::border_edge(input)?)
        }
        Property::BorderRadius => PropertyValue::BorderRadius(values::radii(input)?),
        Property::BorderTopLeftRadius
        | Property::BorderTopRightRadius
        | Property::BorderBottomRightRadius
        | Property::BorderBottomLeftRadius => {
            let corner = property.corner().unwrap_or(Corner::TopLeft);
            PropertyValue::CornerRadius(corner, values::length(input)?)
        }
        Property::Padding => PropertyValue::Padding(values::edges(input)?),
        Property::PaddingLeft
        | Property::PaddingTop
        | Property::PaddingRight
        | Property::PaddingBottom => {
            let side = property.side().unwrap_or(Side::Left);
            PropertyValue::PaddingSide(side, values::length(input)?)
        }
        Property::Margin => PropertyValue::Margin(values::edges(input)?),
        Property::MarginLeft
        | Property::MarginTop
        | Property::MarginRight
        | Property::MarginBottom => {
            let side = property.side().unwrap_or(Side::Left);
            PropertyValue::MarginSide(side, values::length(input)?)
        }
        Property::Color => PropertyValue::TextColour(values::colour(input)?),
        Property::Width => PropertyValue::Width(values::optional_size(input)?),
        Property::Height => PropertyValue::Height(values::optional_size(input)?),
        Property::Flex => PropertyValue::Flex(values::integer(input)?),
        Property::BoxSpacing => {
            let (horizontal, vertical) = values::length_pair(input)?;
            PropertyValue::BoxSpacing(horizontal, vertical)
        }
        Property::BoxSpacingX => PropertyValue::BoxSpacingX(values::integer(input)?),
        Property::BoxSpacingY => PropertyValue::BoxSpacingY(values::integer(input)?),
        Property::Shear => {
            let (left, right) = values::number_pair(input)?;
            PropertyValue::Shear(left, right)
        }
        Property::ShearLeft => PropertyValue::ShearLeft(values::number(input)?),
        Property::ShearRight => PropertyValue::ShearRight(values::number(input)?),
    })
}
