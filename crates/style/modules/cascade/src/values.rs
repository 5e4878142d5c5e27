//! Value grammar helpers over `cssparser` tokens.

use cssparser::{ParseError, Parser, SourceLocation, Token};
use log::warn;
use style_border::{BorderEdge, BorderError, CornerRadii};
use style_fill::{
    Colour, Fill, FillError, Gradient, GradientDirection, ImageFill, PlainFill, RepeatMode,
    ResourceProvider,
};
use style_geometry::{Edges, GeometryError};

/// Failures raised while parsing a single value.
#[derive(Clone, Debug, PartialEq)]
pub(crate) enum ValueError {
    Invalid(&'static str),
    Fill(FillError),
    Geometry(GeometryError),
    Border(BorderError),
}

impl From<FillError> for ValueError {
    fn from(error: FillError) -> Self {
        Self::Fill(error)
    }
}

impl From<GeometryError> for ValueError {
    fn from(error: GeometryError) -> Self {
        Self::Geometry(error)
    }
}

impl From<BorderError> for ValueError {
    fn from(error: BorderError) -> Self {
        Self::Border(error)
    }
}

pub(crate) type ValueResult<'i, T> = Result<T, ParseError<'i, ValueError>>;

fn invalid<'i>(input: &Parser<'i, '_>, reason: &'static str) -> ParseError<'i, ValueError> {
    input.new_custom_error(ValueError::Invalid(reason))
}

fn custom<'i>(
    location: SourceLocation,
    error: impl Into<ValueError>,
) -> ParseError<'i, ValueError> {
    location.new_custom_error(error.into())
}

/// Consume `name` if it is the next identifier.
pub(crate) fn keyword(input: &mut Parser<'_, '_>, name: &str) -> bool {
    input
        .try_parse(|input| input.expect_ident_matching(name))
        .is_ok()
}

/// A number, optionally with a `px` unit.
pub(crate) fn number<'i>(input: &mut Parser<'i, '_>) -> ValueResult<'i, f32> {
    let location = input.current_source_location();
    match *input.next()? {
        Token::Number { value, .. } => Ok(value),
        Token::Dimension {
            value, ref unit, ..
        } if unit.eq_ignore_ascii_case("px") => Ok(value),
        ref token => Err(location.new_unexpected_token_error(token.clone())),
    }
}

/// An integer, optionally with a `px` unit.
pub(crate) fn integer<'i>(input: &mut Parser<'i, '_>) -> ValueResult<'i, i32> {
    let location = input.current_source_location();
    match *input.next()? {
        Token::Number {
            int_value: Some(value),
            ..
        } => Ok(value),
        Token::Dimension {
            int_value: Some(value),
            ref unit,
            ..
        } if unit.eq_ignore_ascii_case("px") => Ok(value),
        ref token => Err(location.new_unexpected_token_error(token.clone())),
    }
}

/// An integer that must be `>= 0`.
pub(crate) fn length<'i>(input: &mut Parser<'i, '_>) -> ValueResult<'i, i32> {
    let value = integer(input)?;
    if value < 0 {
        return Err(invalid(input, "must be non-negative"));
    }
    Ok(value)
}

/// One to four lengths gathered into a list.
fn lengths<'i>(input: &mut Parser<'i, '_>) -> ValueResult<'i, Vec<i32>> {
    let mut values = vec![integer(input)?];
    while !input.is_exhausted() {
        values.push(integer(input)?);
    }
    Ok(values)
}

/// `padding` / `margin`: one value for all sides or four in box order.
pub(crate) fn edges<'i>(input: &mut Parser<'i, '_>) -> ValueResult<'i, Edges> {
    let location = input.current_source_location();
    let values = lengths(input)?;
    Edges::from_values(&values).map_err(|error| custom(location, error))
}

/// `border-radius`: one value or four in top-left, top-right, bottom-right,
/// bottom-left order.
pub(crate) fn radii<'i>(input: &mut Parser<'i, '_>) -> ValueResult<'i, CornerRadii> {
    let location = input.current_source_location();
    let values = lengths(input)?;
    let mut radii = CornerRadii::ZERO;
    match *values.as_slice() {
        [all] => {
            radii = CornerRadii::uniform(all).map_err(|error| custom(location, error))?;
        }
        [top_left, top_right, bottom_right, bottom_left] => {
            for (corner, value) in style_border::Corner::ALL
                .into_iter()
                .zip([top_left, top_right, bottom_right, bottom_left])
            {
                radii
                    .set(corner, value)
                    .map_err(|error| custom(location, error))?;
            }
        }
        _ => return Err(invalid(input, "expected 1 or 4 radii")),
    }
    Ok(radii)
}

/// Any colour `csscolorparser` understands: names, hex, `rgb()`, `hsl()`...
pub(crate) fn colour<'i>(input: &mut Parser<'i, '_>) -> ValueResult<'i, Colour> {
    let location = input.current_source_location();
    let start = input.position();
    let is_function = matches!(input.next()?, Token::Function(_));
    if is_function {
        input.parse_nested_block(|block| {
            while block.next().is_ok() {}
            Ok::<_, ParseError<'i, ValueError>>(())
        })?;
    }
    Colour::parse(input.slice_from(start).trim()).map_err(|error| custom(location, error))
}

/// `none`, `transparent`, a colour, `url(path)` or `linear-gradient(...)`.
pub(crate) fn fill<'i>(
    input: &mut Parser<'i, '_>,
    resources: &mut dyn ResourceProvider,
) -> ValueResult<'i, Fill> {
    if keyword(input, "none") || keyword(input, "transparent") {
        return Ok(Fill::Transparent);
    }
    if input
        .try_parse(|input| input.expect_function_matching("linear-gradient"))
        .is_ok()
    {
        return input.parse_nested_block(gradient).map(Fill::from);
    }
    let location = input.current_source_location();
    if let Ok(path) = input.try_parse(url) {
        return load_image(location, &path, resources);
    }
    colour(input).map(Fill::from)
}

fn url<'i>(input: &mut Parser<'i, '_>) -> ValueResult<'i, String> {
    Ok(input.expect_url()?.as_ref().to_owned())
}

/// `none` or `url(path)`.
pub(crate) fn image<'i>(
    input: &mut Parser<'i, '_>,
    resources: &mut dyn ResourceProvider,
) -> ValueResult<'i, Fill> {
    if keyword(input, "none") {
        return Ok(Fill::Transparent);
    }
    let location = input.current_source_location();
    let path = url(input)?;
    load_image(location, &path, resources)
}

fn load_image<'i>(
    location: SourceLocation,
    path: &str,
    resources: &mut dyn ResourceProvider,
) -> ValueResult<'i, Fill> {
    match ImageFill::load(resources, path, None) {
        Ok(image) => Ok(Fill::Image(image)),
        Err(FillError::Resource { reason, .. }) if resources.missing_is_transparent() => {
            warn!(
                target: "style_cascade",
                "image `{path}` unavailable ({reason}); painting nothing"
            );
            Ok(Fill::Transparent)
        }
        Err(error) => Err(custom(location, error)),
    }
}

/// `[to right | to bottom ,] stop [, stop]*` where a stop is a colour with an
/// optional percentage or fraction. Stops without a position are spread
/// evenly over `[0, 1]`.
fn gradient<'i>(input: &mut Parser<'i, '_>) -> ValueResult<'i, Gradient> {
    let location = input.current_source_location();
    let mut direction = GradientDirection::Horizontal;
    if keyword(input, "to") {
        direction = if keyword(input, "right") {
            GradientDirection::Horizontal
        } else if keyword(input, "bottom") {
            GradientDirection::Vertical
        } else {
            return Err(invalid(input, "expected `right` or `bottom`"));
        };
        input.expect_comma()?;
    }
    let stops = input.parse_comma_separated(|input| {
        let stop_colour = colour(input)?;
        let position = input.try_parse(stop_position).ok();
        Ok::<_, ParseError<'i, ValueError>>((stop_colour, position))
    })?;
    let last = stops.len().saturating_sub(1).max(1) as f32;
    let steps = stops.into_iter().enumerate().map(|(index, (stop_colour, position))| {
        (position.unwrap_or(index as f32 / last), stop_colour)
    });
    Gradient::new(direction, steps).map_err(|error| custom(location, error))
}

fn stop_position<'i>(input: &mut Parser<'i, '_>) -> ValueResult<'i, f32> {
    let location = input.current_source_location();
    match *input.next()? {
        Token::Percentage { unit_value, .. } => Ok(unit_value),
        Token::Number { value, .. } => Ok(value),
        ref token => Err(location.new_unexpected_token_error(token.clone())),
    }
}

fn repeat_keyword<'i>(input: &mut Parser<'i, '_>) -> ValueResult<'i, RepeatMode> {
    if keyword(input, "repeat") {
        Ok(RepeatMode::Repeat)
    } else if keyword(input, "stretch") || keyword(input, "no-repeat") {
        Ok(RepeatMode::Stretch)
    } else {
        Err(invalid(input, "expected `repeat`, `stretch` or `no-repeat`"))
    }
}

/// `repeat-x`, `repeat-y`, or one or two of `repeat` / `stretch` / `no-repeat`.
pub(crate) fn repeat<'i>(input: &mut Parser<'i, '_>) -> ValueResult<'i, (RepeatMode, RepeatMode)> {
    if keyword(input, "repeat-x") {
        return Ok((RepeatMode::Repeat, RepeatMode::Stretch));
    }
    if keyword(input, "repeat-y") {
        return Ok((RepeatMode::Stretch, RepeatMode::Repeat));
    }
    let horizontal = repeat_keyword(input)?;
    if input.is_exhausted() {
        return Ok((horizontal, horizontal));
    }
    Ok((horizontal, repeat_keyword(input)?))
}

/// `none`, or a width followed or preceded by an optional colour (black when omitted).
pub(crate) fn border_edge<'i>(input: &mut Parser<'i, '_>) -> ValueResult<'i, BorderEdge> {
    if keyword(input, "none") {
        return Ok(BorderEdge::NONE);
    }
    let location = input.current_source_location();
    let mut width = None;
    let mut paint = None;
    while !input.is_exhausted() {
        if width.is_none()
            && let Ok(value) = input.try_parse(integer)
        {
            width = Some(value);
            continue;
        }
        if paint.is_some() {
            return Err(invalid(input, "unexpected border component"));
        }
        paint = Some(if keyword(input, "transparent") {
            PlainFill::Transparent
        } else {
            PlainFill::Colour(colour(input)?)
        });
    }
    let Some(width) = width else {
        return Err(invalid(input, "border needs a width"));
    };
    BorderEdge::new(width, paint.unwrap_or(PlainFill::Colour(Colour::BLACK)))
        .map_err(|error| custom(location, error))
}

/// `auto` / `none` for unconstrained, otherwise a number.
pub(crate) fn optional_size<'i>(input: &mut Parser<'i, '_>) -> ValueResult<'i, Option<f32>> {
    if keyword(input, "auto") || keyword(input, "none") {
        return Ok(None);
    }
    number(input).map(Some)
}

/// One number for both halves or two in order.
pub(crate) fn number_pair<'i>(input: &mut Parser<'i, '_>) -> ValueResult<'i, (f32, f32)> {
    let first = number(input)?;
    if input.is_exhausted() {
        return Ok((first, first));
    }
    Ok((first, number(input)?))
}

/// One length for both axes or two in x, y order.
pub(crate) fn length_pair<'i>(input: &mut Parser<'i, '_>) -> ValueResult<'i, (i32, i32)> {
    let first = length(input)?;
    if input.is_exhausted() {
        return Ok((first, first));
    }
    Ok((first, length(input)?))
}
