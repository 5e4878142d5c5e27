//! Solid RGBA colour.

use csscolorparser::Color as CssColor;
use style_face_buffer::{FaceBuffer, Rgba, rect_corners};
use style_geometry::Rect;

use crate::{FillError, Tessellate};

/// Straight-alpha colour. Red, green and blue are `>= 0`; alpha is in `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Colour {
    red: f32,
    green: f32,
    blue: f32,
    alpha: f32,
}

impl Colour {
    pub const BLACK: Self = Self::opaque(0.0, 0.0, 0.0);
    pub const WHITE: Self = Self::opaque(1.0, 1.0, 1.0);

    /// Fully opaque colour from known-good channel constants.
    const fn opaque(red: f32, green: f32, blue: f32) -> Self {
        Self {
            red,
            green,
            blue,
            alpha: 1.0,
        }
    }

    /// # Errors
    /// Returns `FillError::ChannelRange` for a negative or NaN colour channel,
    /// or an alpha outside `[0, 1]`. Nothing is clamped.
    pub fn new(red: f32, green: f32, blue: f32, alpha: f32) -> Result<Self, FillError> {
        Ok(Self {
            red: channel("red", red)?,
            green: channel("green", green)?,
            blue: channel("blue", blue)?,
            alpha: alpha_channel(alpha)?,
        })
    }

    /// # Errors
    /// Same as [`Colour::new`] with alpha fixed at 1.
    #[inline]
    pub fn rgb(red: f32, green: f32, blue: f32) -> Result<Self, FillError> {
        Self::new(red, green, blue, 1.0)
    }

    /// Parse a CSS colour literal: named colours, `#rgb`/`#rrggbb[aa]`,
    /// `rgb()`/`rgba()` and `hsl()`.
    ///
    /// # Errors
    /// Returns `FillError::UnknownColour` when the text is not a colour.
    pub fn parse(text: &str) -> Result<Self, FillError> {
        let parsed: CssColor = text
            .trim()
            .parse()
            .map_err(|_| FillError::UnknownColour(text.to_owned()))?;
        let [red, green, blue, alpha] = parsed.to_rgba8();
        Self::new(
            f32::from(red) / 255.0,
            f32::from(green) / 255.0,
            f32::from(blue) / 255.0,
            f32::from(alpha) / 255.0,
        )
    }

    #[inline]
    pub const fn red(&self) -> f32 {
        self.red
    }

    #[inline]
    pub const fn green(&self) -> f32 {
        self.green
    }

    #[inline]
    pub const fn blue(&self) -> f32 {
        self.blue
    }

    #[inline]
    pub const fn alpha(&self) -> f32 {
        self.alpha
    }

    #[inline]
    pub const fn to_rgba(&self) -> Rgba {
        [self.red, self.green, self.blue, self.alpha]
    }

    /// Linear blend towards `other`; `amount` is clamped to `[0, 1]`.
    pub fn mix(&self, other: &Self, amount: f32) -> Self {
        let weight = amount.clamp(0.0, 1.0);
        let lerp = |from: f32, to: f32| from + (to - from) * weight;
        Self {
            red: lerp(self.red, other.red),
            green: lerp(self.green, other.green),
            blue: lerp(self.blue, other.blue),
            alpha: lerp(self.alpha, other.alpha),
        }
    }
}

fn channel(name: &'static str, value: f32) -> Result<f32, FillError> {
    if value >= 0.0 && value.is_finite() {
        return Ok(value);
    }
    Err(FillError::ChannelRange {
        channel: name,
        value,
        range: ">= 0",
    })
}

fn alpha_channel(value: f32) -> Result<f32, FillError> {
    if (0.0..=1.0).contains(&value) {
        return Ok(value);
    }
    Err(FillError::ChannelRange {
        channel: "alpha",
        value,
        range: "[0, 1]",
    })
}

impl Tessellate for Colour {
    fn geometry_for_rect(&self, rect: &Rect, buffer: &mut FaceBuffer) {
        if rect.is_empty() {
            return;
        }
        let corners = rect_corners(
            rect.left() as f32,
            rect.top() as f32,
            rect.right() as f32,
            rect.bottom() as f32,
        );
        buffer.add_quad(corners, Some([self.to_rgba(); 4]), None);
    }
}
