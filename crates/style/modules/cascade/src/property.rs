//! The closed table of stylesheet property names.

use core::fmt;
use core::str::FromStr;

use style_border::Corner;

use crate::CascadeError;

/// One side of a box.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Top,
    Right,
    Bottom,
}

/// Generates the property enum together with its name table.
macro_rules! properties {
    ($($variant:ident => $name:literal,)+) => {
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
        pub enum Property {
            $($variant,)+
        }

        impl Property {
            pub const ALL: &'static [Self] = &[$(Self::$variant,)+];

            /// Stylesheet name of the property.
            pub const fn name(self) -> &'static str {
                match self {
                    $(Self::$variant => $name,)+
                }
            }

            /// # Errors
            /// Returns `CascadeError::UnknownProperty` for names outside the table.
            pub fn from_name(name: &str) -> Result<Self, CascadeError> {
                match name {
                    $($name => Ok(Self::$variant),)+
                    _ => Err(CascadeError::UnknownProperty(name.to_owned())),
                }
            }
        }
    };
}

properties! {
    Background => "background",
    BackgroundImage => "background-image",
    BackgroundRepeat => "background-repeat",
    BackgroundColor => "background-color",
    Border => "border",
    BorderLeft => "border-left",
    BorderTop => "border-top",
    BorderRight => "border-right",
    BorderBottom => "border-bottom",
    BorderRadius => "border-radius",
    BorderTopLeftRadius => "border-top-left-radius",
    BorderTopRightRadius => "border-top-right-radius",
    BorderBottomRightRadius => "border-bottom-right-radius",
    BorderBottomLeftRadius => "border-bottom-left-radius",
    Padding => "padding",
    PaddingLeft => "padding-left",
    PaddingTop => "padding-top",
    PaddingRight => "padding-right",
    PaddingBottom => "padding-bottom",
    Margin => "margin",
    MarginLeft => "margin-left",
    MarginTop => "margin-top",
    MarginRight => "margin-right",
    MarginBottom => "margin-bottom",
    Color => "color",
    Width => "width",
    Height => "height",
    Flex => "flex",
    BoxSpacing => "box-spacing",
    BoxSpacingX => "box-spacing-x",
    BoxSpacingY => "box-spacing-y",
    Shear => "shear",
    ShearLeft => "shear-left",
    ShearRight => "shear-right",
}

impl Property {
    /// Side addressed by a per-side border, padding or margin property.
    pub const fn side(self) -> Option<Side> {
        match self {
            Self::BorderLeft | Self::PaddingLeft | Self::MarginLeft => Some(Side::Left),
            Self::BorderTop | Self::PaddingTop | Self::MarginTop => Some(Side::Top),
            Self::BorderRight | Self::PaddingRight | Self::MarginRight => Some(Side::Right),
            Self::BorderBottom | Self::PaddingBottom | Self::MarginBottom => Some(Side::Bottom),
            _ => None,
        }
    }

    /// Corner addressed by a per-corner radius property.
    pub const fn corner(self) -> Option<Corner> {
        match self {
            Self::BorderTopLeftRadius => Some(Corner::TopLeft),
            Self::BorderTopRightRadius => Some(Corner::TopRight),
            Self::BorderBottomRightRadius => Some(Corner::BottomRight),
            Self::BorderBottomLeftRadius => Some(Corner::BottomLeft),
            _ => None,
        }
    }
}

impl FromStr for Property {
    type Err = CascadeError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Self::from_name(name)
    }
}

impl fmt::Display for Property {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.name())
    }
}
