//! Four-sided thickness box used for margins, padding and border widths.

use crate::{GeometryError, non_negative};

/// Edge thicknesses in pixels. All four sides are always `>= 0`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Edges {
    left: i32,
    top: i32,
    right: i32,
    bottom: i32,
}

impl Edges {
    /// All sides zero.
    pub const ZERO: Self = Self {
        left: 0,
        top: 0,
        right: 0,
        bottom: 0,
    };

    #[inline]
    pub const fn zero() -> Self {
        Self::ZERO
    }

    /// Same thickness on every side.
    ///
    /// # Errors
    /// Returns `GeometryError::Negative` if `value` is negative.
    #[inline]
    pub fn uniform(value: i32) -> Result<Self, GeometryError> {
        let side = non_negative("edge", value)?;
        Ok(Self {
            left: side,
            top: side,
            right: side,
            bottom: side,
        })
    }

    /// Explicit thicknesses in left, top, right, bottom order.
    ///
    /// # Errors
    /// Returns `GeometryError::Negative` naming the first negative side.
    #[inline]
    pub fn new(left: i32, top: i32, right: i32, bottom: i32) -> Result<Self, GeometryError> {
        Ok(Self {
            left: non_negative("left", left)?,
            top: non_negative("top", top)?,
            right: non_negative("right", right)?,
            bottom: non_negative("bottom", bottom)?,
        })
    }

    /// Build from a list of 0, 1 (broadcast) or 4 values.
    ///
    /// # Errors
    /// Returns `GeometryError::Arity` for any other length, or a range error.
    pub fn from_values(values: &[i32]) -> Result<Self, GeometryError> {
        match *values {
            [] => Ok(Self::ZERO),
            [side] => Self::uniform(side),
            [left, top, right, bottom] => Self::new(left, top, right, bottom),
            _ => Err(GeometryError::Arity {
                expected: "0, 1 or 4",
                got: values.len(),
            }),
        }
    }

    #[inline]
    pub const fn left(&self) -> i32 {
        self.left
    }

    #[inline]
    pub const fn top(&self) -> i32 {
        self.top
    }

    #[inline]
    pub const fn right(&self) -> i32 {
        self.right
    }

    #[inline]
    pub const fn bottom(&self) -> i32 {
        self.bottom
    }

    /// Sum of the left and right thicknesses, saturating at `i32::MAX`.
    #[inline]
    pub const fn horizontal(&self) -> i32 {
        self.left.saturating_add(self.right)
    }

    /// Sum of the top and bottom thicknesses, saturating at `i32::MAX`.
    #[inline]
    pub const fn vertical(&self) -> i32 {
        self.top.saturating_add(self.bottom)
    }

    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.left == 0 && self.top == 0 && self.right == 0 && self.bottom == 0
    }

    /// # Errors
    /// Returns `GeometryError::Negative` if `value` is negative.
    #[inline]
    pub fn set_left(&mut self, value: i32) -> Result<(), GeometryError> {
        if value != self.left {
            self.left = non_negative("left", value)?;
        }
        Ok(())
    }

    /// # Errors
    /// Returns `GeometryError::Negative` if `value` is negative.
    #[inline]
    pub fn set_top(&mut self, value: i32) -> Result<(), GeometryError> {
        if value != self.top {
            self.top = non_negative("top", value)?;
        }
        Ok(())
    }

    /// # Errors
    /// Returns `GeometryError::Negative` if `value` is negative.
    #[inline]
    pub fn set_right(&mut self, value: i32) -> Result<(), GeometryError> {
        if value != self.right {
            self.right = non_negative("right", value)?;
        }
        Ok(())
    }

    /// # Errors
    /// Returns `GeometryError::Negative` if `value` is negative.
    #[inline]
    pub fn set_bottom(&mut self, value: i32) -> Result<(), GeometryError> {
        if value != self.bottom {
            self.bottom = non_negative("bottom", value)?;
        }
        Ok(())
    }

    /// Replace all four sides from another box, a single broadcast integer
    /// or a `(left, top, right, bottom)` tuple.
    ///
    /// # Errors
    /// Returns the conversion's range error; `self` is left untouched.
    pub fn assign<T>(&mut self, value: T) -> Result<(), GeometryError>
    where
        T: TryInto<Self>,
        GeometryError: From<T::Error>,
    {
        *self = value.try_into()?;
        Ok(())
    }
}

impl TryFrom<i32> for Edges {
    type Error = GeometryError;

    #[inline]
    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Self::uniform(value)
    }
}

impl TryFrom<(i32, i32, i32, i32)> for Edges {
    type Error = GeometryError;

    #[inline]
    fn try_from(value: (i32, i32, i32, i32)) -> Result<Self, Self::Error> {
        Self::new(value.0, value.1, value.2, value.3)
    }
}
