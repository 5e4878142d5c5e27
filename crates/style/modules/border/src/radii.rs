use crate::BorderError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Corner {
    TopLeft,
    TopRight,
    BottomRight,
    BottomLeft,
}

impl Corner {
    pub const ALL: [Self; 4] = [
        Self::TopLeft,
        Self::TopRight,
        Self::BottomRight,
        Self::BottomLeft,
    ];
}

/// Per-corner radii in pixels, all `>= 0`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct CornerRadii {
    top_left: i32,
    top_right: i32,
    bottom_right: i32,
    bottom_left: i32,
}

impl CornerRadii {
    pub const ZERO: Self = Self {
        top_left: 0,
        top_right: 0,
        bottom_right: 0,
        bottom_left: 0,
    };

    /// # Errors
    /// Returns `BorderError::NegativeRadius` for a negative radius.
    pub fn uniform(radius: i32) -> Result<Self, BorderError> {
        let mut radii = Self::ZERO;
        for corner in Corner::ALL {
            radii.set(corner, radius)?;
        }
        Ok(radii)
    }

    #[inline]
    pub const fn get(&self, corner: Corner) -> i32 {
        match corner {
            Corner::TopLeft => self.top_left,
            Corner::TopRight => self.top_right,
            Corner::BottomRight => self.bottom_right,
            Corner::BottomLeft => self.bottom_left,
        }
    }

    /// # Errors
    /// Returns `BorderError::NegativeRadius` for a negative radius.
    pub fn set(&mut self, corner: Corner, value: i32) -> Result<(), BorderError> {
        if value < 0 {
            return Err(BorderError::NegativeRadius { corner, value });
        }
        let slot = match corner {
            Corner::TopLeft => &mut self.top_left,
            Corner::TopRight => &mut self.top_right,
            Corner::BottomRight => &mut self.bottom_right,
            Corner::BottomLeft => &mut self.bottom_left,
        };
        *slot = value;
        Ok(())
    }

    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.top_left == 0 && self.top_right == 0 && self.bottom_right == 0 && self.bottom_left == 0
    }
}
