//! Selector specificity.

use core::ops::{Add, AddAssign};

/// Specificity `(inline, id, class/attribute, type)`, compared lexicographically.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Default, Hash)]
pub struct Specificity(pub u16, pub u16, pub u16, pub u16);

impl Specificity {
    pub const ZERO: Self = Self(0, 0, 0, 0);
    /// Rules attached directly to a widget.
    pub const INLINE: Self = Self(1, 0, 0, 0);
    /// One type or ancestry test.
    pub const TYPE: Self = Self(0, 0, 0, 1);

    /// `count` class or attribute tests.
    pub fn classes(count: usize) -> Self {
        Self(0, 0, u16::try_from(count).unwrap_or(u16::MAX), 0)
    }
}

impl Add for Specificity {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        Self(
            self.0.saturating_add(rhs.0),
            self.1.saturating_add(rhs.1),
            self.2.saturating_add(rhs.2),
            self.3.saturating_add(rhs.3),
        )
    }
}

impl AddAssign for Specificity {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}
