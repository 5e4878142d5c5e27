//! Axis-aligned integer rectangles.

use core::ops::{BitAnd, BitAndAssign, BitOr};

use crate::{Edges, GeometryError, non_negative};

/// The `NotARect` sentinel.
pub const NOT_A_RECT: Option<Rect> = None;

/// Result of [`Rect::cut`]: left, top-left, top, top-right, right,
/// bottom-right, bottom, bottom-left.
pub type CutRegions = [Option<Rect>; 8];

/// Pixel rectangle with `right = x + width` and `bottom = y + height`.
///
/// Both far edges always fit in `i32`; constructors and setters reject values
/// that would push them past it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rect {
    x: i32,
    y: i32,
    width: i32,
    height: i32,
}

impl Rect {
    /// # Errors
    /// Returns `GeometryError::Negative` if `width` or `height` is negative
    /// and `GeometryError::Overflow` if a far edge would leave `i32`.
    #[inline]
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Result<Self, GeometryError> {
        let width = non_negative("width", width)?;
        let height = non_negative("height", height)?;
        far_edge("right", x, width)?;
        far_edge("bottom", y, height)?;
        Ok(Self {
            x,
            y,
            width,
            height,
        })
    }

    /// A zero-sized rectangle positioned at `(x, y)`.
    #[inline]
    pub const fn at(x: i32, y: i32) -> Self {
        Self {
            x,
            y,
            width: 0,
            height: 0,
        }
    }

    /// Build from 0, 2 (`x, y`) or 4 (`x, y, width, height`) values.
    ///
    /// # Errors
    /// Returns `GeometryError::Arity` for any other length, or a range error.
    pub fn from_values(values: &[i32]) -> Result<Self, GeometryError> {
        match *values {
            [] => Ok(Self::default()),
            [x, y] => Ok(Self::at(x, y)),
            [x, y, width, height] => Self::new(x, y, width, height),
            _ => Err(GeometryError::Arity {
                expected: "0, 2 or 4",
                got: values.len(),
            }),
        }
    }

    /// Rectangle spanning the given edge coordinates, or `NotARect` when
    /// inverted or too wide for `i32`.
    #[inline]
    pub const fn from_edges(left: i32, top: i32, right: i32, bottom: i32) -> Option<Self> {
        if right < left || bottom < top {
            return None;
        }
        let (Some(width), Some(height)) = (right.checked_sub(left), bottom.checked_sub(top))
        else {
            return None;
        };
        Some(Self {
            x: left,
            y: top,
            width,
            height,
        })
    }

    #[inline]
    pub const fn x(&self) -> i32 {
        self.x
    }

    #[inline]
    pub const fn y(&self) -> i32 {
        self.y
    }

    #[inline]
    pub const fn width(&self) -> i32 {
        self.width
    }

    #[inline]
    pub const fn height(&self) -> i32 {
        self.height
    }

    #[inline]
    pub const fn left(&self) -> i32 {
        self.x
    }

    #[inline]
    pub const fn top(&self) -> i32 {
        self.y
    }

    #[inline]
    pub const fn right(&self) -> i32 {
        self.x + self.width
    }

    #[inline]
    pub const fn bottom(&self) -> i32 {
        self.y + self.height
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Move horizontally, keeping the width.
    ///
    /// # Errors
    /// Returns `GeometryError::Overflow` if the right edge would leave `i32`.
    #[inline]
    pub fn set_x(&mut self, value: i32) -> Result<(), GeometryError> {
        far_edge("right", value, self.width)?;
        self.x = value;
        Ok(())
    }

    /// Move vertically, keeping the height.
    ///
    /// # Errors
    /// Returns `GeometryError::Overflow` if the bottom edge would leave `i32`.
    #[inline]
    pub fn set_y(&mut self, value: i32) -> Result<(), GeometryError> {
        far_edge("bottom", value, self.height)?;
        self.y = value;
        Ok(())
    }

    /// # Errors
    /// Returns `GeometryError::Negative` if `value` is negative and
    /// `GeometryError::Overflow` if the right edge would leave `i32`.
    #[inline]
    pub fn set_width(&mut self, value: i32) -> Result<(), GeometryError> {
        let width = non_negative("width", value)?;
        far_edge("right", self.x, width)?;
        self.width = width;
        Ok(())
    }

    /// # Errors
    /// Returns `GeometryError::Negative` if `value` is negative and
    /// `GeometryError::Overflow` if the bottom edge would leave `i32`.
    #[inline]
    pub fn set_height(&mut self, value: i32) -> Result<(), GeometryError> {
        let height = non_negative("height", value)?;
        far_edge("bottom", self.y, height)?;
        self.height = height;
        Ok(())
    }

    /// Move the left edge, keeping the right edge fixed.
    ///
    /// # Errors
    /// Returns `GeometryError::Inverted` if `value` lies right of the right
    /// edge and `GeometryError::Overflow` if the width would leave `i32`.
    pub fn set_left(&mut self, value: i32) -> Result<(), GeometryError> {
        let right = self.right();
        if value > right {
            return Err(GeometryError::Inverted {
                edge: "left",
                value,
                opposite: right,
            });
        }
        self.width = span("width", value, right)?;
        self.x = value;
        Ok(())
    }

    /// Move the top edge, keeping the bottom edge fixed.
    ///
    /// # Errors
    /// Returns `GeometryError::Inverted` if `value` lies below the bottom
    /// edge and `GeometryError::Overflow` if the height would leave `i32`.
    pub fn set_top(&mut self, value: i32) -> Result<(), GeometryError> {
        let bottom = self.bottom();
        if value > bottom {
            return Err(GeometryError::Inverted {
                edge: "top",
                value,
                opposite: bottom,
            });
        }
        self.height = span("height", value, bottom)?;
        self.y = value;
        Ok(())
    }

    /// Move the right edge, keeping the left edge fixed.
    ///
    /// # Errors
    /// Returns `GeometryError::Inverted` if `value` lies left of the left
    /// edge and `GeometryError::Overflow` if the width would leave `i32`.
    pub fn set_right(&mut self, value: i32) -> Result<(), GeometryError> {
        if value < self.x {
            return Err(GeometryError::Inverted {
                edge: "right",
                value,
                opposite: self.x,
            });
        }
        self.width = span("width", self.x, value)?;
        Ok(())
    }

    /// Move the bottom edge, keeping the top edge fixed.
    ///
    /// # Errors
    /// Returns `GeometryError::Inverted` if `value` lies above the top edge
    /// and `GeometryError::Overflow` if the height would leave `i32`.
    pub fn set_bottom(&mut self, value: i32) -> Result<(), GeometryError> {
        if value < self.y {
            return Err(GeometryError::Inverted {
                edge: "bottom",
                value,
                opposite: self.y,
            });
        }
        self.height = span("height", self.y, value)?;
        Ok(())
    }

    /// Overlap of two rectangles. Touching rectangles overlap in a zero-sized
    /// rectangle; disjoint ones yield `NotARect`.
    #[inline]
    pub fn intersection(&self, other: &Self) -> Option<Self> {
        Self::from_edges(
            self.x.max(other.x),
            self.y.max(other.y),
            self.right().min(other.right()),
            self.bottom().min(other.bottom()),
        )
    }

    /// Join two rectangles that share a full edge pair.
    ///
    /// Only defined when both have the same left and right edges and their
    /// vertical ranges touch or overlap, or the same top and bottom edges and
    /// their horizontal ranges touch or overlap. Anything else is `NotARect`;
    /// this is not a bounding-box union.
    pub fn union(&self, other: &Self) -> Option<Self> {
        if self.x == other.x
            && self.right() == other.right()
            && self.y <= other.bottom()
            && other.y <= self.bottom()
        {
            return Self::from_edges(
                self.x,
                self.y.min(other.y),
                self.right(),
                self.bottom().max(other.bottom()),
            );
        }
        if self.y == other.y
            && self.bottom() == other.bottom()
            && self.x <= other.right()
            && other.x <= self.right()
        {
            return Self::from_edges(
                self.x.min(other.x),
                self.y,
                self.right().max(other.right()),
                self.bottom(),
            );
        }
        None
    }

    /// Point test, inclusive on the left/top edges and exclusive on the
    /// right/bottom edges.
    #[inline]
    pub const fn contains_point(&self, px: i32, py: i32) -> bool {
        px >= self.x && px < self.right() && py >= self.y && py < self.bottom()
    }

    /// Whether `other` lies inside `self`, touching edges included.
    #[inline]
    pub const fn contains_rect(&self, other: &Self) -> bool {
        other.x >= self.x
            && other.y >= self.y
            && other.right() <= self.right()
            && other.bottom() <= self.bottom()
    }

    /// Push every edge outward by the matching thickness.
    ///
    /// # Errors
    /// Returns `GeometryError::Overflow` if any edge would leave `i32`;
    /// `self` is left untouched.
    pub fn expand(&mut self, edges: &Edges) -> Result<(), GeometryError> {
        let left = self.x.checked_sub(edges.left()).ok_or(GeometryError::Overflow {
            field: "left",
            origin: self.x,
            extent: -edges.left(),
        })?;
        let top = self.y.checked_sub(edges.top()).ok_or(GeometryError::Overflow {
            field: "top",
            origin: self.y,
            extent: -edges.top(),
        })?;
        let right = far_edge("right", self.right(), edges.right())?;
        let bottom = far_edge("bottom", self.bottom(), edges.bottom())?;
        self.width = span("width", left, right)?;
        self.height = span("height", top, bottom)?;
        self.x = left;
        self.y = top;
        Ok(())
    }

    /// Pull every edge inward by the matching thickness.
    ///
    /// # Errors
    /// Returns `GeometryError::Negative` if the result would have a negative
    /// width or height; `self` is left untouched.
    pub fn shrink(&mut self, edges: &Edges) -> Result<(), GeometryError> {
        let width = non_negative("width", self.width.saturating_sub(edges.horizontal()))?;
        let height = non_negative("height", self.height.saturating_sub(edges.vertical()))?;
        self.x += edges.left();
        self.y += edges.top();
        self.width = width;
        self.height = height;
        Ok(())
    }

    /// Copying form of [`Rect::shrink`] that yields `NotARect` instead of an error.
    #[inline]
    pub fn shrunk(&self, edges: &Edges) -> Option<Self> {
        let mut inner = *self;
        inner.shrink(edges).ok().map(|()| inner)
    }

    /// Split the band between `self` and `self` shrunk by `edges` into its
    /// four strips and four corners.
    ///
    /// A strip is `NotARect` when its edge is zero and a corner is `NotARect`
    /// when either adjacent edge is zero, so an all-zero box yields eight
    /// `NotARect`s. Regions with negative extent, or that would not fit in
    /// `i32`, are also `NotARect`.
    pub fn cut(&self, edges: &Edges) -> CutRegions {
        let (x, y) = (i64::from(self.x), i64::from(self.y));
        let (left, top) = (i64::from(edges.left()), i64::from(edges.top()));
        let (right, bottom) = (i64::from(edges.right()), i64::from(edges.bottom()));
        let inner_left = x + left;
        let inner_top = y + top;
        let inner_right = i64::from(self.right()) - right;
        let inner_bottom = i64::from(self.bottom()) - bottom;
        let inner_width = inner_right - inner_left;
        let inner_height = inner_bottom - inner_top;

        [
            region(x, inner_top, left, inner_height, left > 0),
            region(x, y, left, top, left > 0 && top > 0),
            region(inner_left, y, inner_width, top, top > 0),
            region(inner_right, y, right, top, right > 0 && top > 0),
            region(inner_right, inner_top, right, inner_height, right > 0),
            region(inner_right, inner_bottom, right, bottom, right > 0 && bottom > 0),
            region(inner_left, inner_bottom, inner_width, bottom, bottom > 0),
            region(x, inner_bottom, left, bottom, left > 0 && bottom > 0),
        ]
    }
}

/// `origin + extent` as a far edge, rejecting sums outside `i32`.
#[inline]
const fn far_edge(field: &'static str, origin: i32, extent: i32) -> Result<i32, GeometryError> {
    match origin.checked_add(extent) {
        Some(edge) => Ok(edge),
        None => Err(GeometryError::Overflow {
            field,
            origin,
            extent,
        }),
    }
}

/// Distance from `near` to `far`, rejecting spans wider than `i32`.
#[inline]
const fn span(field: &'static str, near: i32, far: i32) -> Result<i32, GeometryError> {
    match far.checked_sub(near) {
        Some(extent) => Ok(extent),
        None => Err(GeometryError::Overflow {
            field,
            origin: near,
            extent: far.saturating_sub(near),
        }),
    }
}

/// One cut region, absent when not `present`, when its extent is negative, or
/// when it does not fit in `i32`.
#[inline]
fn region(x: i64, y: i64, width: i64, height: i64, present: bool) -> Option<Rect> {
    if !present || width < 0 || height < 0 {
        return None;
    }
    Rect::new(
        i32::try_from(x).ok()?,
        i32::try_from(y).ok()?,
        i32::try_from(width).ok()?,
        i32::try_from(height).ok()?,
    )
    .ok()
}

impl BitAnd for Rect {
    type Output = Option<Self>;

    #[inline]
    fn bitand(self, rhs: Self) -> Self::Output {
        self.intersection(&rhs)
    }
}

impl BitAnd<Option<Rect>> for Rect {
    type Output = Option<Self>;

    #[inline]
    fn bitand(self, rhs: Option<Self>) -> Self::Output {
        rhs.and_then(|other| self.intersection(&other))
    }
}

impl BitAnd<Rect> for Option<Rect> {
    type Output = Self;

    #[inline]
    fn bitand(self, rhs: Rect) -> Self::Output {
        self.and_then(|current| current.intersection(&rhs))
    }
}

impl BitAndAssign<Rect> for Option<Rect> {
    #[inline]
    fn bitand_assign(&mut self, rhs: Rect) {
        *self = *self & rhs;
    }
}

impl BitOr for Rect {
    type Output = Option<Self>;

    #[inline]
    fn bitor(self, rhs: Self) -> Self::Output {
        self.union(&rhs)
    }
}

impl BitOr<Option<Rect>> for Rect {
    type Output = Option<Self>;

    #[inline]
    fn bitor(self, rhs: Option<Self>) -> Self::Output {
        rhs.and_then(|other| self.union(&other))
    }
}

impl BitOr<Rect> for Option<Rect> {
    type Output = Self;

    #[inline]
    fn bitor(self, rhs: Rect) -> Self::Output {
        self.and_then(|current| current.union(&rhs))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect(x: i32, y: i32, width: i32, height: i32) -> Rect {
        Rect {
            x,
            y,
            width,
            height,
        }
    }

    #[test]
    fn edge_setters_keep_the_opposite_edge() -> Result<(), GeometryError> {
        let mut area = rect(10, 10, 20, 20);
        area.set_left(15)?;
        assert_eq!((area.x(), area.width(), area.right()), (15, 15, 30));
        area.set_bottom(12)?;
        assert_eq!((area.y(), area.height()), (10, 2));
        area.set_top(12)?;
        assert_eq!(area.height(), 0);
        assert!(matches!(
            area.set_left(31),
            Err(GeometryError::Inverted { edge: "left", .. })
        ));
        assert!(area.set_right(14).is_err());
        assert!(area.set_width(-1).is_err());
        Ok(())
    }

    #[test]
    fn position_setters_keep_size() -> Result<(), GeometryError> {
        let mut area = rect(0, 0, 5, 6);
        area.set_x(10)?;
        area.set_y(-3)?;
        assert_eq!((area.right(), area.bottom()), (15, 3));
        assert!(matches!(
            area.set_x(i32::MAX - 2),
            Err(GeometryError::Overflow { field: "right", .. })
        ));
        assert_eq!(area.x(), 10);
        Ok(())
    }

    #[test]
    fn far_edges_stay_in_range() -> Result<(), GeometryError> {
        assert!(matches!(
            Rect::new(i32::MAX - 1, 0, 10, 10),
            Err(GeometryError::Overflow { field: "right", .. })
        ));
        assert!(Rect::new(0, i32::MAX, 1, 1).is_err());
        let edge = Rect::new(i32::MAX - 10, 0, 10, 10)?;
        assert_eq!(edge.right(), i32::MAX);
        let mut area = rect(0, 0, 5, 5);
        assert!(area.set_width(i32::MAX).is_ok());
        assert!(rect(1, 0, 5, 5).set_width(i32::MAX).is_err());
        assert!(rect(i32::MIN, 0, 0, 0).set_right(i32::MAX).is_err());
        assert!(rect(0, 0, i32::MAX, 1).set_left(i32::MIN).is_err());
        assert_eq!(Rect::from_edges(i32::MIN, 0, i32::MAX, 1), NOT_A_RECT);
        Ok(())
    }

    #[test]
    fn expand_rejects_overflow_and_keeps_the_rect() -> Result<(), GeometryError> {
        let mut wide = rect(0, 0, i32::MAX, 1);
        assert!(matches!(
            wide.expand(&Edges::uniform(1)?),
            Err(GeometryError::Overflow { .. })
        ));
        assert_eq!(wide, rect(0, 0, i32::MAX, 1));
        let mut low = rect(i32::MIN, 0, 4, 4);
        assert!(low.expand(&Edges::new(1, 0, 0, 0)?).is_err());
        let mut area = rect(5, 5, 10, 10);
        area.expand(&Edges::new(1, 2, 3, 4)?)?;
        assert_eq!(area, rect(4, 3, 14, 16));
        Ok(())
    }

    #[test]
    fn extreme_cuts_do_not_overflow() -> Result<(), GeometryError> {
        let edge = Rect::new(i32::MAX - 4, 0, 4, 4)?;
        let regions = edge.cut(&Edges::uniform(i32::MAX)?);
        assert_eq!(regions[2], NOT_A_RECT);
        assert_eq!(regions[0], NOT_A_RECT);
        let mut shrunk = edge;
        assert!(shrunk.shrink(&Edges::uniform(i32::MAX)?).is_err());
        Ok(())
    }

    #[test]
    fn from_values_arity() {
        assert_eq!(Rect::from_values(&[4, 5]), Ok(Rect::at(4, 5)));
        assert!(Rect::from_values(&[1, 2, 3]).is_err());
        assert!(Rect::from_values(&[0, 0, -1, 2]).is_err());
    }

    #[test]
    fn intersection_and_absorption() {
        let first = rect(0, 0, 10, 10);
        let second = rect(5, 5, 10, 10);
        assert_eq!(first & second, Some(rect(5, 5, 5, 5)));
        assert_eq!(first & rect(20, 20, 1, 1), NOT_A_RECT);
        assert_eq!(first & NOT_A_RECT, NOT_A_RECT);
        assert_eq!(NOT_A_RECT & first, NOT_A_RECT);

        let mut clip = Some(first);
        clip &= second;
        assert_eq!(clip, Some(rect(5, 5, 5, 5)));
        clip &= rect(100, 0, 1, 1);
        assert_eq!(clip, NOT_A_RECT);
    }

    #[test]
    fn containment_is_half_open_for_points() {
        let area = rect(0, 0, 10, 10);
        assert!(area.contains_point(0, 0));
        assert!(!area.contains_point(10, 5));
        assert!(area.contains_rect(&rect(0, 0, 10, 10)));
        assert!(!area.contains_rect(&rect(1, 1, 10, 1)));
    }

    #[test]
    fn shrink_rejects_overdraw() {
        let mut area = rect(0, 0, 4, 4);
        let thick = Edges::new(3, 0, 3, 0);
        assert!(thick.is_ok_and(|edges| area.shrink(&edges).is_err()));
        assert_eq!(area, rect(0, 0, 4, 4));
    }

    #[test]
    fn cut_produces_strips_and_corners() -> Result<(), GeometryError> {
        let regions = rect(0, 0, 10, 10).cut(&Edges::new(1, 2, 3, 0)?);
        assert_eq!(regions[0], Some(rect(0, 2, 1, 8)));
        assert_eq!(regions[1], Some(rect(0, 0, 1, 2)));
        assert_eq!(regions[2], Some(rect(1, 0, 6, 2)));
        assert_eq!(regions[3], Some(rect(7, 0, 3, 2)));
        assert_eq!(regions[4], Some(rect(7, 2, 3, 8)));
        assert_eq!(regions[5], None);
        assert_eq!(regions[6], None);
        assert_eq!(regions[7], None);
        Ok(())
    }
}
