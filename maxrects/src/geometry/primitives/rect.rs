use anyhow::Result;
use anyhow::ensure;

use crate::geometry::{OVERLAP_REL_TOLERANCE, Transformation};
use crate::geometry::geo_traits::{CollidesWith, Shape, Transformable};
use crate::geometry::primitives::Point;

///Axis-aligned rectangle
#[derive(Clone, Debug, PartialEq, Copy)]
pub struct Rect {
    pub x_min: f64,
    pub y_min: f64,
    pub x_max: f64,
    pub y_max: f64,
}

impl Rect {
    pub fn try_new(x_min: f64, y_min: f64, x_max: f64, y_max: f64) -> Result<Self> {
        ensure!(
            x_min < x_max && y_min < y_max,
            "invalid rectangle, x_min: {x_min}, x_max: {x_max}, y_min: {y_min}, y_max: {y_max}"
        );
        Ok(Rect {
            x_min,
            y_min,
            x_max,
            y_max,
        })
    }

    /// Rectangle with its minimum corner at (`x`, `y`)
    pub fn from_xywh(x: f64, y: f64, width: f64, height: f64) -> Result<Self> {
        ensure!(
            width.is_finite() && height.is_finite() && x.is_finite() && y.is_finite(),
            "non-finite rectangle: ({x}, {y}, {width}, {height})"
        );
        Rect::try_new(x, y, x + width, y + height)
    }

    pub fn width(&self) -> f64 {
        self.x_max - self.x_min
    }

    pub fn height(&self) -> f64 {
        self.y_max - self.y_min
    }

    /// Returns the largest rectangle that is contained in both `a` and `b`.
    /// `None` if their interiors do not intersect.
    pub fn intersection(a: Rect, b: Rect) -> Option<Rect> {
        let x_min = f64::max(a.x_min, b.x_min);
        let y_min = f64::max(a.y_min, b.y_min);
        let x_max = f64::min(a.x_max, b.x_max);
        let y_max = f64::min(a.y_max, b.y_max);
        if x_min < x_max && y_min < y_max {
            Some(Rect {
                x_min,
                y_min,
                x_max,
                y_max,
            })
        } else {
            None
        }
    }

    /// True if `other` lies within `self`, boundaries included.
    pub fn encloses(&self, other: &Rect) -> bool {
        self.x_min <= other.x_min
            && self.y_min <= other.y_min
            && self.x_max >= other.x_max
            && self.y_max >= other.y_max
    }

    /// Moves the minimum corner to (`x`, `y`), keeping width and height.
    pub fn anchor_at(&mut self, x: f64, y: f64) -> &mut Self {
        *self = Rect {
            x_min: x,
            y_min: y,
            x_max: x + (self.x_max - self.x_min),
            y_max: y + (self.y_max - self.y_min),
        };
        self
    }

    pub fn centroid(&self) -> Point {
        Point(
            (self.x_min + self.x_max) / 2.0,
            (self.y_min + self.y_max) / 2.0,
        )
    }

    pub fn area(&self) -> f64 {
        (self.x_max - self.x_min) * (self.y_max - self.y_min)
    }

    /// Returns the four corners of `self`, counter-clockwise starting from the minimum corner.
    pub fn corners(&self) -> [Point; 4] {
        [
            Point(self.x_min, self.y_min),
            Point(self.x_max, self.y_min),
            Point(self.x_max, self.y_max),
            Point(self.x_min, self.y_max),
        ]
    }
}

impl Shape for Rect {
    fn area(&self) -> f64 {
        Rect::area(self)
    }

    fn bbox(&self) -> Rect {
        *self
    }
}

/// Only defined for transformations that keep the rectangle axis-aligned
/// (see [`Transformation::is_axis_aligned`]).
impl Transformable for Rect {
    fn transform(&mut self, t: &Transformation) -> &mut Self {
        debug_assert!(t.is_axis_aligned());
        let Point(x1, y1) = t.apply(Point(self.x_min, self.y_min));
        let Point(x2, y2) = t.apply(Point(self.x_max, self.y_max));
        *self = Rect {
            x_min: f64::min(x1, x2),
            y_min: f64::min(y1, y2),
            x_max: f64::max(x1, x2),
            y_max: f64::max(y1, y2),
        };
        self
    }
}

/// The intersection has a positive area, beyond rounding.
/// Rectangles that only share a boundary do not collide.
impl CollidesWith<Rect> for Rect {
    #[inline(always)]
    fn collides_with(&self, other: &Rect) -> bool {
        let tolerance = OVERLAP_REL_TOLERANCE * f64::min(self.area(), other.area());
        Rect::intersection(*self, *other).is_some_and(|i| i.area() > tolerance)
    }
}

impl From<Rect> for geo::Polygon<f64> {
    fn from(r: Rect) -> Self {
        geo::Rect::new(
            geo::coord! { x: r.x_min, y: r.y_min },
            geo::coord! { x: r.x_max, y: r.y_max },
        )
        .to_polygon()
    }
}
