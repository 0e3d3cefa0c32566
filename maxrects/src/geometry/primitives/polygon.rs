use geo::{Area, BooleanOps, BoundingRect, Coord, MapCoords, MultiPolygon};

use crate::geometry::{OVERLAP_REL_TOLERANCE, Transformation};
use crate::geometry::geo_traits::{CollidesWith, Shape, Transformable};
use crate::geometry::primitives::{Point, Rect};

/// Polygonal region, possibly with holes or made of several disjoint parts.
/// Boolean operations rely on the [`geo`](https://crates.io/crates/geo) crate.
#[derive(Clone, Debug, PartialEq)]
pub struct Polygon(MultiPolygon<f64>);

impl Polygon {
    /// The region of `self` not covered by `other`
    pub fn subtract(&self, other: &Polygon) -> Polygon {
        Polygon(self.0.difference(&other.0))
    }

    /// The region covered by both `self` and `other`
    pub fn intersect(&self, other: &Polygon) -> Polygon {
        Polygon(self.0.intersection(&other.0))
    }

    /// Moves the minimum corner of the bounding box to (`x`, `y`).
    pub fn anchor_at(&mut self, x: f64, y: f64) -> &mut Self {
        let bbox = self.bbox();
        self.0 = self.0.map_coords(|c| Coord {
            x: x + (c.x - bbox.x_min),
            y: y + (c.y - bbox.y_min),
        });
        self
    }

    pub fn inner(&self) -> &MultiPolygon<f64> {
        &self.0
    }
}

impl From<Rect> for Polygon {
    fn from(r: Rect) -> Self {
        Polygon(MultiPolygon::new(vec![r.into()]))
    }
}

impl Shape for Polygon {
    fn area(&self) -> f64 {
        self.0.unsigned_area()
    }

    fn bbox(&self) -> Rect {
        match self.0.bounding_rect() {
            Some(r) => Rect {
                x_min: r.min().x,
                y_min: r.min().y,
                x_max: r.max().x,
                y_max: r.max().y,
            },
            None => Rect {
                x_min: 0.0,
                y_min: 0.0,
                x_max: 0.0,
                y_max: 0.0,
            },
        }
    }
}

impl Transformable for Polygon {
    fn transform(&mut self, t: &Transformation) -> &mut Self {
        self.0 = self.0.map_coords(|c| {
            let Point(x, y) = t.apply(Point(c.x, c.y));
            Coord { x, y }
        });
        self
    }
}

/// The intersection of both regions has a positive area.
impl CollidesWith<Polygon> for Polygon {
    fn collides_with(&self, other: &Polygon) -> bool {
        if !self.bbox().collides_with(&other.bbox()) {
            return false;
        }
        let tolerance = OVERLAP_REL_TOLERANCE * f64::min(self.area(), other.area());
        self.intersect(other).area() > tolerance
    }
}
