use crate::geometry::Transformation;
use crate::geometry::geo_traits::{CollidesWith, Shape, Transformable};
use crate::geometry::primitives::{Polygon, Rect};

/// The region occupied by a piece.
///
/// Plain rectangles take a fast path for every operation. Any other region (rectangles with holes,
/// rectangles rotated by something other than a quarter turn) is a [`Polygon`].
#[derive(Clone, Debug, PartialEq)]
pub enum PieceShape {
    Rect(Rect),
    Polygon(Polygon),
}

impl PieceShape {
    /// The region of `self` not covered by `other`
    pub fn subtract(&self, other: &PieceShape) -> PieceShape {
        PieceShape::Polygon(self.to_polygon().subtract(&other.to_polygon()))
    }

    /// Translates `self` so that the minimum corner of its bounding box lands exactly on (`x`, `y`).
    /// Coordinates are shifted relative to the current corner, which itself maps to (`x`, `y`) without rounding.
    pub fn anchor_at(&mut self, x: f64, y: f64) -> &mut Self {
        match self {
            PieceShape::Rect(r) => {
                r.anchor_at(x, y);
            }
            PieceShape::Polygon(p) => {
                p.anchor_at(x, y);
            }
        };
        self
    }

    pub fn to_polygon(&self) -> Polygon {
        match self {
            PieceShape::Rect(r) => Polygon::from(*r),
            PieceShape::Polygon(p) => p.clone(),
        }
    }
}

impl Shape for PieceShape {
    fn area(&self) -> f64 {
        match self {
            PieceShape::Rect(r) => r.area(),
            PieceShape::Polygon(p) => p.area(),
        }
    }

    fn bbox(&self) -> Rect {
        match self {
            PieceShape::Rect(r) => *r,
            PieceShape::Polygon(p) => p.bbox(),
        }
    }
}

impl Transformable for PieceShape {
    fn transform(&mut self, t: &Transformation) -> &mut Self {
        match self {
            PieceShape::Rect(r) if t.is_axis_aligned() => {
                r.transform(t);
            }
            PieceShape::Rect(r) => {
                let mut poly = Polygon::from(*r);
                poly.transform(t);
                *self = PieceShape::Polygon(poly);
            }
            PieceShape::Polygon(p) => {
                p.transform(t);
            }
        }
        self
    }
}

impl CollidesWith<PieceShape> for PieceShape {
    fn collides_with(&self, other: &PieceShape) -> bool {
        match (self, other) {
            (PieceShape::Rect(a), PieceShape::Rect(b)) => a.collides_with(b),
            _ => {
                self.bbox().collides_with(&other.bbox())
                    && self.to_polygon().collides_with(&other.to_polygon())
            }
        }
    }
}

impl From<Rect> for PieceShape {
    fn from(r: Rect) -> Self {
        PieceShape::Rect(r)
    }
}

impl From<Polygon> for PieceShape {
    fn from(p: Polygon) -> Self {
        PieceShape::Polygon(p)
    }
}
