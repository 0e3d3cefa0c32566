use std::hash::{Hash, Hasher};
use std::sync::Arc;

use crate::error::PackError;
use crate::geometry::geo_traits::{CollidesWith, Shape, Transformable};
use crate::geometry::primitives::Rect;
use crate::geometry::{PieceShape, Transformation};

/// Item to be packed.
///
/// The original shape is never modified: every translation and rotation is composed onto a single
/// [`Transformation`], from which the current shape is derived.
#[derive(Clone, Debug)]
pub struct Piece {
    pub id: usize,
    /// Shape of the piece as it was constructed
    base: Arc<PieceShape>,
    /// All transformations applied to the piece so far
    transf: Transformation,
    /// `base` with `transf` applied, translations are anchored exactly (see [`Piece::place_at`])
    shape: PieceShape,
    /// Accumulated rotation in degrees, in [0, 360)
    rotation: f64,
}

impl Piece {
    /// Creates a rectangular piece spanning `[0, width] x [0, height]`.
    pub fn from_rectangle(width: f64, height: f64, id: usize) -> Result<Piece, PackError> {
        let rect =
            Rect::from_xywh(0.0, 0.0, width, height).map_err(|e| PackError::InvalidPiece {
                id,
                reason: e.to_string(),
            })?;
        Ok(Piece::from_shape(rect.into(), id))
    }

    /// Creates the piece `outer` minus `inner`, with the id of `outer`.
    /// Both are used in their current position.
    pub fn from_shape_with_hole(outer: &Piece, inner: &Piece) -> Result<Piece, PackError> {
        let shape = outer.shape.subtract(&inner.shape);
        if shape.area() <= 0.0 {
            return Err(PackError::InvalidPiece {
                id: outer.id,
                reason: format!("hole of piece {} covers the entire piece", inner.id),
            });
        }
        Ok(Piece::from_shape(shape, outer.id))
    }

    pub fn from_shape(shape: PieceShape, id: usize) -> Piece {
        Piece {
            id,
            base: Arc::new(shape.clone()),
            transf: Transformation::empty(),
            shape,
            rotation: 0.0,
        }
    }

    pub fn bbox(&self) -> Rect {
        self.shape.bbox()
    }

    /// Measured area of the current shape
    pub fn area(&self) -> f64 {
        self.shape.area()
    }

    pub fn rotation(&self) -> f64 {
        self.rotation
    }

    pub fn shape(&self) -> &PieceShape {
        &self.shape
    }

    /// Translates the piece so that the minimum corner of its bounding box lands exactly on (`x`, `y`).
    ///
    /// The translation is recorded in the transformation, but the shape itself is shifted relative to its
    /// current corner instead of being rederived from the base shape.
    pub fn place_at(&mut self, x: f64, y: f64) -> &mut Self {
        let bbox = self.bbox();
        let t = Transformation::from_translation((x - bbox.x_min, y - bbox.y_min));
        self.transf = self.transf.clone().transform(&t);
        self.shape.anchor_at(x, y);
        self
    }

    /// Rotates the piece by `degrees` around the center of its current bounding box.
    pub fn rotate(&mut self, degrees: f64) -> &mut Self {
        self.rotation = (self.rotation + degrees).rem_euclid(360.0);
        let t = Transformation::empty().rotate_around(degrees, self.bbox().centroid());
        self.apply(&t)
    }

    /// True if the exact shapes of both pieces share a region of positive area.
    pub fn overlaps(&self, other: &Piece) -> bool {
        self.shape.collides_with(&other.shape)
    }

    fn apply(&mut self, t: &Transformation) -> &mut Self {
        self.transf = self.transf.clone().transform(t);
        self.shape = self.base.transform_clone(&self.transf);
        self
    }
}

impl PartialEq for Piece {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Piece {}

impl Hash for Piece {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}
