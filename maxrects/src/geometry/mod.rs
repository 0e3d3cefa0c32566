/// Set of traits representing various geometric properties & operations
pub mod geo_traits;

/// Set of geometric primitives - atomic building blocks for the geometry module
pub mod primitives;

mod shape;
mod transformation;

/// Fraction of the smaller area below which an intersection is attributed to rounding
pub(crate) const OVERLAP_REL_TOLERANCE: f64 = 1e-9;

#[doc(inline)]
pub use shape::PieceShape;

#[doc(inline)]
pub use transformation::Transformation;
