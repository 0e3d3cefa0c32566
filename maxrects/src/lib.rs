//! Bin packing of 2D rectangular pieces (optionally with holes) using the Maximal Rectangles method.
//!
//! Pieces are placed one bin at a time: a per-bin set of maximal free rectangles is searched with
//! the Best Short Side Fit heuristic, every placement is re-verified against the exact shapes already
//! in the bin, and bins are opened until every piece has been placed.

/// Entities to model the packing problem: pieces, bins, free space and the packing result
pub mod entities;

/// Domain errors raised by the loader and the allocator
pub mod error;

/// Geometric primitives and the shapes the pieces are made of
pub mod geometry;

/// Importing instances into and exporting solutions out of this library
pub mod io;

/// The single-bin placement engine and the multi-bin allocator around it
pub mod packer;

/// Helper functions which do not belong to any specific module
pub mod util;
