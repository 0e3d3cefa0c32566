//! The Maximal Rectangles placement engine.
//!
//! [`bin_packer::pack`] fills a single bin, [`allocator::allocate`] opens bins until every piece is placed.

pub mod allocator;
pub mod bin_packer;

#[doc(inline)]
pub use allocator::allocate;

use crate::error::PackError;
use crate::io::ext_repr::{ExtBin, ExtPiece};
use crate::io::{export, import};

/// Packs the pieces in bins of `bin_width` x `bin_height`.
/// Returns the bins in the order they were opened, each with its placed pieces.
pub fn pack(pieces: &[ExtPiece], bin_width: f64, bin_height: f64) -> Result<Vec<ExtBin>, PackError> {
    let pieces = import::import_pieces(pieces)?;
    let result = allocate(pieces, bin_width, bin_height)?;
    Ok(result.bins.iter().map(export::export_bin).collect())
}
