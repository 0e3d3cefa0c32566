use itertools::Itertools;
use log::{debug, info};

use crate::entities::{Bin, PackingResult, Piece};
use crate::error::PackError;
use crate::packer::bin_packer;
use crate::util::assertions;

/// Packs all `pieces` into as few bins of `bin_width` x `bin_height` as the heuristic manages,
/// opening a new bin whenever the previous one leaves pieces behind.
///
/// Fails before opening any bin if a piece does not fit an empty bin in either orientation,
/// and aborts if a fresh bin cannot take a single one of the remaining pieces.
pub fn allocate(
    pieces: Vec<Piece>,
    bin_width: f64,
    bin_height: f64,
) -> Result<PackingResult, PackError> {
    if !(bin_width.is_finite() && bin_height.is_finite() && bin_width > 0.0 && bin_height > 0.0) {
        return Err(PackError::InvalidBinDimensions {
            width: bin_width,
            height: bin_height,
        });
    }

    if let Some(piece) = pieces
        .iter()
        .find(|p| !fits_empty_bin(p, bin_width, bin_height))
    {
        let bbox = piece.bbox();
        return Err(PackError::PieceExceedsBinCapacity {
            id: piece.id,
            width: bbox.width(),
            height: bbox.height(),
            bin_width,
            bin_height,
        });
    }

    let n_pieces = pieces.len();
    let mut bins = vec![];
    let mut working_set = pieces;

    loop {
        let mut bin = Bin::new(bins.len(), bin_width, bin_height);
        let n_attempted = working_set.len();
        let leftover = bin_packer::pack(&mut bin, working_set);

        debug_assert!(assertions::free_rects_are_maximal(bin.free_space()));
        debug_assert!(assertions::free_space_is_free(&bin));
        debug_assert!(assertions::bin_is_overlap_free(&bin));
        debug_assert!(assertions::pieces_within_bin(&bin));

        if n_attempted > 0 && leftover.len() == n_attempted {
            return Err(PackError::NoProgressDetected {
                bin_index: bin.id,
                remaining: leftover.iter().map(|p| p.id).sorted().collect(),
            });
        }

        info!(
            "[ALLOC] bin {} closed with {} pieces (density: {:.3}%), {} pieces remaining",
            bin.id,
            bin.placed_pieces().len(),
            bin.density() * 100.0,
            leftover.len()
        );
        bins.push(bin);

        if leftover.is_empty() {
            break;
        }
        working_set = leftover;
    }

    let result = PackingResult { bins };
    debug!(
        "[ALLOC] {} pieces packed in {} bins",
        result.n_placed(),
        result.n_bins()
    );
    debug_assert_eq!(result.n_placed(), n_pieces);

    Ok(result)
}

/// True if the piece fits inside an empty bin in at least one orientation
fn fits_empty_bin(piece: &Piece, bin_width: f64, bin_height: f64) -> bool {
    let bbox = piece.bbox();
    let (w, h) = (bbox.width(), bbox.height());
    (w <= bin_width && h <= bin_height) || (h <= bin_width && w <= bin_height)
}
