use itertools::Itertools;
use log::debug;

use crate::entities::{Bin, Piece};

/// Places as many of `pieces` as possible in `bin`, largest area first.
/// Returns the pieces that were not placed, in the order they were attempted.
///
/// Every piece gets a single attempt: the free rectangle chosen by
/// [`FreeSpaceTracker::find_candidate`](crate::entities::FreeSpaceTracker::find_candidate).
/// The piece is anchored to the left and the bottom edge (largest y) of that rectangle and the
/// placement is re-verified against the exact shapes already in the bin.
/// A piece that fails either step is returned unchanged.
pub fn pack(bin: &mut Bin, pieces: Vec<Piece>) -> Vec<Piece> {
    let mut not_placed = vec![];

    //stable sort, pieces of equal area are attempted in reverse input order
    let sorted = pieces
        .into_iter()
        .sorted_by(|a, b| a.area().total_cmp(&b.area()))
        .collect_vec();

    for piece in sorted.into_iter().rev() {
        let Some(candidate) = bin.free_space.find_candidate(&piece.bbox()) else {
            debug!("[PACK] piece {} does not fit in bin {}", piece.id, bin.id);
            not_placed.push(piece);
            continue;
        };

        let free_rect = bin.free_space.free_rects()[candidate.index];
        let mut placed = piece.clone();
        if candidate.rotated {
            placed.rotate(90.0);
        }
        let height = placed.bbox().height();
        placed.place_at(free_rect.x_min, free_rect.y_max - height);

        if let Some(other) = bin.placed.iter().find(|p| p.overlaps(&placed)) {
            debug!(
                "[PACK] piece {} overlaps piece {} in bin {}, deferred",
                piece.id, other.id, bin.id
            );
            not_placed.push(piece);
            continue;
        }

        let placed_bbox = placed.bbox();
        bin.free_space.occupy(candidate.index, &placed_bbox);
        debug!(
            "[PACK] placed piece {} in bin {} at ({:.3}, {:.3}), rotation: {}°",
            placed.id, bin.id, placed_bbox.x_min, placed_bbox.y_min, placed.rotation()
        );
        bin.placed.push(placed);
    }

    not_placed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::FreeSpaceTracker;
    use crate::geometry::primitives::Rect;
    use crate::util::assertions;

    #[test]
    fn overlapping_candidate_is_deferred_unchanged() {
        //a piece registered in the bin without occupying the free space
        let mut bin = Bin::new(0, 10.0, 10.0);
        bin.free_space = FreeSpaceTracker::new(3.0, 10.0);
        let mut blocker = Piece::from_rectangle(2.0, 2.0, 0).unwrap();
        blocker.place_at(0.0, 6.0);
        bin.placed.push(blocker);

        //only fits the free space rotated, at (0, 2, 3, 8), on top of the blocker
        let piece = Piece::from_rectangle(8.0, 3.0, 1).unwrap();
        assert!(bin.free_space.find_candidate(&piece.bbox()).is_some());

        let not_placed = pack(&mut bin, vec![piece]);

        assert_eq!(not_placed.len(), 1);
        assert_eq!(not_placed[0].id, 1);
        assert_eq!(not_placed[0].rotation(), 0.0);
        assert_eq!(
            not_placed[0].bbox(),
            Rect {
                x_min: 0.0,
                y_min: 0.0,
                x_max: 8.0,
                y_max: 3.0
            }
        );
        assert_eq!(bin.placed_pieces().len(), 1);
        assert_eq!(bin.free_space().free_rects(), FreeSpaceTracker::new(3.0, 10.0).free_rects());
    }

    #[test]
    fn adjacent_fractional_pieces_are_all_placed() {
        let mut bin = Bin::new(0, 1.0, 0.9);
        let pieces = (0..9)
            .map(|id| Piece::from_rectangle(0.3, 0.3, id).unwrap())
            .collect();

        let not_placed = pack(&mut bin, pieces);

        assert!(not_placed.is_empty());
        assert_eq!(bin.placed_pieces().len(), 9);
        assert!(assertions::free_rects_are_maximal(bin.free_space()));
        assert!(assertions::free_space_is_free(&bin));
        assert!(assertions::bin_is_overlap_free(&bin));
        assert!(assertions::pieces_within_bin(&bin));
    }
}
