use std::collections::HashSet;

use itertools::Itertools;
use log::error;

use crate::entities::{Bin, FreeSpaceTracker, PackingResult};
use crate::geometry::primitives::Rect;
use crate::util::FPA;

//Various checks to verify correctness of the state of the system
//Used in debug_assert!() blocks

/// No free rectangle is degenerate or enclosed by another one
pub fn free_rects_are_maximal(tracker: &FreeSpaceTracker) -> bool {
    let free_rects = tracker.free_rects();
    if let Some(r) = free_rects
        .iter()
        .find(|r| !(r.width() > 0.0 && r.height() > 0.0))
    {
        error!("[FREE] degenerate free rectangle: {r:?}");
        return false;
    }
    for (i, j) in (0..free_rects.len()).tuple_combinations() {
        let (a, b) = (&free_rects[i], &free_rects[j]);
        if a.encloses(b) || b.encloses(a) {
            error!("[FREE] non-maximal free rectangles: {a:?} and {b:?}");
            return false;
        }
    }
    true
}

/// No free rectangle shares interior with the bounding box of a placed piece
pub fn free_space_is_free(bin: &Bin) -> bool {
    for (free, piece) in bin
        .free_space()
        .free_rects()
        .iter()
        .cartesian_product(bin.placed_pieces())
    {
        if Rect::intersection(*free, piece.bbox()).is_some() {
            error!(
                "[FREE] free rectangle {free:?} overlaps piece {} in bin {}",
                piece.id, bin.id
            );
            return false;
        }
    }
    true
}

/// No two placed pieces overlap
pub fn bin_is_overlap_free(bin: &Bin) -> bool {
    for (a, b) in bin.placed_pieces().iter().tuple_combinations() {
        if a.overlaps(b) {
            error!("[PACK] pieces {} and {} overlap in bin {}", a.id, b.id, bin.id);
            return false;
        }
    }
    true
}

/// Every placed piece lies within the bounds of its bin
pub fn pieces_within_bin(bin: &Bin) -> bool {
    let bin_bbox = bin.bbox();
    for piece in bin.placed_pieces() {
        let bbox = piece.bbox();
        let inside = FPA(bbox.x_min) >= FPA(bin_bbox.x_min)
            && FPA(bbox.y_min) >= FPA(bin_bbox.y_min)
            && FPA(bbox.x_max) <= FPA(bin_bbox.x_max)
            && FPA(bbox.y_max) <= FPA(bin_bbox.y_max);
        if !inside {
            error!("[PACK] piece {} exceeds bin {}: {bbox:?}", piece.id, bin.id);
            return false;
        }
    }
    true
}

/// Every id in `input_ids` is placed exactly once and nothing else is placed
pub fn result_conserves_pieces(result: &PackingResult, input_ids: &[usize]) -> bool {
    let placed = result.placed_ids().collect_vec();
    let unique = placed.iter().copied().collect::<HashSet<_>>();
    if unique.len() != placed.len() {
        error!("[ALLOC] a piece was placed more than once: {placed:?}");
        return false;
    }
    let expected = input_ids.iter().copied().collect::<HashSet<_>>();
    if unique != expected {
        error!(
            "[ALLOC] placed ids do not match the input, missing: {:?}, unexpected: {:?}",
            expected.difference(&unique).sorted().collect_vec(),
            unique.difference(&expected).sorted().collect_vec()
        );
        return false;
    }
    true
}
