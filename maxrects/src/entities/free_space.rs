use itertools::Itertools;
use log::trace;

use crate::geometry::primitives::Rect;

/// A free rectangle a piece fits into, and whether the piece has to be rotated by 90° to do so.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FitCandidate {
    /// Index of the free rectangle in [`FreeSpaceTracker::free_rects`]
    pub index: usize,
    pub rotated: bool,
}

/// Unused space of a bin, as a list of maximal free rectangles.
///
/// Free rectangles may overlap each other: only rectangles fully contained in another one are pruned.
/// Coordinates follow the screen convention, y grows downward. "Above" a rectangle means smaller y.
///
/// Every mutation rebuilds the list from the previous one and swaps it in.
#[derive(Clone, Debug)]
pub struct FreeSpaceTracker {
    free_rects: Vec<Rect>,
}

impl FreeSpaceTracker {
    /// A single free rectangle covering `[0, width] x [0, height]`
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            free_rects: vec![Rect {
                x_min: 0.0,
                y_min: 0.0,
                x_max: width,
                y_max: height,
            }],
        }
    }

    pub fn free_rects(&self) -> &[Rect] {
        &self.free_rects
    }

    /// Best Short Side Fit search over both orientations of `bbox`.
    ///
    /// Free rectangles are scanned from the most recently added to the oldest, the un-rotated
    /// orientation before the rotated one. A candidate only replaces the current best one if its
    /// slack is strictly smaller.
    pub fn find_candidate(&self, bbox: &Rect) -> Option<FitCandidate> {
        let (w, h) = (bbox.width(), bbox.height());
        let mut best: Option<(FitCandidate, f64)> = None;

        for (index, free) in self.free_rects.iter().enumerate().rev() {
            let (free_w, free_h) = (free.width(), free.height());
            let orientations = [
                (false, w, h), //as is
                (true, h, w),  //rotated by 90°
            ];
            for (rotated, piece_w, piece_h) in orientations {
                if piece_w <= free_w && piece_h <= free_h {
                    let slack = f64::min(free_w - piece_w, free_h - piece_h);
                    if best.is_none_or(|(_, best_slack)| slack < best_slack) {
                        best = Some((FitCandidate { index, rotated }, slack));
                    }
                }
            }
        }

        best.map(|(candidate, _)| candidate)
    }

    /// Replaces the free rectangle at `used_index` by its remainders above and to the right of `placed`.
    pub fn split_used(&mut self, used_index: usize, placed: &Rect) {
        self.free_rects = split_used(&self.free_rects, used_index, placed);
    }

    /// Replaces every free rectangle whose interior intersects `placed` by its remainders around the intersection.
    pub fn recompute_overlaps(&mut self, placed: &Rect) {
        self.free_rects = recompute_overlaps(&self.free_rects, placed);
    }

    /// Removes every free rectangle contained in another one.
    /// The remaining rectangles are ordered by ascending area.
    pub fn prune_non_maximal(&mut self) {
        self.free_rects = prune_non_maximal(&self.free_rects);
    }

    /// Registers a piece with bounding box `placed` inside the free rectangle at `used_index`.
    pub fn occupy(&mut self, used_index: usize, placed: &Rect) {
        self.split_used(used_index, placed);
        self.recompute_overlaps(placed);
        self.prune_non_maximal();
        trace!(
            "[FREE] {} free rectangles after occupying {:?}",
            self.free_rects.len(),
            placed
        );
    }
}

/// The placed piece is anchored to the left edge of the used rectangle, so only the remainders above
/// and to the right are emitted. The remainders border `placed` and are never subdivided further.
fn split_used(free_rects: &[Rect], used_index: usize, placed: &Rect) -> Vec<Rect> {
    let used = free_rects[used_index];
    let mut new_rects = Vec::with_capacity(free_rects.len() + 1);
    new_rects.extend(
        free_rects
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != used_index)
            .map(|(_, r)| *r),
    );

    //above
    if placed.y_min - used.y_min > 0.0 {
        new_rects.push(Rect {
            x_min: used.x_min,
            y_min: used.y_min,
            x_max: used.x_max,
            y_max: placed.y_min,
        });
    }
    //right
    if used.x_max - placed.x_max > 0.0 {
        new_rects.push(Rect {
            x_min: placed.x_max,
            y_min: used.y_min,
            x_max: used.x_max,
            y_max: used.y_max,
        });
    }
    new_rects
}

/// Untouched rectangles keep their relative order, the remainders are appended after them.
fn recompute_overlaps(free_rects: &[Rect], placed: &Rect) -> Vec<Rect> {
    let mut kept = Vec::with_capacity(free_rects.len());
    let mut remainders = vec![];

    for free in free_rects {
        let Some(inter) = Rect::intersection(*free, *placed) else {
            kept.push(*free);
            continue;
        };
        //top
        if inter.y_min - free.y_min > 0.0 {
            remainders.push(Rect {
                y_max: inter.y_min,
                ..*free
            });
        }
        //left
        if inter.x_min - free.x_min > 0.0 {
            remainders.push(Rect {
                x_max: inter.x_min,
                ..*free
            });
        }
        //bottom
        if free.y_max - inter.y_max > 0.0 {
            remainders.push(Rect {
                y_min: inter.y_max,
                ..*free
            });
        }
        //right
        if free.x_max - inter.x_max > 0.0 {
            remainders.push(Rect {
                x_min: inter.x_max,
                ..*free
            });
        }
    }

    kept.extend(remainders);
    kept
}

fn prune_non_maximal(free_rects: &[Rect]) -> Vec<Rect> {
    //stable sort, equal areas keep their relative order
    let sorted = free_rects
        .iter()
        .copied()
        .sorted_by(|a, b| a.area().total_cmp(&b.area()))
        .collect_vec();

    //an enclosing rectangle may compute the same area and precede the one it encloses,
    //so every other rectangle is checked. Of exact duplicates only the last one survives.
    sorted
        .iter()
        .enumerate()
        .filter(|&(i, r)| {
            !sorted
                .iter()
                .enumerate()
                .any(|(j, other)| j != i && other.encloses(r) && (other != r || j > i))
        })
        .map(|(_, r)| *r)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::assertions;

    fn rect(x: f64, y: f64, w: f64, h: f64) -> Rect {
        Rect::from_xywh(x, y, w, h).unwrap()
    }

    #[test]
    fn candidate_prefers_unrotated_on_tie() {
        let tracker = FreeSpaceTracker::new(10.0, 10.0);
        let c = tracker.find_candidate(&rect(0.0, 0.0, 6.0, 4.0)).unwrap();
        assert_eq!(c, FitCandidate { index: 0, rotated: false });
    }

    #[test]
    fn candidate_rotates_when_only_rotation_fits() {
        let tracker = FreeSpaceTracker::new(5.0, 10.0);
        let c = tracker.find_candidate(&rect(0.0, 0.0, 8.0, 3.0)).unwrap();
        assert!(c.rotated);
        assert!(tracker.find_candidate(&rect(0.0, 0.0, 11.0, 3.0)).is_none());
    }

    #[test]
    fn candidate_scan_is_reversed_and_strict() {
        let tracker = FreeSpaceTracker {
            free_rects: vec![rect(0.0, 0.0, 5.0, 5.0), rect(5.0, 0.0, 5.0, 5.0)],
        };
        //equal slack in both: the last rectangle is scanned first and kept
        let c = tracker.find_candidate(&rect(0.0, 0.0, 4.0, 4.0)).unwrap();
        assert_eq!(c.index, 1);
    }

    #[test]
    fn split_emits_above_and_right() {
        let mut tracker = FreeSpaceTracker::new(10.0, 10.0);
        tracker.split_used(0, &rect(0.0, 6.0, 6.0, 4.0));
        assert_eq!(
            tracker.free_rects(),
            &[rect(0.0, 0.0, 10.0, 6.0), rect(6.0, 0.0, 4.0, 10.0)]
        );
    }

    #[test]
    fn split_skips_empty_remainders() {
        let mut tracker = FreeSpaceTracker::new(10.0, 10.0);
        tracker.split_used(0, &rect(0.0, 0.0, 10.0, 10.0));
        assert!(tracker.free_rects().is_empty());
    }

    #[test]
    fn recompute_cuts_four_slices() {
        let mut tracker = FreeSpaceTracker::new(10.0, 10.0);
        tracker.recompute_overlaps(&rect(4.0, 4.0, 2.0, 2.0));
        assert_eq!(
            tracker.free_rects(),
            &[
                rect(0.0, 0.0, 10.0, 4.0),
                rect(0.0, 0.0, 4.0, 10.0),
                rect(0.0, 6.0, 10.0, 4.0),
                rect(6.0, 0.0, 4.0, 10.0),
            ]
        );
    }

    #[test]
    fn recompute_ignores_touching_rectangles() {
        let mut tracker = FreeSpaceTracker {
            free_rects: vec![rect(0.0, 0.0, 10.0, 6.0)],
        };
        tracker.recompute_overlaps(&rect(0.0, 6.0, 6.0, 4.0));
        assert_eq!(tracker.free_rects(), &[rect(0.0, 0.0, 10.0, 6.0)]);
    }

    #[test]
    fn prune_removes_contained_and_duplicates() {
        let mut tracker = FreeSpaceTracker {
            free_rects: vec![
                rect(0.0, 0.0, 10.0, 10.0),
                rect(1.0, 1.0, 2.0, 2.0),
                rect(0.0, 0.0, 10.0, 10.0),
                rect(5.0, 5.0, 10.0, 1.0),
            ],
        };
        tracker.prune_non_maximal();
        assert_eq!(
            tracker.free_rects(),
            &[rect(5.0, 5.0, 10.0, 1.0), rect(0.0, 0.0, 10.0, 10.0)]
        );
        assert!(assertions::free_rects_are_maximal(&tracker));
    }

    #[test]
    fn prune_removes_enclosed_rectangle_of_equal_area() {
        //both areas round to 0.13, the enclosing rectangle comes first in the stable order
        let enclosing = Rect {
            x_min: 0.1,
            y_min: 0.0,
            x_max: 0.2,
            y_max: 1.3,
        };
        let enclosed = Rect {
            x_min: 0.10000000000000002,
            ..enclosing
        };
        assert_eq!(enclosing.area(), enclosed.area());

        let mut tracker = FreeSpaceTracker {
            free_rects: vec![enclosing, enclosed],
        };
        tracker.prune_non_maximal();
        assert_eq!(tracker.free_rects(), &[enclosing]);
        assert!(assertions::free_rects_are_maximal(&tracker));
    }

    #[test]
    fn occupy_with_fractional_dimensions_keeps_free_rects_maximal() {
        let mut tracker = FreeSpaceTracker::new(7.3, 4.1);
        let pieces = [(2.5, 1.3), (1.2, 3.7), (0.7, 0.9), (3.3, 0.4), (2.5, 1.3), (0.1, 2.2)];
        for (w, h) in pieces {
            let Some(candidate) = tracker.find_candidate(&rect(0.0, 0.0, w, h)) else {
                continue;
            };
            let (w, h) = match candidate.rotated {
                true => (h, w),
                false => (w, h),
            };
            let free = tracker.free_rects()[candidate.index];
            let placed = Rect {
                x_min: free.x_min,
                y_min: free.y_max - h,
                x_max: free.x_min + w,
                y_max: free.y_max - h + h,
            };
            tracker.occupy(candidate.index, &placed);
            assert!(assertions::free_rects_are_maximal(&tracker));
        }
    }
}
