use crate::entities::{FreeSpaceTracker, Piece};
use crate::geometry::primitives::Rect;

/// Fixed-size rectangular container, spanning `[0, width] x [0, height]`.
#[derive(Clone, Debug)]
pub struct Bin {
    /// Index of the bin in the [`PackingResult`](crate::entities::PackingResult)
    pub id: usize,
    pub width: f64,
    pub height: f64,
    pub(crate) placed: Vec<Piece>,
    pub(crate) free_space: FreeSpaceTracker,
}

impl Bin {
    pub fn new(id: usize, width: f64, height: f64) -> Self {
        Self {
            id,
            width,
            height,
            placed: vec![],
            free_space: FreeSpaceTracker::new(width, height),
        }
    }

    /// Pieces in the order they were placed
    pub fn placed_pieces(&self) -> &[Piece] {
        &self.placed
    }

    pub fn free_space(&self) -> &FreeSpaceTracker {
        &self.free_space
    }

    pub fn bbox(&self) -> Rect {
        Rect {
            x_min: 0.0,
            y_min: 0.0,
            x_max: self.width,
            y_max: self.height,
        }
    }

    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    /// Area of the placed pieces divided by the area of the bin
    pub fn density(&self) -> f64 {
        self.placed.iter().map(|p| p.area()).sum::<f64>() / self.area()
    }

    pub fn is_empty(&self) -> bool {
        self.placed.is_empty()
    }
}
