use serde::{Deserialize, Serialize};

/// External representation of a packing instance: a bin size and the pieces to pack in bins of that size.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtInstance {
    /// The name of the instance
    #[serde(default)]
    pub name: String,
    pub bin_width: f64,
    pub bin_height: f64,
    pub pieces: Vec<ExtPiece>,
}

/// External representation of a [`Piece`](crate::entities::Piece):
/// a rectangle spanning `[0, width] x [0, height]`, optionally with a rectangular hole.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtPiece {
    /// Unique identifier of the piece within the instance
    pub id: usize,
    pub width: f64,
    pub height: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hole: Option<ExtHole>,
}

/// Axis-aligned rectangular hole, in the frame of the piece it is cut out of
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct ExtHole {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// External representation of a [`PackingResult`](crate::entities::PackingResult)
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtSolution {
    /// Number of bins used
    pub n_bins: usize,
    /// Sum of the area of the pieces divided by the sum of the area of the bins
    pub density: f64,
    /// The time it took to generate the solution in milliseconds
    pub run_time_ms: u64,
    pub bins: Vec<ExtBin>,
}

/// External representation of a [`Bin`](crate::entities::Bin) and its contents
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtBin {
    pub id: usize,
    pub width: f64,
    pub height: f64,
    /// The pieces placed in the bin and where they were placed
    pub placed_pieces: Vec<ExtPlacedPiece>,
    pub density: f64,
}

/// A piece placed in a bin, described by its bounding box and its rotation
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtPlacedPiece {
    /// The id of the piece in the instance
    pub id: usize,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    /// Rotation in degrees applied around the center of the bounding box, in [0, 360)
    pub rotation: f64,
}
