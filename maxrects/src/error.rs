use thiserror::Error;

/// Errors raised while allocating pieces to bins.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum PackError {
    /// The bin dimensions are not finite and strictly positive.
    #[error("invalid bin dimensions: {width} x {height}")]
    InvalidBinDimensions { width: f64, height: f64 },

    /// The geometry of a piece could not be constructed.
    #[error("invalid piece {id}: {reason}")]
    InvalidPiece { id: usize, reason: String },

    /// The piece does not fit inside an empty bin, in either orientation.
    #[error(
        "piece {id} ({width} x {height}) exceeds the bin ({bin_width} x {bin_height}) in both orientations"
    )]
    PieceExceedsBinCapacity {
        id: usize,
        width: f64,
        height: f64,
        bin_width: f64,
        bin_height: f64,
    },

    /// A packing pass on a fresh bin did not place a single piece.
    #[error("no piece could be placed in bin {bin_index}, {} pieces remaining: {remaining:?}", remaining.len())]
    NoProgressDetected {
        bin_index: usize,
        remaining: Vec<usize>,
    },
}

/// Errors raised while reading an instance.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum InputError {
    /// The input does not follow the expected format.
    /// `line` is 1-based, `0` refers to the end of the input.
    #[error("malformed input at line {line}: {reason}")]
    MalformedInput { line: usize, reason: String },
}
