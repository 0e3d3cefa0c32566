use std::time::Duration;

use crate::entities::{Bin, PackingResult};
use crate::io::ext_repr::{ExtBin, ExtPlacedPiece, ExtSolution};

/// Exports a bin and the pieces placed in it
pub fn export_bin(bin: &Bin) -> ExtBin {
    let placed_pieces = bin
        .placed_pieces()
        .iter()
        .map(|p| {
            let bbox = p.bbox();
            ExtPlacedPiece {
                id: p.id,
                x: bbox.x_min,
                y: bbox.y_min,
                width: bbox.width(),
                height: bbox.height(),
                rotation: p.rotation(),
            }
        })
        .collect();

    ExtBin {
        id: bin.id,
        width: bin.width,
        height: bin.height,
        placed_pieces,
        density: bin.density(),
    }
}

/// Exports a complete packing result out of the library
pub fn export_solution(result: &PackingResult, run_time: Duration) -> ExtSolution {
    ExtSolution {
        n_bins: result.n_bins(),
        density: result.density(),
        run_time_ms: run_time.as_millis() as u64,
        bins: result.bins.iter().map(export_bin).collect(),
    }
}
