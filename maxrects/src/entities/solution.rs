use crate::entities::Bin;

/// Outcome of a complete allocation: every input piece is placed in exactly one of the bins.
#[derive(Clone, Debug)]
pub struct PackingResult {
    /// Bins in the order they were opened
    pub bins: Vec<Bin>,
}

impl PackingResult {
    pub fn n_bins(&self) -> usize {
        self.bins.len()
    }

    pub fn n_placed(&self) -> usize {
        self.bins.iter().map(|b| b.placed_pieces().len()).sum()
    }

    /// Ids of all placed pieces, bin by bin
    pub fn placed_ids(&self) -> impl Iterator<Item = usize> + '_ {
        self.bins
            .iter()
            .flat_map(|b| b.placed_pieces().iter().map(|p| p.id))
    }

    /// Area of all placed pieces divided by the total area of the bins
    pub fn density(&self) -> f64 {
        let piece_area = self
            .bins
            .iter()
            .flat_map(|b| b.placed_pieces())
            .map(|p| p.area())
            .sum::<f64>();
        let bin_area = self.bins.iter().map(|b| b.area()).sum::<f64>();
        match bin_area > 0.0 {
            true => piece_area / bin_area,
            false => 0.0,
        }
    }
}
