mod bin;
mod free_space;
mod piece;
mod solution;

#[doc(inline)]
pub use bin::Bin;
#[doc(inline)]
pub use free_space::FitCandidate;
#[doc(inline)]
pub use free_space::FreeSpaceTracker;
#[doc(inline)]
pub use piece::Piece;
#[doc(inline)]
pub use solution::PackingResult;
