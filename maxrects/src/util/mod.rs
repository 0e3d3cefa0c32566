/// Checks on the state of bins and free space, used in `debug_assert!()` blocks and tests
pub mod assertions;
mod fpa;

#[doc(inline)]
pub use fpa::FPA;
