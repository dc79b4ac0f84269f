//! Individual value generators for each value kind.

pub mod numeric;
pub mod timestamp;
