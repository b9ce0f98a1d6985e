/// Numeric conversion helpers.
///
/// This module promotes integers to floats, compares integers with floats
/// exactly, and turns runtime integers into bounded repetition counts.
pub mod num;
