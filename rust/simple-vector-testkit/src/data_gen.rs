//! Data generation utilities for testing.

use simple_vector::SimpleVector;

/// Builds a vector of `size` elements holding `1, 2, ..., size`.
///
/// The vector is created with `size` default elements which are then
/// overwritten in place, so both its length and capacity equal `size`.
pub fn generate_vector(size: usize) -> SimpleVector<i32> {
    let mut v = SimpleVector::with_size(size);
    for (item, value) in v.iter_mut().zip(1..) {
        *item = value;
    }
    v
}
