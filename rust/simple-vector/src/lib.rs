//! A minimal dynamic array built on raw allocation.
//!
//! [`SimpleVector`] stores its elements in a single [`ArrayPtr`] block and
//! tracks size and capacity on its own. It grows by doubling, supports
//! position-based insertion and removal, deep copies through `Clone`, and
//! constant-time moves and swaps.
//!
//! ```
//! use simple_vector::{SimpleVector, simple_vector};
//!
//! let mut v = simple_vector![1, 2, 3];
//! v.insert(1, 42);
//! assert_eq!(v, [1, 42, 2, 3]);
//! v.erase(1);
//! assert_eq!(v, [1, 2, 3]);
//!
//! let mut w: SimpleVector<i32> = SimpleVector::new();
//! w.push_back(7);
//! assert_eq!(w.capacity(), 1);
//! ```
//!
//! [`ArrayPtr`]: simple_vector_array_ptr::ArrayPtr

pub mod into_iter;
mod macros;
pub mod reserve;
pub mod simple_vector;

pub use into_iter::IntoIter;
pub use reserve::{ReserveProxy, reserve};
pub use simple_vector::{GROWTH_FACTOR, MIN_NON_ZERO_CAPACITY, SimpleVector};

pub use simple_vector_common::{
    Result,
    error::{Error, ErrorKind},
};
