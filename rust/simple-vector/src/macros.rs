/// Creates a [`SimpleVector`](crate::SimpleVector) from a list of elements or
/// from a value and a count.
///
/// The list form yields a vector whose length and capacity both equal the
/// number of elements:
///
/// ```
/// use simple_vector::simple_vector;
///
/// let v = simple_vector![1, 2, 3];
/// assert_eq!(v.len(), 3);
/// assert_eq!(v.capacity(), 3);
///
/// let w = simple_vector![42; 4];
/// assert_eq!(w, [42, 42, 42, 42]);
/// ```
#[macro_export]
macro_rules! simple_vector {
    () => {
        $crate::SimpleVector::new()
    };
    ($value:expr; $n:expr) => {
        $crate::SimpleVector::from_value($n, $value)
    };
    ($($x:expr),+ $(,)?) => {
        $crate::SimpleVector::from([$($x),+])
    };
}
