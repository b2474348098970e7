/// Creates a [`DynArray`](crate::collections::contiguous::DynArray) from a literal list of values,
/// or from a value and a count.
///
/// # Examples
/// ```
/// # use dynarray::dynarray;
/// let arr = dynarray![1, 2, 3];
/// assert_eq!(arr.as_slice(), &[1, 2, 3]);
/// assert_eq!(arr.cap(), 3);
///
/// let arr = dynarray!["x"; 2];
/// assert_eq!(arr.as_slice(), &["x", "x"]);
/// ```
#[macro_export]
macro_rules! dynarray {
    () => {
        $crate::collections::contiguous::DynArray::new()
    };
    ($value:expr; $count:expr) => {
        $crate::collections::contiguous::DynArray::repeat($value, $count)
    };
    ($($value:expr),+ $(,)?) => {
        $crate::collections::contiguous::DynArray::from([$($value),+])
    };
}
