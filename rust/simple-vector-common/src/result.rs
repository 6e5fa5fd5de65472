pub type Result<T> = std::result::Result<T, crate::error::Error>;

/// Checks that `index` addresses one of the `len` live elements.
#[inline]
pub fn verify_index(index: usize, len: usize) -> Result<()> {
    if index < len {
        Ok(())
    } else {
        out_of_range(index, len)
    }
}

#[cold]
pub fn out_of_range<T>(index: usize, len: usize) -> Result<T> {
    Err(crate::error::Error::out_of_range(index, len))
}
