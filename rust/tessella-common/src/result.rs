pub type Result<T> = std::result::Result<T, crate::error::Error>;

/// Verifies that `index` addresses one of `len` live elements.
#[inline]
pub fn verify_index(index: usize, len: usize) -> Result<()> {
    if index < len {
        Ok(())
    } else {
        index_out_of_bounds(index, len)
    }
}

#[cold]
pub fn index_out_of_bounds(index: usize, len: usize) -> Result<()> {
    Err(crate::error::ErrorKind::IndexOutOfBounds { index, len }.into())
}

#[cfg(test)]
mod tests {
    use crate::error::ErrorKind;

    use super::*;

    #[test]
    fn test_verify_index_within_bounds() {
        verify_index(0, 1).unwrap();
        verify_index(4, 5).unwrap();
    }

    #[test]
    fn test_verify_index_out_of_bounds() {
        for (index, len) in [(0, 0), (5, 5), (6, 5)] {
            let err = verify_index(index, len).unwrap_err();
            assert!(matches!(
                err.kind(),
                ErrorKind::IndexOutOfBounds { .. }
            ));
        }
    }
}
