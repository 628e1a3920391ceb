use crate::error::{LockupError, LockupResult};

/// Marker trait for fixed-layout records viewed directly over their encoded
/// bytes.
///
/// # Safety
///
/// Implementor guarantees:
/// - A stable layout (`#[repr(C)]`) built exclusively from byte arrays and
///   byte-array wrappers, so every bit pattern is memory-safe.
/// - `size_of::<Self>() == LEN`
/// - `align_of::<Self>() == 1`
/// - [`validate_bit_patterns`](Transmutable::validate_bit_patterns) rejects
///   every byte image that is not a semantically valid `Self`.
pub unsafe trait Transmutable: Sized {
    /// The cumulative size in bytes of all fields in the struct.
    const LEN: usize;

    /// Checks discriminants, flag bytes, and bounds before a reference to
    /// `Self` is handed out. `bytes` is guaranteed to be `LEN` long.
    fn validate_bit_patterns(bytes: &[u8]) -> LockupResult;
}

/// Returns a reference to a `T: Transmutable` over the given bytes after
/// checking the byte length and bit patterns.
///
/// Records are fixed-size, so the length check is strict in both directions.
#[inline(always)]
pub fn load<T: Transmutable>(bytes: &[u8]) -> Result<&T, LockupError> {
    check_len::<T>(bytes.len())?;
    T::validate_bit_patterns(bytes)?;
    // Safety: The layout guarantees of `Transmutable` plus the length and bit
    // pattern checks above make this cast sound.
    Ok(unsafe { &*(bytes.as_ptr() as *const T) })
}

/// Mutable counterpart of [`load`].
#[inline(always)]
pub fn load_mut<T: Transmutable>(bytes: &mut [u8]) -> Result<&mut T, LockupError> {
    check_len::<T>(bytes.len())?;
    T::validate_bit_patterns(bytes)?;
    // Safety: Same argument as `load`.
    Ok(unsafe { &mut *(bytes.as_mut_ptr() as *mut T) })
}

/// Returns a mutable reference after the length check only, skipping bit
/// pattern validation. For initializing a record over a fresh buffer whose
/// discriminant has not been written yet.
#[inline(always)]
pub fn load_mut_unchecked<T: Transmutable>(bytes: &mut [u8]) -> Result<&mut T, LockupError> {
    check_len::<T>(bytes.len())?;
    // Safety: `Transmutable` types are plain byte arrays, so any bit pattern
    // is memory-safe; only semantic validity is skipped here.
    Ok(unsafe { &mut *(bytes.as_mut_ptr() as *mut T) })
}

#[inline(always)]
fn check_len<T: Transmutable>(len: usize) -> LockupResult {
    if len < T::LEN {
        return Err(LockupError::TruncatedInput);
    }
    if len > T::LEN {
        return Err(LockupError::TrailingBytes);
    }
    Ok(())
}
