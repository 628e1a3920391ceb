use static_assertions::const_assert_eq;

use crate::{
    error::{LockupError, LockupResult},
    state::{LeU64, U64_SIZE},
};

pub const NULLABLE_U64_SIZE: usize = 9;

const FLAG_ABSENT: u8 = 0;
const FLAG_PRESENT: u8 = 1;

/// An optional u64 with an explicit present/absent flag byte, encoded in a
/// fixed 9 bytes regardless of presence.
///
/// The value bytes are zeroed when absent so that equal logical values always
/// have equal encodings.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NullableU64 {
    flag: u8,
    value: LeU64,
}

impl NullableU64 {
    pub const NONE: Self = NullableU64 {
        flag: FLAG_ABSENT,
        value: [0; U64_SIZE],
    };

    pub fn new(value: Option<u64>) -> Self {
        match value {
            Some(v) => NullableU64 {
                flag: FLAG_PRESENT,
                value: v.to_le_bytes(),
            },
            None => Self::NONE,
        }
    }

    #[inline(always)]
    pub fn get(&self) -> Option<u64> {
        (self.flag == FLAG_PRESENT).then(|| u64::from_le_bytes(self.value))
    }

    /// Rejects flag bytes outside {0, 1}.
    #[inline(always)]
    pub fn validate_flag(flag: u8) -> LockupResult {
        match flag {
            FLAG_ABSENT | FLAG_PRESENT => Ok(()),
            _ => Err(LockupError::InvalidEncoding),
        }
    }
}

const_assert_eq!(NULLABLE_U64_SIZE, size_of::<NullableU64>());
const_assert_eq!(1, align_of::<NullableU64>());

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_has_zeroed_value_bytes() {
        assert_eq!(NullableU64::new(None), NullableU64::NONE);
        assert_eq!(NullableU64::NONE.get(), None);
    }

    #[test]
    fn test_present_round_trips() {
        let nullable = NullableU64::new(Some(86_400));
        assert_eq!(nullable.get(), Some(86_400));
    }

    #[test]
    fn test_flag_domain() {
        assert!(NullableU64::validate_flag(0).is_ok());
        assert!(NullableU64::validate_flag(1).is_ok());
        assert_eq!(
            NullableU64::validate_flag(2),
            Err(LockupError::InvalidEncoding)
        );
        assert_eq!(
            NullableU64::validate_flag(255),
            Err(LockupError::InvalidEncoding)
        );
    }
}
