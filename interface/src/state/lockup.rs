use solana_address::Address;
use static_assertions::const_assert_eq;

use crate::{
    error::{LockupError, LockupResult},
    state::{
        nullable::{NullableU64, NULLABLE_U64_SIZE},
        transmutable::{load, Transmutable},
        LeU64, ADDRESS_SIZE, U64_SIZE,
    },
};

pub const LOCKUP_SIZE: usize = 129;
pub const LOCKUP_ACCOUNT_DISCRIMINANT: u64 = u64::from_le_bytes(*b"lockup\0\0");

/// Byte offset of the end-timestamp flag: discriminant, amount, authority,
/// and start timestamp precede it.
const END_TIMESTAMP_FLAG_OFFSET: usize = U64_SIZE + U64_SIZE + ADDRESS_SIZE + U64_SIZE;

/// A single locked-token position.
///
/// Created by the on-chain program when tokens are locked; read-only from the
/// client's perspective; closed once fully unlocked and withdrawn.
#[repr(C)]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Lockup {
    /// The lockup account's discriminant as LE bytes.
    discriminant: LeU64,
    /// The u64 amount of tokens held by the lockup as LE bytes.
    amount: LeU64,
    /// The authority that may unlock and withdraw the position.
    pub authority: Address,
    /// The u64 start of the lockup period as LE bytes.
    lockup_start_timestamp: LeU64,
    /// The end of the lockup period; absent while the lockup is open-ended.
    lockup_end_timestamp: NullableU64,
    /// The mint of the locked token.
    pub mint: Address,
    /// The metadata account attached to the position.
    pub metadata: Address,
}

impl Lockup {
    pub fn new(
        amount: u64,
        authority: Address,
        lockup_start_timestamp: u64,
        lockup_end_timestamp: Option<u64>,
        mint: Address,
        metadata: Address,
    ) -> Self {
        Lockup {
            discriminant: LOCKUP_ACCOUNT_DISCRIMINANT.to_le_bytes(),
            amount: amount.to_le_bytes(),
            authority,
            lockup_start_timestamp: lockup_start_timestamp.to_le_bytes(),
            lockup_end_timestamp: NullableU64::new(lockup_end_timestamp),
            mint,
            metadata,
        }
    }

    /// Decodes a lockup record from raw account bytes.
    #[inline(always)]
    pub fn from_bytes(bytes: &[u8]) -> Result<&Self, LockupError> {
        load::<Self>(bytes)
    }

    #[inline(always)]
    pub fn amount(&self) -> u64 {
        u64::from_le_bytes(self.amount)
    }

    #[inline(always)]
    pub fn lockup_start_timestamp(&self) -> u64 {
        u64::from_le_bytes(self.lockup_start_timestamp)
    }

    #[inline(always)]
    pub fn lockup_end_timestamp(&self) -> Option<u64> {
        self.lockup_end_timestamp.get()
    }

    #[inline(always)]
    pub fn as_bytes(&self) -> &[u8; LOCKUP_SIZE] {
        // Safety:
        // - `Lockup` is always `LOCKUP_SIZE` bytes; size and alignment are
        //   checked with const asserts.
        // - All fields are byte-safe, `Copy`, non-pointer byte arrays.
        unsafe { &*(self as *const Self as *const [u8; LOCKUP_SIZE]) }
    }
}

// Safety:
//
// - Stable layout with `#[repr(C)]`.
// - `size_of` and `align_of` are checked below.
// - `validate_bit_patterns` checks the discriminant and the end-timestamp
//   flag byte; every other field accepts all bit patterns.
unsafe impl Transmutable for Lockup {
    const LEN: usize = LOCKUP_SIZE;

    fn validate_bit_patterns(bytes: &[u8]) -> LockupResult {
        let discriminant = u64::from_le_bytes(
            bytes[..U64_SIZE]
                .try_into()
                .map_err(|_| LockupError::TruncatedInput)?,
        );
        if discriminant != LOCKUP_ACCOUNT_DISCRIMINANT {
            return Err(LockupError::DiscriminatorMismatch);
        }
        NullableU64::validate_flag(bytes[END_TIMESTAMP_FLAG_OFFSET])
    }
}

const_assert_eq!(LOCKUP_SIZE, size_of::<Lockup>());
const_assert_eq!(1, align_of::<Lockup>());
const_assert_eq!(
    LOCKUP_SIZE,
    U64_SIZE + U64_SIZE + ADDRESS_SIZE + U64_SIZE + NULLABLE_U64_SIZE + ADDRESS_SIZE + ADDRESS_SIZE
);
