use solana_address::Address;
use static_assertions::const_assert_eq;

use crate::{
    error::{LockupError, LockupResult},
    state::{
        transmutable::{load, load_mut_unchecked, Transmutable},
        LeU64, ADDRESS_SIZE, U64_SIZE,
    },
};

pub const LOCKUP_POOL_CAPACITY: usize = 1024;
pub const LOCKUP_POOL_ENTRY_SIZE: usize = 40;
pub const LOCKUP_POOL_SIZE: usize = 40976;
pub const LOCKUP_POOL_ACCOUNT_DISCRIMINANT: u64 = u64::from_le_bytes(*b"lockpool");

/// One slot of the lockup pool: the locked amount and the lockup account it
/// belongs to.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LockupPoolEntry {
    /// The u64 locked amount as LE bytes.
    amount: LeU64,
    /// The lockup account holding the position.
    pub lockup: Address,
}

impl LockupPoolEntry {
    /// The all-zero image unoccupied slots hold.
    pub const VACANT: Self = LockupPoolEntry {
        amount: [0; U64_SIZE],
        lockup: Address::new_from_array([0; ADDRESS_SIZE]),
    };

    pub fn new(amount: u64, lockup: Address) -> Self {
        LockupPoolEntry {
            amount: amount.to_le_bytes(),
            lockup,
        }
    }

    #[inline(always)]
    pub fn amount(&self) -> u64 {
        u64::from_le_bytes(self.amount)
    }
}

/// A fixed-capacity table of lockup positions. The slot count is constant;
/// occupancy is tracked separately in `entries_len`, so the encoded size is
/// always [`LOCKUP_POOL_SIZE`] bytes.
///
/// Entries are appended by lockup operations and logically removed by
/// unlock/withdraw operations; which slots are semantically live is the
/// on-chain program's concern, not this codec's.
#[repr(C)]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LockupPool {
    /// The pool account's discriminant as LE bytes.
    discriminant: LeU64,
    /// All slots, occupied or vacant.
    entries: [LockupPoolEntry; LOCKUP_POOL_CAPACITY],
    /// The u64 number of occupied slots as LE bytes.
    entries_len: LeU64,
}

impl LockupPool {
    /// Writes a full pool image over `bytes` holding the given entries.
    ///
    /// Fails with [`LockupError::CapacityExceeded`] when more than
    /// [`LOCKUP_POOL_CAPACITY`] entries are supplied. Vacant slots are
    /// zero-filled so occupancy never changes the encoding of the rest.
    pub fn initialize<'a>(
        bytes: &'a mut [u8],
        entries: &[LockupPoolEntry],
    ) -> Result<&'a mut Self, LockupError> {
        if entries.len() > LOCKUP_POOL_CAPACITY {
            return Err(LockupError::CapacityExceeded);
        }

        let pool = load_mut_unchecked::<Self>(bytes)?;
        pool.discriminant = LOCKUP_POOL_ACCOUNT_DISCRIMINANT.to_le_bytes();
        pool.entries[..entries.len()].copy_from_slice(entries);
        pool.entries[entries.len()..].fill(LockupPoolEntry::VACANT);
        pool.entries_len = (entries.len() as u64).to_le_bytes();
        Ok(pool)
    }

    /// Decodes a pool record from raw account bytes.
    #[inline(always)]
    pub fn from_bytes(bytes: &[u8]) -> Result<&Self, LockupError> {
        load::<Self>(bytes)
    }

    #[inline(always)]
    pub fn entries_len(&self) -> u64 {
        u64::from_le_bytes(self.entries_len)
    }

    /// All [`LOCKUP_POOL_CAPACITY`] slots, occupied or vacant.
    #[inline(always)]
    pub fn entries(&self) -> &[LockupPoolEntry; LOCKUP_POOL_CAPACITY] {
        &self.entries
    }

    /// The occupied prefix of the slot array.
    #[inline(always)]
    pub fn live_entries(&self) -> &[LockupPoolEntry] {
        &self.entries[..self.entries_len() as usize]
    }

    #[inline(always)]
    pub fn as_bytes(&self) -> &[u8; LOCKUP_POOL_SIZE] {
        // Safety:
        // - `LockupPool` is always `LOCKUP_POOL_SIZE` bytes; size and
        //   alignment are checked with const asserts.
        // - All fields are byte-safe, `Copy`, non-pointer byte arrays.
        unsafe { &*(self as *const Self as *const [u8; LOCKUP_POOL_SIZE]) }
    }
}

// Safety:
//
// - Stable layout with `#[repr(C)]`.
// - `size_of` and `align_of` are checked below.
// - `validate_bit_patterns` checks the discriminant and the occupancy bound;
//   entry slots accept all bit patterns.
unsafe impl Transmutable for LockupPool {
    const LEN: usize = LOCKUP_POOL_SIZE;

    fn validate_bit_patterns(bytes: &[u8]) -> LockupResult {
        let discriminant = u64::from_le_bytes(
            bytes[..U64_SIZE]
                .try_into()
                .map_err(|_| LockupError::TruncatedInput)?,
        );
        if discriminant != LOCKUP_POOL_ACCOUNT_DISCRIMINANT {
            return Err(LockupError::DiscriminatorMismatch);
        }
        let entries_len = u64::from_le_bytes(
            bytes[LOCKUP_POOL_SIZE - U64_SIZE..]
                .try_into()
                .map_err(|_| LockupError::TruncatedInput)?,
        );
        if entries_len > LOCKUP_POOL_CAPACITY as u64 {
            return Err(LockupError::InvalidEncoding);
        }
        Ok(())
    }
}

const_assert_eq!(LOCKUP_POOL_ENTRY_SIZE, size_of::<LockupPoolEntry>());
const_assert_eq!(1, align_of::<LockupPoolEntry>());
const_assert_eq!(LOCKUP_POOL_SIZE, size_of::<LockupPool>());
const_assert_eq!(1, align_of::<LockupPool>());
const_assert_eq!(
    LOCKUP_POOL_SIZE,
    U64_SIZE + LOCKUP_POOL_CAPACITY * LOCKUP_POOL_ENTRY_SIZE + U64_SIZE
);
