pub mod lockup;
pub mod lockup_pool;
pub mod nullable;
pub mod transmutable;

use solana_address::Address;

pub const U64_SIZE: usize = core::mem::size_of::<u64>();
pub const ADDRESS_SIZE: usize = core::mem::size_of::<Address>();

/// A u64 stored as little-endian bytes.
pub type LeU64 = [u8; U64_SIZE];
