#[cfg(test)]
pub mod tests {
    use lockup_interface::{
        error::LockupError,
        state::{
            lockup::{Lockup, LOCKUP_SIZE},
            lockup_pool::{
                LockupPool, LockupPoolEntry, LOCKUP_POOL_CAPACITY, LOCKUP_POOL_SIZE,
            },
        },
    };
    use solana_address::Address;

    fn address(byte: u8) -> Address {
        Address::new_from_array([byte; 32])
    }

    fn sample_lockup(end_timestamp: Option<u64>) -> Lockup {
        Lockup::new(
            5_000_000,
            address(1),
            1_717_000_000,
            end_timestamp,
            address(2),
            address(3),
        )
    }

    #[test]
    fn lockup_round_trip() {
        let lockup = sample_lockup(Some(1_717_086_400));
        let bytes = lockup.as_bytes();
        assert_eq!(bytes.len(), LOCKUP_SIZE);

        let decoded = Lockup::from_bytes(bytes).expect("Should decode lockup");
        assert_eq!(decoded, &lockup);
        assert_eq!(decoded.amount(), 5_000_000);
        assert_eq!(decoded.lockup_start_timestamp(), 1_717_000_000);
        assert_eq!(decoded.lockup_end_timestamp(), Some(1_717_086_400));
        assert_eq!(decoded.authority, address(1));
        assert_eq!(decoded.mint, address(2));
        assert_eq!(decoded.metadata, address(3));
    }

    #[test]
    fn lockup_size_independent_of_end_timestamp() {
        let open_ended = sample_lockup(None);
        let bounded = sample_lockup(Some(1));
        assert_eq!(open_ended.as_bytes().len(), bounded.as_bytes().len());

        let decoded = Lockup::from_bytes(open_ended.as_bytes()).expect("Should decode lockup");
        assert_eq!(decoded.lockup_end_timestamp(), None);
    }

    #[test]
    fn lockup_strict_length() {
        let lockup = sample_lockup(None);
        let bytes = lockup.as_bytes();

        assert_eq!(
            Lockup::from_bytes(&bytes[..LOCKUP_SIZE - 1]),
            Err(LockupError::TruncatedInput)
        );

        let mut long = bytes.to_vec();
        long.push(0);
        assert_eq!(Lockup::from_bytes(&long), Err(LockupError::TrailingBytes));
    }

    #[test]
    fn lockup_rejects_bad_discriminant() {
        let mut bytes = *sample_lockup(None).as_bytes();
        bytes[0] ^= 0xff;
        assert_eq!(
            Lockup::from_bytes(&bytes),
            Err(LockupError::DiscriminatorMismatch)
        );
    }

    #[test]
    fn lockup_rejects_bad_end_timestamp_flag() {
        let mut bytes = *sample_lockup(None).as_bytes();
        // The flag byte sits after the discriminant, amount, authority, and
        // start timestamp.
        bytes[56] = 7;
        assert_eq!(
            Lockup::from_bytes(&bytes),
            Err(LockupError::InvalidEncoding)
        );
    }

    #[test]
    fn pool_round_trip() {
        let entries = [
            LockupPoolEntry::new(100, address(10)),
            LockupPoolEntry::new(250, address(11)),
            LockupPoolEntry::new(75, address(12)),
        ];

        let mut bytes = vec![0u8; LOCKUP_POOL_SIZE];
        let pool = LockupPool::initialize(&mut bytes, &entries).expect("Should initialize pool");
        assert_eq!(pool.entries_len(), 3);
        assert_eq!(pool.live_entries(), &entries);
        assert_eq!(pool.entries()[3], LockupPoolEntry::VACANT);
        assert_eq!(pool.entries()[LOCKUP_POOL_CAPACITY - 1], LockupPoolEntry::VACANT);

        let encoded = pool.as_bytes().to_vec();
        assert_eq!(encoded.len(), LOCKUP_POOL_SIZE);

        let decoded = LockupPool::from_bytes(&encoded).expect("Should decode pool");
        assert_eq!(decoded.entries_len(), 3);
        assert_eq!(decoded.live_entries(), &entries);
        assert_eq!(decoded.as_bytes().as_slice(), encoded.as_slice());
    }

    #[test]
    fn pool_empty_still_full_size() {
        let mut bytes = vec![0u8; LOCKUP_POOL_SIZE];
        let pool = LockupPool::initialize(&mut bytes, &[]).expect("Should initialize pool");
        assert_eq!(pool.entries_len(), 0);
        assert!(pool.live_entries().is_empty());
        assert_eq!(pool.as_bytes().len(), LOCKUP_POOL_SIZE);
    }

    #[test]
    fn pool_capacity_exceeded() {
        let entries = vec![LockupPoolEntry::new(1, address(9)); LOCKUP_POOL_CAPACITY + 1];
        let mut bytes = vec![0u8; LOCKUP_POOL_SIZE];
        assert_eq!(
            LockupPool::initialize(&mut bytes, &entries).err(),
            Some(LockupError::CapacityExceeded)
        );
    }

    #[test]
    fn pool_initialize_overwrites_dirty_buffer() {
        let mut bytes = vec![0xaa; LOCKUP_POOL_SIZE];
        let entry = LockupPoolEntry::new(42, address(4));
        LockupPool::initialize(&mut bytes, &[entry]).expect("Should initialize pool");

        let decoded = LockupPool::from_bytes(&bytes).expect("Should decode pool");
        assert_eq!(decoded.entries_len(), 1);
        assert_eq!(decoded.live_entries(), &[entry]);
        assert_eq!(decoded.entries()[1], LockupPoolEntry::VACANT);
    }

    #[test]
    fn pool_rejects_occupancy_past_capacity() {
        let mut bytes = vec![0u8; LOCKUP_POOL_SIZE];
        LockupPool::initialize(&mut bytes, &[]).expect("Should initialize pool");

        let len = LOCKUP_POOL_SIZE;
        bytes[len - 8..].copy_from_slice(&(LOCKUP_POOL_CAPACITY as u64 + 1).to_le_bytes());
        assert_eq!(
            LockupPool::from_bytes(&bytes),
            Err(LockupError::InvalidEncoding)
        );
    }

    #[test]
    fn pool_strict_length() {
        let mut bytes = vec![0u8; LOCKUP_POOL_SIZE];
        LockupPool::initialize(&mut bytes, &[]).expect("Should initialize pool");

        assert_eq!(
            LockupPool::from_bytes(&bytes[..LOCKUP_POOL_SIZE - 1]),
            Err(LockupError::TruncatedInput)
        );

        bytes.push(0);
        assert_eq!(
            LockupPool::from_bytes(&bytes),
            Err(LockupError::TrailingBytes)
        );
    }
}
