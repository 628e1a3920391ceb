#[cfg(test)]
pub mod tests {
    use lockup_client::{
        fetch::FetchError,
        pretty::{
            account::{PrettyLockup, PrettyLockupPool},
            instruction::PrettyInstruction,
            program_error::PrettyProgramError,
        },
    };
    use lockup_interface::{
        instructions::{parse_instruction, unlock},
        state::{
            lockup::Lockup,
            lockup_pool::{LockupPool, LockupPoolEntry, LOCKUP_POOL_SIZE},
        },
    };
    use solana_address::Address;

    #[test]
    fn lockup_display_shows_fields() {
        let authority = Address::new_unique();
        let lockup = Lockup::new(
            42,
            authority,
            1_700_000_000,
            None,
            Address::new_unique(),
            Address::new_unique(),
        );

        let rendered = PrettyLockup(&lockup).to_string();
        assert!(rendered.contains("lockup"));
        assert!(rendered.contains(&authority.to_string()));
        assert!(rendered.contains("42"));
        assert!(rendered.contains("none"));
    }

    #[test]
    fn pool_display_shows_occupancy() {
        let entry = LockupPoolEntry::new(7, Address::new_unique());
        let mut bytes = vec![0u8; LOCKUP_POOL_SIZE];
        LockupPool::initialize(&mut bytes, &[entry]).expect("Should initialize pool");
        let pool = LockupPool::from_bytes(&bytes).expect("Should decode pool");

        let rendered = PrettyLockupPool(pool).to_string();
        assert!(rendered.contains("1/1024 occupied"));
        assert!(rendered.contains(&entry.lockup.to_string()));
    }

    #[test]
    fn instruction_display_names_the_variant() {
        let instruction = unlock::Unlock {
            lockup_authority: Address::new_unique(),
            lockup_pool: Address::new_unique(),
            lockup_account: Address::new_unique(),
        }
        .create_instruction();
        let parsed = parse_instruction(&instruction).expect("Should parse unlock");

        let rendered = PrettyInstruction(&parsed).to_string();
        assert!(rendered.contains("Unlock"));
    }

    #[test]
    fn program_error_display_names_known_codes() {
        assert!(PrettyProgramError(3).to_string().contains("still active"));
        assert!(PrettyProgramError(400)
            .to_string()
            .contains("Unknown lockup program error"));
    }

    #[test]
    fn fetch_error_display() {
        let address = Address::new_unique();
        let rendered = FetchError::AccountNotFound(address).to_string();
        assert!(rendered.contains(&address.to_string()));
        assert!(rendered.contains("does not exist"));
    }
}
