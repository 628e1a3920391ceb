use solana_address::Address;
use static_assertions::const_assert_eq;

use crate::{
    error::LockupError,
    instructions::LockupInstructionTag,
    state::{LeU64, ADDRESS_SIZE, U64_SIZE},
};

pub const LOCKUP_DATA_SIZE: usize = 1 + ADDRESS_SIZE + U64_SIZE;
pub const LOCKUP_NUM_ACCOUNTS: usize = 9;

/// Data payload of a `Lockup` instruction.
#[repr(C)]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LockupInstructionData {
    /// The metadata account to attach to the new position.
    pub metadata: Address,
    /// The u64 amount of tokens to lock as LE bytes.
    amount: LeU64,
}

impl LockupInstructionData {
    pub fn new(metadata: Address, amount: u64) -> Self {
        LockupInstructionData {
            metadata,
            amount: amount.to_le_bytes(),
        }
    }

    #[inline(always)]
    pub fn amount(&self) -> u64 {
        u64::from_le_bytes(self.amount)
    }

    pub fn pack(&self) -> [u8; LOCKUP_DATA_SIZE] {
        // Instruction data layout:
        //   - [0]: the instruction tag, 1 byte
        //   - [1..33]: the metadata address, 32 bytes
        //   - [33..41]: the u64 `amount` as little-endian bytes, 8 bytes
        let mut data = [0u8; LOCKUP_DATA_SIZE];
        data[0] = LockupInstructionTag::Lockup as u8;
        data[1..1 + ADDRESS_SIZE].copy_from_slice(self.metadata.as_ref());
        data[1 + ADDRESS_SIZE..].copy_from_slice(&self.amount);
        data
    }

    /// Decodes the payload, validating the leading tag. Trailing bytes are
    /// tolerated; instruction buffers may carry appended data.
    pub fn unpack(data: &[u8]) -> Result<Self, LockupError> {
        if data.len() < LOCKUP_DATA_SIZE {
            return Err(LockupError::TruncatedInput);
        }
        if data[0] != LockupInstructionTag::Lockup as u8 {
            return Err(LockupError::DiscriminatorMismatch);
        }
        let metadata = Address::new_from_array(
            data[1..1 + ADDRESS_SIZE]
                .try_into()
                .map_err(|_| LockupError::TruncatedInput)?,
        );
        let amount = data[1 + ADDRESS_SIZE..LOCKUP_DATA_SIZE]
            .try_into()
            .map_err(|_| LockupError::TruncatedInput)?;
        Ok(LockupInstructionData { metadata, amount })
    }
}

const_assert_eq!(LOCKUP_DATA_SIZE - 1, size_of::<LockupInstructionData>());

/// Locks tokens into a fresh lockup account and appends the position to the
/// pool.
///
/// ### Accounts
///  0. `[READ]` Lockup authority
///  1. `[READ, SIGNER]` Token owner
///  2. `[WRITE]` Depositor token account
///  3. `[WRITE]` Lockup pool
///  4. `[WRITE]` Lockup account
///  5. `[READ]` Escrow authority
///  6. `[WRITE]` Escrow token account
///  7. `[READ]` Token mint
///  8. `[READ]` Token program
#[cfg(feature = "client")]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Lockup {
    /// The authority that will control the new position.
    pub lockup_authority: Address,
    /// The owner of the tokens being locked; must sign.
    pub token_owner: Address,
    /// The token account the locked amount is drawn from.
    pub depositor_token_account: Address,
    /// The pool the position is appended to.
    pub lockup_pool: Address,
    /// The uninitialized lockup account.
    pub lockup_account: Address,
    /// The escrow authority PDA.
    pub escrow_authority: Address,
    /// The escrow's token account.
    pub escrow_token_account: Address,
    /// The mint of the locked token.
    pub token_mint: Address,
    /// The token program; defaults to [`crate::program::TOKEN_PROGRAM_ID`]
    /// when `None`.
    pub token_program: Option<Address>,
}

#[cfg(feature = "client")]
impl Lockup {
    pub fn create_instruction(
        &self,
        data: LockupInstructionData,
    ) -> solana_instruction::Instruction {
        solana_instruction::Instruction {
            program_id: crate::program::ID,
            accounts: self.create_account_metas().to_vec(),
            data: data.pack().to_vec(),
        }
    }

    pub fn create_account_metas(&self) -> [solana_instruction::AccountMeta; LOCKUP_NUM_ACCOUNTS] {
        use solana_instruction::AccountMeta;

        [
            AccountMeta::new_readonly(self.lockup_authority, false),
            AccountMeta::new_readonly(self.token_owner, true),
            AccountMeta::new(self.depositor_token_account, false),
            AccountMeta::new(self.lockup_pool, false),
            AccountMeta::new(self.lockup_account, false),
            AccountMeta::new_readonly(self.escrow_authority, false),
            AccountMeta::new(self.escrow_token_account, false),
            AccountMeta::new_readonly(self.token_mint, false),
            AccountMeta::new_readonly(
                self.token_program.unwrap_or(crate::program::TOKEN_PROGRAM_ID),
                false,
            ),
        ]
    }

    /// Slices the instruction's account list positionally and decodes its
    /// payload. Accounts past the required nine are ignored.
    pub fn parse(instruction: &solana_instruction::Instruction) -> Result<ParsedLockup, LockupError> {
        let [lockup_authority, token_owner, depositor_token_account, lockup_pool, lockup_account, escrow_authority, escrow_token_account, token_mint, token_program, ..] =
            instruction.accounts.as_slice()
        else {
            return Err(LockupError::InsufficientAccounts);
        };

        Ok(ParsedLockup {
            accounts: Lockup {
                lockup_authority: lockup_authority.pubkey,
                token_owner: token_owner.pubkey,
                depositor_token_account: depositor_token_account.pubkey,
                lockup_pool: lockup_pool.pubkey,
                lockup_account: lockup_account.pubkey,
                escrow_authority: escrow_authority.pubkey,
                escrow_token_account: escrow_token_account.pubkey,
                token_mint: token_mint.pubkey,
                token_program: Some(token_program.pubkey),
            },
            data: LockupInstructionData::unpack(&instruction.data)?,
        })
    }
}

/// A positionally parsed `Lockup` instruction.
#[cfg(feature = "client")]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParsedLockup {
    pub accounts: Lockup,
    pub data: LockupInstructionData,
}
