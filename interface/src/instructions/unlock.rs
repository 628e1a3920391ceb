use crate::{error::LockupError, instructions::LockupInstructionTag};

pub const UNLOCK_DATA_SIZE: usize = 1;
pub const UNLOCK_NUM_ACCOUNTS: usize = 3;

/// Data payload of an `Unlock` instruction: the tag byte alone.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UnlockInstructionData;

impl UnlockInstructionData {
    pub fn pack(&self) -> [u8; UNLOCK_DATA_SIZE] {
        [LockupInstructionTag::Unlock as u8]
    }

    pub fn unpack(data: &[u8]) -> Result<Self, LockupError> {
        let tag = data.first().ok_or(LockupError::TruncatedInput)?;
        if *tag != LockupInstructionTag::Unlock as u8 {
            return Err(LockupError::DiscriminatorMismatch);
        }
        Ok(UnlockInstructionData)
    }
}

/// Unlocks a lockup, enabling the position for withdrawal.
///
/// ### Accounts
///  0. `[READ, SIGNER]` Lockup authority
///  1. `[WRITE]` Lockup pool
///  2. `[WRITE]` Lockup account
#[cfg(feature = "client")]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Unlock {
    /// The authority of the position; must sign.
    pub lockup_authority: solana_address::Address,
    /// The pool holding the position's slot.
    pub lockup_pool: solana_address::Address,
    /// The lockup account to unlock.
    pub lockup_account: solana_address::Address,
}

#[cfg(feature = "client")]
impl Unlock {
    pub fn create_instruction(&self) -> solana_instruction::Instruction {
        solana_instruction::Instruction {
            program_id: crate::program::ID,
            accounts: self.create_account_metas().to_vec(),
            data: UnlockInstructionData.pack().to_vec(),
        }
    }

    pub fn create_account_metas(&self) -> [solana_instruction::AccountMeta; UNLOCK_NUM_ACCOUNTS] {
        use solana_instruction::AccountMeta;

        [
            AccountMeta::new_readonly(self.lockup_authority, true),
            AccountMeta::new(self.lockup_pool, false),
            AccountMeta::new(self.lockup_account, false),
        ]
    }

    /// Slices the instruction's account list positionally and decodes its
    /// payload. Accounts past the required three are ignored.
    pub fn parse(instruction: &solana_instruction::Instruction) -> Result<ParsedUnlock, LockupError> {
        let [lockup_authority, lockup_pool, lockup_account, ..] =
            instruction.accounts.as_slice()
        else {
            return Err(LockupError::InsufficientAccounts);
        };

        Ok(ParsedUnlock {
            accounts: Unlock {
                lockup_authority: lockup_authority.pubkey,
                lockup_pool: lockup_pool.pubkey,
                lockup_account: lockup_account.pubkey,
            },
            data: UnlockInstructionData::unpack(&instruction.data)?,
        })
    }
}

/// A positionally parsed `Unlock` instruction.
#[cfg(feature = "client")]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParsedUnlock {
    pub accounts: Unlock,
    pub data: UnlockInstructionData,
}
