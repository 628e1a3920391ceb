use crate::{error::LockupError, instructions::LockupInstructionTag};

pub const WITHDRAW_DATA_SIZE: usize = 1;
pub const WITHDRAW_NUM_ACCOUNTS: usize = 8;

/// Data payload of a `Withdraw` instruction: the tag byte alone. The
/// withdrawable amount is read from the lockup record on-chain.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct WithdrawInstructionData;

impl WithdrawInstructionData {
    pub fn pack(&self) -> [u8; WITHDRAW_DATA_SIZE] {
        [LockupInstructionTag::Withdraw as u8]
    }

    pub fn unpack(data: &[u8]) -> Result<Self, LockupError> {
        let tag = data.first().ok_or(LockupError::TruncatedInput)?;
        if *tag != LockupInstructionTag::Withdraw as u8 {
            return Err(LockupError::DiscriminatorMismatch);
        }
        Ok(WithdrawInstructionData)
    }
}

/// Withdraws an unlocked position from escrow back to the depositor and
/// closes its pool slot.
///
/// ### Accounts
///  0. `[READ, SIGNER]` Lockup authority
///  1. `[WRITE]` Depositor token account
///  2. `[WRITE]` Lockup pool
///  3. `[WRITE]` Lockup account
///  4. `[READ]` Escrow authority
///  5. `[WRITE]` Escrow token account
///  6. `[READ]` Token mint
///  7. `[READ]` Token program
#[cfg(feature = "client")]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Withdraw {
    /// The authority of the position; must sign.
    pub lockup_authority: solana_address::Address,
    /// The token account the withdrawn amount is released to.
    pub depositor_token_account: solana_address::Address,
    /// The pool holding the position's slot.
    pub lockup_pool: solana_address::Address,
    /// The lockup account to drain and close.
    pub lockup_account: solana_address::Address,
    /// The escrow authority PDA.
    pub escrow_authority: solana_address::Address,
    /// The escrow's token account.
    pub escrow_token_account: solana_address::Address,
    /// The mint of the locked token.
    pub token_mint: solana_address::Address,
    /// The token program; defaults to [`crate::program::TOKEN_PROGRAM_ID`]
    /// when `None`.
    pub token_program: Option<solana_address::Address>,
}

#[cfg(feature = "client")]
impl Withdraw {
    pub fn create_instruction(&self) -> solana_instruction::Instruction {
        solana_instruction::Instruction {
            program_id: crate::program::ID,
            accounts: self.create_account_metas().to_vec(),
            data: WithdrawInstructionData.pack().to_vec(),
        }
    }

    pub fn create_account_metas(&self) -> [solana_instruction::AccountMeta; WITHDRAW_NUM_ACCOUNTS] {
        use solana_instruction::AccountMeta;

        [
            AccountMeta::new_readonly(self.lockup_authority, true),
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
    /// payload. Accounts past the required eight are ignored.
    pub fn parse(
        instruction: &solana_instruction::Instruction,
    ) -> Result<ParsedWithdraw, LockupError> {
        let [lockup_authority, depositor_token_account, lockup_pool, lockup_account, escrow_authority, escrow_token_account, token_mint, token_program, ..] =
            instruction.accounts.as_slice()
        else {
            return Err(LockupError::InsufficientAccounts);
        };

        Ok(ParsedWithdraw {
            accounts: Withdraw {
                lockup_authority: lockup_authority.pubkey,
                depositor_token_account: depositor_token_account.pubkey,
                lockup_pool: lockup_pool.pubkey,
                lockup_account: lockup_account.pubkey,
                escrow_authority: escrow_authority.pubkey,
                escrow_token_account: escrow_token_account.pubkey,
                token_mint: token_mint.pubkey,
                token_program: Some(token_program.pubkey),
            },
            data: WithdrawInstructionData::unpack(&instruction.data)?,
        })
    }
}

/// A positionally parsed `Withdraw` instruction.
#[cfg(feature = "client")]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParsedWithdraw {
    pub accounts: Withdraw,
    pub data: WithdrawInstructionData,
}
