use crate::error::LockupError;

pub mod lockup;
pub mod unlock;
pub mod withdraw;

/// Tag byte identifying each instruction variant. Values are the ones the
/// payload encoders emit; tag 0 is reserved and never produced.
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(
    any(test, feature = "client"),
    derive(strum_macros::FromRepr, strum_macros::EnumIter)
)]
#[cfg_attr(feature = "client", derive(strum_macros::Display))]
pub enum LockupInstructionTag {
    Lockup = 1,
    Unlock = 2,
    Withdraw = 3,
}

impl TryFrom<u8> for LockupInstructionTag {
    type Error = LockupError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            // SAFETY: A valid enum variant is guaranteed with the match pattern.
            // All variants are checked in the exhaustive instruction tag test.
            1..=3 => Ok(unsafe { core::mem::transmute::<u8, Self>(value) }),
            _ => Err(LockupError::UnrecognizedInstruction),
        }
    }
}

/// Classifies a raw instruction payload by its leading tag byte.
///
/// Pure and total over byte slices: an empty payload is [`LockupError::TruncatedInput`],
/// an unknown tag is [`LockupError::UnrecognizedInstruction`].
#[inline(always)]
pub fn identify_instruction(data: &[u8]) -> Result<LockupInstructionTag, LockupError> {
    let tag = data.first().ok_or(LockupError::TruncatedInput)?;
    LockupInstructionTag::try_from(*tag)
}

/// A fully parsed instruction of any variant: the positional accounts plus
/// the decoded data payload.
#[cfg(feature = "client")]
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParsedLockupInstruction {
    Lockup(lockup::ParsedLockup),
    Unlock(unlock::ParsedUnlock),
    Withdraw(withdraw::ParsedWithdraw),
}

#[cfg(feature = "client")]
impl ParsedLockupInstruction {
    pub fn tag(&self) -> LockupInstructionTag {
        match self {
            Self::Lockup(_) => LockupInstructionTag::Lockup,
            Self::Unlock(_) => LockupInstructionTag::Unlock,
            Self::Withdraw(_) => LockupInstructionTag::Withdraw,
        }
    }
}

/// Identifies an opaque instruction and delegates to the matching variant's
/// positional parser.
#[cfg(feature = "client")]
pub fn parse_instruction(
    instruction: &solana_instruction::Instruction,
) -> Result<ParsedLockupInstruction, LockupError> {
    match identify_instruction(&instruction.data)? {
        LockupInstructionTag::Lockup => {
            lockup::Lockup::parse(instruction).map(ParsedLockupInstruction::Lockup)
        }
        LockupInstructionTag::Unlock => {
            unlock::Unlock::parse(instruction).map(ParsedLockupInstruction::Unlock)
        }
        LockupInstructionTag::Withdraw => {
            withdraw::Withdraw::parse(instruction).map(ParsedLockupInstruction::Withdraw)
        }
    }
}
