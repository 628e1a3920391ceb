use solana_program_error::ProgramError;

/// Errors produced while encoding, decoding, or parsing lockup records and
/// instructions.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[cfg_attr(
    any(test, feature = "client"),
    derive(strum_macros::FromRepr, strum_macros::EnumIter)
)]
#[repr(u8)]
pub enum LockupError {
    TruncatedInput,
    TrailingBytes,
    InvalidEncoding,
    CapacityExceeded,
    InsufficientAccounts,
    DiscriminatorMismatch,
    UnrecognizedInstruction,
}

impl From<LockupError> for ProgramError {
    #[inline(always)]
    fn from(e: LockupError) -> Self {
        ProgramError::Custom(e as u32)
    }
}

impl From<LockupError> for &'static str {
    fn from(value: LockupError) -> Self {
        match value {
            LockupError::TruncatedInput => "Buffer ended before the field it must hold",
            LockupError::TrailingBytes => "Unexpected bytes after a fixed-size record",
            LockupError::InvalidEncoding => "A flag or tag byte is outside its valid domain",
            LockupError::CapacityExceeded => "More elements than the collection's fixed capacity",
            LockupError::InsufficientAccounts => "Fewer account slots than the instruction requires",
            LockupError::DiscriminatorMismatch => "Discriminator does not match the expected value",
            LockupError::UnrecognizedInstruction => "Leading tag byte matches no known instruction",
        }
    }
}

#[cfg(not(target_os = "solana"))]
impl core::fmt::Display for LockupError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(<&'static str>::from(*self))
    }
}

pub type LockupResult = Result<(), LockupError>;

/// Custom error codes reported by the on-chain lockup program.
///
/// These never originate in this crate; they are carried so client code can
/// name the codes a failed transaction reports.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[cfg_attr(any(test, feature = "client"), derive(strum_macros::FromRepr))]
#[repr(u8)]
pub enum LockupProgramError {
    IncorrectMint,
    IncorrectEscrowAuthorityAddress,
    IncorrectEscrowTokenAccount,
    LockupActive,
}

impl From<LockupProgramError> for ProgramError {
    #[inline(always)]
    fn from(e: LockupProgramError) -> Self {
        ProgramError::Custom(e as u32)
    }
}

impl From<LockupProgramError> for &'static str {
    fn from(value: LockupProgramError) -> Self {
        match value {
            LockupProgramError::IncorrectMint => "Incorrect mint",
            LockupProgramError::IncorrectEscrowAuthorityAddress => {
                "Incorrect escrow authority address"
            }
            LockupProgramError::IncorrectEscrowTokenAccount => "Incorrect escrow token account",
            LockupProgramError::LockupActive => "Lockup is still active",
        }
    }
}

#[cfg(not(target_os = "solana"))]
impl core::fmt::Display for LockupProgramError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(<&'static str>::from(*self))
    }
}
