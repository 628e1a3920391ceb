#![no_std]

#[cfg(feature = "std")]
extern crate std;

pub mod error;
pub mod instructions;
pub mod state;

pub mod program {
    //! Process-wide immutable address constants.

    use solana_address::Address;

    /// The lockup program's address.
    pub const ID: Address =
        Address::from_str_const("Dbf7u6x15DhjMrBMunY3XoRWdByrCCt2dbyoPrCXN6SQ");

    /// The SPL token program, substituted whenever a builder omits its
    /// `token_program` account.
    pub const TOKEN_PROGRAM_ID: Address =
        Address::from_str_const("TokenkegQfeZyiNwAJbNbGKPFXCWuBvf9Ss623VQ5DA");
}
