//! Error types

use {
    num_derive::FromPrimitive,
    solana_program::{
        decode_error::DecodeError,
        msg,
        program_error::{PrintProgramError, ProgramError},
    },
    thiserror::Error,
};

/// Errors that may be returned by the Master Edition program.
#[derive(Clone, Debug, Eq, Error, FromPrimitive, PartialEq)]
pub enum MasterEditionError {
    /// Metadata or master edition account already holds data.
    #[error("Account already initialized")]
    AlreadyInitialized,

    /// Mint account is not a live token mint.
    #[error("Uninitialized")]
    Uninitialized,

    /// Metadata's key must match seed of ['metadata', program id, mint] provided
    #[error("Metadata's key must match seed of ['metadata', program id, mint] provided")]
    InvalidMetadataKey,

    /// Edition's key must match seed of ['metadata', program id, mint, 'edition'] provided
    #[error("Edition's key must match seed of ['metadata', program id, mint, 'edition'] provided")]
    InvalidEditionKey,

    /// No bump seed produced a valid off-curve address for the given seeds.
    #[error("No valid program derived address exists for the given seeds")]
    NoValidDerivedAddress,

    /// Mint authority provided does not match the authority on the mint
    #[error("Mint authority provided does not match the authority on the mint")]
    InvalidMintAuthority,

    /// You must be the mint authority and signer on this transaction
    #[error("You must be the mint authority and signer on this transaction")]
    NotMintAuthority,

    /// Master editions must have exactly one token
    #[error("Master editions must have exactly one token")]
    MasterEditionsMustHaveExactlyOneToken,

    /// Master edition mints must be indivisible, with zero decimals
    #[error("Master edition mints must be indivisible, with zero decimals")]
    MasterEditionsMustBeIndivisible,

    /// Name too long
    #[error("Name too long")]
    NameTooLong,

    /// Symbol too long
    #[error("Symbol too long")]
    SymbolTooLong,

    /// URI too long
    #[error("URI too long")]
    UriTooLong,

    /// Token mint to failed
    #[error("Token mint to failed")]
    TokenMintToFailed,

    /// Transferring the mint authority to the edition failed
    #[error("Set authority failed")]
    SetAuthorityFailed,
}

impl PrintProgramError for MasterEditionError {
    fn print<E>(&self) {
        msg!(&self.to_string());
    }
}

impl From<MasterEditionError> for ProgramError {
    fn from(e: MasterEditionError) -> Self {
        ProgramError::Custom(e as u32)
    }
}

impl<T> DecodeError<T> for MasterEditionError {
    fn type_of() -> &'static str {
        "MasterEdition Error"
    }
}
