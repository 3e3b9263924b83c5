//! Derivation of the canonical metadata and master edition addresses.
//!
//! Both addresses are derived under the metadata program's own identity,
//! which is passed in explicitly rather than assumed, so any party (the
//! program itself, a client, a test against an alternate deployment) can
//! recompute them from the mint alone.

use {
    crate::state::{EDITION, PREFIX},
    solana_program::pubkey::Pubkey,
};

/// Derives the metadata address for the given mint from the seeds
/// ['metadata', metadata program id, mint], along with the bump seed.
/// Returns `None` if no bump seed yields a valid off-curve address.
pub fn try_find_metadata_address(
    metadata_program_id: &Pubkey,
    mint: &Pubkey,
) -> Option<(Pubkey, u8)> {
    Pubkey::try_find_program_address(
        &[
            PREFIX.as_bytes(),
            metadata_program_id.as_ref(),
            mint.as_ref(),
        ],
        metadata_program_id,
    )
}

/// Derives the master edition address for the given mint from the seeds
/// ['metadata', metadata program id, mint, 'edition'], along with the bump
/// seed. A master edition and a print edition of the same mint share this
/// address, so at most one of the two can ever exist.
/// Returns `None` if no bump seed yields a valid off-curve address.
pub fn try_find_master_edition_address(
    metadata_program_id: &Pubkey,
    mint: &Pubkey,
) -> Option<(Pubkey, u8)> {
    Pubkey::try_find_program_address(
        &[
            PREFIX.as_bytes(),
            metadata_program_id.as_ref(),
            mint.as_ref(),
            EDITION.as_bytes(),
        ],
        metadata_program_id,
    )
}

/// Convenience form of [`try_find_metadata_address`] that panics on
/// derivation exhaustion, for client and test call sites.
pub fn find_metadata_address(metadata_program_id: &Pubkey, mint: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[
            PREFIX.as_bytes(),
            metadata_program_id.as_ref(),
            mint.as_ref(),
        ],
        metadata_program_id,
    )
}

/// Convenience form of [`try_find_master_edition_address`] that panics on
/// derivation exhaustion, for client and test call sites.
pub fn find_master_edition_address(metadata_program_id: &Pubkey, mint: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[
            PREFIX.as_bytes(),
            metadata_program_id.as_ref(),
            mint.as_ref(),
            EDITION.as_bytes(),
        ],
        metadata_program_id,
    )
}
