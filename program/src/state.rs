//! State transition types

use {
    borsh::{BorshDeserialize, BorshSerialize},
    solana_program::pubkey::Pubkey,
};

/// prefix used for PDAs to avoid certain collision attacks (https://en.wikipedia.org/wiki/Collision_attack#Chosen-prefix_collision_attack)
pub const PREFIX: &str = "metadata";

/// seed appended to the metadata seeds to derive the edition address
pub const EDITION: &str = "edition";

/// max name length
pub const MAX_NAME_LENGTH: usize = 32;

/// max symbol length
pub const MAX_SYMBOL_LENGTH: usize = 10;

/// max uri length
pub const MAX_URI_LENGTH: usize = 200;

/// Max len of a serialized metadata account: key, update authority, mint,
/// three length-prefixed strings at their maximums, mutability flag.
pub const MAX_METADATA_LEN: usize =
    1 + 32 + 32 + 4 + MAX_NAME_LENGTH + 4 + MAX_SYMBOL_LENGTH + 4 + MAX_URI_LENGTH + 1;

/// Max len of a serialized master edition account: key, supply, optional max supply.
pub const MAX_MASTER_EDITION_LEN: usize = 1 + 8 + 1 + 8;

/// Discriminant written as the first byte of every account this program owns.
/// Freshly allocated (zeroed) account data reads back as `Uninitialized`.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, BorshSerialize, BorshDeserialize)]
pub enum Key {
    /// Account not yet populated
    Uninitialized,
    /// Metadata account
    MetadataV1,
    /// Master edition account
    MasterEditionV1,
}

#[repr(C)]
#[derive(Clone, Debug, PartialEq, BorshSerialize, BorshDeserialize)]
/// Caller-supplied content stored on the metadata account
pub struct Data {
    /// The name of the asset
    pub name: String,
    /// The symbol for the asset
    pub symbol: String,
    /// URI pointing to JSON representing the asset
    pub uri: String,
}

/// Record describing the asset, stored at the PDA of
/// ['metadata', program id, mint].
#[repr(C)]
#[derive(Clone, Debug, PartialEq, BorshSerialize, BorshDeserialize)]
pub struct Metadata {
    /// Account discriminant, always `MetadataV1`
    pub key: Key,
    /// The creator/authority recorded at creation time. The program exposes
    /// no instruction that honors it; metadata is written once.
    pub update_authority: Pubkey,
    /// Mint of the token asset
    pub mint: Pubkey,
    /// Asset content
    pub data: Data,
    /// Always written false; master edition metadata is immutable
    pub is_mutable: bool,
}

/// Record marking the mint as a single, non-reprintable edition, stored at
/// the PDA of ['metadata', program id, mint, 'edition'].
#[repr(C)]
#[derive(Clone, Debug, PartialEq, BorshSerialize, BorshDeserialize)]
pub struct MasterEdition {
    /// Account discriminant, always `MasterEditionV1`
    pub key: Key,
    /// Number of print editions minted from this master, always 0 here
    pub supply: u64,
    /// Maximum number of print editions. `Some(0)` is the non-reprintable
    /// sentinel and the only value this program writes.
    pub max_supply: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maximal_metadata_fits_declared_len() {
        let metadata = Metadata {
            key: Key::MetadataV1,
            update_authority: Pubkey::new_unique(),
            mint: Pubkey::new_unique(),
            data: Data {
                name: "N".repeat(MAX_NAME_LENGTH),
                symbol: "S".repeat(MAX_SYMBOL_LENGTH),
                uri: "U".repeat(MAX_URI_LENGTH),
            },
            is_mutable: false,
        };
        let serialized = metadata.try_to_vec().unwrap();
        assert_eq!(serialized.len(), MAX_METADATA_LEN);
    }

    #[test]
    fn maximal_master_edition_fits_declared_len() {
        let edition = MasterEdition {
            key: Key::MasterEditionV1,
            supply: 0,
            max_supply: Some(0),
        };
        let serialized = edition.try_to_vec().unwrap();
        assert_eq!(serialized.len(), MAX_MASTER_EDITION_LEN);
    }

    #[test]
    fn zeroed_data_reads_back_uninitialized() {
        let zeroed = vec![0u8; MAX_MASTER_EDITION_LEN];
        let edition: MasterEdition = crate::utils::try_from_slice_unchecked(&zeroed).unwrap();
        assert_eq!(edition.key, Key::Uninitialized);
        assert_eq!(edition.max_supply, None);
    }
}
