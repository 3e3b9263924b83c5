//! Instruction types

use {
    borsh::{BorshDeserialize, BorshSerialize},
    solana_program::{
        instruction::{AccountMeta, Instruction},
        pubkey::Pubkey,
        system_program, sysvar,
    },
};

#[repr(C)]
#[derive(BorshSerialize, BorshDeserialize, PartialEq, Debug, Clone)]
/// Args for the CreateMasterEdition call
pub struct CreateMasterEditionArgs {
    /// The name of the asset
    pub name: String,
    /// The symbol for the asset, ie, AAPL or SHOES
    pub symbol: String,
    /// URI pointing to JSON representing the asset
    pub uri: String,
}

/// Instructions supported by the Master Edition program.
#[derive(BorshSerialize, BorshDeserialize, Clone)]
pub enum MasterEditionInstruction {
    /// Mint the single token of a fresh mint, create its metadata and master
    /// edition accounts at their derived addresses, and permanently move the
    /// mint and freeze authorities to the master edition.
    ///   0. `[writable]` Metadata key (pda of ['metadata', program id, mint])
    ///   1. `[writable]` Master edition key (pda of ['metadata', program id, mint, 'edition'])
    ///   2. `[writable]` Mint of token asset, with zero supply and zero decimals
    ///   3. `[signer]` Current mint authority
    ///   4. `[writable]` Token account that receives the single token
    ///   5. `[writable, signer]` payer
    ///   6. `[]` Token program
    ///   7. `[]` System program
    ///   8. `[]` Rent sysvar
    CreateMasterEdition(CreateMasterEditionArgs),
}

/// Creates a CreateMasterEdition instruction
#[allow(clippy::too_many_arguments)]
pub fn create_master_edition(
    program_id: Pubkey,
    metadata_account: Pubkey,
    master_edition_account: Pubkey,
    mint: Pubkey,
    mint_authority: Pubkey,
    token_account: Pubkey,
    payer: Pubkey,
    name: String,
    symbol: String,
    uri: String,
) -> Instruction {
    Instruction {
        program_id,
        accounts: vec![
            AccountMeta::new(metadata_account, false),
            AccountMeta::new(master_edition_account, false),
            AccountMeta::new(mint, false),
            AccountMeta::new_readonly(mint_authority, true),
            AccountMeta::new(token_account, false),
            AccountMeta::new(payer, true),
            AccountMeta::new_readonly(spl_token::id(), false),
            AccountMeta::new_readonly(system_program::id(), false),
            AccountMeta::new_readonly(sysvar::rent::id(), false),
        ],
        data: MasterEditionInstruction::CreateMasterEdition(CreateMasterEditionArgs {
            name,
            symbol,
            uri,
        })
        .try_to_vec()
        .unwrap(),
    }
}
