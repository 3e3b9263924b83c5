//! Program state processor

use {
    crate::{
        error::MasterEditionError,
        instruction::MasterEditionInstruction,
        pda::{try_find_master_edition_address, try_find_metadata_address},
        state::{
            Data, Key, MasterEdition, Metadata, EDITION, MAX_MASTER_EDITION_LEN, MAX_METADATA_LEN,
            MAX_NAME_LENGTH, MAX_SYMBOL_LENGTH, MAX_URI_LENGTH, PREFIX,
        },
        utils::{
            assert_initialized, assert_mint_authority_matches_mint, create_or_allocate_account_raw,
            spl_token_mint_to, transfer_mint_authority, TokenMintToParams,
        },
    },
    borsh::{BorshDeserialize, BorshSerialize},
    solana_program::{
        account_info::{next_account_info, AccountInfo},
        entrypoint::ProgramResult,
        msg,
        pubkey::Pubkey,
    },
    spl_token::state::Mint,
};

/// Processes an instruction
pub fn process_instruction(
    program_id: &Pubkey,
    accounts: &[AccountInfo],
    input: &[u8],
) -> ProgramResult {
    let instruction = MasterEditionInstruction::try_from_slice(input)?;
    match instruction {
        MasterEditionInstruction::CreateMasterEdition(args) => {
            msg!("Instruction: Create Master Edition");
            process_create_master_edition(program_id, accounts, args.name, args.symbol, args.uri)
        }
    }
}

/// Mint the single token, create the metadata and master edition accounts,
/// and revoke the caller's mint authority, as one unit. Every check runs
/// before the first write; the runtime rolls back the whole instruction on
/// any failure, so a rejected invocation leaves no account behind.
pub fn process_create_master_edition(
    program_id: &Pubkey,
    accounts: &[AccountInfo],
    name: String,
    symbol: String,
    uri: String,
) -> ProgramResult {
    let account_info_iter = &mut accounts.iter();
    let metadata_account_info = next_account_info(account_info_iter)?;
    let master_edition_account_info = next_account_info(account_info_iter)?;
    let mint_info = next_account_info(account_info_iter)?;
    let mint_authority_info = next_account_info(account_info_iter)?;
    let token_account_info = next_account_info(account_info_iter)?;
    let payer_account_info = next_account_info(account_info_iter)?;
    let token_program_info = next_account_info(account_info_iter)?;
    let system_account_info = next_account_info(account_info_iter)?;
    let rent_info = next_account_info(account_info_iter)?;

    if name.len() > MAX_NAME_LENGTH {
        return Err(MasterEditionError::NameTooLong.into());
    }

    if symbol.len() > MAX_SYMBOL_LENGTH {
        return Err(MasterEditionError::SymbolTooLong.into());
    }

    if uri.len() > MAX_URI_LENGTH {
        return Err(MasterEditionError::UriTooLong.into());
    }

    // A populated account at either address means a previous invocation for
    // this mint already won; the designation is permanent.
    if !metadata_account_info.try_data_is_empty()?
        || !master_edition_account_info.try_data_is_empty()?
    {
        return Err(MasterEditionError::AlreadyInitialized.into());
    }

    let mint: Mint = assert_initialized(mint_info)?;
    if mint.decimals != 0 {
        return Err(MasterEditionError::MasterEditionsMustBeIndivisible.into());
    }

    assert_mint_authority_matches_mint(&mint, mint_authority_info)?;

    let (metadata_key, metadata_bump_seed) = try_find_metadata_address(program_id, mint_info.key)
        .ok_or(MasterEditionError::NoValidDerivedAddress)?;
    if metadata_account_info.key != &metadata_key {
        return Err(MasterEditionError::InvalidMetadataKey.into());
    }

    let (edition_key, edition_bump_seed) =
        try_find_master_edition_address(program_id, mint_info.key)
            .ok_or(MasterEditionError::NoValidDerivedAddress)?;
    if master_edition_account_info.key != &edition_key {
        return Err(MasterEditionError::InvalidEditionKey.into());
    }

    spl_token_mint_to(TokenMintToParams {
        mint: mint_info.clone(),
        destination: token_account_info.clone(),
        authority: mint_authority_info.clone(),
        token_program: token_program_info.clone(),
        amount: 1,
    })?;

    let mint: Mint = assert_initialized(mint_info)?;
    if mint.supply != 1 {
        return Err(MasterEditionError::MasterEditionsMustHaveExactlyOneToken.into());
    }

    let metadata_authority_signer_seeds = &[
        PREFIX.as_bytes(),
        program_id.as_ref(),
        mint_info.key.as_ref(),
        &[metadata_bump_seed],
    ];
    create_or_allocate_account_raw(
        *program_id,
        metadata_account_info,
        rent_info,
        system_account_info,
        payer_account_info,
        MAX_METADATA_LEN,
        metadata_authority_signer_seeds,
    )?;

    let metadata = Metadata {
        key: Key::MetadataV1,
        update_authority: *payer_account_info.key,
        mint: *mint_info.key,
        data: Data { name, symbol, uri },
        is_mutable: false,
    };
    metadata.serialize(&mut *metadata_account_info.data.borrow_mut())?;

    let edition_authority_signer_seeds = &[
        PREFIX.as_bytes(),
        program_id.as_ref(),
        mint_info.key.as_ref(),
        EDITION.as_bytes(),
        &[edition_bump_seed],
    ];
    create_or_allocate_account_raw(
        *program_id,
        master_edition_account_info,
        rent_info,
        system_account_info,
        payer_account_info,
        MAX_MASTER_EDITION_LEN,
        edition_authority_signer_seeds,
    )?;

    let edition = MasterEdition {
        key: Key::MasterEditionV1,
        supply: 0,
        max_supply: Some(0),
    };
    edition.serialize(&mut *master_edition_account_info.data.borrow_mut())?;

    // Now make sure this mint can never be used by anybody else.
    transfer_mint_authority(
        edition_authority_signer_seeds,
        &edition_key,
        master_edition_account_info,
        mint_info,
        mint_authority_info,
        token_program_info,
    )?;

    Ok(())
}
