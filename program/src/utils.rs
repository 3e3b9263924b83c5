//! Account helpers shared by the processor

use {
    crate::error::MasterEditionError,
    borsh::BorshDeserialize,
    solana_program::{
        account_info::AccountInfo,
        entrypoint::ProgramResult,
        msg,
        program::{invoke, invoke_signed},
        program_error::ProgramError,
        program_pack::{IsInitialized, Pack},
        pubkey::Pubkey,
        system_instruction,
        sysvar::{rent::Rent, Sysvar},
    },
    spl_token::{
        instruction::{set_authority, AuthorityType},
        state::Mint,
    },
    std::convert::TryInto,
};

/// Deserialize account data without requiring the whole buffer to be
/// consumed; accounts are allocated at their maximum serialized size, so
/// shorter values leave zero padding behind the variable-length fields.
pub fn try_from_slice_unchecked<T: BorshDeserialize>(data: &[u8]) -> Result<T, ProgramError> {
    let mut data_mut = data;
    let result = T::deserialize(&mut data_mut)?;
    Ok(result)
}

/// assert initialized account
pub fn assert_initialized<T: Pack + IsInitialized>(
    account_info: &AccountInfo,
) -> Result<T, ProgramError> {
    let account: T = T::unpack_unchecked(&account_info.data.borrow())?;
    if !account.is_initialized() {
        Err(MasterEditionError::Uninitialized.into())
    } else {
        Ok(account)
    }
}

pub fn assert_mint_authority_matches_mint(
    mint: &Mint,
    mint_authority_info: &AccountInfo,
) -> ProgramResult {
    match mint.mint_authority {
        solana_program::program_option::COption::None => {
            return Err(MasterEditionError::InvalidMintAuthority.into());
        }
        solana_program::program_option::COption::Some(key) => {
            if *mint_authority_info.key != key {
                return Err(MasterEditionError::InvalidMintAuthority.into());
            }
        }
    }

    if !mint_authority_info.is_signer {
        return Err(MasterEditionError::NotMintAuthority.into());
    }

    Ok(())
}

/// Create account almost from scratch, lifted from
/// https://github.com/solana-labs/solana-program-library/blob/7d4873c61721aca25464d42cc5ef651a7923ca79/associated-token-account/program/src/processor.rs#L51-L98
#[inline(always)]
pub fn create_or_allocate_account_raw<'a>(
    program_id: Pubkey,
    new_account_info: &AccountInfo<'a>,
    rent_sysvar_info: &AccountInfo<'a>,
    system_program_info: &AccountInfo<'a>,
    payer_info: &AccountInfo<'a>,
    size: usize,
    signer_seeds: &[&[u8]],
) -> ProgramResult {
    let rent = &Rent::from_account_info(rent_sysvar_info)?;
    let required_lamports = rent
        .minimum_balance(size)
        .max(1)
        .saturating_sub(new_account_info.lamports());

    if required_lamports > 0 {
        msg!("Transfer {} lamports to the new account", required_lamports);
        invoke(
            &system_instruction::transfer(payer_info.key, new_account_info.key, required_lamports),
            &[
                payer_info.clone(),
                new_account_info.clone(),
                system_program_info.clone(),
            ],
        )?;
    }

    msg!("Allocate space for the account");
    invoke_signed(
        &system_instruction::allocate(new_account_info.key, size.try_into().unwrap()),
        &[new_account_info.clone(), system_program_info.clone()],
        &[signer_seeds],
    )?;

    msg!("Assign the account to the owning program");
    invoke_signed(
        &system_instruction::assign(new_account_info.key, &program_id),
        &[new_account_info.clone(), system_program_info.clone()],
        &[signer_seeds],
    )?;

    Ok(())
}

/// Moves both the mint and freeze authority of the mint to the master
/// edition account. The edition address is off-curve, so once this returns
/// no further token can ever be minted or frozen by an outside signer.
pub fn transfer_mint_authority<'a>(
    edition_authority_seeds: &[&[u8]],
    edition_key: &Pubkey,
    edition_account_info: &AccountInfo<'a>,
    mint_info: &AccountInfo<'a>,
    mint_authority_info: &AccountInfo<'a>,
    token_program_info: &AccountInfo<'a>,
) -> ProgramResult {
    msg!("Setting mint authority");
    invoke_signed(
        &set_authority(
            token_program_info.key,
            mint_info.key,
            Some(edition_key),
            AuthorityType::MintTokens,
            mint_authority_info.key,
            &[mint_authority_info.key],
        )?,
        &[
            mint_authority_info.clone(),
            mint_info.clone(),
            token_program_info.clone(),
            edition_account_info.clone(),
        ],
        &[edition_authority_seeds],
    )
    .map_err(|_| ProgramError::from(MasterEditionError::SetAuthorityFailed))?;

    msg!("Setting freeze authority");
    invoke_signed(
        &set_authority(
            token_program_info.key,
            mint_info.key,
            Some(edition_key),
            AuthorityType::FreezeAccount,
            mint_authority_info.key,
            &[mint_authority_info.key],
        )?,
        &[
            mint_authority_info.clone(),
            mint_info.clone(),
            token_program_info.clone(),
            edition_account_info.clone(),
        ],
        &[edition_authority_seeds],
    )
    .map_err(|_| ProgramError::from(MasterEditionError::SetAuthorityFailed))?;

    Ok(())
}

pub fn spl_token_mint_to(params: TokenMintToParams<'_>) -> ProgramResult {
    let TokenMintToParams {
        mint,
        destination,
        authority,
        token_program,
        amount,
    } = params;
    let result = invoke(
        &spl_token::instruction::mint_to(
            token_program.key,
            mint.key,
            destination.key,
            authority.key,
            &[],
            amount,
        )?,
        &[mint, destination, authority, token_program],
    );
    result.map_err(|_| MasterEditionError::TokenMintToFailed.into())
}

/// TokenMintToParams
pub struct TokenMintToParams<'a> {
    /// mint
    pub mint: AccountInfo<'a>,
    /// destination
    pub destination: AccountInfo<'a>,
    /// amount
    pub amount: u64,
    /// authority, a signer of the outer transaction
    pub authority: AccountInfo<'a>,
    /// token_program
    pub token_program: AccountInfo<'a>,
}
