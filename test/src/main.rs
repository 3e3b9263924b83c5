use solana_client::rpc_client::RpcClient;
use solana_program::program_pack::Pack;
use solana_sdk::{
    pubkey::Pubkey,
    signature::{read_keypair_file, Keypair, Signer},
    system_instruction::create_account,
    transaction::Transaction,
};
use spl_associated_token_account::{create_associated_token_account, get_associated_token_address};
use spl_master_edition::{
    instruction::create_master_edition,
    pda::{find_master_edition_address, find_metadata_address},
    state::{MasterEdition, Metadata},
    utils::try_from_slice_unchecked,
};
use spl_token::{instruction::initialize_mint, state::Mint};
use std::str::FromStr;
// -------- UPDATE START -------

const KEYPAIR_PATH: &str = "/home/solana/.config/solana/id.json";
const MASTER_EDITION_PROGRAM_PUBKEY: &str = "edi884XQM1CqwckayiVJ1mFFHLv53h3ierCZSoNNU9Y";
const TOKEN_PROGRAM_PUBKEY: &str = "TokenkegQfeZyiNwAJbNbGKPFXCWuBvf9Ss623VQ5DA";
const CLUSTER_ADDRESS: &str = "https://api.devnet.solana.com";
const NFT_NAME: &str = "Sunrise";
const NFT_SYMBOL: &str = "SUN";
const NFT_URI: &str = "https://example.org/sunrise.json";

// -------- UPDATE END ---------
pub fn main() {
    let client = RpcClient::new(CLUSTER_ADDRESS.to_owned());
    let payer = read_keypair_file(KEYPAIR_PATH).unwrap();
    let program_key = Pubkey::from_str(MASTER_EDITION_PROGRAM_PUBKEY).unwrap();
    let token_key = Pubkey::from_str(TOKEN_PROGRAM_PUBKEY).unwrap();

    // The mint address is newly generated; every other address derives from it.
    let new_mint = Keypair::new();
    let mint_key = new_mint.pubkey();
    let token_account_key = get_associated_token_address(&payer.pubkey(), &mint_key);
    let (metadata_key, _) = find_metadata_address(&program_key, &mint_key);
    let (master_edition_key, _) = find_master_edition_address(&program_key, &mint_key);
    println!("Mint account: {}", mint_key);
    println!("Token account: {}", token_account_key);
    println!("Metadata address: {}", metadata_key);
    println!("Master edition address: {}", master_edition_key);

    // One transaction: create the zero-supply, zero-decimals mint and the
    // associated token account, then hand both to the program. The program
    // mints the single token, creates the metadata and master edition
    // accounts at the derived addresses, and revokes the mint authority.
    let mut transaction = Transaction::new_with_payer(
        &[
            create_account(
                &payer.pubkey(),
                &mint_key,
                client
                    .get_minimum_balance_for_rent_exemption(Mint::LEN)
                    .unwrap(),
                Mint::LEN as u64,
                &token_key,
            ),
            initialize_mint(
                &token_key,
                &mint_key,
                &payer.pubkey(),
                Some(&payer.pubkey()),
                0,
            )
            .unwrap(),
            create_associated_token_account(&payer.pubkey(), &payer.pubkey(), &mint_key),
            create_master_edition(
                program_key,
                metadata_key,
                master_edition_key,
                mint_key,
                payer.pubkey(),
                token_account_key,
                payer.pubkey(),
                NFT_NAME.to_owned(),
                NFT_SYMBOL.to_owned(),
                NFT_URI.to_owned(),
            ),
        ],
        Some(&payer.pubkey()),
    );
    let recent_blockhash = client.get_recent_blockhash().unwrap().0;
    transaction.sign(&[&payer, &new_mint], recent_blockhash);
    let signature = client.send_and_confirm_transaction(&transaction).unwrap();
    println!("Master edition creation, transaction signature: {}", signature);

    let account = client.get_account(&metadata_key).unwrap();
    let metadata: Metadata = try_from_slice_unchecked(&account.data).unwrap();
    println!(
        "Metadata created with name {:?}, symbol {:?}, uri {:?}",
        metadata.data.name, metadata.data.symbol, metadata.data.uri
    );

    let account = client.get_account(&master_edition_key).unwrap();
    let master_edition: MasterEdition = try_from_slice_unchecked(&account.data).unwrap();
    println!(
        "Master edition created with max supply {:?}, no further token can be minted",
        master_edition.max_supply
    );
}
