//! A master edition program for the Solana blockchain.
//!
//! Finalizes a freshly created token mint as a one-of-one NFT: creates the
//! metadata and master edition accounts at their derived addresses and
//! permanently revokes the caller's ability to mint further tokens.

pub mod entrypoint;
pub mod error;
pub mod instruction;
pub mod pda;
pub mod processor;
pub mod state;
pub mod utils;

// Export current sdk types for downstream users building with a different sdk version
pub use solana_program;

solana_program::declare_id!("edi884XQM1CqwckayiVJ1mFFHLv53h3ierCZSoNNU9Y");
