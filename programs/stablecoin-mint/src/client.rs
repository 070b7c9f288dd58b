//! Off-chain helpers: address derivation, instruction builders and balance reads.
//!
//! Addresses here are bit-exact with what the program checks on-chain, so a
//! client built on these helpers never has to hardcode a PDA.

use anchor_lang::prelude::*;
use anchor_lang::solana_program::{instruction::Instruction, system_program, sysvar};
use anchor_lang::{AccountDeserialize, InstructionData};
use anchor_spl::associated_token::{self, get_associated_token_address};
use anchor_spl::token::{self, TokenAccount};
use mpl_token_metadata::ID as TOKEN_METADATA_PROGRAM_ID;

use crate::config::*;
use crate::state::InitTokenParams;

/// Mint PDA and its bump
pub fn find_mint_address() -> (Pubkey, u8) {
    Pubkey::find_program_address(&[MINT_SEED], &crate::ID)
}

pub fn mint_address() -> Pubkey {
    find_mint_address().0
}

/// Metaplex metadata PDA for `mint`: ["metadata", metadata_program, mint]
pub fn metadata_address(mint: &Pubkey) -> Pubkey {
    Pubkey::find_program_address(
        &[METADATA_SEED, TOKEN_METADATA_PROGRAM_ID.as_ref(), mint.as_ref()],
        &TOKEN_METADATA_PROGRAM_ID,
    )
    .0
}

/// Holder balance record: the owner's associated token account for the stablecoin
pub fn holder_address(owner: &Pubkey) -> Pubkey {
    get_associated_token_address(owner, &mint_address())
}

pub fn initialize_token(user: &Pubkey, params: InitTokenParams) -> Instruction {
    let token_mint = mint_address();

    Instruction {
        program_id: crate::ID,
        accounts: crate::accounts::InitializeToken {
            user: *user,
            token_mint,
            metadata: metadata_address(&token_mint),
            token_metadata_program: TOKEN_METADATA_PROGRAM_ID,
            system_program: system_program::ID,
            token_program: token::ID,
            rent: sysvar::rent::ID,
        }
        .to_account_metas(None),
        data: crate::instruction::InitializeToken { metadata: params }.data(),
    }
}

/// `initialize_token` only when the mint account does not exist yet.
/// Initialization is one-shot; a repeat would fail on-chain.
pub fn initialize_token_if_absent(
    mint_exists: bool,
    user: &Pubkey,
    params: InitTokenParams,
) -> Option<Instruction> {
    if mint_exists {
        return None;
    }
    Some(initialize_token(user, params))
}

/// Mint `quantity` minor units to `user`'s holder account
pub fn mint_stablecoin(user: &Pubkey, quantity: u64) -> Instruction {
    Instruction {
        program_id: crate::ID,
        accounts: crate::accounts::MintStablecoin {
            user: *user,
            token_mint: mint_address(),
            destination: holder_address(user),
            token_program: token::ID,
            associated_token_program: associated_token::ID,
            system_program: system_program::ID,
            rent: sysvar::rent::ID,
        }
        .to_account_metas(None),
        data: crate::instruction::MintStablecoin { quantity }.data(),
    }
}

/// Burn `quantity` minor units from `user`'s holder account
pub fn burn_token(user: &Pubkey, quantity: u64) -> Instruction {
    Instruction {
        program_id: crate::ID,
        accounts: crate::accounts::BurnToken {
            user: *user,
            token_mint: mint_address(),
            destination: holder_address(user),
            token_program: token::ID,
            associated_token_program: associated_token::ID,
            system_program: system_program::ID,
        }
        .to_account_metas(None),
        data: crate::instruction::BurnToken { quantity }.data(),
    }
}

/// Balance of a holder account in minor units.
///
/// `None` (account not found) reads as zero: the holder simply has not
/// received anything yet. Malformed data is still an error.
pub fn balance_or_zero(account_data: Option<&[u8]>) -> Result<u64> {
    match account_data {
        None => Ok(0),
        Some(mut data) => Ok(TokenAccount::try_deserialize(&mut data)?.amount),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anchor_lang::Discriminator;

    fn params() -> InitTokenParams {
        InitTokenParams {
            name: "COUNTRYYYY".to_string(),
            symbol: "CTR".to_string(),
            uri: "https://arweave.net/metadata.json".to_string(),
            decimals: 9,
        }
    }

    #[test]
    fn mint_address_is_deterministic_and_off_curve() {
        let (mint, bump) = find_mint_address();
        assert_eq!(mint, mint_address());
        assert!(!mint.is_on_curve());
        assert_eq!(
            Pubkey::create_program_address(&[MINT_SEED, &[bump]], &crate::ID).unwrap(),
            mint
        );
    }

    #[test]
    fn metadata_address_matches_metaplex_derivation() {
        let mint = mint_address();
        let (expected, _) = mpl_token_metadata::accounts::Metadata::find_pda(&mint);
        assert_eq!(metadata_address(&mint), expected);
    }

    #[test]
    fn holder_address_is_per_owner() {
        let alice = Pubkey::new_unique();
        let bob = Pubkey::new_unique();
        assert_eq!(holder_address(&alice), holder_address(&alice));
        assert_ne!(holder_address(&alice), holder_address(&bob));
        assert_eq!(
            holder_address(&alice),
            get_associated_token_address(&alice, &mint_address())
        );
    }

    #[test]
    fn initialize_instruction_layout() {
        let user = Pubkey::new_unique();
        let ix = initialize_token(&user, params());

        assert_eq!(ix.program_id, crate::ID);
        let keys: Vec<Pubkey> = ix.accounts.iter().map(|m| m.pubkey).collect();
        assert_eq!(
            keys,
            vec![
                user,
                mint_address(),
                metadata_address(&mint_address()),
                TOKEN_METADATA_PROGRAM_ID,
                system_program::ID,
                token::ID,
                sysvar::rent::ID,
            ]
        );
        assert!(ix.accounts[0].is_signer && ix.accounts[0].is_writable);
        assert!(ix.accounts[1].is_writable && ix.accounts[2].is_writable);

        assert_eq!(&ix.data[..8], crate::instruction::InitializeToken::DISCRIMINATOR.as_slice());
        let decoded = InitTokenParams::try_from_slice(&ix.data[8..]).unwrap();
        assert_eq!(decoded, params());
    }

    #[test]
    fn mint_and_burn_target_the_holder_account() {
        let user = Pubkey::new_unique();

        let mint_ix = mint_stablecoin(&user, 1_000);
        assert_eq!(mint_ix.accounts[2].pubkey, holder_address(&user));
        assert_eq!(mint_ix.accounts.len(), 7);
        assert_eq!(&mint_ix.data[8..], 1_000u64.to_le_bytes().as_slice());

        let burn_ix = burn_token(&user, 500);
        assert_eq!(burn_ix.accounts[2].pubkey, holder_address(&user));
        assert_eq!(burn_ix.accounts.len(), 6);
        assert_eq!(&burn_ix.data[8..], 500u64.to_le_bytes().as_slice());

        assert_ne!(mint_ix.data[..8], burn_ix.data[..8]);
    }

    #[test]
    fn skips_initialization_when_mint_exists() {
        let user = Pubkey::new_unique();
        assert!(initialize_token_if_absent(true, &user, params()).is_none());
        assert!(initialize_token_if_absent(false, &user, params()).is_some());
    }

    #[test]
    fn missing_holder_account_reads_as_zero() {
        assert_eq!(balance_or_zero(None).unwrap(), 0);
    }

    #[test]
    fn malformed_holder_account_is_an_error() {
        assert!(balance_or_zero(Some(&[1u8, 2, 3][..])).is_err());
    }
}
