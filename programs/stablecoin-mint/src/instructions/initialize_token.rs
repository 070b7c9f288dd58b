use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token};
use mpl_token_metadata::{
    ID as TOKEN_METADATA_PROGRAM_ID,
    instructions::CreateMetadataAccountV3CpiBuilder,
    types::DataV2,
};
use crate::config::*;
use crate::state::*;

#[derive(Accounts)]
#[instruction(params: InitTokenParams)]
pub struct InitializeToken<'info> {
    /// Payer for the mint and metadata accounts
    #[account(mut)]
    pub user: Signer<'info>,

    /// Stablecoin mint. The PDA is both the mint address and its own
    /// mint authority, so only this program can issue.
    #[account(
        init,
        payer = user,
        seeds = [MINT_SEED],
        bump,
        mint::decimals = params.decimals,
        mint::authority = token_mint,
    )]
    pub token_mint: Account<'info, Mint>,

    /// Metadata account to be created (PDA derived from mint)
    /// CHECK: Created and owned by the Metaplex program; address is pinned by seeds
    #[account(
        mut,
        seeds = [
            METADATA_SEED,
            token_metadata_program.key().as_ref(),
            token_mint.key().as_ref()
        ],
        bump,
        seeds::program = token_metadata_program.key(),
    )]
    pub metadata: UncheckedAccount<'info>,

    /// CHECK: This is the Metaplex Token Metadata program
    #[account(address = TOKEN_METADATA_PROGRAM_ID)]
    pub token_metadata_program: UncheckedAccount<'info>,

    pub system_program: Program<'info, System>,
    pub token_program: Program<'info, Token>,
    pub rent: Sysvar<'info, Rent>,
}

/// Create the stablecoin mint and its Metaplex metadata
///
/// The mint itself is allocated by the `init` constraint. A second call
/// fails there, because the system program refuses to allocate an address
/// that is already in use.
///
/// Metadata is immutable and its update authority is the mint PDA.
pub fn handler(ctx: Context<InitializeToken>, params: InitTokenParams) -> Result<()> {
    params.validate()?;

    msg!("Initializing stablecoin mint");
    msg!("  Mint: {}", ctx.accounts.token_mint.key());
    msg!("  Name: {}", params.name);
    msg!("  Symbol: {}", params.symbol);
    msg!("  URI: {}", params.uri);
    msg!("  Decimals: {}", params.decimals);

    let bump_seed = [ctx.bumps.token_mint];
    let mint_seeds: &[&[u8]] = &[MINT_SEED, &bump_seed];

    CreateMetadataAccountV3CpiBuilder::new(&ctx.accounts.token_metadata_program.to_account_info())
        .metadata(&ctx.accounts.metadata.to_account_info())
        .mint(&ctx.accounts.token_mint.to_account_info())
        .mint_authority(&ctx.accounts.token_mint.to_account_info())
        .payer(&ctx.accounts.user.to_account_info())
        .update_authority(&ctx.accounts.token_mint.to_account_info(), true)
        .system_program(&ctx.accounts.system_program.to_account_info())
        .rent(Some(&ctx.accounts.rent.to_account_info()))
        .data(DataV2 {
            name: params.name.clone(),
            symbol: params.symbol.clone(),
            uri: params.uri.clone(),
            seller_fee_basis_points: 0,
            creators: None,
            collection: None,
            uses: None,
        })
        .is_mutable(false)
        .invoke_signed(&[mint_seeds])?;

    msg!("✓ Token mint and metadata created");

    emit!(TokenInitialized::new(
        ctx.accounts.token_mint.key(),
        ctx.accounts.metadata.key(),
        ctx.accounts.user.key(),
        params,
        Clock::get()?.unix_timestamp,
    ));

    Ok(())
}

/// Event emitted once, when the mint and its metadata are created
#[event]
pub struct TokenInitialized {
    pub mint: Pubkey,
    pub metadata: Pubkey,
    /// Mint and metadata update authority (the mint PDA itself)
    pub authority: Pubkey,
    pub payer: Pubkey,
    pub name: String,
    pub symbol: String,
    pub uri: String,
    pub decimals: u8,
    pub timestamp: i64,
}

impl TokenInitialized {
    pub fn new(
        mint: Pubkey,
        metadata: Pubkey,
        payer: Pubkey,
        params: InitTokenParams,
        timestamp: i64,
    ) -> Self {
        Self {
            mint,
            metadata,
            authority: mint,
            payer,
            name: params.name,
            symbol: params.symbol,
            uri: params.uri,
            decimals: params.decimals,
            timestamp,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initialized_event_reports_mint_pda_as_authority() {
        let mint = Pubkey::new_unique();
        let metadata = Pubkey::new_unique();
        let payer = Pubkey::new_unique();
        let params = InitTokenParams {
            name: "COUNTRYYYY".to_string(),
            symbol: "CTR".to_string(),
            uri: "https://arweave.net/metadata.json".to_string(),
            decimals: 9,
        };

        let event = TokenInitialized::new(mint, metadata, payer, params.clone(), 1_700_000_000);

        assert_eq!(event.authority, mint);
        assert_ne!(event.authority, payer);
        assert_eq!(event.payer, payer);
        assert_eq!(event.metadata, metadata);
        assert_eq!(event.name, params.name);
        assert_eq!(event.symbol, params.symbol);
        assert_eq!(event.uri, params.uri);
        assert_eq!(event.decimals, params.decimals);
        assert_eq!(event.timestamp, 1_700_000_000);
    }
}
