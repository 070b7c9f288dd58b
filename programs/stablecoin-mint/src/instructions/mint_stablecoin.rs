use anchor_lang::prelude::*;
use anchor_spl::associated_token::AssociatedToken;
use anchor_spl::token::{self, Mint, MintTo, Token, TokenAccount};
use crate::config::*;
use crate::errors::*;

#[derive(Accounts)]
pub struct MintStablecoin<'info> {
    /// Receives the tokens and pays for the holder account on first use
    #[account(mut)]
    pub user: Signer<'info>,

    #[account(
        mut,
        seeds = [MINT_SEED],
        bump,
        mint::authority = token_mint,
    )]
    pub token_mint: Account<'info, Mint>,

    /// User's associated token account, created lazily
    #[account(
        init_if_needed,
        payer = user,
        associated_token::mint = token_mint,
        associated_token::authority = user,
    )]
    pub destination: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub system_program: Program<'info, System>,
    pub rent: Sysvar<'info, Rent>,
}

/// Issue `quantity` minor units to the signer
///
/// The mint PDA signs as mint authority. Supply overflow is checked here so
/// the failure carries this program's error code.
pub fn handler(ctx: Context<MintStablecoin>, quantity: u64) -> Result<()> {
    require!(quantity > 0, StablecoinError::InvalidAmount);

    ctx.accounts
        .token_mint
        .supply
        .checked_add(quantity)
        .ok_or(StablecoinError::ArithmeticOverflow)?;

    let bump_seed = [ctx.bumps.token_mint];
    let mint_seeds: &[&[u8]] = &[MINT_SEED, &bump_seed];

    token::mint_to(
        CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            MintTo {
                mint: ctx.accounts.token_mint.to_account_info(),
                to: ctx.accounts.destination.to_account_info(),
                authority: ctx.accounts.token_mint.to_account_info(),
            },
            &[mint_seeds],
        ),
        quantity,
    )?;

    ctx.accounts.destination.reload()?;
    ctx.accounts.token_mint.reload()?;

    let new_balance = ctx.accounts.destination.amount;
    let new_supply = ctx.accounts.token_mint.supply;

    msg!("✓ Minted {} to {}", quantity, ctx.accounts.destination.key());
    msg!("Balance: {}, supply: {}", new_balance, new_supply);

    emit!(StablecoinMinted {
        mint: ctx.accounts.token_mint.key(),
        destination: ctx.accounts.destination.key(),
        user: ctx.accounts.user.key(),
        amount: quantity,
        new_balance,
        new_supply,
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}

/// Event emitted on every issuance
#[event]
pub struct StablecoinMinted {
    pub mint: Pubkey,
    pub destination: Pubkey,
    pub user: Pubkey,
    pub amount: u64,
    pub new_balance: u64,
    pub new_supply: u64,
    pub timestamp: i64,
}
