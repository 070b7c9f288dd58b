use anchor_lang::prelude::*;
use anchor_spl::associated_token::AssociatedToken;
use anchor_spl::token::{self, Burn, Mint, Token, TokenAccount};
use crate::config::*;
use crate::errors::*;

#[derive(Accounts)]
pub struct BurnToken<'info> {
    /// Holder burning tokens (authority over `destination`)
    #[account(mut)]
    pub user: Signer<'info>,

    #[account(
        mut,
        seeds = [MINT_SEED],
        bump,
    )]
    pub token_mint: Account<'info, Mint>,

    /// User's associated token account, debited by the burn
    #[account(
        mut,
        associated_token::mint = token_mint,
        associated_token::authority = user,
    )]
    pub destination: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub system_program: Program<'info, System>,
}

/// Redeem `quantity` minor units from the signer's balance
pub fn handler(ctx: Context<BurnToken>, quantity: u64) -> Result<()> {
    require!(quantity > 0, StablecoinError::InvalidAmount);

    let balance = ctx.accounts.destination.amount;
    require!(balance >= quantity, StablecoinError::InsufficientBalance);

    token::burn(
        CpiContext::new(
            ctx.accounts.token_program.to_account_info(),
            Burn {
                mint: ctx.accounts.token_mint.to_account_info(),
                from: ctx.accounts.destination.to_account_info(),
                authority: ctx.accounts.user.to_account_info(),
            },
        ),
        quantity,
    )?;

    ctx.accounts.destination.reload()?;
    ctx.accounts.token_mint.reload()?;

    let remaining_balance = ctx.accounts.destination.amount;
    let new_supply = ctx.accounts.token_mint.supply;

    msg!("Burned {} from {}", quantity, ctx.accounts.destination.key());
    msg!("Balance: {} -> {}, supply: {}", balance, remaining_balance, new_supply);

    emit!(TokenBurned {
        mint: ctx.accounts.token_mint.key(),
        source: ctx.accounts.destination.key(),
        user: ctx.accounts.user.key(),
        amount: quantity,
        remaining_balance,
        new_supply,
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}

/// Event emitted on every redemption
#[event]
pub struct TokenBurned {
    pub mint: Pubkey,
    pub source: Pubkey,
    pub user: Pubkey,
    pub amount: u64,
    pub remaining_balance: u64,
    pub new_supply: u64,
    pub timestamp: i64,
}
