use anchor_lang::prelude::*;

#[cfg(not(target_os = "solana"))]
pub mod client;
pub mod errors;
pub mod instructions;
pub mod math;
pub mod state;

use instructions::*;
pub use errors::StablecoinError;
pub use state::InitTokenParams;

declare_id!("rtGDFZ7iMErBqCZYbP794g3tfsvEeWRQoWMDcRxscCM");

/// Seeds and limits shared by the program and its clients
pub mod config {
    /// Seed of the mint PDA. The PDA is also the mint and update authority.
    pub const MINT_SEED: &[u8] = b"stablecoin_mint";

    /// Metaplex metadata PDA prefix: ["metadata", metadata_program, mint]
    pub const METADATA_SEED: &[u8] = b"metadata";

    /// Metaplex Token Metadata limits (bytes)
    pub const MAX_NAME_LENGTH: usize = 32;
    pub const MAX_SYMBOL_LENGTH: usize = 10;
    pub const MAX_URI_LENGTH: usize = 200;

    /// Largest accepted mint precision. 10^9 whole units of a 9-decimal
    /// token still fit in a u64 of minor units.
    pub const MAX_DECIMALS: u8 = 9;
}

#[program]
pub mod stablecoin_mint {
    use super::*;

    /// Create the stablecoin mint PDA and attach Metaplex metadata (run once)
    pub fn initialize_token(ctx: Context<InitializeToken>, metadata: InitTokenParams) -> Result<()> {
        instructions::initialize_token::handler(ctx, metadata)
    }

    /// Mint `quantity` minor units into the caller's associated token account,
    /// creating the account on first use
    pub fn mint_stablecoin(ctx: Context<MintStablecoin>, quantity: u64) -> Result<()> {
        instructions::mint_stablecoin::handler(ctx, quantity)
    }

    /// Burn `quantity` minor units from the caller's associated token account
    pub fn burn_token(ctx: Context<BurnToken>, quantity: u64) -> Result<()> {
        instructions::burn_token::handler(ctx, quantity)
    }
}
