use anchor_lang::prelude::*;

#[error_code]
pub enum StablecoinError {
    #[msg("Invalid amount: must be greater than 0")]
    InvalidAmount,

    #[msg("Insufficient balance to burn")]
    InsufficientBalance,

    #[msg("Arithmetic overflow")]
    ArithmeticOverflow,

    #[msg("Token name must not be empty")]
    EmptyName,

    #[msg("Token name is too long (max 32 bytes)")]
    NameTooLong,

    #[msg("Token symbol must not be empty")]
    EmptySymbol,

    #[msg("Token symbol is too long (max 10 bytes)")]
    SymbolTooLong,

    #[msg("Metadata URI is too long (max 200 bytes)")]
    UriTooLong,

    #[msg("Invalid mint decimals - must be at most 9")]
    InvalidDecimals,
}
