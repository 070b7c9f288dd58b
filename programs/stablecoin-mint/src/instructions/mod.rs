pub mod initialize_token;
pub mod mint_stablecoin;
pub mod burn_token;

pub use initialize_token::*;
pub use mint_stablecoin::*;
pub use burn_token::*;
