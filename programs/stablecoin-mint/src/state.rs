use anchor_lang::prelude::*;
use crate::config::*;
use crate::errors::*;

/// Descriptor passed to `initialize_token`
///
/// `name`, `symbol` and `uri` go to the Metaplex metadata account,
/// `decimals` becomes the precision of the SPL mint.
#[derive(AnchorSerialize, AnchorDeserialize, Debug, Clone, PartialEq, Eq)]
pub struct InitTokenParams {
    pub name: String,
    pub symbol: String,
    pub uri: String,
    pub decimals: u8,
}

impl InitTokenParams {
    /// Reject descriptors the metadata program would refuse, before any
    /// account gets allocated
    pub fn validate(&self) -> Result<()> {
        require!(!self.name.is_empty(), StablecoinError::EmptyName);
        require!(self.name.len() <= MAX_NAME_LENGTH, StablecoinError::NameTooLong);

        require!(!self.symbol.is_empty(), StablecoinError::EmptySymbol);
        require!(self.symbol.len() <= MAX_SYMBOL_LENGTH, StablecoinError::SymbolTooLong);

        require!(self.uri.len() <= MAX_URI_LENGTH, StablecoinError::UriTooLong);

        require!(self.decimals <= MAX_DECIMALS, StablecoinError::InvalidDecimals);

        Ok(())
    }
}
