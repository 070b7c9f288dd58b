use anchor_lang::prelude::*;
use crate::config::MAX_DECIMALS;
use crate::errors::*;

/// 10^decimals, for decimals the program accepts
pub fn unit_scale(decimals: u8) -> Result<u64> {
    require!(decimals <= MAX_DECIMALS, StablecoinError::InvalidDecimals);
    10u64
        .checked_pow(decimals as u32)
        .ok_or(error!(StablecoinError::ArithmeticOverflow))
}

/// Whole units -> minor units (`whole * 10^decimals`)
pub fn to_minor_units(whole: u64, decimals: u8) -> Result<u64> {
    whole
        .checked_mul(unit_scale(decimals)?)
        .ok_or(error!(StablecoinError::ArithmeticOverflow))
}

/// Minor units -> UI amount, the value RPC nodes report as `uiAmount`
pub fn to_ui_amount(minor: u64, decimals: u8) -> f64 {
    minor as f64 / 10f64.powi(decimals as i32)
}
