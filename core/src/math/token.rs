//
// Copyright (c) Tidepool Labs
//
// Licensed under the Apache License, Version 2.0.
// See the LICENSE file in the project root for license information.
//

use ethnum::U256;

use crate::{
    CoreError, AMOUNT_EXCEEDS_MAX_U64, ARITHMETIC_OVERFLOW, FEE_RATE_MUL_VALUE, INVALID_SLIPPAGE_TOLERANCE,
};

const BPS_DENOMINATOR: u64 = 10_000;

/// Multiplies `a` by `b` and divides by `denominator`, rounding the result
/// down or up per `round_up`. Intermediates are 256 bits wide.
pub fn try_mul_div(a: u128, b: u128, denominator: u128, round_up: bool) -> Result<u128, CoreError> {
    if denominator == 0 {
        return Err(ARITHMETIC_OVERFLOW);
    }
    let product = U256::from(a).checked_mul(U256::from(b)).ok_or(ARITHMETIC_OVERFLOW)?;
    let quotient = try_div_round(product, U256::from(denominator), round_up)?;
    quotient.try_into().map_err(|_| ARITHMETIC_OVERFLOW)
}

fn try_div_round(numerator: U256, denominator: U256, round_up: bool) -> Result<U256, CoreError> {
    if denominator == U256::ZERO {
        return Err(ARITHMETIC_OVERFLOW);
    }
    let quotient = numerator / denominator;
    if round_up && numerator % denominator != U256::ZERO {
        quotient.checked_add(U256::ONE).ok_or(ARITHMETIC_OVERFLOW)
    } else {
        Ok(quotient)
    }
}

fn order_sqrt_prices(sqrt_price_1: u128, sqrt_price_2: u128) -> (u128, u128) {
    if sqrt_price_1 < sqrt_price_2 {
        (sqrt_price_1, sqrt_price_2)
    } else {
        (sqrt_price_2, sqrt_price_1)
    }
}

/// Amount of token A moved between two sqrt prices at constant liquidity.
///
/// delta_a = L * (1/sqrt_lower - 1/sqrt_upper), computed as a two-stage
/// division so that rounding up always rounds both stages up.
pub fn try_get_amount_delta_a(sqrt_price_1: u128, sqrt_price_2: u128, liquidity: u128, round_up: bool) -> Result<u64, CoreError> {
    let (sqrt_price_lower, sqrt_price_upper) = order_sqrt_prices(sqrt_price_1, sqrt_price_2);
    let numerator = (U256::from(liquidity) << 64u32)
        .checked_mul(U256::from(sqrt_price_upper - sqrt_price_lower))
        .ok_or(ARITHMETIC_OVERFLOW)?;
    let quotient = try_div_round(numerator, U256::from(sqrt_price_upper), round_up)?;
    let amount = try_div_round(quotient, U256::from(sqrt_price_lower), round_up)?;
    amount.try_into().map_err(|_| AMOUNT_EXCEEDS_MAX_U64)
}

/// Amount of token B moved between two sqrt prices at constant liquidity.
///
/// delta_b = L * (sqrt_upper - sqrt_lower) / 2^64.
pub fn try_get_amount_delta_b(sqrt_price_1: u128, sqrt_price_2: u128, liquidity: u128, round_up: bool) -> Result<u64, CoreError> {
    let (sqrt_price_lower, sqrt_price_upper) = order_sqrt_prices(sqrt_price_1, sqrt_price_2);
    let product = U256::from(liquidity)
        .checked_mul(U256::from(sqrt_price_upper - sqrt_price_lower))
        .ok_or(ARITHMETIC_OVERFLOW)?;
    let amount = try_div_round(product, U256::ONE << 64u32, round_up)?;
    amount.try_into().map_err(|_| AMOUNT_EXCEEDS_MAX_U64)
}

/// Sqrt price reached after moving `amount` of token A into (`add`) or out of
/// the pool at constant liquidity. Rounds the result up so the trader never
/// receives more than the exact amount would allow.
pub fn try_get_next_sqrt_price_from_a(sqrt_price: u128, liquidity: u128, amount: u64, add: bool) -> Result<u128, CoreError> {
    if amount == 0 {
        return Ok(sqrt_price);
    }
    let numerator = U256::from(liquidity) << 64u32;
    let product = U256::from(amount).checked_mul(U256::from(sqrt_price)).ok_or(ARITHMETIC_OVERFLOW)?;
    let denominator = if add {
        numerator.checked_add(product).ok_or(ARITHMETIC_OVERFLOW)?
    } else {
        if numerator <= product {
            return Err(ARITHMETIC_OVERFLOW);
        }
        numerator - product
    };
    let next_sqrt_price = try_div_round(
        numerator.checked_mul(U256::from(sqrt_price)).ok_or(ARITHMETIC_OVERFLOW)?,
        denominator,
        true,
    )?;
    next_sqrt_price.try_into().map_err(|_| ARITHMETIC_OVERFLOW)
}

/// Sqrt price reached after moving `amount` of token B into (`add`) or out of
/// the pool at constant liquidity. The price delta rounds down when adding
/// and up when removing.
pub fn try_get_next_sqrt_price_from_b(sqrt_price: u128, liquidity: u128, amount: u64, add: bool) -> Result<u128, CoreError> {
    if amount == 0 {
        return Ok(sqrt_price);
    }
    if liquidity == 0 {
        return Err(ARITHMETIC_OVERFLOW);
    }
    let numerator = U256::from(amount) << 64u32;
    let delta: u128 = try_div_round(numerator, U256::from(liquidity), !add)?.try_into().map_err(|_| ARITHMETIC_OVERFLOW)?;
    if add {
        sqrt_price.checked_add(delta).ok_or(ARITHMETIC_OVERFLOW)
    } else {
        sqrt_price.checked_sub(delta).ok_or(ARITHMETIC_OVERFLOW)
    }
}

/// Deducts the swap fee from an input amount, rounding down.
pub fn try_apply_swap_fee(amount: u64, fee_rate: u32) -> Result<u64, CoreError> {
    if fee_rate >= FEE_RATE_MUL_VALUE {
        return Err(ARITHMETIC_OVERFLOW);
    }
    let amount = amount as u128 * (FEE_RATE_MUL_VALUE - fee_rate) as u128 / FEE_RATE_MUL_VALUE as u128;
    Ok(amount as u64)
}

/// Fee charged on top of a net input amount, rounding up:
/// ceil(amount * fee_rate / (1e6 - fee_rate)).
pub fn try_get_swap_fee_on_amount(amount: u64, fee_rate: u32) -> Result<u64, CoreError> {
    if fee_rate >= FEE_RATE_MUL_VALUE {
        return Err(ARITHMETIC_OVERFLOW);
    }
    let fee = try_mul_div(amount as u128, fee_rate as u128, (FEE_RATE_MUL_VALUE - fee_rate) as u128, true)?;
    fee.try_into().map_err(|_| AMOUNT_EXCEEDS_MAX_U64)
}

/// Lower bound for an output amount under the given slippage tolerance.
pub fn try_get_min_amount_with_slippage_tolerance(amount: u64, slippage_tolerance_bps: u16) -> Result<u64, CoreError> {
    if slippage_tolerance_bps as u64 > BPS_DENOMINATOR {
        return Err(INVALID_SLIPPAGE_TOLERANCE);
    }
    let amount = amount as u128 * (BPS_DENOMINATOR - slippage_tolerance_bps as u64) as u128 / BPS_DENOMINATOR as u128;
    Ok(amount as u64)
}

/// Upper bound for an input amount under the given slippage tolerance.
pub fn try_get_max_amount_with_slippage_tolerance(amount: u64, slippage_tolerance_bps: u16) -> Result<u64, CoreError> {
    if slippage_tolerance_bps as u64 > BPS_DENOMINATOR {
        return Err(INVALID_SLIPPAGE_TOLERANCE);
    }
    let amount = try_mul_div(
        amount as u128,
        (BPS_DENOMINATOR + slippage_tolerance_bps as u64) as u128,
        BPS_DENOMINATOR as u128,
        true,
    )?;
    amount.try_into().map_err(|_| AMOUNT_EXCEEDS_MAX_U64)
}
