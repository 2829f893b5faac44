//
// Copyright (c) Tidepool Labs
//
// Licensed under the Apache License, Version 2.0.
// See the LICENSE file in the project root for license information.
//

use solana_pubkey::Pubkey;
use std::error::Error;
use tidepool_client::get_tick_array_address;
use tidepool_core::{
    compute_swap, next_initialized_tick_array_start_index, sqrt_price_to_price, tick_array_start_tick_index,
    try_get_max_amount_with_slippage_tolerance, try_get_min_amount_with_slippage_tolerance, SwapResult, TickArrayCache,
};

use crate::{Pool, SLIPPAGE_TOLERANCE_BPS};

/// A quote for a swap with a specified input amount.
#[derive(Debug, Clone, PartialEq)]
pub struct AmountOutQuote {
    /// The input consumed. Smaller than the requested amount only when a
    /// price limit stopped the swap early.
    pub amount_in: u64,
    pub amount_out: u64,
    /// The slippage-adjusted lower bound on the output.
    pub min_amount_out: u64,
    pub fee: u64,
    /// Pool price before the swap, token B per token A.
    pub current_price: f64,
    /// Realized price of this swap, token B per token A.
    pub execution_price: f64,
    pub price_impact_pct: f64,
    /// The accounts an on-chain swap needs, in order: pool, config,
    /// lookback tick array when initialized, then the arrays the
    /// traversal touched.
    pub required_accounts: Vec<Pubkey>,
}

/// A quote for a swap with a specified output amount.
#[derive(Debug, Clone, PartialEq)]
pub struct AmountInQuote {
    pub amount_out: u64,
    pub amount_in: u64,
    /// The slippage-adjusted upper bound on the input.
    pub max_amount_in: u64,
    pub fee: u64,
    pub current_price: f64,
    pub execution_price: f64,
    pub price_impact_pct: f64,
    pub required_accounts: Vec<Pubkey>,
}

/// Quotes an exact-input swap against a pool snapshot.
///
/// # Arguments
///
/// * `pool` - The decoded pool snapshot.
/// * `tick_arrays` - The tick arrays the traversal may need.
/// * `input_mint` - The mint of the token being sold. Must be one of the
///   pool's two mints.
/// * `amount_in` - The input amount.
/// * `slippage_tolerance_bps` - Overrides the configured slippage tolerance.
/// * `sqrt_price_limit` - Stops the swap at this price. `None` swaps to the
///   directional bound.
///
/// # Errors
///
/// Fails when the mint is foreign to the pool, a needed tick array is
/// missing from the cache, or the pool runs out of initialized liquidity
/// before the amount is filled.
pub fn compute_amount_out(
    pool: &Pool,
    tick_arrays: &TickArrayCache,
    input_mint: Pubkey,
    amount_in: u64,
    slippage_tolerance_bps: Option<u16>,
    sqrt_price_limit: Option<u128>,
) -> Result<AmountOutQuote, Box<dyn Error>> {
    let a_to_b = direction_for(pool, input_mint, true)?;
    let slippage_tolerance_bps = resolve_slippage(slippage_tolerance_bps)?;

    let result = compute_swap(
        amount_in,
        sqrt_price_limit.unwrap_or(0),
        &pool.facade(),
        pool.extension_facade(),
        tick_arrays,
        a_to_b,
        true,
    )?;

    let (consumed_in, amount_out) = if a_to_b {
        (result.token_a, result.token_b)
    } else {
        (result.token_b, result.token_a)
    };
    let min_amount_out = try_get_min_amount_with_slippage_tolerance(amount_out, slippage_tolerance_bps)?;
    let (current_price, execution_price, price_impact_pct) = price_report(pool, &result)?;

    Ok(AmountOutQuote {
        amount_in: consumed_in,
        amount_out,
        min_amount_out,
        fee: result.fee_amount,
        current_price,
        execution_price,
        price_impact_pct,
        required_accounts: required_accounts(pool, &result, a_to_b)?,
    })
}

/// Quotes an exact-output swap against a pool snapshot. The counterpart of
/// [`compute_amount_out`]: `output_mint` names the token being bought and
/// `amount_out` fixes the output side.
pub fn compute_amount_in(
    pool: &Pool,
    tick_arrays: &TickArrayCache,
    output_mint: Pubkey,
    amount_out: u64,
    slippage_tolerance_bps: Option<u16>,
    sqrt_price_limit: Option<u128>,
) -> Result<AmountInQuote, Box<dyn Error>> {
    let a_to_b = direction_for(pool, output_mint, false)?;
    let slippage_tolerance_bps = resolve_slippage(slippage_tolerance_bps)?;

    let result = compute_swap(
        amount_out,
        sqrt_price_limit.unwrap_or(0),
        &pool.facade(),
        pool.extension_facade(),
        tick_arrays,
        a_to_b,
        false,
    )?;

    let (amount_in, filled_out) = if a_to_b {
        (result.token_a, result.token_b)
    } else {
        (result.token_b, result.token_a)
    };
    let max_amount_in = try_get_max_amount_with_slippage_tolerance(amount_in, slippage_tolerance_bps)?;
    let (current_price, execution_price, price_impact_pct) = price_report(pool, &result)?;

    Ok(AmountInQuote {
        amount_out: filled_out,
        amount_in,
        max_amount_in,
        fee: result.fee_amount,
        current_price,
        execution_price,
        price_impact_pct,
        required_accounts: required_accounts(pool, &result, a_to_b)?,
    })
}

/// Maps a leg mint to the swap direction. `is_input` tells which side of
/// the trade the mint names.
fn direction_for(pool: &Pool, mint: Pubkey, is_input: bool) -> Result<bool, Box<dyn Error>> {
    if mint == pool.token_mint_a {
        Ok(is_input)
    } else if mint == pool.token_mint_b {
        Ok(!is_input)
    } else {
        Err(format!("Mint {} does not belong to pool {}", mint, pool.address).into())
    }
}

fn resolve_slippage(slippage_tolerance_bps: Option<u16>) -> Result<u16, Box<dyn Error>> {
    match slippage_tolerance_bps {
        Some(tolerance) => Ok(tolerance),
        None => Ok(*SLIPPAGE_TOLERANCE_BPS.try_lock()?),
    }
}

/// Current and realized price, both as token B per token A, plus the
/// relative difference in percent.
fn price_report(pool: &Pool, result: &SwapResult) -> Result<(f64, f64, f64), Box<dyn Error>> {
    let current_price = sqrt_price_to_price(pool.sqrt_price_x64, pool.mint_decimals_a, pool.mint_decimals_b);
    if result.token_a == 0 {
        return Err("Swap moved no tokens, execution price is undefined".into());
    }
    let ui_a = result.token_a as f64 / 10f64.powi(pool.mint_decimals_a as i32);
    let ui_b = result.token_b as f64 / 10f64.powi(pool.mint_decimals_b as i32);
    let execution_price = ui_b / ui_a;
    let price_impact_pct = (execution_price - current_price).abs() / current_price * 100.0;
    Ok((current_price, execution_price, price_impact_pct))
}

/// The ordered account list an on-chain swap with this quote would pass:
/// the pool, its config, the nearest initialized tick array behind the
/// current price when one exists, then the touched arrays in traversal
/// order.
fn required_accounts(pool: &Pool, result: &SwapResult, a_to_b: bool) -> Result<Vec<Pubkey>, Box<dyn Error>> {
    let mut accounts = vec![pool.address, pool.amm_config_address];
    if result.touched_tick_arrays.is_empty() {
        return Ok(accounts);
    }

    let current_start = tick_array_start_tick_index(pool.tick_current, pool.tick_spacing);
    let lookback = next_initialized_tick_array_start_index(&pool.facade(), pool.extension_facade(), current_start, !a_to_b)?;
    if let Some(lookback) = lookback {
        accounts.push(get_tick_array_address(&pool.address, lookback)?.0);
    }
    for &start_tick_index in &result.touched_tick_arrays {
        accounts.push(get_tick_array_address(&pool.address, start_tick_index)?.0);
    }
    Ok(accounts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use serial_test::serial;
    use tidepool_core::{TickArrayBitmapExtensionFacade, TickArrayFacade, TickFacade, ACCOUNT_LACK};

    fn test_pool(fee_rate: u32, initialized_offsets: &[i32]) -> Pool {
        let mut tick_array_bitmap = [0u64; 16];
        for &offset in initialized_offsets {
            let bit = (offset + 512) as usize;
            tick_array_bitmap[bit / 64] |= 1 << (bit % 64);
        }
        Pool {
            address: Pubkey::new_unique(),
            amm_config_address: Pubkey::new_unique(),
            token_mint_a: Pubkey::new_unique(),
            token_mint_b: Pubkey::new_unique(),
            mint_decimals_a: 6,
            mint_decimals_b: 6,
            tick_spacing: 10,
            trade_fee_rate: fee_rate,
            liquidity: 1_000_000_000,
            sqrt_price_x64: 1 << 64,
            tick_current: 0,
            tick_array_bitmap,
            extension: None,
        }
    }

    fn tick_array(start_tick_index: i32, ticks: &[(i32, i128, u128)]) -> TickArrayFacade {
        let mut array = TickArrayFacade {
            start_tick_index,
            ticks: [TickFacade::default(); 60],
        };
        for &(tick_index, liquidity_net, liquidity_gross) in ticks {
            let offset = ((tick_index - start_tick_index) / 10) as usize;
            array.ticks[offset] = TickFacade {
                liquidity_net,
                liquidity_gross,
            };
        }
        array
    }

    fn crossing_cache() -> TickArrayCache {
        [
            tick_array(-600, &[(-600, 1_000_000_000, 1_000_000_000)]),
            tick_array(600, &[(600, -500_000_000, 1_500_000_000)]),
            tick_array(1200, &[(1200, -500_000_000, 500_000_000)]),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    #[serial]
    fn test_compute_amount_out_crossing_ticks() {
        let pool = test_pool(2500, &[-1, 1, 2]);
        let quote = compute_amount_out(&pool, &crossing_cache(), pool.token_mint_b, 40_000_000, None, None).unwrap();

        assert_eq!(quote.amount_in, 40_000_000);
        assert_eq!(quote.amount_out, 38_289_702);
        assert_eq!(quote.min_amount_out, 37_906_804);
        assert_eq!(quote.fee, 100_001);
        assert_relative_eq!(quote.current_price, 1.0, epsilon = 1e-9);
        assert_relative_eq!(quote.execution_price, 40_000_000.0 / 38_289_702.0, epsilon = 1e-9);
        assert_relative_eq!(
            quote.price_impact_pct,
            (40_000_000.0 / 38_289_702.0 - 1.0) * 100.0,
            epsilon = 1e-9
        );

        // the nearest initialized array behind the price is the lookback
        assert_eq!(
            quote.required_accounts,
            vec![
                pool.address,
                pool.amm_config_address,
                get_tick_array_address(&pool.address, -600).unwrap().0,
                get_tick_array_address(&pool.address, 600).unwrap().0,
                get_tick_array_address(&pool.address, 1200).unwrap().0,
            ]
        );
    }

    #[test]
    #[serial]
    fn test_compute_amount_in() {
        let pool = test_pool(2500, &[-1, 1, 2]);
        let quote = compute_amount_in(&pool, &crossing_cache(), pool.token_mint_b, 25_000_000, None, None).unwrap();

        assert_eq!(quote.amount_out, 25_000_000);
        assert_eq!(quote.amount_in, 25_705_290);
        assert_eq!(quote.max_amount_in, 25_962_343);
        assert_eq!(quote.fee, 64_264);
        assert_eq!(
            quote.required_accounts,
            vec![
                pool.address,
                pool.amm_config_address,
                get_tick_array_address(&pool.address, 600).unwrap().0,
                get_tick_array_address(&pool.address, -600).unwrap().0,
            ]
        );
    }

    #[test]
    #[serial]
    fn test_lookback_account_included_when_initialized() {
        // segment 0 is initialized, so the traversal starts there and the
        // segment behind the entry price exists on both sides
        let pool = test_pool(2500, &[-1, 0, 1, 2]);
        let mut cache = crossing_cache();
        cache.insert(tick_array(0, &[]));

        let quote = compute_amount_out(&pool, &cache, pool.token_mint_b, 40_000_000, None, None).unwrap();
        assert_eq!(quote.amount_out, 38_289_702);
        assert_eq!(
            quote.required_accounts,
            vec![
                pool.address,
                pool.amm_config_address,
                get_tick_array_address(&pool.address, -600).unwrap().0,
                get_tick_array_address(&pool.address, 0).unwrap().0,
                get_tick_array_address(&pool.address, 600).unwrap().0,
                get_tick_array_address(&pool.address, 1200).unwrap().0,
            ]
        );

        let quote = compute_amount_in(&pool, &cache, pool.token_mint_b, 25_000_000, None, None).unwrap();
        assert_eq!(quote.amount_in, 25_705_290);
        assert_eq!(
            quote.required_accounts,
            vec![
                pool.address,
                pool.amm_config_address,
                get_tick_array_address(&pool.address, 600).unwrap().0,
                get_tick_array_address(&pool.address, 0).unwrap().0,
                get_tick_array_address(&pool.address, -600).unwrap().0,
            ]
        );
    }

    #[test]
    #[serial]
    fn test_lookback_found_at_any_distance() {
        // sparse liquidity: the array behind the price sits three segments
        // away, the adjacent segments are all uninitialized
        let pool = test_pool(2500, &[-1, 3]);
        let cache: TickArrayCache = [tick_array(-600, &[(-600, 1_000_000_000, 1_000_000_000)])].into_iter().collect();

        let quote = compute_amount_out(&pool, &cache, pool.token_mint_a, 1_000_000, None, None).unwrap();
        assert_eq!(
            quote.required_accounts,
            vec![
                pool.address,
                pool.amm_config_address,
                get_tick_array_address(&pool.address, 1800).unwrap().0,
                get_tick_array_address(&pool.address, -600).unwrap().0,
            ]
        );
    }

    #[test]
    #[serial]
    fn test_explicit_slippage_overrides_configuration() {
        let pool = test_pool(2500, &[-1, 1, 2]);
        let quote = compute_amount_out(&pool, &crossing_cache(), pool.token_mint_b, 40_000_000, Some(0), None).unwrap();
        assert_eq!(quote.min_amount_out, quote.amount_out);
    }

    #[test]
    #[serial]
    fn test_foreign_mint_rejected() {
        let pool = test_pool(2500, &[-1, 1, 2]);
        let result = compute_amount_out(&pool, &crossing_cache(), Pubkey::new_unique(), 40_000_000, None, None);
        assert!(result.is_err());
    }

    #[test]
    #[serial]
    fn test_missing_tick_array_surfaces_account_lack() {
        let pool = test_pool(2500, &[-1, 1, 2]);
        let cache: TickArrayCache = [tick_array(600, &[(600, -500_000_000, 1_500_000_000)])].into_iter().collect();
        let result = compute_amount_out(&pool, &cache, pool.token_mint_b, 40_000_000, None, None);
        assert_eq!(result.unwrap_err().to_string(), ACCOUNT_LACK);
    }

    #[test]
    #[serial]
    fn test_extension_pool_quotes() {
        let mut pool = test_pool(2500, &[-1, 1, 2]);
        pool.extension = Some(TickArrayBitmapExtensionFacade {
            negative_tick_array_bitmap: [[0; 8]; 14],
            positive_tick_array_bitmap: [[0; 8]; 14],
        });
        let quote = compute_amount_out(&pool, &crossing_cache(), pool.token_mint_b, 40_000_000, None, None).unwrap();
        assert_eq!(quote.amount_out, 38_289_702);
    }
}
