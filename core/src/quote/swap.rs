//
// Copyright (c) Tidepool Labs
//
// Licensed under the Apache License, Version 2.0.
// See the LICENSE file in the project root for license information.
//

use crate::{
    check_tick_array_is_initialized, is_tick_array_initialized, next_initialized_tick_array_start_index,
    sqrt_price_to_tick_index, tick_array_start_tick_index, tick_index_to_sqrt_price, try_apply_swap_fee,
    try_get_amount_delta_a, try_get_amount_delta_b, try_get_max_amount_with_slippage_tolerance,
    try_get_min_amount_with_slippage_tolerance, try_get_next_sqrt_price_from_a, try_get_next_sqrt_price_from_b,
    try_get_swap_fee_on_amount, ClmmPoolFacade, CoreError, ExactInSwapQuote, ExactOutSwapQuote, SwapResult,
    TickArrayBitmapExtensionFacade, TickArrayCache, ACCOUNT_LACK, AMOUNT_EXCEEDS_MAX_U64, ARITHMETIC_OVERFLOW,
    INVALID_SQRT_PRICE_LIMIT_DIRECTION, INVALID_TICK_ARRAY, MAX_SQRT_PRICE, MIN_SQRT_PRICE,
    SQRT_PRICE_LIMIT_OUT_OF_BOUNDS, TICK_ARRAY_SIZE, ZERO_TRADABLE_AMOUNT,
};

/// Computes the amounts of tokens A and B that move in an exact-in swap,
/// given the current pool state and the cached tick arrays, and applies the
/// slippage tolerance to the output estimate.
///
/// # Arguments
/// - `token_in`: The input token amount, fees included.
/// - `a_to_b`: The direction of the swap.
/// - `slippage_tolerance_bps`: The slippage tolerance in basis points.
/// - `pool`: The pool state.
/// - `extension`: The pool's tick array bitmap extension, if one exists.
/// - `tick_arrays`: The tick arrays the traversal may need.
///
/// # Returns
/// The exact-in swap quote.
pub fn swap_quote_by_input_token(
    token_in: u64,
    a_to_b: bool,
    slippage_tolerance_bps: u16,
    pool: &ClmmPoolFacade,
    extension: Option<&TickArrayBitmapExtensionFacade>,
    tick_arrays: &TickArrayCache,
) -> Result<ExactInSwapQuote, CoreError> {
    let swap_result = compute_swap(token_in, 0, pool, extension, tick_arrays, a_to_b, true)?;

    let (token_in, token_est_out) = if a_to_b {
        (swap_result.token_a, swap_result.token_b)
    } else {
        (swap_result.token_b, swap_result.token_a)
    };

    let token_min_out = try_get_min_amount_with_slippage_tolerance(token_est_out, slippage_tolerance_bps)?;

    Ok(ExactInSwapQuote {
        token_in,
        token_est_out,
        token_min_out,
        trade_fee: swap_result.fee_amount,
        next_sqrt_price: swap_result.next_sqrt_price,
    })
}

/// Computes the input amount required to receive `token_out` of the output
/// token, given the current pool state and the cached tick arrays, and
/// applies the slippage tolerance to the input estimate.
///
/// # Arguments
/// - `token_out`: The output token amount.
/// - `a_to_b`: The direction of the swap.
/// - `slippage_tolerance_bps`: The slippage tolerance in basis points.
/// - `pool`: The pool state.
/// - `extension`: The pool's tick array bitmap extension, if one exists.
/// - `tick_arrays`: The tick arrays the traversal may need.
///
/// # Returns
/// The exact-out swap quote.
pub fn swap_quote_by_output_token(
    token_out: u64,
    a_to_b: bool,
    slippage_tolerance_bps: u16,
    pool: &ClmmPoolFacade,
    extension: Option<&TickArrayBitmapExtensionFacade>,
    tick_arrays: &TickArrayCache,
) -> Result<ExactOutSwapQuote, CoreError> {
    let swap_result = compute_swap(token_out, 0, pool, extension, tick_arrays, a_to_b, false)?;

    let (token_out, token_est_in) = if a_to_b {
        (swap_result.token_b, swap_result.token_a)
    } else {
        (swap_result.token_a, swap_result.token_b)
    };

    let token_max_in = try_get_max_amount_with_slippage_tolerance(token_est_in, slippage_tolerance_bps)?;

    Ok(ExactOutSwapQuote {
        token_out,
        token_est_in,
        token_max_in,
        trade_fee: swap_result.fee_amount,
        next_sqrt_price: swap_result.next_sqrt_price,
    })
}

/// Runs the swap loop over the cached pool state.
///
/// The traversal resolves the next initialized tick through the merged
/// bitmap index. Every tick array it reads must be present in `tick_arrays`,
/// otherwise the computation fails with `ACCOUNT_LACK`. Running past the
/// last initialized tick array in the swap direction fails with
/// `INVALID_TICK_ARRAY`. Reaching the sqrt price limit with amount to spare
/// is a partial fill and succeeds; the result reports the consumed amounts.
///
/// # Arguments
/// - `token_amount`: The token amount the swap specifies.
/// - `sqrt_price_limit`: The price at which the swap stops, or 0 for the
///   directional default.
/// - `pool`: The pool state.
/// - `extension`: The pool's tick array bitmap extension, if one exists.
/// - `tick_arrays`: The tick arrays the traversal may need.
/// - `a_to_b`: The direction of the swap.
/// - `specified_input`: If `true`, `token_amount` fixes the input side.
///   Otherwise it fixes the output side.
///
/// # Returns
/// The token amounts moved, the fee taken, and the end-of-swap pool state.
pub fn compute_swap(
    token_amount: u64,
    sqrt_price_limit: u128,
    pool: &ClmmPoolFacade,
    extension: Option<&TickArrayBitmapExtensionFacade>,
    tick_arrays: &TickArrayCache,
    a_to_b: bool,
    specified_input: bool,
) -> Result<SwapResult, CoreError> {
    let sqrt_price_limit = if sqrt_price_limit == 0 {
        if a_to_b {
            MIN_SQRT_PRICE + 1
        } else {
            MAX_SQRT_PRICE - 1
        }
    } else {
        sqrt_price_limit
    };

    if !(MIN_SQRT_PRICE..=MAX_SQRT_PRICE).contains(&sqrt_price_limit) {
        return Err(SQRT_PRICE_LIMIT_OUT_OF_BOUNDS);
    }

    if a_to_b && sqrt_price_limit >= pool.sqrt_price || !a_to_b && sqrt_price_limit <= pool.sqrt_price {
        return Err(INVALID_SQRT_PRICE_LIMIT_DIRECTION);
    }

    if token_amount == 0 {
        return Err(ZERO_TRADABLE_AMOUNT);
    }

    let ticks_in_array = pool.tick_spacing as i32 * TICK_ARRAY_SIZE as i32;
    let (first_initialized, mut current_array_start) =
        check_tick_array_is_initialized(pool, extension, pool.tick_current_index)?;
    if !first_initialized {
        current_array_start =
            next_initialized_tick_array_start_index(pool, extension, current_array_start, a_to_b)?.ok_or(INVALID_TICK_ARRAY)?;
    }
    if !tick_arrays.contains(current_array_start) {
        return Err(ACCOUNT_LACK);
    }
    let mut touched_tick_arrays = vec![current_array_start];

    // Seed the working tick inside the first initialized array so the scan
    // picks up a tick sitting exactly on the array's start index.
    let mut tick_current_index = if pool.tick_current_index >= current_array_start {
        pool.tick_current_index.min(current_array_start + ticks_in_array - 1)
    } else {
        current_array_start - 1
    };

    let mut amount_remaining = token_amount;
    let mut amount_calculated: u64 = 0;
    let mut current_sqrt_price = pool.sqrt_price;
    let mut current_liquidity = pool.liquidity;
    let mut fee_amount: u64 = 0;

    while amount_remaining > 0 && current_sqrt_price != sqrt_price_limit {
        let (next_tick_index, liquidity_net) = next_initialized_tick(
            pool,
            extension,
            tick_arrays,
            &mut touched_tick_arrays,
            &mut current_array_start,
            tick_current_index,
            a_to_b,
        )?;
        let next_tick_sqrt_price = tick_index_to_sqrt_price(next_tick_index)?;
        let target_sqrt_price = if a_to_b {
            next_tick_sqrt_price.max(sqrt_price_limit)
        } else {
            next_tick_sqrt_price.min(sqrt_price_limit)
        };

        let step = compute_swap_step(
            amount_remaining,
            pool.fee_rate,
            current_liquidity,
            current_sqrt_price,
            target_sqrt_price,
            a_to_b,
            specified_input,
        )?;

        fee_amount = fee_amount.checked_add(step.fee_amount).ok_or(ARITHMETIC_OVERFLOW)?;
        if specified_input {
            amount_remaining = amount_remaining
                .checked_sub(step.amount_in)
                .ok_or(ARITHMETIC_OVERFLOW)?
                .checked_sub(step.fee_amount)
                .ok_or(ARITHMETIC_OVERFLOW)?;
            amount_calculated = amount_calculated.checked_add(step.amount_out).ok_or(ARITHMETIC_OVERFLOW)?;
        } else {
            amount_remaining = amount_remaining.checked_sub(step.amount_out).ok_or(ARITHMETIC_OVERFLOW)?;
            amount_calculated = amount_calculated
                .checked_add(step.amount_in)
                .ok_or(ARITHMETIC_OVERFLOW)?
                .checked_add(step.fee_amount)
                .ok_or(ARITHMETIC_OVERFLOW)?;
        }

        if step.next_sqrt_price == next_tick_sqrt_price {
            current_liquidity = get_next_liquidity(current_liquidity, liquidity_net, a_to_b)?;
            tick_current_index = if a_to_b { next_tick_index - 1 } else { next_tick_index };
        } else if step.next_sqrt_price != current_sqrt_price {
            tick_current_index = sqrt_price_to_tick_index(step.next_sqrt_price)?;
        }
        current_sqrt_price = step.next_sqrt_price;
    }

    let swapped_amount = token_amount - amount_remaining;
    let (token_a, token_b) = if a_to_b == specified_input {
        (swapped_amount, amount_calculated)
    } else {
        (amount_calculated, swapped_amount)
    };

    Ok(SwapResult {
        token_a,
        token_b,
        fee_amount,
        next_sqrt_price: current_sqrt_price,
        next_liquidity: current_liquidity,
        next_tick_index: tick_current_index,
        touched_tick_arrays,
    })
}

/// Resolves the next initialized tick from the working tick, reading through
/// the bitmap index and the tick array cache. Records every array read in
/// `touched_tick_arrays`, first touch first.
fn next_initialized_tick(
    pool: &ClmmPoolFacade,
    extension: Option<&TickArrayBitmapExtensionFacade>,
    tick_arrays: &TickArrayCache,
    touched_tick_arrays: &mut Vec<i32>,
    current_array_start: &mut i32,
    tick_current_index: i32,
    a_to_b: bool,
) -> Result<(i32, i128), CoreError> {
    let search_start = tick_array_start_tick_index(tick_current_index, pool.tick_spacing);
    if search_start == *current_array_start || is_tick_array_initialized(pool, extension, search_start)? {
        let tick_array = tick_arrays.get(search_start).ok_or(ACCOUNT_LACK)?;
        record_touched(touched_tick_arrays, search_start);
        *current_array_start = search_start;
        if let Some((tick_index, tick)) = tick_array.next_initialized_tick(tick_current_index, pool.tick_spacing, a_to_b) {
            return Ok((tick_index, tick.liquidity_net));
        }
    } else {
        *current_array_start = search_start;
    }
    loop {
        let next_array_start =
            next_initialized_tick_array_start_index(pool, extension, *current_array_start, a_to_b)?.ok_or(INVALID_TICK_ARRAY)?;
        let tick_array = tick_arrays.get(next_array_start).ok_or(ACCOUNT_LACK)?;
        record_touched(touched_tick_arrays, next_array_start);
        *current_array_start = next_array_start;
        if let Some((tick_index, tick)) = tick_array.next_initialized_tick(tick_current_index, pool.tick_spacing, a_to_b) {
            return Ok((tick_index, tick.liquidity_net));
        }
    }
}

fn record_touched(touched_tick_arrays: &mut Vec<i32>, start_tick_index: i32) {
    if !touched_tick_arrays.contains(&start_tick_index) {
        touched_tick_arrays.push(start_tick_index);
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
struct SwapStepQuote {
    amount_in: u64,
    amount_out: u64,
    next_sqrt_price: u128,
    fee_amount: u64,
}

fn compute_swap_step(
    amount_remaining: u64,
    fee_rate: u32,
    current_liquidity: u128,
    current_sqrt_price: u128,
    target_sqrt_price: u128,
    a_to_b: bool,
    specified_input: bool,
) -> Result<SwapStepQuote, CoreError> {
    // The fixed delta to the target may not fit a u64. That alone does not
    // fail the step: the tradable amount is capped at u64 anyway.
    let initial_amount_fixed_delta =
        try_get_amount_fixed_delta(current_sqrt_price, target_sqrt_price, current_liquidity, a_to_b, specified_input);
    if let Err(e) = initial_amount_fixed_delta {
        if e != AMOUNT_EXCEEDS_MAX_U64 {
            return Err(e);
        }
    }

    let amount_calculated = if specified_input {
        try_apply_swap_fee(amount_remaining, fee_rate)?
    } else {
        amount_remaining
    };

    let next_sqrt_price = match initial_amount_fixed_delta {
        Ok(delta) if delta <= amount_calculated => target_sqrt_price,
        _ => try_get_next_sqrt_price(current_sqrt_price, current_liquidity, amount_calculated, a_to_b, specified_input)?,
    };

    let is_max_swap = next_sqrt_price == target_sqrt_price;

    let amount_unfixed_delta =
        try_get_amount_unfixed_delta(current_sqrt_price, next_sqrt_price, current_liquidity, a_to_b, specified_input)?;

    // The fixed delta is exact only if the target was reached without rounding.
    let amount_fixed_delta = if !is_max_swap || initial_amount_fixed_delta.is_err() {
        try_get_amount_fixed_delta(current_sqrt_price, next_sqrt_price, current_liquidity, a_to_b, specified_input)?
    } else {
        initial_amount_fixed_delta?
    };

    let (amount_in, mut amount_out) = if specified_input {
        (amount_fixed_delta, amount_unfixed_delta)
    } else {
        (amount_unfixed_delta, amount_fixed_delta)
    };

    if !specified_input {
        amount_out = amount_out.min(amount_remaining);
    }

    // A step that stops short of its target eats the entire remaining input;
    // whatever the curve did not absorb is the fee.
    let fee_amount = if specified_input && !is_max_swap {
        amount_remaining.checked_sub(amount_in).ok_or(ARITHMETIC_OVERFLOW)?
    } else {
        try_get_swap_fee_on_amount(amount_in, fee_rate)?
    };

    Ok(SwapStepQuote {
        amount_in,
        amount_out,
        next_sqrt_price,
        fee_amount,
    })
}

fn get_next_liquidity(current_liquidity: u128, liquidity_net: i128, a_to_b: bool) -> Result<u128, CoreError> {
    let liquidity_net = if a_to_b { -liquidity_net } else { liquidity_net };
    if liquidity_net >= 0 {
        current_liquidity.checked_add(liquidity_net as u128).ok_or(ARITHMETIC_OVERFLOW)
    } else {
        current_liquidity.checked_sub(liquidity_net.unsigned_abs()).ok_or(ARITHMETIC_OVERFLOW)
    }
}

fn try_get_amount_fixed_delta(
    current_sqrt_price: u128,
    target_sqrt_price: u128,
    current_liquidity: u128,
    a_to_b: bool,
    specified_input: bool,
) -> Result<u64, CoreError> {
    if a_to_b == specified_input {
        try_get_amount_delta_a(current_sqrt_price, target_sqrt_price, current_liquidity, specified_input)
    } else {
        try_get_amount_delta_b(current_sqrt_price, target_sqrt_price, current_liquidity, specified_input)
    }
}

fn try_get_amount_unfixed_delta(
    current_sqrt_price: u128,
    target_sqrt_price: u128,
    current_liquidity: u128,
    a_to_b: bool,
    specified_input: bool,
) -> Result<u64, CoreError> {
    if a_to_b == specified_input {
        try_get_amount_delta_b(current_sqrt_price, target_sqrt_price, current_liquidity, !specified_input)
    } else {
        try_get_amount_delta_a(current_sqrt_price, target_sqrt_price, current_liquidity, !specified_input)
    }
}

fn try_get_next_sqrt_price(
    current_sqrt_price: u128,
    current_liquidity: u128,
    amount: u64,
    a_to_b: bool,
    specified_input: bool,
) -> Result<u128, CoreError> {
    if a_to_b == specified_input {
        try_get_next_sqrt_price_from_a(current_sqrt_price, current_liquidity, amount, specified_input)
    } else {
        try_get_next_sqrt_price_from_b(current_sqrt_price, current_liquidity, amount, specified_input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{TickArrayFacade, TickFacade, POOL_TICK_ARRAY_BITMAP_SIZE};

    const Q64: u128 = 1u128 << 64;
    const LIQUIDITY: u128 = 1_000_000_000;
    const SQRT_PRICE_600: u128 = 19008502556559483654;
    const SQRT_PRICE_NEG_600: u128 = 17901587245414725977;

    fn test_pool(fee_rate: u32, initialized_offsets: &[i32]) -> ClmmPoolFacade {
        let mut bitmap = [0u64; POOL_TICK_ARRAY_BITMAP_SIZE];
        for &offset in initialized_offsets {
            let bit = (offset + 512) as usize;
            bitmap[bit / 64] |= 1u64 << (bit % 64);
        }
        ClmmPoolFacade {
            tick_spacing: 10,
            fee_rate,
            liquidity: LIQUIDITY,
            sqrt_price: Q64,
            tick_current_index: 0,
            tick_array_bitmap: bitmap,
        }
    }

    fn test_tick_array(start_tick_index: i32, initialized_ticks: &[(i32, i128, u128)]) -> TickArrayFacade {
        let mut ticks = [TickFacade::default(); TICK_ARRAY_SIZE];
        for &(tick_index, liquidity_net, liquidity_gross) in initialized_ticks {
            let offset = ((tick_index - start_tick_index) / 10) as usize;
            ticks[offset] = TickFacade {
                liquidity_net,
                liquidity_gross,
            };
        }
        TickArrayFacade { start_tick_index, ticks }
    }

    fn one_sided_cache() -> TickArrayCache {
        [test_tick_array(-600, &[(-600, 1_000_000_000, 1_000_000_000)])].into_iter().collect()
    }

    fn crossing_cache() -> TickArrayCache {
        [
            test_tick_array(-600, &[(-600, 1_000_000_000, 1_000_000_000)]),
            test_tick_array(600, &[(600, -500_000_000, 1_500_000_000)]),
            test_tick_array(1200, &[(1200, -500_000_000, 500_000_000)]),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_exact_in_single_step() {
        let pool = test_pool(0, &[-1]);
        let result = compute_swap(1_000_000, 0, &pool, None, &one_sided_cache(), true, true).unwrap();
        assert_eq!(result.token_a, 1_000_000);
        assert_eq!(result.token_b, 999_000);
        assert_eq!(result.fee_amount, 0);
        assert_eq!(result.next_sqrt_price, 18428315757951600016);
        assert_eq!(result.next_liquidity, LIQUIDITY);
        assert_eq!(result.next_tick_index, -20);
        assert_eq!(result.touched_tick_arrays, vec![-600]);
    }

    #[test]
    fn test_exact_in_crossing_a_tick() {
        let pool = test_pool(2500, &[-1, 1, 2]);
        let result = compute_swap(40_000_000, 0, &pool, None, &crossing_cache(), false, true).unwrap();
        assert_eq!(result.token_a, 38289702);
        assert_eq!(result.token_b, 40_000_000);
        assert_eq!(result.fee_amount, 100001);
        assert_eq!(result.next_sqrt_price, 19357035708023033396);
        assert_eq!(result.next_liquidity, 500_000_000);
        assert_eq!(result.next_tick_index, 963);
        assert_eq!(result.touched_tick_arrays, vec![600, 1200]);
    }

    #[test]
    fn test_crossing_reduces_liquidity_for_later_steps() {
        // continuation of the crossing swap: past tick 600 the remaining
        // input trades against the halved liquidity
        let target = tick_index_to_sqrt_price(1200).unwrap();
        let step = compute_swap_step(9_470_687, 2500, 500_000_000, SQRT_PRICE_600, target, false, true).unwrap();
        assert_eq!(step.amount_in, 9447010);
        assert_eq!(step.amount_out, 8736692);
        assert_eq!(step.next_sqrt_price, 19357035708023033396);
        assert_eq!(step.fee_amount, 23677);
    }

    #[test]
    fn test_exact_out() {
        let pool = test_pool(2500, &[-1, 1, 2]);
        let result = compute_swap(25_000_000, 0, &pool, None, &crossing_cache(), true, false).unwrap();
        assert_eq!(result.token_a, 25705290);
        assert_eq!(result.token_b, 25_000_000);
        assert_eq!(result.fee_amount, 64264);
        assert_eq!(result.next_sqrt_price, 17985575471866812825);
        assert_eq!(result.touched_tick_arrays, vec![-600]);
    }

    #[test]
    fn test_partial_fill_at_price_limit() {
        let pool = test_pool(0, &[-1]);
        let limit = 18439368326379000016;
        let result = compute_swap(1_000_000, limit, &pool, None, &one_sided_cache(), true, true).unwrap();
        assert_eq!(result.token_a, 400_000);
        assert_eq!(result.token_b, 399_840);
        assert_eq!(result.next_sqrt_price, limit);
        assert_eq!(result.touched_tick_arrays, vec![-600]);
    }

    #[test]
    fn test_missing_tick_array_fails() {
        let pool = test_pool(2500, &[-1, 1, 2]);
        let cache: TickArrayCache = [
            test_tick_array(-600, &[(-600, 1_000_000_000, 1_000_000_000)]),
            test_tick_array(600, &[(600, -500_000_000, 1_500_000_000)]),
        ]
        .into_iter()
        .collect();
        let result = compute_swap(40_000_000, 0, &pool, None, &cache, false, true);
        assert!(matches!(result, Err(ACCOUNT_LACK)));
    }

    #[test]
    fn test_missing_first_tick_array_fails() {
        let pool = test_pool(2500, &[-1, 1, 2]);
        let cache: TickArrayCache = [
            test_tick_array(-600, &[(-600, 1_000_000_000, 1_000_000_000)]),
            test_tick_array(1200, &[(1200, -500_000_000, 500_000_000)]),
        ]
        .into_iter()
        .collect();
        let result = compute_swap(40_000_000, 0, &pool, None, &cache, false, true);
        assert!(matches!(result, Err(ACCOUNT_LACK)));
    }

    #[test]
    fn test_running_out_of_initialized_tick_arrays_fails() {
        let pool = test_pool(0, &[-1]);
        let result = compute_swap(1_000_000_000_000_000, 0, &pool, None, &one_sided_cache(), true, true);
        assert!(matches!(result, Err(INVALID_TICK_ARRAY)));
    }

    #[test]
    fn test_zero_amount_fails() {
        let pool = test_pool(0, &[-1]);
        let result = compute_swap(0, 0, &pool, None, &one_sided_cache(), true, true);
        assert!(matches!(result, Err(ZERO_TRADABLE_AMOUNT)));
    }

    #[test]
    fn test_sqrt_price_limit_validation() {
        let pool = test_pool(0, &[-1]);
        let result = compute_swap(1_000_000, MAX_SQRT_PRICE + 1, &pool, None, &one_sided_cache(), false, true);
        assert!(matches!(result, Err(SQRT_PRICE_LIMIT_OUT_OF_BOUNDS)));
        let result = compute_swap(1_000_000, Q64 + 1, &pool, None, &one_sided_cache(), true, true);
        assert!(matches!(result, Err(INVALID_SQRT_PRICE_LIMIT_DIRECTION)));
    }

    #[test]
    fn test_swap_quote_by_input_token() {
        let pool = test_pool(2500, &[-1, 1, 2]);
        let quote = swap_quote_by_input_token(40_000_000, false, 100, &pool, None, &crossing_cache()).unwrap();
        assert_eq!(quote.token_in, 40_000_000);
        assert_eq!(quote.token_est_out, 38289702);
        assert_eq!(quote.token_min_out, 37906804);
        assert_eq!(quote.trade_fee, 100001);
        assert_eq!(quote.next_sqrt_price, 19357035708023033396);
    }

    #[test]
    fn test_swap_quote_by_output_token() {
        let pool = test_pool(2500, &[-1, 1, 2]);
        let quote = swap_quote_by_output_token(25_000_000, true, 100, &pool, None, &crossing_cache()).unwrap();
        assert_eq!(quote.token_out, 25_000_000);
        assert_eq!(quote.token_est_in, 25705290);
        assert_eq!(quote.token_max_in, 25962343);
        assert_eq!(quote.trade_fee, 64264);
        assert_eq!(quote.next_sqrt_price, 17985575471866812825);
    }

    #[test]
    fn test_compute_swap_step_reaches_target() {
        let step = compute_swap_step(40_000_000, 2500, LIQUIDITY, Q64, SQRT_PRICE_600, false, true).unwrap();
        assert_eq!(step.amount_in, 30452989);
        assert_eq!(step.amount_out, 29553010);
        assert_eq!(step.next_sqrt_price, SQRT_PRICE_600);
        assert_eq!(step.fee_amount, 76324);
    }

    #[test]
    fn test_compute_swap_step_partial() {
        let step = compute_swap_step(1_000_000, 2500, LIQUIDITY, Q64, SQRT_PRICE_600, false, true).unwrap();
        assert_eq!(step.amount_in, 997500);
        assert_eq!(step.amount_out, 996505);
        assert_eq!(step.next_sqrt_price, 18465144700923076893);
        assert_eq!(step.fee_amount, 2500);
    }

    #[test]
    fn test_compute_swap_step_exact_out() {
        let step = compute_swap_step(40_000_000, 2500, LIQUIDITY, Q64, SQRT_PRICE_NEG_600, true, false).unwrap();
        assert_eq!(step.amount_in, 30452989);
        assert_eq!(step.amount_out, 29553010);
        assert_eq!(step.next_sqrt_price, SQRT_PRICE_NEG_600);
        assert_eq!(step.fee_amount, 76324);

        let step = compute_swap_step(10_000_000, 2500, LIQUIDITY, Q64, SQRT_PRICE_NEG_600, true, false).unwrap();
        assert_eq!(step.amount_in, 10101011);
        assert_eq!(step.amount_out, 10_000_000);
        assert_eq!(step.next_sqrt_price, 18262276632972456099);
        assert_eq!(step.fee_amount, 25316);
    }

    #[test]
    fn test_get_next_liquidity() {
        assert_eq!(get_next_liquidity(1000, 500, false), Ok(1500));
        assert_eq!(get_next_liquidity(1000, 500, true), Ok(500));
        assert_eq!(get_next_liquidity(1000, -500, false), Ok(500));
        assert_eq!(get_next_liquidity(1000, -500, true), Ok(1500));
        assert_eq!(get_next_liquidity(0, -1, false), Err(ARITHMETIC_OVERFLOW));
    }
}
