//
// Copyright (c) Tidepool Labs
//
// Licensed under the Apache License, Version 2.0.
// See the LICENSE file in the project root for license information.
//

use crate::{
    CoreError, MAX_SQRT_PRICE, MAX_TICK_INDEX, MIN_SQRT_PRICE, MIN_TICK_INDEX, SQRT_PRICE_OUT_OF_BOUNDS, TICK_ARRAY_SIZE,
    TICK_INDEX_OUT_OF_BOUNDS,
};

const BIT_PRECISION: u32 = 16;
const LOG_B_2_X32: i128 = 59543866431248;
const LOG_B_P_ERR_MARGIN_LOWER_X64: i128 = 184467440737095516;
const LOG_B_P_ERR_MARGIN_UPPER_X64: i128 = 15793534762490258745;

/// Calculates 1.0001^(tick/2) as a Q64.64 number representing
/// the square root of the b/a token ratio at the given tick index.
///
/// # Parameters
/// - `tick_index`: A i32 integer representing the tick index
///
/// # Returns
/// - `u128`: the sqrt price at the given tick index
pub fn tick_index_to_sqrt_price(tick_index: i32) -> Result<u128, CoreError> {
    let abs_tick = tick_index.unsigned_abs();
    if abs_tick > MAX_TICK_INDEX as u32 {
        return Err(TICK_INDEX_OUT_OF_BOUNDS);
    }

    let mut ratio: u128 = if abs_tick & 0x1 != 0 { 0xfffcb933bd6fb800 } else { 1u128 << 64 };

    // Q64.64 multipliers for 1.0001^-(2^i / 2), i = 1..18.
    // The running ratio stays at or below 2^64 so the products fit in a u128.
    if abs_tick & 0x2 != 0 {
        ratio = (ratio * 0xfff97272373d4000) >> 64
    };
    if abs_tick & 0x4 != 0 {
        ratio = (ratio * 0xfff2e50f5f657000) >> 64
    };
    if abs_tick & 0x8 != 0 {
        ratio = (ratio * 0xffe5caca7e10f000) >> 64
    };
    if abs_tick & 0x10 != 0 {
        ratio = (ratio * 0xffcb9843d60f7000) >> 64
    };
    if abs_tick & 0x20 != 0 {
        ratio = (ratio * 0xff973b41fa98e800) >> 64
    };
    if abs_tick & 0x40 != 0 {
        ratio = (ratio * 0xff2ea16466c9b000) >> 64
    };
    if abs_tick & 0x80 != 0 {
        ratio = (ratio * 0xfe5dee046a9a3800) >> 64
    };
    if abs_tick & 0x100 != 0 {
        ratio = (ratio * 0xfcbe86c7900bb000) >> 64
    };
    if abs_tick & 0x200 != 0 {
        ratio = (ratio * 0xf987a7253ac65800) >> 64
    };
    if abs_tick & 0x400 != 0 {
        ratio = (ratio * 0xf3392b0822bb6000) >> 64
    };
    if abs_tick & 0x800 != 0 {
        ratio = (ratio * 0xe7159475a2caf000) >> 64
    };
    if abs_tick & 0x1000 != 0 {
        ratio = (ratio * 0xd097f3bdfd2f2000) >> 64
    };
    if abs_tick & 0x2000 != 0 {
        ratio = (ratio * 0xa9f746462d9f8000) >> 64
    };
    if abs_tick & 0x4000 != 0 {
        ratio = (ratio * 0x70d869a156f31c00) >> 64
    };
    if abs_tick & 0x8000 != 0 {
        ratio = (ratio * 0x31be135f97ed3200) >> 64
    };
    if abs_tick & 0x10000 != 0 {
        ratio = (ratio * 0x9aa508b5b85a500) >> 64
    };
    if abs_tick & 0x20000 != 0 {
        ratio = (ratio * 0x5d6af8dedc582c) >> 64
    };
    if abs_tick & 0x40000 != 0 {
        ratio = (ratio * 0x2216e584f5fa) >> 64
    }

    if tick_index > 0 {
        ratio = u128::MAX / ratio;
    }

    Ok(ratio)
}

/// Calculates the greatest tick index whose sqrt price is less than or equal
/// to the given Q64.64 sqrt price.
///
/// # Parameters
/// - `sqrt_price`: A u128 integer representing the sqrt price
///
/// # Returns
/// - `i32`: the tick index at the given sqrt price
pub fn sqrt_price_to_tick_index(sqrt_price: u128) -> Result<i32, CoreError> {
    if !(MIN_SQRT_PRICE..=MAX_SQRT_PRICE).contains(&sqrt_price) {
        return Err(SQRT_PRICE_OUT_OF_BOUNDS);
    }

    let msb: u32 = 128 - sqrt_price.leading_zeros() - 1;
    let log2p_integer_x32 = (msb as i128 - 64) << 32;

    let mut bit: i128 = 0x8000_0000_0000_0000i128;
    let mut precision = 0;
    let mut log2p_fraction_x64: i128 = 0;

    // Normalize into the [1, 2) mantissa range before extracting fraction bits.
    let mut r = if msb >= 64 { sqrt_price >> (msb - 63) } else { sqrt_price << (63 - msb) };

    while bit > 0 && precision < BIT_PRECISION {
        r *= r;
        let is_r_more_than_two = r >> 127;
        r >>= 63 + is_r_more_than_two;
        log2p_fraction_x64 += bit * is_r_more_than_two as i128;
        bit >>= 1;
        precision += 1;
    }

    let log2p_fraction_x32 = log2p_fraction_x64 >> 32;
    let log2p_x32 = log2p_integer_x32 + log2p_fraction_x32;
    let log_sqrt_10001_x64 = log2p_x32 * LOG_B_2_X32;

    // The fixed-point log leaves at most two candidates; pick the greater one
    // whose sqrt price does not exceed the input.
    let tick_low = ((log_sqrt_10001_x64 - LOG_B_P_ERR_MARGIN_LOWER_X64) >> 64) as i32;
    let tick_high = ((log_sqrt_10001_x64 + LOG_B_P_ERR_MARGIN_UPPER_X64) >> 64) as i32;

    if tick_low == tick_high {
        Ok(tick_low)
    } else if tick_index_to_sqrt_price(tick_high)? <= sqrt_price {
        Ok(tick_high)
    } else {
        Ok(tick_low)
    }
}

/// Returns the start tick index of the tick array that contains the given
/// tick index, rounding toward negative infinity.
pub fn tick_array_start_tick_index(tick_index: i32, tick_spacing: u16) -> i32 {
    let ticks_per_array = tick_spacing as i32 * TICK_ARRAY_SIZE as i32;
    tick_index.div_euclid(ticks_per_array) * ticks_per_array
}

/// Returns true if the tick index lies within the supported tick range.
pub fn is_tick_index_in_bounds(tick_index: i32) -> bool {
    (MIN_TICK_INDEX..=MAX_TICK_INDEX).contains(&tick_index)
}
