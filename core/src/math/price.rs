//
// Copyright (c) Tidepool Labs
//
// Licensed under the Apache License, Version 2.0.
// See the LICENSE file in the project root for license information.
//

use crate::{sqrt_price_to_tick_index, tick_index_to_sqrt_price, CoreError};

const Q64_RESOLUTION: f64 = 18446744073709551616.0;

/// Converts a Q64.64 sqrt price to a decimal b/a price, adjusted for the
/// token mints' decimal places.
pub fn sqrt_price_to_price(sqrt_price: u128, decimals_a: u8, decimals_b: u8) -> f64 {
    let power = libm::pow(10.0, decimals_a as f64 - decimals_b as f64);
    let sqrt_price_f = sqrt_price as f64 / Q64_RESOLUTION;
    sqrt_price_f * sqrt_price_f * power
}

/// Converts a decimal b/a price to a Q64.64 sqrt price, adjusted for the
/// token mints' decimal places.
pub fn price_to_sqrt_price(price: f64, decimals_a: u8, decimals_b: u8) -> u128 {
    let power = libm::pow(10.0, decimals_a as f64 - decimals_b as f64);
    (libm::sqrt(price / power) * Q64_RESOLUTION) as u128
}

/// Decimal price at the given tick index.
pub fn tick_index_to_price(tick_index: i32, decimals_a: u8, decimals_b: u8) -> Result<f64, CoreError> {
    Ok(sqrt_price_to_price(tick_index_to_sqrt_price(tick_index)?, decimals_a, decimals_b))
}

/// Greatest tick index whose price does not exceed the given decimal price.
pub fn price_to_tick_index(price: f64, decimals_a: u8, decimals_b: u8) -> Result<i32, CoreError> {
    sqrt_price_to_tick_index(price_to_sqrt_price(price, decimals_a, decimals_b))
}
