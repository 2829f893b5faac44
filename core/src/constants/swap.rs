//
// Copyright (c) Tidepool Labs
//
// Licensed under the Apache License, Version 2.0.
// See the LICENSE file in the project root for license information.
//

/// Fee rates are expressed in hundredths of a basis point: rate / 1_000_000.
pub const FEE_RATE_MUL_VALUE: u32 = 1_000_000;

/// Sqrt price of the minimum tick index, Q64.64.
pub const MIN_SQRT_PRICE: u128 = 281477621742250;

/// Sqrt price of the maximum tick index, Q64.64.
pub const MAX_SQRT_PRICE: u128 = 1208914459397188474801737;
