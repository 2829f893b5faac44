//
// Copyright (c) Tidepool Labs
//
// Licensed under the Apache License, Version 2.0.
// See the LICENSE file in the project root for license information.
//

pub type CoreError = &'static str;

pub const TICK_INDEX_OUT_OF_BOUNDS: CoreError = "Tick index out of bounds";

pub const ARITHMETIC_OVERFLOW: CoreError = "Arithmetic over- or underflow";

pub const AMOUNT_EXCEEDS_MAX_U64: CoreError = "Amount exceeds max u64";

pub const SQRT_PRICE_OUT_OF_BOUNDS: CoreError = "Sqrt price out of bounds";

pub const SQRT_PRICE_LIMIT_OUT_OF_BOUNDS: CoreError = "Sqrt price limit out of bounds";

pub const INVALID_SQRT_PRICE_LIMIT_DIRECTION: CoreError = "Invalid sqrt price limit direction";

pub const ZERO_TRADABLE_AMOUNT: CoreError = "Zero tradable amount";

pub const INVALID_SLIPPAGE_TOLERANCE: CoreError = "Invalid slippage tolerance";

pub const ACCOUNT_LACK: CoreError = "Required tick array is missing from the cache";

pub const INVALID_TICK_ARRAY: CoreError = "No initialized tick array in the swap direction";

pub const INVALID_TICK_ARRAY_BITMAP: CoreError = "Tick array start index not representable in the bitmap";
