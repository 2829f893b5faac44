//
// Copyright (c) Tidepool Labs
//
// Licensed under the Apache License, Version 2.0.
// See the LICENSE file in the project root for license information.
//

/// Number of 64-bit words in the pool's own tick array bitmap.
pub const POOL_TICK_ARRAY_BITMAP_SIZE: usize = 16;

/// Word groups per side of the tick array bitmap extension.
pub const TICK_ARRAY_BITMAP_EXTENSION_GROUPS: usize = 14;

/// 64-bit words per extension word group.
pub const TICK_ARRAY_BITMAP_GROUP_SIZE: usize = 8;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub struct ClmmPoolFacade {
    pub tick_spacing: u16,
    pub fee_rate: u32,
    pub liquidity: u128,
    pub sqrt_price: u128,
    pub tick_current_index: i32,
    pub tick_array_bitmap: [u64; POOL_TICK_ARRAY_BITMAP_SIZE],
}

/// Overflow bitmap for tick arrays whose segment offset does not fit in the
/// pool's own 1024-bit bitmap. Negative groups cover offsets below the core
/// window, positive groups above it.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub struct TickArrayBitmapExtensionFacade {
    pub negative_tick_array_bitmap: [[u64; TICK_ARRAY_BITMAP_GROUP_SIZE]; TICK_ARRAY_BITMAP_EXTENSION_GROUPS],
    pub positive_tick_array_bitmap: [[u64; TICK_ARRAY_BITMAP_GROUP_SIZE]; TICK_ARRAY_BITMAP_EXTENSION_GROUPS],
}
