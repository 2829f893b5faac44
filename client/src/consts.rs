//
// Copyright (c) Tidepool Labs
//
// Licensed under the Apache License, Version 2.0.
// See the LICENSE file in the project root for license information.
//

use solana_pubkey::Pubkey;

/// The on-chain CLMM program this client targets.
pub const TIDEPOOL_CLMM_ID: Pubkey = Pubkey::from_str_const("CAMMCzo5YL8w4VFF8KVHrK22GGUsp5VTaW7grrKgrWqK");

pub const TICK_ARRAY_SEED: &str = "tick_array";

pub const TICK_ARRAY_BITMAP_EXTENSION_SEED: &str = "pool_tick_array_bitmap_extension";
