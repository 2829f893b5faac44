//
// Copyright (c) Tidepool Labs
//
// Licensed under the Apache License, Version 2.0.
// See the LICENSE file in the project root for license information.
//

use solana_program::program_error::ProgramError;
use solana_pubkey::Pubkey;

use crate::{TICK_ARRAY_BITMAP_EXTENSION_SEED, TIDEPOOL_CLMM_ID};

pub fn get_tick_array_bitmap_extension_address(pool: &Pubkey) -> Result<(Pubkey, u8), ProgramError> {
    let seeds = &[TICK_ARRAY_BITMAP_EXTENSION_SEED.as_bytes(), pool.as_ref()];
    Pubkey::try_find_program_address(seeds, &TIDEPOOL_CLMM_ID).ok_or(ProgramError::InvalidSeeds)
}
