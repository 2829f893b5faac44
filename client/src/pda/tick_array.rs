//
// Copyright (c) Tidepool Labs
//
// Licensed under the Apache License, Version 2.0.
// See the LICENSE file in the project root for license information.
//

use solana_program::program_error::ProgramError;
use solana_pubkey::Pubkey;

use crate::{TICK_ARRAY_SEED, TIDEPOOL_CLMM_ID};

/// Derives the tick array account for a pool. The start tick index is
/// seeded in big-endian form.
pub fn get_tick_array_address(pool: &Pubkey, start_tick_index: i32) -> Result<(Pubkey, u8), ProgramError> {
    let start_tick_index_bytes = start_tick_index.to_be_bytes();
    let seeds = &[TICK_ARRAY_SEED.as_bytes(), pool.as_ref(), start_tick_index_bytes.as_ref()];
    Pubkey::try_find_program_address(seeds, &TIDEPOOL_CLMM_ID).ok_or(ProgramError::InvalidSeeds)
}
